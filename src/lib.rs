pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::ViewerEngine, pipeline::HttpGuidePipeline};
pub use domain::model::{Container, Guide, Step, Trip};
pub use utils::error::{GuideError, Result};
