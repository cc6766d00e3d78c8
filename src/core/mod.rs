pub mod engine;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{Container, Guide};
pub use crate::domain::ports::{ConfigProvider, GuidePipeline, Storage};
pub use crate::utils::error::Result;
