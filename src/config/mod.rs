pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_resource_path, validate_url, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "hcim-guide-viewer")]
#[command(about = "Fetches the generated HCIM guide and renders it as an HTML page")]
pub struct CliConfig {
    /// Root of the static file server hosting the generated guide.
    #[arg(long, default_value = "http://localhost:8000")]
    pub server_url: String,

    /// Guide document path, absolute from the server root.
    #[arg(long, default_value = "/output/hcim_guide.json")]
    pub guide_path: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Element id the guide is mounted under in the published page.
    #[arg(long, default_value = "guide-container")]
    pub container_id: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn server_url(&self) -> &str {
        &self.server_url
    }

    fn guide_path(&self) -> &str {
        &self.guide_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn container_id(&self) -> &str {
        &self.container_id
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("server_url", &self.server_url)?;
        validate_resource_path("guide_path", &self.guide_path)?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("container_id", &self.container_id)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> CliConfig {
        CliConfig {
            server_url: "http://localhost:8000".to_string(),
            guide_path: "/output/hcim_guide.json".to_string(),
            output_path: "./output".to_string(),
            container_id: "guide-container".to_string(),
            verbose: false,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(default_config().validate().is_ok());
    }

    #[test]
    fn test_relative_guide_path_is_rejected() {
        let mut config = default_config();
        config.guide_path = "output/hcim_guide.json".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_server_url_is_rejected() {
        let mut config = default_config();
        config.server_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }
}
