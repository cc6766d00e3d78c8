use clap::Parser;
use hcim_guide_viewer::utils::{logger, validation::Validate};
use hcim_guide_viewer::{CliConfig, Container, HttpGuidePipeline, LocalStorage, ViewerEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting hcim-guide-viewer");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let container = Container::new(config.container_id.clone());
    let pipeline = HttpGuidePipeline::new(storage, config);

    let mut engine = ViewerEngine::new(pipeline, container);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Guide rendered successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Failed to publish the rendered guide: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
