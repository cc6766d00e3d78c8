use crate::core::render::LOAD_ERROR_MESSAGE;
use crate::core::{Container, GuidePipeline};
use crate::utils::error::Result;

pub struct ViewerEngine<P: GuidePipeline> {
    pipeline: P,
    container: Container,
}

impl<P: GuidePipeline> ViewerEngine<P> {
    pub fn new(pipeline: P, container: Container) -> Self {
        Self {
            pipeline,
            container,
        }
    }

    /// Runs the fetch-then-render chain once. Fetch and parse failures are
    /// collapsed into one generic container message; only a publish failure
    /// propagates as an error.
    pub async fn run(&mut self) -> Result<String> {
        match self.pipeline.fetch().await {
            Ok(guide) => {
                tracing::info!("Fetched guide with {} trips", guide.len());
                self.container.clear();
                self.pipeline.render(&guide, &mut self.container);
            }
            Err(e) => {
                tracing::error!("Error fetching the guide: {}", e);
                self.container.set_content(LOAD_ERROR_MESSAGE);
            }
        }

        let output_path = self.pipeline.publish(&self.container).await?;
        tracing::info!("Rendered guide saved to: {}", output_path);

        Ok(output_path)
    }

    pub fn container(&self) -> &Container {
        &self.container
    }
}
