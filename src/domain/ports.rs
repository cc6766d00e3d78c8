use crate::domain::model::{Container, Guide};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn server_url(&self) -> &str;
    fn guide_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn container_id(&self) -> &str;
}

#[async_trait]
pub trait GuidePipeline: Send + Sync {
    async fn fetch(&self) -> Result<Guide>;
    fn render(&self, guide: &Guide, container: &mut Container);
    async fn publish(&self, container: &Container) -> Result<String>;
}
