use crate::core::render;
use crate::core::{ConfigProvider, Container, Guide, GuidePipeline, Storage};
use crate::utils::error::{GuideError, Result};
use reqwest::Client;

pub struct HttpGuidePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> HttpGuidePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    // Absolute path from the server root is more reliable than a relative one.
    fn guide_url(&self) -> String {
        format!(
            "{}{}",
            self.config.server_url().trim_end_matches('/'),
            self.config.guide_path()
        )
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> GuidePipeline for HttpGuidePipeline<S, C> {
    async fn fetch(&self) -> Result<Guide> {
        let url = self.guide_url();
        tracing::debug!("Requesting guide from: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("Guide response status: {}", response.status());

        if !response.status().is_success() {
            return Err(GuideError::FetchError {
                status: response.status(),
            });
        }

        // Body is read as text first so a malformed payload surfaces as a
        // parse failure rather than a transport failure.
        let body = response.text().await?;
        let guide: Guide = serde_json::from_str(&body)?;

        Ok(guide)
    }

    fn render(&self, guide: &Guide, container: &mut Container) {
        render::render_guide(guide, container);
    }

    async fn publish(&self, container: &Container) -> Result<String> {
        let page = render::wrap_page(container);

        tracing::debug!("Writing rendered page ({} bytes) to storage", page.len());
        self.storage.write_file("guide.html", page.as_bytes()).await?;

        Ok(format!("{}/guide.html", self.config.output_path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        server_url: String,
        guide_path: String,
        output_path: String,
        container_id: String,
    }

    impl MockConfig {
        fn new(server_url: String) -> Self {
            Self {
                server_url,
                guide_path: "/output/hcim_guide.json".to_string(),
                output_path: "test_output".to_string(),
                container_id: "guide-container".to_string(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
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

    #[tokio::test]
    async fn test_fetch_successful_response() {
        let server = MockServer::start();
        let mock_data = serde_json::json!([
            {"title": "Start", "goal": "Survive", "inventory_setup": ["Axe"],
             "steps": [{"text": "Chop wood"}]}
        ]);

        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/output/hcim_guide.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(mock_data);
        });

        let storage = MockStorage::new();
        let config = MockConfig::new(server.url(""));
        let pipeline = HttpGuidePipeline::new(storage, config);

        let guide = pipeline.fetch().await.unwrap();

        api_mock.assert();
        assert_eq!(guide.len(), 1);
        assert_eq!(guide.0[0].title, "Start");
        assert_eq!(guide.0[0].inventory_setup, vec!["Axe".to_string()]);
        assert_eq!(guide.0[0].steps[0].text, "Chop wood");
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_fetch_error() {
        let server = MockServer::start();

        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/output/hcim_guide.json");
            then.status(404);
        });

        let storage = MockStorage::new();
        let config = MockConfig::new(server.url(""));
        let pipeline = HttpGuidePipeline::new(storage, config);

        let err = pipeline.fetch().await.unwrap_err();

        api_mock.assert();
        match err {
            GuideError::FetchError { status } => assert_eq!(status.as_u16(), 404),
            other => panic!("expected FetchError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_malformed_body_is_parse_error() {
        let server = MockServer::start();

        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/output/hcim_guide.json");
            then.status(200).body("not json");
        });

        let storage = MockStorage::new();
        let config = MockConfig::new(server.url(""));
        let pipeline = HttpGuidePipeline::new(storage, config);

        let err = pipeline.fetch().await.unwrap_err();

        api_mock.assert();
        assert!(matches!(err, GuideError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_fetch_empty_array_is_empty_guide() {
        let server = MockServer::start();

        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/output/hcim_guide.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([]));
        });

        let storage = MockStorage::new();
        let config = MockConfig::new(server.url(""));
        let pipeline = HttpGuidePipeline::new(storage, config);

        let guide = pipeline.fetch().await.unwrap();

        api_mock.assert();
        assert!(guide.is_empty());
    }

    #[tokio::test]
    async fn test_publish_writes_page_with_container_content() {
        let storage = MockStorage::new();
        let config = MockConfig::new("http://test.com".to_string());
        let pipeline = HttpGuidePipeline::new(storage.clone(), config);

        let mut container = Container::new("guide-container");
        container.set_content("<p>rendered</p>");

        let output_path = pipeline.publish(&container).await.unwrap();

        assert_eq!(output_path, "test_output/guide.html");

        let page = storage.get_file("guide.html").await.unwrap();
        let page = String::from_utf8(page).unwrap();
        assert!(page.contains("<div id=\"guide-container\"><p>rendered</p></div>"));
    }
}
