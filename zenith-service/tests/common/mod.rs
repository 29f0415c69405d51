#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;
use zenith_service::config::ZenithConfig;
use zenith_service::startup::Application;

pub const TEST_DATASET: &str = "\
country_code,country,emergency,primary,secondary
IN,India,112,Tele-MANAS 14416,KIRAN 1800-599-0019
GB,United Kingdom,999,Samaritans 116 123,Shout 85258
";

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
    // Held so the dataset outlives the server.
    _dataset: NamedTempFile,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_dataset(TEST_DATASET).await
    }

    pub async fn spawn_with_dataset(dataset: &str) -> Self {
        let mut file = NamedTempFile::new().expect("Failed to create dataset file");
        file.write_all(dataset.as_bytes())
            .expect("Failed to write dataset file");

        let mut config = ZenithConfig::default();
        config.common.port = 0; // Random port for testing
        config.helplines_path = file.path().to_path_buf();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling ping endpoint
        let client = reqwest::Client::new();
        let ping_url = format!("{}/api/ping", address);
        for _ in 0..50 {
            if client.get(&ping_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
            _dataset: file,
        }
    }

    pub async fn post_chat(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/chatbot", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
