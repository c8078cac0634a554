use anyhow::Result;
use futures::Future;
use once_cell::sync::Lazy;

pub use crate::client::*;

use tollbooth_api::{config::Config, run_server, Server};
use tollbooth_auth::ProviderKind;

pub struct TestApp {
    /// A client set to the base url of the server.
    pub client: TestClient,
    pub address: String,
    pub base_url: String,
}

async fn start_app(config: Config) -> Result<TestApp> {
    Lazy::force(&tollbooth_test::TRACING);
    let Server { server, host, port } = run_server(config).await?;

    tokio::task::spawn(server);

    let base_url = format!("http://{}:{}", host, port);
    let client = TestClient {
        base: base_url.clone(),
        client: reqwest::ClientBuilder::new()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Building client"),
    };

    Ok(TestApp {
        client,
        address: format!("{}:{}", host, port),
        base_url,
    })
}

pub async fn run_app_test<F, R>(f: F)
where
    F: FnOnce(TestApp) -> R,
    R: Future<Output = Result<(), anyhow::Error>>,
{
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 0, // Bind to a random port
        env: "test".to_string(),
        auth_providers: vec![ProviderKind::Custom, ProviderKind::Auth0],
        honeycomb_team: None,
        honeycomb_dataset: String::new(),
    };

    let app = start_app(config).await.expect("Starting app");
    f(app).await.unwrap();
}
