/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for switcheo-adapter tests

use switcheo_adapter::{ClientConfig, HttpClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client whose effective base URL is `{server}/v2`
#[allow(dead_code)]
pub fn mock_client(server: &MockServer) -> HttpClient {
    let config = ClientConfig::default().with_base_url(format!("{}/", server.uri()));
    HttpClient::with_config(config).expect("client init")
}
