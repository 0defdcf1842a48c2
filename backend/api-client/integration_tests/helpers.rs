use api_client::{ApiClient, BearerAuthenticator};

use common::RedactedSecret;

use wiremock::MockServer;

pub const TEST_TOKEN: &str = "integration-test-token";

pub async fn start_server() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(&server.uri())
        .expect("mock server URI is a valid base URL")
        .with_authenticator(BearerAuthenticator::new(RedactedSecret::new(TEST_TOKEN)));
    (server, client)
}

pub fn bearer() -> String {
    format!("Bearer {TEST_TOKEN}")
}
