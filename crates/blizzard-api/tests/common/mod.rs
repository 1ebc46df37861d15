//! Shared fixtures for the wiremock-backed integration tests

// Helpers are shared across independently compiled test binaries
#![allow(dead_code)]

use std::sync::Arc;

use blizzard_api::{ApiClient, BlizzardApi};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token value handed out by the mounted token endpoints
pub const TEST_TOKEN: &str = "test-access-token";

/// Build a client whose API and OAuth bases both point at the mock server
pub fn client(server: &MockServer) -> ApiClient {
    ApiClient::builder("client_id", "client_secret")
        .api_base(server.uri())
        .oauth_base(server.uri())
        .build()
        .expect("mock server URI should be a valid base")
}

/// Mount a token endpoint that must be called exactly `expected_calls` times
pub async fn mount_token_endpoint(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TEST_TOKEN,
            "token_type": "bearer",
            "expires_in": 86_399,
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Full client against the mock server, with a working token endpoint
/// mounted without call-count expectations
pub async fn api(server: &MockServer) -> BlizzardApi {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TEST_TOKEN,
            "token_type": "bearer",
            "expires_in": 86_399,
        })))
        .mount(server)
        .await;

    BlizzardApi::with_api_client(Arc::new(client(server)))
}
