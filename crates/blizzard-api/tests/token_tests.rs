//! Token acquisition and caching behavior

mod common;

use blizzard_api::{Error, QueryParams, Region};
use common::{TEST_TOKEN, client, mount_token_endpoint};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{basic_auth, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_token_request_uses_basic_auth_and_grant_type() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(basic_auth("client_id", "client_secret"))
        .and(query_param("grant_type", "client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TEST_TOKEN,
            "token_type": "bearer",
            "expires_in": 86_399,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let token = client.request_token(Region::US).await.unwrap();

    assert_eq!(token.access_token, TEST_TOKEN);
    assert_eq!(token.token_type, "bearer");
    assert_eq!(token.expires_in, 86_399);
}

#[tokio::test]
async fn test_ensure_valid_token_performs_at_most_one_call() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;

    let client = client(&server);
    let first = client.ensure_valid_token(Region::US).await.unwrap();
    let second = client.ensure_valid_token(Region::US).await.unwrap();

    assert_eq!(first, TEST_TOKEN);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_token_cached_across_resource_requests() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/data/wow/mount/index"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);
    for _ in 0..2 {
        client
            .get_resource("/data/wow/mount/index", Region::US, QueryParams::new())
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_expired_token_is_reacquired() {
    let server = MockServer::start().await;

    // expires_in of zero lands inside the refresh margin immediately
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TEST_TOKEN,
            "token_type": "bearer",
            "expires_in": 0,
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);
    client.ensure_valid_token(Region::US).await.unwrap();
    client.ensure_valid_token(Region::US).await.unwrap();
}

#[tokio::test]
async fn test_token_error_carries_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "invalid_client"})),
        )
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client.request_token(Region::EU).await.unwrap_err();

    match err {
        Error::Token(token_err) => {
            assert_eq!(token_err.region, Region::EU);
            assert_eq!(token_err.status, Some(401));
            assert!(token_err.body.unwrap().contains("invalid_client"));
        }
        other => panic!("expected token error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_resource_request_fails_when_token_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    // The resource endpoint must never be reached without a token
    Mock::given(method("GET"))
        .and(path("/data/wow/mount/index"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client
        .get_resource("/data/wow/mount/index", Region::US, QueryParams::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Token(_)));
}
