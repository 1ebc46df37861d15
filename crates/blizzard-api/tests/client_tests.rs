//! Request executor behavior: bearer attachment, the single 401
//! refresh-and-retry, and error payload propagation

mod common;

use blizzard_api::{Error, QueryParams, Region};
use common::{TEST_TOKEN, client, mount_token_endpoint};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_success_returns_body_unchanged() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;

    let body = json!({"id": 6, "name": "Mount Up", "points": 10});
    Mock::given(method("GET"))
        .and(path("/data/wow/achievement/6"))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}")))
        .and(query_param("namespace", "static-us"))
        .and(query_param("locale", "en_US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let params = QueryParams::new()
        .with("namespace", "static-us")
        .with("locale", "en_US");
    let result = client
        .get_resource("/data/wow/achievement/6", Region::US, params)
        .await
        .unwrap();

    assert_eq!(result, body);
}

#[tokio::test]
async fn test_unauthorized_triggers_exactly_one_refresh_and_retry() {
    let server = MockServer::start().await;
    // Initial acquisition plus the forced refresh
    mount_token_endpoint(&server, 2).await;

    // First GET is rejected, the retried GET succeeds
    Mock::given(method("GET"))
        .and(path("/data/wow/realm/index"))
        .respond_with(ResponseTemplate::new(401))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/wow/realm/index"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"realms": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let result = client
        .get_resource("/data/wow/realm/index", Region::US, QueryParams::new())
        .await
        .unwrap();

    assert_eq!(result, json!({"realms": []}));
}

#[tokio::test]
async fn test_persistent_unauthorized_fails_without_third_attempt() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 2).await;

    // expect(2) doubles as the no-third-attempt assertion
    Mock::given(method("GET"))
        .and(path("/data/wow/realm/index"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client
        .get_resource("/data/wow/realm/index", Region::US, QueryParams::new())
        .await
        .unwrap_err();

    let request_err = err.as_request().expect("expected a request error");
    assert_eq!(request_err.status, Some(401));
    assert!(!request_err.should_retry());
}

#[tokio::test]
async fn test_error_payload_and_retry_after_propagation() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/data/wow/token/index"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "30")
                .set_body_json(json!({"code": "ERR123", "detail": "bad"})),
        )
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client
        .get_resource("/data/wow/token/index", Region::US, QueryParams::new())
        .await
        .unwrap_err();

    let request_err = err.as_request().expect("expected a request error");
    assert_eq!(request_err.status, Some(429));
    assert_eq!(request_err.error_code.as_deref(), Some("ERR123"));
    assert_eq!(request_err.retry_after, Some(30));
    assert_eq!(
        request_err.error_details.as_ref().unwrap()["detail"],
        json!("bad")
    );
    assert!(request_err.is_rate_limited());
    assert!(request_err.should_retry());
    assert!(request_err.url.ends_with("/data/wow/token/index"));
}

#[tokio::test]
async fn test_numeric_error_code_is_stringified() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/data/wow/item/0"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"code": 404, "detail": "Not Found"})),
        )
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client
        .get_resource("/data/wow/item/0", Region::US, QueryParams::new())
        .await
        .unwrap_err();

    let request_err = err.as_request().expect("expected a request error");
    assert_eq!(request_err.error_code.as_deref(), Some("404"));
    assert!(!request_err.is_rate_limited());
    assert!(!request_err.should_retry());
}

#[tokio::test]
async fn test_server_error_with_non_json_body() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/data/wow/realm/index"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client
        .get_resource("/data/wow/realm/index", Region::US, QueryParams::new())
        .await
        .unwrap_err();

    let request_err = err.as_request().expect("expected a request error");
    assert_eq!(request_err.status, Some(503));
    assert_eq!(request_err.error_code, None);
    assert_eq!(request_err.error_details, None);
    assert!(request_err.should_retry());
}

#[tokio::test]
async fn test_oauth_resource_sends_no_bearer_and_skips_token_flow() {
    let server = MockServer::start().await;

    // No token endpoint mounted: the OAuth path must never need one
    Mock::given(method("GET"))
        .and(path("/oauth/userinfo"))
        .and(query_param("access_token", "user-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let params = QueryParams::new().with("access_token", "user-token");
    let result = client
        .get_oauth_resource("/oauth/userinfo", Region::US, params)
        .await
        .unwrap();
    assert_eq!(result, json!({"id": 1}));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(
        !requests[0].headers.contains_key("authorization"),
        "OAuth resources must not carry the client bearer token"
    );
}

#[tokio::test]
async fn test_unauthorized_oauth_resource_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/oauth/userinfo"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client
        .get_oauth_resource(
            "/oauth/userinfo",
            Region::US,
            QueryParams::new().with("access_token", "expired"),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Request(_)));
}
