//! Endpoint assertions for the Battle.net OAuth API

mod common;

use blizzard_api::Region;
use common::api;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_user_info() {
    let server = MockServer::start().await;
    let api = api(&server).await;

    Mock::given(method("GET"))
        .and(path("/oauth/userinfo"))
        .and(query_param("access_token", "user-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 1, "battletag": "user#1234"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let info = api
        .battlenet
        .oauth
        .get_user_info(Region::US, "user-token")
        .await
        .unwrap();

    assert_eq!(info["battletag"], json!("user#1234"));
}
