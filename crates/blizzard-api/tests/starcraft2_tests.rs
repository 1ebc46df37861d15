//! Endpoint assertions for the StarCraft II APIs

mod common;

use blizzard_api::{Locale, QueryParams, Region};
use common::api;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_profile_path() {
    let server = MockServer::start().await;
    let api = api(&server).await;

    Mock::given(method("GET"))
        .and(path("/sc2/profile/1/1/12345"))
        .and(query_param("locale", "en_US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    api.starcraft2
        .community
        .get_profile(Region::US, Locale::EnUs, 1, 1, 12_345, QueryParams::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_grandmaster_leaderboard_path() {
    let server = MockServer::start().await;
    let api = api(&server).await;

    Mock::given(method("GET"))
        .and(path("/sc2/ladder/grandmaster/2"))
        .and(query_param("locale", "en_US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    api.starcraft2
        .community
        .get_grandmaster_leaderboard(Region::EU, Locale::EnUs, 2)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_player_path() {
    let server = MockServer::start().await;
    let api = api(&server).await;

    Mock::given(method("GET"))
        .and(path("/sc2/player/1234567890"))
        .and(query_param("locale", "en_US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    api.starcraft2
        .community
        .get_player(Region::US, Locale::EnUs, 1_234_567_890)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_league_data_sends_no_locale() {
    let server = MockServer::start().await;
    let api = api(&server).await;

    Mock::given(method("GET"))
        .and(path("/data/sc2/league/37/201/0/6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    api.starcraft2
        .game_data
        .get_league_data(Region::US, 37, 201, 0, 6)
        .await
        .unwrap();

    for request in server.received_requests().await.unwrap() {
        if request.url.path().starts_with("/data/sc2/league/") {
            assert!(request.url.query().is_none());
        }
    }
}
