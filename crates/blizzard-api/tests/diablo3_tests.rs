//! Endpoint assertions for the Diablo III APIs

mod common;

use blizzard_api::{Locale, Region};
use common::api;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_act_index() {
    let server = MockServer::start().await;
    let api = api(&server).await;

    Mock::given(method("GET"))
        .and(path("/d3/data/act"))
        .and(query_param("locale", "en_US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    api.diablo3
        .community
        .get_act_index(Region::US, Locale::EnUs)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_recipe_path() {
    let server = MockServer::start().await;
    let api = api(&server).await;

    Mock::given(method("GET"))
        .and(path("/d3/data/artisan/blacksmith/recipe/apprentice-flamberge"))
        .and(query_param("locale", "en_US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    api.diablo3
        .community
        .get_recipe(Region::US, Locale::EnUs, "blacksmith", "apprentice-flamberge")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_api_hero_path() {
    let server = MockServer::start().await;
    let api = api(&server).await;

    Mock::given(method("GET"))
        .and(path("/d3/profile/user-1234/hero/94825371"))
        .and(query_param("locale", "en_US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    api.diablo3
        .community
        .get_api_hero(Region::US, Locale::EnUs, "user-1234", 94_825_371)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_season_index_sends_no_locale() {
    let server = MockServer::start().await;
    let api = api(&server).await;

    Mock::given(method("GET"))
        .and(path("/data/d3/season/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    api.diablo3
        .game_data
        .get_season_index(Region::US)
        .await
        .unwrap();

    for request in server.received_requests().await.unwrap() {
        if request.url.path() == "/data/d3/season/" {
            assert!(request.url.query().is_none(), "season index takes no params");
        }
    }
}

#[tokio::test]
async fn test_get_season_leaderboard_path() {
    let server = MockServer::start().await;
    let api = api(&server).await;

    Mock::given(method("GET"))
        .and(path("/data/d3/season/16/leaderboard/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    api.diablo3
        .game_data
        .get_season_leaderboard(Region::US, 16, 3)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_era_leaderboard_path() {
    let server = MockServer::start().await;
    let api = api(&server).await;

    Mock::given(method("GET"))
        .and(path("/data/d3/era/5/leaderboard/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    api.diablo3
        .game_data
        .get_era_leaderboard(Region::US, 5, 1)
        .await
        .unwrap();
}
