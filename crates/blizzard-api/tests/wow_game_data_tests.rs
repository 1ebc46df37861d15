//! Endpoint and namespace assertions for the WoW game data API

mod common;

use blizzard_api::{Locale, Region};
use common::{TEST_TOKEN, api};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_ok(server: &MockServer, resource: &str, namespace: &str) {
    Mock::given(method("GET"))
        .and(path(resource))
        .and(query_param("namespace", namespace))
        .and(query_param("locale", "en_US"))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_get_achievement_index() {
    let server = MockServer::start().await;
    let api = api(&server).await;

    mount_ok(&server, "/data/wow/achievement/index", "static-us").await;
    api.wow
        .game_data
        .get_achievement_index(Region::US, Locale::EnUs)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_achievement_media() {
    let server = MockServer::start().await;
    let api = api(&server).await;

    mount_ok(&server, "/data/wow/media/achievement/6", "static-us").await;
    api.wow
        .game_data
        .get_achievement_media(Region::US, Locale::EnUs, 6)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_item_classic_namespace() {
    let server = MockServer::start().await;
    let api = api(&server).await;

    mount_ok(&server, "/data/wow/item/19019", "static-classic-us").await;
    api.wow
        .game_data
        .get_item(Region::US, Locale::EnUs, 19_019, true)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_item_retail_namespace() {
    let server = MockServer::start().await;
    let api = api(&server).await;

    mount_ok(&server, "/data/wow/item/19019", "static-us").await;
    api.wow
        .game_data
        .get_item(Region::US, Locale::EnUs, 19_019, false)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_mythic_keystone_dungeons_index_is_dynamic() {
    let server = MockServer::start().await;
    let api = api(&server).await;

    mount_ok(&server, "/data/wow/mythic-keystone/dungeon/index", "dynamic-us").await;
    api.wow
        .game_data
        .get_mythic_keystone_dungeons_index(Region::US, Locale::EnUs)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_realms_index_classic() {
    let server = MockServer::start().await;
    let api = api(&server).await;

    mount_ok(&server, "/data/wow/realm/index", "dynamic-classic-eu").await;
    api.wow
        .game_data
        .get_realms_index(Region::EU, Locale::EnUs, true)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_auction_house_index_uses_classic_namespace() {
    let server = MockServer::start().await;
    let api = api(&server).await;

    mount_ok(
        &server,
        "/data/wow/connected-realm/4372/auctions/index",
        "dynamic-classic-us",
    )
    .await;
    api.wow
        .game_data
        .get_auction_house_index(Region::US, Locale::EnUs, 4372)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_auctions() {
    let server = MockServer::start().await;
    let api = api(&server).await;

    mount_ok(&server, "/data/wow/connected-realm/1146/auctions", "dynamic-us").await;
    api.wow
        .game_data
        .get_auctions(Region::US, Locale::EnUs, 1146)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_mythic_keystone_leaderboard_path() {
    let server = MockServer::start().await;
    let api = api(&server).await;

    mount_ok(
        &server,
        "/data/wow/connected-realm/11/mythic-leaderboard/197/period/641",
        "dynamic-us",
    )
    .await;
    api.wow
        .game_data
        .get_mythic_keystone_leaderboard(Region::US, Locale::EnUs, 11, 197, 641)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_token_index() {
    let server = MockServer::start().await;
    let api = api(&server).await;

    mount_ok(&server, "/data/wow/token/index", "dynamic-us").await;
    api.wow
        .game_data
        .get_token_index(Region::US, Locale::EnUs, false)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_profession_skill_tier() {
    let server = MockServer::start().await;
    let api = api(&server).await;

    mount_ok(&server, "/data/wow/profession/164/skill-tier/2477", "static-us").await;
    api.wow
        .game_data
        .get_profession_skill_tier(Region::US, Locale::EnUs, 164, 2477)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_pvp_leaderboard_bracket_path() {
    let server = MockServer::start().await;
    let api = api(&server).await;

    mount_ok(
        &server,
        "/data/wow/pvp-season/27/pvp-leaderboard/3v3",
        "dynamic-eu",
    )
    .await;
    api.wow
        .game_data
        .get_pvp_leaderboard(Region::EU, Locale::EnUs, 27, "3v3")
        .await
        .unwrap();
}
