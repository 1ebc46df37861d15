//! Diablo III community endpoints

use std::sync::Arc;

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::Result;
use crate::params::QueryParams;
use crate::region::{Locale, Region};

/// Diablo III Community API client
///
/// Covers static game data (acts, artisans, items) and account/hero
/// profiles. Account IDs are BattleTags with `#` replaced by `-`, e.g.
/// `user-1234`.
#[derive(Debug)]
pub struct Diablo3CommunityApi {
    client: Arc<ApiClient>,
}

impl Diablo3CommunityApi {
    /// Create the community client on a shared [`ApiClient`]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn locale_params(locale: Locale) -> QueryParams {
        QueryParams::new().with("locale", locale)
    }

    /// Index of acts
    pub async fn get_act_index(&self, region: Region, locale: Locale) -> Result<Value> {
        self.client
            .get_resource("/d3/data/act", region, Self::locale_params(locale))
            .await
    }

    /// A single act by ID
    pub async fn get_act(&self, region: Region, locale: Locale, act_id: u32) -> Result<Value> {
        self.client
            .get_resource(&format!("/d3/data/act/{act_id}"), region, Self::locale_params(locale))
            .await
    }

    /// A single artisan by slug
    pub async fn get_artisan(
        &self,
        region: Region,
        locale: Locale,
        artisan_slug: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/d3/data/artisan/{artisan_slug}"),
                region,
                Self::locale_params(locale),
            )
            .await
    }

    /// A single recipe by artisan and recipe slug
    pub async fn get_recipe(
        &self,
        region: Region,
        locale: Locale,
        artisan_slug: &str,
        recipe_slug: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/d3/data/artisan/{artisan_slug}/recipe/{recipe_slug}"),
                region,
                Self::locale_params(locale),
            )
            .await
    }

    /// A single follower by slug
    pub async fn get_follower(
        &self,
        region: Region,
        locale: Locale,
        follower_slug: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/d3/data/follower/{follower_slug}"),
                region,
                Self::locale_params(locale),
            )
            .await
    }

    /// A single character class by slug
    pub async fn get_character_class(
        &self,
        region: Region,
        locale: Locale,
        class_slug: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/d3/data/hero/{class_slug}"),
                region,
                Self::locale_params(locale),
            )
            .await
    }

    /// A single skill for the given character class
    pub async fn get_api_skill(
        &self,
        region: Region,
        locale: Locale,
        class_slug: &str,
        skill_slug: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/d3/data/hero/{class_slug}/skill/{skill_slug}"),
                region,
                Self::locale_params(locale),
            )
            .await
    }

    /// Index of item types
    pub async fn get_item_type_index(&self, region: Region, locale: Locale) -> Result<Value> {
        self.client
            .get_resource("/d3/data/item-type", region, Self::locale_params(locale))
            .await
    }

    /// A single item type by slug
    pub async fn get_item_type(
        &self,
        region: Region,
        locale: Locale,
        item_type_slug: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/d3/data/item-type/{item_type_slug}"),
                region,
                Self::locale_params(locale),
            )
            .await
    }

    /// A single item by slug-and-ID pair
    pub async fn get_item(
        &self,
        region: Region,
        locale: Locale,
        item_slug_id: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/d3/data/item/{item_slug_id}"),
                region,
                Self::locale_params(locale),
            )
            .await
    }

    /// The profile of the given account
    pub async fn get_api_account(
        &self,
        region: Region,
        locale: Locale,
        account_id: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/d3/profile/{account_id}/"),
                region,
                Self::locale_params(locale),
            )
            .await
    }

    /// A single hero on the given account
    pub async fn get_api_hero(
        &self,
        region: Region,
        locale: Locale,
        account_id: &str,
        hero_id: u64,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/d3/profile/{account_id}/hero/{hero_id}"),
                region,
                Self::locale_params(locale),
            )
            .await
    }

    /// Detailed item data for the given hero
    pub async fn get_api_detailed_hero_items(
        &self,
        region: Region,
        locale: Locale,
        account_id: &str,
        hero_id: u64,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/d3/profile/{account_id}/hero/{hero_id}/items"),
                region,
                Self::locale_params(locale),
            )
            .await
    }

    /// Detailed follower item data for the given hero
    pub async fn get_api_detailed_follower_items(
        &self,
        region: Region,
        locale: Locale,
        account_id: &str,
        hero_id: u64,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/d3/profile/{account_id}/hero/{hero_id}/follower-items"),
                region,
                Self::locale_params(locale),
            )
            .await
    }
}
