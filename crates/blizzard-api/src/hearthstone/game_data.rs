//! Hearthstone game data endpoints
//!
//! The card and card-back searches accept arbitrary server-side filters
//! (mana cost, rarity, page size, ...) which callers pass through as extra
//! [`QueryParams`].

use std::sync::Arc;

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::Result;
use crate::params::QueryParams;
use crate::region::{Locale, Region};

/// Hearthstone Game Data API client
#[derive(Debug)]
pub struct HearthstoneGameDataApi {
    client: Arc<ApiClient>,
}

impl HearthstoneGameDataApi {
    /// Create the game data client on a shared [`ApiClient`]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Search cards matching the given class and extra filters
    pub async fn search_cards(
        &self,
        region: Region,
        locale: Locale,
        card_class: Option<&str>,
        filters: QueryParams,
    ) -> Result<Value> {
        let mut params = filters.with("locale", locale);
        if let Some(card_class) = card_class {
            params.insert("class", card_class);
        }
        self.client
            .get_resource("/hearthstone/cards", region, params)
            .await
    }

    /// A single card by ID or slug
    ///
    /// `game_mode` defaults to `constructed` when not given.
    pub async fn get_card(
        &self,
        region: Region,
        locale: Locale,
        id_or_slug: &str,
        game_mode: Option<&str>,
    ) -> Result<Value> {
        let params = QueryParams::new()
            .with("locale", locale)
            .with("game_mode", game_mode.unwrap_or("constructed"));
        self.client
            .get_resource(&format!("/hearthstone/cards/{id_or_slug}"), region, params)
            .await
    }

    /// Search card backs matching the given filters
    pub async fn search_card_backs(
        &self,
        region: Region,
        locale: Locale,
        filters: QueryParams,
    ) -> Result<Value> {
        let params = filters.with("locale", locale);
        self.client
            .get_resource("/hearthstone/cardbacks", region, params)
            .await
    }

    /// A single card back by ID or slug
    pub async fn get_card_back(
        &self,
        region: Region,
        locale: Locale,
        id_or_slug: &str,
    ) -> Result<Value> {
        let params = QueryParams::new().with("locale", locale);
        self.client
            .get_resource(&format!("/hearthstone/cardbacks/{id_or_slug}"), region, params)
            .await
    }

    /// A deck by code, or by card list and hero
    ///
    /// Pass either a `code` filter or `ids` (and optionally `hero`).
    pub async fn get_deck(
        &self,
        region: Region,
        locale: Locale,
        filters: QueryParams,
    ) -> Result<Value> {
        let params = filters.with("locale", locale);
        self.client
            .get_resource("/hearthstone/deck", region, params)
            .await
    }

    /// All metadata (sets, types, rarities, classes, ...)
    pub async fn get_metadata(&self, region: Region, locale: Locale) -> Result<Value> {
        let params = QueryParams::new().with("locale", locale);
        self.client
            .get_resource("/hearthstone/metadata", region, params)
            .await
    }

    /// One metadata category, e.g. `sets` or `rarities`
    pub async fn get_metadata_type(
        &self,
        region: Region,
        locale: Locale,
        type_id: &str,
    ) -> Result<Value> {
        let params = QueryParams::new().with("locale", locale);
        self.client
            .get_resource(&format!("/hearthstone/metadata/{type_id}"), region, params)
            .await
    }
}
