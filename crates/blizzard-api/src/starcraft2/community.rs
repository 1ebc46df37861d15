//! StarCraft II community endpoints
//!
//! `region_id` here is the in-game regional server (1 = US, 2 = EU,
//! 3 = KO/TW, 5 = CN), distinct from the [`Region`] routing the request.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::Result;
use crate::params::QueryParams;
use crate::region::{Locale, Region};

/// StarCraft II Community API client
#[derive(Debug)]
pub struct Starcraft2CommunityApi {
    client: Arc<ApiClient>,
}

impl Starcraft2CommunityApi {
    /// Create the community client on a shared [`ApiClient`]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn locale_params(locale: Locale) -> QueryParams {
        QueryParams::new().with("locale", locale)
    }

    /// Static profile data for the given regional server
    pub async fn get_static(
        &self,
        region: Region,
        locale: Locale,
        region_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/sc2/static/profile/{region_id}"),
                region,
                Self::locale_params(locale),
            )
            .await
    }

    /// Metadata for the given profile
    pub async fn get_metadata(
        &self,
        region: Region,
        locale: Locale,
        region_id: u32,
        realm_id: u32,
        profile_id: u64,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/sc2/metadata/profile/{region_id}/{realm_id}/{profile_id}"),
                region,
                Self::locale_params(locale),
            )
            .await
    }

    /// The given profile, with optional extra filters
    pub async fn get_profile(
        &self,
        region: Region,
        locale: Locale,
        region_id: u32,
        realm_id: u32,
        profile_id: u64,
        filters: QueryParams,
    ) -> Result<Value> {
        let params = filters.with("locale", locale);
        self.client
            .get_resource(
                &format!("/sc2/profile/{region_id}/{realm_id}/{profile_id}"),
                region,
                params,
            )
            .await
    }

    /// Ladder summary for the given profile
    pub async fn get_ladder_summary(
        &self,
        region: Region,
        locale: Locale,
        region_id: u32,
        realm_id: u32,
        profile_id: u64,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/sc2/profile/{region_id}/{realm_id}/{profile_id}/ladder/summary"),
                region,
                Self::locale_params(locale),
            )
            .await
    }

    /// A specific ladder for the given profile
    pub async fn get_ladder(
        &self,
        region: Region,
        locale: Locale,
        region_id: u32,
        realm_id: u32,
        profile_id: u64,
        ladder_id: u64,
        filters: QueryParams,
    ) -> Result<Value> {
        let params = filters.with("locale", locale);
        self.client
            .get_resource(
                &format!("/sc2/profile/{region_id}/{realm_id}/{profile_id}/ladder/{ladder_id}"),
                region,
                params,
            )
            .await
    }

    /// Grandmaster leaderboard for the given regional server
    pub async fn get_grandmaster_leaderboard(
        &self,
        region: Region,
        locale: Locale,
        region_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/sc2/ladder/grandmaster/{region_id}"),
                region,
                Self::locale_params(locale),
            )
            .await
    }

    /// Current season for the given regional server
    pub async fn get_season(
        &self,
        region: Region,
        locale: Locale,
        region_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/sc2/ladder/season/{region_id}"),
                region,
                Self::locale_params(locale),
            )
            .await
    }

    /// Metadata for all profiles tied to the given Battle.net account
    pub async fn get_player(
        &self,
        region: Region,
        locale: Locale,
        account_id: u64,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/sc2/player/{account_id}"),
                region,
                Self::locale_params(locale),
            )
            .await
    }
}
