//! Diablo III game data endpoints
//!
//! Seasons and eras carry no locale; the payloads are identifiers and
//! leaderboard references only.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::Result;
use crate::params::QueryParams;
use crate::region::Region;

/// Diablo III Game Data API client
#[derive(Debug)]
pub struct Diablo3GameDataApi {
    client: Arc<ApiClient>,
}

impl Diablo3GameDataApi {
    /// Create the game data client on a shared [`ApiClient`]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Index of available seasons
    pub async fn get_season_index(&self, region: Region) -> Result<Value> {
        self.client
            .get_resource("/data/d3/season/", region, QueryParams::new())
            .await
    }

    /// A single season by ID
    pub async fn get_season(&self, region: Region, season_id: u32) -> Result<Value> {
        self.client
            .get_resource(&format!("/data/d3/season/{season_id}"), region, QueryParams::new())
            .await
    }

    /// A leaderboard for the given season
    pub async fn get_season_leaderboard(
        &self,
        region: Region,
        season_id: u32,
        leaderboard_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/d3/season/{season_id}/leaderboard/{leaderboard_id}"),
                region,
                QueryParams::new(),
            )
            .await
    }

    /// Index of available eras
    pub async fn get_era_index(&self, region: Region) -> Result<Value> {
        self.client
            .get_resource("/data/d3/era/", region, QueryParams::new())
            .await
    }

    /// A single era by ID
    pub async fn get_era(&self, region: Region, era_id: u32) -> Result<Value> {
        self.client
            .get_resource(&format!("/data/d3/era/{era_id}"), region, QueryParams::new())
            .await
    }

    /// A leaderboard for the given era
    pub async fn get_era_leaderboard(
        &self,
        region: Region,
        era_id: u32,
        leaderboard_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/d3/era/{era_id}/leaderboard/{leaderboard_id}"),
                region,
                QueryParams::new(),
            )
            .await
    }
}
