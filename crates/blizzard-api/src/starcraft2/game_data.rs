//! StarCraft II game data endpoints

use std::sync::Arc;

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::Result;
use crate::params::QueryParams;
use crate::region::Region;

/// StarCraft II Game Data API client
#[derive(Debug)]
pub struct Starcraft2GameDataApi {
    client: Arc<ApiClient>,
}

impl Starcraft2GameDataApi {
    /// Create the game data client on a shared [`ApiClient`]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// League data for a season, queue, team type, and league
    ///
    /// Queue IDs follow the expansion series (201 = LotV 1v1), team type
    /// is 0 for arranged and 1 for random, league IDs run 0 (Bronze)
    /// through 6 (Grandmaster).
    pub async fn get_league_data(
        &self,
        region: Region,
        season_id: u32,
        queue_id: u32,
        team_type: u32,
        league_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/sc2/league/{season_id}/{queue_id}/{team_type}/{league_id}"),
                region,
                QueryParams::new(),
            )
            .await
    }
}
