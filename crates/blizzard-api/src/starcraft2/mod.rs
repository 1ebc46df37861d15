//! StarCraft II APIs

mod community;
mod game_data;

pub use community::Starcraft2CommunityApi;
pub use game_data::Starcraft2GameDataApi;

use std::sync::Arc;

use crate::client::ApiClient;

/// StarCraft II API client
#[derive(Debug)]
pub struct Starcraft2Api {
    /// Community endpoints (profiles, ladders, players)
    pub community: Starcraft2CommunityApi,
    /// Game data endpoints (league data)
    pub game_data: Starcraft2GameDataApi,
}

impl Starcraft2Api {
    /// Create the StarCraft II client on a shared [`ApiClient`]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            community: Starcraft2CommunityApi::new(Arc::clone(&client)),
            game_data: Starcraft2GameDataApi::new(client),
        }
    }
}
