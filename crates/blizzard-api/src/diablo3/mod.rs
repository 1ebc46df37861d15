//! Diablo III APIs

mod community;
mod game_data;

pub use community::Diablo3CommunityApi;
pub use game_data::Diablo3GameDataApi;

use std::sync::Arc;

use crate::client::ApiClient;

/// Diablo III API client
#[derive(Debug)]
pub struct Diablo3Api {
    /// Community endpoints (acts, artisans, heroes, profiles)
    pub community: Diablo3CommunityApi,
    /// Game data endpoints (seasons, eras, leaderboards)
    pub game_data: Diablo3GameDataApi,
}

impl Diablo3Api {
    /// Create the Diablo III client on a shared [`ApiClient`]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            community: Diablo3CommunityApi::new(Arc::clone(&client)),
            game_data: Diablo3GameDataApi::new(client),
        }
    }
}
