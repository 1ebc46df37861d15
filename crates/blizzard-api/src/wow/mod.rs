//! World of Warcraft APIs

mod game_data;
mod profile;

pub use game_data::WowGameDataApi;
pub use profile::WowProfileApi;

use std::sync::Arc;

use crate::client::ApiClient;

/// World of Warcraft API client
#[derive(Debug)]
pub struct WowApi {
    /// Game data endpoints (static and dynamic namespaces)
    pub game_data: WowGameDataApi,
    /// Profile endpoints (characters, accounts, guilds)
    pub profile: WowProfileApi,
}

impl WowApi {
    /// Create the World of Warcraft client on a shared [`ApiClient`]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            game_data: WowGameDataApi::new(Arc::clone(&client)),
            profile: WowProfileApi::new(client),
        }
    }
}
