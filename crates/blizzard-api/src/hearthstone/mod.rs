//! Hearthstone APIs

mod game_data;

pub use game_data::HearthstoneGameDataApi;

use std::sync::Arc;

use crate::client::ApiClient;

/// Hearthstone API client
#[derive(Debug)]
pub struct HearthstoneApi {
    /// Game data endpoints (cards, decks, metadata)
    pub game_data: HearthstoneGameDataApi,
}

impl HearthstoneApi {
    /// Create the Hearthstone client on a shared [`ApiClient`]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            game_data: HearthstoneGameDataApi::new(client),
        }
    }
}
