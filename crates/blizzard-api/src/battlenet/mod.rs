//! Battle.net OAuth API

mod oauth;

pub use oauth::BattlenetOauthApi;

use std::sync::Arc;

use crate::client::ApiClient;

/// Battle.net API client
#[derive(Debug)]
pub struct BattlenetApi {
    /// OAuth endpoints (user info)
    pub oauth: BattlenetOauthApi,
}

impl BattlenetApi {
    /// Create the Battle.net client on a shared [`ApiClient`]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            oauth: BattlenetOauthApi::new(client),
        }
    }
}
