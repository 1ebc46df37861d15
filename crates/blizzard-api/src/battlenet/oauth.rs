//! Battle.net OAuth endpoints

use std::sync::Arc;

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::Result;
use crate::params::QueryParams;
use crate::region::Region;

/// Battle.net OAuth API client
///
/// These endpoints live on the OAuth host and authenticate with a
/// user-supplied access token passed as a query parameter, not with the
/// client-credentials bearer token.
#[derive(Debug)]
pub struct BattlenetOauthApi {
    client: Arc<ApiClient>,
}

impl BattlenetOauthApi {
    /// Create the OAuth client on a shared [`ApiClient`]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Basic information about the user behind the given access token
    pub async fn get_user_info(&self, region: Region, access_token: &str) -> Result<Value> {
        let params = QueryParams::new().with("access_token", access_token);
        self.client
            .get_oauth_resource("/oauth/userinfo", region, params)
            .await
    }
}
