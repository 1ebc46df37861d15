//! Shared token and request layer for the Battle.net APIs
//!
//! Every per-game accessor delegates here: [`ApiClient`] owns the OAuth
//! client-credentials token, resolves region-aware URLs, and performs the
//! authenticated GET requests. Callers get parsed JSON back or a typed
//! error; nothing is retried beyond the single refresh-and-retry on a 401.

use std::time::{Duration, Instant};

use reqwest::{Client, Method, Response, StatusCode, header};
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, trace, warn};
use url::Url;

use crate::error::{RequestError, Result, TokenError};
use crate::params::QueryParams;
use crate::region::Region;

/// Refresh the cached token when it expires within this margin
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(300);

/// Path of the client-credentials token endpoint on the OAuth host
const TOKEN_RESOURCE: &str = "/oauth/token";

/// Which host family a resource lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Game data and profile resources on `{region}.api.blizzard.com`
    Api,
    /// OAuth resources on `oauth.battle.net`
    Oauth,
}

/// Successful response from the token endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Bearer token to present on data requests
    pub access_token: String,
    /// Token type, always `bearer` in practice
    pub token_type: String,
    /// Validity window in seconds, counted from acquisition
    pub expires_in: u64,
}

/// Cached token with its locally computed expiry
#[derive(Debug, Clone)]
struct AccessToken {
    value: String,
    expires_at: Instant,
}

impl AccessToken {
    fn from_response(response: &TokenResponse) -> Self {
        Self {
            value: response.access_token.clone(),
            expires_at: Instant::now() + Duration::from_secs(response.expires_in),
        }
    }

    /// Expired, or close enough to expiry that a request could outlive it
    fn is_expired(&self) -> bool {
        Instant::now() + TOKEN_EXPIRY_MARGIN >= self.expires_at
    }
}

/// HTTP client for Blizzard's REST APIs
///
/// One instance holds the client credentials, at most one live access
/// token, and a single connection pool shared by all requests made through
/// it. Token refresh is serialized behind a mutex so concurrent callers
/// observing an expired token trigger one request, not several.
pub struct ApiClient {
    http: Client,
    client_id: String,
    client_secret: String,
    api_base: Option<String>,
    oauth_base: Option<String>,
    token: Mutex<Option<AccessToken>>,
}

// Secrets stay out of Debug output
impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("client_id", &self.client_id)
            .field("api_base", &self.api_base)
            .field("oauth_base", &self.oauth_base)
            .finish_non_exhaustive()
    }
}

/// Builder for [`ApiClient`]
///
/// The base-URL overrides replace the per-region hosts for every region;
/// they exist for tests and proxies and are validated up front.
pub struct ApiClientBuilder {
    client_id: String,
    client_secret: String,
    http: Option<Client>,
    api_base: Option<String>,
    oauth_base: Option<String>,
}

impl ApiClientBuilder {
    /// Use a pre-configured `reqwest::Client` (timeouts, proxies, pools)
    pub fn http_client(mut self, http: Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Override the data API base URL for all regions
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    /// Override the OAuth base URL for all regions
    pub fn oauth_base(mut self, base: impl Into<String>) -> Self {
        self.oauth_base = Some(base.into());
        self
    }

    /// Build the client, validating any base-URL overrides
    pub fn build(self) -> Result<ApiClient> {
        let api_base = self.api_base.map(normalize_base).transpose()?;
        let oauth_base = self.oauth_base.map(normalize_base).transpose()?;
        let http = match self.http {
            Some(http) => http,
            None => Client::builder().build()?,
        };

        Ok(ApiClient {
            http,
            client_id: self.client_id,
            client_secret: self.client_secret,
            api_base,
            oauth_base,
            token: Mutex::new(None),
        })
    }
}

/// Reject unparseable overrides and strip the trailing slash so resource
/// paths concatenate cleanly
fn normalize_base(base: String) -> Result<String> {
    Url::parse(&base)?;
    Ok(base.trim_end_matches('/').to_string())
}

impl ApiClient {
    /// Create a client for the given credentials
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        Self::builder(client_id, client_secret).build()
    }

    /// Start building a client with custom transport or base URLs
    pub fn builder(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> ApiClientBuilder {
        ApiClientBuilder {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            http: None,
            api_base: None,
            oauth_base: None,
        }
    }

    /// Resolve a resource path to a fully qualified URL
    pub fn resolve_url(&self, resource: &str, region: Region, endpoint: Endpoint) -> String {
        let base = match endpoint {
            Endpoint::Api => self
                .api_base
                .as_deref()
                .unwrap_or_else(|| region.api_host()),
            Endpoint::Oauth => self
                .oauth_base
                .as_deref()
                .unwrap_or_else(|| region.oauth_host()),
        };
        format!("{base}{resource}")
    }

    /// Return a token valid for at least the expiry margin, acquiring one
    /// if the cache is empty or stale
    ///
    /// Calling this twice in immediate succession performs at most one
    /// network request.
    pub async fn ensure_valid_token(&self, region: Region) -> Result<String> {
        let mut token = self.token.lock().await;
        if let Some(current) = token.as_ref() {
            if !current.is_expired() {
                return Ok(current.value.clone());
            }
        }

        let acquired = self.fetch_token(region).await?;
        let cached = AccessToken::from_response(&acquired);
        let value = cached.value.clone();
        *token = Some(cached);
        Ok(value)
    }

    /// Unconditionally request a fresh token and replace the cached one
    pub async fn request_token(&self, region: Region) -> Result<TokenResponse> {
        let mut token = self.token.lock().await;
        let acquired = self.fetch_token(region).await?;
        *token = Some(AccessToken::from_response(&acquired));
        Ok(acquired)
    }

    /// POST to the token endpoint; does not touch the cache
    async fn fetch_token(&self, region: Region) -> Result<TokenResponse> {
        let url = self.resolve_url(TOKEN_RESOURCE, region, Endpoint::Oauth);
        debug!("Requesting client credentials token from {}", url);

        let response = self
            .http
            .post(&url)
            .query(&[("grant_type", "client_credentials")])
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .send()
            .await
            .map_err(|e| TokenError::from_transport(region, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok();
            return Err(TokenError {
                region,
                status: Some(status.as_u16()),
                body,
                source: None,
            }
            .into());
        }

        let data: TokenResponse = response.json().await.map_err(|e| TokenError {
            region,
            status: Some(status.as_u16()),
            body: None,
            source: Some(e),
        })?;
        trace!("Token acquired, expires in {}s", data.expires_in);
        Ok(data)
    }

    /// GET a data resource, attaching the bearer token
    ///
    /// A 401 triggers exactly one token refresh and one retried GET; any
    /// other failure surfaces immediately as [`RequestError`].
    pub async fn get_resource(
        &self,
        resource: &str,
        region: Region,
        params: QueryParams,
    ) -> Result<Value> {
        let url = self.resolve_url(resource, region, Endpoint::Api);
        let pairs = params.to_pairs();
        let token = self.ensure_valid_token(region).await?;

        debug!("GET {}", url);
        let mut response = self
            .http
            .get(&url)
            .bearer_auth(&token)
            .query(&pairs)
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            warn!("Unauthorized response from {}, refreshing token and retrying", url);
            let refreshed = self.request_token(region).await?;
            response = self
                .http
                .get(&url)
                .bearer_auth(&refreshed.access_token)
                .query(&pairs)
                .send()
                .await?;
        }

        Self::into_json(response, url, params).await
    }

    /// GET an OAuth-host resource
    ///
    /// No bearer token is attached and no refresh happens here; OAuth
    /// resources authenticate through caller-supplied query parameters.
    pub async fn get_oauth_resource(
        &self,
        resource: &str,
        region: Region,
        params: QueryParams,
    ) -> Result<Value> {
        let url = self.resolve_url(resource, region, Endpoint::Oauth);

        debug!("GET {}", url);
        let response = self.http.get(&url).query(&params.to_pairs()).send().await?;

        Self::into_json(response, url, params).await
    }

    /// Turn the final response into parsed JSON or a [`RequestError`]
    async fn into_json(response: Response, url: String, params: QueryParams) -> Result<Value> {
        let status = response.status();
        trace!("Response status: {}", status);

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let retry_after = response
            .headers()
            .get(header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());

        let error_details: Option<Value> = response.json().await.ok();
        let error_code = error_details
            .as_ref()
            .and_then(|body| body.get("code"))
            .map(|code| match code {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            });

        Err(RequestError {
            status: Some(status.as_u16()),
            url,
            method: Method::GET,
            params,
            error_code,
            error_details,
            retry_after,
        }
        .into())
    }
}
