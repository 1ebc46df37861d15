//! Error types for the Battle.net API client

use std::fmt;

use reqwest::Method;
use thiserror::Error;

use crate::params::QueryParams;
use crate::region::Region;

/// Errors surfaced by this crate
#[derive(Error, Debug)]
pub enum Error {
    /// OAuth token acquisition failed
    #[error(transparent)]
    Token(#[from] TokenError),

    /// A resource request failed after the single permitted refresh-and-retry
    #[error(transparent)]
    Request(#[from] Box<RequestError>),

    /// Transport-level failure from the underlying HTTP client
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Unknown region string
    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    /// Unknown locale string
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// A base-URL override passed to the builder did not parse
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl Error {
    /// Borrow the request failure payload, if that is what this error is
    pub fn as_request(&self) -> Option<&RequestError> {
        match self {
            Error::Request(err) => Some(err.as_ref()),
            _ => None,
        }
    }

    /// Borrow the token failure payload, if that is what this error is
    pub fn as_token(&self) -> Option<&TokenError> {
        match self {
            Error::Token(err) => Some(err),
            _ => None,
        }
    }
}

/// Failure while acquiring a client-credentials token
///
/// Carries the HTTP status and response body when the OAuth endpoint
/// answered at all; a pure transport failure leaves both unset.
#[derive(Debug)]
pub struct TokenError {
    /// Region the token was requested for
    pub region: Region,
    /// Status returned by the OAuth endpoint, if a response was received
    pub status: Option<u16>,
    /// Raw response body, if one could be read
    pub body: Option<String>,
    pub(crate) source: Option<reqwest::Error>,
}

impl TokenError {
    pub(crate) fn from_transport(region: Region, source: reqwest::Error) -> Self {
        Self {
            region,
            status: source.status().map(|s| s.as_u16()),
            body: None,
            source: Some(source),
        }
    }
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token Error: failed to get token for region {}", self.region)?;
        if let Some(status) = self.status {
            write!(f, " | Status Code: {status}")?;
        }
        if let Some(body) = &self.body {
            write!(f, " | Body: {body}")?;
        }
        Ok(())
    }
}

impl std::error::Error for TokenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Failure of a resource request
///
/// Built after the 401-triggered refresh-and-retry has been exhausted.
/// The rate-limit and retry accessors are advisory only; the client never
/// acts on them itself.
#[derive(Debug)]
pub struct RequestError {
    /// HTTP status of the final response
    pub status: Option<u16>,
    /// Fully resolved request URL
    pub url: String,
    /// HTTP method of the failed request
    pub method: Method,
    /// Query parameters that were sent
    pub params: QueryParams,
    /// `code` field of the decoded error body, if the body was JSON
    pub error_code: Option<String>,
    /// Entire decoded error body, if the body was JSON
    pub error_details: Option<serde_json::Value>,
    /// Parsed `Retry-After` header value in seconds
    pub retry_after: Option<u64>,
}

impl RequestError {
    /// Whether the failure is due to rate limiting
    pub fn is_rate_limited(&self) -> bool {
        self.status == Some(429) || self.retry_after.is_some()
    }

    /// Whether the caller could reasonably retry the request
    pub fn should_retry(&self) -> bool {
        self.is_rate_limited() || matches!(self.status, Some(500 | 502 | 503 | 504))
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Request Error: {} {} failed", self.method, self.url)?;
        if let Some(status) = self.status {
            write!(f, " | Status Code: {status}")?;
        }
        if let Some(code) = &self.error_code {
            write!(f, " | Error Code: {code}")?;
        }
        if let Some(retry_after) = self.retry_after {
            write!(f, " | Retry After: {retry_after} seconds")?;
        }
        Ok(())
    }
}

impl std::error::Error for RequestError {}

impl From<RequestError> for Error {
    fn from(err: RequestError) -> Self {
        Error::Request(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn request_error(status: u16) -> RequestError {
        RequestError {
            status: Some(status),
            url: "https://us.api.blizzard.com/data/wow/token/index".to_string(),
            method: Method::GET,
            params: QueryParams::new(),
            error_code: None,
            error_details: None,
            retry_after: None,
        }
    }

    #[test]
    fn test_rate_limited_by_status() {
        assert!(request_error(429).is_rate_limited());
        assert!(!request_error(404).is_rate_limited());
    }

    #[test]
    fn test_rate_limited_by_retry_after() {
        let mut err = request_error(200);
        err.retry_after = Some(30);
        assert!(err.is_rate_limited());
        assert!(err.should_retry());
    }

    #[test]
    fn test_should_retry_on_server_errors() {
        for status in [500, 502, 503, 504] {
            assert!(request_error(status).should_retry(), "status {status}");
        }
        for status in [400, 401, 403, 404] {
            assert!(!request_error(status).should_retry(), "status {status}");
        }
    }

    #[test]
    fn test_request_error_display() {
        let mut err = request_error(429);
        err.error_code = Some("ERR123".to_string());
        err.retry_after = Some(30);
        let rendered = err.to_string();
        assert!(rendered.contains("Status Code: 429"));
        assert!(rendered.contains("Error Code: ERR123"));
        assert!(rendered.contains("Retry After: 30 seconds"));
    }

    #[test]
    fn test_token_error_display() {
        let err = TokenError {
            region: Region::EU,
            status: Some(401),
            body: Some("{\"error\":\"invalid_client\"}".to_string()),
            source: None,
        };
        let rendered = err.to_string();
        assert!(rendered.contains("region eu"));
        assert!(rendered.contains("Status Code: 401"));
        assert!(rendered.contains("invalid_client"));
    }
}
