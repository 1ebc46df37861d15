//! Async client for Blizzard's Battle.net REST APIs
//!
//! This crate covers the game data, profile, and OAuth endpoints for World
//! of Warcraft, Diablo III, Hearthstone, StarCraft II, and Battle.net
//! itself. A single [`ApiClient`] owns the OAuth client-credentials token
//! and the connection pool; the per-game accessors are thin wrappers that
//! build resource paths and query parameters.
//!
//! # Example
//!
//! ```no_run
//! use blizzard_api::{BlizzardApi, Locale, Region};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api = BlizzardApi::new("client_id", "client_secret")?;
//!
//! // Token acquisition happens lazily on the first request
//! let token = api.wow.game_data
//!     .get_token_index(Region::US, Locale::EnUs, false)
//!     .await?;
//! println!("WoW token price: {}", token["price"]);
//! # Ok(())
//! # }
//! ```
//!
//! Responses are returned as [`serde_json::Value`] — the API surface is
//! large and versioned server-side, so the shape is left to the caller.
//!
//! # Regions
//!
//! All regions except China are served from
//! `https://{region}.api.blizzard.com` with OAuth on
//! `https://oauth.battle.net`; China uses its own gateway hosts. See
//! [`Region`] for the exact mapping.

#![warn(missing_docs)]

pub mod battlenet;
pub mod client;
pub mod diablo3;
pub mod error;
pub mod hearthstone;
pub mod params;
pub mod region;
pub mod starcraft2;
pub mod wow;

use std::sync::Arc;

pub use client::{ApiClient, ApiClientBuilder, Endpoint, TokenResponse};
pub use error::{Error, RequestError, Result, TokenError};
pub use params::{ParamValue, QueryParams};
pub use region::{Locale, Region};

/// Unified client for all Blizzard game APIs
///
/// Every per-game client shares one [`ApiClient`], so one token and one
/// connection pool serve the whole instance.
#[derive(Debug)]
pub struct BlizzardApi {
    /// World of Warcraft game data and profile APIs
    pub wow: wow::WowApi,
    /// Diablo III community and game data APIs
    pub diablo3: diablo3::Diablo3Api,
    /// Hearthstone game data API
    pub hearthstone: hearthstone::HearthstoneApi,
    /// StarCraft II community and game data APIs
    pub starcraft2: starcraft2::Starcraft2Api,
    /// Battle.net OAuth API
    pub battlenet: battlenet::BattlenetApi,
}

impl BlizzardApi {
    /// Create a client from Blizzard API credentials
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        Ok(Self::with_api_client(Arc::new(ApiClient::new(
            client_id,
            client_secret,
        )?)))
    }

    /// Build all game clients on top of an existing [`ApiClient`]
    pub fn with_api_client(client: Arc<ApiClient>) -> Self {
        Self {
            wow: wow::WowApi::new(Arc::clone(&client)),
            diablo3: diablo3::Diablo3Api::new(Arc::clone(&client)),
            hearthstone: hearthstone::HearthstoneApi::new(Arc::clone(&client)),
            starcraft2: starcraft2::Starcraft2Api::new(Arc::clone(&client)),
            battlenet: battlenet::BattlenetApi::new(client),
        }
    }
}
