//! World of Warcraft profile endpoints
//!
//! Everything here lives in the `profile-{region}` namespace. Account-level
//! endpoints additionally need a user access token obtained through the
//! authorization-code flow, passed as the `access_token` query parameter;
//! the shared client still signs the request with its own bearer token
//! where applicable. Character names must be lowercase.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::Result;
use crate::params::QueryParams;
use crate::region::{Locale, Region};

/// World of Warcraft Profile API client
#[derive(Debug)]
pub struct WowProfileApi {
    client: Arc<ApiClient>,
}

impl WowProfileApi {
    /// Create the profile client on a shared [`ApiClient`]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn profile_ns(region: Region, locale: Locale) -> QueryParams {
        QueryParams::new()
            .with("namespace", format!("profile-{region}"))
            .with("locale", locale)
    }

    fn account_ns(region: Region, locale: Locale, access_token: &str) -> QueryParams {
        Self::profile_ns(region, locale).with("access_token", access_token)
    }

    // Account Profile API

    /// Profile summary for the account behind the access token
    pub async fn get_account_profile_summary(
        &self,
        region: Region,
        locale: Locale,
        access_token: &str,
    ) -> Result<Value> {
        self.client
            .get_oauth_resource(
                "/profile/user/wow",
                region,
                Self::account_ns(region, locale, access_token),
            )
            .await
    }

    /// Protected profile summary for a character on the account
    pub async fn get_protected_character_profile_summary(
        &self,
        region: Region,
        locale: Locale,
        access_token: &str,
        realm_id: u32,
        character_id: u64,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/profile/user/wow/protected-character/{realm_id}-{character_id}"),
                region,
                Self::account_ns(region, locale, access_token),
            )
            .await
    }

    /// Index of collection types for the account
    pub async fn get_account_collections_index(
        &self,
        region: Region,
        locale: Locale,
        access_token: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/profile/user/wow/collections",
                region,
                Self::account_ns(region, locale, access_token),
            )
            .await
    }

    /// Heirlooms collected by the account
    pub async fn get_account_heirlooms_collection_summary(
        &self,
        region: Region,
        locale: Locale,
        access_token: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/profile/user/wow/collections/heirlooms",
                region,
                Self::account_ns(region, locale, access_token),
            )
            .await
    }

    /// Mounts collected by the account
    pub async fn get_account_mounts_collection_summary(
        &self,
        region: Region,
        locale: Locale,
        access_token: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/profile/user/wow/collections/mounts",
                region,
                Self::account_ns(region, locale, access_token),
            )
            .await
    }

    /// Battle pets collected by the account
    pub async fn get_account_pets_collection_summary(
        &self,
        region: Region,
        locale: Locale,
        access_token: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/profile/user/wow/collections/pets",
                region,
                Self::account_ns(region, locale, access_token),
            )
            .await
    }

    /// Toys collected by the account
    pub async fn get_account_toys_collection_summary(
        &self,
        region: Region,
        locale: Locale,
        access_token: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/profile/user/wow/collections/toys",
                region,
                Self::account_ns(region, locale, access_token),
            )
            .await
    }

    /// Transmog appearances collected by the account
    pub async fn get_account_transmog_collection_summary(
        &self,
        region: Region,
        locale: Locale,
        access_token: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/profile/user/wow/collections/transmogs",
                region,
                Self::account_ns(region, locale, access_token),
            )
            .await
    }

    // Character Achievements API

    /// Achievement summary for a character
    pub async fn get_character_achievements_summary(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/profile/wow/character/{realm_slug}/{character_name}/achievements"),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    /// Achievement statistics for a character
    pub async fn get_character_achievement_statistics(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!(
                    "/profile/wow/character/{realm_slug}/{character_name}/achievements/statistics"
                ),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    // Character Appearance API

    /// Appearance summary for a character
    pub async fn get_character_appearance_summary(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/profile/wow/character/{realm_slug}/{character_name}/appearance"),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    // Character Collections API

    /// Index of collection types for a character
    pub async fn get_character_collections_index(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/profile/wow/character/{realm_slug}/{character_name}/collections"),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    /// Heirlooms collected by a character
    pub async fn get_character_heirlooms_collection_summary(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!(
                    "/profile/wow/character/{realm_slug}/{character_name}/collections/heirlooms"
                ),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    /// Mounts collected by a character
    pub async fn get_character_mounts_collection_summary(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!(
                    "/profile/wow/character/{realm_slug}/{character_name}/collections/mounts"
                ),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    /// Battle pets collected by a character
    pub async fn get_character_pets_collection_summary(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/profile/wow/character/{realm_slug}/{character_name}/collections/pets"),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    /// Toys collected by a character
    pub async fn get_character_toys_collection_summary(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/profile/wow/character/{realm_slug}/{character_name}/collections/toys"),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    /// Transmog appearances collected by a character
    pub async fn get_character_transmog_collection_summary(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!(
                    "/profile/wow/character/{realm_slug}/{character_name}/collections/transmogs"
                ),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    // Character Encounters API

    /// Encounter summary for a character
    pub async fn get_character_encounters_summary(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/profile/wow/character/{realm_slug}/{character_name}/encounters"),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    /// Dungeon encounters completed by a character
    pub async fn get_character_dungeons(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!(
                    "/profile/wow/character/{realm_slug}/{character_name}/encounters/dungeons"
                ),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    /// Raid encounters completed by a character
    pub async fn get_character_raids(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/profile/wow/character/{realm_slug}/{character_name}/encounters/raids"),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    // Character Equipment API

    /// Equipped items for a character
    pub async fn get_character_equipment_summary(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/profile/wow/character/{realm_slug}/{character_name}/equipment"),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    // Character Hunter Pets API

    /// Hunter pets of a character, when the character is a hunter
    pub async fn get_character_hunter_pets_summary(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/profile/wow/character/{realm_slug}/{character_name}/hunter-pets"),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    // Character Media API

    /// Render media for a character
    pub async fn get_character_media_summary(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/profile/wow/character/{realm_slug}/{character_name}/character-media"),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    // Character Mythic Keystone Profile API

    /// Mythic keystone profile for a character
    pub async fn get_character_mythic_keystone_profile_index(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!(
                    "/profile/wow/character/{realm_slug}/{character_name}/mythic-keystone-profile"
                ),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    /// Mythic keystone season details for a character
    pub async fn get_character_mythic_keystone_profile_season_details(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
        season_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!(
                    "/profile/wow/character/{realm_slug}/{character_name}/mythic-keystone-profile/season/{season_id}"
                ),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    // Character Professions API

    /// Profession summary for a character
    pub async fn get_character_professions_summary(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/profile/wow/character/{realm_slug}/{character_name}/professions"),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    // Character Profile API

    /// Profile summary for a character
    pub async fn get_character_profile_summary(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/profile/wow/character/{realm_slug}/{character_name}"),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    /// Profile status for a character, including validity of its ID
    pub async fn get_character_profile_status(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/profile/wow/character/{realm_slug}/{character_name}/status"),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    // Character PvP API

    /// PvP bracket statistics for a character, e.g. bracket `3v3`
    pub async fn get_character_pvp_bracket_statistics(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
        pvp_bracket: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!(
                    "/profile/wow/character/{realm_slug}/{character_name}/pvp-bracket/{pvp_bracket}"
                ),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    /// PvP summary for a character
    pub async fn get_character_pvp_summary(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/profile/wow/character/{realm_slug}/{character_name}/pvp-summary"),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    // Character Quests API

    /// Active quests for a character
    pub async fn get_character_quests(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/profile/wow/character/{realm_slug}/{character_name}/quests"),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    /// Completed quests for a character
    pub async fn get_character_completed_quests(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/profile/wow/character/{realm_slug}/{character_name}/quests/completed"),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    // Character Reputations API

    /// Reputation summary for a character
    pub async fn get_character_reputations_summary(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/profile/wow/character/{realm_slug}/{character_name}/reputations"),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    // Character Soulbinds API

    /// Soulbinds for a character
    pub async fn get_character_soulbinds(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/profile/wow/character/{realm_slug}/{character_name}/soulbinds"),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    // Character Specializations API

    /// Specialization summary for a character
    pub async fn get_character_specializations_summary(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/profile/wow/character/{realm_slug}/{character_name}/specializations"),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    // Character Statistics API

    /// Statistics summary for a character
    pub async fn get_character_statistics_summary(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/profile/wow/character/{realm_slug}/{character_name}/statistics"),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    // Character Titles API

    /// Titles earned by a character
    pub async fn get_character_titles_summary(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        character_name: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/profile/wow/character/{realm_slug}/{character_name}/titles"),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    // Guild API

    /// A single guild by realm and name slug
    pub async fn get_guild(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        name_slug: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/guild/{realm_slug}/{name_slug}"),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    /// Activity feed for a guild
    pub async fn get_guild_activity(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        name_slug: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/guild/{realm_slug}/{name_slug}/activity"),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    /// Achievements earned by a guild
    pub async fn get_guild_achievements(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        name_slug: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/guild/{realm_slug}/{name_slug}/achievements"),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }

    /// Membership roster of a guild
    pub async fn get_guild_roster(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        name_slug: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/guild/{realm_slug}/{name_slug}/roster"),
                region,
                Self::profile_ns(region, locale),
            )
            .await
    }
}
