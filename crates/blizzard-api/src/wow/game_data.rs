//! World of Warcraft game data endpoints
//!
//! Every endpoint requires a `namespace` query parameter selecting the data
//! partition: `static-{region}` for immutable game data, `dynamic-{region}`
//! for server-driven data such as realms and auctions. Endpoints that also
//! exist for Classic take a `classic` flag which switches to the
//! `{kind}-classic-{region}` namespaces.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::Result;
use crate::params::QueryParams;
use crate::region::{Locale, Region};

/// World of Warcraft Game Data API client
#[derive(Debug)]
pub struct WowGameDataApi {
    client: Arc<ApiClient>,
}

impl WowGameDataApi {
    /// Create the game data client on a shared [`ApiClient`]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Namespace plus locale, the parameter pair every endpoint sends
    fn ns(kind: &str, region: Region, locale: Locale) -> QueryParams {
        QueryParams::new()
            .with("namespace", format!("{kind}-{region}"))
            .with("locale", locale)
    }

    fn static_ns(region: Region, locale: Locale, classic: bool) -> QueryParams {
        let kind = if classic { "static-classic" } else { "static" };
        Self::ns(kind, region, locale)
    }

    fn dynamic_ns(region: Region, locale: Locale, classic: bool) -> QueryParams {
        let kind = if classic { "dynamic-classic" } else { "dynamic" };
        Self::ns(kind, region, locale)
    }

    // Achievement API

    /// Index of achievement categories
    pub async fn get_achievement_categories_index(
        &self,
        region: Region,
        locale: Locale,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/achievement-category/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single achievement category by ID
    pub async fn get_achievement_category(
        &self,
        region: Region,
        locale: Locale,
        category_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/achievement-category/{category_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Index of achievements
    pub async fn get_achievement_index(&self, region: Region, locale: Locale) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/achievement/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single achievement by ID
    pub async fn get_achievement(
        &self,
        region: Region,
        locale: Locale,
        achievement_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/achievement/{achievement_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Media for an achievement by ID
    pub async fn get_achievement_media(
        &self,
        region: Region,
        locale: Locale,
        achievement_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/media/achievement/{achievement_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    // Auction House API

    /// Index of auction houses for a Classic connected realm
    pub async fn get_auction_house_index(
        &self,
        region: Region,
        locale: Locale,
        connected_realm_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/connected-realm/{connected_realm_id}/auctions/index"),
                region,
                Self::ns("dynamic-classic", region, locale),
            )
            .await
    }

    /// Auctions for one Classic auction house
    pub async fn get_auctions_for_auction_house(
        &self,
        region: Region,
        locale: Locale,
        connected_realm_id: u32,
        auction_house_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!(
                    "/data/wow/connected-realm/{connected_realm_id}/auctions/{auction_house_id}"
                ),
                region,
                Self::ns("dynamic-classic", region, locale),
            )
            .await
    }

    /// All active auctions for a connected realm
    pub async fn get_auctions(
        &self,
        region: Region,
        locale: Locale,
        connected_realm_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/connected-realm/{connected_realm_id}/auctions"),
                region,
                Self::ns("dynamic", region, locale),
            )
            .await
    }

    /// All active commodity auctions for the region
    pub async fn get_commodities(&self, region: Region, locale: Locale) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/auctions/commodities",
                region,
                Self::ns("dynamic", region, locale),
            )
            .await
    }

    // Azerite Essence API

    /// Index of azerite essences
    pub async fn get_azerite_essences_index(
        &self,
        region: Region,
        locale: Locale,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/azerite-essence/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single azerite essence by ID
    pub async fn get_azerite_essence(
        &self,
        region: Region,
        locale: Locale,
        azerite_essence_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/azerite-essence/{azerite_essence_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Media for an azerite essence by ID
    pub async fn get_azerite_essence_media(
        &self,
        region: Region,
        locale: Locale,
        azerite_essence_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/media/azerite-essence/{azerite_essence_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    // Connected Realm API

    /// Index of connected realms
    pub async fn get_connected_realms_index(
        &self,
        region: Region,
        locale: Locale,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/connected-realm/index",
                region,
                Self::dynamic_ns(region, locale, classic),
            )
            .await
    }

    /// A single connected realm by ID
    pub async fn get_connected_realm(
        &self,
        region: Region,
        locale: Locale,
        connected_realm_id: u32,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/connected-realm/{connected_realm_id}"),
                region,
                Self::dynamic_ns(region, locale, classic),
            )
            .await
    }

    // Covenant API

    /// Index of covenants
    pub async fn get_covenant_index(&self, region: Region, locale: Locale) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/covenant/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single covenant by ID
    pub async fn get_covenant(
        &self,
        region: Region,
        locale: Locale,
        covenant_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/covenant/{covenant_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Media for a covenant by ID
    pub async fn get_covenant_media(
        &self,
        region: Region,
        locale: Locale,
        covenant_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/media/covenant/{covenant_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Index of soulbinds
    pub async fn get_soulbind_index(&self, region: Region, locale: Locale) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/covenant/soulbind/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single soulbind by ID
    pub async fn get_soulbind(
        &self,
        region: Region,
        locale: Locale,
        soulbind_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/covenant/soulbind/{soulbind_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Index of conduits
    pub async fn get_conduit_index(&self, region: Region, locale: Locale) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/covenant/conduit/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single conduit by ID
    pub async fn get_conduit(
        &self,
        region: Region,
        locale: Locale,
        conduit_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/covenant/conduit/{conduit_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    // Creature API

    /// Index of creature families
    pub async fn get_creature_families_index(
        &self,
        region: Region,
        locale: Locale,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/creature-family/index",
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    /// A single creature family by ID
    pub async fn get_creature_family(
        &self,
        region: Region,
        locale: Locale,
        creature_family_id: u32,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/creature-family/{creature_family_id}"),
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    /// Index of creature types
    pub async fn get_creature_types_index(
        &self,
        region: Region,
        locale: Locale,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/creature-type/index",
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    /// A single creature type by ID
    pub async fn get_creature_type(
        &self,
        region: Region,
        locale: Locale,
        creature_type_id: u32,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/creature-type/{creature_type_id}"),
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    /// A single creature by ID
    pub async fn get_creature(
        &self,
        region: Region,
        locale: Locale,
        creature_id: u32,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/creature/{creature_id}"),
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    /// Media for a creature display by ID
    pub async fn get_creature_display_media(
        &self,
        region: Region,
        locale: Locale,
        creature_display_id: u32,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/media/creature-display/{creature_display_id}"),
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    /// Media for a creature family by ID
    pub async fn get_creature_family_media(
        &self,
        region: Region,
        locale: Locale,
        creature_family_id: u32,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/media/creature-family/{creature_family_id}"),
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    // Guild Crest API

    /// Index of guild crest components
    pub async fn get_guild_crest_components_index(
        &self,
        region: Region,
        locale: Locale,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/guild-crest/index",
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    /// Media for a guild crest border by ID
    pub async fn get_guild_crest_border_media(
        &self,
        region: Region,
        locale: Locale,
        border_id: u32,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/media/guild-crest/border/{border_id}"),
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    /// Media for a guild crest emblem by ID
    pub async fn get_guild_crest_emblem_media(
        &self,
        region: Region,
        locale: Locale,
        emblem_id: u32,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/media/guild-crest/emblem/{emblem_id}"),
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    // Heirloom API

    /// Index of heirlooms
    pub async fn get_heirloom_index(&self, region: Region, locale: Locale) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/heirloom/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single heirloom by ID
    pub async fn get_heirloom(
        &self,
        region: Region,
        locale: Locale,
        heirloom_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/heirloom/{heirloom_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    // Item API

    /// Index of item classes
    pub async fn get_item_classes_index(
        &self,
        region: Region,
        locale: Locale,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/item-class/index",
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    /// A single item class by ID
    pub async fn get_item_class(
        &self,
        region: Region,
        locale: Locale,
        item_class_id: u32,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/item-class/{item_class_id}"),
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    /// Index of item sets
    pub async fn get_item_sets_index(
        &self,
        region: Region,
        locale: Locale,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/item-set/index",
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    /// A single item set by ID
    pub async fn get_item_set(
        &self,
        region: Region,
        locale: Locale,
        item_set_id: u32,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/item-set/{item_set_id}"),
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    /// A single item subclass
    pub async fn get_item_subclass(
        &self,
        region: Region,
        locale: Locale,
        item_class_id: u32,
        item_subclass_id: u32,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!(
                    "/data/wow/item-class/{item_class_id}/item-subclass/{item_subclass_id}"
                ),
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    /// A single item by ID
    pub async fn get_item(
        &self,
        region: Region,
        locale: Locale,
        item_id: u32,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/item/{item_id}"),
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    /// Media for an item by ID
    pub async fn get_item_media(
        &self,
        region: Region,
        locale: Locale,
        item_id: u32,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/media/item/{item_id}"),
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    // Item Appearance API

    /// A single item appearance by ID
    pub async fn get_item_appearance(
        &self,
        region: Region,
        locale: Locale,
        appearance_id: u32,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/item-appearance/{appearance_id}"),
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    /// Index of item appearance sets
    pub async fn get_item_appearance_sets_index(
        &self,
        region: Region,
        locale: Locale,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/item-appearance/set/index",
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    /// A single item appearance set by ID
    pub async fn get_item_appearance_set(
        &self,
        region: Region,
        locale: Locale,
        appearance_set_id: u32,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/item-appearance/set/{appearance_set_id}"),
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    /// Index of item appearance slots
    pub async fn get_item_appearance_slot_index(
        &self,
        region: Region,
        locale: Locale,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/item-appearance/slot/index",
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    /// Item appearances for one equipment slot, e.g. `HEAD`
    pub async fn get_item_appearance_slot(
        &self,
        region: Region,
        locale: Locale,
        slot_type: &str,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/item-appearance/slot/{slot_type}"),
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    // Journal API

    /// Index of journal expansions
    pub async fn get_journal_expansions_index(
        &self,
        region: Region,
        locale: Locale,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/journal-expansion/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single journal expansion by ID
    pub async fn get_journal_expansion(
        &self,
        region: Region,
        locale: Locale,
        journal_expansion_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/journal-expansion/{journal_expansion_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Index of journal encounters
    pub async fn get_journal_encounters_index(
        &self,
        region: Region,
        locale: Locale,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/journal-encounter/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single journal encounter by ID
    pub async fn get_journal_encounter(
        &self,
        region: Region,
        locale: Locale,
        journal_encounter_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/journal-encounter/{journal_encounter_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Index of journal instances
    pub async fn get_journal_instances_index(
        &self,
        region: Region,
        locale: Locale,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/journal-instance/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single journal instance by ID
    pub async fn get_journal_instance(
        &self,
        region: Region,
        locale: Locale,
        journal_instance_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/journal-instance/{journal_instance_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Media for a journal instance by ID
    pub async fn get_journal_instance_media(
        &self,
        region: Region,
        locale: Locale,
        journal_instance_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/media/journal-instance/{journal_instance_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    // Modified Crafting API

    /// Parent index for modified crafting
    pub async fn get_modified_crafting_index(
        &self,
        region: Region,
        locale: Locale,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/modified-crafting/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Index of modified crafting categories
    pub async fn get_modified_crafting_category_index(
        &self,
        region: Region,
        locale: Locale,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/modified-crafting/category/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single modified crafting category by ID
    pub async fn get_modified_crafting_category(
        &self,
        region: Region,
        locale: Locale,
        category_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/modified-crafting/category/{category_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Index of modified crafting reagent slot types
    pub async fn get_modified_crafting_reagent_slot_type_index(
        &self,
        region: Region,
        locale: Locale,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/modified-crafting/reagent-slot-type/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single modified crafting reagent slot type by ID
    pub async fn get_modified_crafting_reagent_slot_type(
        &self,
        region: Region,
        locale: Locale,
        slot_type_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/modified-crafting/reagent-slot-type/{slot_type_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    // Mount API

    /// Index of mounts
    pub async fn get_mounts_index(&self, region: Region, locale: Locale) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/mount/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single mount by ID
    pub async fn get_mount(&self, region: Region, locale: Locale, mount_id: u32) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/mount/{mount_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    // Mythic Keystone Affix API

    /// Index of mythic keystone affixes
    pub async fn get_mythic_keystone_affixes_index(
        &self,
        region: Region,
        locale: Locale,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/keystone-affix/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single mythic keystone affix by ID
    pub async fn get_mythic_keystone_affix(
        &self,
        region: Region,
        locale: Locale,
        keystone_affix_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/keystone-affix/{keystone_affix_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Media for a mythic keystone affix by ID
    pub async fn get_mythic_keystone_affix_media(
        &self,
        region: Region,
        locale: Locale,
        keystone_affix_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/media/keystone-affix/{keystone_affix_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    // Mythic Keystone Dungeon API

    /// Index of mythic keystone dungeons
    pub async fn get_mythic_keystone_dungeons_index(
        &self,
        region: Region,
        locale: Locale,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/mythic-keystone/dungeon/index",
                region,
                Self::ns("dynamic", region, locale),
            )
            .await
    }

    /// A single mythic keystone dungeon by ID
    pub async fn get_mythic_keystone_dungeon(
        &self,
        region: Region,
        locale: Locale,
        dungeon_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/mythic-keystone/dungeon/{dungeon_id}"),
                region,
                Self::ns("dynamic", region, locale),
            )
            .await
    }

    /// Parent index for mythic keystone data
    pub async fn get_mythic_keystone_index(&self, region: Region, locale: Locale) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/mythic-keystone/index",
                region,
                Self::ns("dynamic", region, locale),
            )
            .await
    }

    /// Index of mythic keystone periods
    pub async fn get_mythic_keystone_periods_index(
        &self,
        region: Region,
        locale: Locale,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/mythic-keystone/period/index",
                region,
                Self::ns("dynamic", region, locale),
            )
            .await
    }

    /// A single mythic keystone period by ID
    pub async fn get_mythic_keystone_period(
        &self,
        region: Region,
        locale: Locale,
        period_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/mythic-keystone/period/{period_id}"),
                region,
                Self::ns("dynamic", region, locale),
            )
            .await
    }

    /// Index of mythic keystone seasons
    pub async fn get_mythic_keystone_seasons_index(
        &self,
        region: Region,
        locale: Locale,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/mythic-keystone/season/index",
                region,
                Self::ns("dynamic", region, locale),
            )
            .await
    }

    /// A single mythic keystone season by ID
    pub async fn get_mythic_keystone_season(
        &self,
        region: Region,
        locale: Locale,
        season_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/mythic-keystone/season/{season_id}"),
                region,
                Self::ns("dynamic", region, locale),
            )
            .await
    }

    // Mythic Keystone Leaderboard API

    /// Index of mythic keystone leaderboards for a connected realm
    pub async fn get_mythic_keystone_leaderboards_index(
        &self,
        region: Region,
        locale: Locale,
        connected_realm_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/connected-realm/{connected_realm_id}/mythic-leaderboard/index"),
                region,
                Self::ns("dynamic", region, locale),
            )
            .await
    }

    /// A leaderboard for one dungeon and period
    pub async fn get_mythic_keystone_leaderboard(
        &self,
        region: Region,
        locale: Locale,
        connected_realm_id: u32,
        dungeon_id: u32,
        period_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!(
                    "/data/wow/connected-realm/{connected_realm_id}/mythic-leaderboard/{dungeon_id}/period/{period_id}"
                ),
                region,
                Self::ns("dynamic", region, locale),
            )
            .await
    }

    // Mythic Raid Leaderboard API

    /// Hall-of-fame leaderboard for a raid and faction
    pub async fn get_mythic_raid_leaderboard(
        &self,
        region: Region,
        locale: Locale,
        raid: &str,
        faction: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/leaderboard/hall-of-fame/{raid}/{faction}"),
                region,
                Self::ns("dynamic", region, locale),
            )
            .await
    }

    // Pet API

    /// Index of battle pets
    pub async fn get_pets_index(&self, region: Region, locale: Locale) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/pet/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single battle pet by ID
    pub async fn get_pet(&self, region: Region, locale: Locale, pet_id: u32) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/pet/{pet_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Media for a battle pet by ID
    pub async fn get_pet_media(
        &self,
        region: Region,
        locale: Locale,
        pet_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/media/pet/{pet_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Index of pet abilities
    pub async fn get_pet_abilities_index(&self, region: Region, locale: Locale) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/pet-ability/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single pet ability by ID
    pub async fn get_pet_ability(
        &self,
        region: Region,
        locale: Locale,
        pet_ability_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/pet-ability/{pet_ability_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Media for a pet ability by ID
    pub async fn get_pet_ability_media(
        &self,
        region: Region,
        locale: Locale,
        pet_ability_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/media/pet-ability/{pet_ability_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    // Playable Class API

    /// Index of playable classes
    pub async fn get_playable_classes_index(
        &self,
        region: Region,
        locale: Locale,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/playable-class/index",
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    /// A single playable class by ID
    pub async fn get_playable_class(
        &self,
        region: Region,
        locale: Locale,
        class_id: u32,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/playable-class/{class_id}"),
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    /// Media for a playable class by ID
    pub async fn get_playable_class_media(
        &self,
        region: Region,
        locale: Locale,
        playable_class_id: u32,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/media/playable-class/{playable_class_id}"),
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    /// PvP talent slots for a playable class
    pub async fn get_pvp_talent_slots(
        &self,
        region: Region,
        locale: Locale,
        class_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/playable-class/{class_id}/pvp-talent-slots"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    // Playable Race API

    /// Index of playable races
    pub async fn get_playable_races_index(
        &self,
        region: Region,
        locale: Locale,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/playable-race/index",
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    /// A single playable race by ID
    pub async fn get_playable_race(
        &self,
        region: Region,
        locale: Locale,
        playable_race_id: u32,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/playable-race/{playable_race_id}"),
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    // Playable Specialization API

    /// Index of playable specializations
    pub async fn get_playable_specializations_index(
        &self,
        region: Region,
        locale: Locale,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/playable-specialization/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single playable specialization by ID
    pub async fn get_playable_specialization(
        &self,
        region: Region,
        locale: Locale,
        spec_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/playable-specialization/{spec_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Media for a playable specialization by ID
    pub async fn get_playable_specialization_media(
        &self,
        region: Region,
        locale: Locale,
        spec_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/media/playable-specialization/{spec_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    // Power Type API

    /// Index of power types
    pub async fn get_power_types_index(
        &self,
        region: Region,
        locale: Locale,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/power-type/index",
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    /// A single power type by ID
    pub async fn get_power_type(
        &self,
        region: Region,
        locale: Locale,
        power_type_id: u32,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/power-type/{power_type_id}"),
                region,
                Self::static_ns(region, locale, classic),
            )
            .await
    }

    // Profession API

    /// Index of professions
    pub async fn get_professions_index(&self, region: Region, locale: Locale) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/profession/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single profession by ID
    pub async fn get_profession(
        &self,
        region: Region,
        locale: Locale,
        profession_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/profession/{profession_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Media for a profession by ID
    pub async fn get_profession_media(
        &self,
        region: Region,
        locale: Locale,
        profession_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/media/profession/{profession_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A skill tier for a profession
    pub async fn get_profession_skill_tier(
        &self,
        region: Region,
        locale: Locale,
        profession_id: u32,
        skill_tier_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/profession/{profession_id}/skill-tier/{skill_tier_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single recipe by ID
    pub async fn get_recipe(
        &self,
        region: Region,
        locale: Locale,
        recipe_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/recipe/{recipe_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Media for a recipe by ID
    pub async fn get_recipe_media(
        &self,
        region: Region,
        locale: Locale,
        recipe_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/media/recipe/{recipe_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    // PvP Season API

    /// Index of PvP seasons
    pub async fn get_pvp_seasons_index(&self, region: Region, locale: Locale) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/pvp-season/index",
                region,
                Self::ns("dynamic", region, locale),
            )
            .await
    }

    /// A single PvP season by ID
    pub async fn get_pvp_season(
        &self,
        region: Region,
        locale: Locale,
        pvp_season_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/pvp-season/{pvp_season_id}"),
                region,
                Self::ns("dynamic", region, locale),
            )
            .await
    }

    /// Index of PvP leaderboards for a season
    pub async fn get_pvp_leaderboards_index(
        &self,
        region: Region,
        locale: Locale,
        pvp_season_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/pvp-season/{pvp_season_id}/pvp-leaderboard/index"),
                region,
                Self::ns("dynamic", region, locale),
            )
            .await
    }

    /// A PvP leaderboard for one bracket, e.g. `3v3`
    pub async fn get_pvp_leaderboard(
        &self,
        region: Region,
        locale: Locale,
        pvp_season_id: u32,
        pvp_bracket: &str,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/pvp-season/{pvp_season_id}/pvp-leaderboard/{pvp_bracket}"),
                region,
                Self::ns("dynamic", region, locale),
            )
            .await
    }

    /// Index of PvP rewards for a season
    pub async fn get_pvp_rewards_index(
        &self,
        region: Region,
        locale: Locale,
        pvp_season_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/pvp-season/{pvp_season_id}/pvp-reward/index"),
                region,
                Self::ns("dynamic", region, locale),
            )
            .await
    }

    // PvP Tier API

    /// Media for a PvP tier by ID
    pub async fn get_pvp_tier_media(
        &self,
        region: Region,
        locale: Locale,
        pvp_tier_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/media/pvp-tier/{pvp_tier_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Index of PvP tiers
    pub async fn get_pvp_tiers_index(&self, region: Region, locale: Locale) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/pvp-tier/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single PvP tier by ID
    pub async fn get_pvp_tier(
        &self,
        region: Region,
        locale: Locale,
        pvp_tier_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/pvp-tier/{pvp_tier_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    // Quest API

    /// Index of quests
    pub async fn get_quests_index(&self, region: Region, locale: Locale) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/quest/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single quest by ID
    pub async fn get_quest(&self, region: Region, locale: Locale, quest_id: u32) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/quest/{quest_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Index of quest categories
    pub async fn get_quest_categories_index(
        &self,
        region: Region,
        locale: Locale,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/quest/category/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single quest category by ID
    pub async fn get_quest_category(
        &self,
        region: Region,
        locale: Locale,
        quest_category_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/quest/category/{quest_category_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Index of quest areas
    pub async fn get_quest_areas_index(&self, region: Region, locale: Locale) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/quest/area/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single quest area by ID
    pub async fn get_quest_area(
        &self,
        region: Region,
        locale: Locale,
        quest_area_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/quest/area/{quest_area_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Index of quest types
    pub async fn get_quest_types_index(&self, region: Region, locale: Locale) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/quest/type/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single quest type by ID
    pub async fn get_quest_type(
        &self,
        region: Region,
        locale: Locale,
        quest_type_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/quest/type/{quest_type_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    // Realm API

    /// Index of realms
    pub async fn get_realms_index(
        &self,
        region: Region,
        locale: Locale,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/realm/index",
                region,
                Self::dynamic_ns(region, locale, classic),
            )
            .await
    }

    /// A single realm by slug
    pub async fn get_realm(
        &self,
        region: Region,
        locale: Locale,
        realm_slug: &str,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/realm/{realm_slug}"),
                region,
                Self::dynamic_ns(region, locale, classic),
            )
            .await
    }

    // Region API

    /// Index of regions
    pub async fn get_regions_index(
        &self,
        region: Region,
        locale: Locale,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/region/index",
                region,
                Self::dynamic_ns(region, locale, classic),
            )
            .await
    }

    /// A single region by ID
    pub async fn get_region(
        &self,
        region: Region,
        locale: Locale,
        region_id: u32,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/region/{region_id}"),
                region,
                Self::dynamic_ns(region, locale, classic),
            )
            .await
    }

    // Reputation API

    /// Index of reputation factions
    pub async fn get_reputation_factions_index(
        &self,
        region: Region,
        locale: Locale,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/reputation-faction/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single reputation faction by ID
    pub async fn get_reputation_faction(
        &self,
        region: Region,
        locale: Locale,
        reputation_faction_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/reputation-faction/{reputation_faction_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Index of reputation tiers
    pub async fn get_reputation_tiers_index(
        &self,
        region: Region,
        locale: Locale,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/reputation-tiers/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single set of reputation tiers by ID
    pub async fn get_reputation_tier(
        &self,
        region: Region,
        locale: Locale,
        reputation_tiers_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/reputation-tiers/{reputation_tiers_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    // Spell API

    /// A single spell by ID
    pub async fn get_spell(&self, region: Region, locale: Locale, spell_id: u32) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/spell/{spell_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Media for a spell by ID
    pub async fn get_spell_media(
        &self,
        region: Region,
        locale: Locale,
        spell_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/media/spell/{spell_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    // Talent API

    /// Index of talents
    pub async fn get_talents_index(&self, region: Region, locale: Locale) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/talent/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single talent by ID
    pub async fn get_talent(
        &self,
        region: Region,
        locale: Locale,
        talent_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/talent/{talent_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Index of PvP talents
    pub async fn get_pvp_talents_index(&self, region: Region, locale: Locale) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/pvp-talent/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single PvP talent by ID
    pub async fn get_pvp_talent(
        &self,
        region: Region,
        locale: Locale,
        pvp_talent_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/pvp-talent/{pvp_talent_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    // Tech Talent API

    /// Index of tech talent trees
    pub async fn get_tech_talent_tree_index(
        &self,
        region: Region,
        locale: Locale,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/tech-talent-tree/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single tech talent tree by ID
    pub async fn get_tech_talent_tree(
        &self,
        region: Region,
        locale: Locale,
        tech_talent_tree_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/tech-talent-tree/{tech_talent_tree_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Index of tech talents
    pub async fn get_tech_talent_index(&self, region: Region, locale: Locale) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/tech-talent/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single tech talent by ID
    pub async fn get_tech_talent(
        &self,
        region: Region,
        locale: Locale,
        tech_talent_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/tech-talent/{tech_talent_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// Media for a tech talent by ID
    pub async fn get_tech_talent_media(
        &self,
        region: Region,
        locale: Locale,
        tech_talent_id: u32,
    ) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/media/tech-talent/{tech_talent_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    // Title API

    /// Index of titles
    pub async fn get_titles_index(&self, region: Region, locale: Locale) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/title/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single title by ID
    pub async fn get_title(&self, region: Region, locale: Locale, title_id: u32) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/title/{title_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    // Toy API

    /// Index of toys
    pub async fn get_toy_index(&self, region: Region, locale: Locale) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/toy/index",
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    /// A single toy by ID
    pub async fn get_toy(&self, region: Region, locale: Locale, toy_id: u32) -> Result<Value> {
        self.client
            .get_resource(
                &format!("/data/wow/toy/{toy_id}"),
                region,
                Self::ns("static", region, locale),
            )
            .await
    }

    // WoW Token API

    /// Current WoW token quote
    pub async fn get_token_index(
        &self,
        region: Region,
        locale: Locale,
        classic: bool,
    ) -> Result<Value> {
        self.client
            .get_resource(
                "/data/wow/token/index",
                region,
                Self::dynamic_ns(region, locale, classic),
            )
            .await
    }
}
