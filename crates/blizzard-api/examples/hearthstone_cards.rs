//! Example searching Hearthstone cards with server-side filters
//!
//! Requires `BLIZZARD_CLIENT_ID` and `BLIZZARD_CLIENT_SECRET` in the
//! environment.

use blizzard_api::{BlizzardApi, Locale, QueryParams, Region};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let client_id = std::env::var("BLIZZARD_CLIENT_ID")?;
    let client_secret = std::env::var("BLIZZARD_CLIENT_SECRET")?;

    let api = BlizzardApi::new(client_id, client_secret)?;

    println!("Searching legendary mage cards costing 10 mana...\n");

    let filters = QueryParams::new()
        .with("manaCost", 10)
        .with("rarity", "legendary")
        .with("pageSize", 10);
    let result = api
        .hearthstone
        .game_data
        .search_cards(Region::US, Locale::EnUs, Some("mage"), filters)
        .await?;

    let count = result["cardCount"].as_u64().unwrap_or(0);
    println!("{count} matching cards");

    if let Some(cards) = result["cards"].as_array() {
        for card in cards {
            println!(
                "  {} ({} mana, {} attack / {} health)",
                card["name"], card["manaCost"], card["attack"], card["health"]
            );
        }
    }

    Ok(())
}
