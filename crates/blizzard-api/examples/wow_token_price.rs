//! Example fetching the current WoW token price for a region
//!
//! Requires `BLIZZARD_CLIENT_ID` and `BLIZZARD_CLIENT_SECRET` in the
//! environment.

use blizzard_api::{BlizzardApi, Locale, Region};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let client_id = std::env::var("BLIZZARD_CLIENT_ID")?;
    let client_secret = std::env::var("BLIZZARD_CLIENT_SECRET")?;

    let api = BlizzardApi::new(client_id, client_secret)?;

    for region in [Region::US, Region::EU, Region::KR] {
        let token = api
            .wow
            .game_data
            .get_token_index(region, Locale::EnUs, false)
            .await?;

        // Price is reported in copper
        let gold = token["price"].as_u64().unwrap_or(0) / 10_000;
        println!("{region}: {gold} gold");
    }

    Ok(())
}
