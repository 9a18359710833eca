//! List symbol profiles command.

use anyhow::Result;
use stocksim_data::KNOWN_PROFILES;

pub async fn run() -> Result<()> {
    println!("Built-in Symbol Profiles");
    println!("═══════════════════════════════════════════════════════════");
    println!("  {:<14}{:>12}{:>12}{:>16}", "SYMBOL", "BASE PRICE", "VOLATILITY", "BASE VOLUME");
    println!("  ───────────────────────────────────────────────────────");

    for (symbol, profile) in KNOWN_PROFILES {
        println!(
            "  {:<14}{:>12.2}{:>11.1}%{:>16}",
            symbol,
            profile.base_price,
            profile.volatility * 100.0,
            profile.base_volume
        );
    }

    println!();
    println!("Other symbols get stable parameters derived from their name.");

    Ok(())
}
