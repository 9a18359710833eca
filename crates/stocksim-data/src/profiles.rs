//! Known symbol profiles and the seed-derived fallback.

use stocksim_core::types::SymbolProfile;

/// Profiles for well-known NSE symbols.
pub const KNOWN_PROFILES: &[(&str, SymbolProfile)] = &[
    ("RELIANCE", SymbolProfile::new(2900.0, 0.025, 5_000_000)),
    ("TCS", SymbolProfile::new(3800.0, 0.02, 2_000_000)),
    ("HDFCBANK", SymbolProfile::new(1500.0, 0.022, 8_000_000)),
    ("INFY", SymbolProfile::new(1600.0, 0.028, 6_000_000)),
    ("ICICIBANK", SymbolProfile::new(1100.0, 0.03, 12_000_000)),
    ("HINDUNILVR", SymbolProfile::new(2400.0, 0.018, 1_500_000)),
    ("SBIN", SymbolProfile::new(830.0, 0.035, 15_000_000)),
    ("BHARTIARTL", SymbolProfile::new(1300.0, 0.032, 7_000_000)),
    ("ITC", SymbolProfile::new(430.0, 0.02, 10_000_000)),
    ("L&T", SymbolProfile::new(3600.0, 0.025, 2_500_000)),
    ("BAJFINANCE", SymbolProfile::new(7000.0, 0.04, 1_000_000)),
    ("KOTAKBANK", SymbolProfile::new(1700.0, 0.027, 4_000_000)),
    ("ASIANPAINT", SymbolProfile::new(2900.0, 0.021, 1_200_000)),
    ("MARUTI", SymbolProfile::new(12500.0, 0.029, 500_000)),
    ("TITAN", SymbolProfile::new(3400.0, 0.031, 1_800_000)),
    ("SUNPHARMA", SymbolProfile::new(1500.0, 0.033, 3_000_000)),
    ("ULTRACEMCO", SymbolProfile::new(10500.0, 0.024, 400_000)),
    ("WIPRO", SymbolProfile::new(480.0, 0.03, 9_000_000)),
    ("NESTLEIND", SymbolProfile::new(2500.0, 0.015, 300_000)),
    ("ADANIENT", SymbolProfile::new(3200.0, 0.05, 4_500_000)),
    ("TATAMOTORS", SymbolProfile::new(980.0, 0.045, 20_000_000)),
    ("TATASTEEL", SymbolProfile::new(165.0, 0.048, 30_000_000)),
    ("YESBANK", SymbolProfile::new(24.0, 0.06, 100_000_000)),
    ("ZOMATO", SymbolProfile::new(190.0, 0.055, 50_000_000)),
];

/// Look up a known profile by normalised (upper-case) symbol.
pub fn known_profile(symbol: &str) -> Option<SymbolProfile> {
    KNOWN_PROFILES
        .iter()
        .find(|(name, _)| *name == symbol)
        .map(|(_, profile)| *profile)
}

/// Stable parameters for a symbol without a known profile.
pub fn derived_profile(seed: i32) -> SymbolProfile {
    let magnitude = i64::from(seed).unsigned_abs();
    SymbolProfile {
        base_price: (magnitude % 8000 + 50) as f64,
        volatility: ((magnitude % 20 + 20) as f64) / 1000.0,
        base_volume: magnitude % 10_000_000 + 500_000,
    }
}

/// Known profile if present, otherwise the seed-derived one.
pub fn resolve_profile(symbol: &str, seed: i32) -> SymbolProfile {
    known_profile(symbol).unwrap_or_else(|| derived_profile(seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::symbol_seed;

    #[test]
    fn test_known_profile_lookup() {
        let tcs = known_profile("TCS").unwrap();
        assert_eq!(tcs.base_price, 3800.0);
        assert_eq!(tcs.volatility, 0.02);
        assert_eq!(tcs.base_volume, 2_000_000);
        assert!(known_profile("tcs").is_none());
        assert_eq!(KNOWN_PROFILES.len(), 24);
    }

    #[test]
    fn test_derived_profile_for_unknown_symbol() {
        let profile = resolve_profile("TESTCO", symbol_seed("TESTCO"));
        // |seed| = 1_823_840_130
        assert_eq!(profile.base_price, 180.0);
        assert_eq!(profile.volatility, 0.03);
        assert_eq!(profile.base_volume, 4_340_130);
    }

    #[test]
    fn test_derived_profile_bounds() {
        for seed in [i32::MIN, -1, 0, 1, 7_919, i32::MAX] {
            let p = derived_profile(seed);
            assert!((50.0..8050.0).contains(&p.base_price));
            assert!((0.02..0.04).contains(&p.volatility));
            assert!((500_000..10_500_000).contains(&p.base_volume));
        }
    }
}
