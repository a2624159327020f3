//! Screening universe construction.
//!
//! The universe is the union of every configured sector's tickers plus a
//! fixed watchlist of additional large caps, uppercased and deduplicated
//! while preserving first-seen order (the screening batch is deterministic).

use crate::domain::config::SectorConfig;
use crate::domain::error::TickerwatchError;
use std::collections::HashSet;

/// Additional high-quality names screened alongside the sector tickers.
pub const EXTRA_SYMBOLS: [&str; 10] = [
    "AAPL", "GOOGL", "AMZN", "META", "BRK-B", "JNJ", "PG", "KO", "WMT", "HD",
];

pub fn build_universe(sectors: &SectorConfig) -> Vec<String> {
    let mut symbols = Vec::new();
    let mut seen = HashSet::new();

    let configured = sectors
        .sectors
        .iter()
        .flat_map(|s| s.tickers.iter().map(String::as_str));
    for symbol in configured.chain(EXTRA_SYMBOLS.iter().copied()) {
        let symbol = symbol.to_uppercase();
        if seen.insert(symbol.clone()) {
            symbols.push(symbol);
        }
    }

    symbols
}

/// Parses a comma-separated symbol override list. Rejects empty tokens and
/// duplicates rather than silently dropping them.
pub fn parse_symbols(input: &str) -> Result<Vec<String>, TickerwatchError> {
    let mut symbols = Vec::new();
    let mut seen = HashSet::new();

    for token in input.split(',') {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(TickerwatchError::SymbolList {
                reason: "empty token in symbol list".to_string(),
            });
        }
        let symbol = trimmed.to_uppercase();
        if !seen.insert(symbol.clone()) {
            return Err(TickerwatchError::SymbolList {
                reason: format!("duplicate symbol: {symbol}"),
            });
        }
        symbols.push(symbol);
    }

    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::Sector;

    #[test]
    fn default_universe_unions_sectors_and_extras() {
        let universe = build_universe(&SectorConfig::default());
        assert!(universe.contains(&"NVDA".to_string()));
        assert!(universe.contains(&"XOM".to_string()));
        assert!(universe.contains(&"AAPL".to_string()));
        // JNJ appears in both healthcare and the extras; counted once.
        assert_eq!(universe.iter().filter(|s| *s == "JNJ").count(), 1);
    }

    #[test]
    fn universe_preserves_first_seen_order() {
        let sectors = SectorConfig {
            sectors: vec![Sector {
                name: "tech".into(),
                tickers: vec!["NVDA".into(), "AMD".into()],
            }],
        };
        let universe = build_universe(&sectors);
        assert_eq!(universe[0], "NVDA");
        assert_eq!(universe[1], "AMD");
        assert_eq!(universe[2], "AAPL");
    }

    #[test]
    fn parse_symbols_uppercases_and_trims() {
        let symbols = parse_symbols(" nvda , amd ").unwrap();
        assert_eq!(symbols, vec!["NVDA", "AMD"]);
    }

    #[test]
    fn parse_symbols_rejects_empty_token() {
        assert!(parse_symbols("NVDA,,AMD").is_err());
    }

    #[test]
    fn parse_symbols_rejects_duplicates() {
        assert!(parse_symbols("NVDA,nvda").is_err());
    }
}
