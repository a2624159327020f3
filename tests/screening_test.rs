//! Screening pipeline integration tests.
//!
//! Tests cover:
//! - Full screen over a mock market data port
//! - Per-symbol isolation: data errors and filter failures are omissions
//! - Score-descending result ordering
//! - Batch summary statistics
//! - Snapshot idempotence: identical inputs write identical bytes

mod common;

use chrono::{DateTime, Utc};
use common::*;
use tempfile::TempDir;
use tickerwatch::adapters::json_snapshot_adapter::JsonSnapshotAdapter;
use tickerwatch::domain::config::{ScreenFilters, SectorConfig, TechnicalConfig};
use tickerwatch::domain::market_data::Fundamentals;
use tickerwatch::domain::screen::{screen_universe, summarize};
use tickerwatch::ports::snapshot_port::SnapshotPort;

fn universe(symbols: &[&str]) -> Vec<String> {
    symbols.iter().map(|s| s.to_string()).collect()
}

fn screen_defaults(
    port: &MockMarketDataPort,
    symbols: &[&str],
) -> Vec<tickerwatch::domain::screen::ScreenResult> {
    screen_universe(
        &universe(symbols),
        port,
        &SectorConfig::default(),
        &TechnicalConfig::default(),
        &ScreenFilters::default(),
    )
}

#[test]
fn full_screen_with_mock_port() {
    let port = MockMarketDataPort::new()
        .with_history("NVDA", trending_bars(250))
        .with_fundamentals("NVDA", large_cap_fundamentals("NVIDIA Corporation"));

    let results = screen_defaults(&port, &["NVDA"]);
    assert_eq!(results.len(), 1);

    let result = &results[0];
    assert_eq!(result.symbol, "NVDA");
    assert_eq!(result.company_name, "NVIDIA Corporation");
    assert_eq!(result.sector, "tech");
    assert_eq!(result.signals.len(), 6);
    assert!((0.0..=100.0).contains(&result.overall_score));
    assert!(result.entry_price < result.price);
    assert!(result.stop_loss < result.entry_price);
    assert!(result.target_price > result.entry_price);
}

#[test]
fn data_errors_omit_only_the_failing_symbol() {
    let port = MockMarketDataPort::new()
        .with_history("NVDA", trending_bars(250))
        .with_fundamentals("NVDA", large_cap_fundamentals("NVIDIA Corporation"))
        .with_failure("AMD");

    let results = screen_defaults(&port, &["NVDA", "AMD", "MISSING"]);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].symbol, "NVDA");
}

#[test]
fn filters_omit_without_failing_the_batch() {
    let small_cap = Fundamentals {
        market_cap: Some(500_000_000.0),
        ..large_cap_fundamentals("Tiny Corp")
    };
    let mut thin = trending_bars(250);
    thin.last_mut().unwrap().volume = 100_000;

    let port = MockMarketDataPort::new()
        .with_history("NVDA", trending_bars(250))
        .with_fundamentals("NVDA", large_cap_fundamentals("NVIDIA Corporation"))
        .with_history("TINY", trending_bars(250))
        .with_fundamentals("TINY", small_cap)
        .with_history("THIN", thin)
        .with_fundamentals("THIN", large_cap_fundamentals("Thin Corp"));

    let results = screen_defaults(&port, &["NVDA", "TINY", "THIN"]);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].symbol, "NVDA");
}

#[test]
fn missing_fundamentals_fail_the_market_cap_filter() {
    // No fundamentals entry: market cap reads as zero.
    let port = MockMarketDataPort::new().with_history("NVDA", trending_bars(250));
    assert!(screen_defaults(&port, &["NVDA"]).is_empty());
}

#[test]
fn results_sorted_by_score_descending() {
    let port = MockMarketDataPort::new()
        .with_history("NVDA", trending_bars(250))
        .with_fundamentals("NVDA", large_cap_fundamentals("NVIDIA Corporation"))
        .with_history("PFE", declining_bars(250))
        .with_fundamentals("PFE", large_cap_fundamentals("Pfizer Inc."));

    let results = screen_defaults(&port, &["PFE", "NVDA"]);
    assert_eq!(results.len(), 2);
    assert!(results[0].overall_score >= results[1].overall_score);
    // Uptrend scores above downtrend.
    assert_eq!(results[0].symbol, "NVDA");
    assert_eq!(results[1].symbol, "PFE");
}

#[test]
fn summary_reflects_the_batch() {
    let port = MockMarketDataPort::new()
        .with_history("NVDA", trending_bars(250))
        .with_fundamentals("NVDA", large_cap_fundamentals("NVIDIA Corporation"))
        .with_history("PFE", declining_bars(250))
        .with_fundamentals("PFE", large_cap_fundamentals("Pfizer Inc."));

    let results = screen_defaults(&port, &["NVDA", "PFE"]);
    let summary = summarize(&results);

    assert_eq!(summary.total_stocks, 2);
    assert_eq!(summary.sectors["tech"], 1);
    assert_eq!(summary.sectors["healthcare"], 1);
    assert_eq!(summary.recommendations.values().sum::<usize>(), 2);
    assert_eq!(summary.top_picks, vec!["NVDA", "PFE"]);
    let expected_avg =
        (results[0].overall_score + results[1].overall_score) / 2.0;
    assert!((summary.avg_score - expected_avg).abs() < 1e-9);
}

#[test]
fn snapshot_is_byte_identical_across_runs() {
    let port = MockMarketDataPort::new()
        .with_history("NVDA", trending_bars(250))
        .with_fundamentals("NVDA", large_cap_fundamentals("NVIDIA Corporation"))
        .with_history("PFE", declining_bars(250))
        .with_fundamentals("PFE", large_cap_fundamentals("Pfizer Inc."));
    let as_of: DateTime<Utc> = "2024-04-01T14:30:00Z".parse().unwrap();

    let snapshot = |dir: &TempDir| {
        let results = screen_defaults(&port, &["NVDA", "PFE"]);
        let summary = summarize(&results);
        let adapter = JsonSnapshotAdapter::new(dir.path().to_path_buf());
        let path = adapter.write_screen(&results, &summary, as_of).unwrap();
        std::fs::read(path).unwrap()
    };

    let first_dir = TempDir::new().unwrap();
    let second_dir = TempDir::new().unwrap();
    assert_eq!(snapshot(&first_dir), snapshot(&second_dir));
}
