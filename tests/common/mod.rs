#![allow(dead_code)]

//! Shared test fixtures: date helpers, bar generators, and a mock market
//! data port backed by in-memory maps.

use chrono::NaiveDate;
use std::collections::HashMap;
use tickerwatch::domain::error::TickerwatchError;
use tickerwatch::domain::market_data::{Fundamentals, PriceBar, Quote};
use tickerwatch::ports::market_data_port::MarketDataPort;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn make_bar(day_offset: usize, close: f64, volume: i64) -> PriceBar {
    PriceBar {
        date: date(2024, 1, 1) + chrono::Days::new(day_offset as u64),
        open: close,
        high: close * 1.01,
        low: close * 0.99,
        close,
        volume,
    }
}

/// Gentle uptrend with a dip every 7th bar so support and resistance levels
/// exist.
pub fn trending_bars(count: usize) -> Vec<PriceBar> {
    (0..count)
        .map(|i| {
            let close = 100.0 + i as f64 * 0.1 + if i % 7 == 0 { -2.0 } else { 0.0 };
            make_bar(i, close, 2_000_000)
        })
        .collect()
}

/// Steady decline from 200, same shape every run.
pub fn declining_bars(count: usize) -> Vec<PriceBar> {
    (0..count)
        .map(|i| {
            let close = 200.0 - i as f64 * 0.3 + if i % 7 == 0 { 1.5 } else { 0.0 };
            make_bar(i, close, 2_000_000)
        })
        .collect()
}

pub fn large_cap_fundamentals(name: &str) -> Fundamentals {
    Fundamentals {
        market_cap: Some(50_000_000_000.0),
        long_name: Some(name.to_string()),
        trailing_pe: Some(25.0),
    }
}

#[derive(Default)]
pub struct MockMarketDataPort {
    history: HashMap<String, Vec<PriceBar>>,
    quotes: HashMap<String, Quote>,
    fundamentals: HashMap<String, Fundamentals>,
    failing: Vec<String>,
}

impl MockMarketDataPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(mut self, symbol: &str, bars: Vec<PriceBar>) -> Self {
        self.history.insert(symbol.to_string(), bars);
        self
    }

    pub fn with_quote(mut self, symbol: &str, quote: Quote) -> Self {
        self.quotes.insert(symbol.to_string(), quote);
        self
    }

    pub fn with_fundamentals(mut self, symbol: &str, fundamentals: Fundamentals) -> Self {
        self.fundamentals.insert(symbol.to_string(), fundamentals);
        self
    }

    /// Makes every fetch for the symbol fail with a bad-record error.
    pub fn with_failure(mut self, symbol: &str) -> Self {
        self.failing.push(symbol.to_string());
        self
    }

    fn check_failure(&self, symbol: &str) -> Result<(), TickerwatchError> {
        if self.failing.iter().any(|s| s == symbol) {
            return Err(TickerwatchError::BadPriceRecord {
                symbol: symbol.to_string(),
                reason: "simulated failure".to_string(),
            });
        }
        Ok(())
    }
}

impl MarketDataPort for MockMarketDataPort {
    fn fetch_history(&self, symbol: &str) -> Result<Vec<PriceBar>, TickerwatchError> {
        self.check_failure(symbol)?;
        self.history
            .get(symbol)
            .cloned()
            .ok_or_else(|| TickerwatchError::NoData {
                symbol: symbol.to_string(),
            })
    }

    fn fetch_quote(&self, symbol: &str) -> Result<Quote, TickerwatchError> {
        self.check_failure(symbol)?;
        self.quotes
            .get(symbol)
            .copied()
            .ok_or_else(|| TickerwatchError::NoData {
                symbol: symbol.to_string(),
            })
    }

    fn fetch_fundamentals(&self, symbol: &str) -> Result<Fundamentals, TickerwatchError> {
        self.check_failure(symbol)?;
        Ok(self
            .fundamentals
            .get(symbol)
            .cloned()
            .unwrap_or_default())
    }
}
