//! Market data input types: price bars, quotes, and fundamentals.
//!
//! These are read-only inputs owned by the external data collaborator. Bars
//! arrive in ascending chronological order; missing bars simply shrink the
//! available history.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

impl PriceBar {
    /// close × volume, the dollar turnover of the bar.
    pub fn dollar_volume(&self) -> f64 {
        self.close * self.volume as f64
    }
}

/// Latest trade price plus the prior close, enough to derive day change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub last: f64,
    pub prev_close: f64,
}

impl Quote {
    /// Per-share change since the previous close.
    pub fn day_change(&self) -> f64 {
        self.last - self.prev_close
    }

    /// Day change as a percentage of the previous close; 0 when the
    /// previous close is not positive.
    pub fn day_change_pct(&self) -> f64 {
        if self.prev_close > 0.0 {
            (self.last - self.prev_close) / self.prev_close * 100.0
        } else {
            0.0
        }
    }
}

/// Fundamental metadata for a symbol. Every field is optional; providers
/// routinely omit any of them, so readers must fall back explicitly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fundamentals {
    pub market_cap: Option<f64>,
    pub long_name: Option<String>,
    pub trailing_pe: Option<f64>,
}
