//! Support and resistance level estimation.
//!
//! Looks at the trailing 50 bars and marks a bar as a local high (low) when
//! its high (low) is the extremum of the 5-bar window centered on it.
//! Resistance is the highest local high, support the lowest local low. With
//! fewer than 50 bars, or a series with no interior extremum, no levels are
//! produced; callers must treat that as "no bound available", never as
//! support = 0.

use crate::domain::market_data::PriceBar;
use serde::Serialize;

pub const LOOKBACK_BARS: usize = 50;
const EXTREMUM_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SupportResistance {
    pub support: f64,
    pub resistance: f64,
    /// (current - support) / current
    pub distance_to_support: f64,
    /// (resistance - current) / current
    pub distance_to_resistance: f64,
}

pub fn estimate(bars: &[PriceBar]) -> Option<SupportResistance> {
    if bars.len() < LOOKBACK_BARS {
        return None;
    }

    let recent = &bars[bars.len() - LOOKBACK_BARS..];
    let half = EXTREMUM_WINDOW / 2;

    let mut resistance: Option<f64> = None;
    let mut support: Option<f64> = None;

    for i in half..recent.len() - half {
        let window = &recent[i - half..=i + half];
        let window_high = window.iter().map(|b| b.high).fold(f64::MIN, f64::max);
        let window_low = window.iter().map(|b| b.low).fold(f64::MAX, f64::min);

        if recent[i].high == window_high {
            resistance = Some(resistance.map_or(recent[i].high, |r| r.max(recent[i].high)));
        }
        if recent[i].low == window_low {
            support = Some(support.map_or(recent[i].low, |s| s.min(recent[i].low)));
        }
    }

    let (support, resistance) = (support?, resistance?);
    let current = bars[bars.len() - 1].close;
    if current <= 0.0 {
        return None;
    }

    Some(SupportResistance {
        support,
        resistance,
        distance_to_support: (current - support) / current,
        distance_to_resistance: (resistance - current) / current,
    })
}
