//! Weighted signal aggregation into a single 0-100 score.
//!
//! Each signal contributes +strength (bullish) or -strength (bearish) times
//! its fixed indicator weight; neutral signals contribute nothing. The sum is
//! shifted by 50 and clamped to [0, 100].
//!
//! Known behavior: when a signal is absent its weight is NOT redistributed.
//! Missing data pulls the score toward the neutral 50 rather than amplifying
//! the remaining signals.

use crate::domain::signal::{SignalDirection, SignalKind, TechnicalSignal};

pub const WEIGHT_MA_LONG: f64 = 0.25;
pub const WEIGHT_MA_MEDIUM: f64 = 0.20;
pub const WEIGHT_MA_SHORT: f64 = 0.15;
pub const WEIGHT_RSI: f64 = 0.15;
pub const WEIGHT_VOLUME: f64 = 0.15;
pub const WEIGHT_MOMENTUM: f64 = 0.10;

pub fn weight(kind: SignalKind) -> f64 {
    match kind {
        SignalKind::MaLong => WEIGHT_MA_LONG,
        SignalKind::MaMedium => WEIGHT_MA_MEDIUM,
        SignalKind::MaShort => WEIGHT_MA_SHORT,
        SignalKind::Rsi => WEIGHT_RSI,
        SignalKind::Volume => WEIGHT_VOLUME,
        SignalKind::Momentum => WEIGHT_MOMENTUM,
    }
}

pub fn overall_score(signals: &[TechnicalSignal]) -> f64 {
    let sum: f64 = signals
        .iter()
        .map(|signal| {
            let contribution = match signal.direction {
                SignalDirection::Bullish => signal.strength,
                SignalDirection::Bearish => -signal.strength,
                SignalDirection::Neutral => 0.0,
            };
            contribution * weight(signal.indicator)
        })
        .sum();

    (sum + 50.0).clamp(0.0, 100.0)
}
