//! Price momentum signal.
//!
//! Weighted blend of the short (5-day) and long (20-day) percentage returns,
//! 0.6/0.4. A blend above +5% reads bullish, below -5% bearish, otherwise
//! neutral with a fixed strength of 50. Directional strength is the blend
//! scaled by 500 and capped at 100.

use crate::domain::config::TechnicalConfig;
use crate::domain::market_data::PriceBar;
use crate::domain::signal::{SignalDirection, SignalKind, TechnicalSignal};

const SHORT_WEIGHT: f64 = 0.6;
const LONG_WEIGHT: f64 = 0.4;
const DIRECTION_THRESHOLD: f64 = 0.05;
const STRENGTH_SCALE: f64 = 500.0;

pub fn momentum_signal(bars: &[PriceBar], config: &TechnicalConfig) -> Option<TechnicalSignal> {
    let short = config.momentum_short_days;
    let long = config.momentum_long_days;
    if short == 0 || long == 0 || bars.len() < long + 1 {
        return None;
    }

    let short_return = pct_return(bars, short)?;
    let long_return = pct_return(bars, long)?;
    let blend = short_return * SHORT_WEIGHT + long_return * LONG_WEIGHT;

    let (direction, strength, description) = if blend > DIRECTION_THRESHOLD {
        (
            SignalDirection::Bullish,
            (blend * STRENGTH_SCALE).min(100.0),
            format!("Strong upward momentum: {:.1}%", blend * 100.0),
        )
    } else if blend < -DIRECTION_THRESHOLD {
        (
            SignalDirection::Bearish,
            (blend.abs() * STRENGTH_SCALE).min(100.0),
            format!("Downward momentum: {:.1}%", blend * 100.0),
        )
    } else {
        (
            SignalDirection::Neutral,
            50.0,
            format!("Sideways momentum: {:.1}%", blend * 100.0),
        )
    };

    Some(TechnicalSignal::new(
        SignalKind::Momentum,
        blend * 100.0,
        direction,
        strength,
        description,
    ))
}

/// Fractional return over the last `days` bars; None when the reference close
/// is not positive.
fn pct_return(bars: &[PriceBar], days: usize) -> Option<f64> {
    let last = bars[bars.len() - 1].close;
    let reference = bars[bars.len() - 1 - days].close;
    if reference > 0.0 {
        Some((last - reference) / reference)
    } else {
        None
    }
}
