//! Volume anomaly signal.
//!
//! Ratio of the latest volume to its trailing mean (window includes the
//! latest bar). At or above the spike threshold the signal is bullish with
//! strength ratio×30; otherwise neutral with strength 100 - ratio×50,
//! floored at 20. Zero average volume is treated as the neutral baseline
//! (ratio 1), not an error.

use crate::domain::config::TechnicalConfig;
use crate::domain::market_data::PriceBar;
use crate::domain::signal::{SignalDirection, SignalKind, TechnicalSignal};

pub fn volume_signal(bars: &[PriceBar], config: &TechnicalConfig) -> Option<TechnicalSignal> {
    let window = config.volume_lookback_days;
    if window == 0 || bars.len() < window {
        return None;
    }

    let tail = &bars[bars.len() - window..];
    let avg_volume = tail.iter().map(|b| b.volume as f64).sum::<f64>() / window as f64;
    let current_volume = bars[bars.len() - 1].volume as f64;

    let ratio = if avg_volume > 0.0 {
        current_volume / avg_volume
    } else {
        1.0
    };

    let (direction, strength, description) = if ratio >= config.volume_spike_threshold {
        (
            SignalDirection::Bullish,
            (ratio * 30.0).min(100.0),
            format!("Volume spike: {ratio:.1}x average"),
        )
    } else {
        (
            SignalDirection::Neutral,
            (100.0 - ratio * 50.0).max(20.0),
            format!("Volume: {ratio:.1}x average"),
        )
    };

    Some(TechnicalSignal::new(
        SignalKind::Volume,
        current_volume,
        direction,
        strength,
        description,
    ))
}
