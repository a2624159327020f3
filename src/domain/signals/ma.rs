//! Moving-average bias signals.
//!
//! One signal per configured window (short/medium/long). Direction is bullish
//! when the latest close sits above the average, bearish below; strength is
//! the percentage gap between close and average, capped at 100. The whole
//! group requires the longest window of history: with fewer bars no MA signal
//! is produced at all.

use crate::domain::config::TechnicalConfig;
use crate::domain::market_data::PriceBar;
use crate::domain::signal::{SignalDirection, SignalKind, TechnicalSignal};

use super::sma;

pub fn moving_average_signals(
    bars: &[PriceBar],
    config: &TechnicalConfig,
) -> Vec<TechnicalSignal> {
    if bars.len() < config.ma_long {
        return Vec::new();
    }

    let windows = [
        (SignalKind::MaShort, config.ma_short),
        (SignalKind::MaMedium, config.ma_medium),
        (SignalKind::MaLong, config.ma_long),
    ];

    let close = bars[bars.len() - 1].close;
    windows
        .into_iter()
        .map(|(kind, window)| ma_signal(kind, window, close, sma(bars, window)))
        .collect()
}

fn ma_signal(kind: SignalKind, window: usize, close: f64, average: f64) -> TechnicalSignal {
    let direction = if close > average {
        SignalDirection::Bullish
    } else {
        SignalDirection::Bearish
    };
    let strength = if average != 0.0 {
        ((close - average).abs() / average * 100.0).min(100.0)
    } else {
        0.0
    };
    let relation = match direction {
        SignalDirection::Bullish => "above",
        _ => "below",
    };
    TechnicalSignal::new(
        kind,
        average,
        direction,
        strength,
        format!("Price {relation} {window}-day MA"),
    )
}
