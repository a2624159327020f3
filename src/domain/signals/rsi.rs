//! RSI (Relative Strength Index) signal.
//!
//! Simple average of gains/losses over the last `rsi_period` price changes
//! (not Wilder-smoothed): RSI = 100 - 100 / (1 + avg_gain / avg_loss), with
//! RSI = 100 when there are no losses.
//!
//! Mapping: at or below the oversold threshold the signal is bullish with
//! strength twice the distance below it; at or above overbought it is bearish
//! symmetrically; in between it is neutral with strength 50 - |50 - RSI|.

use crate::domain::config::TechnicalConfig;
use crate::domain::market_data::PriceBar;
use crate::domain::signal::{SignalDirection, SignalKind, TechnicalSignal};

pub fn rsi_signal(bars: &[PriceBar], config: &TechnicalConfig) -> Option<TechnicalSignal> {
    let period = config.rsi_period;
    if period == 0 || bars.len() < period + 1 {
        return None;
    }

    let rsi = rsi_value(bars, period);

    let (direction, strength, description) = if rsi <= config.rsi_oversold {
        (
            SignalDirection::Bullish,
            (config.rsi_oversold - rsi) * 2.0,
            format!("RSI oversold at {rsi:.1}"),
        )
    } else if rsi >= config.rsi_overbought {
        (
            SignalDirection::Bearish,
            (rsi - config.rsi_overbought) * 2.0,
            format!("RSI overbought at {rsi:.1}"),
        )
    } else {
        (
            SignalDirection::Neutral,
            50.0 - (50.0 - rsi).abs(),
            format!("RSI neutral at {rsi:.1}"),
        )
    };

    Some(TechnicalSignal::new(
        SignalKind::Rsi,
        rsi,
        direction,
        strength,
        description,
    ))
}

/// RSI over the trailing `period` changes. Caller guarantees
/// `bars.len() >= period + 1`.
fn rsi_value(bars: &[PriceBar], period: usize) -> f64 {
    let tail = &bars[bars.len() - (period + 1)..];

    let mut gain_sum = 0.0;
    let mut loss_sum = 0.0;
    for pair in tail.windows(2) {
        let change = pair[1].close - pair[0].close;
        if change > 0.0 {
            gain_sum += change;
        } else {
            loss_sum += -change;
        }
    }

    let avg_gain = gain_sum / period as f64;
    let avg_loss = loss_sum / period as f64;

    if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}
