//! Independent technical signal computations.
//!
//! Each submodule turns the price/volume series into at most one signal (the
//! moving-average module produces one per window). A signal whose lookback
//! precondition is not met is simply absent, never fabricated with zero
//! strength.

pub mod ma;
pub mod rsi;
pub mod volume;
pub mod momentum;

use crate::domain::config::TechnicalConfig;
use crate::domain::market_data::PriceBar;
use crate::domain::signal::TechnicalSignal;

/// Computes every available signal for the series, in a fixed order:
/// MA short/medium/long, RSI, volume, momentum.
pub fn compute_signals(bars: &[PriceBar], config: &TechnicalConfig) -> Vec<TechnicalSignal> {
    let mut signals = ma::moving_average_signals(bars, config);
    if let Some(signal) = rsi::rsi_signal(bars, config) {
        signals.push(signal);
    }
    if let Some(signal) = volume::volume_signal(bars, config) {
        signals.push(signal);
    }
    if let Some(signal) = momentum::momentum_signal(bars, config) {
        signals.push(signal);
    }
    signals
}

/// Simple mean of the last `window` closes. Caller guarantees
/// `bars.len() >= window > 0`.
pub(crate) fn sma(bars: &[PriceBar], window: usize) -> f64 {
    let tail = &bars[bars.len() - window..];
    tail.iter().map(|b| b.close).sum::<f64>() / window as f64
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use chrono::NaiveDate;

    /// Bars with the given closes on consecutive days, flat volume.
    pub fn bars_from_closes(closes: &[f64]) -> Vec<PriceBar> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PriceBar {
                date: start + chrono::Days::new(i as u64),
                open: close,
                high: close,
                low: close,
                close,
                volume: 1_000_000,
            })
            .collect()
    }
}
