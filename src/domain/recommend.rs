//! Score-to-recommendation classification.
//!
//! Pure threshold classifier with one override: a bearish long-MA signal
//! combined with a score under 40 forces a plain sell regardless of the finer
//! thresholds below it.

use crate::domain::signal::{SignalKind, TechnicalSignal};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::StrongBuy => write!(f, "strong_buy"),
            Recommendation::Buy => write!(f, "buy"),
            Recommendation::Hold => write!(f, "hold"),
            Recommendation::Sell => write!(f, "sell"),
            Recommendation::StrongSell => write!(f, "strong_sell"),
        }
    }
}

pub fn recommend(overall_score: f64, signals: &[TechnicalSignal]) -> Recommendation {
    let long_ma_bearish = signals
        .iter()
        .find(|s| s.indicator == SignalKind::MaLong)
        .is_some_and(|s| s.is_bearish());

    if long_ma_bearish && overall_score < 40.0 {
        return Recommendation::Sell;
    }

    if overall_score >= 80.0 {
        Recommendation::StrongBuy
    } else if overall_score >= 65.0 {
        Recommendation::Buy
    } else if overall_score >= 35.0 {
        Recommendation::Hold
    } else if overall_score >= 20.0 {
        Recommendation::Sell
    } else {
        Recommendation::StrongSell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::signal::SignalDirection;

    fn long_ma(direction: SignalDirection) -> TechnicalSignal {
        TechnicalSignal::new(SignalKind::MaLong, 100.0, direction, 50.0, String::new())
    }

    #[test]
    fn score_thresholds() {
        assert_eq!(recommend(85.0, &[]), Recommendation::StrongBuy);
        assert_eq!(recommend(80.0, &[]), Recommendation::StrongBuy);
        assert_eq!(recommend(70.0, &[]), Recommendation::Buy);
        assert_eq!(recommend(65.0, &[]), Recommendation::Buy);
        assert_eq!(recommend(50.0, &[]), Recommendation::Hold);
        assert_eq!(recommend(35.0, &[]), Recommendation::Hold);
        assert_eq!(recommend(25.0, &[]), Recommendation::Sell);
        assert_eq!(recommend(20.0, &[]), Recommendation::Sell);
        assert_eq!(recommend(10.0, &[]), Recommendation::StrongSell);
    }

    #[test]
    fn bearish_long_ma_forces_sell_below_40() {
        let signals = vec![long_ma(SignalDirection::Bearish)];
        // 10 would otherwise be strong_sell; the override wins.
        assert_eq!(recommend(10.0, &signals), Recommendation::Sell);
        assert_eq!(recommend(39.9, &signals), Recommendation::Sell);
    }

    #[test]
    fn bearish_long_ma_does_not_override_above_40() {
        let signals = vec![long_ma(SignalDirection::Bearish)];
        assert_eq!(recommend(50.0, &signals), Recommendation::Hold);
        assert_eq!(recommend(70.0, &signals), Recommendation::Buy);
    }

    #[test]
    fn bullish_long_ma_never_overrides() {
        let signals = vec![long_ma(SignalDirection::Bullish)];
        assert_eq!(recommend(10.0, &signals), Recommendation::StrongSell);
    }

    #[test]
    fn monotonic_in_score_without_override() {
        let order = |r: Recommendation| match r {
            Recommendation::StrongBuy => 4,
            Recommendation::Buy => 3,
            Recommendation::Hold => 2,
            Recommendation::Sell => 1,
            Recommendation::StrongSell => 0,
        };
        let mut prev = 4;
        for score in (0..=100).rev() {
            let rank = order(recommend(score as f64, &[]));
            assert!(rank <= prev, "rank increased as score fell at {score}");
            prev = rank;
        }
    }
}
