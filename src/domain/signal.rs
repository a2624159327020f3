//! Technical signal representation.
//!
//! A [`TechnicalSignal`] is one indicator's directional read for a symbol:
//! identity, raw value, direction, and a strength in [0, 100]. Signals are
//! immutable; one is created per indicator per screening pass.

use serde::Serialize;
use std::fmt;

/// Identity of a signal's source indicator. Serves as the key for scoring
/// weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    MaShort,
    MaMedium,
    MaLong,
    Rsi,
    Volume,
    Momentum,
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalKind::MaShort => write!(f, "MA-short"),
            SignalKind::MaMedium => write!(f, "MA-medium"),
            SignalKind::MaLong => write!(f, "MA-long"),
            SignalKind::Rsi => write!(f, "RSI"),
            SignalKind::Volume => write!(f, "Volume"),
            SignalKind::Momentum => write!(f, "Momentum"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalDirection {
    Bullish,
    Bearish,
    Neutral,
}

impl fmt::Display for SignalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalDirection::Bullish => write!(f, "bullish"),
            SignalDirection::Bearish => write!(f, "bearish"),
            SignalDirection::Neutral => write!(f, "neutral"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalSignal {
    pub indicator: SignalKind,
    pub value: f64,
    pub direction: SignalDirection,
    /// Clamped to [0, 100] at construction.
    pub strength: f64,
    pub description: String,
}

impl TechnicalSignal {
    pub fn new(
        indicator: SignalKind,
        value: f64,
        direction: SignalDirection,
        strength: f64,
        description: String,
    ) -> Self {
        TechnicalSignal {
            indicator,
            value,
            direction,
            strength: strength.clamp(0.0, 100.0),
            description,
        }
    }

    pub fn is_bullish(&self) -> bool {
        self.direction == SignalDirection::Bullish
    }

    pub fn is_bearish(&self) -> bool {
        self.direction == SignalDirection::Bearish
    }
}
