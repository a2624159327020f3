//! Portfolio configuration input: held positions plus cash.
//!
//! Read-only input owned by the caller; evaluation never mutates it. The JSON
//! shape mirrors the monitoring pipeline's portfolio file.

use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PortfolioPosition {
    pub symbol: String,
    pub shares: f64,
    pub avg_cost: f64,
    pub entry_date: NaiveDate,
    /// Per-position stop override; defaults to 15% below cost when absent.
    #[serde(default)]
    pub stop_loss: Option<f64>,
    /// Per-position target override; defaults to 25% above cost when absent.
    #[serde(default)]
    pub target_price: Option<f64>,
}

impl PortfolioPosition {
    pub fn cost_basis(&self) -> f64 {
        self.shares * self.avg_cost
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CashPosition {
    pub amount: f64,
    /// Fraction of total portfolio value held as cash, 0..=1.
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PortfolioMetadata {
    pub total_value: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Portfolio {
    pub portfolio_metadata: PortfolioMetadata,
    #[serde(default)]
    pub positions: Vec<PortfolioPosition>,
    pub cash_position: CashPosition,
}
