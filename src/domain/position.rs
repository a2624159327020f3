//! Per-position performance evaluation.
//!
//! Derives live metrics for one holding from its cost basis and a current
//! quote. A missing quote degrades rather than fails: the position is valued
//! at cost with zero day change.

use crate::domain::market_data::Quote;
use crate::domain::portfolio::PortfolioPosition;
use crate::domain::trade_plan;
use chrono::NaiveDate;
use serde::Serialize;

/// Stop defaults to 15% below cost, target to 25% above, when the position
/// carries no override.
const DEFAULT_STOP_FRACTION: f64 = 0.85;
const DEFAULT_TARGET_FRACTION: f64 = 1.25;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionPerformance {
    pub symbol: String,
    pub shares: f64,
    pub avg_cost: f64,
    pub current_price: f64,
    pub current_value: f64,
    pub unrealized_pnl: f64,
    pub unrealized_pnl_pct: f64,
    pub day_change: f64,
    pub day_change_pct: f64,
    pub position_size_pct: f64,
    pub days_held: i64,
    pub stop_loss_price: f64,
    pub target_price: f64,
    pub risk_reward_ratio: f64,
}

pub fn evaluate_position(
    position: &PortfolioPosition,
    quote: Option<&Quote>,
    portfolio_total_value: f64,
    as_of: NaiveDate,
) -> PositionPerformance {
    let (current_price, day_change_per_share, day_change_pct) = match quote {
        Some(quote) => (quote.last, quote.day_change(), quote.day_change_pct()),
        None => (position.avg_cost, 0.0, 0.0),
    };

    let current_value = position.shares * current_price;
    let cost_basis = position.cost_basis();
    let unrealized_pnl = current_value - cost_basis;
    let unrealized_pnl_pct = if cost_basis > 0.0 {
        unrealized_pnl / cost_basis * 100.0
    } else {
        0.0
    };

    let position_size_pct = if portfolio_total_value > 0.0 {
        current_value / portfolio_total_value * 100.0
    } else {
        0.0
    };

    let stop_loss_price = position
        .stop_loss
        .unwrap_or(position.avg_cost * DEFAULT_STOP_FRACTION);
    let target_price = position
        .target_price
        .unwrap_or(position.avg_cost * DEFAULT_TARGET_FRACTION);

    PositionPerformance {
        symbol: position.symbol.clone(),
        shares: position.shares,
        avg_cost: position.avg_cost,
        current_price,
        current_value,
        unrealized_pnl,
        unrealized_pnl_pct,
        day_change: day_change_per_share * position.shares,
        day_change_pct,
        position_size_pct,
        days_held: (as_of - position.entry_date).num_days(),
        stop_loss_price,
        target_price,
        risk_reward_ratio: trade_plan::risk_reward_ratio(
            current_price,
            stop_loss_price,
            target_price,
        ),
    }
}
