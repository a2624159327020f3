//! Portfolio monitoring pass: evaluate every position, aggregate totals,
//! and collect alerts.
//!
//! One summary per run, computed purely from the portfolio file and the
//! supplied quotes. A position without a quote is evaluated in degraded mode
//! rather than failing the run; an empty portfolio yields an all-zero
//! summary, which callers must treat as valid output.

use crate::domain::alert::{self, PositionAlert};
use crate::domain::config::{PortfolioConfig, SectorConfig};
use crate::domain::market_data::Quote;
use crate::domain::portfolio::Portfolio;
use crate::domain::position::{evaluate_position, PositionPerformance};
use crate::domain::risk::{self, RiskMetrics};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub cash_position: f64,
    pub invested_amount: f64,
    pub unrealized_pnl: f64,
    pub unrealized_pnl_pct: f64,
    pub day_change: f64,
    pub day_change_pct: f64,
    pub positions: Vec<PositionPerformance>,
    pub alerts: Vec<PositionAlert>,
    pub sector_allocation: BTreeMap<String, f64>,
    pub risk_metrics: RiskMetrics,
    pub rebalancing_needed: bool,
}

pub fn monitor_portfolio(
    portfolio: &Portfolio,
    quotes: &BTreeMap<String, Quote>,
    config: &PortfolioConfig,
    sectors: &SectorConfig,
    as_of: DateTime<Utc>,
) -> PortfolioSummary {
    let cash_amount = portfolio.cash_position.amount;

    if portfolio.positions.is_empty() {
        return PortfolioSummary {
            total_value: cash_amount,
            cash_position: cash_amount,
            invested_amount: 0.0,
            unrealized_pnl: 0.0,
            unrealized_pnl_pct: 0.0,
            day_change: 0.0,
            day_change_pct: 0.0,
            positions: Vec::new(),
            alerts: Vec::new(),
            sector_allocation: BTreeMap::new(),
            risk_metrics: risk::risk_metrics(&[]),
            rebalancing_needed: false,
        };
    }

    let configured_total = portfolio.portfolio_metadata.total_value;
    let evaluation_date = as_of.date_naive();

    let positions: Vec<PositionPerformance> = portfolio
        .positions
        .iter()
        .map(|position| {
            evaluate_position(
                position,
                quotes.get(&position.symbol),
                configured_total,
                evaluation_date,
            )
        })
        .collect();

    let mut alerts: Vec<PositionAlert> = positions
        .iter()
        .flat_map(|perf| alert::position_alerts(perf, config, as_of))
        .collect();

    let invested_amount: f64 = positions.iter().map(|p| p.current_value).sum();
    let total_value = cash_amount + invested_amount;

    let cost_basis: f64 = positions.iter().map(|p| p.shares * p.avg_cost).sum();
    let unrealized_pnl = invested_amount - cost_basis;
    let unrealized_pnl_pct = if cost_basis > 0.0 {
        unrealized_pnl / cost_basis * 100.0
    } else {
        0.0
    };

    let day_change: f64 = positions.iter().map(|p| p.day_change).sum();
    let day_change_pct = if total_value > day_change {
        day_change / (total_value - day_change) * 100.0
    } else {
        0.0
    };

    let sector_allocation = risk::sector_allocation(&positions, sectors);
    let risk_metrics = risk::risk_metrics(&positions);
    let rebalancing_needed = risk::rebalancing_needed(&sector_allocation, &positions, config);

    let cash_pct = portfolio.cash_position.percentage * 100.0;
    alerts.extend(alert::portfolio_alerts(
        unrealized_pnl_pct,
        &sector_allocation,
        cash_pct,
        config,
        as_of,
    ));

    PortfolioSummary {
        total_value,
        cash_position: cash_amount,
        invested_amount,
        unrealized_pnl,
        unrealized_pnl_pct,
        day_change,
        day_change_pct,
        positions,
        alerts,
        sector_allocation,
        risk_metrics,
        rebalancing_needed,
    }
}
