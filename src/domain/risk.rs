//! Portfolio-level allocation and risk aggregation.

use crate::domain::config::{PortfolioConfig, SectorConfig};
use crate::domain::position::PositionPerformance;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskMetrics {
    /// Largest single position as a percentage of portfolio value.
    pub max_position_size: f64,
    pub num_positions: usize,
    /// Percentage of invested value lost if every stop fills exactly.
    pub portfolio_risk_pct: f64,
    /// min(positions / max_position × 20, 100); 0 without positions.
    pub diversification_score: f64,
}

impl RiskMetrics {
    fn empty() -> Self {
        RiskMetrics {
            max_position_size: 0.0,
            num_positions: 0,
            portfolio_risk_pct: 0.0,
            diversification_score: 0.0,
        }
    }
}

/// Invested value per sector as percentages of total invested value.
/// Symbols missing from the sector table land in "other".
pub fn sector_allocation(
    positions: &[PositionPerformance],
    sectors: &SectorConfig,
) -> BTreeMap<String, f64> {
    let total_invested: f64 = positions.iter().map(|p| p.current_value).sum();
    if total_invested <= 0.0 {
        return BTreeMap::new();
    }

    let mut sector_values: BTreeMap<String, f64> = BTreeMap::new();
    for position in positions {
        let sector = sectors.sector_for(&position.symbol).to_string();
        *sector_values.entry(sector).or_insert(0.0) += position.current_value;
    }

    sector_values
        .into_iter()
        .map(|(sector, value)| (sector, value / total_invested * 100.0))
        .collect()
}

pub fn risk_metrics(positions: &[PositionPerformance]) -> RiskMetrics {
    if positions.is_empty() {
        return RiskMetrics::empty();
    }

    let total_value: f64 = positions.iter().map(|p| p.current_value).sum();
    let max_position_size = positions
        .iter()
        .map(|p| p.position_size_pct)
        .fold(0.0, f64::max);

    let total_at_risk: f64 = positions
        .iter()
        .map(|p| (p.current_value - p.shares * p.stop_loss_price).max(0.0))
        .sum();
    let portfolio_risk_pct = if total_value > 0.0 {
        total_at_risk / total_value * 100.0
    } else {
        0.0
    };

    let diversification_score = if max_position_size > 0.0 {
        (positions.len() as f64 / max_position_size * 20.0).min(100.0)
    } else {
        0.0
    };

    RiskMetrics {
        max_position_size,
        num_positions: positions.len(),
        portfolio_risk_pct,
        diversification_score,
    }
}

/// True when any sector or any single position breaches its weight cap.
pub fn rebalancing_needed(
    sector_allocation: &BTreeMap<String, f64>,
    positions: &[PositionPerformance],
    config: &PortfolioConfig,
) -> bool {
    let sector_breach = sector_allocation
        .values()
        .any(|allocation| *allocation > config.max_sector_weight * 100.0);
    let position_breach = positions
        .iter()
        .any(|p| p.position_size_pct > config.max_position_size * 100.0);
    sector_breach || position_breach
}
