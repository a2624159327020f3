//! Alert generation for positions and the portfolio as a whole.
//!
//! Alerts are pure computed facts: every evaluation pass regenerates them
//! from scratch against the configured thresholds, stamped with the pass's
//! timestamp. Deduplication against earlier runs is a collaborator concern.

use crate::domain::config::PortfolioConfig;
use crate::domain::position::PositionPerformance;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Price within 5% of the stop triggers the early warning.
const STOP_PROXIMITY: f64 = 1.05;
/// Cash below half the configured target is worth flagging.
const CASH_WARNING_FRACTION: f64 = 0.5;

/// Symbol used for portfolio-level alerts.
pub const PORTFOLIO_SYMBOL: &str = "PORTFOLIO";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    StopLoss,
    ProfitTarget,
    LargeLoss,
    PositionSize,
    PortfolioLoss,
    SectorConcentration,
    LowCash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionAlert {
    pub symbol: String,
    pub alert_type: AlertType,
    pub severity: Severity,
    pub message: String,
    pub current_price: f64,
    pub trigger_price: f64,
    pub recommended_action: String,
    pub timestamp: DateTime<Utc>,
}

/// Independent checks against one position, in priority order. Only the
/// nearer of the two stop conditions fires; everything else may co-fire.
pub fn position_alerts(
    perf: &PositionPerformance,
    config: &PortfolioConfig,
    as_of: DateTime<Utc>,
) -> Vec<PositionAlert> {
    let mut alerts = Vec::new();

    if perf.current_price <= perf.stop_loss_price {
        alerts.push(PositionAlert {
            symbol: perf.symbol.clone(),
            alert_type: AlertType::StopLoss,
            severity: Severity::Critical,
            message: format!(
                "Price ${:.2} hit stop loss ${:.2}",
                perf.current_price, perf.stop_loss_price
            ),
            current_price: perf.current_price,
            trigger_price: perf.stop_loss_price,
            recommended_action: "SELL IMMEDIATELY".to_string(),
            timestamp: as_of,
        });
    } else if perf.current_price <= perf.stop_loss_price * STOP_PROXIMITY {
        alerts.push(PositionAlert {
            symbol: perf.symbol.clone(),
            alert_type: AlertType::StopLoss,
            severity: Severity::High,
            message: format!(
                "Price ${:.2} approaching stop loss ${:.2}",
                perf.current_price, perf.stop_loss_price
            ),
            current_price: perf.current_price,
            trigger_price: perf.stop_loss_price,
            recommended_action: "MONITOR CLOSELY".to_string(),
            timestamp: as_of,
        });
    }

    if perf.current_price >= perf.target_price {
        alerts.push(PositionAlert {
            symbol: perf.symbol.clone(),
            alert_type: AlertType::ProfitTarget,
            severity: Severity::Medium,
            message: format!(
                "Price ${:.2} hit target ${:.2}",
                perf.current_price, perf.target_price
            ),
            current_price: perf.current_price,
            trigger_price: perf.target_price,
            recommended_action: "CONSIDER TAKING PROFITS".to_string(),
            timestamp: as_of,
        });
    }

    if perf.unrealized_pnl_pct <= config.position_loss_alert * 100.0 {
        alerts.push(PositionAlert {
            symbol: perf.symbol.clone(),
            alert_type: AlertType::LargeLoss,
            severity: Severity::High,
            message: format!(
                "Position down {:.1}% (${:.0})",
                perf.unrealized_pnl_pct, perf.unrealized_pnl
            ),
            current_price: perf.current_price,
            trigger_price: perf.avg_cost,
            recommended_action: "REVIEW POSITION".to_string(),
            timestamp: as_of,
        });
    }

    if perf.position_size_pct > config.max_position_size * 100.0 {
        alerts.push(PositionAlert {
            symbol: perf.symbol.clone(),
            alert_type: AlertType::PositionSize,
            severity: Severity::Medium,
            message: format!(
                "Position size {:.1}% exceeds max {:.1}%",
                perf.position_size_pct,
                config.max_position_size * 100.0
            ),
            current_price: perf.current_price,
            trigger_price: 0.0,
            recommended_action: "CONSIDER TRIMMING".to_string(),
            timestamp: as_of,
        });
    }

    alerts
}

/// Portfolio-level checks: total drawdown, per-sector concentration, and the
/// cash reserve.
pub fn portfolio_alerts(
    unrealized_pnl_pct: f64,
    sector_allocation: &BTreeMap<String, f64>,
    cash_pct: f64,
    config: &PortfolioConfig,
    as_of: DateTime<Utc>,
) -> Vec<PositionAlert> {
    let mut alerts = Vec::new();

    if unrealized_pnl_pct <= config.portfolio_loss_alert * 100.0 {
        alerts.push(PositionAlert {
            symbol: PORTFOLIO_SYMBOL.to_string(),
            alert_type: AlertType::PortfolioLoss,
            severity: Severity::Critical,
            message: format!("Portfolio down {unrealized_pnl_pct:.1}%"),
            current_price: 0.0,
            trigger_price: 0.0,
            recommended_action: "REVIEW ALL POSITIONS".to_string(),
            timestamp: as_of,
        });
    }

    for (sector, allocation) in sector_allocation {
        if *allocation > config.max_sector_weight * 100.0 {
            alerts.push(PositionAlert {
                symbol: PORTFOLIO_SYMBOL.to_string(),
                alert_type: AlertType::SectorConcentration,
                severity: Severity::Medium,
                message: format!(
                    "{} sector at {:.1}% (max: {:.1}%)",
                    sector.to_uppercase(),
                    allocation,
                    config.max_sector_weight * 100.0
                ),
                current_price: 0.0,
                trigger_price: 0.0,
                recommended_action: "REBALANCE SECTOR ALLOCATION".to_string(),
                timestamp: as_of,
            });
        }
    }

    if cash_pct < config.cash_target * 100.0 * CASH_WARNING_FRACTION {
        alerts.push(PositionAlert {
            symbol: PORTFOLIO_SYMBOL.to_string(),
            alert_type: AlertType::LowCash,
            severity: Severity::Low,
            message: format!(
                "Cash level {:.1}% below target {:.1}%",
                cash_pct,
                config.cash_target * 100.0
            ),
            current_price: 0.0,
            trigger_price: 0.0,
            recommended_action: "CONSIDER RAISING CASH".to_string(),
            timestamp: as_of,
        });
    }

    alerts
}
