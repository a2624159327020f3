//! Entry, stop-loss, and target price derivation.
//!
//! Entry is a fixed 1% discount to the current price. The stop sits at the
//! tighter of 2% below support and the configured percentage stop; without a
//! support level only the percentage stop applies. The target is the larger
//! of the minimum risk/reward target and 2% below resistance.

use crate::domain::config::TechnicalConfig;
use crate::domain::levels::SupportResistance;
use serde::Serialize;

const ENTRY_DISCOUNT: f64 = 0.99;
const SUPPORT_BUFFER: f64 = 0.98;
const RESISTANCE_BUFFER: f64 = 0.98;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TradePlan {
    pub entry_price: f64,
    pub stop_loss: f64,
    pub target_price: f64,
    pub risk_reward_ratio: f64,
}

pub fn plan_trade(
    current_price: f64,
    levels: Option<&SupportResistance>,
    config: &TechnicalConfig,
) -> TradePlan {
    let entry_price = current_price * ENTRY_DISCOUNT;

    let percentage_stop = entry_price * (1.0 - config.stop_loss_pct);
    let stop_loss = match levels {
        Some(levels) => (levels.support * SUPPORT_BUFFER).max(percentage_stop),
        None => percentage_stop,
    };

    let min_target = entry_price + (entry_price - stop_loss) * config.min_risk_reward;
    let target_price = match levels {
        Some(levels) if levels.resistance * RESISTANCE_BUFFER > min_target => {
            levels.resistance * RESISTANCE_BUFFER
        }
        _ => min_target,
    };

    TradePlan {
        entry_price,
        stop_loss,
        target_price,
        risk_reward_ratio: risk_reward_ratio(current_price, stop_loss, target_price),
    }
}

/// (target - current) / (current - stop). Exactly 0 when the stop is at or
/// above the current price, or the target at or below it; never negative or
/// infinite.
pub fn risk_reward_ratio(current_price: f64, stop_loss: f64, target_price: f64) -> f64 {
    let risk = current_price - stop_loss;
    if risk <= 0.0 {
        return 0.0;
    }
    let reward = target_price - current_price;
    if reward <= 0.0 {
        return 0.0;
    }
    reward / risk
}
