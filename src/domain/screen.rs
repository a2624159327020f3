//! Stock screening pipeline.
//!
//! [`analyze_symbol`] is the pure per-symbol pass: hard filters, then
//! signals, score, recommendation, levels, and a trade plan assembled into
//! one [`ScreenResult`]. [`screen_universe`] runs it across the whole
//! universe in parallel; a symbol that fails a filter or errors in the data
//! layer is omitted from the batch, never fails it.

use crate::domain::config::{ScreenFilters, SectorConfig, TechnicalConfig};
use crate::domain::levels::{self, SupportResistance};
use crate::domain::market_data::{Fundamentals, PriceBar};
use crate::domain::recommend::{self, Recommendation};
use crate::domain::score;
use crate::domain::signal::TechnicalSignal;
use crate::domain::signals;
use crate::domain::trade_plan;
use crate::ports::market_data_port::MarketDataPort;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Strong-signal note threshold.
const STRONG_SIGNAL_STRENGTH: f64 = 70.0;
/// Number of symbols listed in the summary's top picks.
const TOP_PICKS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenResult {
    pub symbol: String,
    pub company_name: String,
    pub sector: String,
    pub price: f64,
    pub market_cap: f64,
    pub volume: i64,
    pub signals: Vec<TechnicalSignal>,
    pub overall_score: f64,
    pub recommendation: Recommendation,
    pub entry_price: f64,
    pub stop_loss: f64,
    pub target_price: f64,
    pub risk_reward_ratio: f64,
    pub notes: Vec<String>,
}

/// Batch statistics over one screening run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenSummary {
    pub total_stocks: usize,
    pub recommendations: BTreeMap<String, usize>,
    pub sectors: BTreeMap<String, usize>,
    pub avg_score: f64,
    pub top_picks: Vec<String>,
}

/// Full analysis of one symbol. `None` when the symbol has no bars or fails
/// a hard filter.
pub fn analyze_symbol(
    symbol: &str,
    bars: &[PriceBar],
    fundamentals: &Fundamentals,
    sectors: &SectorConfig,
    technical: &TechnicalConfig,
    filters: &ScreenFilters,
) -> Option<ScreenResult> {
    let last_bar = bars.last()?;
    let price = last_bar.close;
    let volume = last_bar.volume;
    let market_cap = fundamentals.market_cap.unwrap_or(0.0);

    if market_cap < filters.min_market_cap {
        return None;
    }
    if price > filters.max_price {
        return None;
    }
    if volume < filters.min_daily_volume {
        return None;
    }

    let signals = signals::compute_signals(bars, technical);
    let overall_score = score::overall_score(&signals);
    let sr_levels = levels::estimate(bars);
    let recommendation = recommend::recommend(overall_score, &signals);
    let plan = trade_plan::plan_trade(price, sr_levels.as_ref(), technical);

    Some(ScreenResult {
        symbol: symbol.to_string(),
        company_name: fundamentals
            .long_name
            .clone()
            .unwrap_or_else(|| symbol.to_string()),
        sector: sectors.sector_for(symbol).to_string(),
        price,
        market_cap,
        volume,
        notes: analysis_notes(&signals, sr_levels.as_ref(), fundamentals),
        signals,
        overall_score,
        recommendation,
        entry_price: plan.entry_price,
        stop_loss: plan.stop_loss,
        target_price: plan.target_price,
        risk_reward_ratio: plan.risk_reward_ratio,
    })
}

fn analysis_notes(
    signals: &[TechnicalSignal],
    sr_levels: Option<&SupportResistance>,
    fundamentals: &Fundamentals,
) -> Vec<String> {
    let mut notes = Vec::new();

    let strong: Vec<String> = signals
        .iter()
        .filter(|s| s.strength > STRONG_SIGNAL_STRENGTH)
        .map(|s| s.indicator.to_string())
        .collect();
    if !strong.is_empty() {
        notes.push(format!("Strong signals: {}", strong.join(", ")));
    }

    if let Some(levels) = sr_levels {
        notes.push(format!(
            "Support: ${:.2}, Resistance: ${:.2}",
            levels.support, levels.resistance
        ));
    }

    if let Some(pe) = fundamentals.trailing_pe {
        notes.push(format!("P/E Ratio: {pe:.1}"));
    }

    notes
}

/// Screens every symbol in the universe against the same configuration,
/// fanning the per-symbol work out across threads. Output is sorted by score
/// descending, ties broken by symbol so identical inputs always produce the
/// same ordering.
pub fn screen_universe(
    universe: &[String],
    data: &(dyn MarketDataPort + Sync),
    sectors: &SectorConfig,
    technical: &TechnicalConfig,
    filters: &ScreenFilters,
) -> Vec<ScreenResult> {
    let mut results: Vec<ScreenResult> = universe
        .par_iter()
        .filter_map(|symbol| {
            let bars = match data.fetch_history(symbol) {
                Ok(bars) => bars,
                Err(err) => {
                    eprintln!("skipping {symbol}: {err}");
                    return None;
                }
            };
            let fundamentals = data.fetch_fundamentals(symbol).unwrap_or_default();
            analyze_symbol(symbol, &bars, &fundamentals, sectors, technical, filters)
        })
        .collect();

    results.sort_by(|a, b| {
        b.overall_score
            .total_cmp(&a.overall_score)
            .then_with(|| a.symbol.cmp(&b.symbol))
    });
    results
}

/// Summary statistics for a sorted batch of results.
pub fn summarize(results: &[ScreenResult]) -> ScreenSummary {
    let mut recommendations: BTreeMap<String, usize> = BTreeMap::new();
    let mut sector_counts: BTreeMap<String, usize> = BTreeMap::new();
    for result in results {
        *recommendations
            .entry(result.recommendation.to_string())
            .or_insert(0) += 1;
        *sector_counts.entry(result.sector.clone()).or_insert(0) += 1;
    }

    let avg_score = if results.is_empty() {
        0.0
    } else {
        results.iter().map(|r| r.overall_score).sum::<f64>() / results.len() as f64
    };

    ScreenSummary {
        total_stocks: results.len(),
        recommendations,
        sectors: sector_counts,
        avg_score,
        top_picks: results
            .iter()
            .take(TOP_PICKS)
            .map(|r| r.symbol.clone())
            .collect(),
    }
}
