//! Screening and monitoring configuration.
//!
//! Plain immutable structs constructed once at startup and passed explicitly
//! into each component. Every field has a default and is independently
//! overridable from the INI file; validation happens here at load time, the
//! scoring core itself assumes well-formed values.

use crate::domain::error::TickerwatchError;
use crate::ports::config_port::ConfigPort;

/// Technical analysis parameters (`[technical]` section).
#[derive(Debug, Clone, PartialEq)]
pub struct TechnicalConfig {
    pub ma_short: usize,
    pub ma_medium: usize,
    pub ma_long: usize,
    pub rsi_period: usize,
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    pub volume_lookback_days: usize,
    pub volume_spike_threshold: f64,
    pub momentum_short_days: usize,
    pub momentum_long_days: usize,
    pub stop_loss_pct: f64,
    pub min_risk_reward: f64,
}

impl Default for TechnicalConfig {
    fn default() -> Self {
        TechnicalConfig {
            ma_short: 20,
            ma_medium: 50,
            ma_long: 200,
            rsi_period: 14,
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            volume_lookback_days: 20,
            volume_spike_threshold: 1.5,
            momentum_short_days: 5,
            momentum_long_days: 20,
            stop_loss_pct: 0.15,
            min_risk_reward: 2.0,
        }
    }
}

impl TechnicalConfig {
    pub fn from_config(config: &dyn ConfigPort) -> Self {
        let d = TechnicalConfig::default();
        TechnicalConfig {
            ma_short: config.get_int("technical", "ma_short", d.ma_short as i64) as usize,
            ma_medium: config.get_int("technical", "ma_medium", d.ma_medium as i64) as usize,
            ma_long: config.get_int("technical", "ma_long", d.ma_long as i64) as usize,
            rsi_period: config.get_int("technical", "rsi_period", d.rsi_period as i64) as usize,
            rsi_oversold: config.get_double("technical", "rsi_oversold", d.rsi_oversold),
            rsi_overbought: config.get_double("technical", "rsi_overbought", d.rsi_overbought),
            volume_lookback_days: config.get_int(
                "technical",
                "volume_lookback_days",
                d.volume_lookback_days as i64,
            ) as usize,
            volume_spike_threshold: config.get_double(
                "technical",
                "volume_spike_threshold",
                d.volume_spike_threshold,
            ),
            momentum_short_days: config.get_int(
                "technical",
                "momentum_short_days",
                d.momentum_short_days as i64,
            ) as usize,
            momentum_long_days: config.get_int(
                "technical",
                "momentum_long_days",
                d.momentum_long_days as i64,
            ) as usize,
            stop_loss_pct: config.get_double("technical", "stop_loss_pct", d.stop_loss_pct),
            min_risk_reward: config.get_double("technical", "min_risk_reward", d.min_risk_reward),
        }
    }

    pub fn validate(&self) -> Result<(), TickerwatchError> {
        if self.ma_short == 0 || self.ma_medium == 0 || self.ma_long == 0 {
            return Err(invalid("technical", "ma_short", "MA windows must be positive"));
        }
        if self.ma_short >= self.ma_medium || self.ma_medium >= self.ma_long {
            return Err(invalid(
                "technical",
                "ma_short",
                "MA windows must satisfy short < medium < long",
            ));
        }
        if self.rsi_period == 0 {
            return Err(invalid("technical", "rsi_period", "rsi_period must be positive"));
        }
        if self.rsi_oversold <= 0.0
            || self.rsi_overbought >= 100.0
            || self.rsi_oversold >= self.rsi_overbought
        {
            return Err(invalid(
                "technical",
                "rsi_oversold",
                "RSI thresholds must satisfy 0 < oversold < overbought < 100",
            ));
        }
        if self.volume_lookback_days == 0 {
            return Err(invalid(
                "technical",
                "volume_lookback_days",
                "volume_lookback_days must be positive",
            ));
        }
        if self.volume_spike_threshold <= 0.0 {
            return Err(invalid(
                "technical",
                "volume_spike_threshold",
                "volume_spike_threshold must be positive",
            ));
        }
        if self.momentum_short_days == 0 || self.momentum_short_days >= self.momentum_long_days {
            return Err(invalid(
                "technical",
                "momentum_short_days",
                "momentum windows must satisfy 0 < short < long",
            ));
        }
        if self.stop_loss_pct <= 0.0 || self.stop_loss_pct >= 1.0 {
            return Err(invalid(
                "technical",
                "stop_loss_pct",
                "stop_loss_pct must be between 0 and 1",
            ));
        }
        if self.min_risk_reward <= 0.0 {
            return Err(invalid(
                "technical",
                "min_risk_reward",
                "min_risk_reward must be positive",
            ));
        }
        Ok(())
    }
}

/// Hard screening filters (`[screening]` section). Symbols failing a filter
/// are omitted from results, never errors.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenFilters {
    pub min_market_cap: f64,
    pub min_daily_volume: i64,
    pub max_price: f64,
}

impl Default for ScreenFilters {
    fn default() -> Self {
        ScreenFilters {
            min_market_cap: 1_000_000_000.0,
            min_daily_volume: 1_000_000,
            max_price: 1000.0,
        }
    }
}

impl ScreenFilters {
    pub fn from_config(config: &dyn ConfigPort) -> Self {
        let d = ScreenFilters::default();
        ScreenFilters {
            min_market_cap: config.get_double("screening", "min_market_cap", d.min_market_cap),
            min_daily_volume: config.get_int(
                "screening",
                "min_daily_volume",
                d.min_daily_volume,
            ),
            max_price: config.get_double("screening", "max_price", d.max_price),
        }
    }

    pub fn validate(&self) -> Result<(), TickerwatchError> {
        if self.min_market_cap < 0.0 {
            return Err(invalid(
                "screening",
                "min_market_cap",
                "min_market_cap must be non-negative",
            ));
        }
        if self.min_daily_volume < 0 {
            return Err(invalid(
                "screening",
                "min_daily_volume",
                "min_daily_volume must be non-negative",
            ));
        }
        if self.max_price <= 0.0 {
            return Err(invalid("screening", "max_price", "max_price must be positive"));
        }
        Ok(())
    }
}

/// Portfolio policy thresholds (`[portfolio]` section). Loss alerts are
/// expressed as negative fractions, e.g. -0.08 for an 8% drawdown.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioConfig {
    pub cash_target: f64,
    pub max_sector_weight: f64,
    pub max_position_size: f64,
    pub position_loss_alert: f64,
    pub portfolio_loss_alert: f64,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        PortfolioConfig {
            cash_target: 0.15,
            max_sector_weight: 0.4,
            max_position_size: 0.05,
            position_loss_alert: -0.08,
            portfolio_loss_alert: -0.05,
        }
    }
}

impl PortfolioConfig {
    pub fn from_config(config: &dyn ConfigPort) -> Self {
        let d = PortfolioConfig::default();
        PortfolioConfig {
            cash_target: config.get_double("portfolio", "cash_target", d.cash_target),
            max_sector_weight: config.get_double(
                "portfolio",
                "max_sector_weight",
                d.max_sector_weight,
            ),
            max_position_size: config.get_double(
                "portfolio",
                "max_position_size",
                d.max_position_size,
            ),
            position_loss_alert: config.get_double(
                "portfolio",
                "position_loss_alert",
                d.position_loss_alert,
            ),
            portfolio_loss_alert: config.get_double(
                "portfolio",
                "portfolio_loss_alert",
                d.portfolio_loss_alert,
            ),
        }
    }

    pub fn validate(&self) -> Result<(), TickerwatchError> {
        if self.cash_target <= 0.0 || self.cash_target > 1.0 {
            return Err(invalid(
                "portfolio",
                "cash_target",
                "cash_target must be between 0 and 1",
            ));
        }
        if self.max_sector_weight <= 0.0 || self.max_sector_weight > 1.0 {
            return Err(invalid(
                "portfolio",
                "max_sector_weight",
                "max_sector_weight must be between 0 and 1",
            ));
        }
        if self.max_position_size <= 0.0 || self.max_position_size > 1.0 {
            return Err(invalid(
                "portfolio",
                "max_position_size",
                "max_position_size must be between 0 and 1",
            ));
        }
        if self.position_loss_alert > 0.0 {
            return Err(invalid(
                "portfolio",
                "position_loss_alert",
                "position_loss_alert must not be positive",
            ));
        }
        if self.portfolio_loss_alert > 0.0 {
            return Err(invalid(
                "portfolio",
                "portfolio_loss_alert",
                "portfolio_loss_alert must not be positive",
            ));
        }
        Ok(())
    }
}

/// One focus sector: a name and the tickers mapped to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sector {
    pub name: String,
    pub tickers: Vec<String>,
}

/// Sector table used for universe construction and allocation bucketing.
/// Overridable via `[sector:<name>]` INI sections, each carrying a
/// comma-separated `tickers` key.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorConfig {
    pub sectors: Vec<Sector>,
}

impl Default for SectorConfig {
    fn default() -> Self {
        fn sector(name: &str, tickers: &[&str]) -> Sector {
            Sector {
                name: name.to_string(),
                tickers: tickers.iter().map(|t| t.to_string()).collect(),
            }
        }
        SectorConfig {
            sectors: vec![
                sector("tech", &["NVDA", "AMD", "ASML", "TSM", "INTC", "QCOM"]),
                sector("finance", &["V", "MA", "PYPL", "SQ", "COIN", "JPM"]),
                sector("healthcare", &["JNJ", "PFE", "UNH", "MRNA", "GILD", "BIIB"]),
                sector("energy", &["TSLA", "ENPH", "SEDG", "NEE", "XOM", "CVX"]),
            ],
        }
    }
}

impl SectorConfig {
    /// Reads `[sector:*]` sections; falls back to the default table when the
    /// file defines none.
    pub fn from_config(config: &dyn ConfigPort) -> Self {
        let mut sectors = Vec::new();
        for section in config.sections() {
            if let Some(name) = section.strip_prefix("sector:") {
                let tickers = config
                    .get_string(&section, "tickers")
                    .map(|list| {
                        list.split(',')
                            .map(|t| t.trim().to_uppercase())
                            .filter(|t| !t.is_empty())
                            .collect()
                    })
                    .unwrap_or_default();
                sectors.push(Sector {
                    name: name.to_string(),
                    tickers,
                });
            }
        }
        if sectors.is_empty() {
            SectorConfig::default()
        } else {
            SectorConfig { sectors }
        }
    }

    /// Sector name for a symbol; unmapped symbols fall into "other".
    pub fn sector_for(&self, symbol: &str) -> &str {
        for sector in &self.sectors {
            if sector.tickers.iter().any(|t| t == symbol) {
                return &sector.name;
            }
        }
        "other"
    }
}

fn invalid(section: &str, key: &str, reason: &str) -> TickerwatchError {
    TickerwatchError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn technical_defaults_are_valid() {
        assert!(TechnicalConfig::default().validate().is_ok());
    }

    #[test]
    fn technical_rejects_unordered_ma_windows() {
        let cfg = TechnicalConfig {
            ma_short: 50,
            ma_medium: 20,
            ..TechnicalConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn technical_rejects_bad_rsi_thresholds() {
        let cfg = TechnicalConfig {
            rsi_oversold: 70.0,
            rsi_overbought: 30.0,
            ..TechnicalConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn technical_rejects_stop_loss_out_of_range() {
        let cfg = TechnicalConfig {
            stop_loss_pct: 1.5,
            ..TechnicalConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn filters_defaults_are_valid() {
        assert!(ScreenFilters::default().validate().is_ok());
    }

    #[test]
    fn portfolio_defaults_are_valid() {
        assert!(PortfolioConfig::default().validate().is_ok());
    }

    #[test]
    fn portfolio_rejects_positive_loss_alert() {
        let cfg = PortfolioConfig {
            position_loss_alert: 0.08,
            ..PortfolioConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn sector_for_known_symbol() {
        let sectors = SectorConfig::default();
        assert_eq!(sectors.sector_for("NVDA"), "tech");
        assert_eq!(sectors.sector_for("JPM"), "finance");
    }

    #[test]
    fn sector_for_unmapped_symbol() {
        let sectors = SectorConfig::default();
        assert_eq!(sectors.sector_for("ZZZZ"), "other");
    }
}
