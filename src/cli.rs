//! CLI definition and dispatch.

use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_market_data::CsvMarketDataAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_portfolio_adapter::load_portfolio;
use crate::adapters::json_snapshot_adapter::JsonSnapshotAdapter;
use crate::domain::alert::Severity;
use crate::domain::config::{PortfolioConfig, ScreenFilters, SectorConfig, TechnicalConfig};
use crate::domain::error::TickerwatchError;
use crate::domain::market_data::Quote;
use crate::domain::monitor::{self, PortfolioSummary};
use crate::domain::screen;
use crate::domain::universe;
use crate::ports::market_data_port::MarketDataPort;
use crate::ports::snapshot_port::SnapshotPort;
use std::collections::BTreeMap;

#[derive(Parser, Debug)]
#[command(name = "tickerwatch", about = "Stock screening and portfolio monitoring")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Screen the stock universe for technical setups
    Screen {
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Directory holding per-symbol CSV price history
        #[arg(short, long)]
        data_dir: PathBuf,
        /// Comma-separated symbol override; defaults to the configured universe
        #[arg(short, long)]
        symbols: Option<String>,
        /// Snapshot output directory
        #[arg(short, long, default_value = "technical-screening")]
        output: PathBuf,
    },
    /// Evaluate portfolio positions and raise alerts
    Monitor {
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Portfolio JSON file
        #[arg(short, long)]
        portfolio: PathBuf,
        /// Directory holding per-symbol CSV price history
        #[arg(short, long)]
        data_dir: PathBuf,
        /// Snapshot output directory
        #[arg(short, long, default_value = "portfolio-tracking")]
        output: PathBuf,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Screen {
            config,
            data_dir,
            symbols,
            output,
        } => run_screen(config.as_ref(), &data_dir, symbols.as_deref(), &output),
        Command::Monitor {
            config,
            portfolio,
            data_dir,
            output,
        } => run_monitor(config.as_ref(), &portfolio, &data_dir, &output),
        Command::Validate { config } => run_validate(&config),
    }
}

struct Settings {
    technical: TechnicalConfig,
    filters: ScreenFilters,
    portfolio: PortfolioConfig,
    sectors: SectorConfig,
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings, TickerwatchError> {
    let settings = match path {
        Some(path) => {
            let adapter = FileConfigAdapter::from_file(path).map_err(|e| {
                TickerwatchError::ConfigParse {
                    file: path.display().to_string(),
                    reason: e.to_string(),
                }
            })?;
            Settings {
                technical: TechnicalConfig::from_config(&adapter),
                filters: ScreenFilters::from_config(&adapter),
                portfolio: PortfolioConfig::from_config(&adapter),
                sectors: SectorConfig::from_config(&adapter),
            }
        }
        None => Settings {
            technical: TechnicalConfig::default(),
            filters: ScreenFilters::default(),
            portfolio: PortfolioConfig::default(),
            sectors: SectorConfig::default(),
        },
    };

    settings.technical.validate()?;
    settings.filters.validate()?;
    settings.portfolio.validate()?;
    Ok(settings)
}

fn fail(err: &TickerwatchError) -> ExitCode {
    eprintln!("error: {err}");
    ExitCode::from(err)
}

fn run_screen(
    config_path: Option<&PathBuf>,
    data_dir: &PathBuf,
    symbols: Option<&str>,
    output: &PathBuf,
) -> ExitCode {
    let settings = match load_settings(config_path) {
        Ok(s) => s,
        Err(e) => return fail(&e),
    };

    let universe = match symbols {
        Some(list) => match universe::parse_symbols(list) {
            Ok(symbols) => symbols,
            Err(e) => return fail(&e),
        },
        None => universe::build_universe(&settings.sectors),
    };

    eprintln!("Screening {} symbols...", universe.len());
    let data = CsvMarketDataAdapter::new(data_dir.clone());
    let results = screen::screen_universe(
        &universe,
        &data,
        &settings.sectors,
        &settings.technical,
        &settings.filters,
    );
    let summary = screen::summarize(&results);

    let snapshots = JsonSnapshotAdapter::new(output.clone());
    let path = match snapshots.write_screen(&results, &summary, Utc::now()) {
        Ok(path) => path,
        Err(e) => return fail(&e),
    };

    println!(
        "Screened {} symbols, {} passed filters",
        universe.len(),
        results.len()
    );
    println!("Average score: {:.1}", summary.avg_score);
    println!("Top picks:");
    for result in results.iter().take(5) {
        println!(
            "  {:6} {:>8.2}  score {:5.1}  {}",
            result.symbol, result.price, result.overall_score, result.recommendation
        );
    }
    println!("Results saved to {}", path.display());
    ExitCode::SUCCESS
}

fn run_monitor(
    config_path: Option<&PathBuf>,
    portfolio_path: &PathBuf,
    data_dir: &PathBuf,
    output: &PathBuf,
) -> ExitCode {
    let settings = match load_settings(config_path) {
        Ok(s) => s,
        Err(e) => return fail(&e),
    };

    eprintln!("Loading portfolio from {}", portfolio_path.display());
    let portfolio = match load_portfolio(portfolio_path) {
        Ok(p) => p,
        Err(e) => return fail(&e),
    };

    let data = CsvMarketDataAdapter::new(data_dir.clone());
    let mut quotes: BTreeMap<String, Quote> = BTreeMap::new();
    for position in &portfolio.positions {
        match data.fetch_quote(&position.symbol) {
            Ok(quote) => {
                quotes.insert(position.symbol.clone(), quote);
            }
            Err(e) => eprintln!("warning: no quote for {} ({e})", position.symbol),
        }
    }

    let as_of = Utc::now();
    let summary = monitor::monitor_portfolio(
        &portfolio,
        &quotes,
        &settings.portfolio,
        &settings.sectors,
        as_of,
    );

    let snapshots = JsonSnapshotAdapter::new(output.clone());
    let path = match snapshots.write_portfolio(&summary, as_of) {
        Ok(path) => path,
        Err(e) => return fail(&e),
    };

    print_portfolio_summary(&summary);
    println!("Results saved to {}", path.display());
    ExitCode::SUCCESS
}

fn print_portfolio_summary(summary: &PortfolioSummary) {
    println!("=== Portfolio Summary ===");
    println!("Total value:     ${:>12.2}", summary.total_value);
    println!("Cash:            ${:>12.2}", summary.cash_position);
    println!("Invested:        ${:>12.2}", summary.invested_amount);
    println!(
        "Unrealized P&L:  ${:>12.2} ({:+.1}%)",
        summary.unrealized_pnl, summary.unrealized_pnl_pct
    );
    println!(
        "Day change:      ${:>12.2} ({:+.1}%)",
        summary.day_change, summary.day_change_pct
    );

    if !summary.positions.is_empty() {
        println!("\nTop positions:");
        let mut ranked: Vec<_> = summary.positions.iter().collect();
        ranked.sort_by(|a, b| b.current_value.total_cmp(&a.current_value));
        for position in ranked.iter().take(5) {
            println!(
                "  {:6} {:>8.2} x {:>8.2}  P&L {:+.1}%",
                position.symbol, position.shares, position.current_price, position.unrealized_pnl_pct
            );
        }
    }

    if !summary.sector_allocation.is_empty() {
        println!("\nSector allocation:");
        for (sector, pct) in &summary.sector_allocation {
            println!("  {sector:12} {pct:5.1}%");
        }
    }

    let urgent: Vec<_> = summary
        .alerts
        .iter()
        .filter(|a| a.severity >= Severity::High)
        .collect();
    if !urgent.is_empty() {
        println!("\nAlerts:");
        for alert in urgent {
            println!("  [{}] {} - {}", alert.severity, alert.symbol, alert.message);
        }
    }

    if summary.rebalancing_needed {
        println!("\nRebalancing needed: allocation limits breached");
    }
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    match load_settings(Some(config_path)) {
        Ok(settings) => {
            println!("Configuration OK");
            println!(
                "  technical: MA {}/{}/{}, RSI {} ({}/{})",
                settings.technical.ma_short,
                settings.technical.ma_medium,
                settings.technical.ma_long,
                settings.technical.rsi_period,
                settings.technical.rsi_oversold,
                settings.technical.rsi_overbought,
            );
            println!(
                "  screening: cap >= {:.0}, volume >= {}, price <= {:.0}",
                settings.filters.min_market_cap,
                settings.filters.min_daily_volume,
                settings.filters.max_price,
            );
            println!(
                "  universe:  {} symbols across {} sectors",
                universe::build_universe(&settings.sectors).len(),
                settings.sectors.sectors.len(),
            );
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}
