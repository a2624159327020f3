//! CSV file market data adapter.
//!
//! Price history lives in one `{SYMBOL}.csv` per symbol under the base
//! directory, columns `date,open,high,low,close,volume` with a header row.
//! Fundamentals are optional and shared in a single `fundamentals.csv` with
//! columns `symbol,market_cap,long_name,trailing_pe`; blank cells mean the
//! provider had nothing.

use crate::domain::error::TickerwatchError;
use crate::domain::market_data::{Fundamentals, PriceBar, Quote};
use crate::ports::market_data_port::MarketDataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub struct CsvMarketDataAdapter {
    base_path: PathBuf,
}

impl CsvMarketDataAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn history_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{symbol}.csv"))
    }

    fn fundamentals_path(&self) -> PathBuf {
        self.base_path.join("fundamentals.csv")
    }
}

fn bad_record(symbol: &str, reason: String) -> TickerwatchError {
    TickerwatchError::BadPriceRecord {
        symbol: symbol.to_string(),
        reason,
    }
}

fn field<'a>(
    record: &'a csv::StringRecord,
    index: usize,
    name: &str,
    symbol: &str,
) -> Result<&'a str, TickerwatchError> {
    record
        .get(index)
        .ok_or_else(|| bad_record(symbol, format!("missing {name} column")))
}

impl MarketDataPort for CsvMarketDataAdapter {
    fn fetch_history(&self, symbol: &str) -> Result<Vec<PriceBar>, TickerwatchError> {
        let path = self.history_path(symbol);
        if !path.exists() {
            return Err(TickerwatchError::NoData {
                symbol: symbol.to_string(),
            });
        }
        let content = fs::read_to_string(&path)?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut bars = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| bad_record(symbol, format!("CSV parse error: {e}")))?;

            let date = NaiveDate::parse_from_str(field(&record, 0, "date", symbol)?, "%Y-%m-%d")
                .map_err(|e| bad_record(symbol, format!("invalid date: {e}")))?;
            let open: f64 = field(&record, 1, "open", symbol)?
                .parse()
                .map_err(|e| bad_record(symbol, format!("invalid open value: {e}")))?;
            let high: f64 = field(&record, 2, "high", symbol)?
                .parse()
                .map_err(|e| bad_record(symbol, format!("invalid high value: {e}")))?;
            let low: f64 = field(&record, 3, "low", symbol)?
                .parse()
                .map_err(|e| bad_record(symbol, format!("invalid low value: {e}")))?;
            let close: f64 = field(&record, 4, "close", symbol)?
                .parse()
                .map_err(|e| bad_record(symbol, format!("invalid close value: {e}")))?;
            let volume: i64 = field(&record, 5, "volume", symbol)?
                .parse()
                .map_err(|e| bad_record(symbol, format!("invalid volume value: {e}")))?;

            bars.push(PriceBar {
                date,
                open,
                high,
                low,
                close,
                volume,
            });
        }

        if bars.is_empty() {
            return Err(TickerwatchError::NoData {
                symbol: symbol.to_string(),
            });
        }

        bars.sort_by_key(|b| b.date);
        Ok(bars)
    }

    fn fetch_quote(&self, symbol: &str) -> Result<Quote, TickerwatchError> {
        let bars = self.fetch_history(symbol)?;
        let last = bars[bars.len() - 1].close;
        // A single bar carries no prior close; the day change reads as zero.
        let prev_close = if bars.len() >= 2 {
            bars[bars.len() - 2].close
        } else {
            last
        };
        Ok(Quote { last, prev_close })
    }

    fn fetch_fundamentals(&self, symbol: &str) -> Result<Fundamentals, TickerwatchError> {
        let path = self.fundamentals_path();
        if !path.exists() {
            return Ok(Fundamentals::default());
        }
        let content = fs::read_to_string(&path)?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        for result in rdr.records() {
            let record = result.map_err(|e| bad_record(symbol, format!("CSV parse error: {e}")))?;
            if record.get(0) != Some(symbol) {
                continue;
            }

            let parse_f64 = |index: usize| {
                record
                    .get(index)
                    .filter(|v| !v.is_empty())
                    .and_then(|v| v.parse::<f64>().ok())
            };
            return Ok(Fundamentals {
                market_cap: parse_f64(1),
                long_name: record
                    .get(2)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string),
                trailing_pe: parse_f64(3),
            });
        }

        Ok(Fundamentals::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) {
        let mut file = fs::File::create(dir.path().join(name)).unwrap();
        write!(file, "{}", content).unwrap();
    }

    fn history_csv() -> &'static str {
        "date,open,high,low,close,volume\n\
         2024-03-04,100.0,105.0,99.0,104.0,1200000\n\
         2024-03-01,98.0,101.0,97.0,100.0,1000000\n\
         2024-03-05,104.0,108.0,103.0,107.5,1500000\n"
    }

    #[test]
    fn fetch_history_sorts_by_date() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "NVDA.csv", history_csv());
        let adapter = CsvMarketDataAdapter::new(dir.path().to_path_buf());

        let bars = adapter.fetch_history("NVDA").unwrap();
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(bars[2].date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert!((bars[2].close - 107.5).abs() < f64::EPSILON);
        assert_eq!(bars[2].volume, 1_500_000);
    }

    #[test]
    fn missing_file_is_no_data() {
        let dir = TempDir::new().unwrap();
        let adapter = CsvMarketDataAdapter::new(dir.path().to_path_buf());
        assert!(matches!(
            adapter.fetch_history("NVDA"),
            Err(TickerwatchError::NoData { .. })
        ));
    }

    #[test]
    fn header_only_file_is_no_data() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "NVDA.csv", "date,open,high,low,close,volume\n");
        let adapter = CsvMarketDataAdapter::new(dir.path().to_path_buf());
        assert!(matches!(
            adapter.fetch_history("NVDA"),
            Err(TickerwatchError::NoData { .. })
        ));
    }

    #[test]
    fn malformed_close_is_bad_record() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "NVDA.csv",
            "date,open,high,low,close,volume\n2024-03-01,98.0,101.0,97.0,oops,1000000\n",
        );
        let adapter = CsvMarketDataAdapter::new(dir.path().to_path_buf());
        assert!(matches!(
            adapter.fetch_history("NVDA"),
            Err(TickerwatchError::BadPriceRecord { .. })
        ));
    }

    #[test]
    fn quote_from_last_two_bars() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "NVDA.csv", history_csv());
        let adapter = CsvMarketDataAdapter::new(dir.path().to_path_buf());

        let quote = adapter.fetch_quote("NVDA").unwrap();
        assert!((quote.last - 107.5).abs() < f64::EPSILON);
        assert!((quote.prev_close - 104.0).abs() < f64::EPSILON);
    }

    #[test]
    fn quote_from_single_bar_has_flat_day() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "NVDA.csv",
            "date,open,high,low,close,volume\n2024-03-01,98.0,101.0,97.0,100.0,1000000\n",
        );
        let adapter = CsvMarketDataAdapter::new(dir.path().to_path_buf());

        let quote = adapter.fetch_quote("NVDA").unwrap();
        assert!((quote.day_change() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn fundamentals_found_for_symbol() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "fundamentals.csv",
            "symbol,market_cap,long_name,trailing_pe\n\
             NVDA,2200000000000,NVIDIA Corporation,65.2\n\
             JPM,550000000000,JPMorgan Chase,11.8\n",
        );
        let adapter = CsvMarketDataAdapter::new(dir.path().to_path_buf());

        let f = adapter.fetch_fundamentals("JPM").unwrap();
        assert_eq!(f.market_cap, Some(550_000_000_000.0));
        assert_eq!(f.long_name.as_deref(), Some("JPMorgan Chase"));
        assert_eq!(f.trailing_pe, Some(11.8));
    }

    #[test]
    fn fundamentals_blank_cells_are_absent() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "fundamentals.csv",
            "symbol,market_cap,long_name,trailing_pe\nNVDA,2200000000000,,\n",
        );
        let adapter = CsvMarketDataAdapter::new(dir.path().to_path_buf());

        let f = adapter.fetch_fundamentals("NVDA").unwrap();
        assert!(f.market_cap.is_some());
        assert!(f.long_name.is_none());
        assert!(f.trailing_pe.is_none());
    }

    #[test]
    fn fundamentals_default_when_file_or_symbol_missing() {
        let dir = TempDir::new().unwrap();
        let adapter = CsvMarketDataAdapter::new(dir.path().to_path_buf());
        assert_eq!(
            adapter.fetch_fundamentals("NVDA").unwrap(),
            Fundamentals::default()
        );

        write_file(
            &dir,
            "fundamentals.csv",
            "symbol,market_cap,long_name,trailing_pe\nJPM,550000000000,JPMorgan Chase,11.8\n",
        );
        assert_eq!(
            adapter.fetch_fundamentals("NVDA").unwrap(),
            Fundamentals::default()
        );
    }
}
