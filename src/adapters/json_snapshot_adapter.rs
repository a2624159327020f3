//! JSON snapshot adapter.
//!
//! Writes one timestamped file per run into the output directory:
//! `screen_results_{Y-m-d_H-M}.json` and `portfolio_monitor_{Y-m-d_H-M}.json`.
//! The timestamp in both the filename and the payload is the run's `as_of`
//! passed by the caller, so the same inputs always produce the same bytes.

use crate::domain::alert::Severity;
use crate::domain::error::TickerwatchError;
use crate::domain::monitor::PortfolioSummary;
use crate::domain::screen::{ScreenResult, ScreenSummary};
use crate::ports::snapshot_port::SnapshotPort;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

pub struct JsonSnapshotAdapter {
    output_dir: PathBuf,
}

impl JsonSnapshotAdapter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    fn prepare(&self, stem: &str, as_of: DateTime<Utc>) -> Result<PathBuf, TickerwatchError> {
        fs::create_dir_all(&self.output_dir)?;
        let timestamp = as_of.format("%Y-%m-%d_%H-%M");
        Ok(self.output_dir.join(format!("{stem}_{timestamp}.json")))
    }
}

impl SnapshotPort for JsonSnapshotAdapter {
    fn write_screen(
        &self,
        results: &[ScreenResult],
        summary: &ScreenSummary,
        as_of: DateTime<Utc>,
    ) -> Result<PathBuf, TickerwatchError> {
        let path = self.prepare("screen_results", as_of)?;
        let output = json!({
            "timestamp": as_of,
            "total_screened": results.len(),
            "results": results,
            "summary": summary,
        });
        fs::write(&path, serde_json::to_string_pretty(&output)?)?;
        Ok(path)
    }

    fn write_portfolio(
        &self,
        summary: &PortfolioSummary,
        as_of: DateTime<Utc>,
    ) -> Result<PathBuf, TickerwatchError> {
        let path = self.prepare("portfolio_monitor", as_of)?;

        let mut alerts_by_severity: BTreeMap<String, usize> = BTreeMap::new();
        for severity in [
            Severity::Critical,
            Severity::High,
            Severity::Medium,
            Severity::Low,
        ] {
            let count = summary
                .alerts
                .iter()
                .filter(|a| a.severity == severity)
                .count();
            alerts_by_severity.insert(severity.to_string(), count);
        }

        let output = json!({
            "timestamp": as_of,
            "summary": summary,
            "alerts_by_severity": alerts_by_severity,
        });
        fs::write(&path, serde_json::to_string_pretty(&output)?)?;
        Ok(path)
    }
}
