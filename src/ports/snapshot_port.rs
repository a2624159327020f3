//! Snapshot output port trait.

use crate::domain::error::TickerwatchError;
use crate::domain::monitor::PortfolioSummary;
use crate::domain::screen::{ScreenResult, ScreenSummary};
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Persists one run's output. Implementations return the path they wrote so
/// callers can report it.
pub trait SnapshotPort {
    fn write_screen(
        &self,
        results: &[ScreenResult],
        summary: &ScreenSummary,
        as_of: DateTime<Utc>,
    ) -> Result<PathBuf, TickerwatchError>;

    fn write_portfolio(
        &self,
        summary: &PortfolioSummary,
        as_of: DateTime<Utc>,
    ) -> Result<PathBuf, TickerwatchError>;
}
