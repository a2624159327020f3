//! JSON portfolio file loader.

use crate::domain::error::TickerwatchError;
use crate::domain::portfolio::Portfolio;
use std::fs;
use std::path::Path;

/// Reads and deserializes a portfolio file. Both I/O and shape problems
/// surface as [`TickerwatchError::PortfolioLoad`] naming the file.
pub fn load_portfolio<P: AsRef<Path>>(path: P) -> Result<Portfolio, TickerwatchError> {
    let path = path.as_ref();
    let load_err = |reason: String| TickerwatchError::PortfolioLoad {
        file: path.display().to_string(),
        reason,
    };

    let content = fs::read_to_string(path).map_err(|e| load_err(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| load_err(e.to_string()))
}
