//! Domain error types.

/// Top-level error type for tickerwatch.
#[derive(Debug, thiserror::Error)]
pub enum TickerwatchError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("no data for {symbol}")]
    NoData { symbol: String },

    #[error("insufficient data for {symbol}: have {bars} bars, need {minimum}")]
    InsufficientData {
        symbol: String,
        bars: usize,
        minimum: usize,
    },

    #[error("bad price record for {symbol}: {reason}")]
    BadPriceRecord { symbol: String, reason: String },

    #[error("portfolio file error in {file}: {reason}")]
    PortfolioLoad { file: String, reason: String },

    #[error("invalid symbol list: {reason}")]
    SymbolList { reason: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&TickerwatchError> for std::process::ExitCode {
    fn from(err: &TickerwatchError) -> Self {
        let code: u8 = match err {
            TickerwatchError::Io(_) => 1,
            TickerwatchError::ConfigParse { .. }
            | TickerwatchError::ConfigMissing { .. }
            | TickerwatchError::ConfigInvalid { .. } => 2,
            TickerwatchError::PortfolioLoad { .. } | TickerwatchError::Json(_) => 3,
            TickerwatchError::SymbolList { .. } => 4,
            TickerwatchError::NoData { .. }
            | TickerwatchError::InsufficientData { .. }
            | TickerwatchError::BadPriceRecord { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
