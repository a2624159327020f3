//! Market data access port trait.

use crate::domain::error::TickerwatchError;
use crate::domain::market_data::{Fundamentals, PriceBar, Quote};

/// Source of price history, quotes, and fundamentals for one symbol at a
/// time. History arrives in ascending date order.
pub trait MarketDataPort {
    fn fetch_history(&self, symbol: &str) -> Result<Vec<PriceBar>, TickerwatchError>;

    fn fetch_quote(&self, symbol: &str) -> Result<Quote, TickerwatchError>;

    /// Fundamentals are best-effort; implementations return
    /// `Fundamentals::default()` rather than an error when the provider has
    /// nothing for the symbol.
    fn fetch_fundamentals(&self, symbol: &str) -> Result<Fundamentals, TickerwatchError>;
}
