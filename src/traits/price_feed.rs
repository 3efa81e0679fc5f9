//! Read-only price source.

use core::fmt;

use crate::domain::OraclePrice;

/// The latest answer of an external price feed.
///
/// Feeds are consumed, never written, by the exchange. An answer may be
/// stale or zero; staleness is not checked, and a zero denominator price
/// is reported as [`DexError::InvalidPrice`](crate::error::DexError::InvalidPrice)
/// by the rate engine rather than panicking.
///
/// # Implementors
///
/// - `FixedPriceFeed`: an in-memory answer that tests and simulations
///   can move with `update_answer`.
pub trait PriceFeed: fmt::Debug {
    /// Returns the feed's current answer together with its decimals.
    fn latest_price(&self) -> OraclePrice;
}
