//! The exchange engine and its pricing.
//!
//! [`PriceOracle`] reads the registered feeds, [`RateEngine`] turns two
//! prices into a fee-adjusted quote, and [`Exchange`] orchestrates
//! deposits, withdrawals and swaps on top of the registry and the ledger.

mod engine;
mod oracle;
mod rate_engine;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use engine::Exchange;
pub use oracle::PriceOracle;
pub use rate_engine::RateEngine;
