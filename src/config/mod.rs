//! Exchange configuration.
//!
//! [`ExchangeConfig`] carries the lock period, interest rate, swap fee and
//! the two decimal domains. Its defaults are the one-week lock, 10% yearly
//! rate, 0.3% fee, 8-decimal oracle and 18-decimal assets.

mod exchange_config;

pub use exchange_config::{ExchangeConfig, ANNUAL_RATE_PERCENT, LOCK_PERIOD_SECS};
