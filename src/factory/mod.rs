//! Exchange instantiation via the builder pattern.
//!
//! [`ExchangeBuilder`] gathers an [`ExchangeConfig`] and the asset
//! listings, then validates and registers them in one
//! [`build`](ExchangeBuilder::build) call, so a half-configured exchange
//! is never observable.
//!
//! [`ExchangeConfig`]: crate::config::ExchangeConfig

mod exchange_builder;

pub use exchange_builder::ExchangeBuilder;
