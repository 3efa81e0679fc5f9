//! Seams between the exchange and the collaborators it consumes.
//!
//! [`PriceFeed`] and [`FungibleAsset`] / [`NativeWrapper`] are supplied by
//! the embedding environment at registration time. [`FromConfig`] is the
//! uniform constructor used by the builder.

mod from_config;
mod fungible_asset;
mod price_feed;

pub use from_config::FromConfig;
pub use fungible_asset::{FungibleAsset, NativeWrapper};
pub use price_feed::PriceFeed;
