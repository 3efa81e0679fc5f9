//! In-memory asset capabilities and price feeds.
//!
//! [`LedgerToken`] and [`WrappedNative`] implement the transfer traits
//! over a shared balance book; [`FixedPriceFeed`] is a settable oracle.
//! [`AssetBox`] is the closed set of capabilities the registry stores.

mod asset_box;
mod balance_book;
mod fixed_price_feed;
mod ledger_token;
mod wrapped_native;

pub use asset_box::AssetBox;
pub(crate) use balance_book::BalanceBook;
pub use fixed_price_feed::FixedPriceFeed;
pub use ledger_token::LedgerToken;
pub use wrapped_native::WrappedNative;
