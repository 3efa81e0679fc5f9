//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use lockswap::prelude::*;
//! ```

pub use crate::domain::{
    AccountId, Amount, AssetId, CallContext, DepositReceipt, ExchangeEvent, FeeTier,
    OracleAmount, Pool, PoolId, Quote, Settlement, SwapReceipt, Timestamp, WithdrawalReceipt,
};

pub use crate::traits::{FromConfig, FungibleAsset, NativeWrapper, PriceFeed};

pub use crate::math::CheckedArithmetic;

pub use crate::config::ExchangeConfig;

pub use crate::error::{DexError, Result};

pub use crate::assets::{AssetBox, FixedPriceFeed, LedgerToken, WrappedNative};

pub use crate::exchange::Exchange;

pub use crate::factory::ExchangeBuilder;
