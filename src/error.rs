//! Unified error type for the exchange engine.
//!
//! Every fallible operation in the crate returns [`DexError`]. A failed
//! operation never leaves partial state behind: the error is raised during
//! validation, or the already-applied legs are compensated before it is
//! returned.

use thiserror::Error;

use crate::domain::{AccountId, Amount, AssetId, PoolId, Timestamp};

/// Errors raised by the exchange, its ledger, and its asset capabilities.
///
/// Variants carry the diagnostic payload needed to reproduce the failure
/// from the inputs alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DexError {
    /// A zero asset identifier was supplied.
    #[error("invalid asset {0}")]
    InvalidAsset(AssetId),

    /// The amount is zero.
    #[error("amount {amount} of {asset} is too small")]
    AmountTooSmall {
        /// Asset the amount is denominated in.
        asset: AssetId,
        /// Rejected amount.
        amount: Amount,
    },

    /// The asset is not registered with the exchange.
    #[error("asset {0} is not supported")]
    AssetNotSupported(AssetId),

    /// The account does not hold enough of the asset.
    #[error("account {account} has insufficient balance of {asset}")]
    InsufficientBalance {
        /// Account whose balance was checked.
        account: AccountId,
        /// Asset that was short.
        asset: AssetId,
    },

    /// The owner has not approved the spender for enough of the asset.
    #[error("account {owner} has not approved {spender} for enough {asset}")]
    InsufficientAllowance {
        /// Holder of the funds.
        owner: AccountId,
        /// Account attempting the pull.
        spender: AccountId,
        /// Asset being pulled.
        asset: AssetId,
    },

    /// The pool id was never assigned.
    #[error("pool {0} does not exist")]
    InvalidId(PoolId),

    /// The caller is not the pool owner.
    #[error("caller is not the pool owner")]
    NotOwner,

    /// The pool has already been withdrawn.
    #[error("pool {0} is no longer active")]
    PoolInactive(PoolId),

    /// The pool is still inside its lock period.
    #[error("pool is locked until {0}")]
    PoolLocked(Timestamp),

    /// The two sides of an exchange are the same asset, or a side is the
    /// wrapped-native asset where that is not allowed.
    #[error("invalid asset pair")]
    InvalidPair,

    /// The wrapped-native asset was passed to the generic swap entry point.
    #[error("native value must go through the native swap entry points")]
    WrongFunctionCall,

    /// The exchange does not hold enough of the output asset.
    #[error("reserve of {asset} is {available}, payout requires {required}")]
    InsufficientReserve {
        /// Output asset.
        asset: AssetId,
        /// Payout that was requested.
        required: Amount,
        /// Reserve currently held.
        available: Amount,
    },

    /// Native value was attached to an entry point that does not take it.
    #[error("unexpected native value {0} attached")]
    UnexpectedValue(Amount),

    /// A native entry point was used but no wrapped-native asset is registered.
    #[error("no wrapped-native asset is registered")]
    NativeUnavailable,

    /// The asset id is already registered.
    #[error("asset {0} is already registered")]
    AssetAlreadyRegistered(AssetId),

    /// The oracle price cannot be used as a divisor.
    #[error("invalid oracle price for {0}")]
    InvalidPrice(AssetId),

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A decimal precision is out of range.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Reserve of an asset is below the principal of its active pools.
    #[error("reserve of {asset} is {reserve}, active principal is {principal}")]
    ReserveShortfall {
        /// Asset under audit.
        asset: AssetId,
        /// Reserve held by the exchange.
        reserve: Amount,
        /// Sum of active pool principal.
        principal: Amount,
    },

    /// Native value held by the wrapper differs from the wrapped supply.
    #[error("wrapper holds {native} native value against {supply} wrapped supply")]
    WrapperImbalance {
        /// Native value held.
        native: Amount,
        /// Wrapped supply outstanding.
        supply: Amount,
    },
}

/// Convenience alias used across the crate.
pub type Result<T> = core::result::Result<T, DexError>;
