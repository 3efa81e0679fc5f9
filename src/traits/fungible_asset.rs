//! Transfer capabilities the exchange consumes.
//!
//! [`FungibleAsset`] is the standard pull-payment token surface:
//! balances, allowances, `transfer` and `transfer_from`. [`NativeWrapper`]
//! extends it with the 1:1 bridge between the chain's native value and a
//! fungible representation.
//!
//! Every mutating method either fully applies or returns `Err` with no
//! change, which is what lets the exchange compensate an earlier leg when
//! a later one fails.

use core::fmt;

use crate::domain::{AccountId, Amount};
use crate::error::Result;

/// A fungible asset ledger.
///
/// # Errors
///
/// Mutating methods return:
///
/// - [`DexError::InsufficientBalance`](crate::error::DexError::InsufficientBalance)
///   if the debited account holds less than `amount`.
/// - [`DexError::InsufficientAllowance`](crate::error::DexError::InsufficientAllowance)
///   if `transfer_from` exceeds the spender's allowance.
/// - [`DexError::Overflow`](crate::error::DexError::Overflow) if a credit
///   would overflow.
pub trait FungibleAsset: fmt::Debug {
    /// Balance held by `account`.
    fn balance_of(&self, account: AccountId) -> Amount;

    /// Amount `spender` may still pull from `owner`.
    fn allowance(&self, owner: AccountId, spender: AccountId) -> Amount;

    /// Sum of all balances.
    fn total_supply(&self) -> Amount;

    /// Moves `amount` from `from` to `to` on `from`'s authority.
    ///
    /// # Errors
    ///
    /// See the trait-level documentation.
    fn transfer(&mut self, from: AccountId, to: AccountId, amount: Amount) -> Result<()>;

    /// Moves `amount` from `from` to `to` on `spender`'s authority,
    /// consuming allowance.
    ///
    /// # Errors
    ///
    /// See the trait-level documentation.
    fn transfer_from(
        &mut self,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<()>;

    /// Sets `spender`'s allowance over `owner`'s balance to `amount`.
    ///
    /// # Errors
    ///
    /// Implementations may reject approvals; the in-memory ledgers never do.
    fn approve(&mut self, owner: AccountId, spender: AccountId, amount: Amount) -> Result<()>;
}

/// A fungible asset backed 1:1 by held native value.
///
/// `native_balance()` equals `total_supply()` after every call.
pub trait NativeWrapper: FungibleAsset {
    /// Takes `value` of native value from `account` and credits the same
    /// amount of wrapped balance. Returns the amount credited.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`](crate::error::DexError::Overflow) if
    /// supply or holdings would overflow.
    fn wrap(&mut self, account: AccountId, value: Amount) -> Result<Amount>;

    /// Burns `amount` of `account`'s wrapped balance and releases the same
    /// native value. Returns the native value released.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InsufficientBalance`](crate::error::DexError::InsufficientBalance)
    /// if `account` holds less than `amount`.
    fn unwrap(&mut self, account: AccountId, amount: Amount) -> Result<Amount>;

    /// Native value currently held against outstanding wrapped balances.
    fn native_balance(&self) -> Amount;
}
