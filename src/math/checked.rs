//! Checked arithmetic trait for quantity newtypes.
//!
//! [`CheckedArithmetic`] turns the `Option`-returning `const` helpers on
//! [`Amount`] and [`OracleAmount`] into `Result`s carrying a specific
//! [`DexError`] so they compose with `?`.
//!
//! # Examples
//!
//! ```
//! use lockswap::domain::Amount;
//! use lockswap::math::CheckedArithmetic;
//!
//! let principal = Amount::new(100);
//! let payout = principal.safe_add(&Amount::new(5)).expect("fits");
//! assert_eq!(payout, Amount::new(105));
//! ```

use crate::domain::{Amount, OracleAmount};
use crate::error::{DexError, Result};

/// Fallible arithmetic for quantity wrapper types.
///
/// No method panics or saturates; every failure is an `Err`.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] on overflow.
    fn safe_add(&self, other: &Self) -> Result<Self>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self> {
        self.checked_add(other)
            .ok_or(DexError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self> {
        self.checked_sub(other)
            .ok_or(DexError::Underflow("amount subtraction underflow"))
    }
}

impl CheckedArithmetic for OracleAmount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self> {
        self.get()
            .checked_add(other.get())
            .map(OracleAmount::new)
            .ok_or(DexError::Overflow("oracle amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self> {
        self.checked_sub(other)
            .ok_or(DexError::Underflow("oracle amount subtraction underflow"))
    }
}
