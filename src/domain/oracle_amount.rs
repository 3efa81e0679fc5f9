//! Oracle-scale quantity.

use core::fmt;

use super::Amount;
use crate::error::{DexError, Result};

/// A quantity expressed at the price oracle's decimal scale (8 decimals by
/// default) rather than at the asset's native scale.
///
/// Exchange quotes are computed in this domain. The only way back to an
/// asset-scale [`Amount`] is [`rescale`](Self::rescale), which multiplies by
/// the configured decimal rescale factor.
///
/// # Examples
///
/// ```
/// use lockswap::domain::{Amount, OracleAmount};
///
/// let quoted = OracleAmount::new(997);
/// assert_eq!(quoted.rescale(10_000_000_000), Ok(Amount::new(9_970_000_000_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct OracleAmount(u128);

impl OracleAmount {
    /// Zero quantity.
    pub const ZERO: Self = Self(0);

    /// Wraps a raw oracle-scale value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw oracle-scale value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the quantity is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked subtraction.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Converts to the asset scale by multiplying with `factor`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] if the scaled value exceeds `u128`.
    pub const fn rescale(&self, factor: u128) -> Result<Amount> {
        match Amount::new(self.0).checked_scale(factor) {
            Some(v) => Ok(v),
            None => Err(DexError::Overflow("oracle amount rescale overflow")),
        }
    }
}

impl fmt::Display for OracleAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
