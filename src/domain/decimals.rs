//! Decimal precision of an asset or a price feed.

use crate::error::{DexError, Result};

/// Maximum allowed decimal places (EVM standard).
const MAX_DECIMALS: u8 = 18;

/// Number of decimal places a raw integer is scaled by.
///
/// Used both for asset amounts (18 by default) and for oracle prices
/// (8 by default). Valid range is `0..=18`.
///
/// # Examples
///
/// ```
/// use lockswap::domain::Decimals;
///
/// let oracle = Decimals::new(8).expect("valid");
/// let asset = Decimals::new(18).expect("valid");
/// assert_eq!(oracle.rescale_factor_to(asset), Ok(10_000_000_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Scale of oracle prices (8 decimals).
    pub const ORACLE: Self = Self(8);

    /// Scale of listed asset amounts (18 decimals).
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self> {
        if value > MAX_DECIMALS {
            return Err(DexError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns the factor that lifts a value at this scale to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidPrecision`] if `target` is coarser than
    /// this scale.
    pub const fn rescale_factor_to(&self, target: Self) -> Result<u128> {
        if target.0 < self.0 {
            return Err(DexError::InvalidPrecision(
                "rescale target must not have fewer decimals",
            ));
        }
        Ok(10u128.pow((target.0 - self.0) as u32))
    }

    /// Converts `value` from this scale to `target`, flooring when the
    /// target is coarser.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] if scaling up overflows `u128`.
    pub fn convert(&self, value: u128, target: Self) -> Result<u128> {
        if target.0 >= self.0 {
            let factor = 10u128.pow(u32::from(target.0 - self.0));
            value
                .checked_mul(factor)
                .ok_or(DexError::Overflow("decimal conversion overflow"))
        } else {
            Ok(value / 10u128.pow(u32::from(self.0 - target.0)))
        }
    }
}
