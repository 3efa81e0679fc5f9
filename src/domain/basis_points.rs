//! Basis-point representation for percentages.

use core::fmt;

use crate::error::Result;
use crate::math::mul_div;

/// Denominator that represents 100%.
const MAX_BPS: u32 = 10_000;

/// A percentage in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// # Examples
///
/// ```
/// use lockswap::domain::BasisPoints;
///
/// // 30 bp is the 3/1000 exchange fee.
/// let fee = BasisPoints::new(30);
/// assert_eq!(fee.apply_raw(1_000_000), Ok(3_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// 0%.
    pub const ZERO: Self = Self(0);

    /// 100%.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value lies in `0..=10_000`.
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= MAX_BPS
    }

    /// Computes `floor(value × self / 10 000)`.
    ///
    /// The product is formed in 256 bits, so only a quotient wider than
    /// `u128` can fail.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`](crate::error::DexError::Overflow) if
    /// the result exceeds `u128`.
    pub fn apply_raw(&self, value: u128) -> Result<u128> {
        mul_div(value, u128::from(self.0), u128::from(MAX_BPS))
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn valid_percent_range() {
        assert!(BasisPoints::ZERO.is_valid_percent());
        assert!(BasisPoints::MAX_PERCENT.is_valid_percent());
        assert!(!BasisPoints::new(10_001).is_valid_percent());
    }

    #[test]
    fn thirty_bp_matches_three_per_mille() {
        for raw in [0u128, 1, 333, 334, 999, 1_000, 123_456_789, 10u128.pow(30)] {
            let Ok(fee) = BasisPoints::new(30).apply_raw(raw) else {
                panic!("expected Ok");
            };
            assert_eq!(fee, raw * 3 / 1000, "raw = {raw}");
        }
    }

    #[test]
    fn remainder_is_floored() {
        assert_eq!(BasisPoints::new(30).apply_raw(333), Ok(0));
        assert_eq!(BasisPoints::new(30).apply_raw(334), Ok(1));
    }

    #[test]
    fn full_percent_is_identity() {
        assert_eq!(
            BasisPoints::MAX_PERCENT.apply_raw(u128::MAX),
            Ok(u128::MAX)
        );
    }

    #[test]
    fn wide_product_does_not_overflow() {
        // u128::MAX * 30 would overflow a u128 intermediate.
        let Ok(fee) = BasisPoints::new(30).apply_raw(u128::MAX) else {
            panic!("expected Ok");
        };
        assert!(fee > 0);
    }

    #[test]
    fn display() {
        assert_eq!(BasisPoints::new(30).to_string(), "30bp");
    }
}
