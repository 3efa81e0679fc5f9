//! Asset-scale token amount.

use core::fmt;

/// A quantity of an asset in its smallest native unit (18-decimal domain
/// for every asset the exchange lists).
///
/// `Amount` is what balances, reserves, pool principal and payouts are
/// measured in. Oracle-scale quantities use
/// [`OracleAmount`](super::OracleAmount) instead so the two domains can
/// never be mixed without an explicit rescale.
///
/// Arithmetic is checked and returns `None` on overflow or underflow.
///
/// # Examples
///
/// ```
/// use lockswap::domain::Amount;
///
/// let deposit = Amount::new(10_000_000_000_000_000_000);
/// let twice = deposit.checked_add(&deposit);
/// assert_eq!(twice, Some(Amount::new(20_000_000_000_000_000_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Largest representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Wraps a raw smallest-unit value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw smallest-unit value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiplication by a dimensionless factor.
    #[must_use]
    pub const fn checked_scale(&self, factor: u128) -> Option<Self> {
        match self.0.checked_mul(factor) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_default_agree() {
        assert_eq!(Amount::default(), Amount::ZERO);
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::new(1).is_zero());
    }

    #[test]
    fn add_and_sub() {
        let a = Amount::new(300);
        let b = Amount::new(100);
        assert_eq!(a.checked_add(&b), Some(Amount::new(400)));
        assert_eq!(a.checked_sub(&b), Some(Amount::new(200)));
        assert_eq!(b.checked_sub(&a), None);
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
    }

    #[test]
    fn scale_by_rescale_factor() {
        let net = Amount::new(997);
        assert_eq!(
            net.checked_scale(10_000_000_000),
            Some(Amount::new(9_970_000_000_000))
        );
        assert_eq!(Amount::MAX.checked_scale(2), None);
    }

    #[test]
    fn display_is_raw_units() {
        assert_eq!(Amount::new(1_000_000).to_string(), "1000000");
    }
}
