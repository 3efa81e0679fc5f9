//! Exchange fee tier.

use core::fmt;

use super::{BasisPoints, OracleAmount};
use crate::error::Result;

/// The fee skimmed from every cross-asset conversion.
///
/// The fee is charged on the oracle-scale quote before it is rescaled to
/// the output asset, and is always floored.
///
/// # Examples
///
/// ```
/// use lockswap::domain::{FeeTier, OracleAmount};
///
/// let fee = FeeTier::STANDARD.fee_on(OracleAmount::new(1_000)).expect("fits");
/// assert_eq!(fee, OracleAmount::new(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// 0.30% (3/1000), the fee every listed pair is charged by default.
    pub const STANDARD: Self = Self(BasisPoints::new(30));

    /// No fee.
    pub const ZERO: Self = Self(BasisPoints::ZERO);

    /// Creates a fee tier from arbitrary basis points.
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Returns the underlying basis points.
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Computes `floor(quote × bps / 10 000)`.
    ///
    /// # Errors
    ///
    /// Propagates overflow from [`BasisPoints::apply_raw`].
    pub fn fee_on(&self, quote: OracleAmount) -> Result<OracleAmount> {
        self.0
            .apply_raw(quote.get())
            .map(OracleAmount::new)
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn standard_is_thirty_bp() {
        assert_eq!(FeeTier::STANDARD.basis_points().get(), 30);
        assert_eq!(FeeTier::default(), FeeTier::STANDARD);
    }

    #[test]
    fn fee_truncates() {
        let Ok(fee) = FeeTier::STANDARD.fee_on(OracleAmount::new(333)) else {
            panic!("expected Ok");
        };
        assert_eq!(fee, OracleAmount::ZERO);
        let Ok(fee) = FeeTier::STANDARD.fee_on(OracleAmount::new(334)) else {
            panic!("expected Ok");
        };
        assert_eq!(fee, OracleAmount::new(1));
    }

    #[test]
    fn zero_tier_charges_nothing() {
        assert_eq!(
            FeeTier::ZERO.fee_on(OracleAmount::new(1_000_000)),
            Ok(OracleAmount::ZERO)
        );
    }

    #[test]
    fn display() {
        assert_eq!(FeeTier::STANDARD.to_string(), "FeeTier(30bp)");
    }
}
