//! Price reported by an external feed.

use core::fmt;

use super::Decimals;
use crate::error::Result;

/// An integer price together with the number of decimals it carries.
///
/// Feeds may report at any precision; the rate engine normalises every
/// price to the oracle scale before forming a ratio.
///
/// # Examples
///
/// ```
/// use lockswap::domain::{Decimals, OraclePrice};
///
/// // 1.00 at 6 decimals is 100_000_000 at 8 decimals.
/// let price = OraclePrice::new(1_000_000, Decimals::new(6).expect("valid"));
/// assert_eq!(price.normalized_to(Decimals::ORACLE), Ok(100_000_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OraclePrice {
    answer: u128,
    decimals: Decimals,
}

impl OraclePrice {
    /// Creates a price.
    #[must_use]
    pub const fn new(answer: u128, decimals: Decimals) -> Self {
        Self { answer, decimals }
    }

    /// Raw integer answer.
    #[must_use]
    pub const fn answer(&self) -> u128 {
        self.answer
    }

    /// Decimals carried by [`answer`](Self::answer).
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Re-expresses the answer at `target` decimals, flooring when the
    /// target is coarser.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`](crate::error::DexError::Overflow) if
    /// scaling up overflows `u128`.
    pub fn normalized_to(&self, target: Decimals) -> Result<u128> {
        self.decimals.convert(self.answer, target)
    }
}

impl fmt::Display for OraclePrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}e-{}", self.answer, self.decimals.get())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn oracle_scale_is_identity() {
        let price = OraclePrice::new(163_262_812_740, Decimals::ORACLE);
        assert_eq!(price.normalized_to(Decimals::ORACLE), Ok(163_262_812_740));
        assert_eq!(price.decimals(), Decimals::ORACLE);
    }

    #[test]
    fn finer_feed_is_floored() {
        let price = OraclePrice::new(123_456_789_999, Decimals::new(10).unwrap_or_default());
        assert_eq!(price.normalized_to(Decimals::ORACLE), Ok(1_234_567_899));
    }

    #[test]
    fn display() {
        assert_eq!(OraclePrice::new(495_000_000, Decimals::ORACLE).to_string(), "495000000e-8");
    }
}
