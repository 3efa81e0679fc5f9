//! Price feed with a settable answer.

use std::cell::Cell;
use std::rc::Rc;

use crate::domain::{Decimals, OraclePrice};
use crate::traits::PriceFeed;

/// A feed whose answer is set by hand.
///
/// Clones share the same answer, so a test can keep one handle, register
/// another with the exchange, and move the price between operations.
///
/// # Examples
///
/// ```
/// use lockswap::assets::FixedPriceFeed;
/// use lockswap::traits::PriceFeed;
///
/// let feed = FixedPriceFeed::new(163_262_812_740);
/// let registered = feed.clone();
/// feed.update_answer(170_000_000_000);
/// assert_eq!(registered.latest_price().answer(), 170_000_000_000);
/// ```
#[derive(Debug, Clone)]
pub struct FixedPriceFeed {
    answer: Rc<Cell<u128>>,
    decimals: Decimals,
}

impl FixedPriceFeed {
    /// A feed reporting `answer` at the 8-decimal oracle scale.
    #[must_use]
    pub fn new(answer: u128) -> Self {
        Self::with_decimals(answer, Decimals::ORACLE)
    }

    /// A feed reporting `answer` at `decimals`.
    #[must_use]
    pub fn with_decimals(answer: u128, decimals: Decimals) -> Self {
        Self {
            answer: Rc::new(Cell::new(answer)),
            decimals,
        }
    }

    /// Replaces the answer seen by every clone of this feed.
    pub fn update_answer(&self, answer: u128) {
        self.answer.set(answer);
    }
}

impl PriceFeed for FixedPriceFeed {
    fn latest_price(&self) -> OraclePrice {
        OraclePrice::new(self.answer.get(), self.decimals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_configured_scale() {
        let feed = FixedPriceFeed::new(716_878_975);
        assert_eq!(feed.latest_price(), OraclePrice::new(716_878_975, Decimals::ORACLE));
    }

    #[test]
    fn clones_share_updates() {
        let feed = FixedPriceFeed::with_decimals(1, Decimals::MAX);
        let other = feed.clone();
        other.update_answer(2);
        assert_eq!(feed.latest_price().answer(), 2);
        assert_eq!(feed.latest_price().decimals(), Decimals::MAX);
    }
}
