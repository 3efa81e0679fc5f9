//! Price lookups against the registered feeds.

use tracing::debug;

use crate::domain::{AssetId, Decimals};
use crate::error::Result;
use crate::registry::AssetRegistry;

/// Reads registered feeds and normalises every answer to one scale.
#[derive(Debug, Clone, Copy)]
pub struct PriceOracle<'r> {
    registry: &'r AssetRegistry,
    scale: Decimals,
}

impl<'r> PriceOracle<'r> {
    /// An oracle over `registry` reporting prices at `scale` decimals.
    #[must_use]
    pub const fn new(registry: &'r AssetRegistry, scale: Decimals) -> Self {
        Self { registry, scale }
    }

    /// The scale every price is reported at.
    #[must_use]
    pub const fn scale(&self) -> Decimals {
        self.scale
    }

    /// Current price of `asset` at [`scale`](Self::scale).
    ///
    /// # Errors
    ///
    /// - [`DexError::AssetNotSupported`](crate::error::DexError::AssetNotSupported)
    ///   if `asset` has no feed.
    /// - [`DexError::Overflow`](crate::error::DexError::Overflow) if
    ///   normalising the answer overflows.
    pub fn price_of(&self, asset: AssetId) -> Result<u128> {
        let reported = self.registry.feed(asset)?.latest_price();
        let price = reported.normalized_to(self.scale)?;
        debug!(%asset, %reported, %price, "oracle price read");
        Ok(price)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::assets::{AssetBox, FixedPriceFeed, LedgerToken};
    use crate::error::DexError;

    #[test]
    fn normalises_feed_precision() {
        let asset = AssetId::from_bytes([1u8; 32]);
        let Ok(six) = Decimals::new(6) else {
            panic!("valid decimals");
        };
        let mut registry = AssetRegistry::new();
        let Ok(()) = registry.register_asset(
            asset,
            AssetBox::fungible(LedgerToken::new(asset)),
            Box::new(FixedPriceFeed::with_decimals(1_000_000, six)),
        ) else {
            panic!("expected Ok");
        };
        let oracle = PriceOracle::new(&registry, Decimals::ORACLE);
        assert_eq!(oracle.price_of(asset), Ok(100_000_000));
    }

    #[test]
    fn unknown_asset() {
        let registry = AssetRegistry::new();
        let oracle = PriceOracle::new(&registry, Decimals::ORACLE);
        let asset = AssetId::from_bytes([2u8; 32]);
        assert_eq!(oracle.price_of(asset), Err(DexError::AssetNotSupported(asset)));
    }
}
