//! Step-by-step construction of an [`Exchange`].

use crate::assets::AssetBox;
use crate::config::ExchangeConfig;
use crate::domain::{AccountId, AssetId};
use crate::error::Result;
use crate::exchange::Exchange;
use crate::traits::{FungibleAsset, NativeWrapper, PriceFeed};

/// Collects configuration and listings, then validates them all at once
/// in [`build`](Self::build).
///
/// # Example
///
/// ```rust
/// use lockswap::assets::{FixedPriceFeed, LedgerToken, WrappedNative};
/// use lockswap::domain::{AccountId, AssetId};
/// use lockswap::factory::ExchangeBuilder;
///
/// let link = AssetId::from_bytes([1u8; 32]);
/// let weth = AssetId::from_bytes([2u8; 32]);
///
/// let exchange = ExchangeBuilder::new(AccountId::from_bytes([0xde; 32]))
///     .asset(link, LedgerToken::new(link), FixedPriceFeed::new(716_878_975))
///     .wrapped_native(weth, WrappedNative::new(weth), FixedPriceFeed::new(163_262_812_740))
///     .build()
///     .expect("valid exchange");
/// assert_eq!(exchange.supported_assets(), &[link, weth]);
/// assert_eq!(exchange.registry().wrapped_native(), Some(weth));
/// ```
#[derive(Debug)]
#[must_use]
pub struct ExchangeBuilder {
    account: AccountId,
    config: ExchangeConfig,
    listings: Vec<(AssetId, AssetBox, Box<dyn PriceFeed>)>,
}

impl ExchangeBuilder {
    /// Starts a builder with the default configuration.
    pub fn new(account: AccountId) -> Self {
        Self {
            account,
            config: ExchangeConfig::default(),
            listings: Vec::new(),
        }
    }

    /// Replaces the configuration.
    pub fn config(mut self, config: ExchangeConfig) -> Self {
        self.config = config;
        self
    }

    /// Lists a plain fungible asset.
    pub fn asset(
        mut self,
        id: AssetId,
        capability: impl FungibleAsset + 'static,
        feed: impl PriceFeed + 'static,
    ) -> Self {
        self.listings
            .push((id, AssetBox::fungible(capability), Box::new(feed)));
        self
    }

    /// Lists the wrapped-native asset.
    pub fn wrapped_native(
        mut self,
        id: AssetId,
        wrapper: impl NativeWrapper + 'static,
        feed: impl PriceFeed + 'static,
    ) -> Self {
        self.listings
            .push((id, AssetBox::wrapped_native(wrapper), Box::new(feed)));
        self
    }

    /// Validates everything and constructs the exchange.
    ///
    /// Listings are registered in the order they were added.
    ///
    /// # Errors
    ///
    /// - Any configuration validation error.
    /// - [`DexError::InvalidAsset`](crate::error::DexError::InvalidAsset)
    ///   for a zero asset id.
    /// - [`DexError::AssetAlreadyRegistered`](crate::error::DexError::AssetAlreadyRegistered)
    ///   for a repeated id.
    /// - [`DexError::InvalidConfiguration`](crate::error::DexError::InvalidConfiguration)
    ///   for a second wrapped-native asset.
    pub fn build(self) -> Result<Exchange> {
        let mut exchange = Exchange::new(self.account, self.config)?;
        for (id, capability, feed) in self.listings {
            exchange.register_asset(id, capability, feed)?;
        }
        Ok(exchange)
    }
}
