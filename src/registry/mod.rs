//! Supported assets and their collaborators.
//!
//! Each listed asset maps to its transfer capability and its price feed.
//! At most one asset is the wrapped-native asset.

use std::collections::HashMap;

use tracing::debug;

use crate::assets::AssetBox;
use crate::domain::AssetId;
use crate::error::{DexError, Result};
use crate::traits::{NativeWrapper, PriceFeed};

/// A registered asset: what moves it and what prices it.
#[derive(Debug)]
pub struct AssetEntry {
    capability: AssetBox,
    feed: Box<dyn PriceFeed>,
}

impl AssetEntry {
    /// Transfer capability.
    #[must_use]
    pub const fn capability(&self) -> &AssetBox {
        &self.capability
    }

    /// Price feed.
    #[must_use]
    pub fn feed(&self) -> &dyn PriceFeed {
        self.feed.as_ref()
    }
}

/// The set of assets the exchange accepts.
#[derive(Debug, Default)]
pub struct AssetRegistry {
    entries: HashMap<AssetId, AssetEntry>,
    order: Vec<AssetId>,
    wrapped_native: Option<AssetId>,
}

impl AssetRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists `asset` with its capability and feed.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidAsset`] for the zero id.
    /// - [`DexError::AssetAlreadyRegistered`] if `asset` is already listed.
    /// - [`DexError::InvalidConfiguration`] for a second wrapped-native
    ///   asset.
    pub fn register_asset(
        &mut self,
        asset: AssetId,
        capability: AssetBox,
        feed: Box<dyn PriceFeed>,
    ) -> Result<()> {
        if asset.is_zero() {
            return Err(DexError::InvalidAsset(asset));
        }
        if self.entries.contains_key(&asset) {
            return Err(DexError::AssetAlreadyRegistered(asset));
        }
        if capability.is_wrapped_native() {
            if self.wrapped_native.is_some() {
                return Err(DexError::InvalidConfiguration(
                    "only one wrapped-native asset may be registered",
                ));
            }
            self.wrapped_native = Some(asset);
        }
        debug!(%asset, wrapped = capability.is_wrapped_native(), "asset registered");
        self.entries.insert(asset, AssetEntry { capability, feed });
        self.order.push(asset);
        Ok(())
    }

    /// Returns `true` if `asset` is listed.
    #[must_use]
    pub fn is_supported(&self, asset: AssetId) -> bool {
        self.entries.contains_key(&asset)
    }

    /// # Errors
    ///
    /// Returns [`DexError::AssetNotSupported`] if `asset` is not listed.
    pub fn ensure_supported(&self, asset: AssetId) -> Result<()> {
        if self.is_supported(asset) {
            Ok(())
        } else {
            Err(DexError::AssetNotSupported(asset))
        }
    }

    /// The entry for `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::AssetNotSupported`] if `asset` is not listed.
    pub fn entry(&self, asset: AssetId) -> Result<&AssetEntry> {
        self.entries
            .get(&asset)
            .ok_or(DexError::AssetNotSupported(asset))
    }

    /// Transfer capability for `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::AssetNotSupported`] if `asset` is not listed.
    pub fn capability(&self, asset: AssetId) -> Result<&AssetBox> {
        self.entry(asset).map(AssetEntry::capability)
    }

    /// Mutable transfer capability for `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::AssetNotSupported`] if `asset` is not listed.
    pub fn capability_mut(&mut self, asset: AssetId) -> Result<&mut AssetBox> {
        self.entries
            .get_mut(&asset)
            .map(|e| &mut e.capability)
            .ok_or(DexError::AssetNotSupported(asset))
    }

    /// Price feed for `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::AssetNotSupported`] if `asset` is not listed.
    pub fn feed(&self, asset: AssetId) -> Result<&dyn PriceFeed> {
        self.entry(asset).map(AssetEntry::feed)
    }

    /// The wrapped-native asset id, if one is registered.
    #[must_use]
    pub const fn wrapped_native(&self) -> Option<AssetId> {
        self.wrapped_native
    }

    /// Returns `true` if `asset` is the wrapped-native asset.
    #[must_use]
    pub fn is_wrapped_native(&self, asset: AssetId) -> bool {
        self.wrapped_native == Some(asset)
    }

    /// The wrapped-native id together with its wrap/unwrap capability.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::NativeUnavailable`] if none is registered.
    pub fn wrapper_mut(&mut self) -> Result<(AssetId, &mut dyn NativeWrapper)> {
        let id = self.wrapped_native.ok_or(DexError::NativeUnavailable)?;
        let wrapper = self
            .entries
            .get_mut(&id)
            .and_then(|e| e.capability.wrapper_mut())
            .ok_or(DexError::NativeUnavailable)?;
        Ok((id, wrapper))
    }

    /// The wrap/unwrap capability, read-only.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::NativeUnavailable`] if none is registered.
    pub fn wrapper(&self) -> Result<&dyn NativeWrapper> {
        self.wrapped_native
            .and_then(|id| self.entries.get(&id))
            .and_then(|e| e.capability.wrapper())
            .ok_or(DexError::NativeUnavailable)
    }

    /// Listed assets in registration order.
    #[must_use]
    pub fn assets(&self) -> &[AssetId] {
        &self.order
    }

    /// Number of listed assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if nothing is listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::assets::{FixedPriceFeed, LedgerToken, WrappedNative};

    fn id(b: u8) -> AssetId {
        AssetId::from_bytes([b; 32])
    }

    fn token(b: u8) -> AssetBox {
        AssetBox::fungible(LedgerToken::new(id(b)))
    }

    fn feed() -> Box<dyn PriceFeed> {
        Box::new(FixedPriceFeed::new(100_000_000))
    }

    #[test]
    fn register_and_lookup() {
        let mut reg = AssetRegistry::new();
        assert_eq!(reg.register_asset(id(1), token(1), feed()), Ok(()));
        assert!(reg.is_supported(id(1)));
        assert!(!reg.is_supported(id(2)));
        assert_eq!(reg.ensure_supported(id(2)), Err(DexError::AssetNotSupported(id(2))));
        assert_eq!(reg.assets(), &[id(1)]);
        assert!(reg.feed(id(1)).is_ok());
    }

    #[test]
    fn zero_id_rejected() {
        let mut reg = AssetRegistry::new();
        assert_eq!(
            reg.register_asset(AssetId::zero(), token(0), feed()),
            Err(DexError::InvalidAsset(AssetId::zero()))
        );
        assert!(reg.is_empty());
    }

    #[test]
    fn duplicate_rejected() {
        let mut reg = AssetRegistry::new();
        let Ok(()) = reg.register_asset(id(1), token(1), feed()) else {
            panic!("expected Ok");
        };
        assert_eq!(
            reg.register_asset(id(1), token(1), feed()),
            Err(DexError::AssetAlreadyRegistered(id(1)))
        );
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn single_wrapped_native() {
        let mut reg = AssetRegistry::new();
        let weth = AssetBox::wrapped_native(WrappedNative::new(id(4)));
        let Ok(()) = reg.register_asset(id(4), weth, feed()) else {
            panic!("expected Ok");
        };
        assert_eq!(reg.wrapped_native(), Some(id(4)));
        assert!(reg.is_wrapped_native(id(4)));
        let second = AssetBox::wrapped_native(WrappedNative::new(id(5)));
        let Err(DexError::InvalidConfiguration(_)) = reg.register_asset(id(5), second, feed())
        else {
            panic!("expected InvalidConfiguration");
        };
        let Ok((wid, _)) = reg.wrapper_mut() else {
            panic!("expected wrapper");
        };
        assert_eq!(wid, id(4));
    }

    #[test]
    fn no_wrapper_registered() {
        let mut reg = AssetRegistry::new();
        assert!(matches!(reg.wrapper_mut(), Err(DexError::NativeUnavailable)));
        assert!(matches!(reg.wrapper(), Err(DexError::NativeUnavailable)));
    }
}
