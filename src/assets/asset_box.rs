//! Enum dispatch over the two kinds of registered asset capability.

use crate::domain::{AccountId, Amount};
use crate::error::Result;
use crate::traits::{FungibleAsset, NativeWrapper};

/// A registered transfer capability.
///
/// Plain assets only move balances; the wrapped-native asset can also
/// wrap and unwrap. Both kinds implement [`FungibleAsset`] by delegating
/// to the inner capability.
#[derive(Debug)]
pub enum AssetBox {
    /// An ordinary fungible asset.
    Fungible(Box<dyn FungibleAsset>),
    /// The wrapped form of the chain's native value.
    WrappedNative(Box<dyn NativeWrapper>),
}

macro_rules! delegate {
    ($self:ident, $method:ident ( $($arg:expr),* )) => {
        match $self {
            AssetBox::Fungible(a) => a.$method($($arg),*),
            AssetBox::WrappedNative(a) => a.$method($($arg),*),
        }
    };
}

impl AssetBox {
    /// Boxes a plain fungible asset.
    pub fn fungible(asset: impl FungibleAsset + 'static) -> Self {
        Self::Fungible(Box::new(asset))
    }

    /// Boxes a native wrapper.
    pub fn wrapped_native(wrapper: impl NativeWrapper + 'static) -> Self {
        Self::WrappedNative(Box::new(wrapper))
    }

    /// Returns `true` for the wrapped-native variant.
    #[must_use]
    pub const fn is_wrapped_native(&self) -> bool {
        matches!(self, Self::WrappedNative(_))
    }

    /// Wrap/unwrap access, if this is the wrapped-native asset.
    pub fn wrapper(&self) -> Option<&dyn NativeWrapper> {
        match self {
            Self::WrappedNative(w) => Some(w.as_ref()),
            Self::Fungible(_) => None,
        }
    }

    /// Mutable wrap/unwrap access, if this is the wrapped-native asset.
    pub fn wrapper_mut(&mut self) -> Option<&mut dyn NativeWrapper> {
        match self {
            Self::WrappedNative(w) => Some(w.as_mut()),
            Self::Fungible(_) => None,
        }
    }
}

impl FungibleAsset for AssetBox {
    fn balance_of(&self, account: AccountId) -> Amount {
        delegate!(self, balance_of(account))
    }

    fn allowance(&self, owner: AccountId, spender: AccountId) -> Amount {
        delegate!(self, allowance(owner, spender))
    }

    fn total_supply(&self) -> Amount {
        delegate!(self, total_supply())
    }

    fn transfer(&mut self, from: AccountId, to: AccountId, amount: Amount) -> Result<()> {
        delegate!(self, transfer(from, to, amount))
    }

    fn transfer_from(
        &mut self,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<()> {
        delegate!(self, transfer_from(spender, from, to, amount))
    }

    fn approve(&mut self, owner: AccountId, spender: AccountId, amount: Amount) -> Result<()> {
        delegate!(self, approve(owner, spender, amount))
    }
}
