//! Wrapped form of the chain's native value.

use super::BalanceBook;
use crate::domain::{AccountId, Amount, AssetId};
use crate::error::{DexError, Result};
use crate::math::CheckedArithmetic;
use crate::traits::{FungibleAsset, NativeWrapper};

/// A fungible asset minted 1:1 against deposited native value.
///
/// The native holdings always equal the wrapped supply: `wrap` adds to
/// both, `unwrap` removes from both.
///
/// # Examples
///
/// ```
/// use lockswap::assets::WrappedNative;
/// use lockswap::domain::{AccountId, Amount, AssetId};
/// use lockswap::traits::{FungibleAsset, NativeWrapper};
///
/// let alice = AccountId::from_bytes([1u8; 32]);
/// let mut weth = WrappedNative::new(AssetId::from_bytes([4u8; 32]));
/// let wrapped = weth.wrap(alice, Amount::new(5)).expect("wrap");
/// assert_eq!(weth.unwrap(alice, wrapped), Ok(Amount::new(5)));
/// assert_eq!(weth.native_balance(), Amount::ZERO);
/// ```
#[derive(Debug, Clone)]
pub struct WrappedNative {
    book: BalanceBook,
    native: Amount,
}

impl WrappedNative {
    /// An empty wrapper.
    #[must_use]
    pub fn new(asset: AssetId) -> Self {
        Self {
            book: BalanceBook::new(asset),
            native: Amount::ZERO,
        }
    }

    /// The wrapped asset's identifier.
    #[must_use]
    pub const fn asset_id(&self) -> AssetId {
        self.book.asset()
    }
}

impl FungibleAsset for WrappedNative {
    fn balance_of(&self, account: AccountId) -> Amount {
        self.book.balance_of(account)
    }

    fn allowance(&self, owner: AccountId, spender: AccountId) -> Amount {
        self.book.allowance(owner, spender)
    }

    fn total_supply(&self) -> Amount {
        self.book.supply()
    }

    fn transfer(&mut self, from: AccountId, to: AccountId, amount: Amount) -> Result<()> {
        self.book.transfer(from, to, amount)
    }

    fn transfer_from(
        &mut self,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<()> {
        self.book.transfer_from(spender, from, to, amount)
    }

    fn approve(&mut self, owner: AccountId, spender: AccountId, amount: Amount) -> Result<()> {
        self.book.approve(owner, spender, amount);
        Ok(())
    }
}

impl NativeWrapper for WrappedNative {
    fn wrap(&mut self, account: AccountId, value: Amount) -> Result<Amount> {
        let native = self.native.safe_add(&value)?;
        self.book.mint(account, value)?;
        self.native = native;
        Ok(value)
    }

    fn unwrap(&mut self, account: AccountId, amount: Amount) -> Result<Amount> {
        let native = self
            .native
            .checked_sub(&amount)
            .ok_or(DexError::NativeUnavailable)?;
        self.book.burn(account, amount)?;
        self.native = native;
        Ok(amount)
    }

    fn native_balance(&self) -> Amount {
        self.native
    }
}
