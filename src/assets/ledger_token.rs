//! Plain fungible asset backed by a [`BalanceBook`].

use super::BalanceBook;
use crate::domain::{AccountId, Amount, AssetId};
use crate::error::Result;
use crate::traits::FungibleAsset;

/// An in-memory fungible asset.
///
/// Stands in for an externally deployed token: the exchange only ever
/// talks to it through [`FungibleAsset`].
///
/// # Examples
///
/// ```
/// use lockswap::assets::LedgerToken;
/// use lockswap::domain::{AccountId, Amount, AssetId};
/// use lockswap::traits::FungibleAsset;
///
/// let alice = AccountId::from_bytes([1u8; 32]);
/// let usdc = LedgerToken::with_supply(AssetId::from_bytes([2u8; 32]), alice, Amount::new(1_000))
///     .expect("supply fits");
/// assert_eq!(usdc.balance_of(alice), Amount::new(1_000));
/// ```
#[derive(Debug, Clone)]
pub struct LedgerToken {
    book: BalanceBook,
}

impl LedgerToken {
    /// An asset with zero supply.
    #[must_use]
    pub fn new(asset: AssetId) -> Self {
        Self {
            book: BalanceBook::new(asset),
        }
    }

    /// An asset whose whole initial supply is held by `holder`.
    ///
    /// # Errors
    ///
    /// Never fails for a fresh asset; returns `Result` so it composes
    /// with [`mint`](Self::mint).
    pub fn with_supply(asset: AssetId, holder: AccountId, supply: Amount) -> Result<Self> {
        let mut token = Self::new(asset);
        token.mint(holder, supply)?;
        Ok(token)
    }

    /// Credits `amount` of new supply to `account`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`](crate::error::DexError::Overflow) if
    /// supply would overflow.
    pub fn mint(&mut self, account: AccountId, amount: Amount) -> Result<()> {
        self.book.mint(account, amount)
    }

    /// The asset's identifier.
    #[must_use]
    pub const fn asset_id(&self) -> AssetId {
        self.book.asset()
    }
}

impl FungibleAsset for LedgerToken {
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

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn supply_goes_to_holder() {
        let holder = AccountId::from_bytes([1u8; 32]);
        let Ok(token) = LedgerToken::with_supply(AssetId::from_bytes([2u8; 32]), holder, Amount::new(7))
        else {
            panic!("expected Ok");
        };
        assert_eq!(token.total_supply(), Amount::new(7));
        assert_eq!(token.balance_of(holder), Amount::new(7));
        assert_eq!(token.asset_id(), AssetId::from_bytes([2u8; 32]));
    }

    #[test]
    fn approve_then_pull() {
        let owner = AccountId::from_bytes([1u8; 32]);
        let spender = AccountId::from_bytes([2u8; 32]);
        let Ok(mut token) = LedgerToken::with_supply(AssetId::from_bytes([3u8; 32]), owner, Amount::new(10))
        else {
            panic!("expected Ok");
        };
        assert_eq!(token.approve(owner, spender, Amount::new(4)), Ok(()));
        assert_eq!(token.transfer_from(spender, owner, spender, Amount::new(4)), Ok(()));
        assert_eq!(token.balance_of(spender), Amount::new(4));
        assert_eq!(token.allowance(owner, spender), Amount::ZERO);
    }
}
