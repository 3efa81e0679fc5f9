//! In-memory balances and allowances shared by the ledger-backed assets.

use std::collections::HashMap;

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::{DexError, Result};
use crate::math::CheckedArithmetic;

/// Balances, allowances and total supply of a single asset.
///
/// Every mutating method validates before it writes, so an `Err` leaves
/// the book untouched. An allowance of [`Amount::MAX`] is never consumed.
#[derive(Debug, Clone, Default)]
pub(crate) struct BalanceBook {
    asset: AssetId,
    balances: HashMap<AccountId, Amount>,
    allowances: HashMap<(AccountId, AccountId), Amount>,
    supply: Amount,
}

impl BalanceBook {
    pub(crate) fn new(asset: AssetId) -> Self {
        Self {
            asset,
            ..Self::default()
        }
    }

    pub(crate) const fn asset(&self) -> AssetId {
        self.asset
    }

    pub(crate) fn balance_of(&self, account: AccountId) -> Amount {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    pub(crate) fn allowance(&self, owner: AccountId, spender: AccountId) -> Amount {
        self.allowances
            .get(&(owner, spender))
            .copied()
            .unwrap_or_default()
    }

    pub(crate) const fn supply(&self) -> Amount {
        self.supply
    }

    /// Creates `amount` out of nothing.
    pub(crate) fn mint(&mut self, account: AccountId, amount: Amount) -> Result<()> {
        let supply = self.supply.safe_add(&amount)?;
        let balance = self.balance_of(account).safe_add(&amount)?;
        self.supply = supply;
        self.balances.insert(account, balance);
        Ok(())
    }

    /// Destroys `amount` of `account`'s balance.
    pub(crate) fn burn(&mut self, account: AccountId, amount: Amount) -> Result<()> {
        let balance = self.debited(account, amount)?;
        let supply = self.supply.safe_sub(&amount)?;
        self.supply = supply;
        self.balances.insert(account, balance);
        Ok(())
    }

    pub(crate) fn transfer(&mut self, from: AccountId, to: AccountId, amount: Amount) -> Result<()> {
        let from_balance = self.debited(from, amount)?;
        if from == to {
            return Ok(());
        }
        let to_balance = self.balance_of(to).safe_add(&amount)?;
        self.balances.insert(from, from_balance);
        self.balances.insert(to, to_balance);
        Ok(())
    }

    pub(crate) fn approve(&mut self, owner: AccountId, spender: AccountId, amount: Amount) {
        self.allowances.insert((owner, spender), amount);
    }

    pub(crate) fn transfer_from(
        &mut self,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<()> {
        let allowance = self.allowance(from, spender);
        if allowance < amount {
            return Err(DexError::InsufficientAllowance {
                owner: from,
                spender,
                asset: self.asset,
            });
        }
        self.transfer(from, to, amount)?;
        if allowance != Amount::MAX {
            self.allowances
                .insert((from, spender), allowance.safe_sub(&amount)?);
        }
        Ok(())
    }

    fn debited(&self, account: AccountId, amount: Amount) -> Result<Amount> {
        self.balance_of(account)
            .checked_sub(&amount)
            .ok_or(DexError::InsufficientBalance {
                account,
                asset: self.asset,
            })
    }
}
