//! Append-only record of deposits.
//!
//! Pools live in an arena indexed by their id, so an id is simply the
//! position at which the pool was appended. A per-owner index keeps every
//! id an owner ever created, in creation order, including closed pools.
//! The ledger also tracks the principal of active pools per asset, which
//! the exchange's reserve must always cover.

use std::collections::HashMap;

use crate::domain::{AccountId, Amount, AssetId, Pool, PoolId, Timestamp};
use crate::error::{DexError, Result};
use crate::math::CheckedArithmetic;

/// Pool arena, owner index and active principal per asset.
#[derive(Debug, Clone, Default)]
pub struct PoolLedger {
    pools: Vec<Pool>,
    by_owner: HashMap<AccountId, Vec<PoolId>>,
    active_principal: HashMap<AssetId, Amount>,
}

impl PoolLedger {
    /// An empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next [`create_pool`](Self::create_pool) will assign.
    #[must_use]
    pub fn next_id(&self) -> PoolId {
        PoolId::new(self.pools.len() as u64)
    }

    /// Appends an active pool and returns its id.
    ///
    /// Only bookkeeping happens here; moving the funds is the caller's job.
    ///
    /// # Errors
    ///
    /// - [`DexError::AmountTooSmall`] if `amount` is zero.
    /// - [`DexError::Overflow`] if the unlock time or the asset's active
    ///   principal overflows.
    pub fn create_pool(
        &mut self,
        owner: AccountId,
        asset: AssetId,
        amount: Amount,
        created_at: Timestamp,
        lock_period_secs: u64,
    ) -> Result<PoolId> {
        if amount.is_zero() {
            return Err(DexError::AmountTooSmall { asset, amount });
        }
        let unlocks_at = created_at
            .checked_add_secs(lock_period_secs)
            .ok_or(DexError::Overflow("unlock time overflow"))?;
        let principal = self.active_principal(asset).safe_add(&amount)?;

        let id = self.next_id();
        self.pools
            .push(Pool::open(id, owner, asset, amount, created_at, unlocks_at));
        self.by_owner.entry(owner).or_default().push(id);
        self.active_principal.insert(asset, principal);
        Ok(id)
    }

    /// The pool with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidId`] if `id` was never assigned.
    pub fn pool(&self, id: PoolId) -> Result<&Pool> {
        usize::try_from(id.get())
            .ok()
            .and_then(|i| self.pools.get(i))
            .ok_or(DexError::InvalidId(id))
    }

    /// Every id `owner` created, oldest first.
    #[must_use]
    pub fn owner_pool_ids(&self, owner: AccountId) -> &[PoolId] {
        self.by_owner.get(&owner).map_or(&[], Vec::as_slice)
    }

    /// Marks pool `id` inactive and releases its principal.
    ///
    /// Ownership and lock expiry are the caller's to check.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidId`] if `id` was never assigned.
    /// - [`DexError::PoolInactive`] if the pool is already closed.
    pub fn close_pool(&mut self, id: PoolId) -> Result<()> {
        let pool = self.pool(id)?;
        if !pool.is_active() {
            return Err(DexError::PoolInactive(id));
        }
        let asset = pool.asset();
        let remaining = self.active_principal(asset).safe_sub(&pool.amount())?;

        let index = usize::try_from(id.get()).map_err(|_| DexError::InvalidId(id))?;
        let pool = self.pools.get_mut(index).ok_or(DexError::InvalidId(id))?;
        pool.close();
        self.active_principal.insert(asset, remaining);
        Ok(())
    }

    /// Sum of principal over active pools of `asset`.
    #[must_use]
    pub fn active_principal(&self, asset: AssetId) -> Amount {
        self.active_principal
            .get(&asset)
            .copied()
            .unwrap_or_default()
    }

    /// Number of pools ever created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Returns `true` if no pool was ever created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// All pools in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Pool> {
        self.pools.iter()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const WEEK: u64 = 604_800;

    fn owner(b: u8) -> AccountId {
        AccountId::from_bytes([b; 32])
    }

    fn asset() -> AssetId {
        AssetId::from_bytes([7u8; 32])
    }

    fn open(ledger: &mut PoolLedger, who: u8, amount: u128) -> PoolId {
        let Ok(id) = ledger.create_pool(
            owner(who),
            asset(),
            Amount::new(amount),
            Timestamp::from_secs(1_000),
            WEEK,
        ) else {
            panic!("expected Ok");
        };
        id
    }

    #[test]
    fn ids_are_sequential() {
        let mut ledger = PoolLedger::new();
        assert_eq!(open(&mut ledger, 1, 10), PoolId::new(0));
        assert_eq!(open(&mut ledger, 2, 10), PoolId::new(1));
        assert_eq!(open(&mut ledger, 1, 10), PoolId::new(2));
        assert_eq!(ledger.next_id(), PoolId::new(3));
    }

    #[test]
    fn owner_index_in_creation_order() {
        let mut ledger = PoolLedger::new();
        open(&mut ledger, 1, 10);
        open(&mut ledger, 2, 10);
        open(&mut ledger, 1, 10);
        assert_eq!(ledger.owner_pool_ids(owner(1)), &[PoolId::new(0), PoolId::new(2)]);
        assert_eq!(ledger.owner_pool_ids(owner(2)), &[PoolId::new(1)]);
        assert!(ledger.owner_pool_ids(owner(3)).is_empty());
    }

    #[test]
    fn unlock_time_is_creation_plus_lock() {
        let mut ledger = PoolLedger::new();
        let id = open(&mut ledger, 1, 10);
        let Ok(pool) = ledger.pool(id) else {
            panic!("expected Ok");
        };
        assert_eq!(pool.unlocks_at(), Timestamp::from_secs(1_000 + WEEK));
        assert!(pool.is_active());
    }

    #[test]
    fn zero_amount_rejected() {
        let mut ledger = PoolLedger::new();
        let Err(DexError::AmountTooSmall { amount, .. }) =
            ledger.create_pool(owner(1), asset(), Amount::ZERO, Timestamp::ZERO, WEEK)
        else {
            panic!("expected AmountTooSmall");
        };
        assert_eq!(amount, Amount::ZERO);
        assert!(ledger.is_empty());
    }

    #[test]
    fn unknown_id() {
        let ledger = PoolLedger::new();
        assert_eq!(
            ledger.pool(PoolId::new(0)).err(),
            Some(DexError::InvalidId(PoolId::new(0)))
        );
    }

    #[test]
    fn close_releases_principal_and_keeps_history() {
        let mut ledger = PoolLedger::new();
        let a = open(&mut ledger, 1, 10);
        open(&mut ledger, 1, 15);
        assert_eq!(ledger.active_principal(asset()), Amount::new(25));
        assert_eq!(ledger.close_pool(a), Ok(()));
        assert_eq!(ledger.active_principal(asset()), Amount::new(15));
        assert_eq!(ledger.owner_pool_ids(owner(1)).len(), 2);
        assert_eq!(ledger.close_pool(a), Err(DexError::PoolInactive(a)));
        assert_eq!(open(&mut ledger, 1, 1), PoolId::new(2));
    }
}
