//! Deposit record.

use super::{AccountId, Amount, AssetId, PoolId, Timestamp};

/// A single time-locked deposit.
///
/// `amount`, `asset`, `owner` and both timestamps are fixed at creation.
/// The only transition is `active: true → false`, performed once by a
/// successful withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pool {
    id: PoolId,
    asset: AssetId,
    amount: Amount,
    created_at: Timestamp,
    unlocks_at: Timestamp,
    owner: AccountId,
    active: bool,
}

impl Pool {
    pub(crate) const fn open(
        id: PoolId,
        owner: AccountId,
        asset: AssetId,
        amount: Amount,
        created_at: Timestamp,
        unlocks_at: Timestamp,
    ) -> Self {
        Self {
            id,
            asset,
            amount,
            created_at,
            unlocks_at,
            owner,
            active: true,
        }
    }

    /// Pool id.
    #[must_use]
    pub const fn id(&self) -> PoolId {
        self.id
    }

    /// Deposited asset.
    #[must_use]
    pub const fn asset(&self) -> AssetId {
        self.asset
    }

    /// Principal, in smallest asset units.
    pub const fn amount(&self) -> Amount {
        self.amount
    }

    /// Creation time.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Earliest time a withdrawal is accepted.
    #[must_use]
    pub const fn unlocks_at(&self) -> Timestamp {
        self.unlocks_at
    }

    /// Depositor.
    #[must_use]
    pub const fn owner(&self) -> AccountId {
        self.owner
    }

    /// `true` until the pool has been withdrawn.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns `true` once `now` has reached the unlock time.
    #[must_use]
    pub fn is_unlocked_at(&self, now: Timestamp) -> bool {
        now >= self.unlocks_at
    }

    pub(crate) fn close(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Pool {
        Pool::open(
            PoolId::new(4),
            AccountId::from_bytes([1u8; 32]),
            AssetId::from_bytes([2u8; 32]),
            Amount::new(500),
            Timestamp::from_secs(100),
            Timestamp::from_secs(700),
        )
    }

    #[test]
    fn opens_active() {
        let pool = sample();
        assert!(pool.is_active());
        assert_eq!(pool.id(), PoolId::new(4));
        assert_eq!(pool.amount(), Amount::new(500));
    }

    #[test]
    fn unlock_boundary_is_inclusive() {
        let pool = sample();
        assert!(!pool.is_unlocked_at(Timestamp::from_secs(699)));
        assert!(pool.is_unlocked_at(Timestamp::from_secs(700)));
    }

    #[test]
    fn close_is_one_way() {
        let mut pool = sample();
        pool.close();
        assert!(!pool.is_active());
        assert_eq!(pool.amount(), Amount::new(500));
    }
}
