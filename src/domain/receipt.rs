//! Outcome records returned by committed operations.

use core::fmt;

use super::{AccountId, Amount, AssetId, PoolId, Settlement, Timestamp};

/// Outcome of a deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepositReceipt {
    /// Newly assigned pool id.
    pub pool_id: PoolId,
    /// Depositor.
    pub owner: AccountId,
    /// Asset now held in the pool.
    pub asset: AssetId,
    /// Principal.
    pub amount: Amount,
    /// Creation time.
    pub created_at: Timestamp,
    /// Earliest withdrawal time.
    pub unlocks_at: Timestamp,
}

/// Outcome of a withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WithdrawalReceipt {
    /// Closed pool.
    pub pool_id: PoolId,
    /// Depositor who withdrew.
    pub owner: AccountId,
    /// Where the payout went.
    pub settlement: Settlement,
    /// Principal plus interest, in the pool's asset.
    pub token_to_receive: Amount,
    /// Amount actually paid out, in the settlement asset.
    pub token_to_receive_with_interest: Amount,
    /// Interest accrued on the principal.
    pub total_interest_earned: Amount,
    /// Native value released, zero unless settled natively.
    pub native_out: Amount,
}

/// Outcome of a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapReceipt {
    /// Swapping party.
    pub user: AccountId,
    /// What was paid in.
    pub sold: Settlement,
    /// What was paid out.
    pub bought: Settlement,
    /// Amount paid in.
    pub token_swapped: Amount,
    /// Amount paid out.
    pub token_received: Amount,
    /// Fee retained, in output-asset units.
    pub transaction_fee: Amount,
}

/// Journal entry recorded for every committed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExchangeEvent {
    /// A pool was opened.
    Deposited(DepositReceipt),
    /// A pool was closed and paid out.
    Withdrawn(WithdrawalReceipt),
    /// A swap settled.
    Swapped(SwapReceipt),
}

impl fmt::Display for ExchangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposited(r) => write!(
                f,
                "Deposited(pool={}, owner={}, amount={})",
                r.pool_id, r.owner, r.amount
            ),
            Self::Withdrawn(r) => write!(
                f,
                "Withdrawn(pool={}, payout={}, interest={})",
                r.pool_id, r.token_to_receive_with_interest, r.total_interest_earned
            ),
            Self::Swapped(r) => write!(
                f,
                "Swapped(user={}, in={}, out={}, fee={})",
                r.user, r.token_swapped, r.token_received, r.transaction_fee
            ),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn display_names_variant() {
        let receipt = DepositReceipt {
            pool_id: PoolId::new(2),
            owner: AccountId::zero(),
            asset: AssetId::from_bytes([1u8; 32]),
            amount: Amount::new(9),
            created_at: Timestamp::ZERO,
            unlocks_at: Timestamp::from_secs(604_800),
        };
        let shown = ExchangeEvent::Deposited(receipt).to_string();
        assert!(shown.starts_with("Deposited(pool=2"));
        assert!(shown.ends_with("amount=9)"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn event_serde_round_trip() {
        let event = ExchangeEvent::Swapped(SwapReceipt {
            user: AccountId::from_bytes([5u8; 32]),
            sold: Settlement::Native,
            bought: Settlement::Token(AssetId::from_bytes([1u8; 32])),
            token_swapped: Amount::new(1_000),
            token_received: Amount::new(14_440_000_000_000),
            transaction_fee: Amount::new(40_000_000_000),
        });
        let Ok(json) = serde_json::to_string(&event) else {
            panic!("serialize");
        };
        let Ok(back) = serde_json::from_str::<ExchangeEvent>(&json) else {
            panic!("deserialize");
        };
        assert_eq!(back, event);
    }
}
