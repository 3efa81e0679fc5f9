//! Property-based tests for the exchange's bookkeeping.
//!
//! 1. **Id monotonicity**: deposits return `0, 1, 2, …` in call order.
//! 2. **Owner index**: each owner's ids are exactly theirs, in order.
//! 3. **Reserve accounting**: a committed operation moves each reserve by
//!    exactly what its receipt reports; a rejected one moves nothing.
//! 4. **Lock enforcement**: withdrawal fails before unlock, succeeds after.
//! 5. **Interest determinism**: one week at 10% matches the closed form.
//! 6. **Fee scaling law**: `(raw − floor(raw·3/1000)) · 10^10`.
//! 7. **Wrap round-trip**: unwrap(wrap(v)) = v with native balance restored.

use proptest::prelude::*;

use super::Exchange;
use crate::assets::{AssetBox, FixedPriceFeed, LedgerToken, WrappedNative};
use crate::config::ExchangeConfig;
use crate::domain::{
    AccountId, Amount, AssetId, CallContext, PoolId, Settlement, Timestamp,
};
use crate::error::DexError;
use crate::math::compute_interest;
use crate::traits::{FungibleAsset, NativeWrapper};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const E18: u128 = 1_000_000_000_000_000_000;
const WEEK: u64 = 604_800;

fn dex() -> AccountId {
    AccountId::from_bytes([0xde; 32])
}

fn user(i: u8) -> AccountId {
    AccountId::from_bytes([0x10 + i; 32])
}

fn asset(i: u8) -> AssetId {
    AssetId::from_bytes([1 + i; 32])
}

fn weth() -> AssetId {
    AssetId::from_bytes([0xee; 32])
}

/// Two priced tokens funded for three users, plus a wrapped-native asset.
fn make_exchange(price_a: u128, price_b: u128) -> Exchange {
    let Ok(mut ex) = Exchange::new(dex(), ExchangeConfig::default()) else {
        panic!("valid config");
    };
    for (i, price) in [(0u8, price_a), (1, price_b)] {
        let mut token = LedgerToken::new(asset(i));
        for u in 0..3 {
            let Ok(()) = token.mint(user(u), Amount::new(1_000_000 * E18)) else {
                panic!("mint");
            };
            let Ok(()) = token.approve(user(u), dex(), Amount::MAX) else {
                panic!("approve");
            };
        }
        let Ok(()) = ex.register_asset(
            asset(i),
            AssetBox::fungible(token),
            Box::new(FixedPriceFeed::new(price)),
        ) else {
            panic!("register");
        };
    }
    let Ok(()) = ex.register_asset(
        weth(),
        AssetBox::wrapped_native(WrappedNative::new(weth())),
        Box::new(FixedPriceFeed::new(163_262_812_740)),
    ) else {
        panic!("register weth");
    };
    ex
}

fn ctx(u: u8, secs: u64) -> CallContext {
    CallContext::new(user(u), Timestamp::from_secs(secs))
}

fn amount_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000 * E18
}

fn price_strategy() -> impl Strategy<Value = u128> {
    1_000_000u128..=1_000_000_000_000
}

/// (op, user, asset, amount, seconds advanced)
fn op_strategy() -> impl Strategy<Value = (u8, u8, u8, u128, u64)> {
    (0u8..3, 0u8..3, 0u8..2, 1u128..=10_000_000_000u128, 0u64..=2 * WEEK)
}

// ---------------------------------------------------------------------------
// Properties 1 and 2: ids and owner index
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_ids_monotonic_and_indexed(
        deposits in prop::collection::vec((0u8..3, 0u8..2, amount_strategy()), 1..20),
    ) {
        let mut ex = make_exchange(716_878_975, 495_000_000);
        let mut expected: [Vec<PoolId>; 3] = Default::default();
        for (n, &(u, a, amt)) in deposits.iter().enumerate() {
            let Ok(r) = ex.provide_liquidity(ctx(u, 0), asset(a), Amount::new(amt)) else {
                panic!("deposit should succeed");
            };
            prop_assert_eq!(r.pool_id, PoolId::new(n as u64));
            expected[usize::from(u)].push(r.pool_id);
        }
        for u in 0..3u8 {
            prop_assert_eq!(ex.owner_pool_ids(user(u)), expected[usize::from(u)].as_slice());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: reserve accounting
// ---------------------------------------------------------------------------

fn reserves(ex: &Exchange) -> [u128; 2] {
    [0u8, 1].map(|i| ex.reserve(asset(i)).map(|r| r.get()).unwrap_or_default())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_reserve_moves_match_receipts(
        ops in prop::collection::vec(op_strategy(), 1..30),
    ) {
        let mut ex = make_exchange(716_878_975, 495_000_000);
        let mut now = 0u64;
        for (op, u, a, amt, dt) in ops {
            now += dt;
            let (a, b) = (usize::from(a), usize::from(1 - a));
            let before = reserves(&ex);
            let mut expected = before;
            match op {
                0 => {
                    if ex.provide_liquidity(ctx(u, now), asset(a as u8), Amount::new(amt)).is_ok() {
                        expected[a] += amt;
                    }
                }
                1 => {
                    let swapped = ex.swap(ctx(u, now), asset(a as u8), asset(b as u8), Amount::new(amt));
                    if let Ok(r) = swapped {
                        expected[a] += amt;
                        expected[b] -= r.token_received.get();
                    }
                }
                _ => {
                    let ids = ex.owner_pool_ids(user(u)).to_vec();
                    if let Some(&id) = ids.first() {
                        let target = Settlement::Token(asset(a as u8));
                        if let Ok(r) = ex.remove_liquidity(ctx(u, now), id, target) {
                            expected[a] -= r.token_to_receive_with_interest.get();
                        }
                    }
                }
            }
            prop_assert_eq!(reserves(&ex), expected);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: lock enforcement
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_lock_enforced(
        created in 0u64..1_000_000,
        amt in amount_strategy(),
        offset in 0u64..=2 * WEEK,
    ) {
        let mut ex = make_exchange(716_878_975, 495_000_000);
        // Extra reserve so interest is always payable.
        let Ok(cap) = ex.asset_mut(asset(0)) else {
            panic!("listed");
        };
        let Ok(()) = cap.transfer(user(2), dex(), Amount::new(10_000 * E18)) else {
            panic!("seed");
        };
        let Ok(r) = ex.provide_liquidity(ctx(0, created), asset(0), Amount::new(amt)) else {
            panic!("deposit should succeed");
        };
        let when = created + offset;
        let outcome = ex.remove_liquidity(ctx(0, when), r.pool_id, Settlement::Token(asset(0)));
        if offset < WEEK {
            prop_assert_eq!(outcome, Err(DexError::PoolLocked(r.unlocks_at)));
        } else {
            prop_assert!(outcome.is_ok(), "withdraw at +{} failed: {:?}", offset, outcome);
        }
    }
}

// ---------------------------------------------------------------------------
// Properties 5 and 6: interest and fee arithmetic
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_interest_closed_form(p in 0u128..=1_000_000_000_000_000_000_000_000_000_000u128) {
        let expected = p * 10 * 604_800 / (100 * 31_536_000);
        prop_assert_eq!(compute_interest(Amount::new(p), WEEK, 10), Ok(Amount::new(expected)));
    }

    #[test]
    fn prop_fee_scaling_law(
        price_a in price_strategy(),
        price_b in price_strategy(),
        amt in 0u128..=1_000_000_000_000_000u128,
    ) {
        let ex = make_exchange(price_a, price_b);
        let Ok(raw) = ex.quote(asset(0), asset(1), Amount::new(amt)) else {
            panic!("quote");
        };
        let Ok(q) = ex.quote_after_fee(asset(0), asset(1), Amount::new(amt)) else {
            panic!("quote after fee");
        };
        let r = raw.get();
        prop_assert_eq!(q.amount_out.get(), (r - r * 3 / 1000) * 10_000_000_000);
        prop_assert_eq!(q.fee_out.get(), (r * 3 / 1000) * 10_000_000_000);
    }
}

// ---------------------------------------------------------------------------
// Property 7: wrap round-trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_wrap_round_trip(prior in 0u128..=E18, v in 0u128..=1_000_000 * E18) {
        let mut w = WrappedNative::new(weth());
        let Ok(_) = w.wrap(user(1), Amount::new(prior)) else {
            panic!("wrap");
        };
        let before = w.native_balance();
        let Ok(wrapped) = w.wrap(user(0), Amount::new(v)) else {
            panic!("wrap");
        };
        prop_assert_eq!(w.unwrap(user(0), wrapped), Ok(Amount::new(v)));
        prop_assert_eq!(w.native_balance(), before);
        prop_assert_eq!(w.native_balance(), w.total_supply());
    }
}
