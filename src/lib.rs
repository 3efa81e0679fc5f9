//! # Lockswap
//!
//! Custodial liquidity-pool and token-exchange accounting engine.
//!
//! Parties deposit fungible assets into time-locked pools that accrue
//! linear interest, and exchange one listed asset for another at the ratio
//! of two oracle prices minus a retained fee. The chain's native value is
//! handled through a wrapped-native asset, so it flows through the same
//! bookkeeping as every other asset.
//!
//! The engine never reads a clock or holds a lock: each call receives a
//! [`CallContext`](domain::CallContext) with the caller, the current time
//! and any attached native value, and each call either commits fully or
//! returns an error with nothing changed.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for config, domain values, receipts and events |
//!
//! # Quick Start
//!
//! ```rust
//! use lockswap::assets::{FixedPriceFeed, LedgerToken, WrappedNative};
//! use lockswap::domain::{AccountId, Amount, AssetId, CallContext, PoolId, Timestamp};
//! use lockswap::factory::ExchangeBuilder;
//! use lockswap::traits::FungibleAsset;
//!
//! const E18: u128 = 1_000_000_000_000_000_000;
//! let dex = AccountId::from_bytes([0xde; 32]);
//! let alice = AccountId::from_bytes([1u8; 32]);
//! let link = AssetId::from_bytes([2u8; 32]);
//! let weth = AssetId::from_bytes([3u8; 32]);
//!
//! // 1. Fund alice and let the exchange pull from her.
//! let mut token = LedgerToken::with_supply(link, alice, Amount::new(100 * E18)).expect("supply");
//! token.approve(alice, dex, Amount::MAX).expect("approve");
//!
//! // 2. List LINK and wrapped ETH with their feeds (8 decimals).
//! let mut exchange = ExchangeBuilder::new(dex)
//!     .asset(link, token, FixedPriceFeed::new(716_878_975))
//!     .wrapped_native(weth, WrappedNative::new(weth), FixedPriceFeed::new(163_262_812_740))
//!     .build()
//!     .expect("valid exchange");
//!
//! // 3. Two deposits get sequential ids.
//! let now = CallContext::new(alice, Timestamp::from_secs(0));
//! let first = exchange.provide_liquidity(now, link, Amount::new(10 * E18)).expect("deposit");
//! let second = exchange.provide_liquidity(now, link, Amount::new(10 * E18)).expect("deposit");
//! assert_eq!((first.pool_id, second.pool_id), (PoolId::new(0), PoolId::new(1)));
//! assert_eq!(exchange.owner_pool_ids(alice), &[PoolId::new(0), PoolId::new(1)]);
//! assert_eq!(exchange.reserve(link), Ok(Amount::new(20 * E18)));
//!
//! // 4. The lock holds for a week.
//! let early = CallContext::new(alice, Timestamp::from_secs(60));
//! assert!(exchange.remove_liquidity(early, first.pool_id, link.into()).is_err());
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  CallContext + entry points
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │   Exchange    │  validate, then apply legs; compensate on failure
//! └──┬────┬────┬─┘
//!    │    │    └────────────────┐
//!    ▼    ▼                     ▼
//! ┌──────┐ ┌──────────────┐ ┌──────────────┐
//! │Ledger│ │  RateEngine   │ │   Registry    │  AssetBox + PriceFeed per asset
//! └──────┘ │ + PriceOracle │ └──────────────┘
//!          └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`OracleAmount`](domain::OracleAmount), [`Pool`](domain::Pool), receipts, events |
//! | [`math`] | 256-bit [`mul_div`](math::mul_div), [`compute_interest`](math::compute_interest), checked arithmetic |
//! | [`traits`] | Collaborator seams: [`PriceFeed`](traits::PriceFeed), [`FungibleAsset`](traits::FungibleAsset), [`NativeWrapper`](traits::NativeWrapper) |
//! | [`assets`] | In-memory tokens, wrapped native value, settable feeds, [`AssetBox`](assets::AssetBox) |
//! | [`registry`] | Listed assets and the wrapped-native designation |
//! | [`ledger`] | Append-only pool arena and owner index |
//! | [`exchange`] | [`Exchange`](exchange::Exchange), [`RateEngine`](exchange::RateEngine), [`PriceOracle`](exchange::PriceOracle) |
//! | [`config`] | [`ExchangeConfig`](config::ExchangeConfig) |
//! | [`factory`] | [`ExchangeBuilder`](factory::ExchangeBuilder) |
//! | [`error`] | [`DexError`](error::DexError) |
//! | [`prelude`] | Convenience re-exports |

pub mod assets;
pub mod config;
pub mod domain;
pub mod error;
pub mod exchange;
pub mod factory;
pub mod ledger;
pub mod math;
pub mod prelude;
pub mod registry;
pub mod traits;
