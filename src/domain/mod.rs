//! Value types shared by every layer of the exchange.
//!
//! Identifiers, the two quantity domains ([`Amount`] at asset scale and
//! [`OracleAmount`] at oracle scale), time, pool records, quotes and the
//! receipts returned by committed operations. Constructors validate their
//! inputs so invalid values cannot be built.

mod address;
mod amount;
mod basis_points;
mod call_context;
mod decimals;
mod fee_tier;
mod oracle_amount;
mod oracle_price;
mod pool;
mod pool_id;
mod quote;
mod receipt;
mod settlement;
mod timestamp;

pub use address::{AccountId, AssetId};
pub use amount::Amount;
pub use basis_points::BasisPoints;
pub use call_context::CallContext;
pub use decimals::Decimals;
pub use fee_tier::FeeTier;
pub use oracle_amount::OracleAmount;
pub use oracle_price::OraclePrice;
pub use pool::Pool;
pub use pool_id::PoolId;
pub use quote::Quote;
pub use receipt::{DepositReceipt, ExchangeEvent, SwapReceipt, WithdrawalReceipt};
pub use settlement::Settlement;
pub use timestamp::Timestamp;
