//! Result of a fee-adjusted conversion.

use super::{Amount, AssetId, OracleAmount};

/// A cross-asset conversion, computed but not yet executed.
///
/// `raw` and `fee` live in the 8-decimal oracle domain; `amount_out` and
/// `fee_out` are the same quantities lifted to the output asset's
/// smallest unit. `amount_out` is what the caller receives; `fee_out`
/// stays in the exchange's reserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quote {
    /// Asset sold.
    pub from_asset: AssetId,
    /// Asset bought.
    pub to_asset: AssetId,
    /// Amount sold, in the input asset's smallest unit.
    pub from_amount: Amount,
    /// Price-ratio conversion before the fee.
    pub raw: OracleAmount,
    /// Fee skimmed from `raw`.
    pub fee: OracleAmount,
    /// `(raw - fee)` in the output asset's smallest unit.
    pub amount_out: Amount,
    /// `fee` in the output asset's smallest unit.
    pub fee_out: Amount,
}
