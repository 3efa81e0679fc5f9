//! Oracle-ratio conversion with fee and decimal rescale.
//!
//! ```text
//! raw        = floor(amount × price(from) / price(to))      oracle scale
//! fee        = floor(raw × fee_bps / 10 000)                oracle scale
//! amount_out = (raw − fee) × 10^(asset − oracle decimals)   asset scale
//! fee_out    = fee × 10^(asset − oracle decimals)           asset scale
//! ```
//!
//! Same-asset conversions are rejected by the exchange before they get here.

use tracing::debug;

use super::PriceOracle;
use crate::config::ExchangeConfig;
use crate::domain::{Amount, AssetId, FeeTier, OracleAmount, Quote};
use crate::error::{DexError, Result};
use crate::math::{mul_div, CheckedArithmetic};
use crate::traits::FromConfig;

/// Stateless converter between listed assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateEngine {
    fee: FeeTier,
    rescale: u128,
}

impl RateEngine {
    /// Fee charged on conversions.
    #[must_use]
    pub const fn fee(&self) -> FeeTier {
        self.fee
    }

    /// Factor lifting oracle-scale quantities to asset scale.
    #[must_use]
    pub const fn rescale(&self) -> u128 {
        self.rescale
    }

    /// `floor(amount × price(from) / price(to))`, at oracle scale.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidPrice`] if `to` is priced at zero.
    /// - [`DexError::AssetNotSupported`] if either asset has no feed.
    /// - [`DexError::Overflow`] if the quote exceeds `u128`.
    pub fn quote(
        &self,
        oracle: &PriceOracle<'_>,
        from: AssetId,
        to: AssetId,
        amount: Amount,
    ) -> Result<OracleAmount> {
        let price_from = oracle.price_of(from)?;
        let price_to = oracle.price_of(to)?;
        if price_to == 0 {
            return Err(DexError::InvalidPrice(to));
        }
        mul_div(amount.get(), price_from, price_to).map(OracleAmount::new)
    }

    /// Quote with the fee deducted and both parts lifted to asset scale.
    ///
    /// # Errors
    ///
    /// Everything [`quote`](Self::quote) returns, plus
    /// [`DexError::Overflow`] if rescaling overflows.
    pub fn quote_after_fee(
        &self,
        oracle: &PriceOracle<'_>,
        from: AssetId,
        to: AssetId,
        amount: Amount,
    ) -> Result<Quote> {
        let raw = self.quote(oracle, from, to, amount)?;
        let fee = self.fee.fee_on(raw)?;
        let net = raw.safe_sub(&fee)?;
        let quote = Quote {
            from_asset: from,
            to_asset: to,
            from_amount: amount,
            raw,
            fee,
            amount_out: net.rescale(self.rescale)?,
            fee_out: fee.rescale(self.rescale)?,
        };
        debug!(
            %from, %to, %amount, raw = %quote.raw, fee = %quote.fee,
            amount_out = %quote.amount_out, "quote computed"
        );
        Ok(quote)
    }
}

impl FromConfig<ExchangeConfig> for RateEngine {
    fn from_config(config: &ExchangeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            fee: config.swap_fee(),
            rescale: config.rescale_factor(),
        })
    }
}
