//! Exchange-wide parameters.

use crate::domain::{Decimals, FeeTier};
use crate::error::{DexError, Result};

/// Seconds a deposit stays locked (one week).
pub const LOCK_PERIOD_SECS: u64 = 604_800;

/// Yearly interest paid on principal, in whole percent.
pub const ANNUAL_RATE_PERCENT: u32 = 10;

/// Upper bound on the annual rate (100 × 100%).
const MAX_ANNUAL_RATE_PERCENT: u32 = 10_000;

/// Immutable parameters of an exchange instance.
///
/// # Derived Values
///
/// - Decimal rescale: `10^(asset_decimals − oracle_decimals)`, which is
///   `10^10` with the defaults.
///
/// # Validation
///
/// - `lock_period_secs > 0`.
/// - `annual_rate_percent ≤ 10 000`.
/// - The swap fee is at most 100%.
/// - `oracle_decimals ≤ asset_decimals`.
///
/// # Examples
///
/// ```
/// use lockswap::config::ExchangeConfig;
///
/// let config = ExchangeConfig::default();
/// assert_eq!(config.lock_period_secs(), 604_800);
/// assert_eq!(config.rescale_factor(), 10_000_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExchangeConfig {
    lock_period_secs: u64,
    annual_rate_percent: u32,
    swap_fee: FeeTier,
    oracle_decimals: Decimals,
    asset_decimals: Decimals,
}

impl ExchangeConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidConfiguration`] if the lock period, rate or fee
    ///   is out of range.
    /// - [`DexError::InvalidPrecision`] if the oracle is finer than the
    ///   assets.
    pub fn new(
        lock_period_secs: u64,
        annual_rate_percent: u32,
        swap_fee: FeeTier,
        oracle_decimals: Decimals,
        asset_decimals: Decimals,
    ) -> Result<Self> {
        let config = Self {
            lock_period_secs,
            annual_rate_percent,
            swap_fee,
            oracle_decimals,
            asset_decimals,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn validate(&self) -> Result<()> {
        if self.lock_period_secs == 0 {
            return Err(DexError::InvalidConfiguration("lock period must be positive"));
        }
        if self.annual_rate_percent > MAX_ANNUAL_RATE_PERCENT {
            return Err(DexError::InvalidConfiguration(
                "annual rate must not exceed 10000 percent",
            ));
        }
        if !self.swap_fee.basis_points().is_valid_percent() {
            return Err(DexError::InvalidConfiguration("swap fee must not exceed 100%"));
        }
        self.oracle_decimals.rescale_factor_to(self.asset_decimals)?;
        Ok(())
    }

    /// Returns a copy with a different lock period.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn with_lock_period_secs(mut self, secs: u64) -> Result<Self> {
        self.lock_period_secs = secs;
        self.validate()?;
        Ok(self)
    }

    /// Returns a copy with a different annual rate.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn with_annual_rate_percent(mut self, percent: u32) -> Result<Self> {
        self.annual_rate_percent = percent;
        self.validate()?;
        Ok(self)
    }

    /// Returns a copy with a different swap fee.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn with_swap_fee(mut self, fee: FeeTier) -> Result<Self> {
        self.swap_fee = fee;
        self.validate()?;
        Ok(self)
    }

    /// Returns a copy with different oracle and asset precisions.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn with_decimals(mut self, oracle: Decimals, asset: Decimals) -> Result<Self> {
        self.oracle_decimals = oracle;
        self.asset_decimals = asset;
        self.validate()?;
        Ok(self)
    }

    /// Seconds a deposit stays locked.
    #[must_use]
    pub const fn lock_period_secs(&self) -> u64 {
        self.lock_period_secs
    }

    /// Yearly interest in whole percent.
    #[must_use]
    pub const fn annual_rate_percent(&self) -> u32 {
        self.annual_rate_percent
    }

    /// Fee charged on every cross-asset conversion.
    #[must_use]
    pub const fn swap_fee(&self) -> FeeTier {
        self.swap_fee
    }

    /// Precision all prices are normalised to.
    #[must_use]
    pub const fn oracle_decimals(&self) -> Decimals {
        self.oracle_decimals
    }

    /// Precision of every listed asset's amounts.
    #[must_use]
    pub const fn asset_decimals(&self) -> Decimals {
        self.asset_decimals
    }

    /// `10^(asset_decimals − oracle_decimals)`.
    #[must_use]
    pub const fn rescale_factor(&self) -> u128 {
        // validate() guarantees oracle_decimals <= asset_decimals.
        10u128.pow((self.asset_decimals.get() - self.oracle_decimals.get()) as u32)
    }
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            lock_period_secs: LOCK_PERIOD_SECS,
            annual_rate_percent: ANNUAL_RATE_PERCENT,
            swap_fee: FeeTier::STANDARD,
            oracle_decimals: Decimals::ORACLE,
            asset_decimals: Decimals::MAX,
        }
    }
}
