//! Construction from a validated configuration.
//!
//! Components that are fully described by configuration implement
//! [`FromConfig`] so the builder can construct them uniformly. There is no
//! blanket implementation; every pairing is explicit.

use crate::error::Result;

/// Builds `Self` from configuration `C`.
///
/// # Implementors
///
/// - `impl FromConfig<ExchangeConfig> for RateEngine`
pub trait FromConfig<C> {
    /// Validates `config` and constructs the component.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidConfiguration`](crate::error::DexError::InvalidConfiguration)
    /// or [`DexError::InvalidPrecision`](crate::error::DexError::InvalidPrecision)
    /// if `config` violates its invariants.
    fn from_config(config: &C) -> Result<Self>
    where
        Self: Sized;
}
