//! Linear, non-compounding interest.

use super::mul_div;
use crate::domain::Amount;
use crate::error::Result;

/// Seconds in a 365-day year.
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Interest earned by `principal` over `elapsed_secs` at
/// `annual_rate_percent` per year.
///
/// `floor(principal × rate × elapsed / (100 × SECONDS_PER_YEAR))`. Accrual
/// is linear in time and always on the original principal.
///
/// # Errors
///
/// Returns [`DexError::Overflow`](crate::error::DexError::Overflow) if the
/// interest itself does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use lockswap::domain::Amount;
/// use lockswap::math::compute_interest;
///
/// let ten = Amount::new(10_000_000_000_000_000_000);
/// let week = compute_interest(ten, 604_800, 10).expect("fits");
/// assert_eq!(week, Amount::new(19_178_082_191_780_821));
/// ```
pub fn compute_interest(
    principal: Amount,
    elapsed_secs: u64,
    annual_rate_percent: u32,
) -> Result<Amount> {
    let rate_time = u128::from(annual_rate_percent) * u128::from(elapsed_secs);
    let denominator = 100 * u128::from(SECONDS_PER_YEAR);
    mul_div(principal.get(), rate_time, denominator).map(Amount::new)
}
