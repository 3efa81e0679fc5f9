//! Full-width `a × b / d` for `u128` operands.

use primitive_types::U256;

use crate::error::{DexError, Result};

/// Computes `floor(a × b / denominator)` with a 256-bit intermediate product.
///
/// Every price ratio, fee and interest figure in the exchange goes through
/// this function, so principals well beyond `10^30` never overflow before
/// the division.
///
/// # Errors
///
/// - [`DexError::DivisionByZero`] if `denominator` is zero.
/// - [`DexError::Overflow`] if the quotient does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use lockswap::math::mul_div;
///
/// assert_eq!(mul_div(10, 10, 3), Ok(33));
/// assert_eq!(mul_div(u128::MAX, 2, 2), Ok(u128::MAX));
/// ```
pub fn mul_div(a: u128, b: u128, denominator: u128) -> Result<u128> {
    if denominator == 0 {
        return Err(DexError::DivisionByZero);
    }
    // Two u128 factors always fit in 256 bits.
    let product = U256::from(a)
        .checked_mul(U256::from(b))
        .ok_or(DexError::Overflow("mul_div product overflow"))?;
    let quotient = product / U256::from(denominator);
    if quotient.bits() > 128 {
        return Err(DexError::Overflow("mul_div result exceeds u128"));
    }
    Ok(quotient.low_u128())
}
