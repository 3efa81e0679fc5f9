//! Integer arithmetic for the exchange.
//!
//! All quantities are unsigned integers. Products that may exceed `u128`
//! are formed in 256 bits by [`mul_div`]; everything else uses the
//! checked helpers behind [`CheckedArithmetic`]. Every division floors.

mod checked;
mod interest;
mod mul_div;

pub use checked::CheckedArithmetic;
pub use interest::{compute_interest, SECONDS_PER_YEAR};
pub use mul_div::mul_div;
