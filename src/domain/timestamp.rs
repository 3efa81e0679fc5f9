//! Seconds-resolution point in time supplied by the execution environment.

use core::fmt;

use crate::error::{DexError, Result};

/// A point in time, in whole seconds since an arbitrary epoch.
///
/// The engine never reads a clock; every operation receives the current
/// timestamp from its caller, so lock expiry and interest accrual are
/// reproducible from inputs alone.
///
/// # Examples
///
/// ```
/// use lockswap::domain::Timestamp;
///
/// let created = Timestamp::from_secs(1_000);
/// let unlocks = created.checked_add_secs(604_800).expect("fits");
/// assert_eq!(unlocks.elapsed_since(created), Ok(604_800));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch.
    pub const ZERO: Self = Self(0);

    /// Creates a timestamp from whole seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns the whole seconds since the epoch.
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    /// Returns `self + secs`, or `None` on overflow.
    #[must_use]
    pub const fn checked_add_secs(&self, secs: u64) -> Option<Self> {
        match self.0.checked_add(secs) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Seconds elapsed from `earlier` to `self`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Underflow`] if `earlier` is after `self`.
    pub const fn elapsed_since(&self, earlier: Self) -> Result<u64> {
        match self.0.checked_sub(earlier.0) {
            Some(v) => Ok(v),
            None => Err(DexError::Underflow("timestamp precedes reference")),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Timestamp {
    fn from(secs: u64) -> Self {
        Self(secs)
    }
}
