//! Per-call environment supplied by the execution runtime.

use super::{AccountId, Amount, Timestamp};

/// Who is calling, when, and with how much attached native value.
///
/// # Examples
///
/// ```
/// use lockswap::domain::{AccountId, Amount, CallContext, Timestamp};
///
/// let alice = AccountId::from_bytes([1u8; 32]);
/// let ctx = CallContext::new(alice, Timestamp::from_secs(0))
///     .with_value(Amount::new(5));
/// assert_eq!(ctx.value, Amount::new(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallContext {
    /// Calling party.
    pub caller: AccountId,
    /// Current time.
    pub now: Timestamp,
    /// Native value attached to the call.
    pub value: Amount,
}

impl CallContext {
    /// A call with no attached value.
    #[must_use]
    pub const fn new(caller: AccountId, now: Timestamp) -> Self {
        Self {
            caller,
            now,
            value: Amount::ZERO,
        }
    }

    /// Attaches native value.
    #[must_use]
    pub const fn with_value(mut self, value: Amount) -> Self {
        self.value = value;
        self
    }
}
