//! How a payout leaves, or a payment enters, the exchange.

use super::AssetId;

/// Settlement leg of a withdrawal or swap.
///
/// `Native` routes through the wrapped-native asset: incoming native value
/// is wrapped, outgoing wrapped balance is unwrapped and released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Settlement {
    /// A listed fungible asset.
    Token(AssetId),
    /// The chain's native value.
    Native,
}

impl Settlement {
    /// Returns the asset id for [`Settlement::Token`].
    #[must_use]
    pub const fn token(&self) -> Option<AssetId> {
        match self {
            Self::Token(asset) => Some(*asset),
            Self::Native => None,
        }
    }

    /// Returns `true` for [`Settlement::Native`].
    #[must_use]
    pub const fn is_native(&self) -> bool {
        matches!(self, Self::Native)
    }
}

impl From<AssetId> for Settlement {
    fn from(asset: AssetId) -> Self {
        Self::Token(asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let asset = AssetId::from_bytes([3u8; 32]);
        assert_eq!(Settlement::from(asset).token(), Some(asset));
        assert_eq!(Settlement::Native.token(), None);
        assert!(Settlement::Native.is_native());
        assert!(!Settlement::Token(asset).is_native());
    }
}
