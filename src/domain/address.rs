//! Chain-agnostic 32-byte identifiers for assets and accounts.

use core::fmt;

macro_rules! address_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name([u8; 32]);

        impl $name {
            /// Creates an identifier from raw bytes.
            #[must_use]
            pub const fn from_bytes(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }

            /// Returns the underlying 32-byte representation.
            #[must_use]
            pub const fn as_bytes(&self) -> [u8; 32] {
                self.0
            }

            /// Returns the all-zero identifier.
            #[must_use]
            pub const fn zero() -> Self {
                Self([0u8; 32])
            }

            /// Returns `true` for the all-zero identifier.
            #[must_use]
            pub fn is_zero(&self) -> bool {
                self.0 == [0u8; 32]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(self.0))
            }
        }
    };
}

address_type! {
    /// Identifier of a fungible asset listed on the exchange.
    ///
    /// The all-zero id is never a valid asset.
    ///
    /// # Examples
    ///
    /// ```
    /// use lockswap::domain::AssetId;
    ///
    /// let usdc = AssetId::from_bytes([1u8; 32]);
    /// assert!(!usdc.is_zero());
    /// assert!(AssetId::zero().is_zero());
    /// ```
    AssetId
}

address_type! {
    /// Identity of a party: a depositor, a swapper, or the exchange itself.
    AccountId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_detection() {
        assert!(AssetId::zero().is_zero());
        assert!(!AssetId::from_bytes([1u8; 32]).is_zero());
        assert_eq!(AccountId::default(), AccountId::zero());
    }

    #[test]
    fn round_trip_bytes() {
        let bytes = [7u8; 32];
        assert_eq!(AccountId::from_bytes(bytes).as_bytes(), bytes);
    }

    #[test]
    fn display_is_prefixed_hex() {
        let mut bytes = [0u8; 32];
        bytes[31] = 0xff;
        let shown = AssetId::from_bytes(bytes).to_string();
        assert!(shown.starts_with("0x00"));
        assert!(shown.ends_with("ff"));
        assert_eq!(shown.len(), 66);
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(AccountId::from_bytes([0u8; 32]) < AccountId::from_bytes([1u8; 32]));
    }
}
