//! Chain-agnostic 32-byte identity for accounts, assets, pairs and factories.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::math::keccak256;

/// A 32-byte identity.
///
/// Accounts, asset ledgers, pair ledgers, factories and routers all share
/// this one address space.  All byte sequences are valid, so construction is
/// infallible.  Ordering is lexicographic on the bytes, which is the total
/// order used to canonicalize asset pairs.
///
/// # Examples
///
/// ```
/// use pairdex::domain::Address;
///
/// let a = Address::from_bytes([1u8; 32]);
/// let b = Address::from_bytes([2u8; 32]);
/// assert!(a < b);
/// assert!(Address::ZERO.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Address([u8; 32]);

impl Address {
    /// The all-zero address.  Shares minted here are permanently locked.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derives a deterministic address from a human-readable label.
    ///
    /// Handy for fixtures and for naming well-known accounts.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self(keccak256(label.as_bytes()))
    }

    /// Derives the account address controlled by an ed25519 public key.
    ///
    /// This is the identity a permit signature must resolve to.
    #[must_use]
    pub fn from_public_key(public_key: &[u8; 32]) -> Self {
        Self(keccak256(public_key))
    }

    /// Returns `true` for the all-zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}
