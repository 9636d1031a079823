//! Canonical unordered pair of distinct assets.

use serde::{Deserialize, Serialize};

use super::Address;
use crate::error::DexError;

/// An unordered pair of distinct asset addresses, stored in canonical order.
///
/// `asset0 < asset1` always holds, so `(A, B)` and `(B, A)` build the same
/// value and resolve to the same pair ledger.
///
/// # Examples
///
/// ```
/// use pairdex::domain::{Address, AssetPair};
///
/// let a = Address::from_bytes([1u8; 32]);
/// let b = Address::from_bytes([2u8; 32]);
/// let Ok(pair) = AssetPair::new(b, a) else { unreachable!() };
/// assert_eq!(pair.asset0(), a);
/// assert_eq!(pair.asset1(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetPair {
    asset0: Address,
    asset1: Address,
}

impl AssetPair {
    /// Sorts two asset addresses into a canonical pair.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidPair`] if both addresses are equal.
    /// - [`DexError::ZeroAddress`] if the lower address is the zero address.
    pub fn new(a: Address, b: Address) -> Result<Self, DexError> {
        if a == b {
            return Err(DexError::InvalidPair);
        }
        let (asset0, asset1) = if a < b { (a, b) } else { (b, a) };
        if asset0.is_zero() {
            return Err(DexError::ZeroAddress);
        }
        Ok(Self { asset0, asset1 })
    }

    /// Lower asset address.
    #[must_use]
    pub const fn asset0(&self) -> Address {
        self.asset0
    }

    /// Higher asset address.
    #[must_use]
    pub const fn asset1(&self) -> Address {
        self.asset1
    }

    /// Returns `true` if `asset` is one side of the pair.
    #[must_use]
    pub fn contains(&self, asset: &Address) -> bool {
        self.asset0 == *asset || self.asset1 == *asset
    }

    /// Returns `true` if `asset` is the lower side of the pair.
    #[must_use]
    pub fn is_first(&self, asset: &Address) -> bool {
        self.asset0 == *asset
    }

    /// Returns the counterpart of `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidPath`] if `asset` is not in the pair.
    pub fn other(&self, asset: &Address) -> Result<Address, DexError> {
        if *asset == self.asset0 {
            Ok(self.asset1)
        } else if *asset == self.asset1 {
            Ok(self.asset0)
        } else {
            Err(DexError::InvalidPath)
        }
    }

    /// Concatenated canonical bytes `asset0 ‖ asset1`, the salt preimage.
    #[must_use]
    pub fn packed(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(self.asset0.as_bytes());
        out[32..].copy_from_slice(self.asset1.as_bytes());
        out
    }
}
