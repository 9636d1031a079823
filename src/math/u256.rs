//! 256-bit unsigned integer for intermediate products.

use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer.
    ///
    /// Products of two `u128` quantities, UQ112.112 prices and the price
    /// accumulators all live in this width.
    pub struct U256(4);
}

impl U256 {
    /// Big-endian 32-byte encoding, the word layout used in digests.
    #[must_use]
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        self.to_big_endian(&mut out);
        out
    }
}

/// Returns `a * b` in 256 bits. Never overflows.
#[must_use]
pub fn mul_wide(a: u128, b: u128) -> U256 {
    U256::from(a) * U256::from(b)
}
