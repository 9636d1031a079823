//! UQ112.112 fixed-point price encoding.
//!
//! A price ratio `numerator / denominator` between two 112-bit reserves is
//! represented as `(numerator << 112) / denominator`, which needs at most 224
//! bits.  Accumulators multiply that by elapsed seconds and add with 256-bit
//! wrap-around, so observers compute averages from differences.

use super::U256;

/// Number of fractional bits.
pub const RESOLUTION: usize = 112;

/// Largest value a reserve may hold: `2^112 - 1`.
pub const MAX_RESERVE: u128 = (1u128 << 112) - 1;

/// Encodes `numerator / denominator` as UQ112.112.
///
/// Returns [`None`] when `denominator` is zero.
#[must_use]
pub fn encode_ratio(numerator: u128, denominator: u128) -> Option<U256> {
    if denominator == 0 {
        return None;
    }
    Some((U256::from(numerator) << RESOLUTION) / U256::from(denominator))
}

/// `accumulator + price * elapsed`, wrapping at 2^256.
#[must_use]
pub fn accumulate(accumulator: U256, price: U256, elapsed: u64) -> U256 {
    let (weighted, _) = price.overflowing_mul(U256::from(elapsed));
    let (sum, _) = accumulator.overflowing_add(weighted);
    sum
}
