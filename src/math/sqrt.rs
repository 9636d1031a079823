//! Integer square root over 256-bit values.

use super::U256;

/// Floor of the square root of `n` (Babylonian method).
///
/// Used for the geometric mean of the first deposit and for the protocol
/// fee's `sqrt(k)` comparison.
#[must_use]
pub fn isqrt(n: U256) -> U256 {
    if n.is_zero() {
        return U256::zero();
    }
    if n < U256::from(4u8) {
        return U256::one();
    }
    let mut x = n;
    let mut y = (n >> 1usize) + U256::one();
    while y < x {
        x = y;
        y = (x + n / x) >> 1usize;
    }
    x
}

/// Square root of `a * b` as a `u128`.
///
/// The result always fits since `sqrt(u128::MAX²) < 2^128`.
#[must_use]
pub fn sqrt_product(a: u128, b: u128) -> u128 {
    isqrt(super::mul_wide(a, b)).low_u128()
}
