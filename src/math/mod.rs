//! Arithmetic utilities for pair and router calculations.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`U256`] | 256-bit intermediates for products of two amounts |
//! | [`isqrt`], [`sqrt_product`] | geometric mean for first mint and protocol fee |
//! | [`encode_ratio`], [`accumulate`] | UQ112.112 price accumulators |
//! | [`CheckedArithmetic`] | `Result`-returning arithmetic on domain newtypes |
//! | [`div_round`] | `u128` division with explicit rounding |
//! | [`keccak256`] | identity derivation and permit digests |

mod checked;
mod hash;
mod rounding;
mod sqrt;
mod u256;
mod uq112;

pub use checked::CheckedArithmetic;
pub use hash::{keccak256, keccak256_concat};
pub use rounding::div_round;
pub use sqrt::{isqrt, sqrt_product};
pub use u256::{mul_wide, U256};
pub use uq112::{accumulate, encode_ratio, MAX_RESERVE, RESOLUTION};
