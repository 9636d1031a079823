//! Integer division with an explicit rounding direction.
//!
//! Pair and router formulas floor every quotient, which always favours the
//! pool.  Ceiling division is available for amounts a caller must pay in.
//!
//! ```
//! use pairdex::domain::Rounding;
//! use pairdex::math::div_round;
//!
//! assert_eq!(div_round(10, 3, Rounding::Down), Some(3));
//! assert_eq!(div_round(10, 3, Rounding::Up), Some(4));
//! assert_eq!(div_round(10, 0, Rounding::Down), None);
//! ```

use crate::domain::Rounding;

/// Divides `numerator` by `denominator`, rounding as requested.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let quotient = numerator / denominator;
    Some(rounding.settle(quotient, numerator % denominator != 0))
}
