//! Basis-point representation for percentages.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::DexError;

/// Number of basis points in 100%.
pub const BPS_SCALE: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Every `u32` is representable, but only `0..=10_000` is a meaningful
/// percentage; see [`is_valid_percent`](Self::is_valid_percent).
///
/// # Examples
///
/// ```
/// use pairdex::domain::{Amount, BasisPoints, Rounding};
///
/// let cut = BasisPoints::new(100);
/// let Ok(fee) = cut.apply(Amount::new(1_000), Rounding::Down) else { unreachable!() };
/// assert_eq!(fee, Amount::new(10));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(BPS_SCALE);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value lies in `0..=10_000`.
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= BPS_SCALE
    }

    /// Returns `10_000 - self`, the share of an amount that survives the cut.
    ///
    /// Saturates at zero for values above 100%.
    #[must_use]
    pub const fn complement(&self) -> u32 {
        BPS_SCALE.saturating_sub(self.0)
    }

    /// Computes `amount * self / 10_000` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] if the intermediate product overflows.
    pub const fn apply(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        let product = match amount.get().checked_mul(self.0 as u128) {
            Some(v) => v,
            None => return Err(DexError::Overflow("basis points apply")),
        };
        match crate::math::div_round(product, BPS_SCALE as u128, rounding) {
            Some(v) => Ok(Amount::new(v)),
            None => Err(DexError::DivisionByZero),
        }
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
