//! Raw asset amount with checked arithmetic.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DexError;
use crate::math::U256;

/// A raw asset amount in the smallest unit.
///
/// `Amount` never interprets decimals.  Arithmetic methods are checked: they
/// return `None` on overflow or underflow instead of panicking.  Products of two amounts can exceed `u128`, so the pair and
/// router math widens to [`U256`] via [`Amount::widen`] and narrows back with
/// [`Amount::try_from_wide`].
///
/// # Examples
///
/// ```
/// use pairdex::domain::Amount;
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(a.checked_sub(&b), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Raw value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// `true` for zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// `self + other`, or `None` past `u128::MAX`.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// `self - other`, or `None` below zero.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Returns the smaller of two amounts.
    pub fn min(self, other: Self) -> Self {
        if self <= other {
            self
        } else {
            other
        }
    }

    /// Widens to 256 bits for intermediate products.
    #[must_use]
    pub fn widen(&self) -> U256 {
        U256::from(self.0)
    }

    /// Narrows a 256-bit intermediate back to an `Amount`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] if `value` does not fit in `u128`.
    pub fn try_from_wide(value: U256, context: &'static str) -> Result<Self, DexError> {
        if value.bits() > 128 {
            return Err(DexError::Overflow(context));
        }
        Ok(Self(value.low_u128()))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn constants_and_default() {
        assert_eq!(Amount::ZERO.get(), 0);
        assert_eq!(Amount::MAX.get(), u128::MAX);
        assert_eq!(Amount::default(), Amount::ZERO);
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::new(1).is_zero());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Amount::new(1_000_000)), "1000000");
    }

    #[test]
    fn add_and_sub_edges() {
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
        assert_eq!(Amount::new(1).checked_sub(&Amount::new(2)), None);
        assert_eq!(
            Amount::new(300).checked_sub(&Amount::new(100)),
            Some(Amount::new(200))
        );
    }

    #[test]
    fn min_picks_smaller() {
        assert_eq!(Amount::new(5).min(Amount::new(3)), Amount::new(3));
        assert_eq!(Amount::new(3).min(Amount::new(5)), Amount::new(3));
    }

    #[test]
    fn widen_and_narrow() {
        let a = Amount::new(u128::MAX);
        let wide = a.widen() * U256::from(2u8);
        assert!(Amount::try_from_wide(wide, "test").is_err());
        let Ok(back) = Amount::try_from_wide(a.widen(), "test") else {
            panic!("fits");
        };
        assert_eq!(back, a);
    }

    #[test]
    fn serde_is_transparent() {
        let Ok(json) = serde_json::to_string(&Amount::new(42)) else {
            panic!("serializable");
        };
        assert_eq!(json, "42");
    }
}
