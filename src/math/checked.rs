//! Checked arithmetic trait for domain wrapper types.
//!
//! [`CheckedArithmetic`] turns the `Option`-returning `checked_*` methods of
//! [`Amount`] into `Result`s carrying a specific [`DexError`], so balance
//! bookkeeping can chain them with `?`.
//!
//! ```
//! use pairdex::domain::Amount;
//! use pairdex::math::CheckedArithmetic;
//!
//! let Ok(sum) = Amount::new(100).safe_add(&Amount::new(200)) else { unreachable!() };
//! assert_eq!(sum, Amount::new(300));
//! assert!(Amount::new(1).safe_sub(&Amount::new(2)).is_err());
//! ```

use crate::domain::Amount;
use crate::error::DexError;

/// Fallible arithmetic for domain wrapper types.
///
/// Implementations never panic and never saturate.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] if the sum is not representable.
    fn safe_add(&self, other: &Self) -> Result<Self, DexError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, DexError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, DexError> {
        self.checked_add(other)
            .ok_or(DexError::Overflow("amount addition"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, DexError> {
        self.checked_sub(other)
            .ok_or(DexError::Underflow("amount subtraction"))
    }
}
