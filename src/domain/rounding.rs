//! Rounding direction for integer division.

/// Which way a quotient with a remainder is resolved.
///
/// Everything that pays out of a pool floors, so the pool keeps the
/// fraction.  `Up` exists for callers computing what they must pay in.
///
/// # Examples
///
/// ```
/// use pairdex::domain::Rounding;
///
/// assert_eq!(Rounding::Down.settle(7, true), 7);
/// assert_eq!(Rounding::Up.settle(7, true), 8);
/// assert_eq!(Rounding::Up.settle(7, false), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Ceiling.
    Up,
    /// Floor.
    #[default]
    Down,
}

impl Rounding {
    /// Resolves a floored `quotient` given whether the division left a
    /// remainder.  Saturates at `u128::MAX`.
    #[must_use]
    pub const fn settle(&self, quotient: u128, has_remainder: bool) -> u128 {
        match self {
            Self::Up if has_remainder => quotient.saturating_add(1),
            _ => quotient,
        }
    }
}
