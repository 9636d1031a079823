//! Pool-share quantities.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Amount;

/// A quantity of pool shares issued by a pair ledger.
///
/// Shares measure a claim on a pool's reserves, not an amount of either
/// underlying asset.  Share tokens are still transferable through the asset
/// interface, which is where [`Shares::as_amount`] comes in.
///
/// # Examples
///
/// ```
/// use pairdex::domain::{Amount, Shares};
///
/// let a = Shares::new(1_000);
/// assert_eq!(a.as_amount(), Amount::new(1_000));
/// assert_eq!(Shares::from_amount(a.as_amount()), a);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Shares(u128);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Shares` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Raw value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Views the share quantity as a transferable amount of share tokens.
    pub const fn as_amount(&self) -> Amount {
        Amount::new(self.0)
    }

    /// Reads a share-token amount back as shares.
    pub const fn from_amount(amount: Amount) -> Self {
        Self(amount.get())
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
