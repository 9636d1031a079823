//! Swap fee charged by pair ledgers.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::basis_points::BPS_SCALE;
use super::BasisPoints;

/// The swap fee a pair ledger retains from every input amount.
///
/// The constant-product check and the router formulas both work in
/// basis-point units: an input of `x` counts as `x * (10_000 - fee)` against
/// a scale of `10_000`.  The default 30 bp tier is therefore equivalent to
/// the classic `x * 997 / 1000` adjustment.
///
/// # Examples
///
/// ```
/// use pairdex::domain::FeeTier;
///
/// let tier = FeeTier::default();
/// assert_eq!(tier.basis_points().get(), 30);
/// assert_eq!(tier.input_multiplier(), 9_970);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// 0.20% fee (20 bp).
    pub const TIER_0_20_PERCENT: Self = Self(BasisPoints::new(20));

    /// 0.30% fee (30 bp), the default.
    pub const TIER_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// Denominator every fee-adjusted quantity is expressed against.
    pub const SCALE: u32 = BPS_SCALE;

    /// Creates a new `FeeTier` from arbitrary [`BasisPoints`].
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Weight of one input unit after the fee: `10_000 - fee`.
    #[must_use]
    pub const fn input_multiplier(&self) -> u32 {
        self.0.complement()
    }

    /// Returns `true` if the fee is strictly below 100%.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0.get() < BPS_SCALE
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        Self::TIER_0_30_PERCENT
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}
