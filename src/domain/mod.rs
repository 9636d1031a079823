//! Value types shared by every layer of the DEX.
//!
//! Newtypes keep raw asset amounts, pool shares and fees from being mixed up
//! and give each a checked arithmetic surface.  [`AssetPair`] is the single
//! source of canonical pair ordering.

mod address;
mod amount;
mod asset_pair;
mod basis_points;
mod fee_tier;
mod rounding;
mod shares;

pub use address::Address;
pub use amount::Amount;
pub use asset_pair::AssetPair;
pub use basis_points::{BasisPoints, BPS_SCALE};
pub use fee_tier::FeeTier;
pub use rounding::Rounding;
pub use shares::Shares;
