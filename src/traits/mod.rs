//! Trait seams between the host and its collaborators.
//!
//! - [`AssetLedger`]: balance and allowance bookkeeping of a fungible asset.
//! - [`SwapCallee`]: flash-swap settlement callback.

mod asset_ledger;
mod swap_callee;

pub use asset_ledger::AssetLedger;
pub use swap_callee::SwapCallee;
