//! External asset ledgers.
//!
//! The DEX core treats assets as collaborators behind the
//! [`AssetLedger`](crate::traits::AssetLedger) trait.  This module provides
//! the ledgers a host needs to exercise every pair and router path:
//!
//! | Ledger | Transfer rule |
//! |--------|---------------|
//! | [`StandardAsset`] | credits exactly the requested amount |
//! | [`FeeOnTransferAsset`] | burns a basis-point cut of each transfer |
//! | [`WrappedNative`] | 1:1 claim on native coin, minted on deposit |
//!
//! [`AssetBox`] dispatches between them.  [`BalanceBook`] holds the shared
//! balance/allowance state and is reused by pair share tokens.

mod asset_box;
mod balance_book;
mod fee_on_transfer;
mod standard;
mod wrapped_native;

pub use asset_box::AssetBox;
pub use balance_book::BalanceBook;
pub use fee_on_transfer::FeeOnTransferAsset;
pub use standard::StandardAsset;
pub use wrapped_native::WrappedNative;
