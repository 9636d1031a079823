//! Constant-product pair ledgers.
//!
//! Each [`PairLedger`] pools two assets and issues fungible shares against
//! them.  Trading keeps `reserve0 * reserve1` from decreasing after the
//! input fee is taken out; liquidity providers own the pool pro rata to
//! their shares.
//!
//! # Operations
//!
//! | Entry point | Effect |
//! |-------------|--------|
//! | [`Chain::mint`](crate::chain::Chain::mint) | shares for assets deposited since the last update |
//! | [`Chain::burn`](crate::chain::Chain::burn) | assets for shares returned to the pair |
//! | [`Chain::swap`](crate::chain::Chain::swap) | optimistic output, then verify input |
//! | [`Chain::skim`](crate::chain::Chain::skim) | pay out balance above reserves |
//! | [`Chain::sync`](crate::chain::Chain::sync) | reserves := balances |
//! | [`Chain::permit`](crate::chain::Chain::permit) | signed share approval |
//!
//! # Price oracle
//!
//! At every reserve update the ledger adds `price × elapsed` (UQ112.112,
//! using the reserves from before the update) to two cumulative
//! accumulators.  Sampling an accumulator at two times and dividing the
//! difference by the elapsed time yields a time-weighted average price.

mod ledger;
mod ops;
mod protocol_fee;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use ledger::{PairLedger, Reserves};
pub use protocol_fee::protocol_fee_shares;
