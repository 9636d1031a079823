//! Parameter bundles for router calls.
//!
//! Every router entry point takes one of these plus the caller.  `to` is
//! the recipient of the result and `deadline` the last host timestamp at
//! which the call may execute.

use crate::domain::{Address, Amount, Shares};
use crate::shares::PermitSignature;

/// Deposit into the `asset_a`/`asset_b` pair, creating it if needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddLiquidity {
    /// First asset.
    pub asset_a: Address,
    /// Second asset.
    pub asset_b: Address,
    /// Most of `asset_a` the caller will deposit.
    pub amount_a_desired: Amount,
    /// Most of `asset_b` the caller will deposit.
    pub amount_b_desired: Amount,
    /// Least of `asset_a` accepted at the current ratio.
    pub amount_a_min: Amount,
    /// Least of `asset_b` accepted at the current ratio.
    pub amount_b_min: Amount,
    /// Share recipient.
    pub to: Address,
    /// Last valid timestamp.
    pub deadline: u64,
}

/// Deposit into the `asset`/wrapped-native pair paying the native side in
/// native coin.  The native amount actually sent is passed separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddLiquidityNative {
    /// The non-native asset.
    pub asset: Address,
    /// Most of `asset` the caller will deposit.
    pub amount_asset_desired: Amount,
    /// Least of `asset` accepted.
    pub amount_asset_min: Amount,
    /// Least native coin accepted.
    pub amount_native_min: Amount,
    /// Share recipient.
    pub to: Address,
    /// Last valid timestamp.
    pub deadline: u64,
}

/// Withdrawal from the `asset_a`/`asset_b` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveLiquidity {
    /// First asset.
    pub asset_a: Address,
    /// Second asset.
    pub asset_b: Address,
    /// Shares to burn.
    pub shares: Shares,
    /// Least of `asset_a` accepted.
    pub amount_a_min: Amount,
    /// Least of `asset_b` accepted.
    pub amount_b_min: Amount,
    /// Asset recipient.
    pub to: Address,
    /// Last valid timestamp.
    pub deadline: u64,
}

/// Withdrawal from the `asset`/wrapped-native pair, paying the native side
/// out as native coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveLiquidityNative {
    /// The non-native asset.
    pub asset: Address,
    /// Shares to burn.
    pub shares: Shares,
    /// Least of `asset` accepted.
    pub amount_asset_min: Amount,
    /// Least native coin accepted.
    pub amount_native_min: Amount,
    /// Recipient of both sides.
    pub to: Address,
    /// Last valid timestamp.
    pub deadline: u64,
}

/// Signed share approval consumed by the `*_with_permit` removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermitApproval {
    /// Approve `u128::MAX` instead of exactly the shares being removed.
    pub approve_max: bool,
    /// Owner's signature over the approval digest.
    pub signature: PermitSignature,
}

/// Swap with a fixed input and a minimum output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactIn {
    /// Input entering at `path[0]`; for native-in swaps, the native coin
    /// sent.
    pub amount_in: Amount,
    /// Least output accepted.
    pub amount_out_min: Amount,
    /// Assets to route through, input first.
    pub path: Vec<Address>,
    /// Output recipient.
    pub to: Address,
    /// Last valid timestamp.
    pub deadline: u64,
}

/// Swap with a fixed output and a maximum input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactOut {
    /// Output leaving at the last asset of `path`.
    pub amount_out: Amount,
    /// Most input accepted; for native-in swaps, the native coin sent.
    pub amount_in_max: Amount,
    /// Assets to route through, input first.
    pub path: Vec<Address>,
    /// Output recipient.
    pub to: Address,
    /// Last valid timestamp.
    pub deadline: u64,
}
