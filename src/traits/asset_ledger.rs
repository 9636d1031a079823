//! Fungible asset ledger abstraction.
//!
//! [`AssetLedger`] is the interface pair ledgers and the router use to move
//! value.  Every fungible thing the host knows about implements it: external
//! assets ([`AssetBox`](crate::assets::AssetBox) and its variants) and the
//! share tokens of pair ledgers.
//!
//! # Credited amounts
//!
//! [`transfer`](AssetLedger::transfer) and
//! [`transfer_from`](AssetLedger::transfer_from) return the amount the
//! recipient actually received.  For most assets that equals the requested
//! amount; fee-on-transfer assets credit less.  Pair ledgers never trust
//! either number and re-read balances after every transfer.

use crate::domain::{Address, Amount};
use crate::error::DexError;

/// Balance-and-allowance ledger of one fungible asset.
///
/// Callers are identified explicitly: the host passes the authenticated
/// caller as `from` (for [`transfer`](Self::transfer)), `owner` (for
/// [`approve`](Self::approve)) or `spender` (for
/// [`transfer_from`](Self::transfer_from)).
pub trait AssetLedger {
    /// Address the ledger is deployed at.
    fn address(&self) -> Address;

    /// Total units in circulation.
    fn total_supply(&self) -> Amount;

    /// Balance held by `owner`.
    fn balance_of(&self, owner: &Address) -> Amount;

    /// Remaining amount `spender` may move on behalf of `owner`.
    fn allowance(&self, owner: &Address, spender: &Address) -> Amount;

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InsufficientBalance`] if `from` holds less than
    /// `amount`.
    fn transfer(&mut self, from: Address, to: Address, amount: Amount) -> Result<Amount, DexError>;

    /// Sets the allowance of `spender` over `owner`'s balance.
    ///
    /// # Errors
    ///
    /// Implementations may reject approvals; the provided ones never do.
    fn approve(&mut self, owner: Address, spender: Address, amount: Amount)
        -> Result<(), DexError>;

    /// Moves `amount` from `from` to `to` using `spender`'s allowance.
    ///
    /// An allowance of `u128::MAX` is infinite and is not decremented.
    ///
    /// # Errors
    ///
    /// - [`DexError::InsufficientAllowance`] if the allowance is too small.
    /// - [`DexError::InsufficientBalance`] if `from` holds less than `amount`.
    fn transfer_from(
        &mut self,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<Amount, DexError>;
}
