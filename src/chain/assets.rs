//! Fungible-asset entry points of the host.
//!
//! These work uniformly on registered asset ledgers and on pair share
//! tokens (addressed by the pair address).

use crate::domain::{Address, Amount};
use crate::error::DexError;
use crate::events::Event;

use super::Chain;

impl Chain {
    /// Balance of `owner` in `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::UnknownAsset`] if nothing fungible lives at
    /// `asset`.
    pub fn balance_of(&self, asset: &Address, owner: &Address) -> Result<Amount, DexError> {
        Ok(self.ledger(asset)?.balance_of(owner))
    }

    /// Total supply of `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::UnknownAsset`] if nothing fungible lives at
    /// `asset`.
    pub fn total_supply(&self, asset: &Address) -> Result<Amount, DexError> {
        Ok(self.ledger(asset)?.total_supply())
    }

    /// Allowance `owner` granted `spender` in `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::UnknownAsset`] if nothing fungible lives at
    /// `asset`.
    pub fn allowance(
        &self,
        asset: &Address,
        owner: &Address,
        spender: &Address,
    ) -> Result<Amount, DexError> {
        Ok(self.ledger(asset)?.allowance(owner, spender))
    }

    /// Moves `amount` of `asset` from `from` to `to`, returning the amount
    /// credited to `to`.
    ///
    /// # Errors
    ///
    /// - [`DexError::UnknownAsset`] if nothing fungible lives at `asset`.
    /// - [`DexError::InsufficientBalance`] if `from` holds too little.
    pub fn transfer(
        &mut self,
        asset: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<Amount, DexError> {
        self.transact(|chain| chain.move_asset(asset, from, to, amount))
    }

    /// Sets the allowance of `spender` over `owner`'s `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::UnknownAsset`] if nothing fungible lives at
    /// `asset`.
    pub fn approve(
        &mut self,
        asset: Address,
        owner: Address,
        spender: Address,
        amount: Amount,
    ) -> Result<(), DexError> {
        self.transact(|chain| {
            chain.ledger_mut(&asset)?.approve(owner, spender, amount)?;
            chain.emit(Event::Approval {
                asset,
                owner,
                spender,
                amount,
            });
            Ok(())
        })
    }

    /// Moves `amount` of `asset` from `from` to `to` on behalf of
    /// `spender`, consuming allowance.
    ///
    /// # Errors
    ///
    /// - [`DexError::UnknownAsset`] if nothing fungible lives at `asset`.
    /// - [`DexError::InsufficientAllowance`] if `spender` may not move
    ///   that much.
    /// - [`DexError::InsufficientBalance`] if `from` holds too little.
    pub fn transfer_from(
        &mut self,
        asset: Address,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<Amount, DexError> {
        self.transact(|chain| {
            let credited = chain
                .ledger_mut(&asset)?
                .transfer_from(spender, from, to, amount)?;
            chain.record_transfer(asset, from, to, amount, credited);
            Ok(credited)
        })
    }

    /// Wraps `amount` of `owner`'s native coin into `wrapped`.
    ///
    /// # Errors
    ///
    /// - [`DexError::UnknownAsset`] if `wrapped` is not a wrapped-native
    ///   ledger.
    /// - [`DexError::InsufficientBalance`] if `owner` lacks native coin.
    pub fn deposit(&mut self, wrapped: Address, owner: Address, amount: Amount) -> Result<(), DexError> {
        self.transact(|chain| {
            chain.burn_native(owner, amount)?;
            chain
                .asset_mut(&wrapped)?
                .as_wrapped_native_mut()
                .ok_or(DexError::UnknownAsset(wrapped))?
                .deposit(owner, amount)?;
            chain.emit(Event::Deposit {
                asset: wrapped,
                owner,
                amount,
            });
            Ok(())
        })
    }

    /// Unwraps `amount` of `wrapped` held by `owner` back into native coin.
    ///
    /// # Errors
    ///
    /// - [`DexError::UnknownAsset`] if `wrapped` is not a wrapped-native
    ///   ledger.
    /// - [`DexError::InsufficientBalance`] if `owner` holds too little.
    pub fn withdraw(&mut self, wrapped: Address, owner: Address, amount: Amount) -> Result<(), DexError> {
        self.transact(|chain| {
            chain
                .asset_mut(&wrapped)?
                .as_wrapped_native_mut()
                .ok_or(DexError::UnknownAsset(wrapped))?
                .withdraw(owner, amount)?;
            chain.mint_native(owner, amount)?;
            chain.emit(Event::Withdrawal {
                asset: wrapped,
                owner,
                amount,
            });
            Ok(())
        })
    }

    /// Non-transactional transfer used inside larger operations.
    pub(crate) fn move_asset(
        &mut self,
        asset: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<Amount, DexError> {
        let credited = self.ledger_mut(&asset)?.transfer(from, to, amount)?;
        self.record_transfer(asset, from, to, amount, credited);
        Ok(credited)
    }

    /// Logs a transfer; any shortfall between requested and credited is
    /// logged as burned.
    pub(crate) fn record_transfer(
        &mut self,
        asset: Address,
        from: Address,
        to: Address,
        requested: Amount,
        credited: Amount,
    ) {
        self.emit(Event::Transfer {
            asset,
            from,
            to,
            amount: credited,
        });
        if let Some(burned) = requested.checked_sub(&credited).filter(|b| !b.is_zero()) {
            self.emit(Event::Transfer {
                asset,
                from,
                to: Address::ZERO,
                amount: burned,
            });
        }
    }
}
