//! Native coin wrapped as a fungible asset.

use super::BalanceBook;
use crate::domain::{Address, Amount};
use crate::error::DexError;
use crate::traits::AssetLedger;

/// 1:1 wrapper of the host's native coin.
///
/// [`deposit`](Self::deposit) and [`withdraw`](Self::withdraw) only adjust
/// the wrapped side; the [`Chain`](crate::chain::Chain) moves the native
/// coin in the same transaction so the two always stay backed 1:1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedNative {
    address: Address,
    book: BalanceBook,
}

impl WrappedNative {
    /// Deploys an empty wrapper.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::ZeroAddress`] if `address` is the zero address.
    pub fn new(address: Address) -> Result<Self, DexError> {
        if address.is_zero() {
            return Err(DexError::ZeroAddress);
        }
        Ok(Self {
            address,
            book: BalanceBook::new(),
        })
    }

    /// Credits `amount` wrapped units to `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] if the supply would overflow.
    pub fn deposit(&mut self, owner: Address, amount: Amount) -> Result<(), DexError> {
        self.book.mint(owner, amount)
    }

    /// Removes `amount` wrapped units from `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InsufficientBalance`] if `owner` holds less.
    pub fn withdraw(&mut self, owner: Address, amount: Amount) -> Result<(), DexError> {
        self.book.burn(owner, amount)
    }
}

impl AssetLedger for WrappedNative {
    fn address(&self) -> Address {
        self.address
    }

    fn total_supply(&self) -> Amount {
        self.book.total_supply()
    }

    fn balance_of(&self, owner: &Address) -> Amount {
        self.book.balance_of(owner)
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.book.allowance(owner, spender)
    }

    fn transfer(&mut self, from: Address, to: Address, amount: Amount) -> Result<Amount, DexError> {
        self.book.move_balance(from, to, amount)?;
        Ok(amount)
    }

    fn approve(&mut self, owner: Address, spender: Address, amount: Amount) -> Result<(), DexError> {
        self.book.approve(owner, spender, amount);
        Ok(())
    }

    fn transfer_from(
        &mut self,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<Amount, DexError> {
        self.book.spend_allowance(from, spender, amount)?;
        self.transfer(from, to, amount)
    }
}
