//! Shared balance and allowance bookkeeping.

use std::collections::BTreeMap;

use crate::domain::{Address, Amount};
use crate::error::DexError;
use crate::math::CheckedArithmetic;

/// Balances, allowances and supply of one fungible ledger.
///
/// Every concrete ledger in the crate (standard assets, fee-on-transfer
/// assets, wrapped native coin, pair share tokens) stores its state in a
/// `BalanceBook` and layers its own transfer rules on top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceBook {
    total_supply: Amount,
    balances: BTreeMap<Address, Amount>,
    allowances: BTreeMap<(Address, Address), Amount>,
}

impl BalanceBook {
    /// Empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Units in circulation.
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Balance of `owner`, zero if unknown.
    pub fn balance_of(&self, owner: &Address) -> Amount {
        self.balances.get(owner).copied().unwrap_or(Amount::ZERO)
    }

    /// Allowance of `spender` over `owner`.
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Creates `amount` new units for `to`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] if the supply would exceed `u128::MAX`.
    pub fn mint(&mut self, to: Address, amount: Amount) -> Result<(), DexError> {
        self.total_supply = self.total_supply.safe_add(&amount)?;
        let balance = self.balance_of(&to).safe_add(&amount)?;
        self.balances.insert(to, balance);
        Ok(())
    }

    /// Destroys `amount` units held by `from`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InsufficientBalance`] if `from` holds less.
    pub fn burn(&mut self, from: Address, amount: Amount) -> Result<(), DexError> {
        let balance = self
            .balance_of(&from)
            .checked_sub(&amount)
            .ok_or(DexError::InsufficientBalance)?;
        self.total_supply = self.total_supply.safe_sub(&amount)?;
        self.set_balance(from, balance);
        Ok(())
    }

    /// Moves `amount` between two holders without touching the supply.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InsufficientBalance`] if `from` holds less.
    pub fn move_balance(&mut self, from: Address, to: Address, amount: Amount) -> Result<(), DexError> {
        let from_balance = self
            .balance_of(&from)
            .checked_sub(&amount)
            .ok_or(DexError::InsufficientBalance)?;
        self.set_balance(from, from_balance);
        let to_balance = self.balance_of(&to).safe_add(&amount)?;
        self.set_balance(to, to_balance);
        Ok(())
    }

    /// Sets an allowance.
    pub fn approve(&mut self, owner: Address, spender: Address, amount: Amount) {
        if amount.is_zero() {
            self.allowances.remove(&(owner, spender));
        } else {
            self.allowances.insert((owner, spender), amount);
        }
    }

    /// Consumes `amount` of `spender`'s allowance over `owner`.
    ///
    /// An allowance of `u128::MAX` is never decremented.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InsufficientAllowance`] if the allowance is smaller.
    pub fn spend_allowance(
        &mut self,
        owner: Address,
        spender: Address,
        amount: Amount,
    ) -> Result<(), DexError> {
        let current = self.allowance(&owner, &spender);
        if current == Amount::MAX {
            return Ok(());
        }
        let remaining = current
            .checked_sub(&amount)
            .ok_or(DexError::InsufficientAllowance)?;
        self.approve(owner, spender, remaining);
        Ok(())
    }

    fn set_balance(&mut self, owner: Address, amount: Amount) {
        if amount.is_zero() {
            self.balances.remove(&owner);
        } else {
            self.balances.insert(owner, amount);
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn addr(b: u8) -> Address {
        Address::from_bytes([b; 32])
    }

    #[test]
    fn mint_and_burn_track_supply() {
        let mut book = BalanceBook::new();
        let Ok(()) = book.mint(addr(1), Amount::new(100)) else {
            panic!("mint");
        };
        let Ok(()) = book.burn(addr(1), Amount::new(40)) else {
            panic!("burn");
        };
        assert_eq!(book.total_supply(), Amount::new(60));
        assert_eq!(book.balance_of(&addr(1)), Amount::new(60));
        assert_eq!(
            book.burn(addr(1), Amount::new(61)),
            Err(DexError::InsufficientBalance)
        );
    }

    #[test]
    fn move_balance_checks_sender() {
        let mut book = BalanceBook::new();
        let Ok(()) = book.mint(addr(1), Amount::new(10)) else {
            panic!("mint");
        };
        assert_eq!(
            book.move_balance(addr(1), addr(2), Amount::new(11)),
            Err(DexError::InsufficientBalance)
        );
        let Ok(()) = book.move_balance(addr(1), addr(2), Amount::new(10)) else {
            panic!("move");
        };
        assert_eq!(book.balance_of(&addr(1)), Amount::ZERO);
        assert_eq!(book.balance_of(&addr(2)), Amount::new(10));
    }

    #[test]
    fn self_transfer_keeps_balance() {
        let mut book = BalanceBook::new();
        let Ok(()) = book.mint(addr(1), Amount::new(10)) else {
            panic!("mint");
        };
        let Ok(()) = book.move_balance(addr(1), addr(1), Amount::new(4)) else {
            panic!("move");
        };
        assert_eq!(book.balance_of(&addr(1)), Amount::new(10));
    }

    #[test]
    fn allowance_spending() {
        let mut book = BalanceBook::new();
        book.approve(addr(1), addr(2), Amount::new(5));
        let Ok(()) = book.spend_allowance(addr(1), addr(2), Amount::new(3)) else {
            panic!("spend");
        };
        assert_eq!(book.allowance(&addr(1), &addr(2)), Amount::new(2));
        assert_eq!(
            book.spend_allowance(addr(1), addr(2), Amount::new(3)),
            Err(DexError::InsufficientAllowance)
        );
    }

    #[test]
    fn infinite_allowance_is_not_decremented() {
        let mut book = BalanceBook::new();
        book.approve(addr(1), addr(2), Amount::MAX);
        let Ok(()) = book.spend_allowance(addr(1), addr(2), Amount::new(1_000)) else {
            panic!("spend");
        };
        assert_eq!(book.allowance(&addr(1), &addr(2)), Amount::MAX);
    }
}
