//! Asset that burns a cut of every transfer.

use super::BalanceBook;
use crate::domain::{Address, Amount, BasisPoints, Rounding};
use crate::error::DexError;
use crate::math::CheckedArithmetic;
use crate::traits::AssetLedger;

/// A fungible asset whose transfers burn `cut` of the moved amount.
///
/// The sender is debited the full amount; the recipient is credited the
/// remainder and the supply shrinks by the burned part.  Exact-amount router
/// paths cannot trade such assets; the `*_supporting_fee_on_transfer`
/// variants re-derive every hop from actual balances instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeOnTransferAsset {
    address: Address,
    symbol: String,
    cut: BasisPoints,
    book: BalanceBook,
}

impl FeeOnTransferAsset {
    /// Deploys an asset with `supply` units held by `holder`.
    ///
    /// # Errors
    ///
    /// - [`DexError::ZeroAddress`] if `address` is the zero address.
    /// - [`DexError::InvalidConfiguration`] if `cut` is not a valid percentage.
    pub fn new(
        address: Address,
        symbol: &str,
        cut: BasisPoints,
        holder: Address,
        supply: Amount,
    ) -> Result<Self, DexError> {
        if address.is_zero() {
            return Err(DexError::ZeroAddress);
        }
        if !cut.is_valid_percent() {
            return Err(DexError::InvalidConfiguration(
                "transfer cut must not exceed 100%",
            ));
        }
        let mut book = BalanceBook::new();
        book.mint(holder, supply)?;
        Ok(Self {
            address,
            symbol: symbol.to_owned(),
            cut,
            book,
        })
    }

    /// Ticker symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Share of each transfer that is burned.
    #[must_use]
    pub const fn cut(&self) -> BasisPoints {
        self.cut
    }

    fn move_with_cut(&mut self, from: Address, to: Address, amount: Amount) -> Result<Amount, DexError> {
        let burned = self.cut.apply(amount, Rounding::Down)?;
        let credited = amount.safe_sub(&burned)?;
        self.book.move_balance(from, to, credited)?;
        self.book.burn(from, burned)?;
        Ok(credited)
    }
}

impl AssetLedger for FeeOnTransferAsset {
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
        if self.book.balance_of(&from) < amount {
            return Err(DexError::InsufficientBalance);
        }
        self.move_with_cut(from, to, amount)
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
