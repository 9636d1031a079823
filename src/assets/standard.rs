//! Plain fungible asset.

use super::BalanceBook;
use crate::domain::{Address, Amount};
use crate::error::DexError;
use crate::traits::AssetLedger;

/// A fungible asset with a fixed genesis supply and no transfer rules.
///
/// # Examples
///
/// ```
/// use pairdex::assets::StandardAsset;
/// use pairdex::domain::{Address, Amount};
/// use pairdex::traits::AssetLedger;
///
/// let alice = Address::from_label("alice");
/// let Ok(asset) = StandardAsset::new(
///     Address::from_label("asset:A"), "Asset A", "A", alice, Amount::new(1_000),
/// ) else { unreachable!() };
/// assert_eq!(asset.balance_of(&alice), Amount::new(1_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardAsset {
    address: Address,
    name: String,
    symbol: String,
    book: BalanceBook,
}

impl StandardAsset {
    /// Deploys an asset with `supply` units held by `holder`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::ZeroAddress`] if `address` is the zero address.
    pub fn new(
        address: Address,
        name: &str,
        symbol: &str,
        holder: Address,
        supply: Amount,
    ) -> Result<Self, DexError> {
        if address.is_zero() {
            return Err(DexError::ZeroAddress);
        }
        let mut book = BalanceBook::new();
        book.mint(holder, supply)?;
        Ok(Self {
            address,
            name: name.to_owned(),
            symbol: symbol.to_owned(),
            book,
        })
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ticker symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl AssetLedger for StandardAsset {
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
