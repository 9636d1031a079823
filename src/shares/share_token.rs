//! Fungible share ledger owned by each pair.

use std::collections::BTreeMap;

use super::permit::{domain_separator, permit_digest, PermitSignature};
use crate::assets::BalanceBook;
use crate::config::DexConfig;
use crate::domain::{Address, Amount, Shares};
use crate::error::DexError;
use crate::traits::AssetLedger;

/// Share token of one pair ledger.
///
/// Balances and allowances behave like any other asset; in addition the
/// token supports signature permits with a per-owner nonce.  The token lives
/// at the pair's own address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareToken {
    address: Address,
    name: String,
    symbol: String,
    decimals: u8,
    domain_separator: [u8; 32],
    book: BalanceBook,
    nonces: BTreeMap<Address, u64>,
}

impl ShareToken {
    /// Creates an empty share token for the pair at `address`.
    #[must_use]
    pub fn new(address: Address, config: &DexConfig) -> Self {
        Self {
            address,
            name: config.share_name().to_owned(),
            symbol: config.share_symbol().to_owned(),
            decimals: config.share_decimals(),
            domain_separator: domain_separator(config.share_name(), config.chain_id(), &address),
            book: BalanceBook::new(),
            nonces: BTreeMap::new(),
        }
    }

    /// Token name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Token symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Token decimals.
    #[must_use]
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Domain separator mixed into every permit digest.
    #[must_use]
    pub const fn domain_separator(&self) -> [u8; 32] {
        self.domain_separator
    }

    /// Outstanding shares.
    pub fn total_shares(&self) -> Shares {
        Shares::from_amount(self.book.total_supply())
    }

    /// Shares held by `owner`.
    pub fn shares_of(&self, owner: &Address) -> Shares {
        Shares::from_amount(self.book.balance_of(owner))
    }

    /// Next permit nonce of `owner`.
    #[must_use]
    pub fn nonce(&self, owner: &Address) -> u64 {
        self.nonces.get(owner).copied().unwrap_or(0)
    }

    /// Digest `owner` must sign to approve `spender` for `value`.
    #[must_use]
    pub fn permit_digest(
        &self,
        owner: &Address,
        spender: &Address,
        value: Amount,
        deadline: u64,
    ) -> [u8; 32] {
        permit_digest(
            &self.domain_separator,
            owner,
            spender,
            value,
            self.nonce(owner),
            deadline,
        )
    }

    pub(crate) fn mint(&mut self, to: Address, shares: Shares) -> Result<(), DexError> {
        self.book.mint(to, shares.as_amount())
    }

    pub(crate) fn burn(&mut self, from: Address, shares: Shares) -> Result<(), DexError> {
        self.book.burn(from, shares.as_amount())
    }

    /// Approves `spender` on behalf of `owner` using a signature.
    ///
    /// Consumes the owner's current nonce, so each signature works once.
    ///
    /// # Errors
    ///
    /// - [`DexError::ExpiredPermit`] if `now > deadline`.
    /// - [`DexError::InvalidSignature`] if the signature does not belong to
    ///   `owner` or does not cover this approval.
    pub(crate) fn permit(
        &mut self,
        owner: Address,
        spender: Address,
        value: Amount,
        deadline: u64,
        now: u64,
        signature: &PermitSignature,
    ) -> Result<(), DexError> {
        if now > deadline {
            return Err(DexError::ExpiredPermit);
        }
        let digest = self.permit_digest(&owner, &spender, value, deadline);
        signature.verify(&owner, &digest)?;
        let next = self
            .nonce(&owner)
            .checked_add(1)
            .ok_or(DexError::Overflow("permit nonce"))?;
        self.nonces.insert(owner, next);
        self.book.approve(owner, spender, value);
        Ok(())
    }
}

impl AssetLedger for ShareToken {
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
