//! In-memory execution host.
//!
//! [`Chain`] owns every ledger in the system (external assets, pair ledgers
//! with their share tokens, factories, native coin balances), a clock and
//! an append-only event log.  Entry points for each component are spread
//! over several `impl Chain` blocks:
//!
//! | Block | Entry points |
//! |-------|--------------|
//! | this module | clock, native coin, deployment, lookups, events |
//! | [`assets`] | transfers, approvals, wrap/unwrap |
//! | [`crate::factory`] | pair creation, fee controller |
//! | [`crate::pair`] | mint, burn, swap, skim, sync, permit |
//! | [`crate::router`] | multi-step liquidity and swap flows |
//!
//! Every public mutating entry point runs inside [`Chain::transact`]: on
//! error the host is restored to its pre-call state, so a failed call leaves
//! no balances, reserves or events behind.

mod assets;

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::assets::AssetBox;
use crate::config::DexConfig;
use crate::domain::{Address, Amount};
use crate::error::DexError;
use crate::events::Event;
use crate::factory::PairFactory;
use crate::pair::PairLedger;
use crate::traits::AssetLedger;

/// The execution host.
#[derive(Debug, Clone, Default)]
pub struct Chain {
    timestamp: u64,
    native: BTreeMap<Address, Amount>,
    assets: BTreeMap<Address, AssetBox>,
    pairs: BTreeMap<Address, PairLedger>,
    factories: BTreeMap<Address, PairFactory>,
    events: Vec<Event>,
    in_transaction: bool,
}

impl Chain {
    /// Creates an empty host at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `op` and restores the pre-call state if it fails.
    ///
    /// Only the outermost call takes a snapshot.  Nested calls run `op`
    /// directly and leave the revert to the outermost one, which sees the
    /// error through `?`.
    ///
    /// # Errors
    ///
    /// Propagates whatever `op` returns.
    pub fn transact<T, F>(&mut self, op: F) -> Result<T, DexError>
    where
        F: FnOnce(&mut Self) -> Result<T, DexError>,
    {
        if self.in_transaction {
            return op(self);
        }
        let snapshot = self.clone();
        self.in_transaction = true;
        match op(self) {
            Ok(value) => {
                self.in_transaction = false;
                Ok(value)
            }
            Err(err) => {
                debug!(error = %err, "transaction reverted");
                *self = snapshot;
                Err(err)
            }
        }
    }

    /// Runs `op` with no transaction open, so every entry point it calls
    /// snapshots and reverts on its own.
    ///
    /// Wraps foreign callbacks, which may swallow the error of a nested
    /// call and carry on.
    pub(crate) fn detached<T>(&mut self, op: impl FnOnce(&mut Self) -> T) -> T {
        let open = core::mem::replace(&mut self.in_transaction, false);
        let result = op(self);
        self.in_transaction = open;
        result
    }

    // -- clock ----------------------------------------------------------------

    /// Current host time in seconds.
    #[must_use]
    pub const fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Moves the clock forward by `seconds`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] if the clock would wrap.
    pub fn advance_time(&mut self, seconds: u64) -> Result<u64, DexError> {
        self.timestamp = self
            .timestamp
            .checked_add(seconds)
            .ok_or(DexError::Overflow("timestamp"))?;
        Ok(self.timestamp)
    }

    /// Sets the clock to `timestamp`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::TimeWentBackwards`] if `timestamp` is in the past.
    pub fn set_timestamp(&mut self, timestamp: u64) -> Result<(), DexError> {
        if timestamp < self.timestamp {
            return Err(DexError::TimeWentBackwards {
                current: self.timestamp,
                requested: timestamp,
            });
        }
        self.timestamp = timestamp;
        Ok(())
    }

    // -- native coin ------------------------------------------------------------

    /// Native coin held by `owner`.
    pub fn native_balance(&self, owner: &Address) -> Amount {
        self.native.get(owner).copied().unwrap_or(Amount::ZERO)
    }

    /// Creates `amount` native coin for `to` (genesis allocation).
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] if the balance would exceed `u128`.
    pub fn mint_native(&mut self, to: Address, amount: Amount) -> Result<(), DexError> {
        let next = self
            .native_balance(&to)
            .checked_add(&amount)
            .ok_or(DexError::Overflow("native balance"))?;
        self.native.insert(to, next);
        Ok(())
    }

    /// Sends native coin from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InsufficientBalance`] if `from` holds too little.
    pub fn transfer_native(&mut self, from: Address, to: Address, amount: Amount) -> Result<(), DexError> {
        self.transact(|chain| {
            let remaining = chain
                .native_balance(&from)
                .checked_sub(&amount)
                .ok_or(DexError::InsufficientBalance)?;
            chain.native.insert(from, remaining);
            chain.mint_native(to, amount)
        })
    }

    pub(crate) fn burn_native(&mut self, from: Address, amount: Amount) -> Result<(), DexError> {
        let remaining = self
            .native_balance(&from)
            .checked_sub(&amount)
            .ok_or(DexError::InsufficientBalance)?;
        self.native.insert(from, remaining);
        Ok(())
    }

    // -- deployment -------------------------------------------------------------

    /// Registers an asset ledger at its own address.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::AddressInUse`] if anything already lives there.
    pub fn deploy_asset(&mut self, asset: impl Into<AssetBox>) -> Result<Address, DexError> {
        let asset = asset.into();
        let address = asset.address();
        self.ensure_vacant(&address)?;
        debug!(asset = %address, supply = %asset.total_supply(), "asset deployed");
        self.assets.insert(address, asset);
        Ok(address)
    }

    /// Registers a factory at `address`.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidConfiguration`] if `config` fails validation.
    /// - [`DexError::ZeroAddress`] if `address` is zero.
    /// - [`DexError::AddressInUse`] if anything already lives there.
    pub fn deploy_factory(
        &mut self,
        address: Address,
        fee_to_setter: Address,
        config: DexConfig,
    ) -> Result<Address, DexError> {
        config.validate()?;
        if address.is_zero() {
            return Err(DexError::ZeroAddress);
        }
        self.ensure_vacant(&address)?;
        self.factories
            .insert(address, PairFactory::new(address, fee_to_setter, config));
        debug!(factory = %address, setter = %fee_to_setter, "factory deployed");
        Ok(address)
    }

    pub(crate) fn ensure_vacant(&self, address: &Address) -> Result<(), DexError> {
        if self.assets.contains_key(address)
            || self.pairs.contains_key(address)
            || self.factories.contains_key(address)
        {
            return Err(DexError::AddressInUse(*address));
        }
        Ok(())
    }

    // -- lookups ----------------------------------------------------------------

    /// The asset ledger at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::UnknownAsset`] if none is registered.
    pub fn asset(&self, address: &Address) -> Result<&AssetBox, DexError> {
        self.assets
            .get(address)
            .ok_or(DexError::UnknownAsset(*address))
    }

    /// The pair ledger at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::UnknownPair`] if none is registered.
    pub fn pair(&self, address: &Address) -> Result<&PairLedger, DexError> {
        self.pairs
            .get(address)
            .ok_or(DexError::UnknownPair(*address))
    }

    /// The factory at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::UnknownFactory`] if none is registered.
    pub fn factory(&self, address: &Address) -> Result<&PairFactory, DexError> {
        self.factories
            .get(address)
            .ok_or(DexError::UnknownFactory(*address))
    }

    pub(crate) fn pair_mut(&mut self, address: &Address) -> Result<&mut PairLedger, DexError> {
        self.pairs
            .get_mut(address)
            .ok_or(DexError::UnknownPair(*address))
    }

    pub(crate) fn factory_mut(&mut self, address: &Address) -> Result<&mut PairFactory, DexError> {
        self.factories
            .get_mut(address)
            .ok_or(DexError::UnknownFactory(*address))
    }

    pub(crate) fn asset_mut(&mut self, address: &Address) -> Result<&mut AssetBox, DexError> {
        self.assets
            .get_mut(address)
            .ok_or(DexError::UnknownAsset(*address))
    }

    pub(crate) fn insert_pair(&mut self, pair: PairLedger) -> Result<(), DexError> {
        let address = pair.address();
        self.ensure_vacant(&address)?;
        self.pairs.insert(address, pair);
        Ok(())
    }

    /// Any fungible ledger by address: a registered asset, or the share
    /// token of a pair.
    pub(crate) fn ledger(&self, address: &Address) -> Result<&dyn AssetLedger, DexError> {
        match self.assets.get(address) {
            Some(asset) => Ok(asset as &dyn AssetLedger),
            None => self
                .pairs
                .get(address)
                .map(|pair| pair.shares() as &dyn AssetLedger)
                .ok_or(DexError::UnknownAsset(*address)),
        }
    }

    pub(crate) fn ledger_mut(&mut self, address: &Address) -> Result<&mut dyn AssetLedger, DexError> {
        match self.assets.get_mut(address) {
            Some(asset) => Ok(asset as &mut dyn AssetLedger),
            None => self
                .pairs
                .get_mut(address)
                .map(|pair| pair.shares_mut() as &mut dyn AssetLedger)
                .ok_or(DexError::UnknownAsset(*address)),
        }
    }

    // -- events -----------------------------------------------------------------

    /// Events emitted so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Drains the event log.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: Event) {
        trace!(event = event.name(), "emit");
        self.events.push(event);
    }
}
