//! Factory entry points of the host.

use tracing::info;

use crate::chain::Chain;
use crate::domain::Address;
use crate::error::DexError;
use crate::events::Event;
use crate::pair::PairLedger;

impl Chain {
    /// Creates the pair ledger for `asset_a` and `asset_b` under `factory`.
    ///
    /// # Errors
    ///
    /// - [`DexError::UnknownFactory`] if no factory lives at `factory`.
    /// - [`DexError::InvalidPair`] if the assets are equal.
    /// - [`DexError::ZeroAddress`] if the lower asset is zero.
    /// - [`DexError::PairExists`] if the pair is already registered.
    /// - [`DexError::AddressInUse`] if the derived address is occupied.
    pub fn create_pair(
        &mut self,
        factory: Address,
        asset_a: Address,
        asset_b: Address,
    ) -> Result<Address, DexError> {
        self.transact(|chain| {
            let registry = chain.factory_mut(&factory)?;
            let (assets, pair) = registry.register(asset_a, asset_b)?;
            let index = registry.all_pairs_length();
            let ledger = PairLedger::new(pair, factory, assets, registry.config());
            chain.insert_pair(ledger)?;
            info!(
                factory = %factory,
                asset0 = %assets.asset0(),
                asset1 = %assets.asset1(),
                pair = %pair,
                index,
                "pair created"
            );
            chain.emit(Event::PairCreated {
                factory,
                asset0: assets.asset0(),
                asset1: assets.asset1(),
                pair,
                index,
            });
            Ok(pair)
        })
    }

    /// Ledger registered for `a` and `b` under `factory`, in either order.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::UnknownFactory`] if no factory lives at `factory`.
    pub fn get_pair(&self, factory: &Address, a: &Address, b: &Address) -> Result<Option<Address>, DexError> {
        Ok(self.factory(factory)?.get_pair(a, b))
    }

    /// Sets the protocol-fee recipient of `factory`.  The zero address
    /// turns the fee off.
    ///
    /// # Errors
    ///
    /// - [`DexError::UnknownFactory`] if no factory lives at `factory`.
    /// - [`DexError::Forbidden`] if `caller` is not the fee setter.
    pub fn set_fee_to(&mut self, factory: Address, caller: Address, fee_to: Address) -> Result<(), DexError> {
        self.transact(|chain| {
            chain.factory_mut(&factory)?.set_fee_to(&caller, fee_to)?;
            info!(factory = %factory, fee_to = %fee_to, "protocol fee recipient updated");
            chain.emit(Event::FeeToUpdated { factory, fee_to });
            Ok(())
        })
    }

    /// Hands the fee-setter role of `factory` to `fee_to_setter`.
    ///
    /// # Errors
    ///
    /// - [`DexError::UnknownFactory`] if no factory lives at `factory`.
    /// - [`DexError::Forbidden`] if `caller` is not the fee setter.
    pub fn set_fee_to_setter(
        &mut self,
        factory: Address,
        caller: Address,
        fee_to_setter: Address,
    ) -> Result<(), DexError> {
        self.transact(|chain| {
            chain
                .factory_mut(&factory)?
                .set_fee_to_setter(&caller, fee_to_setter)?;
            info!(factory = %factory, fee_to_setter = %fee_to_setter, "fee setter updated");
            chain.emit(Event::FeeToSetterUpdated {
                factory,
                fee_to_setter,
            });
            Ok(())
        })
    }
}
