//! Pair registry and fee controller.

use std::collections::BTreeMap;

use crate::config::DexConfig;
use crate::domain::{Address, AssetPair};
use crate::error::DexError;
use crate::math::{keccak256, keccak256_concat};

/// Identifier of the pair ledger code, mixed into every derived address.
const PAIR_CODE_ID: &[u8] = b"pairdex::pair::PairLedger/v1";

/// Fixed code hash used by [`derive_pair_address`].
#[must_use]
pub fn pair_code_hash() -> [u8; 32] {
    keccak256(PAIR_CODE_ID)
}

/// Deterministic address of the ledger for `assets` created by `factory`.
///
/// `keccak256(0xff ‖ factory ‖ keccak256(asset0 ‖ asset1) ‖ code_hash)`.
/// Pure, so routers compute it without asking the factory.
#[must_use]
pub fn derive_pair_address(factory: &Address, assets: &AssetPair) -> Address {
    let salt = keccak256(&assets.packed());
    Address::from_bytes(keccak256_concat(&[
        &[0xff],
        factory.as_bytes(),
        &salt,
        &pair_code_hash(),
    ]))
}

/// Registry of pair ledgers created by one factory, plus the protocol-fee
/// controller.
///
/// Lookups are symmetric in the asset order.  Registration is append-only;
/// [`all_pairs`](Self::all_pairs) enumerates in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairFactory {
    address: Address,
    fee_to: Address,
    fee_to_setter: Address,
    config: DexConfig,
    pairs: BTreeMap<AssetPair, Address>,
    all_pairs: Vec<Address>,
}

impl PairFactory {
    /// Empty registry with the fee off.
    #[must_use]
    pub fn new(address: Address, fee_to_setter: Address, config: DexConfig) -> Self {
        Self {
            address,
            fee_to: Address::ZERO,
            fee_to_setter,
            config,
            pairs: BTreeMap::new(),
            all_pairs: Vec::new(),
        }
    }

    /// Factory address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Current protocol-fee recipient; zero means the fee is off.
    #[must_use]
    pub const fn fee_to(&self) -> Address {
        self.fee_to
    }

    /// Returns `true` if a protocol-fee recipient is set.
    #[must_use]
    pub fn fee_on(&self) -> bool {
        !self.fee_to.is_zero()
    }

    /// Account allowed to change the fee controller.
    #[must_use]
    pub const fn fee_to_setter(&self) -> Address {
        self.fee_to_setter
    }

    /// Configuration stamped onto every new pair.
    #[must_use]
    pub const fn config(&self) -> &DexConfig {
        &self.config
    }

    /// Ledger for `a` and `b`, in either order.
    #[must_use]
    pub fn get_pair(&self, a: &Address, b: &Address) -> Option<Address> {
        let assets = AssetPair::new(*a, *b).ok()?;
        self.pairs.get(&assets).copied()
    }

    /// The `index`-th created pair.
    #[must_use]
    pub fn all_pairs(&self, index: usize) -> Option<Address> {
        self.all_pairs.get(index).copied()
    }

    /// Number of pairs created.
    #[must_use]
    pub fn all_pairs_length(&self) -> usize {
        self.all_pairs.len()
    }

    /// Validates and registers a new pair, returning its derived address.
    pub(crate) fn register(&mut self, a: Address, b: Address) -> Result<(AssetPair, Address), DexError> {
        let assets = AssetPair::new(a, b)?;
        if self.pairs.contains_key(&assets) {
            return Err(DexError::PairExists);
        }
        let pair = derive_pair_address(&self.address, &assets);
        self.pairs.insert(assets, pair);
        self.all_pairs.push(pair);
        Ok((assets, pair))
    }

    pub(crate) fn set_fee_to(&mut self, caller: &Address, fee_to: Address) -> Result<(), DexError> {
        self.authorize(caller)?;
        self.fee_to = fee_to;
        Ok(())
    }

    pub(crate) fn set_fee_to_setter(
        &mut self,
        caller: &Address,
        fee_to_setter: Address,
    ) -> Result<(), DexError> {
        self.authorize(caller)?;
        self.fee_to_setter = fee_to_setter;
        Ok(())
    }

    fn authorize(&self, caller: &Address) -> Result<(), DexError> {
        if *caller != self.fee_to_setter {
            return Err(DexError::Forbidden);
        }
        Ok(())
    }
}
