//! Safe multi-step flows on top of the pair ledgers.
//!
//! The pair ledgers expose a deliberately low-level interface: callers
//! transfer first and call second, and nothing protects them from
//! slippage.  [`Router`] packages the common flows (deposit at the current
//! ratio, withdraw, exact-in and exact-out swaps along multi-hop paths,
//! native-coin wrapping) into single transactional calls with deadline and
//! slippage bounds.
//!
//! The router holds no state beyond three addresses.  It pulls the
//! caller's assets with `transfer_from`, so callers approve the router's
//! address first.
//!
//! # Usage
//!
//! ```rust
//! use pairdex::assets::StandardAsset;
//! use pairdex::chain::Chain;
//! use pairdex::config::DexConfig;
//! use pairdex::domain::{Address, Amount};
//! use pairdex::router::{AddLiquidity, ExactIn, Router};
//!
//! let mut chain = Chain::new();
//! let alice = Address::from_label("alice");
//! let factory = chain
//!     .deploy_factory(Address::from_label("factory"), alice, DexConfig::default())
//!     .expect("factory");
//! let router = Router::new(
//!     Address::from_label("router"),
//!     factory,
//!     Address::from_label("wrapped-native"),
//! )
//! .expect("router");
//!
//! let mut assets = Vec::new();
//! for label in ["a", "b"] {
//!     let asset = StandardAsset::new(Address::from_label(label), label, label, alice, Amount::new(1_000_000))
//!         .expect("asset");
//!     let at = chain.deploy_asset(asset).expect("deployed");
//!     chain.approve(at, alice, router.address(), Amount::MAX).expect("approved");
//!     assets.push(at);
//! }
//!
//! router
//!     .add_liquidity(&mut chain, alice, &AddLiquidity {
//!         asset_a: assets[0],
//!         asset_b: assets[1],
//!         amount_a_desired: Amount::new(10_000),
//!         amount_b_desired: Amount::new(10_000),
//!         amount_a_min: Amount::ZERO,
//!         amount_b_min: Amount::ZERO,
//!         to: alice,
//!         deadline: u64::MAX,
//!     })
//!     .expect("liquidity added");
//!
//! let amounts = router
//!     .swap_exact_tokens_for_tokens(&mut chain, alice, &ExactIn {
//!         amount_in: Amount::new(100),
//!         amount_out_min: Amount::new(90),
//!         path: assets.clone(),
//!         to: alice,
//!         deadline: u64::MAX,
//!     })
//!     .expect("swapped");
//! assert_eq!(amounts.len(), 2);
//! ```

mod library;
mod liquidity;
mod requests;
mod swap;

pub use library::{
    get_amount_in, get_amount_out, get_amounts_in, get_amounts_out, get_reserves, pair_for, quote,
    sort_assets,
};
pub use requests::{
    AddLiquidity, AddLiquidityNative, ExactIn, ExactOut, PermitApproval, RemoveLiquidity,
    RemoveLiquidityNative,
};

use crate::chain::Chain;
use crate::domain::{Address, Amount};
use crate::error::DexError;

/// Stateless front end for one factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Router {
    address: Address,
    factory: Address,
    wrapped_native: Address,
}

impl Router {
    /// Creates a router acting from `address`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::ZeroAddress`] if any address is zero.
    pub fn new(address: Address, factory: Address, wrapped_native: Address) -> Result<Self, DexError> {
        if address.is_zero() || factory.is_zero() || wrapped_native.is_zero() {
            return Err(DexError::ZeroAddress);
        }
        Ok(Self {
            address,
            factory,
            wrapped_native,
        })
    }

    /// Account the router acts as; callers approve this address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Factory whose pairs the router trades on.
    #[must_use]
    pub const fn factory(&self) -> Address {
        self.factory
    }

    /// Wrapped-native asset used for native-coin flows.
    #[must_use]
    pub const fn wrapped_native(&self) -> Address {
        self.wrapped_native
    }

    fn ensure_live(chain: &Chain, deadline: u64) -> Result<(), DexError> {
        if chain.timestamp() > deadline {
            return Err(DexError::Expired);
        }
        Ok(())
    }

    /// Takes `value` native coin from `payer` into the router.
    fn collect_native(&self, chain: &mut Chain, payer: Address, value: Amount) -> Result<(), DexError> {
        chain.transfer_native(payer, self.address, value)
    }

    /// Wraps `amount` of the router's native coin and sends it to `pair`.
    fn wrap_into(&self, chain: &mut Chain, pair: Address, amount: Amount) -> Result<(), DexError> {
        chain.deposit(self.wrapped_native, self.address, amount)?;
        let _credited = chain.transfer(self.wrapped_native, self.address, pair, amount)?;
        Ok(())
    }

    /// Unwraps `amount` held by the router and sends the coin to `to`.
    fn unwrap_to(&self, chain: &mut Chain, to: Address, amount: Amount) -> Result<(), DexError> {
        chain.withdraw(self.wrapped_native, self.address, amount)?;
        chain.transfer_native(self.address, to, amount)
    }

    fn refund_native(&self, chain: &mut Chain, to: Address, amount: Amount) -> Result<(), DexError> {
        if amount.is_zero() {
            return Ok(());
        }
        chain.transfer_native(self.address, to, amount)
    }
}
