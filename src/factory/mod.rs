//! Pair creation and the protocol-fee controller.
//!
//! A [`PairFactory`] owns the registry of pair ledgers it created and the
//! `fee_to`/`fee_to_setter` controller.  Ledger addresses are a pure
//! function of the factory address and the canonical asset pair (see
//! [`derive_pair_address`]), so routers can locate a pair without querying
//! the registry.
//!
//! # Usage
//!
//! ```rust
//! use pairdex::chain::Chain;
//! use pairdex::config::DexConfig;
//! use pairdex::domain::Address;
//!
//! let mut chain = Chain::new();
//! let factory = Address::from_label("factory");
//! let setter = Address::from_label("setter");
//! chain.deploy_factory(factory, setter, DexConfig::default()).expect("deployed");
//!
//! let (a, b) = (Address::from_label("a"), Address::from_label("b"));
//! let pair = chain.create_pair(factory, b, a).expect("created");
//! assert_eq!(chain.get_pair(&factory, &a, &b).expect("factory"), Some(pair));
//! ```

mod ops;
mod pair_factory;

pub use pair_factory::{derive_pair_address, pair_code_hash, PairFactory};
