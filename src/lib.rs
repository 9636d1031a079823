//! # pairdex
//!
//! Constant-product decentralized exchange core: a deterministic pair
//! factory, pair ledgers with optimistic (flash) settlement and a
//! time-weighted price oracle, and a multi-hop router, all running on an
//! in-memory transactional host.
//!
//! - **Pair factory**: one ledger per unordered asset pair at an address
//!   derived from the factory and the pair, plus the protocol-fee controller.
//! - **Pair ledger**: reserves, fungible shares with signed permits, 0.30%
//!   input fee (configurable), optional protocol fee on `sqrt(k)` growth,
//!   cumulative UQ112.112 prices.
//! - **Router**: slippage- and deadline-guarded liquidity and swap flows,
//!   native-coin wrapping, support for assets that burn a cut on transfer.
//!
//! # Quick Start
//!
//! ```rust
//! use pairdex::prelude::*;
//!
//! let mut chain = Chain::new();
//! let alice = Address::from_label("alice");
//! let factory = chain
//!     .deploy_factory(Address::from_label("factory"), alice, DexConfig::default())
//!     .expect("factory deployed");
//!
//! // 1. Two assets held by alice
//! let usd = chain
//!     .deploy_asset(StandardAsset::new(Address::from_label("usd"), "Dollar", "USD", alice, Amount::new(10_000_000)).expect("asset"))
//!     .expect("deployed");
//! let eur = chain
//!     .deploy_asset(StandardAsset::new(Address::from_label("eur"), "Euro", "EUR", alice, Amount::new(10_000_000)).expect("asset"))
//!     .expect("deployed");
//!
//! // 2. Create the pair and seed it: transfer first, then mint
//! let pair = chain.create_pair(factory, usd, eur).expect("pair created");
//! chain.transfer(usd, alice, pair, Amount::new(1_000_000)).expect("funded");
//! chain.transfer(eur, alice, pair, Amount::new(1_000_000)).expect("funded");
//! let shares = chain.mint(pair, alice, alice).expect("minted");
//! assert_eq!(shares, Shares::new(1_000_000 - 1_000));
//!
//! // 3. Swap 10 000 USD for EUR at the quoted price
//! let reserves = chain.get_reserves(&pair).expect("reserves");
//! let usd_is_first = chain.pair(&pair).expect("pair").asset0() == usd;
//! let (r_in, r_out) = if usd_is_first {
//!     (reserves.reserve0, reserves.reserve1)
//! } else {
//!     (reserves.reserve1, reserves.reserve0)
//! };
//! let out = get_amount_out(Amount::new(10_000), r_in, r_out, FeeTier::default()).expect("quote");
//! let (out0, out1) = if usd_is_first { (Amount::ZERO, out) } else { (out, Amount::ZERO) };
//! chain.transfer(usd, alice, pair, Amount::new(10_000)).expect("paid");
//! chain.swap(pair, alice, out0, out1, alice, &[], None).expect("swapped");
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Router     │  deadlines, slippage bounds, multi-hop paths, native coin
//! └──────┬──────┘
//!        │ transfer_from + mint / burn / swap
//!        ▼
//! ┌─────────────┐
//! │ Pair ledgers │  reserves, shares, oracle, flash settlement
//! └──────┬──────┘
//!        │ created by, fee recipient from
//!        ▼
//! ┌─────────────┐
//! │   Factory    │  registry, derived addresses, fee controller
//! └──────┬──────┘
//!        │ all state lives in
//!        ▼
//! ┌─────────────┐
//! │    Chain     │  assets, clock, events, transactional rollback
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Address`](domain::Address), [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`AssetPair`](domain::AssetPair), [`FeeTier`](domain::FeeTier) |
//! | [`chain`] | [`Chain`](chain::Chain) execution host |
//! | [`pair`] | [`PairLedger`](pair::PairLedger) state and the mint/burn/swap/skim/sync entry points |
//! | [`factory`] | [`PairFactory`](factory::PairFactory) registry and address derivation |
//! | [`router`] | [`Router`](router::Router) flows and pricing helpers |
//! | [`shares`] | Share tokens and signed permits |
//! | [`assets`] | Asset ledgers: standard, fee-on-transfer, wrapped native |
//! | [`traits`] | [`AssetLedger`](traits::AssetLedger) and [`SwapCallee`](traits::SwapCallee) seams |
//! | [`config`] | [`DexConfig`](config::DexConfig) protocol parameters |
//! | [`events`] | [`Event`](events::Event) log entries |
//! | [`math`] | 256-bit intermediates, square roots, UQ112.112, hashing |
//! | [`error`] | [`DexError`](error::DexError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod assets;
pub mod chain;
pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod factory;
pub mod math;
pub mod pair;
pub mod prelude;
pub mod router;
pub mod shares;
pub mod traits;
