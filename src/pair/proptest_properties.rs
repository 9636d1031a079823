//! Property-based tests for pair ledger invariants.
//!
//! 1. **Exact pricing**: the quoted output passes the product check and one
//!    unit more fails it.
//! 2. **Product growth**: `reserve0 * reserve1` never decreases across a
//!    swap.
//! 3. **Round trip loses**: A→B→A returns at most the original input.
//! 4. **Liquidity conservation**: mint then burn never returns more than
//!    was deposited.

use proptest::prelude::*;

use crate::assets::StandardAsset;
use crate::chain::Chain;
use crate::config::DexConfig;
use crate::domain::{Address, Amount, FeeTier};
use crate::math::mul_wide;
use crate::router::get_amount_out;

struct Fixture {
    chain: Chain,
    pair: Address,
    asset0: Address,
    asset1: Address,
    trader: Address,
}

fn fixture(reserve0: u128, reserve1: u128) -> Fixture {
    let mut chain = Chain::new();
    let trader = Address::from_label("trader");
    let supply = Amount::new(u128::from(u64::MAX));
    let mut assets = Vec::new();
    for label in ["x", "y"] {
        let Ok(asset) = StandardAsset::new(Address::from_label(label), label, label, trader, supply)
        else {
            panic!("valid asset");
        };
        let Ok(at) = chain.deploy_asset(asset) else {
            panic!("deployed");
        };
        assets.push(at);
    }
    let Ok(factory) = chain.deploy_factory(
        Address::from_label("factory"),
        trader,
        DexConfig::default(),
    ) else {
        panic!("factory");
    };
    let Ok(pair) = chain.create_pair(factory, assets[0], assets[1]) else {
        panic!("pair");
    };
    let Ok(ledger) = chain.pair(&pair) else {
        panic!("ledger");
    };
    let (asset0, asset1) = (ledger.asset0(), ledger.asset1());
    let Ok(_) = chain.transfer(asset0, trader, pair, Amount::new(reserve0)) else {
        panic!("fund 0");
    };
    let Ok(_) = chain.transfer(asset1, trader, pair, Amount::new(reserve1)) else {
        panic!("fund 1");
    };
    let Ok(_) = chain.mint(pair, trader, trader) else {
        panic!("seed mint");
    };
    Fixture {
        chain,
        pair,
        asset0,
        asset1,
        trader,
    }
}

impl Fixture {
    fn reserves(&self) -> (Amount, Amount) {
        let Ok(r) = self.chain.get_reserves(&self.pair) else {
            panic!("reserves");
        };
        (r.reserve0, r.reserve1)
    }

    /// Sells `amount_in` of asset0 for `amount_out` of asset1.
    fn sell0(&mut self, amount_in: u128, amount_out: Amount) -> bool {
        let (asset, pair, trader) = (self.asset0, self.pair, self.trader);
        self.chain
            .transact(|c| {
                c.transfer(asset, trader, pair, Amount::new(amount_in))?;
                c.swap(pair, trader, Amount::ZERO, amount_out, trader, &[], None)
            })
            .is_ok()
    }

    fn sell1(&mut self, amount_in: u128, amount_out: Amount) -> bool {
        let (asset, pair, trader) = (self.asset1, self.pair, self.trader);
        self.chain
            .transact(|c| {
                c.transfer(asset, trader, pair, Amount::new(amount_in))?;
                c.swap(pair, trader, amount_out, Amount::ZERO, trader, &[], None)
            })
            .is_ok()
    }
}

fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000_000u128
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_quoted_output_is_exact(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        divisor in 2u128..=1_000u128,
    ) {
        let amount_in = (r0 / divisor).max(1);
        let mut fx = fixture(r0, r1);
        let (reserve0, reserve1) = fx.reserves();
        let Ok(out) = get_amount_out(Amount::new(amount_in), reserve0, reserve1, FeeTier::default()) else {
            return Ok(());
        };
        if out.is_zero() { return Ok(()); }
        let Some(greedy) = out.checked_add(&Amount::new(1)) else {
            return Ok(());
        };
        prop_assert!(!fx.sell0(amount_in, greedy), "one unit above the quote must fail");
        prop_assert!(fx.sell0(amount_in, out), "the quoted output must pass");
    }

    #[test]
    fn prop_product_never_decreases(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        divisor in 2u128..=1_000u128,
    ) {
        let amount_in = (r1 / divisor).max(1);
        let mut fx = fixture(r0, r1);
        let (before0, before1) = fx.reserves();
        let Ok(out) = get_amount_out(Amount::new(amount_in), before1, before0, FeeTier::default()) else {
            return Ok(());
        };
        if out.is_zero() { return Ok(()); }
        prop_assert!(fx.sell1(amount_in, out));
        let (after0, after1) = fx.reserves();
        prop_assert!(mul_wide(after0.get(), after1.get()) >= mul_wide(before0.get(), before1.get()));
    }

    #[test]
    fn prop_round_trip_loses(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
    ) {
        let amount_in = (r0 / 1_000).max(1);
        let mut fx = fixture(r0, r1);
        let (a0, a1) = fx.reserves();
        let Ok(got1) = get_amount_out(Amount::new(amount_in), a0, a1, FeeTier::default()) else {
            return Ok(());
        };
        if got1.is_zero() || !fx.sell0(amount_in, got1) { return Ok(()); }
        let (b0, b1) = fx.reserves();
        let Ok(got0) = get_amount_out(got1, b1, b0, FeeTier::default()) else {
            return Ok(());
        };
        prop_assert!(got0.get() <= amount_in, "round trip gained: {} > {}", got0, amount_in);
    }

    #[test]
    fn prop_mint_burn_conserves(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        d0 in 1_000u128..=1_000_000u128,
        d1 in 1_000u128..=1_000_000u128,
    ) {
        let mut fx = fixture(r0, r1);
        let provider = Address::from_label("provider");
        let pair = fx.pair;
        let (asset0, asset1, trader) = (fx.asset0, fx.asset1, fx.trader);
        let result = fx.chain.transact(|c| {
            c.transfer(asset0, trader, pair, Amount::new(d0))?;
            c.transfer(asset1, trader, pair, Amount::new(d1))?;
            let shares = c.mint(pair, trader, provider)?;
            c.transfer(pair, provider, pair, shares.as_amount())?;
            c.burn(pair, provider, provider)
        });
        if let Ok((out0, out1)) = result {
            prop_assert!(out0.get() <= d0);
            prop_assert!(out1.get() <= d1);
        }
    }
}
