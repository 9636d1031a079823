//! Router flows against a live host: liquidity, multi-hop swaps, native
//! coin and fee-on-transfer assets.

#![allow(clippy::panic)]

mod common;

use common::{addr, deploy_standard, init_tracing, key_address, wallet_key, SUPPLY};
use pairdex::prelude::*;
use pairdex::router::{get_amounts_in, get_amounts_out, PermitApproval};

const NATIVE: u128 = 10_000_000;
const POOL: u128 = 1_000_000;
const DEADLINE: u64 = 1_000;

struct RouterEnv {
    chain: Chain,
    router: Router,
    wallet: Address,
    weth: Address,
    a: Address,
    b: Address,
    c: Address,
}

fn setup() -> RouterEnv {
    init_tracing();
    let mut chain = Chain::new();
    let wallet = key_address(&wallet_key());
    let Ok(factory) = chain.deploy_factory(addr("factory"), wallet, DexConfig::default()) else {
        panic!("factory");
    };
    let Ok(wrapped) = WrappedNative::new(addr("weth")) else {
        panic!("weth");
    };
    let Ok(weth) = chain.deploy_asset(wrapped) else {
        panic!("weth deployed");
    };
    let Ok(router) = Router::new(addr("router"), factory, weth) else {
        panic!("router");
    };
    let a = deploy_standard(&mut chain, "token-a", wallet, SUPPLY);
    let b = deploy_standard(&mut chain, "token-b", wallet, SUPPLY);
    let c = deploy_standard(&mut chain, "token-c", wallet, SUPPLY);
    let mut env = RouterEnv {
        chain,
        router,
        wallet,
        weth,
        a,
        b,
        c,
    };
    for asset in [a, b, c] {
        env.approve_router(asset);
    }
    let Ok(()) = env.chain.mint_native(wallet, Amount::new(NATIVE)) else {
        panic!("native");
    };
    env
}

impl RouterEnv {
    fn approve_router(&mut self, asset: Address) {
        let Ok(()) = self
            .chain
            .approve(asset, self.wallet, self.router.address(), Amount::MAX)
        else {
            panic!("approve");
        };
    }

    fn balance(&self, asset: Address, owner: Address) -> u128 {
        let Ok(b) = self.chain.balance_of(&asset, &owner) else {
            panic!("balance");
        };
        b.get()
    }

    fn native(&self) -> u128 {
        self.chain.native_balance(&self.wallet).get()
    }

    fn pair(&self, x: Address, y: Address) -> Address {
        let Ok(Some(pair)) = self.chain.get_pair(&self.router.factory(), &x, &y) else {
            panic!("pair exists");
        };
        pair
    }

    fn add(&mut self, x: Address, y: Address, amount_x: u128, amount_y: u128) -> Shares {
        let request = AddLiquidity {
            asset_a: x,
            asset_b: y,
            amount_a_desired: Amount::new(amount_x),
            amount_b_desired: Amount::new(amount_y),
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            to: self.wallet,
            deadline: DEADLINE,
        };
        let Ok((_, _, shares)) = self.router.add_liquidity(&mut self.chain, self.wallet, &request) else {
            panic!("liquidity added");
        };
        shares
    }

    fn add_native(&mut self, asset: Address, amount: u128, value: u128) -> (Amount, Amount, Shares) {
        let request = AddLiquidityNative {
            asset,
            amount_asset_desired: Amount::new(amount),
            amount_asset_min: Amount::ZERO,
            amount_native_min: Amount::ZERO,
            to: self.wallet,
            deadline: DEADLINE,
        };
        let Ok(result) =
            self.router
                .add_liquidity_native(&mut self.chain, self.wallet, &request, Amount::new(value))
        else {
            panic!("native liquidity added");
        };
        result
    }

    fn sign_permit(&self, pair: Address, value: Amount, approve_max: bool) -> PermitApproval {
        let Ok(ledger) = self.chain.pair(&pair) else {
            panic!("pair");
        };
        let digest = ledger
            .shares()
            .permit_digest(&self.wallet, &self.router.address(), value, DEADLINE);
        PermitApproval {
            approve_max,
            signature: PermitSignature::sign(&wallet_key(), &digest),
        }
    }

    fn permit_nonce(&self, pair: Address) -> u64 {
        let Ok(ledger) = self.chain.pair(&pair) else {
            panic!("pair");
        };
        ledger.shares().nonce(&self.wallet)
    }

    fn exact_in(&self, amount_in: u128, min: u128, path: Vec<Address>) -> ExactIn {
        ExactIn {
            amount_in: Amount::new(amount_in),
            amount_out_min: Amount::new(min),
            path,
            to: self.wallet,
            deadline: DEADLINE,
        }
    }

    fn exact_out(&self, amount_out: u128, max: u128, path: Vec<Address>) -> ExactOut {
        ExactOut {
            amount_out: Amount::new(amount_out),
            amount_in_max: Amount::new(max),
            path,
            to: self.wallet,
            deadline: DEADLINE,
        }
    }

    fn assert_router_empty(&self) {
        assert_eq!(self.chain.native_balance(&self.router.address()), Amount::ZERO);
        assert_eq!(self.balance(self.weth, self.router.address()), 0);
    }
}

fn amounts(values: &[u128]) -> Vec<Amount> {
    values.iter().copied().map(Amount::new).collect()
}

// ---------------------------------------------------------------------------
// Quotes
// ---------------------------------------------------------------------------

#[test]
fn path_quotes() {
    let mut env = setup();
    env.add(env.a, env.b, 10_000, 10_000);
    let factory = env.router.factory();
    assert_eq!(
        get_amounts_out(&env.chain, &factory, Amount::new(2), &[env.a, env.b]),
        Ok(amounts(&[2, 1]))
    );
    assert_eq!(
        get_amounts_in(&env.chain, &factory, Amount::new(1), &[env.a, env.b]),
        Ok(amounts(&[2, 1]))
    );
    assert_eq!(
        get_amounts_out(&env.chain, &factory, Amount::new(2), &[env.a]),
        Err(DexError::InvalidPath)
    );
    assert_eq!(
        get_amounts_in(&env.chain, &factory, Amount::new(1), &[]),
        Err(DexError::InvalidPath)
    );
}

// ---------------------------------------------------------------------------
// Liquidity
// ---------------------------------------------------------------------------

#[test]
fn add_liquidity_creates_pair_on_first_use() {
    let mut env = setup();
    assert_eq!(env.chain.get_pair(&env.router.factory(), &env.a, &env.b), Ok(None));
    let shares = env.add(env.a, env.b, POOL, POOL);
    assert_eq!(shares, Shares::new(POOL - 1_000));
    let pair = env.pair(env.a, env.b);
    assert_eq!(env.balance(pair, env.wallet), POOL - 1_000);
    assert_eq!(env.balance(env.a, pair), POOL);
    assert_eq!(env.balance(env.b, pair), POOL);
}

#[test]
fn add_liquidity_keeps_pool_ratio() {
    let mut env = setup();
    env.add(env.a, env.b, POOL, POOL);
    let request = AddLiquidity {
        asset_a: env.a,
        asset_b: env.b,
        amount_a_desired: Amount::new(2_000),
        amount_b_desired: Amount::new(1_000),
        amount_a_min: Amount::ZERO,
        amount_b_min: Amount::ZERO,
        to: env.wallet,
        deadline: DEADLINE,
    };
    assert_eq!(
        env.router.add_liquidity(&mut env.chain, env.wallet, &request),
        Ok((Amount::new(1_000), Amount::new(1_000), Shares::new(1_000)))
    );

    let too_little_b = AddLiquidity {
        amount_a_desired: Amount::new(1_000),
        amount_b_desired: Amount::new(2_000),
        amount_b_min: Amount::new(1_500),
        ..request
    };
    assert_eq!(
        env.router.add_liquidity(&mut env.chain, env.wallet, &too_little_b),
        Err(DexError::InsufficientBAmount)
    );
    let too_little_a = AddLiquidity {
        amount_a_min: Amount::new(1_500),
        ..request
    };
    assert_eq!(
        env.router.add_liquidity(&mut env.chain, env.wallet, &too_little_a),
        Err(DexError::InsufficientAAmount)
    );
}

#[test]
fn expired_request_rejected() {
    let mut env = setup();
    let Ok(()) = env.chain.set_timestamp(DEADLINE + 1) else {
        panic!("clock");
    };
    let request = AddLiquidity {
        asset_a: env.a,
        asset_b: env.b,
        amount_a_desired: Amount::new(POOL),
        amount_b_desired: Amount::new(POOL),
        amount_a_min: Amount::ZERO,
        amount_b_min: Amount::ZERO,
        to: env.wallet,
        deadline: DEADLINE,
    };
    assert_eq!(
        env.router.add_liquidity(&mut env.chain, env.wallet, &request),
        Err(DexError::Expired)
    );
    // nothing was created
    assert_eq!(env.chain.get_pair(&env.router.factory(), &env.a, &env.b), Ok(None));
}

#[test]
fn remove_liquidity_pays_out_and_checks_minimums() {
    let mut env = setup();
    let shares = env.add(env.a, env.b, POOL, POOL);
    let pair = env.pair(env.a, env.b);
    env.approve_router(pair);

    let request = RemoveLiquidity {
        asset_a: env.a,
        asset_b: env.b,
        shares,
        amount_a_min: Amount::new(POOL - 999),
        amount_b_min: Amount::ZERO,
        to: env.wallet,
        deadline: DEADLINE,
    };
    assert_eq!(
        env.router.remove_liquidity(&mut env.chain, env.wallet, &request),
        Err(DexError::InsufficientAAmount)
    );
    assert_eq!(env.balance(pair, env.wallet), shares.get());

    let request = RemoveLiquidity {
        amount_a_min: Amount::new(POOL - 1_000),
        ..request
    };
    let paid = Amount::new(POOL - 1_000);
    assert_eq!(
        env.router.remove_liquidity(&mut env.chain, env.wallet, &request),
        Ok((paid, paid))
    );
    assert_eq!(env.balance(pair, env.wallet), 0);
    assert_eq!(env.balance(env.a, env.wallet), SUPPLY - 1_000);
    assert_eq!(env.balance(env.b, env.wallet), SUPPLY - 1_000);
}

#[test]
fn remove_liquidity_with_permit_needs_no_approval() {
    let mut env = setup();
    let shares = env.add(env.a, env.b, POOL, POOL);
    let pair = env.pair(env.a, env.b);
    let request = RemoveLiquidity {
        asset_a: env.a,
        asset_b: env.b,
        shares,
        amount_a_min: Amount::ZERO,
        amount_b_min: Amount::ZERO,
        to: env.wallet,
        deadline: DEADLINE,
    };
    assert_eq!(
        env.router.remove_liquidity(&mut env.chain, env.wallet, &request),
        Err(DexError::InsufficientAllowance)
    );

    let Ok(ledger) = env.chain.pair(&pair) else {
        panic!("pair");
    };
    let digest = ledger.shares().permit_digest(
        &env.wallet,
        &env.router.address(),
        shares.as_amount(),
        DEADLINE,
    );
    let permit = PermitApproval {
        approve_max: false,
        signature: PermitSignature::sign(&wallet_key(), &digest),
    };
    let paid = Amount::new(POOL - 1_000);
    assert_eq!(
        env.router
            .remove_liquidity_with_permit(&mut env.chain, env.wallet, &request, &permit),
        Ok((paid, paid))
    );
    assert_eq!(
        env.chain.allowance(&pair, &env.wallet, &env.router.address()),
        Ok(Amount::ZERO)
    );
}

// ---------------------------------------------------------------------------
// Token swaps
// ---------------------------------------------------------------------------

#[test]
fn exact_in_multi_hop() {
    let mut env = setup();
    env.add(env.a, env.b, POOL, POOL);
    env.add(env.b, env.c, POOL, POOL);
    let path = vec![env.a, env.b, env.c];

    let greedy = env.exact_in(1_000, 993, path.clone());
    assert_eq!(
        env.router
            .swap_exact_tokens_for_tokens(&mut env.chain, env.wallet, &greedy),
        Err(DexError::InsufficientOutputAmount)
    );

    let request = env.exact_in(1_000, 992, path);
    assert_eq!(
        env.router
            .swap_exact_tokens_for_tokens(&mut env.chain, env.wallet, &request),
        Ok(amounts(&[1_000, 996, 992]))
    );
    assert_eq!(env.balance(env.a, env.wallet), SUPPLY - POOL - 1_000);
    assert_eq!(env.balance(env.c, env.wallet), SUPPLY - POOL + 992);
    let middle = env.pair(env.a, env.b);
    assert_eq!(env.balance(env.b, middle), POOL - 996);
    assert_eq!(env.balance(env.b, env.pair(env.b, env.c)), POOL + 996);
}

#[test]
fn exact_out_single_hop() {
    let mut env = setup();
    env.add(env.a, env.b, POOL, POOL);

    let stingy = env.exact_out(996, 999, vec![env.a, env.b]);
    assert_eq!(
        env.router
            .swap_tokens_for_exact_tokens(&mut env.chain, env.wallet, &stingy),
        Err(DexError::ExcessiveInputAmount)
    );

    let request = env.exact_out(996, 1_000, vec![env.a, env.b]);
    assert_eq!(
        env.router
            .swap_tokens_for_exact_tokens(&mut env.chain, env.wallet, &request),
        Ok(amounts(&[1_000, 996]))
    );
    assert_eq!(env.balance(env.b, env.wallet), SUPPLY - POOL + 996);
}

#[test]
fn swap_fails_without_pair() {
    let mut env = setup();
    let request = env.exact_in(1_000, 0, vec![env.a, env.c]);
    let Err(DexError::UnknownPair(_)) =
        env.router
            .swap_exact_tokens_for_tokens(&mut env.chain, env.wallet, &request)
    else {
        panic!("missing pair must be reported");
    };
}

// ---------------------------------------------------------------------------
// Native coin
// ---------------------------------------------------------------------------

fn native_pool() -> RouterEnv {
    let mut env = setup();
    let (amount, native, shares) = env.add_native(env.a, POOL, POOL);
    assert_eq!((amount.get(), native.get()), (POOL, POOL));
    assert_eq!(shares, Shares::new(POOL - 1_000));
    assert_eq!(env.native(), NATIVE - POOL);
    env
}

#[test]
fn native_liquidity_refunds_unused_coin() {
    let mut env = native_pool();
    let (amount, native, _) = env.add_native(env.a, 1_000, 5_000);
    assert_eq!((amount.get(), native.get()), (1_000, 1_000));
    assert_eq!(env.native(), NATIVE - POOL - 1_000);
    let pair = env.pair(env.a, env.weth);
    assert_eq!(env.balance(env.weth, pair), POOL + 1_000);
    env.assert_router_empty();
}

#[test]
fn exact_native_in() {
    let mut env = native_pool();
    let request = env.exact_in(1_000, 0, vec![env.weth, env.a]);
    assert_eq!(
        env.router
            .swap_exact_native_for_tokens(&mut env.chain, env.wallet, &request),
        Ok(amounts(&[1_000, 996]))
    );
    assert_eq!(env.native(), NATIVE - POOL - 1_000);
    assert_eq!(env.balance(env.a, env.wallet), SUPPLY - POOL + 996);
    env.assert_router_empty();
}

#[test]
fn exact_native_out() {
    let mut env = native_pool();
    let request = env.exact_out(996, 1_000, vec![env.a, env.weth]);
    assert_eq!(
        env.router
            .swap_tokens_for_exact_native(&mut env.chain, env.wallet, &request),
        Ok(amounts(&[1_000, 996]))
    );
    assert_eq!(env.native(), NATIVE - POOL + 996);
    assert_eq!(env.balance(env.a, env.wallet), SUPPLY - POOL - 1_000);
    env.assert_router_empty();
}

#[test]
fn exact_tokens_in_for_native() {
    let mut env = native_pool();
    let request = env.exact_in(1_000, 996, vec![env.a, env.weth]);
    assert_eq!(
        env.router
            .swap_exact_tokens_for_native(&mut env.chain, env.wallet, &request),
        Ok(amounts(&[1_000, 996]))
    );
    assert_eq!(env.native(), NATIVE - POOL + 996);
    env.assert_router_empty();
}

#[test]
fn native_in_for_exact_tokens_refunds() {
    let mut env = native_pool();
    let request = env.exact_out(996, 5_000, vec![env.weth, env.a]);
    assert_eq!(
        env.router
            .swap_native_for_exact_tokens(&mut env.chain, env.wallet, &request),
        Ok(amounts(&[1_000, 996]))
    );
    assert_eq!(env.native(), NATIVE - POOL - 1_000);
    assert_eq!(env.balance(env.a, env.wallet), SUPPLY - POOL + 996);
    env.assert_router_empty();
}

#[test]
fn native_paths_must_touch_wrapped_asset() {
    let mut env = native_pool();
    let before = env.native();
    let request = env.exact_in(1_000, 0, vec![env.a, env.weth]);
    assert_eq!(
        env.router
            .swap_exact_native_for_tokens(&mut env.chain, env.wallet, &request),
        Err(DexError::InvalidPath)
    );
    let request = env.exact_out(996, 1_000, vec![env.weth, env.a]);
    assert_eq!(
        env.router
            .swap_tokens_for_exact_native(&mut env.chain, env.wallet, &request),
        Err(DexError::InvalidPath)
    );
    assert_eq!(env.native(), before);
}

#[test]
fn native_in_requires_coin() {
    let mut env = native_pool();
    let request = env.exact_in(NATIVE, 0, vec![env.weth, env.a]);
    assert_eq!(
        env.router
            .swap_exact_native_for_tokens(&mut env.chain, env.wallet, &request),
        Err(DexError::InsufficientBalance)
    );
}

#[test]
fn remove_native_liquidity() {
    let mut env = native_pool();
    let pair = env.pair(env.a, env.weth);
    env.approve_router(pair);
    let request = RemoveLiquidityNative {
        asset: env.a,
        shares: Shares::new(POOL - 1_000),
        amount_asset_min: Amount::ZERO,
        amount_native_min: Amount::ZERO,
        to: env.wallet,
        deadline: DEADLINE,
    };
    let paid = Amount::new(POOL - 1_000);
    assert_eq!(
        env.router
            .remove_liquidity_native(&mut env.chain, env.wallet, &request),
        Ok((paid, paid))
    );
    assert_eq!(env.native(), NATIVE - 1_000);
    assert_eq!(env.balance(env.a, env.wallet), SUPPLY - 1_000);
    env.assert_router_empty();
}

#[test]
fn remove_native_liquidity_with_exact_permit() {
    let mut env = native_pool();
    let pair = env.pair(env.a, env.weth);
    let shares = Shares::new(POOL - 1_000);
    let request = RemoveLiquidityNative {
        asset: env.a,
        shares,
        amount_asset_min: Amount::ZERO,
        amount_native_min: Amount::ZERO,
        to: env.wallet,
        deadline: DEADLINE,
    };
    let permit = env.sign_permit(pair, shares.as_amount(), false);
    let paid = Amount::new(POOL - 1_000);
    assert_eq!(
        env.router.remove_liquidity_native_with_permit(
            &mut env.chain,
            env.wallet,
            &request,
            &permit
        ),
        Ok((paid, paid))
    );
    assert_eq!(env.permit_nonce(pair), 1);
    assert_eq!(
        env.chain.allowance(&pair, &env.wallet, &env.router.address()),
        Ok(Amount::ZERO)
    );
    assert_eq!(env.native(), NATIVE - 1_000);
    assert_eq!(env.balance(env.a, env.wallet), SUPPLY - 1_000);
    env.assert_router_empty();
}

#[test]
fn native_permit_signed_for_wrong_value_rejected() {
    let mut env = native_pool();
    let pair = env.pair(env.a, env.weth);
    let request = RemoveLiquidityNative {
        asset: env.a,
        shares: Shares::new(POOL - 1_000),
        amount_asset_min: Amount::ZERO,
        amount_native_min: Amount::ZERO,
        to: env.wallet,
        deadline: DEADLINE,
    };
    // Signed for the exact shares but presented as an unlimited approval.
    let permit = env.sign_permit(pair, request.shares.as_amount(), true);
    assert_eq!(
        env.router.remove_liquidity_native_with_permit(
            &mut env.chain,
            env.wallet,
            &request,
            &permit
        ),
        Err(DexError::InvalidSignature)
    );
    assert_eq!(env.permit_nonce(pair), 0);
    assert_eq!(env.native(), NATIVE - POOL);
}

// ---------------------------------------------------------------------------
// Fee-on-transfer assets
// ---------------------------------------------------------------------------

fn deploy_deflating(env: &mut RouterEnv) -> Address {
    let Ok(asset) = FeeOnTransferAsset::new(
        addr("deflating"),
        "DTT",
        BasisPoints::new(100),
        env.wallet,
        Amount::new(SUPPLY),
    ) else {
        panic!("asset");
    };
    let Ok(at) = env.chain.deploy_asset(asset) else {
        panic!("deployed");
    };
    env.approve_router(at);
    at
}

#[test]
fn fee_on_transfer_needs_measured_swap() {
    let mut env = setup();
    let dtt = deploy_deflating(&mut env);
    env.add(dtt, env.b, POOL, POOL);
    let pair = env.pair(dtt, env.b);
    assert_eq!(env.balance(dtt, pair), 990_000);

    let request = env.exact_in(1_000, 0, vec![dtt, env.b]);
    assert_eq!(
        env.router
            .swap_exact_tokens_for_tokens(&mut env.chain, env.wallet, &request),
        Err(DexError::K)
    );

    let greedy = env.exact_in(1_000, 997, vec![dtt, env.b]);
    assert_eq!(
        env.router.swap_exact_tokens_for_tokens_supporting_fee_on_transfer(
            &mut env.chain,
            env.wallet,
            &greedy
        ),
        Err(DexError::InsufficientOutputAmount)
    );

    let before = env.balance(env.b, env.wallet);
    assert_eq!(
        env.router.swap_exact_tokens_for_tokens_supporting_fee_on_transfer(
            &mut env.chain,
            env.wallet,
            &request
        ),
        Ok(Amount::new(996))
    );
    assert_eq!(env.balance(env.b, env.wallet), before + 996);
    assert_eq!(env.balance(dtt, pair), 990_990);
}

#[test]
fn fee_on_transfer_native_withdrawal() {
    let mut env = setup();
    let dtt = deploy_deflating(&mut env);
    let (_, _, shares) = env.add_native(dtt, POOL, POOL);
    assert_eq!(shares, Shares::new(993_987));
    let pair = env.pair(dtt, env.weth);
    env.approve_router(pair);

    let request = RemoveLiquidityNative {
        asset: dtt,
        shares,
        amount_asset_min: Amount::ZERO,
        amount_native_min: Amount::ZERO,
        to: env.wallet,
        deadline: DEADLINE,
    };
    assert_eq!(
        env.router
            .remove_liquidity_native(&mut env.chain, env.wallet, &request),
        Err(DexError::InsufficientBalance)
    );

    assert_eq!(
        env.router.remove_liquidity_native_supporting_fee_on_transfer(
            &mut env.chain,
            env.wallet,
            &request
        ),
        Ok(Amount::new(998_994))
    );
    assert_eq!(env.native(), NATIVE - POOL + 998_994);
    assert_eq!(env.balance(dtt, env.wallet), SUPPLY - POOL + 969_324);
    assert_eq!(env.balance(dtt, env.router.address()), 0);
    env.assert_router_empty();
}

#[test]
fn fee_on_transfer_native_withdrawal_with_unlimited_permit() {
    let mut env = setup();
    let dtt = deploy_deflating(&mut env);
    let (_, _, shares) = env.add_native(dtt, POOL, POOL);
    let pair = env.pair(dtt, env.weth);

    let request = RemoveLiquidityNative {
        asset: dtt,
        shares,
        amount_asset_min: Amount::ZERO,
        amount_native_min: Amount::ZERO,
        to: env.wallet,
        deadline: DEADLINE,
    };
    let permit = env.sign_permit(pair, Amount::MAX, true);
    assert_eq!(
        env.router
            .remove_liquidity_native_with_permit_supporting_fee_on_transfer(
                &mut env.chain,
                env.wallet,
                &request,
                &permit
            ),
        Ok(Amount::new(998_994))
    );
    assert_eq!(env.permit_nonce(pair), 1);
    assert_eq!(
        env.chain.allowance(&pair, &env.wallet, &env.router.address()),
        Ok(Amount::MAX)
    );
    assert_eq!(env.native(), NATIVE - POOL + 998_994);
    assert_eq!(env.balance(dtt, env.wallet), SUPPLY - POOL + 969_324);
    env.assert_router_empty();
}

#[test]
fn fee_on_transfer_native_swaps() {
    let mut env = setup();
    let dtt = deploy_deflating(&mut env);
    env.add_native(dtt, POOL, POOL);

    let buy = env.exact_in(1_000, 0, vec![env.weth, dtt]);
    let Ok(bought) = env
        .router
        .swap_exact_native_for_tokens_supporting_fee_on_transfer(&mut env.chain, env.wallet, &buy)
    else {
        panic!("native in");
    };
    assert!(bought.get() > 0);
    assert_eq!(env.native(), NATIVE - POOL - 1_000);

    let sell = env.exact_in(1_000, 0, vec![dtt, env.weth]);
    let before = env.native();
    let Ok(received) = env
        .router
        .swap_exact_tokens_for_native_supporting_fee_on_transfer(&mut env.chain, env.wallet, &sell)
    else {
        panic!("native out");
    };
    assert_eq!(env.native(), before + received.get());
    env.assert_router_empty();
}
