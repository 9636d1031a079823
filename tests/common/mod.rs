//! Shared fixtures for integration tests.

#![allow(dead_code, clippy::panic)]

use ed25519_dalek::SigningKey;
use pairdex::prelude::*;
use tracing_subscriber::EnvFilter;

pub const E18: u128 = 1_000_000_000_000_000_000;

/// Supply minted to the wallet for each test asset.
pub const SUPPLY: u128 = 10_000 * E18;

pub fn addr(label: &str) -> Address {
    Address::from_label(label)
}

/// Installs a test subscriber honouring `RUST_LOG`; repeated calls are
/// harmless.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Key controlling [`Env::wallet`].
pub fn wallet_key() -> SigningKey {
    SigningKey::from_bytes(&[1u8; 32])
}

pub fn key_address(key: &SigningKey) -> Address {
    Address::from_public_key(&key.verifying_key().to_bytes())
}

/// A host with one factory, two funded assets and their (empty) pair.
pub struct Env {
    pub chain: Chain,
    pub factory: Address,
    pub setter: Address,
    pub wallet: Address,
    pub pair: Address,
    pub asset0: Address,
    pub asset1: Address,
}

pub fn setup() -> Env {
    setup_with(DexConfig::default())
}

pub fn setup_with(config: DexConfig) -> Env {
    init_tracing();
    let mut chain = Chain::new();
    let wallet = key_address(&wallet_key());
    let setter = wallet;
    let a = deploy_standard(&mut chain, "token-a", wallet, SUPPLY);
    let b = deploy_standard(&mut chain, "token-b", wallet, SUPPLY);
    let Ok(factory) = chain.deploy_factory(addr("factory"), setter, config) else {
        panic!("factory deployed");
    };
    let Ok(pair) = chain.create_pair(factory, a, b) else {
        panic!("pair created");
    };
    let Ok(ledger) = chain.pair(&pair) else {
        panic!("pair registered");
    };
    let (asset0, asset1) = (ledger.asset0(), ledger.asset1());
    Env {
        chain,
        factory,
        setter,
        wallet,
        pair,
        asset0,
        asset1,
    }
}

pub fn deploy_standard(chain: &mut Chain, label: &str, holder: Address, supply: u128) -> Address {
    let Ok(asset) = StandardAsset::new(addr(label), label, label, holder, Amount::new(supply)) else {
        panic!("valid asset");
    };
    let Ok(at) = chain.deploy_asset(asset) else {
        panic!("asset deployed");
    };
    at
}

impl Env {
    /// Sends `amount` of `asset` from the wallet to `to`.
    pub fn send(&mut self, asset: Address, to: Address, amount: u128) {
        let Ok(_) = self.chain.transfer(asset, self.wallet, to, Amount::new(amount)) else {
            panic!("transfer of {amount}");
        };
    }

    /// Deposits both assets into the pair and mints to the wallet.
    pub fn add_liquidity(&mut self, amount0: u128, amount1: u128) -> Shares {
        self.send(self.asset0, self.pair, amount0);
        self.send(self.asset1, self.pair, amount1);
        let Ok(shares) = self.chain.mint(self.pair, self.wallet, self.wallet) else {
            panic!("mint");
        };
        shares
    }

    pub fn reserves(&self) -> (u128, u128) {
        let Ok(r) = self.chain.get_reserves(&self.pair) else {
            panic!("reserves");
        };
        (r.reserve0.get(), r.reserve1.get())
    }

    pub fn balance(&self, asset: Address, owner: Address) -> u128 {
        let Ok(b) = self.chain.balance_of(&asset, &owner) else {
            panic!("balance");
        };
        b.get()
    }

    pub fn total_shares(&self) -> u128 {
        let Ok(ledger) = self.chain.pair(&self.pair) else {
            panic!("pair");
        };
        ledger.total_shares().get()
    }

    /// Plain swap from the wallet with no callback.
    pub fn swap(&mut self, out0: u128, out1: u128, to: Address) -> pairdex::error::Result<()> {
        self.chain.swap(
            self.pair,
            self.wallet,
            Amount::new(out0),
            Amount::new(out1),
            to,
            &[],
            None,
        )
    }
}
