//! Pair ledger state and its pure accounting rules.
//!
//! A [`PairLedger`] holds pooled reserves of two assets and the share token
//! that represents claims on them.  The state transitions that need asset
//! transfers (mint, burn, swap, skim, sync) live on
//! [`Chain`](crate::chain::Chain); this module owns everything that can be
//! decided from the ledger's own state plus observed balances.
//!
//! # Invariants
//!
//! - `reserve0`, `reserve1 <= 2^112 - 1`.
//! - Price accumulators only move when time has passed and both reserves
//!   were non-zero, and they always use the reserves from *before* the
//!   update.
//! - The fee-adjusted product of balances never decreases across a swap.

use tracing::trace;

use crate::config::DexConfig;
use crate::domain::{Address, Amount, AssetPair, FeeTier, Shares};
use crate::error::DexError;
use crate::math::{accumulate, encode_ratio, mul_wide, sqrt_product, MAX_RESERVE, U256};
use crate::shares::ShareToken;

/// Reserves and the timestamp they were last written at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reserves {
    /// Tracked balance of `asset0`.
    pub reserve0: Amount,
    /// Tracked balance of `asset1`.
    pub reserve1: Amount,
    /// Host time of the last reserve update.
    pub last_sync_time: u64,
}

/// State of one trading pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairLedger {
    address: Address,
    factory: Address,
    assets: AssetPair,
    swap_fee: FeeTier,
    minimum_liquidity: Shares,
    protocol_fee_denominator: u32,
    reserve0: Amount,
    reserve1: Amount,
    last_sync_time: u64,
    price0_cumulative: U256,
    price1_cumulative: U256,
    k_last: U256,
    locked: bool,
    shares: ShareToken,
}

impl PairLedger {
    /// Initializes an empty ledger for `assets` at `address`.
    #[must_use]
    pub fn new(address: Address, factory: Address, assets: AssetPair, config: &DexConfig) -> Self {
        Self {
            address,
            factory,
            assets,
            swap_fee: config.swap_fee(),
            minimum_liquidity: config.minimum_liquidity(),
            protocol_fee_denominator: config.protocol_fee_denominator(),
            reserve0: Amount::ZERO,
            reserve1: Amount::ZERO,
            last_sync_time: 0,
            price0_cumulative: U256::zero(),
            price1_cumulative: U256::zero(),
            k_last: U256::zero(),
            locked: false,
            shares: ShareToken::new(address, config),
        }
    }

    /// Address of the ledger (and of its share token).
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Factory that created the ledger.
    #[must_use]
    pub const fn factory(&self) -> Address {
        self.factory
    }

    /// Canonical asset pair.
    #[must_use]
    pub const fn assets(&self) -> AssetPair {
        self.assets
    }

    /// Lower asset.
    #[must_use]
    pub const fn asset0(&self) -> Address {
        self.assets.asset0()
    }

    /// Higher asset.
    #[must_use]
    pub const fn asset1(&self) -> Address {
        self.assets.asset1()
    }

    /// Swap fee charged on inputs.
    #[must_use]
    pub const fn swap_fee(&self) -> FeeTier {
        self.swap_fee
    }

    /// Shares locked to the zero address on first mint.
    pub const fn minimum_liquidity(&self) -> Shares {
        self.minimum_liquidity
    }

    /// Current reserves and last update time.
    #[must_use]
    pub const fn reserves(&self) -> Reserves {
        Reserves {
            reserve0: self.reserve0,
            reserve1: self.reserve1,
            last_sync_time: self.last_sync_time,
        }
    }

    /// Outstanding share supply.
    pub fn total_shares(&self) -> Shares {
        self.shares.total_shares()
    }

    /// `(price0_cumulative, price1_cumulative)`.
    #[must_use]
    pub const fn price_cumulatives(&self) -> (U256, U256) {
        (self.price0_cumulative, self.price1_cumulative)
    }

    /// `reserve0 * reserve1` as of the last liquidity event while the
    /// protocol fee was on; zero otherwise.
    #[must_use]
    pub const fn k_last(&self) -> U256 {
        self.k_last
    }

    /// Returns `true` while an operation is executing on the ledger.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Share token of the ledger.
    #[must_use]
    pub const fn shares(&self) -> &ShareToken {
        &self.shares
    }

    pub(crate) fn shares_mut(&mut self) -> &mut ShareToken {
        &mut self.shares
    }

    pub(crate) fn protocol_fee_denominator(&self) -> u32 {
        self.protocol_fee_denominator
    }

    pub(crate) fn lock(&mut self) -> Result<(), DexError> {
        if self.locked {
            return Err(DexError::Locked);
        }
        self.locked = true;
        Ok(())
    }

    pub(crate) fn unlock(&mut self) {
        self.locked = false;
    }

    pub(crate) fn set_k_last(&mut self, k_last: U256) {
        self.k_last = k_last;
    }

    /// Records `reserve0 * reserve1` as the new `k_last`.
    pub(crate) fn refresh_k_last(&mut self) {
        self.k_last = mul_wide(self.reserve0.get(), self.reserve1.get());
    }

    /// Writes new reserves, advancing the price accumulators with the old
    /// ones first.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] if a balance exceeds `2^112 - 1`.
    pub(crate) fn update(&mut self, balance0: Amount, balance1: Amount, now: u64) -> Result<(), DexError> {
        if balance0.get() > MAX_RESERVE || balance1.get() > MAX_RESERVE {
            return Err(DexError::Overflow("reserve exceeds 112 bits"));
        }
        let elapsed = now.saturating_sub(self.last_sync_time);
        if elapsed > 0 && !self.reserve0.is_zero() && !self.reserve1.is_zero() {
            let price0 = encode_ratio(self.reserve1.get(), self.reserve0.get())
                .ok_or(DexError::DivisionByZero)?;
            let price1 = encode_ratio(self.reserve0.get(), self.reserve1.get())
                .ok_or(DexError::DivisionByZero)?;
            self.price0_cumulative = accumulate(self.price0_cumulative, price0, elapsed);
            self.price1_cumulative = accumulate(self.price1_cumulative, price1, elapsed);
            trace!(pair = %self.address, elapsed, "advanced price accumulators");
        }
        self.reserve0 = balance0;
        self.reserve1 = balance1;
        self.last_sync_time = now;
        Ok(())
    }

    /// Shares owed for depositing `amount0` and `amount1` on top of the
    /// current reserves.
    ///
    /// For the first deposit this is `sqrt(amount0 * amount1)` minus the
    /// locked minimum; afterwards it is the smaller of the two proportional
    /// claims, so an unbalanced deposit only earns credit for its lesser
    /// side.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InsufficientLiquidityMinted`] if the result is
    /// zero, or if a first deposit does not exceed the minimum liquidity.
    pub fn shares_for_deposit(
        &self,
        amount0: Amount,
        amount1: Amount,
        total: Shares,
    ) -> Result<Shares, DexError> {
        let minted = if total.is_zero() {
            let root = sqrt_product(amount0.get(), amount1.get());
            root.checked_sub(self.minimum_liquidity.get())
                .ok_or(DexError::InsufficientLiquidityMinted)?
        } else {
            let by0 = proportional(amount0, total.get(), self.reserve0)?;
            let by1 = proportional(amount1, total.get(), self.reserve1)?;
            by0.min(by1)
        };
        if minted == 0 {
            return Err(DexError::InsufficientLiquidityMinted);
        }
        Ok(Shares::new(minted))
    }

    /// Asset amounts redeemed by burning `shares` out of `total` against
    /// the actual balances.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InsufficientLiquidityBurned`] if either amount
    /// is zero.
    pub fn amounts_for_shares(
        &self,
        shares: Shares,
        total: Shares,
        balance0: Amount,
        balance1: Amount,
    ) -> Result<(Amount, Amount), DexError> {
        if total.is_zero() {
            return Err(DexError::InsufficientLiquidityBurned);
        }
        let amount0 = proportional(balance0, shares.get(), Amount::new(total.get()))?;
        let amount1 = proportional(balance1, shares.get(), Amount::new(total.get()))?;
        if amount0 == 0 || amount1 == 0 {
            return Err(DexError::InsufficientLiquidityBurned);
        }
        Ok((Amount::new(amount0), Amount::new(amount1)))
    }

    /// Fee-adjusted constant-product check after a swap.
    ///
    /// With fee `f` in basis points this requires
    /// `(b0·10⁴ − in0·f)·(b1·10⁴ − in1·f) ≥ r0·r1·10⁸`.
    ///
    /// # Errors
    ///
    /// - [`DexError::K`] if the product decreased.
    /// - [`DexError::Overflow`] if balances are too large to compare.
    pub fn check_invariant(
        &self,
        balance0: Amount,
        balance1: Amount,
        amount0_in: Amount,
        amount1_in: Amount,
    ) -> Result<(), DexError> {
        let scale = U256::from(FeeTier::SCALE);
        let fee = U256::from(self.swap_fee.basis_points().get());
        let adjusted = |balance: Amount, input: Amount| -> Result<U256, DexError> {
            balance
                .widen()
                .checked_mul(scale)
                .and_then(|b| b.checked_sub(input.widen() * fee))
                .ok_or(DexError::Overflow("fee-adjusted balance"))
        };
        let lhs = adjusted(balance0, amount0_in)?
            .checked_mul(adjusted(balance1, amount1_in)?)
            .ok_or(DexError::Overflow("fee-adjusted product"))?;
        let rhs = mul_wide(self.reserve0.get(), self.reserve1.get())
            .checked_mul(scale * scale)
            .ok_or(DexError::Overflow("reserve product"))?;
        if lhs < rhs {
            return Err(DexError::K);
        }
        Ok(())
    }
}

/// `amount * numerator / denominator` in 256-bit precision, floored.
fn proportional(amount: Amount, numerator: u128, denominator: Amount) -> Result<u128, DexError> {
    if denominator.is_zero() {
        return Err(DexError::DivisionByZero);
    }
    let value = mul_wide(amount.get(), numerator) / denominator.widen();
    Ok(Amount::try_from_wide(value, "proportional share")?.get())
}
