//! Pair entry points of the host.
//!
//! The low-level protocol: callers are expected to transfer assets (or
//! shares) to the pair first and then call [`Chain::mint`],
//! [`Chain::burn`] or [`Chain::swap`], which measure what arrived by
//! comparing actual balances with the tracked reserves.  The
//! [`router`](crate::router) wraps these into safe multi-step flows.

use tracing::debug;

use super::ledger::Reserves;
use super::protocol_fee::protocol_fee_shares;
use crate::chain::Chain;
use crate::domain::{Address, Amount, Shares};
use crate::error::DexError;
use crate::events::Event;
use crate::math::U256;
use crate::shares::PermitSignature;
use crate::traits::SwapCallee;

impl Chain {
    /// Reserves of `pair`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::UnknownPair`] if no pair lives at `pair`.
    pub fn get_reserves(&self, pair: &Address) -> Result<Reserves, DexError> {
        Ok(self.pair(pair)?.reserves())
    }

    /// Mints shares to `to` for whatever was deposited since the last
    /// reserve update.
    ///
    /// On the first mint the minimum liquidity is minted to the zero
    /// address and subtracted from `to`'s shares.
    ///
    /// # Errors
    ///
    /// - [`DexError::Locked`] on re-entry.
    /// - [`DexError::InsufficientLiquidityMinted`] if the deposit earns no
    ///   shares.
    /// - [`DexError::Overflow`] if reserves would exceed 112 bits.
    pub fn mint(&mut self, pair: Address, sender: Address, to: Address) -> Result<Shares, DexError> {
        self.with_pair_lock(pair, |chain| {
            let ledger = chain.pair(&pair)?;
            let reserves = ledger.reserves();
            let minimum = ledger.minimum_liquidity();
            let (balance0, balance1) = chain.pair_balances(&pair)?;
            let amount0 = deposited(balance0, reserves.reserve0)?;
            let amount1 = deposited(balance1, reserves.reserve1)?;

            let fee_on = chain.accrue_protocol_fee(pair)?;
            let ledger = chain.pair(&pair)?;
            let total = ledger.total_shares();
            let minted = ledger.shares_for_deposit(amount0, amount1, total)?;
            if total.is_zero() {
                chain.mint_shares(pair, Address::ZERO, minimum)?;
            }
            chain.mint_shares(pair, to, minted)?;

            chain.write_reserves(pair, balance0, balance1)?;
            if fee_on {
                chain.pair_mut(&pair)?.refresh_k_last();
            }
            debug!(pair = %pair, %amount0, %amount1, shares = %minted, "mint");
            chain.emit(Event::Mint {
                pair,
                sender,
                amount0,
                amount1,
            });
            Ok(minted)
        })
    }

    /// Burns the shares held by the pair itself and pays the proportional
    /// assets to `to`.
    ///
    /// # Errors
    ///
    /// - [`DexError::Locked`] on re-entry.
    /// - [`DexError::InsufficientLiquidityBurned`] if either payout is
    ///   zero.
    pub fn burn(&mut self, pair: Address, sender: Address, to: Address) -> Result<(Amount, Amount), DexError> {
        self.with_pair_lock(pair, |chain| {
            let ledger = chain.pair(&pair)?;
            let (asset0, asset1) = (ledger.asset0(), ledger.asset1());
            let (balance0, balance1) = chain.pair_balances(&pair)?;
            let liquidity = ledger.shares().shares_of(&pair);

            let fee_on = chain.accrue_protocol_fee(pair)?;
            let ledger = chain.pair(&pair)?;
            let (amount0, amount1) =
                ledger.amounts_for_shares(liquidity, ledger.total_shares(), balance0, balance1)?;
            chain.burn_shares(pair, pair, liquidity)?;
            let _credited = chain.move_asset(asset0, pair, to, amount0)?;
            let _credited = chain.move_asset(asset1, pair, to, amount1)?;

            let (balance0, balance1) = chain.pair_balances(&pair)?;
            chain.write_reserves(pair, balance0, balance1)?;
            if fee_on {
                chain.pair_mut(&pair)?.refresh_k_last();
            }
            debug!(pair = %pair, %amount0, %amount1, shares = %liquidity, "burn");
            chain.emit(Event::Burn {
                pair,
                sender,
                amount0,
                amount1,
                to,
            });
            Ok((amount0, amount1))
        })
    }

    /// Sends the requested outputs to `to` and then verifies that enough
    /// input arrived to keep the fee-adjusted constant product.
    ///
    /// Outputs are transferred before any input is checked.  When `data`
    /// is non-empty, `callee` is invoked after the transfers and may pay
    /// the pair back in either asset (a flash swap).
    ///
    /// # Errors
    ///
    /// - [`DexError::InsufficientOutputAmount`] if both outputs are zero.
    /// - [`DexError::Locked`] on re-entry.
    /// - [`DexError::InsufficientLiquidity`] if an output is not below its
    ///   reserve.
    /// - [`DexError::InvalidTo`] if `to` is one of the pair's assets.
    /// - [`DexError::MissingCallee`] if `data` is non-empty and no callee
    ///   is given.
    /// - [`DexError::InsufficientInputAmount`] if nothing was paid in.
    /// - [`DexError::K`] if the product decreased.
    #[allow(clippy::too_many_arguments)]
    pub fn swap(
        &mut self,
        pair: Address,
        sender: Address,
        amount0_out: Amount,
        amount1_out: Amount,
        to: Address,
        data: &[u8],
        callee: Option<&mut dyn SwapCallee>,
    ) -> Result<(), DexError> {
        if amount0_out.is_zero() && amount1_out.is_zero() {
            return Err(DexError::InsufficientOutputAmount);
        }
        self.with_pair_lock(pair, |chain| {
            let ledger = chain.pair(&pair)?;
            let Reserves {
                reserve0, reserve1, ..
            } = ledger.reserves();
            let (asset0, asset1) = (ledger.asset0(), ledger.asset1());
            if amount0_out >= reserve0 || amount1_out >= reserve1 {
                return Err(DexError::InsufficientLiquidity);
            }
            if to == asset0 || to == asset1 {
                return Err(DexError::InvalidTo);
            }

            if !amount0_out.is_zero() {
                let _credited = chain.move_asset(asset0, pair, to, amount0_out)?;
            }
            if !amount1_out.is_zero() {
                let _credited = chain.move_asset(asset1, pair, to, amount1_out)?;
            }
            if !data.is_empty() {
                let callee = callee.ok_or(DexError::MissingCallee)?;
                chain.detached(|chain| {
                    callee.on_swap(chain, sender, amount0_out, amount1_out, data)
                })?;
            }

            let (balance0, balance1) = chain.pair_balances(&pair)?;
            let amount0_in = paid_in(balance0, reserve0, amount0_out);
            let amount1_in = paid_in(balance1, reserve1, amount1_out);
            if amount0_in.is_zero() && amount1_in.is_zero() {
                return Err(DexError::InsufficientInputAmount);
            }
            chain
                .pair(&pair)?
                .check_invariant(balance0, balance1, amount0_in, amount1_in)?;

            chain.write_reserves(pair, balance0, balance1)?;
            debug!(
                pair = %pair,
                %amount0_in,
                %amount1_in,
                %amount0_out,
                %amount1_out,
                "swap"
            );
            chain.emit(Event::Swap {
                pair,
                sender,
                amount0_in,
                amount1_in,
                amount0_out,
                amount1_out,
                to,
            });
            Ok(())
        })
    }

    /// Sends any balance above the reserves to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Locked`] on re-entry.
    pub fn skim(&mut self, pair: Address, to: Address) -> Result<(), DexError> {
        self.with_pair_lock(pair, |chain| {
            let ledger = chain.pair(&pair)?;
            let reserves = ledger.reserves();
            let (asset0, asset1) = (ledger.asset0(), ledger.asset1());
            let (balance0, balance1) = chain.pair_balances(&pair)?;
            let excess0 = balance0.checked_sub(&reserves.reserve0).unwrap_or(Amount::ZERO);
            let excess1 = balance1.checked_sub(&reserves.reserve1).unwrap_or(Amount::ZERO);
            if !excess0.is_zero() {
                let _credited = chain.move_asset(asset0, pair, to, excess0)?;
            }
            if !excess1.is_zero() {
                let _credited = chain.move_asset(asset1, pair, to, excess1)?;
            }
            debug!(pair = %pair, %excess0, %excess1, "skim");
            Ok(())
        })
    }

    /// Sets the reserves to the actual balances.
    ///
    /// # Errors
    ///
    /// - [`DexError::Locked`] on re-entry.
    /// - [`DexError::Overflow`] if a balance exceeds 112 bits.
    pub fn sync(&mut self, pair: Address) -> Result<(), DexError> {
        self.with_pair_lock(pair, |chain| {
            let (balance0, balance1) = chain.pair_balances(&pair)?;
            chain.write_reserves(pair, balance0, balance1)?;
            debug!(pair = %pair, reserve0 = %balance0, reserve1 = %balance1, "sync");
            Ok(())
        })
    }

    /// Approves `spender` over `owner`'s shares of `pair` with a signature.
    ///
    /// # Errors
    ///
    /// - [`DexError::ExpiredPermit`] if the deadline has passed.
    /// - [`DexError::InvalidSignature`] if the signature is not `owner`'s
    ///   over this approval and nonce.
    pub fn permit(
        &mut self,
        pair: Address,
        owner: Address,
        spender: Address,
        value: Amount,
        deadline: u64,
        signature: &PermitSignature,
    ) -> Result<(), DexError> {
        self.transact(|chain| {
            let now = chain.timestamp();
            chain
                .pair_mut(&pair)?
                .shares_mut()
                .permit(owner, spender, value, deadline, now, signature)?;
            chain.emit(Event::Approval {
                asset: pair,
                owner,
                spender,
                amount: value,
            });
            Ok(())
        })
    }

    fn with_pair_lock<T, F>(&mut self, pair: Address, op: F) -> Result<T, DexError>
    where
        F: FnOnce(&mut Self) -> Result<T, DexError>,
    {
        self.transact(|chain| {
            chain.pair_mut(&pair)?.lock()?;
            let out = op(chain)?;
            chain.pair_mut(&pair)?.unlock();
            Ok(out)
        })
    }

    fn pair_balances(&self, pair: &Address) -> Result<(Amount, Amount), DexError> {
        let ledger = self.pair(pair)?;
        Ok((
            self.balance_of(&ledger.asset0(), pair)?,
            self.balance_of(&ledger.asset1(), pair)?,
        ))
    }

    fn write_reserves(&mut self, pair: Address, balance0: Amount, balance1: Amount) -> Result<(), DexError> {
        let now = self.timestamp();
        self.pair_mut(&pair)?.update(balance0, balance1, now)?;
        self.emit(Event::Sync {
            pair,
            reserve0: balance0,
            reserve1: balance1,
        });
        Ok(())
    }

    /// Mints the protocol's cut of `sqrt(k)` growth to the factory's fee
    /// recipient.  Returns whether the fee is on.
    fn accrue_protocol_fee(&mut self, pair: Address) -> Result<bool, DexError> {
        let ledger = self.pair(&pair)?;
        let fee_to = self.factory(&ledger.factory())?.fee_to();
        let k_last = ledger.k_last();
        if fee_to.is_zero() {
            if !k_last.is_zero() {
                self.pair_mut(&pair)?.set_k_last(U256::zero());
            }
            return Ok(false);
        }
        let reserves = ledger.reserves();
        let owed = protocol_fee_shares(
            ledger.total_shares(),
            reserves.reserve0,
            reserves.reserve1,
            k_last,
            ledger.protocol_fee_denominator(),
        )?;
        if !owed.is_zero() {
            debug!(pair = %pair, fee_to = %fee_to, shares = %owed, "protocol fee accrued");
            self.mint_shares(pair, fee_to, owed)?;
        }
        Ok(true)
    }

    fn mint_shares(&mut self, pair: Address, to: Address, shares: Shares) -> Result<(), DexError> {
        self.pair_mut(&pair)?.shares_mut().mint(to, shares)?;
        self.emit(Event::Transfer {
            asset: pair,
            from: Address::ZERO,
            to,
            amount: shares.as_amount(),
        });
        Ok(())
    }

    fn burn_shares(&mut self, pair: Address, from: Address, shares: Shares) -> Result<(), DexError> {
        self.pair_mut(&pair)?.shares_mut().burn(from, shares)?;
        self.emit(Event::Transfer {
            asset: pair,
            from,
            to: Address::ZERO,
            amount: shares.as_amount(),
        });
        Ok(())
    }
}

fn deposited(balance: Amount, reserve: Amount) -> Result<Amount, DexError> {
    balance
        .checked_sub(&reserve)
        .ok_or(DexError::Underflow("balance below reserve"))
}

/// Input implied by a balance after `out` left a pair holding `reserve`.
fn paid_in(balance: Amount, reserve: Amount, out: Amount) -> Amount {
    let floor = reserve.checked_sub(&out).unwrap_or(Amount::ZERO);
    balance.checked_sub(&floor).unwrap_or(Amount::ZERO)
}
