//! Deposit and withdrawal flows.

use tracing::debug;

use super::library::{get_reserves, pair_for, quote, sort_assets};
use super::requests::{
    AddLiquidity, AddLiquidityNative, PermitApproval, RemoveLiquidity, RemoveLiquidityNative,
};
use super::Router;
use crate::chain::Chain;
use crate::domain::{Address, Amount, Shares};
use crate::error::DexError;

impl Router {
    /// Deposits into a pair at its current ratio, creating the pair if it
    /// does not exist yet.
    ///
    /// Returns `(amount_a, amount_b, shares)`.
    ///
    /// # Errors
    ///
    /// - [`DexError::Expired`] past the deadline.
    /// - [`DexError::InsufficientAAmount`] / [`DexError::InsufficientBAmount`]
    ///   if the ratio pushes a side below its minimum.
    /// - Transfer errors if the router lacks allowance or the caller lacks
    ///   balance.
    pub fn add_liquidity(
        &self,
        chain: &mut Chain,
        caller: Address,
        request: &AddLiquidity,
    ) -> Result<(Amount, Amount, Shares), DexError> {
        chain.transact(|chain| {
            Self::ensure_live(chain, request.deadline)?;
            let (amount_a, amount_b) = self.deposit_amounts(chain, request)?;
            let pair = pair_for(&self.factory, request.asset_a, request.asset_b)?;
            let _credited =
                chain.transfer_from(request.asset_a, self.address, caller, pair, amount_a)?;
            let _credited =
                chain.transfer_from(request.asset_b, self.address, caller, pair, amount_b)?;
            let shares = chain.mint(pair, self.address, request.to)?;
            debug!(pair = %pair, %amount_a, %amount_b, %shares, "liquidity added");
            Ok((amount_a, amount_b, shares))
        })
    }

    /// [`add_liquidity`](Self::add_liquidity) against the wrapped-native
    /// asset, paying that side with `value` native coin.  Unused coin is
    /// refunded to the caller.
    ///
    /// Returns `(amount_asset, amount_native, shares)`.
    ///
    /// # Errors
    ///
    /// As [`add_liquidity`](Self::add_liquidity), plus
    /// [`DexError::InsufficientBalance`] if the caller cannot pay `value`.
    pub fn add_liquidity_native(
        &self,
        chain: &mut Chain,
        caller: Address,
        request: &AddLiquidityNative,
        value: Amount,
    ) -> Result<(Amount, Amount, Shares), DexError> {
        chain.transact(|chain| {
            Self::ensure_live(chain, request.deadline)?;
            self.collect_native(chain, caller, value)?;
            let (amount_asset, amount_native) = self.deposit_amounts(
                chain,
                &AddLiquidity {
                    asset_a: request.asset,
                    asset_b: self.wrapped_native,
                    amount_a_desired: request.amount_asset_desired,
                    amount_b_desired: value,
                    amount_a_min: request.amount_asset_min,
                    amount_b_min: request.amount_native_min,
                    to: request.to,
                    deadline: request.deadline,
                },
            )?;
            let pair = pair_for(&self.factory, request.asset, self.wrapped_native)?;
            let _credited =
                chain.transfer_from(request.asset, self.address, caller, pair, amount_asset)?;
            self.wrap_into(chain, pair, amount_native)?;
            let shares = chain.mint(pair, self.address, request.to)?;
            let unused = value
                .checked_sub(&amount_native)
                .ok_or(DexError::Underflow("native refund"))?;
            self.refund_native(chain, caller, unused)?;
            debug!(pair = %pair, %amount_asset, %amount_native, %shares, "native liquidity added");
            Ok((amount_asset, amount_native, shares))
        })
    }

    /// Burns `shares` of the pair and pays both assets to `to`.
    ///
    /// Returns `(amount_a, amount_b)`.
    ///
    /// # Errors
    ///
    /// - [`DexError::Expired`] past the deadline.
    /// - [`DexError::InsufficientAAmount`] / [`DexError::InsufficientBAmount`]
    ///   if a payout is below its minimum.
    /// - [`DexError::InsufficientAllowance`] if the router may not move the
    ///   caller's shares.
    pub fn remove_liquidity(
        &self,
        chain: &mut Chain,
        caller: Address,
        request: &RemoveLiquidity,
    ) -> Result<(Amount, Amount), DexError> {
        chain.transact(|chain| {
            Self::ensure_live(chain, request.deadline)?;
            self.withdraw_shares(chain, caller, request)
        })
    }

    /// [`remove_liquidity`](Self::remove_liquidity) from the
    /// wrapped-native pair, unwrapping that side to native coin.
    ///
    /// Returns `(amount_asset, amount_native)`.
    ///
    /// # Errors
    ///
    /// As [`remove_liquidity`](Self::remove_liquidity).
    pub fn remove_liquidity_native(
        &self,
        chain: &mut Chain,
        caller: Address,
        request: &RemoveLiquidityNative,
    ) -> Result<(Amount, Amount), DexError> {
        chain.transact(|chain| {
            Self::ensure_live(chain, request.deadline)?;
            self.withdraw_native(chain, caller, request)
        })
    }

    /// [`remove_liquidity`](Self::remove_liquidity) authorized by a permit
    /// signature instead of a prior approval.
    ///
    /// # Errors
    ///
    /// As [`remove_liquidity`](Self::remove_liquidity), plus
    /// [`DexError::InvalidSignature`] / [`DexError::ExpiredPermit`].
    pub fn remove_liquidity_with_permit(
        &self,
        chain: &mut Chain,
        caller: Address,
        request: &RemoveLiquidity,
        permit: &PermitApproval,
    ) -> Result<(Amount, Amount), DexError> {
        chain.transact(|chain| {
            Self::ensure_live(chain, request.deadline)?;
            let pair = pair_for(&self.factory, request.asset_a, request.asset_b)?;
            self.apply_permit(chain, caller, pair, request.shares, request.deadline, permit)?;
            self.withdraw_shares(chain, caller, request)
        })
    }

    /// [`remove_liquidity_native`](Self::remove_liquidity_native)
    /// authorized by a permit signature.
    ///
    /// # Errors
    ///
    /// As [`remove_liquidity_with_permit`](Self::remove_liquidity_with_permit).
    pub fn remove_liquidity_native_with_permit(
        &self,
        chain: &mut Chain,
        caller: Address,
        request: &RemoveLiquidityNative,
        permit: &PermitApproval,
    ) -> Result<(Amount, Amount), DexError> {
        chain.transact(|chain| {
            Self::ensure_live(chain, request.deadline)?;
            let pair = pair_for(&self.factory, request.asset, self.wrapped_native)?;
            self.apply_permit(chain, caller, pair, request.shares, request.deadline, permit)?;
            self.withdraw_native(chain, caller, request)
        })
    }

    /// Native withdrawal for assets that take a cut on transfer: forwards
    /// whatever of the asset actually reached the router.
    ///
    /// Returns the native amount paid out.
    ///
    /// # Errors
    ///
    /// As [`remove_liquidity_native`](Self::remove_liquidity_native).
    pub fn remove_liquidity_native_supporting_fee_on_transfer(
        &self,
        chain: &mut Chain,
        caller: Address,
        request: &RemoveLiquidityNative,
    ) -> Result<Amount, DexError> {
        chain.transact(|chain| {
            Self::ensure_live(chain, request.deadline)?;
            self.withdraw_native_measured(chain, caller, request)
        })
    }

    /// Permit-authorized form of
    /// [`remove_liquidity_native_supporting_fee_on_transfer`](Self::remove_liquidity_native_supporting_fee_on_transfer).
    ///
    /// # Errors
    ///
    /// As [`remove_liquidity_native_with_permit`](Self::remove_liquidity_native_with_permit).
    pub fn remove_liquidity_native_with_permit_supporting_fee_on_transfer(
        &self,
        chain: &mut Chain,
        caller: Address,
        request: &RemoveLiquidityNative,
        permit: &PermitApproval,
    ) -> Result<Amount, DexError> {
        chain.transact(|chain| {
            Self::ensure_live(chain, request.deadline)?;
            let pair = pair_for(&self.factory, request.asset, self.wrapped_native)?;
            self.apply_permit(chain, caller, pair, request.shares, request.deadline, permit)?;
            self.withdraw_native_measured(chain, caller, request)
        })
    }

    /// Amounts to deposit so the pair's ratio is kept, creating the pair
    /// on first use.
    fn deposit_amounts(&self, chain: &mut Chain, request: &AddLiquidity) -> Result<(Amount, Amount), DexError> {
        if chain
            .get_pair(&self.factory, &request.asset_a, &request.asset_b)?
            .is_none()
        {
            chain.create_pair(self.factory, request.asset_a, request.asset_b)?;
        }
        let (reserve_a, reserve_b) =
            get_reserves(chain, &self.factory, request.asset_a, request.asset_b)?;
        if reserve_a.is_zero() && reserve_b.is_zero() {
            return Ok((request.amount_a_desired, request.amount_b_desired));
        }
        let amount_b_optimal = quote(request.amount_a_desired, reserve_a, reserve_b)?;
        if amount_b_optimal <= request.amount_b_desired {
            if amount_b_optimal < request.amount_b_min {
                return Err(DexError::InsufficientBAmount);
            }
            return Ok((request.amount_a_desired, amount_b_optimal));
        }
        let amount_a_optimal = quote(request.amount_b_desired, reserve_b, reserve_a)?;
        if amount_a_optimal > request.amount_a_desired || amount_a_optimal < request.amount_a_min {
            return Err(DexError::InsufficientAAmount);
        }
        Ok((amount_a_optimal, request.amount_b_desired))
    }

    fn withdraw_shares(
        &self,
        chain: &mut Chain,
        caller: Address,
        request: &RemoveLiquidity,
    ) -> Result<(Amount, Amount), DexError> {
        let pair = pair_for(&self.factory, request.asset_a, request.asset_b)?;
        let _credited =
            chain.transfer_from(pair, self.address, caller, pair, request.shares.as_amount())?;
        let (amount0, amount1) = chain.burn(pair, self.address, request.to)?;
        let (asset0, _) = sort_assets(request.asset_a, request.asset_b)?;
        let (amount_a, amount_b) = if request.asset_a == asset0 {
            (amount0, amount1)
        } else {
            (amount1, amount0)
        };
        if amount_a < request.amount_a_min {
            return Err(DexError::InsufficientAAmount);
        }
        if amount_b < request.amount_b_min {
            return Err(DexError::InsufficientBAmount);
        }
        debug!(pair = %pair, %amount_a, %amount_b, shares = %request.shares, "liquidity removed");
        Ok((amount_a, amount_b))
    }

    /// Burns into the router, forwards the asset side and unwraps the
    /// native side.
    fn withdraw_native(
        &self,
        chain: &mut Chain,
        caller: Address,
        request: &RemoveLiquidityNative,
    ) -> Result<(Amount, Amount), DexError> {
        let (amount_asset, amount_native) =
            self.withdraw_shares(chain, caller, &self.via_router(request))?;
        let _credited = chain.transfer(request.asset, self.address, request.to, amount_asset)?;
        self.unwrap_to(chain, request.to, amount_native)?;
        Ok((amount_asset, amount_native))
    }

    fn withdraw_native_measured(
        &self,
        chain: &mut Chain,
        caller: Address,
        request: &RemoveLiquidityNative,
    ) -> Result<Amount, DexError> {
        let (_, amount_native) = self.withdraw_shares(chain, caller, &self.via_router(request))?;
        let received = chain.balance_of(&request.asset, &self.address)?;
        let _credited = chain.transfer(request.asset, self.address, request.to, received)?;
        self.unwrap_to(chain, request.to, amount_native)?;
        Ok(amount_native)
    }

    fn via_router(&self, request: &RemoveLiquidityNative) -> RemoveLiquidity {
        RemoveLiquidity {
            asset_a: request.asset,
            asset_b: self.wrapped_native,
            shares: request.shares,
            amount_a_min: request.amount_asset_min,
            amount_b_min: request.amount_native_min,
            to: self.address,
            deadline: request.deadline,
        }
    }

    fn apply_permit(
        &self,
        chain: &mut Chain,
        owner: Address,
        pair: Address,
        shares: Shares,
        deadline: u64,
        permit: &PermitApproval,
    ) -> Result<(), DexError> {
        let value = if permit.approve_max {
            Amount::MAX
        } else {
            shares.as_amount()
        };
        chain.permit(pair, owner, self.address, value, deadline, &permit.signature)
    }
}
