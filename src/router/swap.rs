//! Exact-in and exact-out swaps along multi-hop paths.
//!
//! Each hop's output is sent straight to the next pair, so intermediate
//! assets never pass through the caller or the router.

use tracing::debug;

use super::library::{get_amount_out, get_amounts_in, get_amounts_out, pair_for, Hop};
use super::requests::{ExactIn, ExactOut};
use super::Router;
use crate::chain::Chain;
use crate::domain::{Address, Amount, AssetPair};
use crate::error::DexError;

impl Router {
    /// Sells exactly `amount_in` of `path[0]` for as much of the last
    /// asset as the path yields.
    ///
    /// Returns the amount at every step of the path.
    ///
    /// # Errors
    ///
    /// - [`DexError::Expired`] past the deadline.
    /// - [`DexError::InvalidPath`] if the path has fewer than two assets.
    /// - [`DexError::InsufficientOutputAmount`] if the output is below
    ///   `amount_out_min`.
    pub fn swap_exact_tokens_for_tokens(
        &self,
        chain: &mut Chain,
        caller: Address,
        request: &ExactIn,
    ) -> Result<Vec<Amount>, DexError> {
        chain.transact(|chain| {
            Self::ensure_live(chain, request.deadline)?;
            let amounts = self.amounts_out_checked(chain, request)?;
            let (input, pair) = self.entry(&request.path)?;
            let _credited =
                chain.transfer_from(input, self.address, caller, pair, first(&amounts)?)?;
            self.swap_along(chain, &amounts, &request.path, request.to)?;
            Ok(amounts)
        })
    }

    /// Buys exactly `amount_out` of the last asset, spending at most
    /// `amount_in_max` of `path[0]`.
    ///
    /// # Errors
    ///
    /// - [`DexError::Expired`] past the deadline.
    /// - [`DexError::InvalidPath`] if the path has fewer than two assets.
    /// - [`DexError::ExcessiveInputAmount`] if the required input exceeds
    ///   `amount_in_max`.
    pub fn swap_tokens_for_exact_tokens(
        &self,
        chain: &mut Chain,
        caller: Address,
        request: &ExactOut,
    ) -> Result<Vec<Amount>, DexError> {
        chain.transact(|chain| {
            Self::ensure_live(chain, request.deadline)?;
            let amounts = self.amounts_in_checked(chain, request)?;
            let (input, pair) = self.entry(&request.path)?;
            let _credited =
                chain.transfer_from(input, self.address, caller, pair, first(&amounts)?)?;
            self.swap_along(chain, &amounts, &request.path, request.to)?;
            Ok(amounts)
        })
    }

    /// Sells exactly `amount_in` native coin; `path` must start at the
    /// wrapped-native asset.
    ///
    /// # Errors
    ///
    /// As [`swap_exact_tokens_for_tokens`](Self::swap_exact_tokens_for_tokens),
    /// plus [`DexError::InvalidPath`] if the path does not start at the
    /// wrapped-native asset.
    pub fn swap_exact_native_for_tokens(
        &self,
        chain: &mut Chain,
        caller: Address,
        request: &ExactIn,
    ) -> Result<Vec<Amount>, DexError> {
        chain.transact(|chain| {
            Self::ensure_live(chain, request.deadline)?;
            self.require_native_start(&request.path)?;
            let amounts = self.amounts_out_checked(chain, request)?;
            let (_, pair) = self.entry(&request.path)?;
            self.collect_native(chain, caller, request.amount_in)?;
            self.wrap_into(chain, pair, first(&amounts)?)?;
            self.swap_along(chain, &amounts, &request.path, request.to)?;
            Ok(amounts)
        })
    }

    /// Buys exactly `amount_out` native coin; `path` must end at the
    /// wrapped-native asset.
    ///
    /// # Errors
    ///
    /// As [`swap_tokens_for_exact_tokens`](Self::swap_tokens_for_exact_tokens),
    /// plus [`DexError::InvalidPath`] if the path does not end at the
    /// wrapped-native asset.
    pub fn swap_tokens_for_exact_native(
        &self,
        chain: &mut Chain,
        caller: Address,
        request: &ExactOut,
    ) -> Result<Vec<Amount>, DexError> {
        chain.transact(|chain| {
            Self::ensure_live(chain, request.deadline)?;
            self.require_native_end(&request.path)?;
            let amounts = self.amounts_in_checked(chain, request)?;
            let (input, pair) = self.entry(&request.path)?;
            let _credited =
                chain.transfer_from(input, self.address, caller, pair, first(&amounts)?)?;
            self.swap_along(chain, &amounts, &request.path, self.address)?;
            self.unwrap_to(chain, request.to, last(&amounts)?)?;
            Ok(amounts)
        })
    }

    /// Sells exactly `amount_in` of `path[0]` for native coin; `path` must
    /// end at the wrapped-native asset.
    ///
    /// # Errors
    ///
    /// As [`swap_exact_tokens_for_tokens`](Self::swap_exact_tokens_for_tokens),
    /// plus [`DexError::InvalidPath`] if the path does not end at the
    /// wrapped-native asset.
    pub fn swap_exact_tokens_for_native(
        &self,
        chain: &mut Chain,
        caller: Address,
        request: &ExactIn,
    ) -> Result<Vec<Amount>, DexError> {
        chain.transact(|chain| {
            Self::ensure_live(chain, request.deadline)?;
            self.require_native_end(&request.path)?;
            let amounts = self.amounts_out_checked(chain, request)?;
            let (input, pair) = self.entry(&request.path)?;
            let _credited =
                chain.transfer_from(input, self.address, caller, pair, first(&amounts)?)?;
            self.swap_along(chain, &amounts, &request.path, self.address)?;
            self.unwrap_to(chain, request.to, last(&amounts)?)?;
            Ok(amounts)
        })
    }

    /// Buys exactly `amount_out` of the last asset with native coin,
    /// sending `amount_in_max` and getting the unused part back.
    ///
    /// # Errors
    ///
    /// As [`swap_tokens_for_exact_tokens`](Self::swap_tokens_for_exact_tokens),
    /// plus [`DexError::InvalidPath`] if the path does not start at the
    /// wrapped-native asset.
    pub fn swap_native_for_exact_tokens(
        &self,
        chain: &mut Chain,
        caller: Address,
        request: &ExactOut,
    ) -> Result<Vec<Amount>, DexError> {
        chain.transact(|chain| {
            Self::ensure_live(chain, request.deadline)?;
            self.require_native_start(&request.path)?;
            let amounts = self.amounts_in_checked(chain, request)?;
            let (_, pair) = self.entry(&request.path)?;
            let spent = first(&amounts)?;
            self.collect_native(chain, caller, request.amount_in_max)?;
            self.wrap_into(chain, pair, spent)?;
            self.swap_along(chain, &amounts, &request.path, request.to)?;
            let unused = request
                .amount_in_max
                .checked_sub(&spent)
                .ok_or(DexError::ExcessiveInputAmount)?;
            self.refund_native(chain, caller, unused)?;
            Ok(amounts)
        })
    }

    /// Exact-in swap for assets that take a cut on transfer.  Each hop
    /// prices what actually arrived at the pair, and the minimum is checked
    /// against what actually reached `to`.
    ///
    /// # Errors
    ///
    /// - [`DexError::Expired`] past the deadline.
    /// - [`DexError::InvalidPath`] if the path has fewer than two assets.
    /// - [`DexError::InsufficientOutputAmount`] if `to` received less than
    ///   `amount_out_min`.
    pub fn swap_exact_tokens_for_tokens_supporting_fee_on_transfer(
        &self,
        chain: &mut Chain,
        caller: Address,
        request: &ExactIn,
    ) -> Result<Amount, DexError> {
        chain.transact(|chain| {
            Self::ensure_live(chain, request.deadline)?;
            let (input, pair) = self.entry(&request.path)?;
            let _credited =
                chain.transfer_from(input, self.address, caller, pair, request.amount_in)?;
            let output = last(&request.path)?;
            self.swap_measured(chain, &request.path, output, request.to, request.amount_out_min)
        })
    }

    /// Native-in form of
    /// [`swap_exact_tokens_for_tokens_supporting_fee_on_transfer`](Self::swap_exact_tokens_for_tokens_supporting_fee_on_transfer).
    ///
    /// # Errors
    ///
    /// As the exact-in form, plus [`DexError::InvalidPath`] if the path
    /// does not start at the wrapped-native asset.
    pub fn swap_exact_native_for_tokens_supporting_fee_on_transfer(
        &self,
        chain: &mut Chain,
        caller: Address,
        request: &ExactIn,
    ) -> Result<Amount, DexError> {
        chain.transact(|chain| {
            Self::ensure_live(chain, request.deadline)?;
            self.require_native_start(&request.path)?;
            let (_, pair) = self.entry(&request.path)?;
            self.collect_native(chain, caller, request.amount_in)?;
            self.wrap_into(chain, pair, request.amount_in)?;
            let output = last(&request.path)?;
            self.swap_measured(chain, &request.path, output, request.to, request.amount_out_min)
        })
    }

    /// Native-out form of
    /// [`swap_exact_tokens_for_tokens_supporting_fee_on_transfer`](Self::swap_exact_tokens_for_tokens_supporting_fee_on_transfer).
    ///
    /// # Errors
    ///
    /// As the exact-in form, plus [`DexError::InvalidPath`] if the path
    /// does not end at the wrapped-native asset.
    pub fn swap_exact_tokens_for_native_supporting_fee_on_transfer(
        &self,
        chain: &mut Chain,
        caller: Address,
        request: &ExactIn,
    ) -> Result<Amount, DexError> {
        chain.transact(|chain| {
            Self::ensure_live(chain, request.deadline)?;
            self.require_native_end(&request.path)?;
            let (input, pair) = self.entry(&request.path)?;
            let _credited =
                chain.transfer_from(input, self.address, caller, pair, request.amount_in)?;
            let received = self.swap_measured(
                chain,
                &request.path,
                self.wrapped_native,
                self.address,
                request.amount_out_min,
            )?;
            self.unwrap_to(chain, request.to, received)?;
            Ok(received)
        })
    }

    fn amounts_out_checked(&self, chain: &Chain, request: &ExactIn) -> Result<Vec<Amount>, DexError> {
        let amounts = get_amounts_out(chain, &self.factory, request.amount_in, &request.path)?;
        if last(&amounts)? < request.amount_out_min {
            return Err(DexError::InsufficientOutputAmount);
        }
        Ok(amounts)
    }

    fn amounts_in_checked(&self, chain: &Chain, request: &ExactOut) -> Result<Vec<Amount>, DexError> {
        let amounts = get_amounts_in(chain, &self.factory, request.amount_out, &request.path)?;
        if first(&amounts)? > request.amount_in_max {
            return Err(DexError::ExcessiveInputAmount);
        }
        Ok(amounts)
    }

    /// First asset of `path` and the pair it enters.
    fn entry(&self, path: &[Address]) -> Result<(Address, Address), DexError> {
        let [input, next, ..] = *path else {
            return Err(DexError::InvalidPath);
        };
        Ok((input, pair_for(&self.factory, input, next)?))
    }

    fn require_native_start(&self, path: &[Address]) -> Result<(), DexError> {
        if path.first() != Some(&self.wrapped_native) {
            return Err(DexError::InvalidPath);
        }
        Ok(())
    }

    fn require_native_end(&self, path: &[Address]) -> Result<(), DexError> {
        if path.last() != Some(&self.wrapped_native) {
            return Err(DexError::InvalidPath);
        }
        Ok(())
    }

    /// Where the output of hop `index` goes: the next pair, or `to` after
    /// the last hop.
    fn hop_recipient(&self, path: &[Address], index: usize, to: Address) -> Result<Address, DexError> {
        match (path.get(index + 1), path.get(index + 2)) {
            (Some(&output), Some(&next)) => pair_for(&self.factory, output, next),
            _ => Ok(to),
        }
    }

    /// Executes precomputed `amounts` along `path`; the input must already
    /// sit in the first pair.
    fn swap_along(
        &self,
        chain: &mut Chain,
        amounts: &[Amount],
        path: &[Address],
        to: Address,
    ) -> Result<(), DexError> {
        for (index, (window, &amount_out)) in path.windows(2).zip(amounts.iter().skip(1)).enumerate() {
            let &[input, output] = window else {
                return Err(DexError::InvalidPath);
            };
            let assets = AssetPair::new(input, output)?;
            let (amount0_out, amount1_out) = if assets.is_first(&input) {
                (Amount::ZERO, amount_out)
            } else {
                (amount_out, Amount::ZERO)
            };
            let pair = pair_for(&self.factory, input, output)?;
            let recipient = self.hop_recipient(path, index, to)?;
            chain.swap(pair, self.address, amount0_out, amount1_out, recipient, &[], None)?;
            debug!(pair = %pair, hop = index, %amount_out, "routed hop");
        }
        Ok(())
    }

    /// Executes `path` pricing each hop from the balance that actually
    /// reached the pair.  Returns how much of `output` reached `to`.
    fn swap_measured(
        &self,
        chain: &mut Chain,
        path: &[Address],
        output: Address,
        to: Address,
        amount_out_min: Amount,
    ) -> Result<Amount, DexError> {
        let before = chain.balance_of(&output, &to)?;
        for (index, window) in path.windows(2).enumerate() {
            let &[input, next] = window else {
                return Err(DexError::InvalidPath);
            };
            let hop = Hop::resolve(chain, &self.factory, input, next)?;
            let arrived = chain
                .balance_of(&input, &hop.pair)?
                .checked_sub(&hop.reserve_in)
                .ok_or(DexError::InsufficientInputAmount)?;
            let amount_out = get_amount_out(arrived, hop.reserve_in, hop.reserve_out, hop.fee)?;
            let (amount0_out, amount1_out) = if AssetPair::new(input, next)?.is_first(&input) {
                (Amount::ZERO, amount_out)
            } else {
                (amount_out, Amount::ZERO)
            };
            let recipient = self.hop_recipient(path, index, to)?;
            chain.swap(hop.pair, self.address, amount0_out, amount1_out, recipient, &[], None)?;
        }
        let received = chain
            .balance_of(&output, &to)?
            .checked_sub(&before)
            .ok_or(DexError::InsufficientOutputAmount)?;
        if received < amount_out_min {
            return Err(DexError::InsufficientOutputAmount);
        }
        Ok(received)
    }
}

fn first(amounts: &[Amount]) -> Result<Amount, DexError> {
    amounts.first().copied().ok_or(DexError::InvalidPath)
}

fn last<T: Copy>(items: &[T]) -> Result<T, DexError> {
    items.last().copied().ok_or(DexError::InvalidPath)
}
