//! Pure pricing helpers shared by the router and by off-line callers.
//!
//! All products are taken in 256 bits and narrowed back with an overflow
//! check, so any pair of 112-bit reserves and 128-bit amounts is safe.

use crate::chain::Chain;
use crate::domain::{Address, Amount, AssetPair, FeeTier};
use crate::error::DexError;
use crate::factory::derive_pair_address;
use crate::math::U256;

/// Orders two assets canonically.
///
/// # Errors
///
/// - [`DexError::InvalidPair`] if `a == b`.
/// - [`DexError::ZeroAddress`] if the lower one is zero.
pub fn sort_assets(a: Address, b: Address) -> Result<(Address, Address), DexError> {
    let pair = AssetPair::new(a, b)?;
    Ok((pair.asset0(), pair.asset1()))
}

/// Address of the pair for `a` and `b` under `factory`, computed without
/// consulting the factory.
///
/// # Errors
///
/// Same as [`sort_assets`].
pub fn pair_for(factory: &Address, a: Address, b: Address) -> Result<Address, DexError> {
    Ok(derive_pair_address(factory, &AssetPair::new(a, b)?))
}

/// Amount of B equivalent to `amount_a` at the reserve ratio.
///
/// # Errors
///
/// - [`DexError::InsufficientAmount`] if `amount_a` is zero.
/// - [`DexError::InsufficientLiquidity`] if a reserve is zero.
pub fn quote(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount, DexError> {
    if amount_a.is_zero() {
        return Err(DexError::InsufficientAmount);
    }
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(DexError::InsufficientLiquidity);
    }
    let amount_b = amount_a.widen() * reserve_b.widen() / reserve_a.widen();
    Amount::try_from_wide(amount_b, "quote")
}

/// Largest output a swap of `amount_in` can take while keeping the
/// fee-adjusted product.
///
/// `amount_in·(10⁴−f)·r_out / (r_in·10⁴ + amount_in·(10⁴−f))`
///
/// # Errors
///
/// - [`DexError::InsufficientInputAmount`] if `amount_in` is zero.
/// - [`DexError::InsufficientLiquidity`] if a reserve is zero.
/// - [`DexError::Overflow`] if an intermediate product passes 256 bits,
///   which only happens for reserves far beyond 112 bits.
pub fn get_amount_out(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeTier,
) -> Result<Amount, DexError> {
    if amount_in.is_zero() {
        return Err(DexError::InsufficientInputAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(DexError::InsufficientLiquidity);
    }
    let overflow = DexError::Overflow("amount out");
    let with_fee = amount_in.widen() * U256::from(fee.input_multiplier());
    let numerator = with_fee
        .checked_mul(reserve_out.widen())
        .ok_or(overflow.clone())?;
    let denominator = (reserve_in.widen() * U256::from(FeeTier::SCALE))
        .checked_add(with_fee)
        .ok_or(overflow)?;
    Amount::try_from_wide(numerator / denominator, "amount out")
}

/// Smallest input that buys `amount_out`.
///
/// `r_in·amount_out·10⁴ / ((r_out − amount_out)·(10⁴−f)) + 1`
///
/// # Errors
///
/// - [`DexError::InsufficientOutputAmount`] if `amount_out` is zero.
/// - [`DexError::InsufficientLiquidity`] if a reserve is zero or
///   `amount_out` is not below `reserve_out`.
/// - [`DexError::Overflow`] if an intermediate product passes 256 bits or
///   the input does not fit in 128 bits.
pub fn get_amount_in(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeTier,
) -> Result<Amount, DexError> {
    if amount_out.is_zero() {
        return Err(DexError::InsufficientOutputAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() || amount_out >= reserve_out {
        return Err(DexError::InsufficientLiquidity);
    }
    let numerator = (reserve_in.widen() * amount_out.widen())
        .checked_mul(U256::from(FeeTier::SCALE))
        .ok_or(DexError::Overflow("amount in"))?;
    let remaining = reserve_out.widen() - amount_out.widen();
    let denominator = remaining * U256::from(fee.input_multiplier());
    if denominator.is_zero() {
        return Err(DexError::DivisionByZero);
    }
    let amount_in = (numerator / denominator)
        .checked_add(U256::one())
        .ok_or(DexError::Overflow("amount in"))?;
    Amount::try_from_wide(amount_in, "amount in")
}

/// Reserves of the `a`/`b` pair, ordered as the arguments.
///
/// # Errors
///
/// - [`DexError::InvalidPair`] or [`DexError::ZeroAddress`] for a bad pair.
/// - [`DexError::UnknownPair`] if the pair was never created.
pub fn get_reserves(
    chain: &Chain,
    factory: &Address,
    a: Address,
    b: Address,
) -> Result<(Amount, Amount), DexError> {
    let hop = Hop::resolve(chain, factory, a, b)?;
    Ok((hop.reserve_in, hop.reserve_out))
}

/// Amounts along `path` when `amount_in` enters at the first asset.
///
/// # Errors
///
/// - [`DexError::InvalidPath`] if `path` has fewer than two assets.
/// - Any error of [`get_amount_out`] or [`get_reserves`] for a hop.
pub fn get_amounts_out(
    chain: &Chain,
    factory: &Address,
    amount_in: Amount,
    path: &[Address],
) -> Result<Vec<Amount>, DexError> {
    if path.len() < 2 {
        return Err(DexError::InvalidPath);
    }
    let mut amounts = Vec::with_capacity(path.len());
    amounts.push(amount_in);
    let mut current = amount_in;
    for window in path.windows(2) {
        let &[input, output] = window else {
            return Err(DexError::InvalidPath);
        };
        let hop = Hop::resolve(chain, factory, input, output)?;
        current = get_amount_out(current, hop.reserve_in, hop.reserve_out, hop.fee)?;
        amounts.push(current);
    }
    Ok(amounts)
}

/// Amounts along `path` needed for `amount_out` to leave at the last
/// asset.
///
/// # Errors
///
/// - [`DexError::InvalidPath`] if `path` has fewer than two assets.
/// - Any error of [`get_amount_in`] or [`get_reserves`] for a hop.
pub fn get_amounts_in(
    chain: &Chain,
    factory: &Address,
    amount_out: Amount,
    path: &[Address],
) -> Result<Vec<Amount>, DexError> {
    if path.len() < 2 {
        return Err(DexError::InvalidPath);
    }
    let mut amounts = Vec::with_capacity(path.len());
    amounts.push(amount_out);
    let mut current = amount_out;
    for window in path.windows(2).rev() {
        let &[input, output] = window else {
            return Err(DexError::InvalidPath);
        };
        let hop = Hop::resolve(chain, factory, input, output)?;
        current = get_amount_in(current, hop.reserve_in, hop.reserve_out, hop.fee)?;
        amounts.push(current);
    }
    amounts.reverse();
    Ok(amounts)
}

/// One step of a path: the pair and its reserves seen from the input side.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Hop {
    pub(crate) pair: Address,
    pub(crate) reserve_in: Amount,
    pub(crate) reserve_out: Amount,
    pub(crate) fee: FeeTier,
}

impl Hop {
    pub(crate) fn resolve(
        chain: &Chain,
        factory: &Address,
        input: Address,
        output: Address,
    ) -> Result<Self, DexError> {
        let assets = AssetPair::new(input, output)?;
        let pair = derive_pair_address(factory, &assets);
        let ledger = chain.pair(&pair)?;
        let reserves = ledger.reserves();
        let (reserve_in, reserve_out) = if assets.is_first(&input) {
            (reserves.reserve0, reserves.reserve1)
        } else {
            (reserves.reserve1, reserves.reserve0)
        };
        Ok(Self {
            pair,
            reserve_in,
            reserve_out,
            fee: ledger.swap_fee(),
        })
    }
}
