//! Protocol fee accrual.
//!
//! When a factory has a fee recipient, `1/d` of the growth in `sqrt(k)`
//! since the last liquidity event is minted to it as new shares right
//! before the next mint or burn:
//!
//! ```text
//! fee_shares = S · (√k − √k_last) / (√k · (d − 1) + √k_last)
//! ```

use crate::domain::{Amount, Shares};
use crate::error::DexError;
use crate::math::{isqrt, mul_wide, U256};

/// Shares owed to the protocol for growth from `k_last` to the current
/// reserves.
///
/// Returns [`Shares::ZERO`] when `k_last` is zero or `k` did not grow.
///
/// # Errors
///
/// - [`DexError::InvalidConfiguration`] if `denominator < 2`.
/// - [`DexError::Overflow`] if the result exceeds 128 bits.
pub fn protocol_fee_shares(
    total: Shares,
    reserve0: Amount,
    reserve1: Amount,
    k_last: U256,
    denominator: u32,
) -> Result<Shares, DexError> {
    if k_last.is_zero() {
        return Ok(Shares::ZERO);
    }
    let weight = denominator
        .checked_sub(1)
        .filter(|w| *w > 0)
        .ok_or(DexError::InvalidConfiguration("protocol fee denominator"))?;
    let root_k = isqrt(mul_wide(reserve0.get(), reserve1.get()));
    let root_k_last = isqrt(k_last);
    if root_k <= root_k_last {
        return Ok(Shares::ZERO);
    }
    let numerator = U256::from(total.get())
        .checked_mul(root_k - root_k_last)
        .ok_or(DexError::Overflow("protocol fee numerator"))?;
    let divisor = root_k
        .checked_mul(U256::from(weight))
        .and_then(|v| v.checked_add(root_k_last))
        .ok_or(DexError::Overflow("protocol fee denominator"))?;
    let shares = Amount::try_from_wide(numerator / divisor, "protocol fee shares")?;
    Ok(Shares::from_amount(shares))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const E18: u128 = 1_000_000_000_000_000_000;

    #[test]
    fn off_when_k_last_zero() {
        let Ok(s) = protocol_fee_shares(
            Shares::new(E18),
            Amount::new(2 * E18),
            Amount::new(2 * E18),
            U256::zero(),
            4,
        ) else {
            panic!("fee");
        };
        assert!(s.is_zero());
    }

    #[test]
    fn nothing_without_growth() {
        let k = mul_wide(E18, E18);
        let Ok(s) = protocol_fee_shares(Shares::new(E18), Amount::new(E18), Amount::new(E18), k, 4)
        else {
            panic!("fee");
        };
        assert!(s.is_zero());
    }

    #[test]
    fn quarter_of_growth() {
        // sqrt(k) grows 100 -> 200 with 100 shares outstanding:
        // 100 * 100 / (200 * 3 + 100) = 14
        let Ok(s) = protocol_fee_shares(
            Shares::new(100),
            Amount::new(200),
            Amount::new(200),
            U256::from(10_000u32),
            4,
        ) else {
            panic!("fee");
        };
        assert_eq!(s, Shares::new(14));
    }

    #[test]
    fn degenerate_denominator_rejected() {
        assert_eq!(
            protocol_fee_shares(Shares::new(1), Amount::new(4), Amount::new(4), U256::one(), 1),
            Err(DexError::InvalidConfiguration("protocol fee denominator"))
        );
    }
}
