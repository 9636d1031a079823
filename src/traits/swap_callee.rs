//! Settlement callback for flash swaps.

use crate::chain::Chain;
use crate::domain::{Address, Amount};
use crate::error::DexError;

/// Receiver of a pair ledger's settlement callback.
///
/// When [`Chain::swap`] is called with non-empty `data`, the pair first
/// transfers the requested outputs to the recipient and then hands control
/// to the callee.  The callee may use the borrowed assets freely as long as
/// the pair holds enough by the time the callback returns for the
/// fee-adjusted constant-product check to pass.
///
/// The pair is locked for the duration of the callback: any attempt to
/// mint, burn, swap, skim or sync the same pair fails with
/// [`DexError::Locked`].  Other pairs and assets remain usable.
///
/// # Examples
///
/// ```
/// use pairdex::chain::Chain;
/// use pairdex::domain::{Address, Amount};
/// use pairdex::error::DexError;
/// use pairdex::traits::SwapCallee;
///
/// /// Pays a fixed amount of one asset back to the pair.
/// struct Repay {
///     me: Address,
///     pair: Address,
///     asset: Address,
///     amount: Amount,
/// }
///
/// impl SwapCallee for Repay {
///     fn on_swap(
///         &mut self,
///         chain: &mut Chain,
///         _sender: Address,
///         _amount0_out: Amount,
///         _amount1_out: Amount,
///         _data: &[u8],
///     ) -> Result<(), DexError> {
///         chain.transfer(self.asset, self.me, self.pair, self.amount).map(|_| ())
///     }
/// }
/// ```
pub trait SwapCallee {
    /// Called by the pair after optimistic transfers and before the
    /// invariant check.
    ///
    /// # Errors
    ///
    /// Any error aborts the whole swap; the host rolls back every effect.
    fn on_swap(
        &mut self,
        chain: &mut Chain,
        sender: Address,
        amount0_out: Amount,
        amount1_out: Amount,
        data: &[u8],
    ) -> Result<(), DexError>;
}
