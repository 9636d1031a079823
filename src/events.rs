//! Events emitted by the host.
//!
//! Every state change an off-line observer may care about is recorded as an
//! [`Event`] in the [`Chain`](crate::chain::Chain) event log, in execution
//! order.  Events of a failed transaction are discarded with the rest of its
//! effects.

use serde::{Deserialize, Serialize};

use crate::domain::{Address, Amount};

/// A single log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// A factory created a pair ledger.
    PairCreated {
        /// Emitting factory.
        factory: Address,
        /// Lower asset.
        asset0: Address,
        /// Higher asset.
        asset1: Address,
        /// Derived pair address.
        pair: Address,
        /// Registry length after insertion.
        index: usize,
    },
    /// Shares were minted against deposited reserves.
    Mint {
        pair: Address,
        sender: Address,
        amount0: Amount,
        amount1: Amount,
    },
    /// Shares were burned and reserves paid out.
    Burn {
        pair: Address,
        sender: Address,
        amount0: Amount,
        amount1: Amount,
        to: Address,
    },
    /// A swap settled.
    Swap {
        pair: Address,
        sender: Address,
        amount0_in: Amount,
        amount1_in: Amount,
        amount0_out: Amount,
        amount1_out: Amount,
        to: Address,
    },
    /// Reserves were updated.
    Sync {
        pair: Address,
        reserve0: Amount,
        reserve1: Amount,
    },
    /// Units of an asset or share token moved.  Mints come from and burns go
    /// to the zero address.
    Transfer {
        asset: Address,
        from: Address,
        to: Address,
        amount: Amount,
    },
    /// An allowance was set.
    Approval {
        asset: Address,
        owner: Address,
        spender: Address,
        amount: Amount,
    },
    /// Native coin was wrapped.
    Deposit {
        asset: Address,
        owner: Address,
        amount: Amount,
    },
    /// Wrapped native coin was unwrapped.
    Withdrawal {
        asset: Address,
        owner: Address,
        amount: Amount,
    },
    /// The protocol-fee recipient changed.
    FeeToUpdated { factory: Address, fee_to: Address },
    /// The protocol-fee setter changed.
    FeeToSetterUpdated {
        factory: Address,
        fee_to_setter: Address,
    },
}

impl Event {
    /// Short name of the event kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PairCreated { .. } => "PairCreated",
            Self::Mint { .. } => "Mint",
            Self::Burn { .. } => "Burn",
            Self::Swap { .. } => "Swap",
            Self::Sync { .. } => "Sync",
            Self::Transfer { .. } => "Transfer",
            Self::Approval { .. } => "Approval",
            Self::Deposit { .. } => "Deposit",
            Self::Withdrawal { .. } => "Withdrawal",
            Self::FeeToUpdated { .. } => "FeeToUpdated",
            Self::FeeToSetterUpdated { .. } => "FeeToSetterUpdated",
        }
    }
}
