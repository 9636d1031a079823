//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use pairdex::prelude::*;
//! ```

// Domain types
pub use crate::domain::{Address, Amount, AssetPair, BasisPoints, FeeTier, Rounding, Shares};

// Host, ledgers and flows
pub use crate::assets::{AssetBox, FeeOnTransferAsset, StandardAsset, WrappedNative};
pub use crate::chain::Chain;
pub use crate::factory::PairFactory;
pub use crate::pair::{PairLedger, Reserves};
pub use crate::router::{
    get_amount_in, get_amount_out, quote, AddLiquidity, AddLiquidityNative, ExactIn, ExactOut,
    RemoveLiquidity, RemoveLiquidityNative, Router,
};
pub use crate::shares::PermitSignature;

// Traits
pub use crate::math::CheckedArithmetic;
pub use crate::traits::{AssetLedger, SwapCallee};

// Configuration, events and errors
pub use crate::config::DexConfig;
pub use crate::error::{DexError, ErrorKind, Result};
pub use crate::events::Event;
