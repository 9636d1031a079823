//! Unified error types for the DEX core.
//!
//! All fallible operations across the crate return [`DexError`] as their
//! error type.  Every variant belongs to one [`ErrorKind`], which tells the
//! calling layer whether resubmitting with corrected input can succeed.
//!
//! No error is ever returned after a partial state change: the
//! [`Chain`](crate::chain::Chain) host restores its pre-call state whenever
//! an entry point fails.

use thiserror::Error;

use crate::domain::Address;

/// Broad classification of a [`DexError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Rejected input (zero amounts, identical assets, expired deadline,
    /// bad path).  Retrying with corrected input may succeed.
    Validation,
    /// The operation would be economically unsafe.  Retrying with the same
    /// parameters will fail again.
    Invariant,
    /// The caller lacks the authority for the operation.
    Authorization,
    /// A signed payload was rejected (expired, wrong signer, replayed).
    Signature,
}

/// Every failure the DEX core can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DexError {
    // -- validation ---------------------------------------------------------
    /// Both assets of a pair are the same.
    #[error("identical assets cannot form a pair")]
    InvalidPair,

    /// The zero address was supplied where an asset is required.
    #[error("zero address")]
    ZeroAddress,

    /// A ledger already exists for the canonical pair.
    #[error("pair already exists")]
    PairExists,

    /// An amount that must be non-zero is zero.
    #[error("insufficient amount")]
    InsufficientAmount,

    /// The optimal amount of the first asset is below its minimum.
    #[error("insufficient amount of asset A")]
    InsufficientAAmount,

    /// The optimal amount of the second asset is below its minimum.
    #[error("insufficient amount of asset B")]
    InsufficientBAmount,

    /// The required input exceeds the caller's maximum.
    #[error("excessive input amount")]
    ExcessiveInputAmount,

    /// The router deadline has passed.
    #[error("deadline expired")]
    Expired,

    /// A swap path is too short or does not start/end where required.
    #[error("invalid path")]
    InvalidPath,

    /// Swap recipient is one of the pair's own assets.
    #[error("invalid recipient")]
    InvalidTo,

    /// Settlement data was supplied without a callee to receive it.
    #[error("settlement data supplied without a callee")]
    MissingCallee,

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// No asset ledger is registered at the address.
    #[error("unknown asset {0}")]
    UnknownAsset(Address),

    /// No pair ledger is registered at the address.
    #[error("unknown pair {0}")]
    UnknownPair(Address),

    /// No factory is registered at the address.
    #[error("unknown factory {0}")]
    UnknownFactory(Address),

    /// An address is already occupied by another asset, pair or factory.
    #[error("address {0} already in use")]
    AddressInUse(Address),

    /// The clock cannot move backwards.
    #[error("timestamp {requested} precedes current time {current}")]
    TimeWentBackwards {
        /// Current host time.
        current: u64,
        /// Rejected time.
        requested: u64,
    },

    /// The caller does not hold enough of an asset.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// The spender's allowance is too small.
    #[error("insufficient allowance")]
    InsufficientAllowance,

    // -- invariant ----------------------------------------------------------
    /// A mint would create zero shares.
    #[error("insufficient liquidity minted")]
    InsufficientLiquidityMinted,

    /// A burn would return zero of an asset.
    #[error("insufficient liquidity burned")]
    InsufficientLiquidityBurned,

    /// A swap requested no output or a router swap produced too little.
    #[error("insufficient output amount")]
    InsufficientOutputAmount,

    /// Nothing was paid into the pair during a swap.
    #[error("insufficient input amount")]
    InsufficientInputAmount,

    /// Reserves cannot cover the request.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// The fee-adjusted constant product decreased.
    #[error("constant product invariant violated")]
    K,

    /// The pair ledger is already executing an operation.
    #[error("pair ledger is locked")]
    Locked,

    /// Arithmetic overflow (context attached).
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow (context attached).
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    // -- authorization ------------------------------------------------------
    /// The caller is not the fee-recipient setter.
    #[error("forbidden")]
    Forbidden,

    // -- signature ----------------------------------------------------------
    /// The permit deadline has passed.
    #[error("permit expired")]
    ExpiredPermit,

    /// The permit signature does not belong to the owner.
    #[error("invalid signature")]
    InvalidSignature,
}

impl DexError {
    /// Returns the [`ErrorKind`] of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPair
            | Self::ZeroAddress
            | Self::PairExists
            | Self::InsufficientAmount
            | Self::InsufficientAAmount
            | Self::InsufficientBAmount
            | Self::ExcessiveInputAmount
            | Self::Expired
            | Self::InvalidPath
            | Self::InvalidTo
            | Self::MissingCallee
            | Self::InvalidConfiguration(_)
            | Self::UnknownAsset(_)
            | Self::UnknownPair(_)
            | Self::UnknownFactory(_)
            | Self::AddressInUse(_)
            | Self::TimeWentBackwards { .. }
            | Self::InsufficientBalance
            | Self::InsufficientAllowance => ErrorKind::Validation,
            Self::InsufficientLiquidityMinted
            | Self::InsufficientLiquidityBurned
            | Self::InsufficientOutputAmount
            | Self::InsufficientInputAmount
            | Self::InsufficientLiquidity
            | Self::K
            | Self::Locked
            | Self::Overflow(_)
            | Self::Underflow(_)
            | Self::DivisionByZero => ErrorKind::Invariant,
            Self::Forbidden => ErrorKind::Authorization,
            Self::ExpiredPermit | Self::InvalidSignature => ErrorKind::Signature,
        }
    }

    /// Returns `true` if resubmitting with corrected input may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, DexError>;
