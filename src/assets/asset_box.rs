//! Enum dispatch wrapper for all external asset kinds.

use super::{FeeOnTransferAsset, StandardAsset, WrappedNative};
use crate::domain::{Address, Amount};
use crate::error::DexError;
use crate::traits::AssetLedger;

/// Closed set of asset ledgers the host can store.
///
/// `AssetBox` implements [`AssetLedger`] by delegating to the inner ledger
/// through `match`, so the host keeps assets of different kinds in one map
/// without trait objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetBox {
    /// Plain fungible asset.
    Standard(StandardAsset),
    /// Asset that burns a cut of every transfer.
    FeeOnTransfer(FeeOnTransferAsset),
    /// Wrapped native coin.
    WrappedNative(WrappedNative),
}

macro_rules! delegate {
    ($self:ident, $method:ident ( $($arg:expr),* )) => {
        match $self {
            AssetBox::Standard(a) => a.$method($($arg),*),
            AssetBox::FeeOnTransfer(a) => a.$method($($arg),*),
            AssetBox::WrappedNative(a) => a.$method($($arg),*),
        }
    };
}

impl AssetBox {
    /// Returns the wrapped-native ledger, if this is one.
    pub fn as_wrapped_native_mut(&mut self) -> Option<&mut WrappedNative> {
        match self {
            Self::WrappedNative(w) => Some(w),
            _ => None,
        }
    }

    /// Returns `true` for the wrapped-native variant.
    #[must_use]
    pub const fn is_wrapped_native(&self) -> bool {
        matches!(self, Self::WrappedNative(_))
    }
}

impl AssetLedger for AssetBox {
    fn address(&self) -> Address {
        delegate!(self, address())
    }

    fn total_supply(&self) -> Amount {
        delegate!(self, total_supply())
    }

    fn balance_of(&self, owner: &Address) -> Amount {
        delegate!(self, balance_of(owner))
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        delegate!(self, allowance(owner, spender))
    }

    fn transfer(&mut self, from: Address, to: Address, amount: Amount) -> Result<Amount, DexError> {
        delegate!(self, transfer(from, to, amount))
    }

    fn approve(&mut self, owner: Address, spender: Address, amount: Amount) -> Result<(), DexError> {
        delegate!(self, approve(owner, spender, amount))
    }

    fn transfer_from(
        &mut self,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<Amount, DexError> {
        delegate!(self, transfer_from(spender, from, to, amount))
    }
}

impl From<StandardAsset> for AssetBox {
    fn from(asset: StandardAsset) -> Self {
        Self::Standard(asset)
    }
}

impl From<FeeOnTransferAsset> for AssetBox {
    fn from(asset: FeeOnTransferAsset) -> Self {
        Self::FeeOnTransfer(asset)
    }
}

impl From<WrappedNative> for AssetBox {
    fn from(asset: WrappedNative) -> Self {
        Self::WrappedNative(asset)
    }
}
