//! Protocol parameters shared by a factory and every pair it creates.

use serde::{Deserialize, Serialize};

use crate::domain::{BasisPoints, FeeTier, Shares};
use crate::error::DexError;

/// Default number of shares locked to the zero address on first mint.
pub const DEFAULT_MINIMUM_LIQUIDITY: u128 = 1_000;

/// Default inverse share of invariant growth paid to `fee_to` (1/4).
pub const DEFAULT_PROTOCOL_FEE_DENOMINATOR: u32 = 4;

/// Default chain id mixed into permit domain separators.
pub const DEFAULT_CHAIN_ID: u64 = 31_337;

/// Protocol parameters of a DEX deployment.
///
/// A factory copies its `DexConfig` into every pair ledger it creates, so
/// all pairs of one factory share the same swap fee and minimum liquidity.
///
/// # Defaults
///
/// | Field | Default |
/// |-------|---------|
/// | `swap_fee` | 30 bp |
/// | `minimum_liquidity` | 1000 |
/// | `protocol_fee_denominator` | 4 |
/// | `share_name` | `"Pair LPs"` |
/// | `share_symbol` | `"PAIR-LP"` |
/// | `share_decimals` | 18 |
/// | `chain_id` | 31337 |
///
/// # Validation
///
/// - The swap fee must be strictly below 100%.
/// - The minimum liquidity must be non-zero.
/// - The protocol-fee denominator must be at least 2.
///
/// # Examples
///
/// ```
/// use pairdex::config::DexConfig;
///
/// let Ok(config) = DexConfig::from_json_str(r#"{"swap_fee": 20}"#) else { unreachable!() };
/// assert_eq!(config.swap_fee().basis_points().get(), 20);
/// assert_eq!(config.minimum_liquidity().get(), 1_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DexConfig {
    swap_fee: FeeTier,
    minimum_liquidity: u128,
    protocol_fee_denominator: u32,
    share_name: String,
    share_symbol: String,
    share_decimals: u8,
    chain_id: u64,
}

impl Default for DexConfig {
    fn default() -> Self {
        Self {
            swap_fee: FeeTier::default(),
            minimum_liquidity: DEFAULT_MINIMUM_LIQUIDITY,
            protocol_fee_denominator: DEFAULT_PROTOCOL_FEE_DENOMINATOR,
            share_name: "Pair LPs".to_owned(),
            share_symbol: "PAIR-LP".to_owned(),
            share_decimals: 18,
            chain_id: DEFAULT_CHAIN_ID,
        }
    }
}

impl DexConfig {
    /// Creates a validated configuration with default metadata.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidConfiguration`] if a parameter is out of range.
    pub fn new(
        swap_fee: FeeTier,
        minimum_liquidity: u128,
        protocol_fee_denominator: u32,
    ) -> Result<Self, DexError> {
        let config = Self {
            swap_fee,
            minimum_liquidity,
            protocol_fee_denominator,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON configuration.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidConfiguration`] if the document is
    /// malformed or a parameter is out of range.
    pub fn from_json_str(json: &str) -> Result<Self, DexError> {
        let config: Self = serde_json::from_str(json).map_err(|err| {
            tracing::debug!(%err, "rejecting malformed configuration");
            DexError::InvalidConfiguration("malformed json")
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidConfiguration`] naming the offending field.
    pub fn validate(&self) -> Result<(), DexError> {
        if !self.swap_fee.is_valid() {
            return Err(DexError::InvalidConfiguration(
                "swap fee must be below 100%",
            ));
        }
        if self.minimum_liquidity == 0 {
            return Err(DexError::InvalidConfiguration(
                "minimum liquidity must be non-zero",
            ));
        }
        if self.protocol_fee_denominator < 2 {
            return Err(DexError::InvalidConfiguration(
                "protocol fee denominator must be at least 2",
            ));
        }
        Ok(())
    }

    /// Replaces the share-token metadata.
    #[must_use]
    pub fn with_share_metadata(mut self, name: &str, symbol: &str, decimals: u8) -> Self {
        self.share_name = name.to_owned();
        self.share_symbol = symbol.to_owned();
        self.share_decimals = decimals;
        self
    }

    /// Replaces the chain id used in permit domain separators.
    #[must_use]
    pub const fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Swap fee retained by pairs.
    #[must_use]
    pub const fn swap_fee(&self) -> FeeTier {
        self.swap_fee
    }

    /// Shares locked to the zero address on first mint.
    pub const fn minimum_liquidity(&self) -> Shares {
        Shares::new(self.minimum_liquidity)
    }

    /// `d` in the protocol's `1/d` share of invariant growth.
    #[must_use]
    pub const fn protocol_fee_denominator(&self) -> u32 {
        self.protocol_fee_denominator
    }

    /// Protocol share as basis points of growth, for display.
    #[must_use]
    pub const fn protocol_fee_share(&self) -> BasisPoints {
        match crate::domain::BPS_SCALE.checked_div(self.protocol_fee_denominator) {
            Some(bps) => BasisPoints::new(bps),
            None => BasisPoints::ZERO,
        }
    }

    /// Share-token name.
    #[must_use]
    pub fn share_name(&self) -> &str {
        &self.share_name
    }

    /// Share-token symbol.
    #[must_use]
    pub fn share_symbol(&self) -> &str {
        &self.share_symbol
    }

    /// Share-token decimals.
    #[must_use]
    pub const fn share_decimals(&self) -> u8 {
        self.share_decimals
    }

    /// Chain id.
    #[must_use]
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }
}
