//! Deployment configuration.
//!
//! [`DexConfig`] carries the protocol parameters a factory stamps onto every
//! pair it creates.  It is plain data: serde-serializable, validated on
//! construction and on JSON load.

mod dex_config;

pub use dex_config::{
    DexConfig, DEFAULT_CHAIN_ID, DEFAULT_MINIMUM_LIQUIDITY, DEFAULT_PROTOCOL_FEE_DENOMINATOR,
};
