//! Pool share tokens and signature permits.

mod permit;
mod share_token;

pub use permit::{domain_separator, permit_digest, permit_typehash, PermitSignature};
pub use share_token::ShareToken;
