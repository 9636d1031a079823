//! Signed approvals for share tokens.
//!
//! A permit lets a share holder approve a spender with an off-line
//! signature.  The signed message is a domain-separated digest:
//!
//! ```text
//! digest = keccak256(0x19 ‖ 0x01 ‖ DOMAIN_SEPARATOR ‖
//!          keccak256(PERMIT_TYPEHASH ‖ owner ‖ spender ‖ value ‖ nonce ‖ deadline))
//! DOMAIN_SEPARATOR = keccak256(DOMAIN_TYPEHASH ‖ keccak256(name) ‖ keccak256("1") ‖
//!                    chain_id ‖ share_token_address)
//! ```
//!
//! Numbers are encoded as 32-byte big-endian words and addresses as their
//! raw 32 bytes.  Signatures are ed25519; the signing account is
//! `keccak256(public_key)`, so a signature only authorizes the owner whose
//! address its key hashes to.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};

use crate::domain::{Address, Amount};
use crate::error::DexError;
use crate::math::{keccak256, keccak256_concat};

const DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

const PERMIT_TYPE: &str =
    "Permit(address owner,address spender,uint256 value,uint256 nonce,uint256 deadline)";

const DOMAIN_VERSION: &str = "1";

/// Hash of the permit type string.
#[must_use]
pub fn permit_typehash() -> [u8; 32] {
    keccak256(PERMIT_TYPE.as_bytes())
}

/// Domain separator binding permits to one share token on one chain.
#[must_use]
pub fn domain_separator(name: &str, chain_id: u64, verifying_ledger: &Address) -> [u8; 32] {
    keccak256_concat(&[
        &keccak256(DOMAIN_TYPE.as_bytes()),
        &keccak256(name.as_bytes()),
        &keccak256(DOMAIN_VERSION.as_bytes()),
        &word(u128::from(chain_id)),
        verifying_ledger.as_bytes(),
    ])
}

/// Digest a permit signature must cover.
#[must_use]
pub fn permit_digest(
    domain_separator: &[u8; 32],
    owner: &Address,
    spender: &Address,
    value: Amount,
    nonce: u64,
    deadline: u64,
) -> [u8; 32] {
    let struct_hash = keccak256_concat(&[
        &permit_typehash(),
        owner.as_bytes(),
        spender.as_bytes(),
        &word(value.get()),
        &word(u128::from(nonce)),
        &word(u128::from(deadline)),
    ]);
    keccak256_concat(&[&[0x19, 0x01], domain_separator, &struct_hash])
}

fn word(value: u128) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[16..].copy_from_slice(&value.to_be_bytes());
    out
}

/// An ed25519 signature over a permit digest together with the signer's
/// public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermitSignature {
    public_key: [u8; 32],
    signature: [u8; 64],
}

impl PermitSignature {
    /// Signs `digest` with `key`.
    #[must_use]
    pub fn sign(key: &SigningKey, digest: &[u8; 32]) -> Self {
        Self {
            public_key: key.verifying_key().to_bytes(),
            signature: key.sign(digest).to_bytes(),
        }
    }

    /// Reassembles a signature received from elsewhere.
    #[must_use]
    pub const fn from_parts(public_key: [u8; 32], signature: [u8; 64]) -> Self {
        Self {
            public_key,
            signature,
        }
    }

    /// Account controlled by the signing key.
    #[must_use]
    pub fn signer(&self) -> Address {
        Address::from_public_key(&self.public_key)
    }

    /// Checks that `owner` produced this signature over `digest`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidSignature`] if the key does not belong to
    /// `owner`, is malformed, or the signature does not verify.
    pub fn verify(&self, owner: &Address, digest: &[u8; 32]) -> Result<(), DexError> {
        if owner.is_zero() || self.signer() != *owner {
            return Err(DexError::InvalidSignature);
        }
        let key =
            VerifyingKey::from_bytes(&self.public_key).map_err(|_| DexError::InvalidSignature)?;
        let signature = Signature::from_bytes(&self.signature);
        key.verify(digest, &signature)
            .map_err(|_| DexError::InvalidSignature)
    }
}
