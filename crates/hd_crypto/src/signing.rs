//! ECDSA/P-256/SHA-256 signatures.
//!
//! Signatures are raw 64-byte r||s, the format WebCrypto emits, so
//! browser-produced signatures verify here unchanged and vice versa.

use p256::ecdsa::{
    signature::{Signer, Verifier},
    Signature, SigningKey, VerifyingKey,
};
use rand::rngs::OsRng;
use zeroize::Zeroizing;

use crate::{error::CryptoError, plaintext::Plaintext};

/// ECDSA/P-256 signing key pair. The secret scalar is zeroized on drop.
pub struct SigningKeyPair {
    signing_key: SigningKey,
}

impl SigningKeyPair {
    pub fn generate() -> Result<Self, CryptoError> {
        Ok(Self {
            signing_key: SigningKey::random(&mut OsRng),
        })
    }

    /// Rebuild a key pair from a stored 32-byte secret scalar.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let signing_key = SigningKey::from_slice(bytes)
            .map_err(|e| CryptoError::InvalidKey(format!("signing secret key: {e}")))?;
        Ok(Self { signing_key })
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        *self.signing_key.verifying_key()
    }

    /// The 32-byte secret scalar, for persistence. Zeroized on drop.
    pub fn secret_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.signing_key.to_bytes().to_vec())
    }

    /// Sign text or bytes. The message is digested with SHA-256; the output
    /// is a 64-byte r||s signature.
    pub fn sign<'a>(&self, data: impl Into<Plaintext<'a>>) -> Result<Vec<u8>, CryptoError> {
        let signature: Signature = self
            .signing_key
            .try_sign(data.into().as_bytes())
            .map_err(CryptoError::Signing)?;
        Ok(signature.to_bytes().to_vec())
    }
}

/// Verify a 64-byte r||s signature over `data`.
///
/// Malformed or mismatched signatures return `Ok(false)` — they are an
/// expected outcome of verification, not a failure of it.
pub fn verify<'a>(
    key: &VerifyingKey,
    data: impl Into<Plaintext<'a>>,
    signature: &[u8],
) -> Result<bool, CryptoError> {
    let signature = match Signature::from_slice(signature) {
        Ok(sig) => sig,
        Err(_) => return Ok(false),
    };
    Ok(key.verify(data.into().as_bytes(), &signature).is_ok())
}
