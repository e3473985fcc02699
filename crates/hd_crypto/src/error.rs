use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    /// The OS RNG or key-generation backend failed.
    #[error("key generation failed: {0}")]
    Provider(String),

    #[error("encryption failed: {0}")]
    Encryption(String),

    /// Authentication-tag mismatch, wrong key/IV, or text-decoding failure.
    /// No partial plaintext is ever returned.
    #[error("decryption failed: {0}")]
    Decryption(String),

    #[error("signing failed")]
    Signing(#[source] p256::ecdsa::Error),

    /// The verify operation itself could not be performed (e.g. the key was
    /// imported for key agreement). A well-formed but mismatched signature
    /// is NOT an error — `verify` returns `Ok(false)` for that.
    #[error("verification could not be performed: {0}")]
    Verification(String),

    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    #[error("public key export failed")]
    KeyExport(#[source] p256::pkcs8::spki::Error),

    #[error("public key import failed")]
    KeyImport(#[source] p256::pkcs8::spki::Error),

    #[error("invalid key material: {0}")]
    InvalidKey(String),

    #[error("base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),
}
