//! P-256 key agreement and SPKI public-key interchange.
//!
//! Browser clients generate their keys with WebCrypto, so everything here
//! speaks the same formats: ECDH over P-256 for agreement, SPKI
//! (SubjectPublicKeyInfo) DER for public keys on the wire, HKDF-SHA256 to
//! turn the raw shared secret into an AES-256-GCM key.
//!
//! A P-256 SPKI blob carries no usage attribute — ECDH and ECDSA public
//! keys share the same `id-ecPublicKey` encoding. The usage requested at
//! import time is therefore enforced by the [`ImportedPublicKey`] type, not
//! by the encoding, matching WebCrypto's `importKey` usages parameter.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hkdf::Hkdf;
use p256::{
    ecdh,
    ecdsa::VerifyingKey,
    pkcs8::{DecodePublicKey, EncodePublicKey},
    PublicKey, SecretKey,
};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use zeroize::{Zeroize, Zeroizing};

use crate::{aead::SymmetricKey, error::CryptoError, plaintext::Plaintext, signing};

/// Domain-separation label for ECDH-derived AES keys.
const ECDH_KDF_INFO: &[u8] = b"hashdrop-ecdh-aes256-v1";

// ── Key agreement ─────────────────────────────────────────────────────────────

/// ECDH/P-256 key pair used to derive shared AES keys with a peer.
/// The secret scalar is zeroized on drop.
pub struct EncryptionKeyPair {
    secret: SecretKey,
    public: PublicKey,
}

impl EncryptionKeyPair {
    pub fn generate() -> Result<Self, CryptoError> {
        let secret = SecretKey::random(&mut OsRng);
        let public = secret.public_key();
        Ok(Self { secret, public })
    }

    /// Rebuild a key pair from a stored 32-byte secret scalar.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let secret = SecretKey::from_slice(bytes)
            .map_err(|e| CryptoError::InvalidKey(format!("encryption secret key: {e}")))?;
        let public = secret.public_key();
        Ok(Self { secret, public })
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// The 32-byte secret scalar, for persistence. Zeroized on drop.
    pub fn secret_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.secret.to_bytes().to_vec())
    }

    /// Derive the shared AES-256-GCM key with a peer. Both sides derive the
    /// same key: ECDH(secret, their_public) expanded through HKDF-SHA256.
    pub fn diffie_hellman(&self, their_public: &PublicKey) -> Result<SymmetricKey, CryptoError> {
        let shared =
            ecdh::diffie_hellman(self.secret.to_nonzero_scalar(), their_public.as_affine());

        let hk = Hkdf::<Sha256>::new(None, shared.raw_secret_bytes().as_slice());
        let mut key_bytes = [0u8; 32];
        hk.expand(ECDH_KDF_INFO, &mut key_bytes)
            .map_err(|e| CryptoError::KeyDerivation(e.to_string()))?;

        let key = SymmetricKey::from_bytes(&key_bytes)?;
        key_bytes.zeroize();
        Ok(key)
    }
}

// ── SPKI interchange ──────────────────────────────────────────────────────────

/// SPKI DER bytes of a P-256 public key — the interchange format stored in
/// `user.public_key`, base64url-encoded (no padding).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpkiPublicKey(Vec<u8>);

impl SpkiPublicKey {
    pub fn from_der(der: Vec<u8>) -> Self {
        Self(der)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_b64(&self) -> String {
        URL_SAFE_NO_PAD.encode(&self.0)
    }

    pub fn from_b64(s: &str) -> Result<Self, CryptoError> {
        Ok(Self(URL_SAFE_NO_PAD.decode(s)?))
    }
}

/// Export a public key (agreement or verifying) as SPKI DER.
pub fn export_public_key<K: EncodePublicKey>(key: &K) -> Result<SpkiPublicKey, CryptoError> {
    let der = key.to_public_key_der().map_err(CryptoError::KeyExport)?;
    Ok(SpkiPublicKey(der.as_bytes().to_vec()))
}

/// What an imported public key may be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyUsage {
    /// ECDH key agreement (deriving shared AES keys).
    Agreement,
    /// ECDSA signature verification.
    Verify,
}

/// A public key imported from SPKI DER, restricted to the usage requested
/// at import time.
#[derive(Clone)]
pub enum ImportedPublicKey {
    Agreement(PublicKey),
    Verification(VerifyingKey),
}

/// Import a public key from SPKI DER, restricted to `usage`.
pub fn import_public_key(
    spki: &SpkiPublicKey,
    usage: KeyUsage,
) -> Result<ImportedPublicKey, CryptoError> {
    match usage {
        KeyUsage::Agreement => {
            let key =
                PublicKey::from_public_key_der(spki.as_bytes()).map_err(CryptoError::KeyImport)?;
            Ok(ImportedPublicKey::Agreement(key))
        }
        KeyUsage::Verify => {
            let key = VerifyingKey::from_public_key_der(spki.as_bytes())
                .map_err(CryptoError::KeyImport)?;
            Ok(ImportedPublicKey::Verification(key))
        }
    }
}

impl ImportedPublicKey {
    /// The agreement key, if imported with [`KeyUsage::Agreement`].
    pub fn agreement_key(&self) -> Result<&PublicKey, CryptoError> {
        match self {
            ImportedPublicKey::Agreement(key) => Ok(key),
            ImportedPublicKey::Verification(_) => Err(CryptoError::InvalidKey(
                "key was imported for verification, not key agreement".into(),
            )),
        }
    }

    /// Verify a signature with this key. Errors if the key was imported for
    /// key agreement; a mismatched signature is `Ok(false)`.
    pub fn verify<'a>(
        &self,
        signature: &[u8],
        data: impl Into<Plaintext<'a>>,
    ) -> Result<bool, CryptoError> {
        match self {
            ImportedPublicKey::Verification(key) => signing::verify(key, data, signature),
            ImportedPublicKey::Agreement(_) => Err(CryptoError::Verification(
                "key was imported for key agreement, not verification".into(),
            )),
        }
    }
}
