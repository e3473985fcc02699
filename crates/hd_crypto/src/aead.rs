//! AES-256-GCM authenticated encryption.
//!
//! Key: 32 bytes.  IV: 12 bytes, freshly random per call.  Tag: 16 bytes,
//! appended to the ciphertext.
//!
//! The IV is returned alongside the ciphertext and must be stored or
//! transmitted with it. It is not secret, but it MUST NOT repeat under the
//! same key — nonce reuse under GCM breaks both confidentiality and
//! authenticity.

use aes_gcm::{
    aead::{Aead, AeadCore, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use zeroize::{ZeroizeOnDrop, Zeroizing};

use crate::{error::CryptoError, plaintext::Plaintext};

pub const KEY_LEN: usize = 32;
pub const IV_LEN: usize = 12;

/// 32-byte AES-256-GCM key. Zeroized on drop.
#[derive(ZeroizeOnDrop)]
pub struct SymmetricKey([u8; KEY_LEN]);

impl SymmetricKey {
    /// Generate a fresh random key from the OS RNG.
    pub fn generate() -> Result<Self, CryptoError> {
        let mut key = [0u8; KEY_LEN];
        OsRng
            .try_fill_bytes(&mut key)
            .map_err(|e| CryptoError::Provider(e.to_string()))?;
        Ok(Self(key))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != KEY_LEN {
            return Err(CryptoError::InvalidKey(format!(
                "symmetric key must be {KEY_LEN} bytes, got {}",
                bytes.len()
            )));
        }
        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

/// Output of [`encrypt`]: ciphertext (tag appended) plus the IV that must
/// accompany it to [`decrypt`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Encrypted {
    pub ciphertext: Vec<u8>,
    pub iv: [u8; IV_LEN],
}

/// Encrypt text or bytes under `key`, generating a fresh random 12-byte IV.
pub fn encrypt<'a>(
    data: impl Into<Plaintext<'a>>,
    key: &SymmetricKey,
) -> Result<Encrypted, CryptoError> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| CryptoError::Encryption(e.to_string()))?;

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, data.into().as_bytes())
        .map_err(|e| CryptoError::Encryption(e.to_string()))?;

    let mut iv = [0u8; IV_LEN];
    iv.copy_from_slice(nonce.as_slice());
    Ok(Encrypted { ciphertext, iv })
}

/// Decrypt with the exact IV produced at encryption time.
/// Authentication failure yields [`CryptoError::Decryption`] and no
/// plaintext, partial or otherwise.
pub fn decrypt(
    ciphertext: &[u8],
    key: &SymmetricKey,
    iv: &[u8; IV_LEN],
) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| CryptoError::Decryption(e.to_string()))?;

    let plaintext = cipher.decrypt(Nonce::from_slice(iv), ciphertext).map_err(|_| {
        CryptoError::Decryption(
            "authentication tag mismatch (tampered ciphertext, wrong key, or wrong IV)".into(),
        )
    })?;

    Ok(Zeroizing::new(plaintext))
}

/// Decrypt and decode as UTF-8 text (the common case for Hashdrop payloads).
pub fn decrypt_text(
    ciphertext: &[u8],
    key: &SymmetricKey,
    iv: &[u8; IV_LEN],
) -> Result<String, CryptoError> {
    let plaintext = decrypt(ciphertext, key, iv)?;
    std::str::from_utf8(&plaintext)
        .map(str::to_owned)
        .map_err(|e| CryptoError::Decryption(format!("plaintext is not valid UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_world_roundtrip() {
        let key = SymmetricKey::generate().unwrap();
        let enc = encrypt("Hello, World!", &key).unwrap();
        let text = decrypt_text(&enc.ciphertext, &key, &enc.iv).unwrap();
        assert_eq!(text, "Hello, World!");
    }

    #[test]
    fn byte_roundtrip() {
        let key = SymmetricKey::generate().unwrap();
        let data = [0u8, 255, 7, 42, 128];
        let enc = encrypt(&data, &key).unwrap();
        let plaintext = decrypt(&enc.ciphertext, &key, &enc.iv).unwrap();
        assert_eq!(plaintext.as_slice(), &data);
    }

    #[test]
    fn fresh_iv_every_call() {
        let key = SymmetricKey::generate().unwrap();
        let a = encrypt("same plaintext", &key).unwrap();
        let b = encrypt("same plaintext", &key).unwrap();
        assert_ne!(a.iv, b.iv, "two encryptions must never share an IV");
        assert_ne!(a.ciphertext, b.ciphertext);
    }

    #[test]
    fn tampered_ciphertext_rejected() {
        let key = SymmetricKey::generate().unwrap();
        let enc = encrypt("sensitive", &key).unwrap();

        // Flip one bit in every position, including the appended tag.
        for i in 0..enc.ciphertext.len() {
            let mut tampered = enc.ciphertext.clone();
            tampered[i] ^= 0x01;
            assert!(
                matches!(
                    decrypt(&tampered, &key, &enc.iv),
                    Err(CryptoError::Decryption(_))
                ),
                "bit flip at byte {i} must fail authentication"
            );
        }
    }

    #[test]
    fn wrong_key_rejected() {
        let key = SymmetricKey::generate().unwrap();
        let other = SymmetricKey::generate().unwrap();
        let enc = encrypt("secret", &key).unwrap();
        assert!(decrypt(&enc.ciphertext, &other, &enc.iv).is_err());
    }

    #[test]
    fn wrong_iv_rejected() {
        let key = SymmetricKey::generate().unwrap();
        let enc = encrypt("secret", &key).unwrap();
        let mut iv = enc.iv;
        iv[0] ^= 0xFF;
        assert!(decrypt(&enc.ciphertext, &key, &iv).is_err());
    }

    #[test]
    fn non_utf8_plaintext_fails_text_decode() {
        let key = SymmetricKey::generate().unwrap();
        let enc = encrypt(&[0xFFu8, 0xFE, 0xFD], &key).unwrap();
        assert!(matches!(
            decrypt_text(&enc.ciphertext, &key, &enc.iv),
            Err(CryptoError::Decryption(_))
        ));
        // The raw bytes are still recoverable.
        assert_eq!(
            decrypt(&enc.ciphertext, &key, &enc.iv).unwrap().as_slice(),
            &[0xFF, 0xFE, 0xFD]
        );
    }

    #[test]
    fn key_from_bytes_checks_length() {
        assert!(SymmetricKey::from_bytes(&[0u8; 16]).is_err());
        assert!(SymmetricKey::from_bytes(&[0u8; 32]).is_ok());
    }
}
