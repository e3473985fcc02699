//! hd_crypto — Hashdrop cryptographic primitives
//!
//! # Design principles
//! - NO custom crypto; all primitives come from audited RustCrypto crates.
//! - One fixed algorithm suite, the same one Hashdrop browser clients use
//!   via WebCrypto: AES-256-GCM, ECDSA/P-256/SHA-256, ECDH/P-256, SPKI DER
//!   for public-key interchange.
//! - Every operation is stateless and independently invokable. Failures
//!   surface immediately with the operation that caused them; there are no
//!   retries and no sentinel return values.
//!
//! # Module layout
//! - `aead`      — AES-256-GCM encrypt/decrypt (random 96-bit IV per call)
//! - `keys`      — ECDH key pairs, shared-key derivation, SPKI export/import
//! - `signing`   — ECDSA/P-256/SHA-256 sign/verify (raw r||s signatures)
//! - `hash`      — SHA-256 content digests for stored files
//! - `plaintext` — text-vs-bytes input coercion
//! - `error`     — unified error type

pub mod aead;
pub mod error;
pub mod hash;
pub mod keys;
pub mod plaintext;
pub mod signing;

pub use error::CryptoError;
pub use plaintext::Plaintext;
