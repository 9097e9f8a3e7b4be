//! Cryptographic envelope for Keepsafe.
//!
//! This module provides:
//! - A single process-wide symmetric key loaded lazily from configuration
//! - Authenticated encryption using AES-256-GCM
//! - A self-contained envelope format (`IV || ciphertext || tag`)
//! - Base64 projection for text payloads, raw buffers for binary payloads
//!
//! # Security Guarantees
//! - All key material is automatically zeroized on drop
//! - No plaintext or key material is ever logged
//! - Every envelope uses a fresh random IV; tag verification covers the
//!   envelope as a whole, so no partially valid envelope exists

pub mod aead;
pub mod codec;
pub mod envelope;
pub mod keys;
pub mod provider;

pub use envelope::{generate_key, EnvelopeCipher};
pub use keys::{EnvelopeKey, KEY_LENGTH};
pub use provider::{KeyProvider, KeySource, DEFAULT_KEY_VAR};
