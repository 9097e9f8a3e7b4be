//! Key types with secure memory handling.
//!
//! Key material is zeroized on drop and never printed, not even in debug
//! builds.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use zeroize::{Zeroize, ZeroizeOnDrop};

use keepsafe_common::{Error, Result};

/// Length of envelope keys in bytes (256-bit).
pub const KEY_LENGTH: usize = 32;

/// The symmetric key protecting all envelopes produced by a process.
///
/// Sourced from a base64-encoded configuration value and held in memory for
/// the process lifetime; never persisted, never rotated while running.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EnvelopeKey {
    key: [u8; KEY_LENGTH],
}

impl EnvelopeKey {
    /// Create an envelope key from raw bytes.
    pub fn from_bytes(key: [u8; KEY_LENGTH]) -> Self {
        Self { key }
    }

    /// Import a key from its base64 configuration form.
    ///
    /// The length is validated here, before any cipher construction, so
    /// that a misconfigured key produces an actionable error instead of an
    /// opaque failure from the primitive.
    ///
    /// # Errors
    /// - `Configuration` if the value is empty, not valid base64, or does
    ///   not decode to exactly [`KEY_LENGTH`] bytes
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let encoded = encoded.trim();
        if encoded.is_empty() {
            return Err(Error::Configuration(
                "encryption key is empty".to_string(),
            ));
        }

        let mut decoded = STANDARD.decode(encoded).map_err(|e| {
            Error::Configuration(format!("encryption key is not valid base64: {}", e))
        })?;

        if decoded.len() != KEY_LENGTH {
            decoded.zeroize();
            return Err(Error::Configuration(format!(
                "encryption key must decode to {} bytes, got {}",
                KEY_LENGTH,
                decoded.len()
            )));
        }

        let mut key = [0u8; KEY_LENGTH];
        key.copy_from_slice(&decoded);
        decoded.zeroize();
        Ok(Self { key })
    }

    /// Generate a random envelope key.
    pub fn generate() -> Self {
        use rand::RngCore;
        let mut key = [0u8; KEY_LENGTH];
        rand::rngs::OsRng.fill_bytes(&mut key);
        Self { key }
    }

    /// Get the key bytes.
    ///
    /// # Security
    /// The returned slice should be used immediately and not stored.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }

    /// Export the key in its base64 configuration form.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.key)
    }
}

impl fmt::Debug for EnvelopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnvelopeKey([REDACTED])")
    }
}
