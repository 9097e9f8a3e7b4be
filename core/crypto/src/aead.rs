//! Authenticated encryption using AES-256-GCM.
//!
//! AES-256-GCM provides both confidentiality and authenticity. The 12-byte
//! IV is generated fresh per call and prepended to the ciphertext, so every
//! envelope is self-contained: `IV || ciphertext || tag`.

use aes_gcm::{
    aead::{generic_array::GenericArray, Aead, AeadCore, KeyInit, OsRng},
    Aes256Gcm,
};

use keepsafe_common::{Error, Result};

use crate::keys::EnvelopeKey;

/// IV size for AES-GCM (12 bytes, the standard 96-bit nonce).
pub const IV_LENGTH: usize = 12;

/// Authentication tag size (16 bytes, appended by the cipher).
pub const TAG_LENGTH: usize = 16;

/// Fixed size overhead of an envelope over its plaintext.
pub const OVERHEAD: usize = IV_LENGTH + TAG_LENGTH;

/// Encrypt plaintext into a self-contained envelope.
///
/// # Postconditions
/// - Returns `IV || ciphertext || tag`
/// - The IV is randomly generated; two calls over the same plaintext
///   produce different envelopes
/// - The envelope length is plaintext length + [`OVERHEAD`]
///
/// # Errors
/// - Returns `Crypto` if the underlying cipher fails (not expected under
///   normal operation)
pub fn seal(key: &EnvelopeKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(GenericArray::from_slice(key.as_bytes()));
    let iv = Aes256Gcm::generate_nonce(&mut OsRng);

    // Empty AAD: the tag covers IV and ciphertext only.
    let ciphertext = cipher
        .encrypt(&iv, plaintext)
        .map_err(|e| Error::Crypto(format!("encryption failed: {}", e)))?;

    let mut envelope = Vec::with_capacity(IV_LENGTH + ciphertext.len());
    envelope.extend_from_slice(&iv);
    envelope.extend_from_slice(&ciphertext);

    Ok(envelope)
}

/// Decrypt an envelope, verifying its authentication tag.
///
/// # Postconditions
/// - Returns the original plaintext if and only if the envelope was
///   produced with the same key and is byte-for-byte unmodified
///
/// # Errors
/// - Returns `MalformedEnvelope` if the input is shorter than
///   [`IV_LENGTH`] bytes and so cannot contain an IV
/// - Returns `AuthenticationFailure` if tag verification fails; wrong key
///   and tampered data are deliberately indistinguishable, and no partial
///   plaintext is ever returned
pub fn open(key: &EnvelopeKey, envelope: &[u8]) -> Result<Vec<u8>> {
    if envelope.len() < IV_LENGTH {
        return Err(Error::MalformedEnvelope(format!(
            "envelope is {} bytes, too short to contain a {}-byte IV",
            envelope.len(),
            IV_LENGTH
        )));
    }

    let (iv, ciphertext) = envelope.split_at(IV_LENGTH);
    let cipher = Aes256Gcm::new(GenericArray::from_slice(key.as_bytes()));

    cipher
        .decrypt(GenericArray::from_slice(iv), ciphertext)
        .map_err(|_| Error::AuthenticationFailure)
}
