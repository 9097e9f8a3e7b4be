//! Projection between envelope bytes and their storage forms.
//!
//! Text payloads travel as standard padded base64 (the form a text column
//! preserves exactly); binary payloads travel as raw buffers. The alphabet
//! and padding must stay byte-compatible with existing stored data.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use keepsafe_common::{Error, Result};

/// Encode envelope bytes into the textual storage form.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode the textual storage form back into envelope bytes.
///
/// # Errors
/// - Returns `MalformedEnvelope` if the input is not valid base64
pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(encoded)
        .map_err(|e| Error::MalformedEnvelope(format!("invalid base64: {}", e)))
}

/// Interpret decrypted plaintext as UTF-8 text.
///
/// # Errors
/// - Returns `InvalidInput` if the bytes are not valid UTF-8. The envelope
///   authenticated correctly, so this means the caller asked for text back
///   from an envelope that was created from binary data.
pub fn into_text(plaintext: Vec<u8>) -> Result<String> {
    String::from_utf8(plaintext).map_err(|_| {
        Error::InvalidInput(
            "decrypted plaintext is not valid UTF-8; envelope was likely created from bytes"
                .to_string(),
        )
    })
}
