//! Common types used throughout Keepsafe.

use std::fmt;

/// A value crossing the encryption boundary.
///
/// Callers choose the variant once per call, and the cipher mirrors it on
/// the way back: `Text` in gives `Text` out (a base64 envelope when
/// encrypting, decoded UTF-8 when decrypting) and `Bytes` in gives `Bytes`
/// out (a raw envelope buffer, raw plaintext on the way back). This makes
/// the string-vs-binary decision explicit in the type instead of being
/// inferred from the value at runtime.
#[derive(Clone, PartialEq, Eq)]
pub enum Payload {
    /// UTF-8 text, stored as a base64 string (e.g. a journal entry body).
    Text(String),
    /// Opaque bytes, stored as a raw blob (e.g. file contents).
    Bytes(Vec<u8>),
}

impl Payload {
    /// Returns `true` for the `Text` variant.
    pub fn is_text(&self) -> bool {
        matches!(self, Payload::Text(_))
    }

    /// Length of the contained value in bytes (UTF-8 length for text).
    pub fn len(&self) -> usize {
        match self {
            Payload::Text(s) => s.len(),
            Payload::Bytes(b) => b.len(),
        }
    }

    /// Returns `true` if the contained value is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the payload, returning the text if this is `Text`.
    pub fn into_text(self) -> Option<String> {
        match self {
            Payload::Text(s) => Some(s),
            Payload::Bytes(_) => None,
        }
    }

    /// Consume the payload, returning the buffer if this is `Bytes`.
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Payload::Bytes(b) => Some(b),
            Payload::Text(_) => None,
        }
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Text(s)
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Text(s.to_string())
    }
}

impl From<Vec<u8>> for Payload {
    fn from(b: Vec<u8>) -> Self {
        Payload::Bytes(b)
    }
}

impl From<&[u8]> for Payload {
    fn from(b: &[u8]) -> Self {
        Payload::Bytes(b.to_vec())
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Payloads can hold plaintext; print the shape, never the content.
        match self {
            Payload::Text(s) => write!(f, "Payload::Text({} bytes)", s.len()),
            Payload::Bytes(b) => write!(f, "Payload::Bytes({} bytes)", b.len()),
        }
    }
}
