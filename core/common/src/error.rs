//! Common error types for Keepsafe.

use thiserror::Error;

/// Top-level error type for Keepsafe operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Key material in configuration is missing or malformed.
    ///
    /// Unrecoverable for the process: the caller must not fall back to an
    /// unencrypted path or a default key.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Key loading failed during an encrypt or decrypt call.
    #[error("Encryption key unavailable: {0}")]
    KeyUnavailable(String),

    /// Decrypt input is structurally invalid (too short, bad base64).
    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// Authentication tag verification failed.
    ///
    /// Deliberately carries no detail: a tampered envelope and a wrong key
    /// must be indistinguishable to the caller.
    #[error("Authentication failed")]
    AuthenticationFailure,

    /// Unexpected cryptographic engine failure.
    #[error("Cryptographic error: {0}")]
    Crypto(String),

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Storage operation failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias using the common Error.
pub type Result<T> = std::result::Result<T, Error>;
