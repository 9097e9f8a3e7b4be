//! Lazy, memoized loading of the process-wide envelope key.
//!
//! The provider replaces a module-level singleton: each provider owns its
//! own private cache and can be injected where needed, which keeps tests
//! and multi-key embeddings possible while production code shares one
//! instance.

use std::fmt;

use once_cell::sync::OnceCell;
use tracing::debug;

use keepsafe_common::{Error, Result};

use crate::keys::EnvelopeKey;

/// Default environment variable holding the base64-encoded key.
pub const DEFAULT_KEY_VAR: &str = "KEEPSAFE_ENCRYPTION_KEY";

/// Where a provider reads its base64 key material from.
#[derive(Clone)]
pub enum KeySource {
    /// A named environment variable, read at first use.
    Env(String),
    /// An in-memory base64 value (tests, embedding applications).
    Literal(String),
}

impl fmt::Debug for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The literal variant holds key material.
        match self {
            KeySource::Env(name) => write!(f, "KeySource::Env({})", name),
            KeySource::Literal(_) => write!(f, "KeySource::Literal([REDACTED])"),
        }
    }
}

/// Resolves and caches the single active envelope key.
///
/// The key is imported at most once per provider; concurrent first calls
/// are serialized by the cell, and the cached key is immutable afterwards.
/// Construction never touches the source, so a misconfigured key surfaces
/// on first use (matching the original deployment) unless the caller opts
/// into fail-fast startup via [`preload`](Self::preload).
#[derive(Debug)]
pub struct KeyProvider {
    source: KeySource,
    cache: OnceCell<EnvelopeKey>,
}

impl KeyProvider {
    /// Create a provider over an explicit source.
    pub fn new(source: KeySource) -> Self {
        Self {
            source,
            cache: OnceCell::new(),
        }
    }

    /// Provider reading [`DEFAULT_KEY_VAR`] from the environment.
    pub fn from_env() -> Self {
        Self::new(KeySource::Env(DEFAULT_KEY_VAR.to_string()))
    }

    /// Provider reading a named environment variable.
    pub fn from_env_var(name: impl Into<String>) -> Self {
        Self::new(KeySource::Env(name.into()))
    }

    /// Provider over an in-memory base64 value.
    pub fn from_base64(encoded: impl Into<String>) -> Self {
        Self::new(KeySource::Literal(encoded.into()))
    }

    /// Get the active key, importing it on first call.
    ///
    /// # Errors
    /// - Returns `Configuration` if the source is absent, empty, not valid
    ///   base64, or does not decode to a 256-bit key
    pub fn key(&self) -> Result<&EnvelopeKey> {
        self.cache.get_or_try_init(|| {
            let key = self.load()?;
            debug!(source = ?self.source, "envelope key imported");
            Ok(key)
        })
    }

    /// Validate and cache the key eagerly, for fail-fast startup.
    ///
    /// # Errors
    /// - Same as [`key`](Self::key)
    pub fn preload(&self) -> Result<()> {
        self.key().map(|_| ())
    }

    fn load(&self) -> Result<EnvelopeKey> {
        match &self.source {
            KeySource::Env(name) => {
                let value = std::env::var(name).map_err(|_| {
                    Error::Configuration(format!("{} is not set in the environment", name))
                })?;
                EnvelopeKey::from_base64(&value)
            }
            KeySource::Literal(encoded) => EnvelopeKey::from_base64(encoded),
        }
    }
}
