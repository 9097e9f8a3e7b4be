//! Blob store trait definition.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use keepsafe_common::Result;

/// Metadata for a stored blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlobMetadata {
    /// Unique identifier for the blob (store-specific).
    pub id: String,
    /// Full path of the blob within the store.
    pub path: String,
    /// Size in bytes as stored (i.e. the envelope size, not the plaintext).
    pub size: u64,
    /// Last modification time.
    pub modified: DateTime<Utc>,
}

/// Key-value blob store addressed by path.
///
/// Stores hold already-encrypted envelopes and must preserve them
/// byte-exactly; they never see plaintext. Implementations handle their
/// own authentication and rate limiting.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Get the store name (e.g. "memory", "s3").
    fn name(&self) -> &str;

    /// Persist a blob at the given path, replacing any existing one.
    ///
    /// # Postconditions
    /// - A later `get` for the same path returns exactly `data`
    ///
    /// # Errors
    /// - Network/I/O errors
    async fn put(&self, path: &str, data: Vec<u8>) -> Result<BlobMetadata>;

    /// Fetch the blob at the given path.
    ///
    /// # Errors
    /// - `NotFound` if no blob exists at the path
    async fn get(&self, path: &str) -> Result<Vec<u8>>;

    /// Check whether a blob exists at the path.
    async fn exists(&self, path: &str) -> Result<bool>;

    /// Delete the blob at the path.
    ///
    /// # Errors
    /// - `NotFound` if no blob exists at the path
    async fn delete(&self, path: &str) -> Result<()>;

    /// List metadata for all blobs whose path starts with `prefix`.
    async fn list(&self, prefix: &str) -> Result<Vec<BlobMetadata>>;
}
