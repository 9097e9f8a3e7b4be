//! In-memory blob store for testing.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use keepsafe_common::{Error, Result};

use crate::store::{BlobMetadata, BlobStore};

/// In-memory blob entry.
#[derive(Debug, Clone)]
struct Entry {
    data: Vec<u8>,
    metadata: BlobMetadata,
}

/// In-memory blob store.
///
/// Useful for testing and development. All data is stored in memory and
/// lost on drop.
pub struct MemoryStore {
    blobs: Arc<RwLock<HashMap<String, Entry>>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self {
            blobs: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlobStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn put(&self, path: &str, data: Vec<u8>) -> Result<BlobMetadata> {
        if path.is_empty() {
            return Err(Error::InvalidInput("Blob path cannot be empty".to_string()));
        }

        let metadata = BlobMetadata {
            id: Uuid::new_v4().to_string(),
            path: path.to_string(),
            size: data.len() as u64,
            modified: Utc::now(),
        };

        let entry = Entry {
            data,
            metadata: metadata.clone(),
        };

        self.blobs.write().unwrap().insert(path.to_string(), entry);

        Ok(metadata)
    }

    async fn get(&self, path: &str) -> Result<Vec<u8>> {
        let blobs = self.blobs.read().unwrap();
        match blobs.get(path) {
            Some(entry) => Ok(entry.data.clone()),
            None => Err(Error::NotFound(format!("Blob not found: {}", path))),
        }
    }

    async fn exists(&self, path: &str) -> Result<bool> {
        Ok(self.blobs.read().unwrap().contains_key(path))
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let mut blobs = self.blobs.write().unwrap();
        match blobs.remove(path) {
            Some(_) => Ok(()),
            None => Err(Error::NotFound(format!("Blob not found: {}", path))),
        }
    }

    async fn list(&self, prefix: &str) -> Result<Vec<BlobMetadata>> {
        let blobs = self.blobs.read().unwrap();
        let mut entries: Vec<BlobMetadata> = blobs
            .values()
            .filter(|entry| entry.metadata.path.starts_with(prefix))
            .map(|entry| entry.metadata.clone())
            .collect();
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }
}
