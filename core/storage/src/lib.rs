//! Blob storage boundary for Keepsafe.
//!
//! Envelopes produced by the crypto layer are opaque byte sequences; the
//! store's only obligation is to persist and return them unmodified. Any
//! corruption is caught downstream by the envelope's authentication tag,
//! not here.

pub mod memory;
pub mod store;

pub use memory::MemoryStore;
pub use store::{BlobMetadata, BlobStore};
