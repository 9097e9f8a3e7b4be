//! Common types shared across Keepsafe modules.
//!
//! This crate provides the workspace-wide error type and the payload
//! representation used at the encryption boundary.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::Payload;
