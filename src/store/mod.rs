//! Key-value store contract for paste records.
//!
//! The service never looks inside the engine: it needs exact-key `get`,
//! `set`, and `delete`, nothing more. Any backend that offers those can be
//! handed to [`paste::app`](crate::paste::app).

mod fs;
mod memory;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::key::PasteKey;

pub use fs::FsStore;
pub use memory::MemoryStore;

/// A failure of the backing store itself, as opposed to a missing record.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Exact-key access to paste records.
///
/// Values are raw bytes. Every record this service writes is UTF-8 text,
/// but checking that on read is the caller's job.
///
/// Implementations must tolerate concurrent calls; per-key atomicity of a
/// single call is all the service relies on.
#[async_trait]
pub trait PasteStore: Send + Sync {
    /// Returns the record at `key`, or `None` if there is none.
    async fn get(&self, key: &PasteKey) -> StoreResult<Option<Bytes>>;

    /// Writes `value` at `key`, replacing any existing record.
    async fn set(&self, key: &PasteKey, value: Bytes) -> StoreResult<()>;

    /// Removes the record at `key`. Removing a missing record succeeds.
    async fn delete(&self, key: &PasteKey) -> StoreResult<()>;

    async fn exists(&self, key: &PasteKey) -> StoreResult<bool> {
        Ok(self.get(key).await?.is_some())
    }
}
