//! In-process store.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use super::{PasteStore, StoreResult};
use crate::key::PasteKey;

/// A store that lives and dies with the process.
///
/// Useful for tests and throwaway deployments.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<Vec<u8>, Bytes>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl PasteStore for MemoryStore {
    async fn get(&self, key: &PasteKey) -> StoreResult<Option<Bytes>> {
        Ok(self.records.read().await.get(key.as_bytes()).cloned())
    }

    async fn set(&self, key: &PasteKey, value: Bytes) -> StoreResult<()> {
        self.records.write().await.insert(key.as_bytes().to_vec(), value);
        Ok(())
    }

    async fn delete(&self, key: &PasteKey) -> StoreResult<()> {
        self.records.write().await.remove(key.as_bytes());
        Ok(())
    }
}
