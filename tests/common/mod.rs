//! Shared fakes and helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use quickpaste::paste::{self, AppState};
use quickpaste::store::{MemoryStore, PasteStore, StoreError, StoreResult};
use quickpaste::{PasteKey, Response, Router};

/// A store whose engine is unreachable.
#[derive(Default)]
pub struct FailingStore {
    pub calls: AtomicUsize,
}

#[async_trait]
impl PasteStore for FailingStore {
    async fn get(&self, _key: &PasteKey) -> StoreResult<Option<Bytes>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn set(&self, _key: &PasteKey, _value: Bytes) -> StoreResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn delete(&self, _key: &PasteKey) -> StoreResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

/// A store that reads fine but fails every delete.
#[derive(Default)]
pub struct ReadOnlyStore {
    pub inner: MemoryStore,
}

#[async_trait]
impl PasteStore for ReadOnlyStore {
    async fn get(&self, key: &PasteKey) -> StoreResult<Option<Bytes>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &PasteKey, value: Bytes) -> StoreResult<()> {
        self.inner.set(key, value).await
    }

    async fn delete(&self, _key: &PasteKey) -> StoreResult<()> {
        Err(StoreError::Io(std::io::Error::other("read-only filesystem")))
    }
}

pub fn memory_app() -> (Arc<MemoryStore>, Router<AppState>) {
    let store = Arc::new(MemoryStore::new());
    let app = paste::app(store.clone());
    (store, app)
}

pub async fn send(app: &Router<AppState>, method: &str, path: &str, body: &str) -> Response {
    app.dispatch(method, path, Bytes::from(body.to_owned())).await
}

pub fn body_text(res: &Response) -> &str {
    std::str::from_utf8(res.body()).unwrap()
}

/// Creates a paste and returns its identifier.
pub async fn create(app: &Router<AppState>, text: &str) -> String {
    let res = send(app, "POST", "/", text).await;
    assert_eq!(res.status_code(), quickpaste::Status::Created);
    body_text(&res).to_owned()
}
