//! Local filesystem store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::instrument;

use super::{PasteStore, StoreResult};
use crate::key::PasteKey;

const EXTENSION: &str = "paste";

/// One file per paste under a root directory.
///
/// File names are the lowercase hex of the key bytes. Wire identifiers are
/// case-sensitive, so naming files after them would alias distinct keys on
/// case-insensitive filesystems.
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub async fn open(root: impl AsRef<Path>) -> StoreResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, key: &PasteKey) -> PathBuf {
        self.root.join(format!("{}.{EXTENSION}", hex::encode(key.as_bytes())))
    }

    fn temp_path(&self, key: &PasteKey) -> PathBuf {
        self.root.join(format!(
            ".{}.tmp.{:016x}",
            hex::encode(key.as_bytes()),
            rand::random::<u64>()
        ))
    }
}

#[async_trait]
impl PasteStore for FsStore {
    #[instrument(skip(self), fields(backend = "fs"))]
    async fn get(&self, key: &PasteKey) -> StoreResult<Option<Bytes>> {
        match fs::read(self.record_path(key)).await {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self, value), fields(backend = "fs", size = value.len()))]
    async fn set(&self, key: &PasteKey, value: Bytes) -> StoreResult<()> {
        let path = self.record_path(key);

        // Write to a unique temp file, fsync, then rename so readers never
        // see a partial record. Any failure after the temp file exists
        // removes it.
        let temp_path = self.temp_path(key);
        let mut file = fs::File::create(&temp_path).await?;
        let written = async {
            file.write_all(&value).await?;
            file.sync_all().await?;
            drop(file);
            fs::rename(&temp_path, &path).await
        }
        .await;

        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }
        Ok(())
    }

    #[instrument(skip(self), fields(backend = "fs"))]
    async fn delete(&self, key: &PasteKey) -> StoreResult<()> {
        match fs::remove_file(self.record_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let key = PasteKey::generate();

        let store = FsStore::open(dir.path()).await.unwrap();
        store.set(&key, Bytes::from_static(b"persisted")).await.unwrap();
        drop(store);

        let store = FsStore::open(dir.path()).await.unwrap();
        assert_eq!(store.get(&key).await.unwrap(), Some(Bytes::from_static(b"persisted")));
    }

    #[tokio::test]
    async fn missing_record_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::open(dir.path()).await.unwrap();
        let key = PasteKey::generate();

        assert_eq!(store.get(&key).await.unwrap(), None);
        store.delete(&key).await.unwrap();
    }

    #[tokio::test]
    async fn delete_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::open(dir.path()).await.unwrap();
        let key = PasteKey::generate();

        store.set(&key, Bytes::from_static(b"bye")).await.unwrap();
        assert!(store.record_path(&key).exists());

        store.delete(&key).await.unwrap();
        assert!(!store.record_path(&key).exists());
        assert!(!store.exists(&key).await.unwrap());
    }

    #[tokio::test]
    async fn set_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::open(dir.path().join("nested")).await.unwrap();
        let key = PasteKey::generate();

        store.set(&key, Bytes::from_static(b"a")).await.unwrap();
        store.set(&key, Bytes::from_static(b"b")).await.unwrap();

        let names: Vec<_> = std::fs::read_dir(store.root())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec![format!("{}.paste", hex::encode(key.as_bytes()))]);
        assert_eq!(store.get(&key).await.unwrap(), Some(Bytes::from_static(b"b")));
    }

    #[tokio::test]
    async fn keys_differing_only_in_case_use_distinct_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::open(dir.path()).await.unwrap();
        let lower = PasteKey::decode("abcdefgh").unwrap();
        let upper = PasteKey::decode("ABCDEFGH").unwrap();

        let lower_path = store.record_path(&lower);
        let upper_path = store.record_path(&upper);
        assert_ne!(
            lower_path.to_string_lossy().to_lowercase(),
            upper_path.to_string_lossy().to_lowercase()
        );

        store.set(&lower, Bytes::from_static(b"lower")).await.unwrap();
        assert_eq!(store.get(&upper).await.unwrap(), None);
        store.delete(&upper).await.unwrap();
        assert_eq!(store.get(&lower).await.unwrap(), Some(Bytes::from_static(b"lower")));
    }

    #[tokio::test]
    async fn failed_set_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::open(dir.path()).await.unwrap();
        let key = PasteKey::generate();

        // A non-empty directory at the record path makes the final rename fail.
        let record = store.record_path(&key);
        std::fs::create_dir(&record).unwrap();
        std::fs::write(record.join("occupied"), b"x").unwrap();

        assert!(store.set(&key, Bytes::from_static(b"lost")).await.is_err());

        let names: Vec<_> = std::fs::read_dir(store.root())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec![format!("{}.paste", hex::encode(key.as_bytes()))]);
    }
}
