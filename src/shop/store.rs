//! Persistence for the furniture collection.
//!
//! The collection lives as one JSON array under a single key of a small
//! string key-value store. Every save rewrites the whole snapshot; there is
//! no versioning and the last writer wins. Storage calls run on a dedicated
//! worker task so requests are applied in the order the event loop issued
//! them.

use crate::app::event::AppEvent;
use crate::shop::model::FurnitureCollection;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed for {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("malformed persisted data: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl StoreError {
    fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

/// Minimal string key-value storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
}

/// Key-value store kept as one JSON object file on disk.
pub struct FileKvStore {
    path: PathBuf,
}

impl FileKvStore {
    pub const FILE_NAME: &'static str = "storage.json";

    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(Self::FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_map(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(StoreError::io(&self.path, e)),
        }
    }
}

#[async_trait]
impl KeyValueStore for FileKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut map = self.read_map().await?;
        Ok(map.remove(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value);
        let contents = serde_json::to_string_pretty(&map)?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }
        // Write beside the target and rename so readers never see half a file
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, contents)
            .await
            .map_err(|e| StoreError::io(&tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;
        Ok(())
    }
}

/// Loads and saves the furniture collection under one fixed key.
pub struct FurnitureStore {
    kv: Box<dyn KeyValueStore>,
    key: String,
}

impl FurnitureStore {
    pub fn new(kv: impl KeyValueStore + 'static, key: impl Into<String>) -> Self {
        Self {
            kv: Box::new(kv),
            key: key.into(),
        }
    }

    /// Read the persisted snapshot. A missing key is an empty collection.
    pub async fn load(&self) -> Result<FurnitureCollection, StoreError> {
        match self.kv.get(&self.key).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(FurnitureCollection::new()),
        }
    }

    /// Overwrite the persisted snapshot with `items`.
    pub async fn save(&self, items: &FurnitureCollection) -> Result<(), StoreError> {
        let raw = serde_json::to_string(items)?;
        self.kv.set(&self.key, raw).await
    }
}

#[derive(Debug)]
pub enum StorageRequest {
    Load,
    Save(FurnitureCollection),
}

/// Handle to the storage worker. Dropping it closes the request channel and
/// lets the worker finish the queued requests and exit.
pub struct StorageHandle {
    tx: mpsc::UnboundedSender<StorageRequest>,
    task: JoinHandle<()>,
}

impl StorageHandle {
    pub fn request(&self, req: StorageRequest) {
        if self.tx.send(req).is_err() {
            error!("storage worker is gone; request dropped");
        }
    }

    /// Close the queue and wait for pending writes to land.
    pub async fn shutdown(self) {
        drop(self.tx);
        let _ = self.task.await;
    }
}

/// Spawn the worker that owns `store`. Failures are logged and never
/// escape; a failed load is reported as `CollectionLoaded(None)`.
pub fn spawn_worker(store: FurnitureStore, event_tx: mpsc::UnboundedSender<AppEvent>) -> StorageHandle {
    let (tx, mut rx) = mpsc::unbounded_channel::<StorageRequest>();
    let task = tokio::spawn(async move {
        while let Some(req) = rx.recv().await {
            match req {
                StorageRequest::Load => {
                    let loaded = match store.load().await {
                        Ok(items) => {
                            info!(count = items.len(), "loaded furniture items");
                            Some(items)
                        }
                        Err(e) => {
                            error!("Failed to load furniture items: {}", e);
                            None
                        }
                    };
                    if event_tx.send(AppEvent::CollectionLoaded(loaded)).is_err() {
                        break;
                    }
                }
                StorageRequest::Save(items) => match store.save(&items).await {
                    Ok(()) => debug!(count = items.len(), "saved furniture items"),
                    Err(e) => error!("Failed to save furniture items: {}", e),
                },
            }
        }
    });
    StorageHandle { tx, task }
}
