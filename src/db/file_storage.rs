// src/db/file_storage.rs
// DOCUMENTATION: JSON-file storage engine
// PURPOSE: Keep every entity in memory and mirror it to a single JSON file

use crate::models::{storage_key, Kind, Record};
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use super::storage::{creation_order, Change, Storage, StorageError};

/// File engine
/// DOCUMENTATION: The file holds one JSON object mapping `<Class>.<id>` to
/// the entity's dictionary form. The in-memory map is authoritative; the
/// write lock is held while a commit is applied and flushed, so the file
/// always reflects a whole commit.
pub struct FileStorage {
    path: PathBuf,
    objects: RwLock<HashMap<String, Record>>,
}

impl FileStorage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            objects: RwLock::new(HashMap::new()),
        }
    }

    async fn flush(&self, objects: &HashMap<String, Record>) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(objects)?;
        tokio::fs::write(&self.path, bytes).await?;
        log::debug!(
            "Flushed {} objects to {}",
            objects.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn all(&self, kind: Option<Kind>) -> Result<Vec<Record>, StorageError> {
        let objects = self.objects.read().await;
        let mut records: Vec<Record> = objects
            .values()
            .filter(|record| kind.map_or(true, |k| record.kind() == k))
            .cloned()
            .collect();
        records.sort_by(creation_order);
        Ok(records)
    }

    async fn get(&self, kind: Kind, id: &str) -> Result<Option<Record>, StorageError> {
        let objects = self.objects.read().await;
        Ok(objects.get(&storage_key(kind, id)).cloned())
    }

    async fn count(&self, kind: Option<Kind>) -> Result<usize, StorageError> {
        let objects = self.objects.read().await;
        Ok(match kind {
            Some(kind) => objects.values().filter(|r| r.kind() == kind).count(),
            None => objects.len(),
        })
    }

    async fn commit(&self, changes: Vec<Change>) -> Result<(), StorageError> {
        let mut objects = self.objects.write().await;
        for change in changes {
            match change {
                Change::Upsert(record) => {
                    objects.insert(record.key(), record);
                }
                Change::Update(record) => match objects.get_mut(&record.key()) {
                    Some(stored) => *stored = record,
                    None => log::debug!("Skipping update of deleted {}", record.key()),
                },
                Change::Delete(kind, id) => {
                    objects.remove(&storage_key(kind, &id));
                }
            }
        }
        self.flush(&objects).await
    }

    async fn reload(&self) -> Result<(), StorageError> {
        let loaded = match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice::<HashMap<String, Record>>(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!(
                    "No storage file at {}, starting empty",
                    self.path.display()
                );
                HashMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        log::info!(
            "Loaded {} objects from {}",
            loaded.len(),
            self.path.display()
        );
        *self.objects.write().await = loaded;
        Ok(())
    }

    async fn close(&self) -> Result<(), StorageError> {
        let objects = self.objects.read().await;
        self.flush(&objects).await
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
