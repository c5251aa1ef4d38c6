// src/db/storage.rs
// DOCUMENTATION: Storage collaborator contract
// PURPOSE: One object-safe trait implemented by the file and Postgres engines

use crate::config::Config;
use crate::models::{Kind, Record};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use super::{DbStorage, FileStorage};

/// Failures raised by a storage engine
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// One staged mutation, applied by `Storage::commit`
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    /// Insert, or replace the stored entity with the same kind and id
    Upsert(Record),
    /// Replace the stored entity; skipped when it no longer exists
    Update(Record),
    Delete(Kind, String),
}

/// Persistence engine shared by all requests
/// DOCUMENTATION: Reads go straight to the engine. Writes are staged by a
/// request `Session` and handed over in one `commit` call, which applies
/// them in order and persists the result.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Every stored entity of `kind` (or of all kinds), ordered by creation
    async fn all(&self, kind: Option<Kind>) -> Result<Vec<Record>, StorageError>;

    async fn get(&self, kind: Kind, id: &str) -> Result<Option<Record>, StorageError>;

    async fn count(&self, kind: Option<Kind>) -> Result<usize, StorageError>;

    async fn commit(&self, changes: Vec<Change>) -> Result<(), StorageError>;

    /// Rebuild engine state from its backing store
    async fn reload(&self) -> Result<(), StorageError>;

    /// Release the engine at shutdown
    async fn close(&self) -> Result<(), StorageError>;

    /// Engine name for logs
    fn name(&self) -> &'static str;
}

pub type SharedStorage = Arc<dyn Storage>;

/// Build and load the engine selected by `HBNB_TYPE_STORAGE`
pub async fn open_storage(config: &Config) -> Result<SharedStorage, StorageError> {
    let storage: SharedStorage = match config.storage_type.as_str() {
        "db" => {
            let pool = crate::config::init_db_pool(config).await?;
            Arc::new(DbStorage::new(pool))
        }
        "file" => Arc::new(FileStorage::new(&config.file_path)),
        other => {
            return Err(StorageError::Config(format!(
                "unknown storage type: {}",
                other
            )))
        }
    };

    storage.reload().await?;
    log::info!("Storage engine ready: {}", storage.name());
    Ok(storage)
}

/// Sort key shared by every engine: creation time, then id
pub(crate) fn creation_order(a: &Record, b: &Record) -> std::cmp::Ordering {
    let (a, b) = (a.base(), b.base());
    a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id))
}
