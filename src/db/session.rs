// src/db/session.rs
// DOCUMENTATION: Request-scoped unit of work over the shared storage engine
// PURPOSE: Stage mutations during a request and persist them with one save()

use crate::models::{Entity, Kind};

use super::storage::{Change, SharedStorage, StorageError};

/// Unit of work opened for one request
/// DOCUMENTATION: Reads see committed state. `add` and `delete` only stage
/// changes; `save` hands them to the engine. Whatever is still staged when
/// the session is dropped is discarded.
pub struct Session {
    storage: SharedStorage,
    pending: Vec<Change>,
}

impl Session {
    pub fn open(storage: SharedStorage) -> Self {
        Self {
            storage,
            pending: Vec::new(),
        }
    }

    pub async fn count(&self, kind: Option<Kind>) -> Result<usize, StorageError> {
        self.storage.count(kind).await
    }

    /// Every stored entity of type `E`
    pub async fn all_of<E: Entity>(&self) -> Result<Vec<E>, StorageError> {
        let records = self.storage.all(Some(E::KIND)).await?;
        Ok(records.into_iter().filter_map(E::from_record).collect())
    }

    pub async fn find<E: Entity>(&self, id: &str) -> Result<Option<E>, StorageError> {
        let record = self.storage.get(E::KIND, id).await?;
        Ok(record.and_then(E::from_record))
    }

    /// Stage `entity` for insertion (or replacement when the id is already stored)
    pub fn add<E: Entity>(&mut self, entity: &E) {
        self.pending.push(Change::Upsert(entity.to_dict()));
    }

    /// Stage new field values for a loaded entity
    /// DOCUMENTATION: Applied only if the entity is still stored at commit
    /// time, so an update racing a delete never brings the entity back
    pub fn update<E: Entity>(&mut self, entity: &E) {
        self.pending.push(Change::Update(entity.to_dict()));
    }

    pub fn delete<E: Entity>(&mut self, entity: &E) {
        self.delete_by_id(E::KIND, entity.id());
    }

    pub fn delete_by_id(&mut self, kind: Kind, id: &str) {
        self.pending.push(Change::Delete(kind, id.to_string()));
    }

    /// Persist all staged changes
    pub async fn save(&mut self) -> Result<(), StorageError> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let changes = std::mem::take(&mut self.pending);
        self.storage.commit(changes).await
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drop anything not saved
    fn discard(&mut self) {
        if self.has_pending() {
            log::warn!(
                "Discarding {} unsaved changes on session drop",
                self.pending.len()
            );
            self.pending.clear();
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.discard();
    }
}
