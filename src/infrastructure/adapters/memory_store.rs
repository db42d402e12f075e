//! In-memory storage adapter
//!
//! The catalog lives for the process lifetime; nothing is persisted. Records
//! are kept in an ordered `Vec` so List observes insertion order directly,
//! and lookups are a linear scan by id. The lock is held for the whole of
//! each operation, so every read-modify-write is atomic under the
//! multi-threaded runtime.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::domain::{
    DomainError, DomainResult,
    entities::Repository,
    ports::RepositoryStore,
    value_objects::RepositoryId,
};

/// In-memory implementation of [`RepositoryStore`]
#[derive(Debug, Clone)]
pub struct InMemoryRepositoryStore {
    records: Arc<RwLock<Vec<Repository>>>,
}

impl InMemoryRepositoryStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Get number of stored records
    pub fn record_count(&self) -> usize {
        self.records.read().len()
    }

    /// Clear all records (for testing)
    pub fn clear(&self) {
        self.records.write().clear();
    }
}

impl Default for InMemoryRepositoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepositoryStore for InMemoryRepositoryStore {
    async fn list(&self) -> DomainResult<Vec<Repository>> {
        Ok(self.records.read().clone())
    }

    async fn append(&self, repository: Repository) -> DomainResult<()> {
        self.records.write().push(repository);
        Ok(())
    }

    async fn replace_details(
        &self,
        id: RepositoryId,
        title: String,
        url: String,
        techs: Vec<String>,
    ) -> DomainResult<Repository> {
        let mut records = self.records.write();
        let record = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(DomainError::RepositoryNotFound(id))?;

        record.set_details(title, url, techs);
        Ok(record.clone())
    }

    async fn remove(&self, id: RepositoryId) -> DomainResult<()> {
        let mut records = self.records.write();
        let position = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(DomainError::RepositoryNotFound(id))?;

        records.remove(position);
        Ok(())
    }

    async fn register_like(&self, id: RepositoryId) -> DomainResult<Repository> {
        let mut records = self.records.write();
        let record = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(DomainError::RepositoryNotFound(id))?;

        record.register_like();
        Ok(record.clone())
    }
}
