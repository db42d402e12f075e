//! Storage port for the repository catalog
//!
//! Defines the domain's requirement for record storage, allowing
//! infrastructure adapters to implement various backends. Each method is a
//! single atomic operation against the store: lookups and the mutation they
//! guard must not interleave with other operations.

use crate::domain::{DomainResult, entities::Repository, value_objects::RepositoryId};
use async_trait::async_trait;

/// Ordered collection of repository records, unique by id
///
/// Insertion order is observable: [`RepositoryStore::list`] returns records
/// in the order they were appended.
#[async_trait]
pub trait RepositoryStore: Send + Sync {
    /// Snapshot of all records in insertion order
    async fn list(&self) -> DomainResult<Vec<Repository>>;

    /// Append a freshly created record to the end of the collection
    async fn append(&self, repository: Repository) -> DomainResult<()>;

    /// Replace title, URL and tags of the record with this id, keeping its
    /// position and like count; returns the updated record
    async fn replace_details(
        &self,
        id: RepositoryId,
        title: String,
        url: String,
        techs: Vec<String>,
    ) -> DomainResult<Repository>;

    /// Remove exactly the record with this id, preserving the relative
    /// order of the remainder
    async fn remove(&self, id: RepositoryId) -> DomainResult<()>;

    /// Increment the like counter of the record with this id by one;
    /// returns the updated record
    async fn register_like(&self, id: RepositoryId) -> DomainResult<Repository>;
}
