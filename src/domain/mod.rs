//! Domain layer - Pure business logic
//!
//! Contains the repository record entity, its identifier value object and
//! the storage port. No dependencies on infrastructure concerns.

pub mod entities;
pub mod ports;
pub mod value_objects;

pub use entities::Repository;
pub use ports::RepositoryStore;
pub use value_objects::RepositoryId;

/// Domain Result type
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-specific errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    #[error("No repository with id {0} exists")]
    RepositoryNotFound(RepositoryId),
}

impl DomainError {
    pub fn not_found(id: RepositoryId) -> Self {
        Self::RepositoryNotFound(id)
    }
}
