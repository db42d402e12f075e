//! Application layer - Use cases and orchestration
//!
//! Orchestrates domain logic over the storage port and defines the request
//! DTOs accepted at the boundary.

pub mod dto;
pub mod services;

pub use dto::{CreateRepository, UpdateRepository};
pub use services::CatalogService;

/// Application Result type
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Application-specific errors
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),
}
