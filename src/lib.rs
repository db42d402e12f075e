//! # repotrack
//!
//! In-memory catalog service for repository records (title, URL, tech tags,
//! like count), exposed over HTTP with list, create, update, delete and
//! increment-likes operations.

#![warn(rust_2018_idioms)]

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Domain layer exports
pub use domain::{
    DomainError, DomainResult,
    entities::Repository,
    ports::RepositoryStore,
    value_objects::RepositoryId,
};

// Application layer exports
pub use application::{
    ApplicationError, ApplicationResult,
    dto::{CreateRepository, UpdateRepository},
    services::CatalogService,
};

// Infrastructure exports
pub use config::ServerConfig;
pub use infrastructure::{
    adapters::InMemoryRepositoryStore,
    http::{ApiError, AppState, create_router},
};
