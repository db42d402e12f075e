//! Ports for storage adapters

pub mod store;

pub use store::RepositoryStore;
