//! Value objects for the catalog domain

pub mod repository_id;

pub use repository_id::RepositoryId;
