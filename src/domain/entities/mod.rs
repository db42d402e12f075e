//! Domain entities

pub mod repository;

pub use repository::Repository;
