//! Infrastructure layer - Adapters for storage and HTTP transport

pub mod adapters;
pub mod http;
