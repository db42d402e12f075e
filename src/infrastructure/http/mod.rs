//! HTTP transport adapters

pub mod axum_adapter;

pub use axum_adapter::{ApiError, AppState, create_router};
