//! Axum HTTP server adapter for the repository catalog
//!
//! Maps the five catalog operations onto the HTTP surface:
//!
//! | Method | Path                      | Success |
//! |--------|---------------------------|---------|
//! | GET    | /repositories             | 200     |
//! | POST   | /repositories             | 201     |
//! | PUT    | /repositories/{id}        | 200     |
//! | DELETE | /repositories/{id}        | 204     |
//! | POST   | /repositories/{id}/like   | 200     |
//!
//! Lookup failures surface as 400 with a fixed `{"error": ...}` body,
//! preserving the service's existing contract rather than using 404.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    application::{
        ApplicationError,
        dto::{CreateRepository, UpdateRepository},
        services::CatalogService,
    },
    domain::{DomainError, entities::Repository, value_objects::RepositoryId},
};

/// Axum application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<CatalogService>,
}

impl AppState {
    pub fn new(catalog: Arc<CatalogService>) -> Self {
        Self { catalog }
    }
}

/// Create the catalog router with CORS and request tracing
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/repositories", get(list_repositories))
        .route("/repositories", post(create_repository))
        .route("/repositories/{id}", put(update_repository))
        .route("/repositories/{id}", delete(delete_repository))
        .route("/repositories/{id}/like", post(like_repository))
        .route("/health", get(system_health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// List all records in creation order
async fn list_repositories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Repository>>, ApiError> {
    let repositories = state.catalog.list_repositories().await?;
    Ok(Json(repositories))
}

/// Create a record, returning it with status 201
async fn create_repository(
    State(state): State<AppState>,
    Json(request): Json<CreateRepository>,
) -> Result<(StatusCode, Json<Repository>), ApiError> {
    let repository = state.catalog.create_repository(request).await?;
    Ok((StatusCode::CREATED, Json(repository)))
}

/// Replace title, URL and tags of an existing record
async fn update_repository(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateRepository>,
) -> Result<Json<Repository>, ApiError> {
    let id = parse_id(&id)?;
    let repository = state.catalog.update_repository(id, request).await?;
    Ok(Json(repository))
}

/// Remove an existing record, returning 204 with no body
async fn delete_repository(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.catalog.delete_repository(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Increment the like counter of an existing record
async fn like_repository(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Repository>, ApiError> {
    let id = parse_id(&id)?;
    let repository = state.catalog.like_repository(id).await?;
    Ok(Json(repository))
}

/// System health endpoint
async fn system_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// A malformed id can match no stored record, so it gets the same response
// as a well-formed id that is absent from the catalog.
fn parse_id(raw: &str) -> Result<RepositoryId, ApiError> {
    RepositoryId::from_string(raw).map_err(|_| ApiError::RepositoryNotFound)
}

/// Errors surfaced by the HTTP endpoints
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Repository not found.")]
    RepositoryNotFound,
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(DomainError::RepositoryNotFound(_)) => {
                Self::RepositoryNotFound
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::RepositoryNotFound => StatusCode::BAD_REQUEST,
        };

        let body = Json(serde_json::json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_system_health() {
        let response = system_health().await;
        let health_data: serde_json::Value = response.0;

        assert_eq!(health_data["status"], "healthy");
        assert_eq!(health_data["service"], env!("CARGO_PKG_NAME"));
    }

    #[test]
    fn test_not_found_body_is_fixed() {
        assert_eq!(ApiError::RepositoryNotFound.to_string(), "Repository not found.");
    }

    #[test]
    fn test_malformed_id_maps_to_not_found() {
        assert!(matches!(
            parse_id("zzz"),
            Err(ApiError::RepositoryNotFound)
        ));
    }
}
