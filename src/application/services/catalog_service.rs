//! Catalog service orchestrating the storage port
//!
//! Owns record construction (fresh id, likes defaulting handled by the DTO)
//! and delegates each operation to the store, which executes it atomically.

use crate::{
    application::{
        ApplicationResult,
        dto::{CreateRepository, UpdateRepository},
    },
    domain::{entities::Repository, ports::RepositoryStore, value_objects::RepositoryId},
};
use std::sync::Arc;

/// Use-case facade over a [`RepositoryStore`]
pub struct CatalogService {
    store: Arc<dyn RepositoryStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn RepositoryStore>) -> Self {
        Self { store }
    }

    /// List all records in creation order
    pub async fn list_repositories(&self) -> ApplicationResult<Vec<Repository>> {
        Ok(self.store.list().await?)
    }

    /// Create a record from the request and append it to the catalog
    pub async fn create_repository(
        &self,
        request: CreateRepository,
    ) -> ApplicationResult<Repository> {
        let repository = Repository::new(request.title, request.url, request.techs, request.likes);
        self.store.append(repository.clone()).await?;

        tracing::debug!(id = %repository.id(), "repository created");
        Ok(repository)
    }

    /// Replace title, URL and tags of an existing record
    pub async fn update_repository(
        &self,
        id: RepositoryId,
        request: UpdateRepository,
    ) -> ApplicationResult<Repository> {
        let repository = self
            .store
            .replace_details(id, request.title, request.url, request.techs)
            .await?;

        tracing::debug!(id = %id, "repository updated");
        Ok(repository)
    }

    /// Remove an existing record
    pub async fn delete_repository(&self, id: RepositoryId) -> ApplicationResult<()> {
        self.store.remove(id).await?;

        tracing::debug!(id = %id, "repository deleted");
        Ok(())
    }

    /// Increment the like counter of an existing record
    pub async fn like_repository(&self, id: RepositoryId) -> ApplicationResult<Repository> {
        let repository = self.store.register_like(id).await?;

        tracing::debug!(id = %id, likes = repository.likes(), "repository liked");
        Ok(repository)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::ApplicationError, domain::DomainError,
        infrastructure::adapters::InMemoryRepositoryStore,
    };

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(InMemoryRepositoryStore::new()))
    }

    fn create_request(title: &str) -> CreateRepository {
        CreateRepository {
            title: title.to_string(),
            url: format!("http://github.com/{title}"),
            techs: vec!["Rust".to_string()],
            likes: 0,
        }
    }

    #[tokio::test]
    async fn test_create_then_list_preserves_order() {
        let service = service();
        let first = service.create_repository(create_request("a")).await.unwrap();
        let second = service.create_repository(create_request("b")).await.unwrap();

        let listed = service.list_repositories().await.unwrap();
        assert_eq!(listed, vec![first, second]);
    }

    #[tokio::test]
    async fn test_create_defaults_likes_to_zero() {
        let service = service();
        let created = service.create_repository(create_request("a")).await.unwrap();
        assert_eq!(created.likes(), 0);
    }

    #[tokio::test]
    async fn test_create_stores_explicit_likes_verbatim() {
        let service = service();
        let mut request = create_request("a");
        request.likes = 5;

        let created = service.create_repository(request).await.unwrap();
        assert_eq!(created.likes(), 5);
    }

    #[tokio::test]
    async fn test_update_preserves_likes() {
        let service = service();
        let created = service.create_repository(create_request("a")).await.unwrap();
        service.like_repository(created.id()).await.unwrap();

        let updated = service
            .update_repository(
                created.id(),
                UpdateRepository {
                    title: "renamed".to_string(),
                    url: "http://github.com/renamed".to_string(),
                    techs: vec!["Axum".to_string()],
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.title(), "renamed");
        assert_eq!(updated.likes(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_id_reports_not_found() {
        let service = service();
        let result = service
            .update_repository(RepositoryId::new(), UpdateRepository::default())
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::RepositoryNotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one_record() {
        let service = service();
        let first = service.create_repository(create_request("a")).await.unwrap();
        let second = service.create_repository(create_request("b")).await.unwrap();

        service.delete_repository(first.id()).await.unwrap();

        let listed = service.list_repositories().await.unwrap();
        assert_eq!(listed, vec![second]);
    }

    #[tokio::test]
    async fn test_sequential_likes_accumulate() {
        let service = service();
        let created = service.create_repository(create_request("a")).await.unwrap();

        for _ in 0..3 {
            service.like_repository(created.id()).await.unwrap();
        }

        let listed = service.list_repositories().await.unwrap();
        assert_eq!(listed[0].likes(), 3);
        assert_eq!(listed[0].title(), created.title());
        assert_eq!(listed[0].url(), created.url());
    }

    #[tokio::test]
    async fn test_like_missing_id_reports_not_found() {
        let service = service();
        let result = service.like_repository(RepositoryId::new()).await;

        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::RepositoryNotFound(_)))
        ));
    }
}
