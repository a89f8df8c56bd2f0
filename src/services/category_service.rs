use sqlx::PgPool;
use tracing::debug;
use validator::Validate;

use crate::api::format::{to_categories_response, to_category_response, CategoryResponse};
use crate::api::request::{CategoryCreateRequest, CategoryUpdateRequest};
use crate::database::models::category::Category;
use crate::database::repository::CategoryRepository;
use crate::database::transaction::in_transaction;
use crate::error::ApiError;

/// Category use cases. Each call validates, then runs in its own transaction.
#[derive(Clone)]
pub struct CategoryService {
    repository: CategoryRepository,
    pool: PgPool,
}

impl CategoryService {
    pub fn new(repository: CategoryRepository, pool: PgPool) -> Self {
        Self { repository, pool }
    }

    pub async fn create(&self, request: CategoryCreateRequest) -> Result<CategoryResponse, ApiError> {
        request.validate()?;

        let repository = self.repository;
        let category = in_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let saved = repository.save(conn, Category::unsaved(request.name)).await?;
                Ok::<_, ApiError>(saved)
            })
        })
        .await?;

        debug!("Created category {}", category.id);
        Ok(to_category_response(category))
    }

    pub async fn update(&self, request: CategoryUpdateRequest) -> Result<CategoryResponse, ApiError> {
        request.validate()?;

        let repository = self.repository;
        let category = in_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let mut category = repository.find_by_id(&mut *conn, request.id).await?;
                category.name = request.name;
                let updated = repository.update(conn, category).await?;
                Ok::<_, ApiError>(updated)
            })
        })
        .await?;

        debug!("Updated category {}", category.id);
        Ok(to_category_response(category))
    }

    pub async fn delete(&self, category_id: i64) -> Result<(), ApiError> {
        let repository = self.repository;
        in_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let category = repository.find_by_id(&mut *conn, category_id).await?;
                repository.delete(conn, &category).await?;
                Ok::<_, ApiError>(())
            })
        })
        .await?;

        debug!("Deleted category {}", category_id);
        Ok(())
    }

    pub async fn find_by_id(&self, category_id: i64) -> Result<CategoryResponse, ApiError> {
        let repository = self.repository;
        let category = in_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let category = repository.find_by_id(conn, category_id).await?;
                Ok::<_, ApiError>(category)
            })
        })
        .await?;

        Ok(to_category_response(category))
    }

    pub async fn find_all(&self) -> Result<Vec<CategoryResponse>, ApiError> {
        let repository = self.repository;
        let categories = in_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let categories = repository.find_all(conn).await?;
                Ok::<_, ApiError>(categories)
            })
        })
        .await?;

        Ok(to_categories_response(categories))
    }
}
