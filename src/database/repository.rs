use sqlx::PgConnection;

use crate::database::manager::DatabaseError;
use crate::database::models::category::Category;

/// Statements against the `category` table.
///
/// Every method runs exactly one statement on the connection it is handed,
/// which is expected to be inside a transaction owned by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryRepository;

impl CategoryRepository {
    pub fn new() -> Self {
        Self
    }

    /// Insert `category` and return it with the assigned identity
    pub async fn save(
        &self,
        conn: &mut PgConnection,
        mut category: Category,
    ) -> Result<Category, DatabaseError> {
        let id: i64 = sqlx::query_scalar("INSERT INTO category (name) VALUES ($1) RETURNING id")
            .bind(&category.name)
            .fetch_one(&mut *conn)
            .await?;

        category.id = id;
        Ok(category)
    }

    /// Overwrite the name of the row with `category.id`. Existence is the caller's concern.
    pub async fn update(
        &self,
        conn: &mut PgConnection,
        category: Category,
    ) -> Result<Category, DatabaseError> {
        sqlx::query("UPDATE category SET name = $1 WHERE id = $2")
            .bind(&category.name)
            .bind(category.id)
            .execute(&mut *conn)
            .await?;

        Ok(category)
    }

    pub async fn delete(
        &self,
        conn: &mut PgConnection,
        category: &Category,
    ) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM category WHERE id = $1")
            .bind(category.id)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }

    pub async fn find_by_id(
        &self,
        conn: &mut PgConnection,
        category_id: i64,
    ) -> Result<Category, DatabaseError> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM category WHERE id = $1")
            .bind(category_id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| DatabaseError::NotFound("category is not found".to_string()))
    }

    /// All categories in ascending id (insertion) order
    pub async fn find_all(&self, conn: &mut PgConnection) -> Result<Vec<Category>, DatabaseError> {
        let categories = sqlx::query_as::<_, Category>("SELECT id, name FROM category ORDER BY id ASC")
            .fetch_all(&mut *conn)
            .await?;

        Ok(categories)
    }
}
