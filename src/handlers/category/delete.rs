use axum::extract::{rejection::PathRejection, Path, State};

use super::parse_category_id;
use crate::middleware::response::{ApiResult, WebResponse};
use crate::router::AppState;

/// DELETE /api/categories/:id - answers without a `data` field
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<()> {
    let category_id = parse_category_id(path)?;
    state.category_service.delete(category_id).await?;
    Ok(WebResponse::empty())
}
