use axum::extract::{rejection::PathRejection, Path, State};

use super::parse_category_id;
use crate::api::format::CategoryResponse;
use crate::middleware::response::{ApiResult, WebResponse};
use crate::router::AppState;

/// GET /api/categories/:id
pub async fn show(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<CategoryResponse> {
    let category_id = parse_category_id(path)?;
    let category = state.category_service.find_by_id(category_id).await?;
    Ok(WebResponse::ok(category))
}
