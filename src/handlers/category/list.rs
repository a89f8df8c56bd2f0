use axum::extract::State;

use crate::api::format::CategoryResponse;
use crate::middleware::response::{ApiResult, WebResponse};
use crate::router::AppState;

/// GET /api/categories - every category in creation order
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<CategoryResponse>> {
    let categories = state.category_service.find_all().await?;
    Ok(WebResponse::ok(categories))
}
