use axum::{body::Bytes, extract::State};

use super::decode_body;
use crate::api::format::CategoryResponse;
use crate::api::request::CategoryCreateRequest;
use crate::middleware::response::{ApiResult, WebResponse};
use crate::router::AppState;

/// POST /api/categories - create from `{name}`
pub async fn create(State(state): State<AppState>, body: Bytes) -> ApiResult<CategoryResponse> {
    let request: CategoryCreateRequest = decode_body(&body)?;
    let category = state.category_service.create(request).await?;
    Ok(WebResponse::ok(category))
}
