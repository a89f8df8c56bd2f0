use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
};

use super::{decode_body, parse_category_id};
use crate::api::format::CategoryResponse;
use crate::api::request::CategoryUpdateRequest;
use crate::middleware::response::{ApiResult, WebResponse};
use crate::router::AppState;

/// PUT /api/categories/:id - rename; the id always comes from the path
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> ApiResult<CategoryResponse> {
    let category_id = parse_category_id(path)?;
    let mut request: CategoryUpdateRequest = decode_body(&body)?;
    request.id = category_id;

    let category = state.category_service.update(request).await?;
    Ok(WebResponse::ok(category))
}
