pub mod create;
pub mod delete;
pub mod list;
pub mod show;
pub mod update;

// Re-export handler functions for use in routing
pub use create::create as category_create;
pub use delete::delete as category_delete;
pub use list::list as category_list;
pub use show::show as category_show;
pub use update::update as category_update;

use axum::extract::{rejection::PathRejection, Path};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Parse the `:id` path segment. A non-integer id is an internal error, not a 400.
pub(crate) fn parse_category_id(path: Result<Path<String>, PathRejection>) -> Result<i64, ApiError> {
    let Path(raw) = path?;
    Ok(raw.parse::<i64>()?)
}

/// Decode a JSON body regardless of the request's `Content-Type`
pub(crate) fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}
