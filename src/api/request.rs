use std::borrow::Borrow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Body of `POST /api/categories`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CategoryCreateRequest {
    // A missing name decodes as "" so it fails validation instead of decoding
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "name must be between 1 and 200 characters"))]
    pub name: String,
}

/// Body of `PUT /api/categories/:id`.
///
/// `id` is never read from the body; the handler fills it in from the path.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CategoryUpdateRequest {
    #[serde(skip)]
    #[validate(custom(function = "validate_nonzero"))]
    pub id: i64,

    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "name must be between 1 and 200 characters"))]
    pub name: String,
}

/// An id of zero means "not supplied"; any other value is left for the lookup to resolve
fn validate_nonzero<T: Borrow<i64>>(id: T) -> Result<(), ValidationError> {
    if *id.borrow() == 0 {
        let mut err = ValidationError::new("required");
        err.message = Some("id is required".into());
        return Err(err);
    }
    Ok(())
}
