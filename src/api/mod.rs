pub mod format;
pub mod request;

pub use format::{to_categories_response, to_category_response, CategoryResponse};
pub use request::{CategoryCreateRequest, CategoryUpdateRequest};
