pub mod auth;
pub mod panic;
pub mod response;

pub use auth::{api_key_middleware, ApiKey, API_KEY_HEADER};
pub use panic::handle_panic;
pub use response::{ApiResult, WebResponse};
