pub mod api;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod services;

pub use config::AppConfig;
pub use error::ApiError;
pub use router::{app, AppState};
