use axum::{middleware, routing::get, Router};
use sqlx::PgPool;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::database::repository::CategoryRepository;
use crate::error::ApiError;
use crate::handlers;
use crate::middleware::{api_key_middleware, handle_panic, ApiKey};
use crate::services::CategoryService;

/// Everything a request handler can reach. Built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub category_service: CategoryService,
    pub api_key: ApiKey,
}

impl AppState {
    pub fn new(pool: PgPool, config: &AppConfig) -> Self {
        Self {
            category_service: CategoryService::new(CategoryRepository::new(), pool),
            api_key: ApiKey::new(config.security.api_key.clone()),
        }
    }
}

/// Build the full application: routes, API-key gate, panic guard, tracing.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let router = Router::new()
        .merge(category_routes())
        .fallback(fallback)
        // Gate wraps the fallback too, so unknown paths still answer 401 first
        .layer(middleware::from_fn_with_state(state.api_key.clone(), api_key_middleware))
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state);

    let router = if config.security.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http())
}

fn category_routes() -> Router<AppState> {
    use handlers::category;

    Router::new()
        .route(
            "/api/categories",
            get(category::category_list).post(category::category_create),
        )
        .route(
            "/api/categories/:id",
            get(category::category_show)
                .put(category::category_update)
                .delete(category::category_delete),
        )
}

async fn fallback() -> ApiError {
    ApiError::not_found("route not found")
}
