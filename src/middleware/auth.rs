use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;

pub const API_KEY_HEADER: &str = "X-API-KEY";

/// The single shared secret every request must present
#[derive(Clone)]
pub struct ApiKey(Arc<str>);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(Arc::from(key.into()))
    }

    pub fn matches(&self, presented: &str) -> bool {
        &*self.0 == presented
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(..)")
    }
}

/// Rejects the request with 401 unless `X-API-KEY` equals the configured key.
/// Runs before routing, so nothing downstream sees an unauthenticated request.
pub async fn api_key_middleware(
    State(api_key): State<ApiKey>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let presented = extract_api_key(&headers);

    match presented {
        Some(key) if api_key.matches(key) => Ok(next.run(request).await),
        _ => {
            tracing::warn!(
                "Rejected {} {}: missing or invalid {}",
                request.method(),
                request.uri().path(),
                API_KEY_HEADER
            );
            Err(ApiError::Unauthorized)
        }
    }
}

fn extract_api_key(headers: &HeaderMap) -> Option<&str> {
    headers.get(API_KEY_HEADER).and_then(|value| value.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn matches_exact_key_only() {
        let key = ApiKey::new("RAHASIA");
        assert!(key.matches("RAHASIA"));
        assert!(!key.matches("rahasia"));
        assert!(!key.matches("KEY_SALAH"));
        assert!(!key.matches(""));
    }

    #[test]
    fn extracts_header_case_insensitively() {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", HeaderValue::from_static("RAHASIA"));
        assert_eq!(extract_api_key(&headers), Some("RAHASIA"));
    }

    #[test]
    fn missing_header_yields_none() {
        assert_eq!(extract_api_key(&HeaderMap::new()), None);
    }

    #[test]
    fn debug_hides_secret() {
        assert_eq!(format!("{:?}", ApiKey::new("RAHASIA")), "ApiKey(..)");
    }
}
