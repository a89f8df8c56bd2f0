use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

/// Uniform `{code, status, data}` envelope written for every response.
///
/// `data` is left out of the JSON entirely when there is no payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebResponse<T: Serialize> {
    pub code: u16,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> WebResponse<T> {
    /// 200 OK carrying `data`
    pub fn ok(data: T) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            status: "OK".to_string(),
            data: Some(data),
        }
    }

    pub fn with_status(status_code: StatusCode, status: impl Into<String>, data: Option<T>) -> Self {
        Self {
            code: status_code.as_u16(),
            status: status.into(),
            data,
        }
    }
}

impl WebResponse<()> {
    /// 200 OK without a `data` field
    pub fn empty() -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            status: "OK".to_string(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for WebResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

// Convenience type alias for handlers
pub type ApiResult<T> = Result<WebResponse<T>, crate::error::ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_wraps_data() {
        let value = serde_json::to_value(WebResponse::ok(json!({"id": 1, "name": "Gadget"}))).unwrap();
        assert_eq!(
            value,
            json!({"code": 200, "status": "OK", "data": {"id": 1, "name": "Gadget"}})
        );
    }

    #[test]
    fn empty_omits_data_key() {
        let value = serde_json::to_value(WebResponse::empty()).unwrap();
        assert_eq!(value, json!({"code": 200, "status": "OK"}));
        assert!(value.get("data").is_none());
    }

    #[tokio::test]
    async fn http_status_follows_code() {
        let response =
            WebResponse::<()>::with_status(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", None).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }
}
