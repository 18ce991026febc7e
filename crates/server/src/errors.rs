use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Error response rendered as `{"error": <title>, "detail": <message>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, detail = ?self.detail, "request failed");
        }
        let body = serde_json::json!({"error": self.title, "detail": self.detail});
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let detail = Some(e.to_string());
        match e {
            ServiceError::Model(_) => {
                JsonApiError::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", detail)
            }
            ServiceError::NotFound(_) => JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", detail),
            // duplicate keys stay a 500 carrying the storage error text
            ServiceError::Conflict(_) | ServiceError::Db(_) => {
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", detail)
            }
            ServiceError::Upstream { status, .. } => {
                // relayed as-is; a 1xx cannot end a response
                let status = StatusCode::from_u16(status)
                    .ok()
                    .filter(|s| !s.is_informational())
                    .unwrap_or(StatusCode::BAD_GATEWAY);
                JsonApiError::new(status, "Upstream Error", detail)
            }
            ServiceError::UpstreamUnavailable { .. } | ServiceError::UpstreamDecode { .. } => {
                JsonApiError::new(StatusCode::BAD_GATEWAY, "Bad Gateway", detail)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
}
