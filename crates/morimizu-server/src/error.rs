//! Error types for the visualizer API.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use morimizu_core::TraceError;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body or query was malformed or exceeded a limit.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The requested algorithm is not one of the supported keys.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

impl ApiError {
    /// HTTP status this error is reported with.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedAlgorithm(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<TraceError> for ApiError {
    fn from(err: TraceError) -> Self {
        match err {
            TraceError::InvalidInput(msg) => Self::InvalidInput(msg),
            TraceError::UnsupportedAlgorithm(key) => Self::UnsupportedAlgorithm(key),
        }
    }
}

// A body or query that does not decode (a non-integer element, a missing
// field, bad JSON) is malformed input.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::InvalidInput(msg) => msg.clone(),
            Self::UnsupportedAlgorithm(key) => format!("unsupported algorithm: {key}"),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_errors_map_to_statuses() {
        let bad = ApiError::from(TraceError::InvalidInput("x".to_owned()));
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

        let unknown = ApiError::from(TraceError::UnsupportedAlgorithm("bogoSort".to_owned()));
        assert_eq!(unknown.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn response_carries_status_code() {
        let response = ApiError::InvalidInput("empty".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
