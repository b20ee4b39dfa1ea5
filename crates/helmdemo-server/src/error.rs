//! HTTP mapping for `DemoError` (non-ops handlers).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use helmdemo_core::error::{ClientCode, DemoError};

/// Handler error wrapper so `?` works on `DemoError` inside axum handlers.
#[derive(Debug)]
pub struct ApiError(pub DemoError);

impl From<DemoError> for ApiError {
    fn from(e: DemoError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = match code {
            ClientCode::BadRequest | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            ClientCode::UnknownMetric
            | ClientCode::DuplicateMetric
            | ClientCode::InvalidMetricName
            | ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::error!(code = code.as_str(), error = %self.0, "request failed");

        let body = Json(json!({
            "error": code.as_str(),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
