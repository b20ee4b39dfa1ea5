//! Shared error type across helmdemo crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed config.
    BadRequest,
    /// Metric name is not registered.
    UnknownMetric,
    /// Metric name registered twice.
    DuplicateMetric,
    /// Metric name does not match the exposition grammar.
    InvalidMetricName,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnknownMetric => "UNKNOWN_METRIC",
            ClientCode::DuplicateMetric => "DUPLICATE_METRIC",
            ClientCode::InvalidMetricName => "INVALID_METRIC_NAME",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, DemoError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unknown metric: {0}")]
    UnknownMetric(String),
    #[error("metric already registered: {0}")]
    DuplicateMetric(String),
    #[error("invalid metric name: {0:?}")]
    InvalidMetricName(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl DemoError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            DemoError::BadRequest(_) => ClientCode::BadRequest,
            DemoError::UnknownMetric(_) => ClientCode::UnknownMetric,
            DemoError::DuplicateMetric(_) => ClientCode::DuplicateMetric,
            DemoError::InvalidMetricName(_) => ClientCode::InvalidMetricName,
            DemoError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            DemoError::Internal(_) => ClientCode::Internal,
        }
    }
}
