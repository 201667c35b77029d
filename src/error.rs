//! Error types for the HZS library client

use serde_json::Value;
use thiserror::Error;

/// Maximum number of characters of a raw body quoted in a protocol error
pub const BODY_EXCERPT_LEN: usize = 100;

/// Failure classes of a call to the external API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Transport-level failure (DNS, connection refused, timeout)
    Network,
    /// Response body was not the JSON we expected
    Protocol,
    /// Valid JSON response with a non-2xx status
    Application,
}

/// Normalized error returned by every failed API call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status of the response, `0` when no response was received
    pub status_code: u16,
    pub message: String,
    pub kind: ApiErrorKind,
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status_code: 0,
            message: message.into(),
            kind: ApiErrorKind::Network,
        }
    }

    pub fn protocol(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
            kind: ApiErrorKind::Protocol,
        }
    }

    pub fn application(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
            kind: ApiErrorKind::Application,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ApiErrorKind::Application && self.status_code == 404
    }
}

/// Build the error for a non-2xx JSON response.
///
/// Message priority: `detail`, then `message`, then the whole body as JSON.
/// A string field is used as-is when non-empty; any other non-null value
/// (FastAPI validation arrays, nested objects) is serialized.
pub fn normalize_error_body(status_code: u16, body: &Value) -> ApiError {
    let message = ["detail", "message"]
        .iter()
        .find_map(|field| field_message(body.get(field)))
        .unwrap_or_else(|| body.to_string());

    ApiError::application(status_code, message)
}

fn field_message(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// First [`BODY_EXCERPT_LEN`] characters of a raw body
pub fn body_excerpt(body: &[u8]) -> String {
    String::from_utf8_lossy(body)
        .chars()
        .take(BODY_EXCERPT_LEN)
        .collect()
}

/// Errors outside the API boundary (configuration, session storage, client setup)
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Session storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    Transport(#[from] crate::http::TransportError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl AppError {
    /// The API error behind this failure, if any
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            AppError::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type alias for calls to the external API
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
