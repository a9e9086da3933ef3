//! Error types for GoDaddy API operations.
//!
//! This module provides the error hierarchy shared by the GoDaddy client
//! crates, including HTTP transport failures, status-mapped API errors, and
//! parsing of the structured error bodies the API returns.

use serde::Deserialize;
use thiserror::Error;

/// Main error type for GoDaddy API operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid endpoint or request path
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Operation timed out
    #[error("Timeout waiting for the API: {0}")]
    Timeout(String),

    /// API is unreachable or returned a server error
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Credentials were rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Request was malformed
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Request conflicts with existing state (e.g. record already exists)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Per-minute request quota exhausted
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Failed to parse an API response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Unknown DNS record type
    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Specialized result type for GoDaddy API operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::HttpError(_) => "HTTP_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::NotFound(_) => "NOT_FOUND",
            Self::AuthenticationFailed(_) => "AUTHENTICATION_FAILED",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::Conflict(_) => "CONFLICT",
            Self::RateLimited(_) => "RATE_LIMITED",
            Self::ParseError(_) => "PARSE_ERROR",
            Self::InvalidRecordType(_) => "INVALID_RECORD_TYPE",
            Self::ValidationError(_) => "VALIDATION_ERROR",
        }
    }

    /// Returns true if the error reports a missing resource.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Structured error body returned by the GoDaddy API.
///
/// Most non-2xx responses carry a JSON payload of this shape; clients use it
/// to produce readable error messages instead of raw response bodies.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g. `DUPLICATE_RECORD`)
    pub code: String,
    /// Human-readable error message
    #[serde(default)]
    pub message: Option<String>,
    /// Per-field validation failures
    #[serde(default)]
    pub fields: Option<Vec<ApiErrorField>>,
}

/// A single field-level failure inside an [`ApiErrorBody`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiErrorField {
    /// Machine-readable failure code
    pub code: String,
    /// Human-readable failure message
    #[serde(default)]
    pub message: Option<String>,
    /// JSONPath of the offending request field
    #[serde(default)]
    pub path: Option<String>,
}

impl ApiErrorBody {
    /// Try to parse a response body as a structured API error.
    ///
    /// Returns `None` when the body is not the documented error shape, in
    /// which case callers fall back to the raw text.
    #[must_use]
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// Render the body as a one-line description.
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.message {
            Some(message) => format!("{}: {}", self.code, message),
            None => self.code.clone(),
        }
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ServiceUnavailable(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}
