/// Error types for the Adesk SDK.
///
/// Local argument checks fail with [`AdeskError::Validation`] before any
/// network I/O. Everything the remote side reports is mapped from the HTTP
/// status (or the v1 in-band `code`) onto one of the API variants, each of
/// which carries the status and the raw response payload.
use std::error::Error as StdError;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::config::ApiVersion;

/// Boxed error used for transport-level causes.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// In-band v1 code signalling that the account must be paid for.
pub const PAYMENT_REQUIRED_CODE: u64 = 21;

/// Details shared by every remote error kind.
#[derive(Debug)]
pub struct ApiFailure {
    /// Human-readable description.
    pub message: String,
    /// HTTP status, when a response was received.
    pub status: Option<u16>,
    /// Raw response payload. Non-JSON bodies are kept as a JSON string.
    pub response: Option<Value>,
    source: Option<BoxError>,
}

impl ApiFailure {
    pub fn new(message: impl Into<String>, status: Option<u16>, response: Option<Value>) -> Self {
        Self {
            message: message.into(),
            status,
            response,
            source: None,
        }
    }

    /// Attach the underlying cause (DNS failure, refused connection, ...).
    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => {
                write!(f, "[{status}] {}", self.message)?;
                if let Some(response) = &self.response {
                    write!(f, " - Response: {response}")?;
                }
                Ok(())
            }
            None => f.write_str(&self.message),
        }
    }
}

impl StdError for ApiFailure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|err| err.as_ref() as &(dyn StdError + 'static))
    }
}

/// The primary error type for the Adesk SDK.
#[derive(Error, Debug)]
pub enum AdeskError {
    // Local, raised before any request is sent
    #[error("Validation error: {0}")]
    Validation(String),

    // Remote
    #[error("Authentication failed: {0}")]
    Auth(#[source] ApiFailure),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(#[source] ApiFailure),

    #[error("Payment required: {0}")]
    PaymentRequired(#[source] ApiFailure),

    #[error("Bad request: {0}")]
    BadRequest(#[source] ApiFailure),

    #[error("Not found: {0}")]
    NotFound(#[source] ApiFailure),

    #[error("Server error: {0}")]
    Server(#[source] ApiFailure),

    // Anything else, including network failures
    #[error("API error: {0}")]
    Api(#[source] ApiFailure),
}

impl AdeskError {
    /// Map an HTTP error status onto an error kind.
    ///
    /// The two API versions differ only in how they signal missing payment:
    /// v1 uses 402 and 403, v2 uses 403.
    pub fn from_status(
        version: ApiVersion,
        status: u16,
        message: impl Into<String>,
        response: Option<Value>,
    ) -> Self {
        let failure = ApiFailure::new(message, Some(status), response);
        match (version, status) {
            (_, 400) => AdeskError::BadRequest(failure),
            (_, 401) => AdeskError::Auth(failure),
            (ApiVersion::V1, 402 | 403) | (ApiVersion::V2, 403) => {
                AdeskError::PaymentRequired(failure)
            }
            (_, 404) => AdeskError::NotFound(failure),
            (_, 429) => AdeskError::RateLimit(failure),
            (_, 500..=599) => AdeskError::Server(failure),
            _ => AdeskError::Api(failure),
        }
    }

    /// Shorthand for a validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        AdeskError::Validation(message.into())
    }

    /// Remote error details, `None` for validation errors.
    pub fn failure(&self) -> Option<&ApiFailure> {
        match self {
            AdeskError::Validation(_) => None,
            AdeskError::Auth(f)
            | AdeskError::RateLimit(f)
            | AdeskError::PaymentRequired(f)
            | AdeskError::BadRequest(f)
            | AdeskError::NotFound(f)
            | AdeskError::Server(f)
            | AdeskError::Api(f) => Some(f),
        }
    }

    /// HTTP status of the response that caused this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        self.failure().and_then(|f| f.status)
    }

    /// Raw response payload, if any.
    pub fn response_data(&self) -> Option<&Value> {
        self.failure().and_then(|f| f.response.as_ref())
    }

    /// Returns true if this error suggests retrying with backoff.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AdeskError::RateLimit(_) | AdeskError::Server(_))
    }

    /// Returns true for local argument errors.
    pub fn is_validation(&self) -> bool {
        matches!(self, AdeskError::Validation(_))
    }
}

impl From<url::ParseError> for AdeskError {
    fn from(err: url::ParseError) -> Self {
        AdeskError::Api(ApiFailure::new(format!("URL parse error: {err}"), None, None).with_source(err))
    }
}
