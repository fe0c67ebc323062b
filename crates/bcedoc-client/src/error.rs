//! Structured error handling for document service operations.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};
use thiserror::Error;

/// Type alias for boxed dynamic errors that can be sent across threads.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Type alias for Results with our custom Error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Categories of errors that can occur in document service operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(AsRefStr, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Caller-supplied arguments were missing or failed validation.
    InvalidInput,
    /// The transport could not reach the service.
    NetworkError,
    /// The transport gave up waiting for the service.
    Timeout,
    /// The service received the request and answered with a failure.
    ServiceError,
    /// A request body could not be encoded or a response body decoded.
    Serialization,
    /// The client or transport configuration is invalid.
    Configuration,
    /// Unknown error occurred.
    #[default]
    Unknown,
}

impl ErrorKind {
    /// Check if this error kind is typically retryable.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::NetworkError | Self::Timeout)
    }
}

/// Structured error type with classification and an optional source.
#[must_use]
#[derive(Debug, Error)]
#[error("[{kind}]{}", message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Primary error message.
    pub message: Option<String>,
    /// Underlying source error, if any.
    #[source]
    pub source: Option<BoxedError>,
}

impl Error {
    /// Creates a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            source: None,
        }
    }

    /// Creates a new error from a source error.
    pub fn from_source(kind: ErrorKind, source: impl Into<BoxedError>) -> Self {
        Self {
            kind,
            message: None,
            source: Some(source.into()),
        }
    }

    /// Adds a message to this error.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the source of the error.
    pub fn with_source(mut self, source: impl Into<BoxedError>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Creates a new invalid input error.
    pub fn invalid_input() -> Self {
        Self::new(ErrorKind::InvalidInput)
    }

    /// Creates a new network error.
    pub fn network_error() -> Self {
        Self::new(ErrorKind::NetworkError)
    }

    /// Creates a new timeout error.
    pub fn timeout() -> Self {
        Self::new(ErrorKind::Timeout)
    }

    /// Creates a new serialization error.
    pub fn serialization() -> Self {
        Self::new(ErrorKind::Serialization)
    }

    /// Creates a new configuration error.
    pub fn configuration() -> Self {
        Self::new(ErrorKind::Configuration)
    }

    /// Wraps a decoded service error envelope.
    pub fn service(error: ServiceError) -> Self {
        let message = error.to_string();
        Self::from_source(ErrorKind::ServiceError, error).with_message(message)
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the decoded service error, if the service rejected the request.
    pub fn service_error(&self) -> Option<&ServiceError> {
        self.source
            .as_deref()
            .and_then(|source| source.downcast_ref::<ServiceError>())
    }

    /// Check if this error is retryable based on its kind.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::from_source(ErrorKind::Serialization, error)
            .with_message("Failed to decode response body")
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::invalid_input()
            .with_message(errors.to_string())
            .with_source(errors)
    }
}

/// Failure envelope returned by the document service.
///
/// `status_code` is never part of the envelope; it is filled in from the
/// HTTP response that carried it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{code} (status {status_code}): {message}")]
pub struct ServiceError {
    /// HTTP status code of the failed response.
    #[serde(skip)]
    pub status_code: u16,
    /// Service error code, e.g. `NoSuchDocument`.
    #[serde(default)]
    pub code: String,
    /// Human-readable error message.
    #[serde(default)]
    pub message: String,
    /// Identifier the service assigned to the failed request.
    #[serde(default)]
    pub request_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_error_new() {
        let error = Error::new(ErrorKind::Unknown);
        assert_eq!(error.kind, ErrorKind::Unknown);
        assert!(error.message.is_none());
        assert!(error.source.is_none());
    }

    #[test]
    fn test_error_display() {
        let error = Error::invalid_input().with_message("document id must not be empty");

        let display_str = error.to_string();
        assert!(display_str.contains("invalid_input"));
        assert!(display_str.contains("document id must not be empty"));
    }

    #[test]
    fn test_service_error_round_trips_through_source() {
        let envelope = ServiceError {
            status_code: 404,
            code: "NotFound".into(),
            message: "document not found".into(),
            request_id: Some("req-1".into()),
        };
        let error = Error::service(envelope.clone());

        assert_eq!(error.kind(), ErrorKind::ServiceError);
        assert_eq!(error.service_error(), Some(&envelope));
        assert!(error.to_string().contains("NotFound"));
    }

    #[test]
    fn test_service_error_absent_for_other_kinds() {
        let source = std::io::Error::other("connection reset");
        let error = Error::from_source(ErrorKind::NetworkError, source);
        assert!(error.service_error().is_none());
    }

    #[test]
    fn test_decode_error_kind() {
        let json_error = serde_json::from_str::<ServiceError>("not json").unwrap_err();
        let error = Error::from(json_error);
        assert_eq!(error.kind, ErrorKind::Serialization);
        assert!(error.source.is_some());
    }

    #[test]
    fn test_retryable() {
        assert!(ErrorKind::NetworkError.is_retryable());
        assert!(ErrorKind::Timeout.is_retryable());

        assert!(!ErrorKind::InvalidInput.is_retryable());
        assert!(!ErrorKind::ServiceError.is_retryable());
        assert!(!ErrorKind::Serialization.is_retryable());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            ErrorKind::from_str("service_error").unwrap(),
            ErrorKind::ServiceError
        );
        assert_eq!(ErrorKind::from_str("timeout").unwrap(), ErrorKind::Timeout);
        assert!(ErrorKind::from_str("invalid").is_err());
    }
}
