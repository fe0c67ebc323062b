//! Raw responses returned by a transport.

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::{Error, Result, ServiceError};

/// Response header carrying the service-assigned request id.
pub const REQUEST_ID_HEADER: &str = "x-bce-request-id";

/// Status and body of one completed HTTP exchange.
///
/// The body is kept raw and decoded on demand, either into a typed result on
/// success or into a [`ServiceError`] on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentResponse {
    /// HTTP status code.
    pub status_code: u16,
    /// Value of the [`REQUEST_ID_HEADER`] header, if the service sent one.
    pub request_id: Option<String>,
    /// Raw response body.
    pub body: Bytes,
}

impl DocumentResponse {
    /// Creates a response with the given status and body.
    pub fn new(status_code: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status_code,
            request_id: None,
            body: body.into(),
        }
    }

    /// Creates a response carrying `value` as a JSON body.
    pub fn json_body<T: serde::Serialize + ?Sized>(status_code: u16, value: &T) -> Result<Self> {
        let body = serde_json::to_vec(value).map_err(|e| {
            Error::serialization()
                .with_message("Failed to encode response body")
                .with_source(e)
        })?;
        Ok(Self::new(status_code, body))
    }

    /// Sets the request id reported by the service.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Returns whether the service accepted the request (2xx status code).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(Error::from)
    }

    /// Decodes the service error envelope.
    ///
    /// Bodies that are not an envelope still produce an error, keyed by the
    /// HTTP status code.
    pub fn service_error(&self) -> ServiceError {
        let mut error = serde_json::from_slice::<ServiceError>(&self.body)
            .ok()
            .filter(|envelope| !envelope.code.is_empty())
            .unwrap_or_else(|| ServiceError {
                code: self.status_code.to_string(),
                message: self.fallback_message(),
                ..ServiceError::default()
            });

        error.status_code = self.status_code;
        if error.request_id.is_none() {
            error.request_id = self.request_id.clone();
        }

        error
    }

    /// Passes successful responses through and turns failures into service errors.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::service(self.service_error()))
        }
    }

    fn fallback_message(&self) -> String {
        let text = String::from_utf8_lossy(&self.body);
        let text = text.trim();
        if text.is_empty() {
            format!("service responded with status {}", self.status_code)
        } else {
            text.to_owned()
        }
    }
}
