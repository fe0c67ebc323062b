//! Internal error types for bcedoc-reqwest.

use bcedoc_client::ErrorKind;
use thiserror::Error;

/// Result type alias for bcedoc-reqwest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Internal error type for bcedoc-reqwest operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// The configured endpoint is not a usable URL.
    #[error("Invalid endpoint: {0}")]
    Endpoint(String),
}

impl From<Error> for bcedoc_client::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Reqwest(e) => {
                if e.is_timeout() {
                    bcedoc_client::Error::timeout()
                        .with_message(e.to_string())
                        .with_source(e)
                } else if e.is_connect() {
                    bcedoc_client::Error::network_error()
                        .with_message("Connection failed")
                        .with_source(e)
                } else if e.is_builder() {
                    bcedoc_client::Error::configuration()
                        .with_message(e.to_string())
                        .with_source(e)
                } else if e.is_redirect() {
                    bcedoc_client::Error::new(ErrorKind::Unknown)
                        .with_message(e.to_string())
                        .with_source(e)
                } else {
                    bcedoc_client::Error::network_error()
                        .with_message(e.to_string())
                        .with_source(e)
                }
            }
            Error::Endpoint(message) => bcedoc_client::Error::configuration().with_message(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_error_is_configuration() {
        let error = bcedoc_client::Error::from(Error::Endpoint("missing scheme".into()));
        assert_eq!(error.kind, ErrorKind::Configuration);
        assert_eq!(error.message.as_deref(), Some("missing scheme"));
    }

    #[test]
    fn test_builder_error_is_configuration() {
        let reqwest_error = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();

        let error = bcedoc_client::Error::from(Error::from(reqwest_error));
        assert_eq!(error.kind, ErrorKind::Configuration);
    }
}
