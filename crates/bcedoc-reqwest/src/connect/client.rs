//! Reqwest-based HTTP client for the document service.

use std::sync::Arc;

use bcedoc_client::{DocumentClient, DocumentRequest};
use reqwest::Client;
use url::Url;

use super::ReqwestConfig;
use crate::error::{Error, Result};

/// Tracing target for reqwest client operations.
pub const TRACING_TARGET: &str = "bcedoc_reqwest::client";

/// Inner client that holds the HTTP client and configuration.
struct ReqwestClientInner {
    http: Client,
    endpoint: Url,
    config: ReqwestConfig,
}

/// Reqwest-based HTTP transport for the document service.
///
/// This client implements the [`DocumentTransport`] trait. It resolves each
/// request descriptor against the configured endpoint and returns the raw
/// response; interpreting it is left to [`DocumentClient`].
///
/// [`DocumentTransport`]: bcedoc_client::DocumentTransport
///
/// # Examples
///
/// ```rust,ignore
/// use bcedoc_reqwest::{ReqwestClient, ReqwestConfig};
///
/// let config = ReqwestConfig::new("https://doc.bj.baidubce.com");
/// let client = ReqwestClient::new(config)?;
///
/// let documents = client.into_document_client();
/// ```
#[derive(Clone)]
pub struct ReqwestClient {
    inner: Arc<ReqwestClientInner>,
}

impl std::fmt::Debug for ReqwestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl ReqwestClient {
    /// Creates a new reqwest client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is invalid or the HTTP client cannot
    /// be created.
    pub fn new(config: ReqwestConfig) -> Result<Self> {
        let timeout = config.effective_timeout();
        let user_agent = config.effective_user_agent();

        tracing::debug!(
            target: TRACING_TARGET,
            endpoint = %config.endpoint,
            timeout_ms = timeout.as_millis(),
            "Creating reqwest client"
        );

        let endpoint = config.endpoint_url()?;
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(&user_agent)
            .build()?;

        let inner = ReqwestClientInner {
            http,
            endpoint,
            config,
        };
        let client = Self {
            inner: Arc::new(inner),
        };

        tracing::info!(
            target: TRACING_TARGET,
            endpoint = %client.inner.endpoint,
            "Reqwest client created successfully"
        );

        Ok(client)
    }

    /// Gets the underlying HTTP client.
    pub(crate) fn http(&self) -> &Client {
        &self.inner.http
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &ReqwestConfig {
        &self.inner.config
    }

    /// Converts this transport into a [`DocumentClient`].
    pub fn into_document_client(self) -> DocumentClient {
        DocumentClient::new(self)
    }

    /// Resolves a request descriptor against the endpoint.
    ///
    /// A path prefix on the endpoint (e.g. a proxy mount point) is kept.
    pub(crate) fn request_url(&self, request: &DocumentRequest) -> Url {
        let mut url = self.inner.endpoint.clone();
        let prefix = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{prefix}{}", request.path));

        let query = request.query_string();
        url.set_query((!query.is_empty()).then_some(query.as_str()));
        url
    }
}

#[cfg(test)]
mod tests {
    use bcedoc_client::{ListDocumentsParams, ReadDocumentParams};

    use super::*;

    fn client(endpoint: &str) -> ReqwestClient {
        ReqwestClient::new(ReqwestConfig::new(endpoint)).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = client("https://doc.bj.baidubce.com");
        assert!(client.config().user_agent.is_none());
    }

    #[test]
    fn test_client_rejects_invalid_endpoint() {
        let result = ReqwestClient::new(ReqwestConfig::new("not-a-url"));
        assert!(matches!(result, Err(Error::Endpoint(_))));
    }

    #[test]
    fn test_request_url_flags_and_values() {
        let client = client("https://doc.bj.baidubce.com");
        let request =
            DocumentRequest::read("doc-1", Some(&ReadDocumentParams::new(60))).unwrap();

        assert_eq!(
            client.request_url(&request).as_str(),
            "https://doc.bj.baidubce.com/v2/document/doc-1?read&expireInSeconds=60"
        );
    }

    #[test]
    fn test_request_url_keeps_list_trailing_slash() {
        let client = client("https://doc.bj.baidubce.com");
        let request = DocumentRequest::list(&ListDocumentsParams::default(), 200).unwrap();

        assert_eq!(
            client.request_url(&request).as_str(),
            "https://doc.bj.baidubce.com/v2/document/"
        );
    }

    #[test]
    fn test_request_url_keeps_document_id_in_one_segment() {
        let client = client("https://doc.bj.baidubce.com");

        let traversal = DocumentRequest::delete("../../admin").unwrap();
        assert_eq!(
            client.request_url(&traversal).as_str(),
            "https://doc.bj.baidubce.com/v2/document/..%2F..%2Fadmin"
        );

        let nested = DocumentRequest::delete("a/b").unwrap();
        assert_eq!(
            client.request_url(&nested).as_str(),
            "https://doc.bj.baidubce.com/v2/document/a%2Fb"
        );

        let reserved = DocumentRequest::get_images("x?register").unwrap();
        assert_eq!(
            client.request_url(&reserved).as_str(),
            "https://doc.bj.baidubce.com/v2/document/x%3Fregister?getImages"
        );
    }

    #[test]
    fn test_request_url_keeps_endpoint_prefix() {
        let client = client("http://127.0.0.1:9000/proxy/");
        let request = DocumentRequest::delete("doc-1").unwrap();

        assert_eq!(
            client.request_url(&request).as_str(),
            "http://127.0.0.1:9000/proxy/v2/document/doc-1"
        );
    }
}
