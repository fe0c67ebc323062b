//! Document service client.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;

use crate::types::{
    GetImagesResult, ListDocumentsParams, ListDocumentsResult, QueryDocumentParams,
    QueryDocumentResult, ReadDocumentParams, ReadDocumentResult, RegisterDocumentParams,
    RegisterDocumentResult,
};
use crate::{ClientConfig, DocumentRequest, DocumentResponse, DocumentTransport, Result};

/// Tracing target for client operations.
pub const TRACING_TARGET: &str = "bcedoc_client::client";

/// Operations offered by the document service.
///
/// Each method performs exactly one request. Arguments are validated before
/// anything is sent; a rejected argument never reaches the transport.
#[async_trait::async_trait]
pub trait DocumentApi: Send + Sync {
    /// Registers a document and returns where to upload its source file.
    async fn register(&self, params: &RegisterDocumentParams) -> Result<RegisterDocumentResult>;

    /// Starts conversion of an uploaded document.
    async fn publish(&self, document_id: &str) -> Result<()>;

    /// Fetches the current state of a document.
    async fn query(
        &self,
        document_id: &str,
        params: Option<&QueryDocumentParams>,
    ) -> Result<QueryDocumentResult>;

    /// Obtains a token for rendering a document with the client-side reader.
    async fn read(
        &self,
        document_id: &str,
        params: Option<&ReadDocumentParams>,
    ) -> Result<ReadDocumentResult>;

    /// Lists the page images produced by conversion.
    async fn get_images(&self, document_id: &str) -> Result<GetImagesResult>;

    /// Deletes a document.
    async fn delete(&self, document_id: &str) -> Result<()>;

    /// Lists documents, one page per call.
    async fn list(&self, params: &ListDocumentsParams) -> Result<ListDocumentsResult>;
}

/// Client for the document service, generic over its transport.
///
/// The client is stateless apart from its configuration; the transport is
/// wrapped in `Arc` for cheap cloning and shared by concurrent calls.
///
/// # Examples
///
/// ```rust,ignore
/// use bcedoc_client::{DocumentApi, DocumentClient, RegisterDocumentParams};
///
/// let client = DocumentClient::new(transport);
/// let registered = client
///     .register(&RegisterDocumentParams::new("Quarterly report", "pdf"))
///     .await?;
/// ```
#[derive(Clone)]
pub struct DocumentClient {
    transport: Arc<dyn DocumentTransport>,
    config: ClientConfig,
}

impl fmt::Debug for DocumentClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl DocumentClient {
    /// Creates a client with the default configuration.
    pub fn new<T>(transport: T) -> Self
    where
        T: DocumentTransport + 'static,
    {
        Self::from_shared(Arc::new(transport))
    }

    /// Creates a client from an already shared transport.
    pub fn from_shared(transport: Arc<dyn DocumentTransport>) -> Self {
        Self {
            transport,
            config: ClientConfig::default(),
        }
    }

    /// Replaces the client configuration.
    #[must_use]
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends a request and checks the response status.
    async fn execute(
        &self,
        operation: &'static str,
        request: DocumentRequest,
    ) -> Result<DocumentResponse> {
        let started_at = Instant::now();

        tracing::debug!(
            target: TRACING_TARGET,
            operation,
            method = %request.method,
            path = %request.path,
            has_body = request.body.is_some(),
            "Sending document request"
        );

        let response = self.transport.send(&request).await?;

        tracing::debug!(
            target: TRACING_TARGET,
            operation,
            status_code = response.status_code,
            request_id = ?response.request_id,
            elapsed_ms = started_at.elapsed().as_millis(),
            "Document request completed"
        );

        response.error_for_status()
    }

    /// Sends a request and decodes the JSON body of a successful response.
    async fn execute_json<T>(&self, operation: &'static str, request: DocumentRequest) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.execute(operation, request).await?.json()
    }
}

#[async_trait::async_trait]
impl DocumentApi for DocumentClient {
    async fn register(&self, params: &RegisterDocumentParams) -> Result<RegisterDocumentResult> {
        let request = DocumentRequest::register(params)?;
        self.execute_json("register", request).await
    }

    async fn publish(&self, document_id: &str) -> Result<()> {
        let request = DocumentRequest::publish(document_id)?;
        self.execute("publish", request).await?;
        Ok(())
    }

    async fn query(
        &self,
        document_id: &str,
        params: Option<&QueryDocumentParams>,
    ) -> Result<QueryDocumentResult> {
        let request = DocumentRequest::query(document_id, params)?;
        self.execute_json("query", request).await
    }

    async fn read(
        &self,
        document_id: &str,
        params: Option<&ReadDocumentParams>,
    ) -> Result<ReadDocumentResult> {
        let request = DocumentRequest::read(document_id, params)?;
        self.execute_json("read", request).await
    }

    async fn get_images(&self, document_id: &str) -> Result<GetImagesResult> {
        let request = DocumentRequest::get_images(document_id)?;
        self.execute_json("get_images", request).await
    }

    async fn delete(&self, document_id: &str) -> Result<()> {
        let request = DocumentRequest::delete(document_id)?;
        self.execute("delete", request).await?;
        Ok(())
    }

    async fn list(&self, params: &ListDocumentsParams) -> Result<ListDocumentsResult> {
        let request = DocumentRequest::list(params, self.config.list_max_size)?;
        self.execute_json("list", request).await
    }
}
