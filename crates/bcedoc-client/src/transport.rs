//! Transport abstraction executing request descriptors.

use crate::{DocumentRequest, DocumentResponse, Result};

/// Executes one [`DocumentRequest`] against the document service.
///
/// Implementations own endpoint resolution, authentication, connection
/// handling and timeouts. They report non-2xx answers as an `Ok` response;
/// `Err` is reserved for failures to complete the exchange at all.
///
/// Implement this trait to plug in a custom HTTP stack or a test double.
#[async_trait::async_trait]
pub trait DocumentTransport: Send + Sync {
    /// Sends the request and returns the raw response.
    async fn send(&self, request: &DocumentRequest) -> Result<DocumentResponse>;
}

#[async_trait::async_trait]
impl<T> DocumentTransport for std::sync::Arc<T>
where
    T: DocumentTransport + ?Sized,
{
    async fn send(&self, request: &DocumentRequest) -> Result<DocumentResponse> {
        (**self).send(request).await
    }
}
