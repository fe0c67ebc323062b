//! Operation results decoded from service responses.
//!
//! Fields the service always returns are required; a success body missing
//! them fails to decode instead of yielding an empty result. Everything else
//! falls back to its default, and unknown fields are ignored.

use serde::{Deserialize, Serialize};

use super::{DocumentStatus, ListDocumentsParams};

/// Identifier and upload location of a newly registered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDocumentResult {
    /// Service-assigned document identifier.
    pub document_id: String,
    /// Object storage bucket to upload the source file into.
    #[serde(default)]
    pub bucket: String,
    /// Object key to upload the source file as.
    #[serde(default)]
    pub object: String,
    /// Object storage endpoint hosting the bucket.
    #[serde(default)]
    pub bos_endpoint: String,
}

/// Where the source file of a document was uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadInfo {
    #[serde(default)]
    pub bucket: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub bos_endpoint: String,
}

/// Conversion output of a published document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishInfo {
    /// Number of converted pages.
    #[serde(default)]
    pub page_count: i64,
    /// Size of the converted output.
    #[serde(default)]
    pub size_in_bytes: i64,
    /// URL of the cover image.
    #[serde(default)]
    pub cover_url: String,
    /// When the document was published.
    #[serde(default)]
    pub publish_time: String,
}

/// Conversion failure reported for a document in the `FAILED` state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// Full description of a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryDocumentResult {
    /// Service-assigned document identifier.
    pub document_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub format: String,
    /// Conversion target, e.g. `h5`.
    #[serde(default)]
    pub target_type: String,
    /// Current lifecycle state.
    pub status: DocumentStatus,
    #[serde(default)]
    pub upload_info: UploadInfo,
    /// Present once the document is published.
    #[serde(default)]
    pub publish_info: Option<PublishInfo>,
    #[serde(default)]
    pub notification: String,
    /// Access level, e.g. `PUBLIC`.
    #[serde(default)]
    pub access: String,
    /// Present when conversion failed.
    #[serde(default)]
    pub error: Option<DocumentError>,
    #[serde(default)]
    pub create_time: String,
}

impl QueryDocumentResult {
    /// Returns the cover URL, if the document has been published.
    pub fn cover_url(&self) -> Option<&str> {
        self.publish_info
            .as_ref()
            .map(|info| info.cover_url.as_str())
            .filter(|url| !url.is_empty())
    }
}

/// Token for rendering a document with the client-side reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadDocumentResult {
    pub document_id: String,
    /// Host serving the rendered document.
    #[serde(default)]
    pub host: String,
    /// Read token handed to the reader.
    pub token: String,
    #[serde(default)]
    pub create_time: String,
    #[serde(default)]
    pub expire_time: String,
}

/// A single page image produced by conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentImage {
    /// Zero-based page index, when the service reports it.
    #[serde(default)]
    pub page_index: Option<i64>,
    pub url: String,
}

/// Page images of a converted document, in page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetImagesResult {
    pub images: Vec<DocumentImage>,
}

impl GetImagesResult {
    /// Returns the image URLs in page order.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.images.iter().map(|image| image.url.as_str())
    }
}

/// One page of the document listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsResult {
    /// Marker this page started from.
    #[serde(default)]
    pub marker: String,
    /// Whether more documents follow this page.
    #[serde(default)]
    pub is_truncated: bool,
    /// Marker to pass to fetch the next page.
    #[serde(default)]
    pub next_marker: String,
    #[serde(default)]
    pub docs: Vec<QueryDocumentResult>,
}

impl ListDocumentsResult {
    /// Builds the parameters for the next page, keeping the previous filters.
    ///
    /// Returns `None` on the last page.
    pub fn next_page_params(&self, previous: &ListDocumentsParams) -> Option<ListDocumentsParams> {
        if !self.is_truncated || self.next_marker.is_empty() {
            return None;
        }

        Some(ListDocumentsParams {
            marker: Some(self.next_marker.clone()),
            ..previous.clone()
        })
    }
}
