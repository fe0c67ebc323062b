//! Request descriptors for document service operations.
//!
//! A [`DocumentRequest`] is the transport-independent description of one HTTP
//! call. The per-operation constructors validate their inputs and produce the
//! exact path, query, headers and body the service expects; transports only
//! execute them.

use bytes::Bytes;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use strum::{AsRefStr, Display, IntoStaticStr};
use validator::Validate;

use crate::types::{
    ListDocumentsParams, QueryDocumentParams, ReadDocumentParams, RegisterDocumentParams,
};
use crate::{Error, Result};

/// Path of the document collection.
pub const DOCUMENT_URI: &str = "/v2/document";

/// Header name for the request body content type.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Content type sent with every request except listing.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json;charset=utf-8";

/// Characters left unescaped in query values and path segments (RFC 3986 unreserved).
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    /// Reads a document or the listing.
    Get,
    /// Registers a document.
    Post,
    /// Publishes a document.
    Put,
    /// Deletes a document.
    Delete,
}

/// A single query parameter.
///
/// Flags such as `register` have no value and are rendered without `=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    /// Parameter name.
    pub key: &'static str,
    /// Unencoded value; `None` for a flag.
    pub value: Option<String>,
}

/// Transport-independent description of one HTTP call.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute path below the service endpoint.
    pub path: String,
    /// Query parameters in the order they are sent.
    pub query: Vec<QueryParam>,
    /// Request headers.
    pub headers: Vec<(&'static str, String)>,
    /// Serialized request body, if any.
    pub body: Option<Bytes>,
}

impl DocumentRequest {
    /// Creates a request without query, headers or body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Builds the register request: `POST /v2/document?register`.
    ///
    /// # Errors
    ///
    /// Returns an invalid input error if the title or format is empty, or a
    /// serialization error if the body cannot be encoded.
    pub fn register(params: &RegisterDocumentParams) -> Result<Self> {
        params.validate()?;

        Self::new(Method::Post, DOCUMENT_URI)
            .with_flag("register")
            .with_default_content_type()
            .with_json_body(params)
    }

    /// Builds the publish request: `PUT /v2/document/{id}?publish`.
    pub fn publish(document_id: &str) -> Result<Self> {
        Ok(Self::new(Method::Put, document_path(document_id)?)
            .with_flag("publish")
            .with_default_content_type())
    }

    /// Builds the query request: `GET /v2/document/{id}[?https=<bool>]`.
    pub fn query(document_id: &str, params: Option<&QueryDocumentParams>) -> Result<Self> {
        let mut request = Self::new(Method::Get, document_path(document_id)?);
        if let Some(params) = params {
            request = request.with_param("https", params.https.to_string());
        }

        Ok(request.with_default_content_type())
    }

    /// Builds the read request: `GET /v2/document/{id}?read[&expireInSeconds=<int>]`.
    pub fn read(document_id: &str, params: Option<&ReadDocumentParams>) -> Result<Self> {
        let mut request = Self::new(Method::Get, document_path(document_id)?).with_flag("read");
        if let Some(params) = params {
            request = request.with_param("expireInSeconds", params.expire_in_seconds.to_string());
        }

        Ok(request.with_default_content_type())
    }

    /// Builds the image listing request: `GET /v2/document/{id}?getImages`.
    pub fn get_images(document_id: &str) -> Result<Self> {
        Ok(Self::new(Method::Get, document_path(document_id)?)
            .with_flag("getImages")
            .with_default_content_type())
    }

    /// Builds the delete request: `DELETE /v2/document/{id}`.
    pub fn delete(document_id: &str) -> Result<Self> {
        Ok(Self::new(Method::Delete, document_path(document_id)?).with_default_content_type())
    }

    /// Builds the list request: `GET /v2/document/` with optional filters.
    ///
    /// Unlike every other operation, listing carries no content type.
    ///
    /// # Errors
    ///
    /// Returns an invalid input error if the filters fail [`ListDocumentsParams::check`].
    pub fn list(params: &ListDocumentsParams, max_page_size: i64) -> Result<Self> {
        params.check(max_page_size)?;

        let mut request = Self::new(Method::Get, format!("{DOCUMENT_URI}/"));
        if let Some(status) = params.effective_status() {
            request = request.with_param("status", status.as_ref());
        }
        if let Some(marker) = params.effective_marker() {
            request = request.with_param("marker", marker);
        }
        if let Some(max_size) = params.effective_max_size() {
            request = request.with_param("maxSize", max_size.to_string());
        }

        Ok(request)
    }

    /// Adds a value-less query flag.
    pub fn with_flag(mut self, key: &'static str) -> Self {
        self.query.push(QueryParam { key, value: None });
        self
    }

    /// Adds a query parameter.
    pub fn with_param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push(QueryParam {
            key,
            value: Some(value.into()),
        });
        self
    }

    /// Adds a header.
    pub fn with_header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    /// Sets the raw body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes `value` as the JSON body.
    pub fn with_json_body<T: Serialize + ?Sized>(self, value: &T) -> Result<Self> {
        let body = serde_json::to_vec(value).map_err(|e| {
            Error::serialization()
                .with_message("Failed to encode request body")
                .with_source(e)
        })?;
        Ok(self.with_body(body))
    }

    fn with_default_content_type(self) -> Self {
        self.with_header(CONTENT_TYPE, DEFAULT_CONTENT_TYPE)
    }

    /// Returns whether the query contains `key`, with or without a value.
    pub fn has_param(&self, key: &str) -> bool {
        self.query.iter().any(|param| param.key == key)
    }

    /// Returns the value of query parameter `key`, if present with a value.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|param| param.key == key)
            .and_then(|param| param.value.as_deref())
    }

    /// Returns the value of header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Renders the query as it goes on the wire, without the leading `?`.
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|param| match &param.value {
                Some(value) => format!(
                    "{}={}",
                    param.key,
                    utf8_percent_encode(value, UNRESERVED)
                ),
                None => param.key.to_owned(),
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Renders the path followed by the query, if any.
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query_string())
        }
    }
}

/// Templates the item path for a document.
///
/// The id always occupies exactly one path segment: reserved characters such
/// as `/`, `?` and `#` are percent-encoded, and the dot segments `.` and `..`
/// are rejected.
fn document_path(document_id: &str) -> Result<String> {
    if document_id.trim().is_empty() {
        return Err(Error::invalid_input().with_message("document id must not be empty"));
    }

    if matches!(document_id, "." | "..") {
        return Err(Error::invalid_input()
            .with_message(format!("document id must not be a dot segment, got: {document_id}")));
    }

    let segment = utf8_percent_encode(document_id, UNRESERVED);
    Ok(format!("{DOCUMENT_URI}/{segment}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::types::DocumentStatus;

    #[test]
    fn test_register_request() {
        let params = RegisterDocumentParams::new("t", "pdf");
        let request = DocumentRequest::register(&params).unwrap();

        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/v2/document");
        assert!(request.has_param("register"));
        assert_eq!(request.path_and_query(), "/v2/document?register");
        assert_eq!(request.header("content-type"), Some(DEFAULT_CONTENT_TYPE));

        let body = request.body.unwrap();
        let decoded: RegisterDocumentParams = serde_json::from_slice(&body).unwrap();
        assert_eq!(decoded, params);
    }

    #[test]
    fn test_register_rejects_empty_params() {
        let params = RegisterDocumentParams::new("", "");
        let error = DocumentRequest::register(&params).unwrap_err();
        assert_eq!(error.kind, ErrorKind::InvalidInput);
    }

    #[test]
    fn test_publish_request() {
        let request = DocumentRequest::publish("doc-1").unwrap();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.path_and_query(), "/v2/document/doc-1?publish");
        assert!(request.body.is_none());
    }

    #[test]
    fn test_empty_document_id_is_rejected() {
        for result in [
            DocumentRequest::publish(""),
            DocumentRequest::query(" ", None),
            DocumentRequest::read("", None),
            DocumentRequest::get_images(""),
            DocumentRequest::delete(""),
        ] {
            assert_eq!(result.unwrap_err().kind, ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn test_document_id_stays_in_one_segment() {
        let nested = DocumentRequest::delete("a/b").unwrap();
        assert_eq!(nested.path, "/v2/document/a%2Fb");

        let traversal = DocumentRequest::delete("../../admin").unwrap();
        assert_eq!(traversal.path, "/v2/document/..%2F..%2Fadmin");

        let reserved = DocumentRequest::get_images("x?register#top%").unwrap();
        assert_eq!(reserved.path, "/v2/document/x%3Fregister%23top%25");
        assert_eq!(reserved.path_and_query(), "/v2/document/x%3Fregister%23top%25?getImages");

        let plain = DocumentRequest::publish("doc-raiqgu4s0dqrd9vd").unwrap();
        assert_eq!(plain.path, "/v2/document/doc-raiqgu4s0dqrd9vd");
    }

    #[test]
    fn test_dot_segment_document_id_is_rejected() {
        for id in [".", ".."] {
            let error = DocumentRequest::delete(id).unwrap_err();
            assert_eq!(error.kind, ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn test_query_request() {
        let params = QueryDocumentParams::new(true);
        let request = DocumentRequest::query("abc123", Some(&params)).unwrap();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "/v2/document/abc123");
        assert_eq!(request.param("https"), Some("true"));

        let plain = DocumentRequest::query("abc123", None).unwrap();
        assert!(plain.query.is_empty());
        assert_eq!(plain.path_and_query(), "/v2/document/abc123");
    }

    #[test]
    fn test_read_request() {
        let params = ReadDocumentParams::new(3600);
        let request = DocumentRequest::read("doc-1", Some(&params)).unwrap();
        assert_eq!(
            request.path_and_query(),
            "/v2/document/doc-1?read&expireInSeconds=3600"
        );

        let without_params = DocumentRequest::read("doc-1", None).unwrap();
        assert!(without_params.has_param("read"));
        assert!(!without_params.has_param("expireInSeconds"));
    }

    #[test]
    fn test_get_images_and_delete_requests() {
        let images = DocumentRequest::get_images("doc-1").unwrap();
        assert_eq!(images.method, Method::Get);
        assert_eq!(images.path_and_query(), "/v2/document/doc-1?getImages");

        let delete = DocumentRequest::delete("doc-1").unwrap();
        assert_eq!(delete.method, Method::Delete);
        assert_eq!(delete.path_and_query(), "/v2/document/doc-1");
        assert_eq!(delete.header(CONTENT_TYPE), Some(DEFAULT_CONTENT_TYPE));
    }

    #[test]
    fn test_list_request() {
        let params = ListDocumentsParams::new()
            .with_status(DocumentStatus::Published)
            .with_marker("m1")
            .with_max_size(20);
        let request = DocumentRequest::list(&params, 200).unwrap();

        assert_eq!(request.path, "/v2/document/");
        assert!(request.headers.is_empty());
        assert_eq!(request.query_string(), "status=PUBLISHED&marker=m1&maxSize=20");
    }

    #[test]
    fn test_list_request_without_filters() {
        let request = DocumentRequest::list(&ListDocumentsParams::default(), 200).unwrap();
        assert!(request.query.is_empty());
        assert_eq!(request.path_and_query(), "/v2/document/");
    }

    #[test]
    fn test_list_rejects_negative_max_size() {
        let params = ListDocumentsParams::new().with_max_size(-5);
        let error = DocumentRequest::list(&params, 200).unwrap_err();
        assert_eq!(error.kind, ErrorKind::InvalidInput);
    }

    #[test]
    fn test_query_values_are_percent_encoded() {
        let request = DocumentRequest::new(Method::Get, "/v2/document/")
            .with_param("marker", "a b/c=d~e");
        assert_eq!(request.query_string(), "marker=a%20b%2Fc%3Dd~e");
    }

    #[test]
    fn test_method_names() {
        assert_eq!(Method::Delete.as_ref(), "DELETE");
        assert_eq!(Method::Get.to_string(), "GET");
    }
}
