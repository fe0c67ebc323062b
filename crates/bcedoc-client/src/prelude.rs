//! Commonly used items from bcedoc-client.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bcedoc_client::prelude::*;
//! ```

pub use crate::types::{
    Access, DocumentStatus, GetImagesResult, ListDocumentsParams, ListDocumentsResult,
    QueryDocumentParams, QueryDocumentResult, ReadDocumentParams, ReadDocumentResult,
    RegisterDocumentParams, RegisterDocumentResult, TargetType,
};
pub use crate::{
    ClientConfig, DocumentApi, DocumentClient, DocumentRequest, DocumentResponse,
    DocumentTransport, Error, ErrorKind, Result, ServiceError,
};
