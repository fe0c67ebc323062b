#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod client;
mod config;
mod error;
#[cfg(any(test, feature = "test-utils"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
mod mock;
#[doc(hidden)]
pub mod prelude;
mod transport;

pub mod request;
pub mod response;
pub mod types;

pub use client::{DocumentApi, DocumentClient, TRACING_TARGET};
pub use config::{ClientConfig, DEFAULT_LIST_MAX_SIZE};
pub use error::{BoxedError, Error, ErrorKind, Result, ServiceError};
#[cfg(any(test, feature = "test-utils"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
pub use mock::MockTransport;
pub use request::{DocumentRequest, Method};
pub use response::DocumentResponse;
pub use transport::DocumentTransport;
pub use types::{
    Access, DocumentStatus, GetImagesResult, ListDocumentsParams, ListDocumentsResult,
    QueryDocumentParams, QueryDocumentResult, ReadDocumentParams, ReadDocumentResult,
    RegisterDocumentParams, RegisterDocumentResult, TargetType,
};
