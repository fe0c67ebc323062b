//! Reqwest-based transport for the document service client.
//!
//! This crate provides [`ReqwestClient`], an implementation of
//! [`bcedoc_client::DocumentTransport`] over HTTP.
//!
//! # Example
//!
//! ```rust,ignore
//! use bcedoc_client::{DocumentApi, DocumentClient};
//! use bcedoc_reqwest::{ReqwestClient, ReqwestConfig};
//!
//! let config = ReqwestConfig::default().with_endpoint("https://doc.bj.baidubce.com");
//! let transport = ReqwestClient::new(config)?;
//!
//! // Hand the transport to the client
//! let client = transport.into_document_client();
//! let page = client.list(&Default::default()).await?;
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod connect;
mod error;
mod service;

pub use crate::connect::{ReqwestClient, ReqwestConfig, TRACING_TARGET};
pub use crate::error::{Error, Result};
