//! Reqwest client module.
//!
//! This module provides the HTTP client and its configuration. It wraps the
//! `reqwest` crate for talking to the document service.

mod client;
mod config;

pub use client::{ReqwestClient, TRACING_TARGET};
pub use config::ReqwestConfig;
