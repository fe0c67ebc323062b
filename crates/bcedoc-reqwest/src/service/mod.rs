//! Document transport implementation.
//!
//! This module implements the [`DocumentTransport`] trait for [`ReqwestClient`].

use std::time::Instant;

use bcedoc_client::response::REQUEST_ID_HEADER;
use bcedoc_client::{DocumentRequest, DocumentResponse, DocumentTransport, Method};

use crate::connect::{ReqwestClient, TRACING_TARGET};
use crate::error::Error;

fn http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait::async_trait]
impl DocumentTransport for ReqwestClient {
    async fn send(&self, request: &DocumentRequest) -> bcedoc_client::Result<DocumentResponse> {
        let started_at = Instant::now();
        let url = self.request_url(request);

        tracing::debug!(
            target: TRACING_TARGET,
            method = %request.method,
            url = %url,
            "Sending HTTP request"
        );

        let mut http_request = self.http().request(http_method(request.method), url);

        for (name, value) in &request.headers {
            http_request = http_request.header(*name, value);
        }

        if let Some(body) = &request.body {
            http_request = http_request.body(body.clone());
        }

        let http_response = http_request.send().await.map_err(Error::from)?;

        let status_code = http_response.status().as_u16();
        let request_id = http_response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let body = http_response.bytes().await.map_err(Error::from)?;

        tracing::debug!(
            target: TRACING_TARGET,
            status_code,
            request_id = ?request_id,
            body_len = body.len(),
            elapsed_ms = started_at.elapsed().as_millis(),
            "HTTP request completed"
        );

        Ok(DocumentResponse {
            status_code,
            request_id,
            body,
        })
    }
}
