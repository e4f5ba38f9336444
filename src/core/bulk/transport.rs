//! HTTP transport used to submit bulk requests
//!
//! The processor only needs "POST these bytes with this content type and give
//! me the status and body back". [`ReqwestTransport`] is the bundled
//! implementation; authentication, proxies and retries belong in whatever
//! transport the embedding application injects.

use crate::config::HttpConfig;
use crate::utils::error::{BulkError, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder};
use tracing::debug;

/// Content type of bulk request bodies
pub const NDJSON_CONTENT_TYPE: &str = "application/x-ndjson";

/// Status and raw body of a transport response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Bytes,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text for logging; invalid UTF-8 is replaced
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends a bulk request body to the backend
#[async_trait]
pub trait BulkTransport: Send + Sync {
    /// POST `body` to `url` with the given content type
    ///
    /// Non-2xx responses are returned as `Ok`; only failures to obtain a
    /// response at all are errors.
    async fn post(&self, url: &str, content_type: &str, body: Bytes) -> Result<TransportResponse>;
}

/// [`BulkTransport`] backed by a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a client from the HTTP configuration
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (key, value) in &config.default_headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| BulkError::Config(format!("Invalid header name '{}': {}", key, e)))?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                BulkError::Config(format!("Invalid header value for '{}': {}", key, e))
            })?;
            headers.insert(name, value);
        }

        let client = ClientBuilder::new()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| BulkError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an already configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BulkTransport for ReqwestTransport {
    async fn post(&self, url: &str, content_type: &str, body: Bytes) -> Result<TransportResponse> {
        debug!(url, bytes = body.len(), "Sending bulk request");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(TransportResponse { status, body })
    }
}
