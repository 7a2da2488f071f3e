//! Transports that carry encoded messages to a peer
//!
//! A [`Transport`] takes already encoded JSON-RPC text and a destination and
//! returns whatever text the peer answered with. It knows nothing about the
//! message model; encoding and decoding stay in the client.

use async_trait::async_trait;
use jrpc_core::{Error, Result};
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// Send encoded messages and return the raw reply text
#[async_trait]
pub trait Transport: Send + Sync {
    /// Deliver `payload` to `endpoint`
    ///
    /// An empty string means the peer sent no body, as it should for
    /// notifications.
    async fn send(&self, payload: String, endpoint: &str) -> Result<String>;
}

/// HTTP POST transport backed by `reqwest`
///
/// Every message is sent as its own POST with `Content-Type:
/// application/json`. No retries are attempted.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with an optional overall request timeout
    pub fn new(timeout: Option<Duration>, user_agent: &str) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| Error::Transport(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing `reqwest` client, e.g. one with custom TLS settings
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[tracing::instrument(skip(self, payload), fields(bytes = payload.len()))]
    async fn send(&self, payload: String, endpoint: &str) -> Result<String> {
        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_reqwest_error)?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "Received reply");

        // Error statuses that still carry a body are usually JSON-RPC error
        // responses; hand them to the decoder.
        if !status.is_success() && body.is_empty() {
            return Err(Error::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

fn map_reqwest_error(error: reqwest::Error) -> Error {
    if error.is_timeout() {
        Error::Timeout
    } else {
        Error::Transport(error.to_string())
    }
}
