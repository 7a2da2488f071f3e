//! Client builder for configuring transport, ids and encoding
//!
//! # Examples
//!
//! ```rust,no_run
//! use jrpc_client::ClientBuilder;
//! use jrpc_core::{OmissionPolicy, SequentialIds};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn example() -> jrpc_core::Result<()> {
//! let client = ClientBuilder::new("http://localhost:8080/rpc")
//!     .timeout(Duration::from_secs(5))
//!     .with_omission(OmissionPolicy::AbsentOnly)
//!     .with_id_generator(Arc::new(SequentialIds::new()))
//!     .build()?;
//!
//! let response = client.call("math.add", Some(serde_json::json!([1, 4]))).await?;
//! # Ok(())
//! # }
//! ```

use crate::transport::{HttpTransport, Transport};
use crate::JrpcClient;
use jrpc_core::{CodecConfig, IdGenerator, OmissionPolicy, Result, UuidGenerator};
use std::sync::Arc;
use std::time::Duration;

/// Default timeout for a single HTTP exchange
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for configuring and creating a `JrpcClient`
pub struct ClientBuilder {
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: String,
    codec: CodecConfig,
    ids: Option<Arc<dyn IdGenerator>>,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    /// Create a builder for the given endpoint URL
    ///
    /// The codec configuration starts from [`CodecConfig::from_env`].
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: concat!("jrpc-client/", env!("CARGO_PKG_VERSION")).to_string(),
            codec: CodecConfig::from_env(),
            ids: None,
            transport: None,
        }
    }

    /// Set the timeout for a whole exchange (connect, send, read reply)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Wait for replies indefinitely
    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Replace the whole codec configuration
    pub fn with_codec(mut self, codec: CodecConfig) -> Self {
        self.codec = codec;
        self
    }

    /// Choose which values are omitted from outgoing messages
    pub fn with_omission(mut self, omission: OmissionPolicy) -> Self {
        self.codec.omission = omission;
        self
    }

    /// Generate call ids with `ids` instead of random UUIDs
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = Some(ids);
        self
    }

    /// Send through a custom transport instead of HTTP
    ///
    /// Timeout and user agent settings are ignored in that case.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` if the HTTP client cannot be created.
    pub fn build(self) -> Result<JrpcClient> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(self.timeout, &self.user_agent)?),
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            omission = %self.codec.omission,
            timeout = ?self.timeout,
            "Built JSON-RPC client"
        );

        Ok(JrpcClient {
            endpoint: self.endpoint,
            transport,
            ids: self.ids.unwrap_or_else(|| Arc::new(UuidGenerator)),
            codec: self.codec,
        })
    }
}
