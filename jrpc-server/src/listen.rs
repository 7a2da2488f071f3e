//! Receiving JSON-RPC messages from HTTP POST bodies
//!
//! [`listen`] is a warp filter that accepts a POST, reads the whole body and
//! decodes it. Decoding failures are not rejections: the filter extracts the
//! `Result` so the route can answer with a JSON-RPC error object instead of
//! an HTTP error page.

use bytes::Bytes;
use jrpc_core::{codec, CodecConfig, Message, Result};
use warp::{Filter, Rejection};

/// Largest body accepted by default (1 MiB)
pub const DEFAULT_MAX_BODY_BYTES: u64 = 1024 * 1024;

/// Configuration shared by the listen and respond sides of a route
#[derive(Debug, Clone, Copy)]
pub struct ListenConfig {
    /// Bodies declaring a larger `Content-Length` are rejected
    pub max_body_bytes: u64,
    /// Encoding used for replies
    pub codec: CodecConfig,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            codec: CodecConfig::default(),
        }
    }
}

impl ListenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default limits with the codec read from the environment
    pub fn from_env() -> Self {
        Self {
            codec: CodecConfig::from_env(),
            ..Self::default()
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: u64) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    pub fn with_codec(mut self, codec: CodecConfig) -> Self {
        self.codec = codec;
        self
    }
}

/// Filter extracting the decoded message from a POST body
///
/// Rejects non-POST requests and bodies over `max_body_bytes`; pair it with
/// [`handle_rejection`](crate::handle_rejection) to turn those into replies.
///
/// # Examples
///
/// ```rust,no_run
/// use jrpc_core::{Message, Response, Result};
/// use jrpc_server::{error_reply, listen, respond, ListenConfig};
/// use warp::Filter;
///
/// # async fn example() {
/// let config = ListenConfig::default();
/// let route = listen(&config).map(move |decoded: Result<Message>| match decoded {
///     Ok(Message::Request(request)) => {
///         let id = request.id.clone().unwrap_or_default();
///         respond(&Response::success(serde_json::json!("pong"), id))
///     }
///     Ok(_) => respond(&Response::failure(jrpc_core::ErrorObject::invalid_request(), jrpc_core::Id::Null)),
///     Err(error) => error_reply(&error, jrpc_core::Id::Null, &config.codec),
/// });
///
/// warp::serve(route).run(([127, 0, 0, 1], 8080)).await;
/// # }
/// ```
pub fn listen(
    config: &ListenConfig,
) -> impl Filter<Extract = (Result<Message>,), Error = Rejection> + Clone {
    warp::post()
        .and(warp::body::content_length_limit(config.max_body_bytes))
        .and(warp::body::bytes())
        .map(|body: Bytes| {
            let decoded = codec::decode_bytes(&body);
            match &decoded {
                Ok(message) => {
                    tracing::debug!(kind = message.kind(), bytes = body.len(), "Received message")
                }
                Err(e) => tracing::debug!(error = %e, bytes = body.len(), "Undecodable body"),
            }
            decoded
        })
}
