//! HTTP server side of a JSON-RPC 2.0 exchange
//!
//! This crate does not route methods. It gives a warp application the two
//! pieces it needs to speak JSON-RPC over HTTP:
//!
//! - [`listen`]: a filter that reads a POST body and decodes it into a
//!   [`Message`](jrpc_core::Message)
//! - [`respond`] / [`respond_with`]: encode a message as a JSON reply
//!
//! plus [`error_reply`] for local failures, [`acknowledge`] for
//! notifications, and [`handle_rejection`] for transport level problems.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use jrpc_core::{ErrorObject, Id, Message, Response, Result};
//! use jrpc_server::{acknowledge, error_reply, handle_rejection, listen, respond_with, ListenConfig};
//! use warp::Filter;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ListenConfig::from_env();
//!
//!     let route = listen(&config)
//!         .map(move |decoded: Result<Message>| match decoded {
//!             Ok(Message::Request(request)) if request.is_notification() => acknowledge(),
//!             Ok(Message::Request(request)) => {
//!                 let id = request.id.clone().unwrap_or_default();
//!                 let reply = match request.method.as_str() {
//!                     "ping" => Response::success(serde_json::json!("pong"), id),
//!                     _ => Response::failure(ErrorObject::method_not_found(), id),
//!                 };
//!                 respond_with(&reply, &config.codec)
//!             }
//!             Ok(_) => respond_with(
//!                 &Response::failure(ErrorObject::invalid_request(), Id::Null),
//!                 &config.codec,
//!             ),
//!             Err(error) => error_reply(&error, Id::Null, &config.codec),
//!         })
//!         .recover(handle_rejection);
//!
//!     warp::serve(route).run(([127, 0, 0, 1], 8080)).await;
//! }
//! ```

mod listen;
mod reply;

pub use listen::{listen, ListenConfig, DEFAULT_MAX_BODY_BYTES};
pub use reply::{
    acknowledge, error_reply, handle_rejection, respond, respond_with, JSON_CONTENT_TYPE,
};
