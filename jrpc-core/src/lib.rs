//! Core JSON-RPC 2.0 types and codec for jrpc
//!
//! This crate provides the message model and the encode/decode logic:
//!
//! - **Types**: requests (calls and notifications), responses, error objects
//! - **Codec**: encoding with configurable field omission, decoding with
//!   automatic variant discrimination
//! - **Codes**: the reserved error code table
//! - **Ids**: UUID and sequential correlation id generators
//! - **Logging**: optional `tracing` subscriber setup
//!
//! The crate is transport-agnostic. `jrpc-client` and `jrpc-server` carry
//! messages over HTTP.
//!
//! # Example
//!
//! ```rust
//! use jrpc_core::{codec, ErrorObject, Message, Request, Response};
//! use serde_json::json;
//!
//! // Build and encode a call
//! let request = Request::call("math.add", Some(json!([1, 4])), Some(1.into()));
//! let text = codec::encode(&request).unwrap();
//!
//! // Decode it on the other side and answer
//! let reply = match codec::decode(&text).unwrap() {
//!     Message::Request(req) if req.method == "math.add" => {
//!         Response::success(json!(5), req.id.unwrap_or_default())
//!     }
//!     Message::Request(req) => {
//!         Response::failure(ErrorObject::method_not_found(), req.id.unwrap_or_default())
//!     }
//!     _ => Response::failure(ErrorObject::invalid_request(), jrpc_core::Id::Null),
//! };
//! assert_eq!(reply.to_string(), r#"{"jsonrpc":"2.0","result":5,"id":1}"#);
//! ```

pub mod codec;
pub mod codes;
pub mod discriminator;
pub mod error;
pub mod id;
pub mod logging;
pub mod omission;
pub mod types;

pub use codec::{CodecConfig, WireMessage};
pub use error::{Error, ErrorCode, ErrorObject, ParseErrorKind, Result};
pub use id::{uuid, IdGenerator, SequentialIds, UuidGenerator};
pub use logging::{init_logging, LogConfig};
pub use omission::OmissionPolicy;
pub use types::{Id, Message, Request, Response, JSONRPC_VERSION};
