//! JRPC - JSON-RPC 2.0 messages, codec and HTTP transport
//!
//! This is the convenience crate that re-exports the jrpc sub-crates. Use it
//! if you want a single dependency covering messages, client and server.
//!
//! # Architecture
//!
//! - **jrpc-core**: message types, encoder/decoder, error codes, id generation
//! - **jrpc-client**: sends messages with HTTP POST and decodes replies
//! - **jrpc-server**: warp filters that receive and answer messages
//!
//! # Quick Start - Messages
//!
//! ```rust
//! use jrpc::{codec, Id, Message, Request};
//! use serde_json::json;
//!
//! let request = Request::call("math.add", Some(json!([1, 4])), Some(Id::from(1)));
//! assert_eq!(
//!     request.to_string(),
//!     r#"{"jsonrpc":"2.0","method":"math.add","params":[1,4],"id":1}"#
//! );
//!
//! match codec::decode(r#"{"jsonrpc":"2.0","result":5,"id":1}"#).unwrap() {
//!     Message::Response(response) => assert!(response.is_ok()),
//!     other => panic!("unexpected {}", other.kind()),
//! }
//! ```
//!
//! # Quick Start - Client
//!
//! ```rust,no_run
//! use jrpc::JrpcClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = JrpcClient::new("http://localhost:8080/rpc")?;
//!     let sum: i64 = client.request("math.add", serde_json::json!([1, 4])).await?;
//!     println!("Result: {}", sum);
//!     Ok(())
//! }
//! ```

pub use jrpc_client as client;
pub use jrpc_core as core;
pub use jrpc_server as server;

pub use jrpc_client::JrpcClient;
pub use jrpc_core::{
    codec, uuid, Error, ErrorObject, Id, Message, Request, Response, Result, WireMessage,
};
pub use jrpc_server::{listen, respond, ListenConfig};
