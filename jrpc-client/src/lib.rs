//! JSON-RPC 2.0 client over HTTP
//!
//! Each message travels as the body of its own HTTP POST. The client builds
//! calls with generated ids, encodes them with the configured omission
//! policy, and decodes replies into typed responses.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use jrpc_client::JrpcClient;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = JrpcClient::new("http://localhost:8080/rpc")?;
//!
//!     // Typed call
//!     let sum: i64 = client.request("math.add", json!([1, 4])).await?;
//!     println!("1 + 4 = {}", sum);
//!
//!     // Fire and forget
//!     client.notify("system.sayHello", Some(json!(["Hello!"]))).await?;
//!
//!     // Raw reply text, without decoding
//!     let request = jrpc_core::Request::call("math.add", Some(json!([2, 3])), None);
//!     let text = client.send(&request).await?;
//!     println!("{}", text);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod client_builder;
mod transport;

pub use client::JrpcClient;
pub use client_builder::{ClientBuilder, DEFAULT_TIMEOUT};
pub use transport::{HttpTransport, Transport};
