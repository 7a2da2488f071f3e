//! Common test utilities for jrpc-client integration tests
//!
//! Provides a throwaway HTTP server so the client can be exercised over a
//! real socket without a full JSON-RPC server behind it.

#![allow(dead_code)]

use bytes::Bytes;
use std::net::SocketAddr;
use tokio::sync::{mpsc, oneshot};
use warp::http::StatusCode;
use warp::Filter;

/// Mock HTTP endpoint for client testing
///
/// Every POST body is recorded and answered by the handler, which returns
/// the HTTP status and the reply body.
pub struct MockHttpServer {
    addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    bodies: mpsc::UnboundedReceiver<String>,
}

impl MockHttpServer {
    pub async fn with_handler<F>(handler: F) -> Self
    where
        F: Fn(String) -> (u16, String) + Clone + Send + Sync + 'static,
    {
        let (body_tx, bodies) = mpsc::unbounded_channel::<String>();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let route = warp::post().and(warp::body::bytes()).map(move |body: Bytes| {
            let text = String::from_utf8_lossy(&body).to_string();
            let _ = body_tx.send(text.clone());

            let (status, reply) = handler(text);
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            warp::reply::with_status(
                warp::reply::with_header(reply, "content-type", "application/json"),
                status,
            )
        });

        let (addr, server) = warp::serve(route)
            .bind_with_graceful_shutdown(([127, 0, 0, 1], 0), async {
                shutdown_rx.await.ok();
            });
        tokio::spawn(server);

        Self {
            addr,
            shutdown_tx,
            bodies,
        }
    }

    /// Server that always answers 200 with `reply`
    pub async fn replying(reply: &str) -> Self {
        let reply = reply.to_string();
        Self::with_handler(move |_| (200, reply.clone())).await
    }

    pub fn url(&self) -> String {
        format!("http://{}/rpc", self.addr)
    }

    /// Next request body the server received
    pub async fn next_body(&mut self) -> Option<String> {
        tokio::time::timeout(tokio::time::Duration::from_secs(5), self.bodies.recv())
            .await
            .ok()
            .flatten()
    }

    pub fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
    }
}

/// Helper to create a JSON-RPC success reply
pub fn mock_response(id: i64, result: serde_json::Value) -> String {
    serde_json::json!({
        "jsonrpc": "2.0",
        "result": result,
        "id": id
    })
    .to_string()
}

/// Helper to create a JSON-RPC error reply
pub fn mock_error_response(id: i64, code: i64, message: &str) -> String {
    serde_json::json!({
        "jsonrpc": "2.0",
        "error": {
            "code": code,
            "message": message
        },
        "id": id
    })
    .to_string()
}
