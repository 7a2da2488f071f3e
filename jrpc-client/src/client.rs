//! JSON-RPC client over HTTP
//!
//! `JrpcClient` encodes messages, hands them to a [`Transport`] and decodes
//! the replies. It keeps no connection state of its own, so it is cheap to
//! clone and share between tasks.
//!
//! # Call Flow
//!
//! 1. **Build**: a request gets a fresh id from the client's generator
//! 2. **Encode**: with the client's codec configuration
//! 3. **Send**: one POST per message
//! 4. **Decode**: the reply must be a response; its id is checked against the
//!    request id

use crate::transport::Transport;
use crate::ClientBuilder;
use jrpc_core::{
    codec, CodecConfig, Error, Id, IdGenerator, Request, Response, Result, WireMessage,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// JSON-RPC client bound to a single endpoint
#[derive(Clone)]
pub struct JrpcClient {
    pub(crate) endpoint: String,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) ids: Arc<dyn IdGenerator>,
    pub(crate) codec: CodecConfig,
}

impl JrpcClient {
    /// Create a client with default settings
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(endpoint).build()
    }

    /// Start configuring a client
    pub fn builder(endpoint: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(endpoint)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn codec(&self) -> &CodecConfig {
        &self.codec
    }

    /// Encode and send any message, returning the raw reply text
    pub async fn send<M: WireMessage + Sync>(&self, message: &M) -> Result<String> {
        let payload = codec::encode_with(message, &self.codec)?;
        self.transport.send(payload, &self.endpoint).await
    }

    /// Send a request and decode the response
    ///
    /// Notifications are rejected with `Error::InvalidArgument`; use
    /// [`notify`](Self::notify) for those.
    #[tracing::instrument(skip(self, request), fields(method = %request.method))]
    pub async fn send_request(&self, request: &Request) -> Result<Response> {
        let expected = request.id.clone().ok_or_else(|| {
            Error::InvalidArgument("notifications receive no response".to_string())
        })?;

        let reply = self.send(request).await?;
        let response = codec::decode_response(&reply)?;

        if response.id != expected && response.id != Id::Null {
            tracing::warn!(expected = %expected, actual = %response.id, "Response id does not match request");
        }

        Ok(response)
    }

    /// Call `method` with a generated id
    pub async fn call(&self, method: impl Into<String>, params: Option<Value>) -> Result<Response> {
        let request = Request::call_with(self.ids.as_ref(), method, params);
        self.send_request(&request).await
    }

    /// Send a notification; any reply body is ignored
    #[tracing::instrument(skip(self, params), fields(method = %method.as_ref()))]
    pub async fn notify(
        &self,
        method: impl Into<String> + AsRef<str>,
        params: Option<Value>,
    ) -> Result<()> {
        let notification = Request::notification(method, params);
        let reply = self.send(&notification).await?;
        if !reply.is_empty() {
            tracing::debug!(bytes = reply.len(), "Peer replied to a notification");
        }
        Ok(())
    }

    /// Call `method` with typed params and deserialize the result
    ///
    /// # Errors
    ///
    /// - `Error::JsonRpc` when the peer answers with an error object
    /// - `Error::Serialization` when params or result do not convert
    pub async fn request<P, R>(&self, method: impl Into<String>, params: P) -> Result<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let params = serde_json::to_value(params).map_err(|e| Error::Serialization(e.to_string()))?;
        let params = (!params.is_null()).then_some(params);

        let response = self.call(method, params).await?;
        if let Some(error) = response.error {
            tracing::error!(error = %error, "Request failed");
            return Err(Error::JsonRpc(error));
        }

        // An absent result reads as null, so `()` and `Option<T>` still work
        let result = response.result.unwrap_or(Value::Null);
        serde_json::from_value(result).map_err(|e| Error::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use jrpc_core::{ErrorObject, OmissionPolicy, SequentialIds};
    use serde_json::json;
    use tokio::sync::Mutex;

    /// Records payloads and answers with a canned reply
    struct MockTransport {
        sent: Mutex<Vec<(String, String)>>,
        reply: String,
    }

    impl MockTransport {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                sent: Mutex::new(Vec::new()),
                reply: reply.to_string(),
            })
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn send(&self, payload: String, endpoint: &str) -> Result<String> {
            self.sent.lock().await.push((payload, endpoint.to_string()));
            Ok(self.reply.clone())
        }
    }

    fn client_with(transport: Arc<MockTransport>) -> JrpcClient {
        ClientBuilder::new("http://rpc.test/api")
            .with_transport(transport)
            .with_id_generator(Arc::new(SequentialIds::new()))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_call_encodes_request_and_decodes_response() {
        let transport = MockTransport::replying(r#"{"jsonrpc":"2.0","result":5,"id":1}"#);
        let client = client_with(transport.clone());

        let response = client.call("math.add", Some(json!([1, 4]))).await.unwrap();
        assert!(response.is_ok());
        assert_eq!(response.result, Some(json!(5)));

        let sent = transport.sent.lock().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, r#"{"jsonrpc":"2.0","method":"math.add","params":[1,4],"id":1}"#);
        assert_eq!(sent[0].1, "http://rpc.test/api");
    }

    #[tokio::test]
    async fn test_typed_request() {
        let transport = MockTransport::replying(r#"{"jsonrpc":"2.0","result":{"sum":5},"id":1}"#);
        let client = client_with(transport);

        #[derive(serde::Deserialize)]
        struct Sum {
            sum: i32,
        }

        let sum: Sum = client.request("math.add", json!({"a": 1, "b": 4})).await.unwrap();
        assert_eq!(sum.sum, 5);
    }

    #[tokio::test]
    async fn test_error_response_becomes_jsonrpc_error() {
        let transport = MockTransport::replying(
            r#"{"jsonrpc":"2.0","error":{"code":-32601,"message":"Method not found"},"id":1}"#,
        );
        let client = client_with(transport);

        let result: Result<Value> = client.request("missing", ()).await;
        match result {
            Err(Error::JsonRpc(error)) => assert_eq!(error, ErrorObject::method_not_found()),
            other => panic!("Expected JsonRpc error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unit_params_are_omitted() {
        let transport = MockTransport::replying(r#"{"jsonrpc":"2.0","result":"pong","id":1}"#);
        let client = client_with(transport.clone());

        let pong: String = client.request("ping", ()).await.unwrap();
        assert_eq!(pong, "pong");
        assert_eq!(transport.sent.lock().await[0].0, r#"{"jsonrpc":"2.0","method":"ping","id":1}"#);
    }

    #[tokio::test]
    async fn test_notify_sends_without_id() {
        let transport = MockTransport::replying("");
        let client = client_with(transport.clone());

        client.notify("system.sayHello", Some(json!(["Hello!"]))).await.unwrap();
        assert_eq!(
            transport.sent.lock().await[0].0,
            r#"{"jsonrpc":"2.0","method":"system.sayHello","params":["Hello!"]}"#
        );
    }

    #[tokio::test]
    async fn test_send_request_rejects_notification() {
        let client = client_with(MockTransport::replying(""));
        let notification = Request::notification("tick", None);
        assert!(matches!(
            client.send_request(&notification).await,
            Err(Error::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn test_non_response_reply_is_cast_error() {
        let transport = MockTransport::replying(r#"{"jsonrpc":"2.0","method":"echo","id":1}"#);
        let client = client_with(transport);

        let result = client.call("echo", None).await;
        assert!(matches!(result, Err(Error::Cast { variant: "Response", .. })));
    }

    #[tokio::test]
    async fn test_garbage_reply_is_parse_error() {
        let client = client_with(MockTransport::replying("<html>502 Bad Gateway</html>"));
        assert!(matches!(client.call("x", None).await, Err(Error::Parse { .. })));
    }

    #[tokio::test]
    async fn test_codec_config_applies_to_outgoing_messages() {
        let transport = MockTransport::replying(r#"{"jsonrpc":"2.0","result":0,"id":1}"#);
        let client = ClientBuilder::new("http://rpc.test/api")
            .with_transport(transport.clone())
            .with_id_generator(Arc::new(SequentialIds::new()))
            .with_omission(OmissionPolicy::AbsentOnly)
            .build()
            .unwrap();

        let response = client.call("count", Some(json!([0, false]))).await.unwrap();
        assert_eq!(response.result, Some(json!(0)));
        assert_eq!(
            transport.sent.lock().await[0].0,
            r#"{"jsonrpc":"2.0","method":"count","params":[0,false],"id":1}"#
        );
    }
}
