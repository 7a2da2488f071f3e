//! JSON-RPC 2.0 message types
//!
//! Three kinds of values make up the message model:
//!
//! 1. **Request**: a call (has an `id`) or a notification (no `id`)
//! 2. **Response**: the outcome of a call, carrying `result` or `error`
//! 3. **ErrorObject**: the nested `error` member (see [`crate::error`])
//!
//! [`Message`] is what the decoder hands back: one of the two top-level
//! variants, or the raw value when the discriminator recognizes neither.
//!
//! # Field Presence
//!
//! Optional members distinguish "not supplied" (`None`) from an explicit JSON
//! `null` (`Some(Value::Null)` / `Some(Id::Null)`). A request whose `id` is
//! `None` is a notification; one with `Some(Id::Null)` is a call with a null
//! id. Which of these survive encoding is decided by the
//! [`OmissionPolicy`](crate::OmissionPolicy).

use crate::error::{ErrorCode, ErrorObject};
use crate::id::{IdGenerator, UuidGenerator};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The only protocol version this library speaks
pub const JSONRPC_VERSION: &str = "2.0";

fn protocol_version() -> String {
    JSONRPC_VERSION.to_string()
}

/// Deserialize a member that is present on the wire, keeping `null` as `Some`
///
/// Combined with `#[serde(default)]`, a missing member becomes `None` while an
/// explicit `null` is preserved.
pub(crate) fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// JSON-RPC 2.0 correlation id
///
/// Serialized untagged, directly as the inner value. Decoding accepts any
/// JSON value: numbers keep their exact form (fractions and integers beyond
/// `i64` included), and ids that are neither string, number nor null are
/// carried as [`Id::Other`].
///
/// # Examples
///
/// ```rust
/// use jrpc_core::Id;
///
/// let id1: Id = "req-123".into();
/// let id2: Id = 42i64.into();
///
/// assert_eq!(id1.to_string(), "\"req-123\"");
/// assert_eq!(id2.to_string(), "42");
/// assert_eq!(id2.as_i64(), Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    /// String identifier, e.g. a generated UUID
    String(String),
    /// Numeric identifier
    Number(Number),
    /// Null, used by responses whose request id could not be determined
    Null,
    /// Any other JSON value a peer used as id
    Other(Value),
}

impl Id {
    /// The id as an integer, if it is one that fits `i64`
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Id::Number(n) => n.as_i64(),
            _ => None,
        }
    }
}

impl Default for Id {
    fn default() -> Self {
        Id::Null
    }
}

impl Hash for Id {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Id::String(s) => s.hash(state),
            Id::Number(n) => n.to_string().hash(state),
            // Equal objects may differ in member order, so only the
            // discriminant is hashed
            Id::Null | Id::Other(_) => {}
        }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::String(s) => write!(f, "\"{}\"", s),
            Id::Number(n) => write!(f, "{}", n),
            Id::Null => write!(f, "null"),
            Id::Other(value) => write!(f, "{}", value),
        }
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::String(s)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::String(s.to_string())
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Number(n.into())
    }
}

impl From<i32> for Id {
    fn from(n: i32) -> Self {
        Id::Number(n.into())
    }
}

impl From<u64> for Id {
    fn from(n: u64) -> Self {
        Id::Number(n.into())
    }
}

/// JSON-RPC 2.0 request or notification
///
/// Fields are declared in wire order: `jsonrpc`, `method`, `params`, `id`.
///
/// # Examples
///
/// ```rust
/// use jrpc_core::{Id, Request};
/// use serde_json::json;
///
/// // Explicit id
/// let call = Request::call("math.add", Some(json!([1, 4])), Some(Id::from(1)));
/// assert_eq!(call.to_string(), r#"{"jsonrpc":"2.0","method":"math.add","params":[1,4],"id":1}"#);
///
/// // Generated id
/// let call = Request::call("math.add", Some(json!([1, 4])), None);
/// assert!(matches!(call.id, Some(Id::String(_))));
///
/// // Notification
/// let notif = Request::notification("system.sayHello", Some(json!(["Hello!"])));
/// assert!(notif.is_notification());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Protocol version, "2.0"
    #[serde(default = "protocol_version")]
    pub jsonrpc: String,
    /// Name of the remote procedure
    pub method: String,
    /// Positional (array) or named (object) arguments
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub params: Option<Value>,
    /// Correlation id; `None` makes this a notification
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub id: Option<Id>,
}

impl Request {
    /// Create a call with an explicit id
    pub fn new(method: impl Into<String>, params: Option<Value>, id: Id) -> Self {
        Self {
            jsonrpc: protocol_version(),
            method: method.into(),
            params,
            id: Some(id),
        }
    }

    /// Create a call, generating a UUID id when none is supplied
    pub fn call(method: impl Into<String>, params: Option<Value>, id: Option<Id>) -> Self {
        match id {
            Some(id) => Self::new(method, params, id),
            None => Self::call_with(&UuidGenerator, method, params),
        }
    }

    /// Create a call whose id comes from `generator`
    pub fn call_with(
        generator: &dyn IdGenerator,
        method: impl Into<String>,
        params: Option<Value>,
    ) -> Self {
        Self::new(method, params, generator.next_id())
    }

    /// Create a notification
    ///
    /// The id is left absent and never generated; the peer must not reply.
    pub fn notification(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: protocol_version(),
            method: method.into(),
            params,
            id: None,
        }
    }

    /// Whether this request expects no response
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }

    /// Whether this request expects a response
    pub fn is_call(&self) -> bool {
        self.id.is_some()
    }

    pub fn set_jsonrpc(&mut self, jsonrpc: impl Into<String>) -> &mut Self {
        self.jsonrpc = jsonrpc.into();
        self
    }

    pub fn set_method(&mut self, method: impl Into<String>) -> &mut Self {
        self.method = method.into();
        self
    }

    pub fn set_params(&mut self, params: Option<Value>) -> &mut Self {
        self.params = params;
        self
    }

    /// Set or clear the id; clearing turns the request into a notification
    pub fn set_id(&mut self, id: Option<Id>) -> &mut Self {
        self.id = id;
        self
    }
}

/// JSON-RPC 2.0 response
///
/// Exactly one of `result` and `error` should be set. The constructor does
/// not check this; the encoder's omission rule keeps empty members off the
/// wire.
///
/// # Examples
///
/// ```rust
/// use jrpc_core::{ErrorObject, Id, Response};
/// use serde_json::json;
///
/// let ok = Response::success(json!(5), Id::from(1));
/// assert!(ok.is_ok());
///
/// let failed = Response::failure(ErrorObject::method_not_found(), Id::from(1));
/// assert!(failed.is_error());
/// assert_eq!(failed.error_message(), Some("Method not found"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Protocol version, "2.0"
    #[serde(default = "protocol_version")]
    pub jsonrpc: String,
    /// Outcome of a successful call
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub result: Option<Value>,
    /// Failure details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorObject>,
    /// Id of the originating request, `Id::Null` when it could not be read
    #[serde(default)]
    pub id: Id,
}

impl Response {
    /// Create a response from its parts
    pub fn new(result: Option<Value>, error: Option<ErrorObject>, id: impl Into<Id>) -> Self {
        Self {
            jsonrpc: protocol_version(),
            result,
            error,
            id: id.into(),
        }
    }

    /// Create a successful response
    pub fn success(result: Value, id: impl Into<Id>) -> Self {
        Self::new(Some(result), None, id)
    }

    /// Create an error response
    pub fn failure(error: ErrorObject, id: impl Into<Id>) -> Self {
        Self::new(None, Some(error), id)
    }

    /// True when no error is attached
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn is_error(&self) -> bool {
        !self.is_ok()
    }

    pub fn error_code(&self) -> Option<&ErrorCode> {
        self.error.as_ref().map(|e| &e.code)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().and_then(ErrorObject::message)
    }
}

/// A decoded JSON-RPC message
///
/// Serializes untagged, so encoding a `Message` produces the same text as
/// encoding the inner value.
///
/// # Examples
///
/// ```rust
/// use jrpc_core::{codec, Message};
///
/// let message = codec::decode(r#"{"jsonrpc":"2.0","method":"ping","id":1}"#).unwrap();
///
/// match message {
///     Message::Request(req) => println!("call to {}", req.method),
///     Message::Response(resp) => println!("response, ok = {}", resp.is_ok()),
///     Message::Unrecognized(value) => println!("unknown shape: {}", value),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Message {
    /// Object with a `method` member
    Request(Request),
    /// Object with a `result` or `error` member
    Response(Response),
    /// Anything else, returned uncast; callers must inspect it before use
    Unrecognized(Value),
}

impl Message {
    pub fn is_request(&self) -> bool {
        matches!(self, Message::Request(_))
    }

    /// True only for requests without an id
    pub fn is_notification(&self) -> bool {
        matches!(self, Message::Request(req) if req.is_notification())
    }

    pub fn is_response(&self) -> bool {
        matches!(self, Message::Response(_))
    }

    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Message::Unrecognized(_))
    }

    pub fn as_request(&self) -> Option<&Request> {
        match self {
            Message::Request(req) => Some(req),
            _ => None,
        }
    }

    pub fn as_response(&self) -> Option<&Response> {
        match self {
            Message::Response(resp) => Some(resp),
            _ => None,
        }
    }

    /// Short name of the variant, for logs and error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Message::Request(req) if req.is_notification() => "Notification",
            Message::Request(_) => "Request",
            Message::Response(_) => "Response",
            Message::Unrecognized(_) => "Unrecognized",
        }
    }
}

impl From<Request> for Message {
    fn from(req: Request) -> Self {
        Message::Request(req)
    }
}

impl From<Response> for Message {
    fn from(resp: Response) -> Self {
        Message::Response(resp)
    }
}
