//! Encoding messages to JSON-RPC text and decoding them back
//!
//! # Encoding
//!
//! A message is first converted to an ordered JSON object (`jsonrpc`, then the
//! variant members in declaration order, then `id`), the configured
//! [`OmissionPolicy`] is applied, and the result is written as compact JSON.
//!
//! # Decoding
//!
//! Inbound text is parsed as generic JSON and handed to the
//! [`discriminator`](crate::discriminator), which decides whether it is a
//! request, a response, or an unrecognized value.
//!
//! # Errors
//!
//! - Invalid JSON → `Error::Parse`, keeping the parser's distinguishing cause
//! - Input that is not UTF-8 text → `Error::InvalidArgument`
//! - A declared member with an unusable type → `Error::Cast`
//!
//! # Examples
//!
//! ```rust
//! use jrpc_core::{codec, Id, Request};
//! use serde_json::json;
//!
//! let request = Request::new("math.add", Some(json!([1, 4])), Id::from(1));
//! let json = codec::encode(&request).unwrap();
//! assert_eq!(json, r#"{"jsonrpc":"2.0","method":"math.add","params":[1,4],"id":1}"#);
//!
//! let decoded = codec::decode(&json).unwrap();
//! assert!(decoded.is_request());
//! ```

use crate::discriminator;
use crate::error::{Error, ErrorObject, ParseErrorKind, Result};
use crate::omission::OmissionPolicy;
use crate::types::{Message, Request, Response};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Environment variable read by [`CodecConfig::from_env`]
pub const OMISSION_POLICY_ENV: &str = "JRPC_OMISSION_POLICY";

/// Encoder settings
///
/// # Examples
///
/// ```rust
/// use jrpc_core::{CodecConfig, OmissionPolicy};
///
/// let config = CodecConfig::default()
///     .with_omission(OmissionPolicy::AbsentOnly)
///     .with_pretty(true);
/// assert_eq!(config.omission, OmissionPolicy::AbsentOnly);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecConfig {
    /// Which values are left out of the wire text
    pub omission: OmissionPolicy,
    /// Indent the output instead of writing compact JSON
    pub pretty: bool,
}

impl CodecConfig {
    /// Defaults, with the omission policy taken from `JRPC_OMISSION_POLICY`
    ///
    /// Unset or unparsable values keep the default policy; the latter is
    /// logged as a warning.
    pub fn from_env() -> Self {
        let omission = match std::env::var(OMISSION_POLICY_ENV) {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring {}", OMISSION_POLICY_ENV);
                OmissionPolicy::default()
            }),
            Err(_) => OmissionPolicy::default(),
        };

        Self {
            omission,
            ..Default::default()
        }
    }

    pub fn with_omission(mut self, omission: OmissionPolicy) -> Self {
        self.omission = omission;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Encode a message with the default configuration
///
/// # Errors
///
/// Returns `Error::Serialization` if the message cannot be converted to JSON.
pub fn encode<T: Serialize + ?Sized>(msg: &T) -> Result<String> {
    encode_with(msg, &CodecConfig::default())
}

/// Encode a message with an explicit configuration
pub fn encode_with<T: Serialize + ?Sized>(msg: &T, config: &CodecConfig) -> Result<String> {
    let value = to_wire_value(msg, config.omission)?;

    let text = if config.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
    .map_err(|e| Error::Serialization(e.to_string()))?;

    tracing::trace!(bytes = text.len(), omission = %config.omission, "Encoded message");
    Ok(text)
}

/// Convert a message to the JSON value that would be written to the wire
pub fn to_wire_value<T: Serialize + ?Sized>(msg: &T, omission: OmissionPolicy) -> Result<Value> {
    let mut value = serde_json::to_value(msg).map_err(|e| Error::Serialization(e.to_string()))?;
    omission.apply(&mut value);
    Ok(value)
}

/// Decode JSON-RPC text into a message
///
/// # Returns
///
/// - `Message::Request` when the object has a `method` member
/// - `Message::Response` when it has a `result` or `error` member
/// - `Message::Unrecognized` otherwise
///
/// # Examples
///
/// ```rust
/// use jrpc_core::{codec, Message};
///
/// let msg = codec::decode(r#"{"jsonrpc":"2.0","result":5,"id":1}"#).unwrap();
/// match msg {
///     Message::Response(resp) => assert!(resp.is_ok()),
///     _ => panic!("expected a response"),
/// }
/// ```
pub fn decode(text: &str) -> Result<Message> {
    let value = parse(text)?;
    discriminator::discriminate(value)
}

/// Decode raw bytes, which must be UTF-8 encoded JSON-RPC text
///
/// # Errors
///
/// Returns `Error::InvalidArgument` when `bytes` is not valid UTF-8.
pub fn decode_bytes(bytes: &[u8]) -> Result<Message> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| Error::InvalidArgument(format!("decode accepts UTF-8 text only: {}", e)))?;
    decode(text)
}

/// Decode text that must be a request (call or notification)
///
/// # Errors
///
/// Returns `Error::Cast` if the text decodes to another variant.
pub fn decode_request(text: &str) -> Result<Request> {
    match decode(text)? {
        Message::Request(req) => Ok(req),
        other => Err(unexpected("Request", &other)),
    }
}

/// Decode text that must be a response
///
/// # Errors
///
/// Returns `Error::Cast` if the text decodes to another variant.
pub fn decode_response(text: &str) -> Result<Response> {
    match decode(text)? {
        Message::Response(resp) => Ok(resp),
        other => Err(unexpected("Response", &other)),
    }
}

fn parse(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| {
        let kind = ParseErrorKind::of(&e);
        tracing::debug!(kind = %kind, error = %e, "Failed to parse JSON-RPC text");
        Error::Parse {
            kind,
            message: e.to_string(),
        }
    })
}

fn unexpected(variant: &'static str, found: &Message) -> Error {
    Error::Cast {
        variant,
        reason: format!("message has the shape of {}", found.kind()),
    }
}

/// Messages that can be written as JSON-RPC text
pub trait WireMessage: Serialize {
    /// Encode with the default configuration
    fn to_jsonrpc(&self) -> Result<String> {
        encode(self)
    }
}

impl WireMessage for Request {}
impl WireMessage for Response {}
impl WireMessage for ErrorObject {}
impl WireMessage for Message {}

// Display writes the wire text, so `to_string()` is the encoded message.
macro_rules! display_as_wire_text {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let text = self.to_jsonrpc().map_err(|_| fmt::Error)?;
                    f.write_str(&text)
                }
            }
        )*
    };
}

display_as_wire_text!(Request, Response, Message);
