//! Error types for jrpc
//!
//! Two kinds of errors live here:
//!
//! - **Error**: local failures raised by constructors, the codec and the
//!   transports (uses thiserror)
//! - **ErrorObject**: the wire-format `error` member of a JSON-RPC 2.0
//!   response. Reserved codes are data carried by this type, never raised by
//!   the library itself.
//!
//! # Examples
//!
//! ```rust
//! use jrpc_core::{Error, ErrorObject};
//!
//! // Canonical message is filled in for reserved codes
//! let error = ErrorObject::new(-32601);
//! assert_eq!(error.message.as_deref(), Some("Method not found"));
//!
//! // Dynamic codes are validated
//! let bad = ErrorObject::try_new(&serde_json::json!("oops"), None, None);
//! assert!(matches!(bad, Err(Error::InvalidArgument(_))));
//! ```

use crate::codes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Result type for jrpc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Local error type for jrpc operations
///
/// # Error Categories
///
/// - **Caller errors**: InvalidArgument
/// - **Decode errors**: Parse, Cast
/// - **Transport errors**: Transport, Http, Timeout
/// - **Remote errors**: JsonRpc (an error response received from a peer)
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Error object received from a remote peer
    #[error("JSON-RPC error: {0}")]
    JsonRpc(#[from] ErrorObject),

    /// Malformed argument passed to a constructor or to the decoder
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Inbound text is not valid JSON
    #[error("Parse error ({kind}): {message}")]
    Parse {
        /// What went wrong, as far as the parser can tell
        kind: ParseErrorKind,
        /// Raw parser message, including line and column
        message: String,
    },

    /// A declared field of the discriminated variant has an unusable type
    #[error("Cannot read {variant}: {reason}")]
    Cast {
        /// Name of the variant the discriminator selected
        variant: &'static str,
        /// Description of the mismatch
        reason: String,
    },

    /// Converting a message to JSON failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Connection-level failure while sending or receiving
    #[error("Transport error: {0}")]
    Transport(String),

    /// Peer answered with a non-success HTTP status
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body, as received
        body: String,
    },

    /// The transport gave up waiting for a reply
    #[error("Request timeout")]
    Timeout,
}

impl Error {
    /// Map a local failure to the error object a server would answer with
    ///
    /// - `Parse` → -32700, with the parser message in `data`
    /// - `InvalidArgument` and `Cast` → -32600
    /// - `JsonRpc` → the carried object, unchanged
    /// - everything else → -32603
    pub fn to_error_object(&self) -> ErrorObject {
        match self {
            Error::JsonRpc(object) => object.clone(),
            Error::Parse { kind, message } => ErrorObject::parse_error().with_data(
                serde_json::json!({ "kind": kind.to_string(), "detail": message }),
            ),
            Error::InvalidArgument(reason) => {
                ErrorObject::invalid_request().with_data(Value::String(reason.clone()))
            }
            Error::Cast { .. } => {
                ErrorObject::invalid_request().with_data(Value::String(self.to_string()))
            }
            other => ErrorObject::internal_error().with_data(Value::String(other.to_string())),
        }
    }
}

/// Distinguishing cause of a JSON parse failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Nesting went past the parser's recursion limit
    DepthExceeded,
    /// A raw control character appeared inside a string
    ControlCharacter,
    /// Input ended in the middle of a value
    UnexpectedEof,
    /// Any other malformed JSON
    Syntax,
}

impl ParseErrorKind {
    /// Classify a `serde_json` error
    ///
    /// serde_json only exposes coarse categories, so depth and control
    /// character failures are recognized by their message prefix.
    pub fn of(error: &serde_json::Error) -> Self {
        use serde_json::error::Category;

        let message = error.to_string();
        if message.starts_with("recursion limit exceeded") {
            ParseErrorKind::DepthExceeded
        } else if message.starts_with("control character") {
            ParseErrorKind::ControlCharacter
        } else if matches!(error.classify(), Category::Eof) {
            ParseErrorKind::UnexpectedEof
        } else {
            ParseErrorKind::Syntax
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ParseErrorKind::DepthExceeded => "Maximum stack depth exceeded",
            ParseErrorKind::ControlCharacter => "Unexpected control character found",
            ParseErrorKind::UnexpectedEof => "Unexpected end of input",
            ParseErrorKind::Syntax => "Syntax error, malformed JSON",
        };
        f.write_str(text)
    }
}

/// The `code` member of an error object
///
/// Constructors only ever produce `Integer`. Decoding is lenient and keeps a
/// non-integer code from the wire as `Other` instead of rejecting the message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorCode {
    /// An integer code, as required by JSON-RPC 2.0
    Integer(i64),
    /// Whatever a peer sent when it was not an integer
    Other(Value),
}

impl ErrorCode {
    /// The integer value, if this is a well-formed code
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ErrorCode::Integer(code) => Some(*code),
            ErrorCode::Other(_) => None,
        }
    }
}

impl Default for ErrorCode {
    fn default() -> Self {
        ErrorCode::Other(Value::Null)
    }
}

impl From<i64> for ErrorCode {
    fn from(code: i64) -> Self {
        ErrorCode::Integer(code)
    }
}

impl PartialEq<i64> for ErrorCode {
    fn eq(&self, other: &i64) -> bool {
        self.as_i64() == Some(*other)
    }
}

impl PartialEq<i32> for ErrorCode {
    fn eq(&self, other: &i32) -> bool {
        self.as_i64() == Some(i64::from(*other))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Integer(code) => write!(f, "{}", code),
            ErrorCode::Other(value) => write!(f, "{}", value),
        }
    }
}

/// JSON-RPC 2.0 error object
///
/// Appears in the `error` member of a [`Response`](crate::Response). It is
/// never a top-level message on the wire.
///
/// # Message Defaults
///
/// When no message (or an empty one) is given, the canonical text for a
/// reserved code is used. Unknown codes without a message leave it unset.
///
/// # Examples
///
/// ```rust
/// use jrpc_core::ErrorObject;
/// use serde_json::json;
///
/// let error = ErrorObject::with_message(1001, "Insufficient funds")
///     .with_data(json!({"balance": 50, "required": 100}));
/// assert_eq!(error.code, 1001);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    /// Error type indicator
    #[serde(default)]
    pub code: ErrorCode,

    /// Short human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Additional diagnostic detail
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::types::present"
    )]
    pub data: Option<Value>,
}

impl ErrorObject {
    /// Create an error with the canonical message for `code`, if one exists
    pub fn new(code: i64) -> Self {
        Self {
            code: ErrorCode::Integer(code),
            message: codes::canonical_message(code).map(str::to_string),
            data: None,
        }
    }

    /// Create an error with an explicit message
    ///
    /// An empty message falls back to the canonical one.
    pub fn with_message(code: i64, message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            return Self::new(code);
        }

        Self {
            code: ErrorCode::Integer(code),
            message: Some(message),
            data: None,
        }
    }

    /// Attach additional diagnostic data
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Create an error from a dynamically typed code
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` unless `code` is a JSON integer that
    /// fits in an `i64`. Floats such as `3.0` are rejected.
    pub fn try_new(code: &Value, message: Option<&str>, data: Option<Value>) -> Result<Self> {
        let code = code.as_i64().ok_or_else(|| {
            Error::InvalidArgument(format!("error code must be an integer, got {}", code))
        })?;

        let mut error = Self::with_message(code, message.unwrap_or_default());
        error.data = data;
        Ok(error)
    }

    /// Parse error (-32700)
    pub fn parse_error() -> Self {
        Self::new(codes::PARSE_ERROR)
    }

    /// Invalid Request (-32600)
    pub fn invalid_request() -> Self {
        Self::new(codes::INVALID_REQUEST)
    }

    /// Method not found (-32601)
    pub fn method_not_found() -> Self {
        Self::new(codes::METHOD_NOT_FOUND)
    }

    /// Invalid params (-32602)
    pub fn invalid_params() -> Self {
        Self::new(codes::INVALID_PARAMS)
    }

    /// Internal error (-32603)
    pub fn internal_error() -> Self {
        Self::new(codes::INTERNAL_ERROR)
    }

    /// Implementation-defined server error
    ///
    /// `code` should lie in -32099..=-32000; codes outside the range keep the
    /// "Server error" message all the same.
    pub fn server_error(code: i64) -> Self {
        Self::with_message(code, "Server error")
    }

    /// The message text, if any
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for ErrorObject {
    /// Formats as "[code] message", e.g. "[-32601] Method not found"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message().unwrap_or(""))
    }
}

impl std::error::Error for ErrorObject {}
