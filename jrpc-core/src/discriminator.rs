//! Variant discrimination for decoded JSON values
//!
//! A generically parsed value is classified by which members it carries, then
//! cast into the matching typed message. The checks run in a fixed order:
//!
//! 1. a non-null `method` member → [`Request`]
//! 2. a non-null `result` or `error` member → [`Response`], with the nested
//!    `error` cast into an [`ErrorObject`](crate::ErrorObject)
//! 3. anything else (including arrays and scalars) → returned uncast as
//!    [`Message::Unrecognized`]
//!
//! A member holding `null` counts as missing for classification, so
//! `{"error":null,"id":1}` is passed through rather than read as a success.
//!
//! Casting copies the members the target type declares and drops the rest.
//! Field types are not validated beyond what the Rust field can hold: a
//! non-integer error `code` is kept as-is.

use crate::error::{Error, Result};
use crate::types::{Message, Request, Response};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Which variant a value would be cast into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Request,
    Response,
    Unrecognized,
}

fn has_value(members: &Map<String, Value>, key: &str) -> bool {
    members.get(key).map_or(false, |value| !value.is_null())
}

/// Classify a parsed value without consuming it
pub fn classify(value: &Value) -> Shape {
    match value.as_object() {
        Some(members) if has_value(members, "method") => Shape::Request,
        Some(members) if has_value(members, "result") || has_value(members, "error") => {
            Shape::Response
        }
        _ => Shape::Unrecognized,
    }
}

/// Classify `value` and cast it into the matching message variant
///
/// # Errors
///
/// Returns `Error::Cast` when a declared member cannot be held by its Rust
/// field, e.g. a numeric `method` or an `error` that is not an object.
pub fn discriminate(value: Value) -> Result<Message> {
    let shape = classify(&value);
    tracing::trace!(shape = ?shape, "Discriminated message");

    match shape {
        Shape::Request => cast::<Request>(value, "Request").map(Message::Request),
        Shape::Response => cast::<Response>(value, "Response").map(Message::Response),
        Shape::Unrecognized => {
            tracing::debug!("No JSON-RPC variant recognized, passing value through");
            Ok(Message::Unrecognized(value))
        }
    }
}

fn cast<T: DeserializeOwned>(value: Value, variant: &'static str) -> Result<T> {
    serde_json::from_value(value).map_err(|e| Error::Cast {
        variant,
        reason: e.to_string(),
    })
}
