//! Turning JSON-RPC messages into HTTP replies
//!
//! Every reply body is JSON and carries `Content-Type: application/json`.
//! JSON-RPC level failures still travel with `200 OK`; only transport level
//! problems (wrong method, oversized body) change the HTTP status.

use jrpc_core::{codec, CodecConfig, Error, ErrorObject, Id, Response, WireMessage};
use std::convert::Infallible;
use warp::http::{header, StatusCode};
use warp::reply::Response as HttpResponse;
use warp::{Rejection, Reply};

pub const JSON_CONTENT_TYPE: &str = "application/json";

// Encoding of an internal error response with a null id
const INTERNAL_ERROR_BODY: &str =
    r#"{"jsonrpc":"2.0","error":{"code":-32603,"message":"Internal error"}}"#;

fn json_reply(body: String, status: StatusCode) -> HttpResponse {
    warp::reply::with_status(
        warp::reply::with_header(body, header::CONTENT_TYPE, JSON_CONTENT_TYPE),
        status,
    )
    .into_response()
}

/// Reply with `message` encoded under the default codec configuration
pub fn respond<M: WireMessage>(message: &M) -> HttpResponse {
    respond_with(message, &CodecConfig::default())
}

/// Reply with `message` encoded under `codec`
///
/// If encoding fails the peer receives an internal error response instead.
pub fn respond_with<M: WireMessage>(message: &M, codec: &CodecConfig) -> HttpResponse {
    match codec::encode_with(message, codec) {
        Ok(body) => json_reply(body, StatusCode::OK),
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode reply");
            json_reply(INTERNAL_ERROR_BODY.to_string(), StatusCode::OK)
        }
    }
}

/// Reply with the error response matching a local failure
pub fn error_reply(error: &Error, id: Id, codec: &CodecConfig) -> HttpResponse {
    tracing::debug!(error = %error, id = %id, "Answering with error response");
    respond_with(&Response::failure(error.to_error_object(), id), codec)
}

/// Empty `204 No Content` reply for notifications
pub fn acknowledge() -> HttpResponse {
    StatusCode::NO_CONTENT.into_response()
}

/// Recover handler mapping warp rejections to JSON-RPC error replies
///
/// Use with `Filter::recover` after [`listen`](crate::listen).
pub async fn handle_rejection(rejection: Rejection) -> Result<HttpResponse, Infallible> {
    let (status, error) = if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, ErrorObject::invalid_request())
    } else if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
        (
            StatusCode::PAYLOAD_TOO_LARGE,
            ErrorObject::invalid_request().with_data(serde_json::Value::from("body too large")),
        )
    } else if rejection.find::<warp::reject::LengthRequired>().is_some() {
        (
            StatusCode::LENGTH_REQUIRED,
            ErrorObject::invalid_request().with_data(serde_json::Value::from("content-length required")),
        )
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            ErrorObject::invalid_request().with_data(serde_json::Value::from("use POST")),
        )
    } else {
        tracing::warn!(rejection = ?rejection, "Unhandled rejection");
        (StatusCode::INTERNAL_SERVER_ERROR, ErrorObject::internal_error())
    };

    let body = codec::encode(&Response::failure(error, Id::Null))
        .unwrap_or_else(|_| INTERNAL_ERROR_BODY.to_string());
    Ok(json_reply(body, status))
}
