//! A client calling a server over HTTP, both in one process
//!
//! Run with: cargo run --example http_roundtrip

use jrpc::core::{init_logging, ErrorObject, Id, LogConfig, Message, Response};
use jrpc::server::{acknowledge, error_reply, handle_rejection, respond_with};
use jrpc::{listen, JrpcClient, ListenConfig};
use serde_json::{json, Value};
use std::net::SocketAddr;
use warp::Filter;

fn add(params: Option<&Value>) -> Option<i64> {
    let values = params?.as_array()?;
    values.iter().map(Value::as_i64).sum()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging(LogConfig::default())?;

    let config = ListenConfig::from_env();
    let route = listen(&config)
        .map(move |decoded: jrpc::Result<Message>| match decoded {
            Ok(Message::Request(request)) if request.is_notification() => {
                tracing::info!(method = %request.method, "Notification");
                acknowledge()
            }
            Ok(Message::Request(request)) => {
                let id = request.id.clone().unwrap_or_default();
                let response = match (request.method.as_str(), add(request.params.as_ref())) {
                    ("math.add", Some(sum)) => Response::success(json!(sum), id),
                    ("math.add", None) => Response::failure(ErrorObject::invalid_params(), id),
                    _ => Response::failure(ErrorObject::method_not_found(), id),
                };
                respond_with(&response, &config.codec)
            }
            Ok(_) => respond_with(
                &Response::failure(ErrorObject::invalid_request(), Id::Null),
                &config.codec,
            ),
            Err(error) => error_reply(&error, Id::Null, &config.codec),
        })
        .recover(handle_rejection);

    let addr: SocketAddr = "127.0.0.1:3030".parse()?;
    tokio::spawn(warp::serve(route).run(addr));
    println!("Listening on http://{}/rpc", addr);

    let client = JrpcClient::new(format!("http://{}/rpc", addr))?;

    let sum: i64 = client.request("math.add", json!([1, 4])).await?;
    println!("math.add(1, 4) = {}", sum);

    let response = client.call("math.mul", Some(json!([2, 3]))).await?;
    println!("math.mul -> {}", response);

    client.notify("system.sayHello", Some(json!(["Hello!"]))).await?;

    Ok(())
}
