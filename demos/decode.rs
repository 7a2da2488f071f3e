//! Decoding inbound text into messages
//!
//! Run with: cargo run --example decode

use jrpc::{codec, Message};

fn describe(text: &str) -> jrpc::Result<()> {
    match codec::decode(text)? {
        Message::Request(request) => {
            println!("request  method={} params={:?} id={:?}", request.method, request.params, request.id)
        }
        Message::Response(response) => {
            println!("response ok={} result={:?} error={:?}", response.is_ok(), response.result, response.error)
        }
        Message::Unrecognized(value) => println!("unrecognized {}", value),
    }
    Ok(())
}

fn main() {
    let inputs = [
        r#"{"jsonrpc":"2.0","method":"add","params":[1,4],"id":1}"#,
        r#"{"jsonrpc":"2.0","result":5,"id":1}"#,
        r#"{"jsonrpc":"2.0","error":{"code":-32601,"message":"Method not found"},"id":1}"#,
        r#"{"jsonrpc":"2.0","id":1}"#,
        r#"{"jsonrpc":"2.0","method":"#,
    ];

    for text in inputs {
        if let Err(e) = describe(text) {
            println!("error    {} -> {}", e, e.to_error_object());
        }
    }
}
