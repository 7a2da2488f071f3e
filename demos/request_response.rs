//! Building requests and responses and printing their wire form
//!
//! Run with: cargo run --example request_response

use jrpc::{ErrorObject, Request, Response, WireMessage};
use serde_json::json;

fn main() -> jrpc::Result<()> {
    // Positional params, generated id
    let request = Request::call("math.add", Some(json!([1, 4])), None);
    println!("{:?}", request);
    println!("{}", request.to_jsonrpc()?);

    // Named params, filled in after construction
    let mut request = Request::call("placeholder", None, None);
    request
        .set_method("users.getUser")
        .set_params(Some(json!({"firstName": "Jan", "lastName": "Nowak"})));
    println!("{}", request);

    let id = request.id.clone().unwrap_or_default();

    // Successful response
    let response = Response::success(json!(5), id.clone());
    println!("{}", response);

    // Error response
    let response = Response::failure(ErrorObject::method_not_found(), id);
    println!("{}", response);
    println!("ok: {}", response.is_ok());

    // Notifications carry no id
    println!("{}", Request::notification("system.sayHello", Some(json!(["Hello!"]))));

    Ok(())
}
