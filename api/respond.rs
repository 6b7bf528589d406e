use fixed_responder::models::response::ResponseEnvelope;
use fixed_responder::responder;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    run(service_fn(handler)).await
}

/// Function entry point — return the fixed response envelope.
///
/// The event is opaque and never inspected; the envelope is constant
/// across all invocations.
pub async fn handler(event: LambdaEvent<Value>) -> Result<ResponseEnvelope, Error> {
    let (event, _context) = event.into_parts();
    Ok(responder::handle(&event)?)
}
