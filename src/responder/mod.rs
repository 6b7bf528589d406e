//! The responder: one stateless operation building the fixed envelope.
//!
//! The incoming event is accepted as an opaque value and never inspected;
//! every invocation produces an identical [`ResponseEnvelope`]. There is no
//! shared state, so any number of invocations may run concurrently.

use crate::models::response::{ResponseEnvelope, ResponsePayload};
use serde_json::Value;
use std::collections::HashMap;

/// The single fixed response header.
const HEADER_NAME: &str = "my_header";
const HEADER_VALUE: &str = "my_value";

/// Build the fixed response envelope for an invocation.
///
/// The event is opaque and unused; any value (null, empty, malformed,
/// arbitrarily large) yields the same envelope: status 200, one fixed
/// header, the serialized fixed payload, and a false base64 flag.
///
/// The only error path is payload serialization, an environmental fault
/// outside this contract; the entry point forwards it to the host.
pub fn handle(_event: &Value) -> Result<ResponseEnvelope, serde_json::Error> {
    let payload = ResponsePayload {
        key3: "value3".to_string(),
        key2: "value2".to_string(),
        key1: "value1".to_string(),
    };

    Ok(ResponseEnvelope {
        status_code: 200,
        headers: HashMap::from([(HEADER_NAME.to_string(), HEADER_VALUE.to_string())]),
        body: serde_json::to_string(&payload)?,
        is_base64_encoded: false,
    })
}
