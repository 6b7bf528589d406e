use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// HTTP-style response envelope returned to the invoking host.
///
/// Matches the proxy integration response shape: status code, headers,
/// serialized body, and a flag marking whether the body is base64-encoded.
/// Built fresh on every invocation and immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// HTTP status code (always 200).
    pub status_code: u16,
    /// Response headers (always exactly one entry).
    pub headers: HashMap<String, String>,
    /// JSON-serialized [`ResponsePayload`].
    pub body: String,
    /// Whether `body` is base64-encoded (always false; the body is text).
    pub is_base64_encoded: bool,
}

/// The fixed three-entry payload serialized into the envelope body.
///
/// Field declaration order is `key3`, `key2`, `key1` so the serialized
/// text reproduces the original insertion order byte for byte. Consumers
/// do not depend on key order; the body is self-describing JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsePayload {
    pub key3: String,
    pub key2: String,
    pub key1: String,
}
