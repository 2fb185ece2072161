//! Response body handling shared by every endpoint

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use nf_core::errors::ApiFailure;

/// Pull a human-readable reason out of an error body
///
/// Looks at `message`, then `error` when it is a string, then
/// `error.message`. Blank strings count as absent.
pub fn extract_server_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    let candidates = [
        value.get("message"),
        value.get("error").filter(|error| error.is_string()),
        value.get("error").and_then(|error| error.get("message")),
    ];
    let message = candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|message| !message.is_empty())
        .map(str::to_string);
    message
}

/// Decode a success body
///
/// An empty body decodes as JSON `null`, or as an empty object for
/// payloads whose fields are all optional.
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiFailure> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return serde_json::from_value(Value::Null)
            .or_else(|_| serde_json::from_value(Value::Object(Map::new())))
            .map_err(decode_failure);
    }
    serde_json::from_slice(body).map_err(decode_failure)
}

fn decode_failure(err: serde_json::Error) -> ApiFailure {
    ApiFailure::Decode {
        message: err.to_string(),
    }
}
