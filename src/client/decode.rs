//! Stock response decoders.
//!
//! The shape of a successful response varies per operation (flat scalar,
//! flat mapping, nested mapping), so the dispatcher is parameterized by a
//! decode function per call site rather than one global schema. The
//! decoders here cover every shape the bound operations return.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::DispatchError;

/// Passes the raw JSON value through unchanged.
pub fn identity(value: Value) -> Result<Value, DispatchError> {
	Ok(value)
}

/// Decodes a raw JSON string, rejecting any other shape.
pub fn string(value: Value) -> Result<String, DispatchError> {
	match value {
		Value::String(s) => Ok(s),
		other => Err(DispatchError::decoding(format!(
			"expected a string response, got: {}",
			other
		))),
	}
}

/// Decodes into any deserializable type, mapping failures to
/// [`DispatchError::Decoding`].
pub fn json<R: DeserializeOwned>(value: Value) -> Result<R, DispatchError> {
	serde_json::from_value(value)
		.map_err(|e| DispatchError::decoding(format!("response did not match expected shape: {}", e)))
}
