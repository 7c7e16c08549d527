//! Request parameter assembly.
//!
//! Every remote operation takes an ordered mapping of named parameters.
//! [`RequestParams`] builds that mapping from required fields, optional
//! fields that were explicitly set, and a final override mapping merged
//! last. Unset optional fields are omitted from the request entirely (the
//! SDK core treats an absent field and an explicit null the same way, and
//! omission keeps remote-side defaulting in charge).

use serde::Serialize;
use serde_json::{Map, Value};

use crate::client::DispatchError;

/// Builder for the parameter mapping of a single remote operation.
///
/// Serialization failures are captured at insertion and surfaced when the
/// dispatcher finalizes the request, before the transport is ever invoked.
///
/// Merge precedence, lowest to highest: required fields, optional fields,
/// overrides. A key set through [`overrides`](Self::overrides) always wins
/// over a field of the same name.
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
	map: Map<String, Value>,
	error: Option<String>,
}

impl RequestParams {
	/// Creates an empty parameter mapping
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts a required field
	pub fn field(mut self, key: &str, value: impl Serialize) -> Self {
		match serde_json::to_value(value) {
			Ok(value) => {
				self.map.insert(key.to_string(), value);
			}
			Err(e) => {
				// Keep the first failure; later ones are symptoms of the same
				// broken argument list.
				self.error
					.get_or_insert_with(|| format!("parameter `{}` is not serializable: {}", key, e));
			}
		}
		self
	}

	/// Inserts an optional field, omitting it when unset
	pub fn optional(self, key: &str, value: Option<impl Serialize>) -> Self {
		match value {
			Some(value) => self.field(key, value),
			None => self,
		}
	}

	/// Merges an escape-hatch mapping last; its keys shadow named fields
	pub fn overrides(mut self, overrides: Option<Map<String, Value>>) -> Self {
		if let Some(overrides) = overrides {
			for (key, value) in overrides {
				self.map.insert(key, value);
			}
		}
		self
	}

	/// Finalizes the mapping, surfacing any serialization failure
	pub(crate) fn finish(self) -> Result<Map<String, Value>, DispatchError> {
		match self.error {
			Some(msg) => Err(DispatchError::Encoding(msg)),
			None => Ok(self.map),
		}
	}
}
