//! Address representation formats.

use serde::{Deserialize, Serialize};

/// Target representation for `utils.convert_address`
///
/// Serializes to the tagged form the SDK core expects, e.g.
/// `{"type": "Base64", "url": true, "test": false, "bounce": true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AddressStringFormat {
	/// Bare 256-bit account id, hex encoded
	AccountId,
	/// `workchain:hex` form
	Hex,
	/// Base64 form with its three flag bits
	Base64 { url: bool, test: bool, bounce: bool },
}
