//! Request models for the contracts module.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ed25519 key pair for signing contract calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
	pub public: String,
	pub secret: String,
}

/// Optional arguments for `contracts.run.local`
///
/// Unset fields are omitted from the request; `full_run` is a plain flag
/// and is always sent.
#[derive(Debug, Clone, Default)]
pub struct RunLocalOptions {
	/// Contract header, part of the function call set
	pub header: Option<Value>,
	/// Account state to run against instead of the on-chain state
	pub account: Option<Value>,
	/// Key pair to sign the call with
	pub key_pair: Option<KeyPair>,
	/// Whether to execute the full transaction phase chain
	pub full_run: bool,
	/// Execution timestamp override
	pub time: Option<u64>,
}

/// Optional arguments for `contracts.run.local.msg`
#[derive(Debug, Clone, Default)]
pub struct RunLocalMsgOptions {
	/// Account state to run against instead of the on-chain state
	pub account: Option<Value>,
	/// Contract JSON ABI, needed to decode the output
	pub abi: Option<Value>,
	/// Contract function name the message invokes
	pub function_name: Option<String>,
	/// Whether to execute the full transaction phase chain
	pub full_run: bool,
	/// Execution timestamp override
	pub time: Option<u64>,
}

/// Optional arguments for `contracts.run`
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
	/// Contract header, part of the function call set
	pub header: Option<Value>,
	/// Key pair to sign the call with
	pub key_pair: Option<KeyPair>,
	/// Retry index for expiration-based message replay protection
	pub try_index: Option<u8>,
}

/// Flags for the Base64 target of `contracts.address.convert`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base64AddressParams {
	pub url: bool,
	pub test: bool,
	pub bounce: bool,
}
