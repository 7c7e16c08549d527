//! BOC parsing bindings.
//!
//! Every operation takes a base64-encoded Bag of Cells and returns the JSON
//! representation produced by the SDK core; this layer never inspects the
//! BOC itself.

use serde_json::Value;

use crate::{
	client::{decode, DispatchError, Dispatcher, RequestParams},
	transports::SdkTransport,
};

/// Bindings for the `boc.*` operations of the SDK core
#[derive(Clone)]
pub struct BocModule<T: Send + Sync + Clone> {
	dispatcher: Dispatcher<T>,
}

impl<T: SdkTransport + Send + Sync + Clone> BocModule<T> {
	pub(crate) fn new(dispatcher: Dispatcher<T>) -> Self {
		Self { dispatcher }
	}

	/// Parses a base64-encoded message BOC into its JSON representation
	pub async fn parse_message(&self, boc: &str) -> Result<Value, DispatchError> {
		self.dispatcher
			.call(
				"boc.parse_message",
				RequestParams::new().field("boc", boc),
				decode::identity,
			)
			.await
	}

	/// Parses a base64-encoded transaction BOC into its JSON representation
	pub async fn parse_transaction(&self, boc: &str) -> Result<Value, DispatchError> {
		self.dispatcher
			.call(
				"boc.parse_transaction",
				RequestParams::new().field("boc", boc),
				decode::identity,
			)
			.await
	}

	/// Parses a base64-encoded account BOC into its JSON representation
	pub async fn parse_account(&self, boc: &str) -> Result<Value, DispatchError> {
		self.dispatcher
			.call(
				"boc.parse_account",
				RequestParams::new().field("boc", boc),
				decode::identity,
			)
			.await
	}

	/// Parses a base64-encoded block BOC into its JSON representation
	pub async fn parse_block(&self, boc: &str) -> Result<Value, DispatchError> {
		self.dispatcher
			.call(
				"boc.parse_block",
				RequestParams::new().field("boc", boc),
				decode::identity,
			)
			.await
	}

	/// Extracts the blockchain config from a base64-encoded block BOC
	///
	/// # Returns
	/// * `Result<String, DispatchError>` - Base64-encoded config BOC
	pub async fn get_blockchain_config(&self, block_boc: &str) -> Result<String, DispatchError> {
		self.dispatcher
			.call(
				"boc.get_blockchain_config",
				RequestParams::new().field("block_boc", block_boc),
				decode::string,
			)
			.await
	}
}
