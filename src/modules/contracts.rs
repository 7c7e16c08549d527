//! Contract execution bindings.
//!
//! These operations predate the `boc`/`utils` split in the SDK core's
//! catalog and keep its older parameter spelling: most keys are camelCase,
//! but `try_index` and the `function_name` of `contracts.run.local.msg` are
//! snake_case on the wire. The spellings here match the catalog, not this
//! crate's conventions.
//!
//! Every method takes a final `overrides` mapping merged last into the
//! request params; an override key always shadows the named argument of the
//! same name.

use serde_json::{Map, Value};

use crate::{
	client::{decode, DispatchError, Dispatcher, RequestParams},
	models::{Base64AddressParams, RunLocalMsgOptions, RunLocalOptions, RunOptions},
	transports::SdkTransport,
};

/// Bindings for the `contracts.*` and `tvm.*` operations of the SDK core
#[derive(Clone)]
pub struct ContractsModule<T: Send + Sync + Clone> {
	dispatcher: Dispatcher<T>,
}

impl<T: SdkTransport + Send + Sync + Clone> ContractsModule<T> {
	pub(crate) fn new(dispatcher: Dispatcher<T>) -> Self {
		Self { dispatcher }
	}

	/// Executes a get-method against explicit contract code and data
	///
	/// # Arguments
	/// * `function_name` - Get-method name to execute
	/// * `code_base64` - Base64-encoded contract code BOC
	/// * `data_base64` - Base64-encoded contract data BOC
	/// * `overrides` - Extra params merged last
	pub async fn tvm_get(
		&self,
		function_name: &str,
		code_base64: &str,
		data_base64: &str,
		overrides: Option<Map<String, Value>>,
	) -> Result<Value, DispatchError> {
		self.dispatcher
			.call(
				"tvm.get",
				RequestParams::new()
					.field("functionName", function_name)
					.field("codeBase64", code_base64)
					.field("dataBase64", data_base64)
					.overrides(overrides),
				decode::identity,
			)
			.await
	}

	/// Runs a contract function locally against its current or supplied state
	pub async fn run_local(
		&self,
		address: &str,
		abi: Value,
		function_name: &str,
		input: Value,
		options: RunLocalOptions,
		overrides: Option<Map<String, Value>>,
	) -> Result<Value, DispatchError> {
		self.dispatcher
			.call(
				"contracts.run.local",
				RequestParams::new()
					.field("address", address)
					.field("abi", abi)
					.field("functionName", function_name)
					.field("input", input)
					.optional("header", options.header)
					.optional("account", options.account)
					.optional("keyPair", options.key_pair)
					.field("fullRun", options.full_run)
					.optional("time", options.time)
					.overrides(overrides),
				decode::identity,
			)
			.await
	}

	/// Runs a prebuilt message BOC against a contract locally
	pub async fn run_local_msg(
		&self,
		address: &str,
		message_base64: &str,
		options: RunLocalMsgOptions,
		overrides: Option<Map<String, Value>>,
	) -> Result<Value, DispatchError> {
		self.dispatcher
			.call(
				"contracts.run.local.msg",
				RequestParams::new()
					.field("address", address)
					.field("messageBase64", message_base64)
					.optional("account", options.account)
					.optional("abi", options.abi)
					.optional("function_name", options.function_name)
					.field("fullRun", options.full_run)
					.optional("time", options.time)
					.overrides(overrides),
				decode::identity,
			)
			.await
	}

	/// Runs a contract function on-chain
	///
	/// Pay attention to which network the transport is connected to; running
	/// against mainnet spends real funds.
	pub async fn run(
		&self,
		address: &str,
		abi: Value,
		function_name: &str,
		input: Value,
		options: RunOptions,
		overrides: Option<Map<String, Value>>,
	) -> Result<Value, DispatchError> {
		self.dispatcher
			.call(
				"contracts.run",
				RequestParams::new()
					.field("address", address)
					.field("abi", abi)
					.field("functionName", function_name)
					.field("input", input)
					.optional("header", options.header)
					.optional("keyPair", options.key_pair)
					.optional("try_index", options.try_index)
					.overrides(overrides),
				decode::identity,
			)
			.await
	}

	/// Loads the balance and last transaction id of an account
	pub async fn load(
		&self,
		address: &str,
		overrides: Option<Map<String, Value>>,
	) -> Result<Value, DispatchError> {
		self.dispatcher
			.call(
				"contracts.load",
				RequestParams::new().field("address", address).overrides(overrides),
				decode::identity,
			)
			.await
	}

	/// Finds the shard that owns an address among the given shard descriptors
	pub async fn find_shard(
		&self,
		address: &str,
		shards: Vec<Value>,
		overrides: Option<Map<String, Value>>,
	) -> Result<Value, DispatchError> {
		self.dispatcher
			.call(
				"contracts.find.shard",
				RequestParams::new()
					.field("address", address)
					.field("shards", shards)
					.overrides(overrides),
				decode::identity,
			)
			.await
	}

	/// Converts an address through the legacy contracts-side operation
	///
	/// # Arguments
	/// * `address` - Account address in any format the SDK core accepts
	/// * `convert_to` - Target representation: `AccountId`, `Hex` or `Base64`
	/// * `base64_params` - Flag bits, required only for the `Base64` target
	/// * `overrides` - Extra params merged last
	pub async fn convert_address(
		&self,
		address: &str,
		convert_to: &str,
		base64_params: Option<Base64AddressParams>,
		overrides: Option<Map<String, Value>>,
	) -> Result<Value, DispatchError> {
		self.dispatcher
			.call(
				"contracts.address.convert",
				RequestParams::new()
					.field("address", address)
					.field("convertTo", convert_to)
					.optional("base64Params", base64_params)
					.overrides(overrides),
				decode::identity,
			)
			.await
	}
}
