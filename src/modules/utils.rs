//! Address utility bindings.

use crate::{
	client::{decode, DispatchError, Dispatcher, RequestParams},
	models::AddressStringFormat,
	transports::SdkTransport,
};

/// Bindings for the `utils.*` operations of the SDK core
#[derive(Clone)]
pub struct UtilsModule<T: Send + Sync + Clone> {
	dispatcher: Dispatcher<T>,
}

impl<T: SdkTransport + Send + Sync + Clone> UtilsModule<T> {
	pub(crate) fn new(dispatcher: Dispatcher<T>) -> Self {
		Self { dispatcher }
	}

	/// Converts an account address between representation formats
	///
	/// # Arguments
	/// * `address` - Account address in any format the SDK core accepts
	/// * `output_format` - Target representation
	///
	/// # Returns
	/// * `Result<String, DispatchError>` - The converted address
	pub async fn convert_address(
		&self,
		address: &str,
		output_format: AddressStringFormat,
	) -> Result<String, DispatchError> {
		self.dispatcher
			.call(
				"utils.convert_address",
				RequestParams::new()
					.field("address", address)
					.field("output_format", output_format),
				decode::string,
			)
			.await
	}
}
