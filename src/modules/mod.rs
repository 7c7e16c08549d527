//! Typed module bindings over the dispatch core.
//!
//! Each module fixes the function names of one area of the SDK core's
//! operation catalog and exposes them as typed methods:
//! - `boc` for BOC parsing and blockchain config extraction
//! - `utils` for address format conversion
//! - `contracts` for local and on-chain contract execution
//!
//! No method here contains branching beyond optional-parameter assembly;
//! everything else is the dispatcher's job.

mod boc;
mod contracts;
mod utils;

pub use boc::BocModule;
pub use contracts::ContractsModule;
pub use utils::UtilsModule;

use crate::{client::Dispatcher, models::ClientConfig, transports::SdkTransport};

/// Client facade bundling every module binding over one shared dispatcher
pub struct TonClient<T: Send + Sync + Clone> {
	/// BOC parsing operations
	pub boc: BocModule<T>,
	/// Address conversion utilities
	pub utils: UtilsModule<T>,
	/// Contract execution operations
	pub contracts: ContractsModule<T>,
}

impl<T: SdkTransport + Send + Sync + Clone> TonClient<T> {
	/// Creates a new client over a specific transport handle
	pub fn new(transport: T) -> Self {
		Self::with_config(transport, &ClientConfig::default())
	}

	/// Creates a new client with client configuration applied
	pub fn with_config(transport: T, config: &ClientConfig) -> Self {
		let dispatcher = Dispatcher::with_config(transport, config);
		Self {
			boc: BocModule::new(dispatcher.clone()),
			utils: UtilsModule::new(dispatcher.clone()),
			contracts: ContractsModule::new(dispatcher),
		}
	}
}
