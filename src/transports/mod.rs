//! Transport seam between the dispatch core and the SDK core.
//!
//! The dispatcher treats the transport as an opaque capability: it does not
//! know whether a request crosses a process boundary, a network socket, or
//! an in-process library call. Concrete transports live with the embedding
//! application; this crate only defines the contract and a serializing
//! adapter for handles that cannot take concurrent requests.

mod serialized;

pub use serialized::SerializedTransport;

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::client::TransportError;

/// Trait for sending raw requests to the SDK core
#[async_trait]
pub trait SdkTransport {
	/// Sends one encoded request and returns the raw response envelope
	///
	/// # Arguments
	/// * `function_name` - Dotted identifier of the remote operation
	/// * `params` - Encoded parameter mapping
	///
	/// # Returns
	/// * `Result<Value, TransportError>` - Raw response envelope or the
	///   transport-level cause of failure
	async fn send_raw_request(
		&self,
		function_name: &str,
		params: Value,
	) -> Result<Value, TransportError>;
}

/// Shared handles dispatch through the inner transport unchanged
#[async_trait]
impl<T: SdkTransport + Send + Sync + ?Sized> SdkTransport for Arc<T> {
	async fn send_raw_request(
		&self,
		function_name: &str,
		params: Value,
	) -> Result<Value, TransportError> {
		self.as_ref().send_raw_request(function_name, params).await
	}
}
