//! Serializing adapter for sequential-access SDK handles.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{client::TransportError, transports::SdkTransport};

/// Wraps a transport whose underlying handle tolerates only one in-flight
/// request, admitting requests through a handle-owned lock.
///
/// Multiplexing transports do not need this adapter; the dispatcher issues
/// concurrent calls against them directly.
pub struct SerializedTransport<T> {
	inner: Arc<T>,
	in_flight: Arc<Mutex<()>>,
}

// A clone shares the handle and the lock; `T: Clone` is not required.
impl<T> Clone for SerializedTransport<T> {
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
			in_flight: self.in_flight.clone(),
		}
	}
}

impl<T> SerializedTransport<T> {
	/// Creates a new serializing adapter around a transport handle
	pub fn new(inner: T) -> Self {
		Self {
			inner: Arc::new(inner),
			in_flight: Arc::new(Mutex::new(())),
		}
	}
}

#[async_trait]
impl<T: SdkTransport + Send + Sync> SdkTransport for SerializedTransport<T> {
	async fn send_raw_request(
		&self,
		function_name: &str,
		params: Value,
	) -> Result<Value, TransportError> {
		let _guard = self.in_flight.lock().await;
		self.inner.send_raw_request(function_name, params).await
	}
}
