//! The generic typed dispatch core.
//!
//! [`Dispatcher`] owns the call contract every module binding composes on
//! top of: encode the request params, invoke the transport exactly once,
//! unwrap the response envelope, and hand the payload to a per-call decoder.
//! It is stateless across calls; the only thing it holds is the transport
//! handle and an optional per-call deadline.

pub mod decode;
mod error;
mod params;

pub use error::{DispatchError, TransportError};
pub use params::RequestParams;

use serde::Deserialize;
use serde_json::Value;
use tokio::time;
use tracing::{debug, instrument};

use crate::{models::ClientConfig, transports::SdkTransport};

/// Remote failure payload, carried through to [`DispatchError::Remote`]
/// without reinterpretation.
#[derive(Debug, Deserialize)]
struct RemoteErrorEnvelope {
	code: i64,
	message: String,
	#[serde(default)]
	data: Option<Value>,
}

/// Generic dispatch client for a remote SDK core
///
/// Each call is a single transition: encode, send, decode. No retries, no
/// caching, no cross-call state. The retry policy, if any, belongs to the
/// caller or the transport, never to this layer.
#[derive(Clone)]
pub struct Dispatcher<T: Send + Sync + Clone> {
	/// The underlying transport handle for SDK requests
	transport: T,
	/// Per-call deadline; `None` defers to the transport's own timeout
	timeout: Option<std::time::Duration>,
}

impl<T: SdkTransport + Send + Sync + Clone> Dispatcher<T> {
	/// Creates a new dispatcher over a specific transport handle
	pub fn new(transport: T) -> Self {
		Self {
			transport,
			timeout: None,
		}
	}

	/// Creates a new dispatcher with client configuration applied
	pub fn with_config(transport: T, config: &ClientConfig) -> Self {
		Self {
			transport,
			timeout: config.timeout(),
		}
	}

	/// Invokes a remote operation and decodes its response
	///
	/// # Arguments
	/// * `function_name` - Dotted identifier of the remote operation
	/// * `params` - Parameter mapping assembled by the caller
	/// * `decode` - Per-call decode strategy for the success payload
	///
	/// # Returns
	/// * `Result<R, DispatchError>` - Decoded value or one of the four error
	///   kinds; a success value is only ever decoded from a response the
	///   transport reported as successful.
	#[instrument(skip(self, params, decode), fields(function = function_name))]
	pub async fn call<R, D>(
		&self,
		function_name: &str,
		params: RequestParams,
		decode: D,
	) -> Result<R, DispatchError>
	where
		D: FnOnce(Value) -> Result<R, DispatchError>,
	{
		if function_name.is_empty() {
			return Err(DispatchError::encoding("function name must not be empty"));
		}

		// Fails fast before any transport interaction
		let encoded = Value::Object(params.finish()?);

		let request = self.transport.send_raw_request(function_name, encoded);
		let response = match self.timeout {
			Some(limit) => time::timeout(limit, request)
				.await
				.map_err(|_| TransportError::Timeout(limit))?,
			None => request.await,
		}?;

		debug!("received response envelope");
		decode(unwrap_envelope(function_name, response)?)
	}
}

/// Splits the response envelope into its success payload or the
/// remote-reported failure
fn unwrap_envelope(function_name: &str, response: Value) -> Result<Value, DispatchError> {
	let Value::Object(mut envelope) = response else {
		return Err(DispatchError::decoding(format!(
			"response to `{}` is not a JSON object",
			function_name
		)));
	};

	match envelope.remove("error") {
		Some(Value::Null) | None => {}
		Some(error) => {
			let error: RemoteErrorEnvelope = serde_json::from_value(error).map_err(|e| {
				DispatchError::decoding(format!(
					"response to `{}` carried an unreadable error envelope: {}",
					function_name, e
				))
			})?;
			return Err(DispatchError::Remote {
				code: error.code,
				message: error.message,
				data: error.data,
			});
		}
	}

	envelope.remove("result").ok_or_else(|| {
		DispatchError::decoding(format!(
			"response to `{}` carried neither result nor error",
			function_name
		))
	})
}
