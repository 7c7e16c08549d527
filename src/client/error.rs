//! Error types for the dispatch layer.
//!
//! Every call through the [`Dispatcher`](super::Dispatcher) fails with exactly
//! one of four kinds, so callers can tell a transport outage apart from a
//! remote-reported failure and implement their own retry policy on top.
//! Nothing in this crate retries or falls back on its own.

use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Represents possible errors surfaced by a dispatch call
#[derive(Debug, Error)]
pub enum DispatchError {
	/// Request params could not be serialized.
	///
	/// Raised before any transport interaction; the remote side never sees
	/// the request.
	#[error("Encoding Error: {0}")]
	Encoding(String),

	/// The underlying transport call failed before the remote operation
	/// could report anything. The original cause is preserved as the source.
	#[error("Transport Error: {0}")]
	Transport(#[from] TransportError),

	/// The remote operation executed and reported failure (invalid BOC,
	/// invalid address format, reverted contract execution, ...).
	///
	/// Code and message are the remote-supplied values, unmodified.
	#[error("Remote Error {code}: {message}")]
	Remote {
		code: i64,
		message: String,
		data: Option<Value>,
	},

	/// The transport succeeded but the response did not match the shape the
	/// decoder expects. Indicates an SDK/binding version mismatch rather
	/// than a remote failure.
	#[error("Decoding Error: {0}")]
	Decoding(String),
}

impl DispatchError {
	/// Creates a new encoding error
	pub fn encoding(msg: impl Into<String>) -> Self {
		Self::Encoding(msg.into())
	}

	/// Creates a new decoding error
	pub fn decoding(msg: impl Into<String>) -> Self {
		Self::Decoding(msg.into())
	}
}

/// Represents possible failures of the underlying transport
///
/// Timeout and cancellation are distinct kinds so callers can retry the
/// former without re-issuing work that was deliberately abandoned.
#[derive(Debug, Error)]
pub enum TransportError {
	/// The call did not complete within the configured deadline
	#[error("request timed out after {0:?}")]
	Timeout(Duration),

	/// The call was cancelled before completion
	#[error("request cancelled")]
	Cancelled,

	/// Any other transport-level failure (process crossing, network, IPC)
	#[error("{message}")]
	Failure {
		message: String,
		#[source]
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
	},
}

impl TransportError {
	/// Creates a new transport failure
	pub fn failure(msg: impl Into<String>) -> Self {
		Self::Failure {
			message: msg.into(),
			source: None,
		}
	}

	/// Creates a new transport failure preserving the original cause
	pub fn failure_with_source(
		msg: impl Into<String>,
		source: impl std::error::Error + Send + Sync + 'static,
	) -> Self {
		Self::Failure {
			message: msg.into(),
			source: Some(Box::new(source)),
		}
	}
}
