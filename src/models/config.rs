//! Client-level configuration.

use serde::Deserialize;
use std::time::Duration;

/// Configuration applied to every call issued through one dispatcher
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientConfig {
	/// Per-call deadline in milliseconds
	///
	/// `None` defers to the transport's own timeout; a call is never allowed
	/// to block indefinitely unless both are absent by choice.
	#[serde(default)]
	pub timeout_ms: Option<u64>,
}

impl ClientConfig {
	/// Returns the per-call deadline as a duration
	pub fn timeout(&self) -> Option<Duration> {
		self.timeout_ms.map(Duration::from_millis)
	}
}
