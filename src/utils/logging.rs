//! Logging utilities.
//!
//! Embedding applications own their subscriber; this helper exists for
//! binaries and tests that want the crate's `tracing` output on stdout
//! without wiring one up themselves.

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Installs a compact stdout subscriber filtered by `RUST_LOG`
///
/// Defaults to `info` when no filter is set in the environment. Does nothing
/// if a global subscriber is already installed.
pub fn setup_logging() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	let subscriber = tracing_subscriber::registry().with(filter).with(
		fmt::layer()
			.with_writer(std::io::stdout)
			.event_format(fmt::format().with_level(true).with_target(true).compact()),
	);

	let _ = subscriber.try_init();
}
