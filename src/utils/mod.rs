//! Shared utilities.

mod logging;

pub use logging::setup_logging;
