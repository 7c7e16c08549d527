//! Data models shared across the module bindings.
//!
//! Request-side types only: the crate never defines response schemas beyond
//! the envelope, because response shapes are owned by the SDK core's own
//! operation catalog and selected per call through a decoder.

mod address;
mod config;
mod contracts;

pub use address::AddressStringFormat;
pub use config::ClientConfig;
pub use contracts::{Base64AddressParams, KeyPair, RunLocalMsgOptions, RunLocalOptions, RunOptions};
