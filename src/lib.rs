//! Typed client bindings for the TON SDK core.
//!
//! Every public method in this crate does the same thing: it builds a
//! parameter mapping, hands it to the generic [`Dispatcher`] together with a
//! response decoder, and returns the decoded value or a [`DispatchError`].
//! The heavy lifting (BOC parsing, TVM execution, address codecs, blockchain
//! config derivation) happens on the other side of the [`SdkTransport`]
//! boundary, inside the SDK core this crate calls into.

pub mod client;
pub mod models;
pub mod modules;
pub mod transports;
pub mod utils;

pub use client::{DispatchError, Dispatcher, TransportError};
pub use modules::TonClient;
pub use transports::SdkTransport;
