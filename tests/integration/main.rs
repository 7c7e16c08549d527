//! Integration tests for the TON SDK dispatch client.
//!
//! Covers the dispatcher call contract against a mocked transport, the
//! serializing transport adapter, and the typed module bindings composed on
//! top of the dispatcher.


mod dispatcher;

mod modules {
	mod boc;
	mod contracts;
	mod utils;
}
