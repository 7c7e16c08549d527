//! Tests for the dispatcher call contract.

use serde::{Serialize, Serializer};
use serde_json::{json, Value};
use std::{
	sync::{
		atomic::{AtomicBool, Ordering},
		Arc,
	},
	time::Duration,
};

use crate::mocks::{remote_error, success, MockTransport};
use ton_sdk_client::{
	client::{decode, RequestParams, TransportError},
	models::ClientConfig,
	transports::SdkTransport,
	DispatchError, Dispatcher,
};

/// A value whose serialization always fails.
struct Unencodable;

impl Serialize for Unencodable {
	fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
		Err(serde::ser::Error::custom("deliberately not serializable"))
	}
}

#[tokio::test]
async fn test_successful_call_returns_decoded_value() {
	ton_sdk_client::utils::setup_logging();

	let mut mock = MockTransport::new();
	mock.expect_send_raw_request()
		.withf(|name, params| {
			name == "boc.parse_message" && *params == json!({ "boc": "te6ccgEBAQEAAgAAAA==" })
		})
		.times(1)
		.returning(|_, _| Ok(success(json!({ "id": 1, "body": "..." }))));

	let dispatcher = Dispatcher::new(Arc::new(mock));
	let result: Value = dispatcher
		.call(
			"boc.parse_message",
			RequestParams::new().field("boc", "te6ccgEBAQEAAgAAAA=="),
			decode::identity,
		)
		.await
		.unwrap();

	assert_eq!(result, json!({ "id": 1, "body": "..." }));
}

#[tokio::test]
async fn test_unencodable_params_never_reach_the_transport() {
	let mut mock = MockTransport::new();
	mock.expect_send_raw_request().times(0);

	let dispatcher = Dispatcher::new(Arc::new(mock));
	let err = dispatcher
		.call(
			"contracts.run",
			RequestParams::new().field("abi", Unencodable),
			decode::identity,
		)
		.await
		.unwrap_err();

	assert!(matches!(&err, DispatchError::Encoding(_)));
	assert!(err.to_string().contains("`abi`"));
}

#[tokio::test]
async fn test_empty_function_name_never_reaches_the_transport() {
	let mut mock = MockTransport::new();
	mock.expect_send_raw_request().times(0);

	let dispatcher = Dispatcher::new(Arc::new(mock));
	let err = dispatcher
		.call("", RequestParams::new(), decode::identity)
		.await
		.unwrap_err();

	assert!(matches!(err, DispatchError::Encoding(_)));
}

#[tokio::test]
async fn test_transport_failure_preserves_cause_and_skips_decode() {
	let mut mock = MockTransport::new();
	mock.expect_send_raw_request().times(1).returning(|_, _| {
		Err(TransportError::failure_with_source(
			"ipc bridge unavailable",
			std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"),
		))
	});

	let decode_invoked = Arc::new(AtomicBool::new(false));
	let flag = decode_invoked.clone();

	let dispatcher = Dispatcher::new(Arc::new(mock));
	let err = dispatcher
		.call("contracts.load", RequestParams::new(), move |value| {
			flag.store(true, Ordering::SeqCst);
			Ok(value)
		})
		.await
		.unwrap_err();

	assert!(!decode_invoked.load(Ordering::SeqCst));
	match err {
		DispatchError::Transport(transport_err) => {
			assert_eq!(transport_err.to_string(), "ipc bridge unavailable");
			let cause =
				std::error::Error::source(&transport_err).expect("cause should be preserved");
			assert_eq!(cause.to_string(), "pipe closed");
		}
		other => panic!("expected a transport error, got: {other}"),
	}
}

#[tokio::test]
async fn test_cancellation_propagates_without_decoding() {
	let mut mock = MockTransport::new();
	mock.expect_send_raw_request()
		.times(1)
		.returning(|_, _| Err(TransportError::Cancelled));

	let decode_invoked = Arc::new(AtomicBool::new(false));
	let flag = decode_invoked.clone();

	let dispatcher = Dispatcher::new(Arc::new(mock));
	let err = dispatcher
		.call("contracts.load", RequestParams::new(), move |value| {
			flag.store(true, Ordering::SeqCst);
			Ok(value)
		})
		.await
		.unwrap_err();

	assert!(!decode_invoked.load(Ordering::SeqCst));
	assert!(matches!(
		err,
		DispatchError::Transport(TransportError::Cancelled)
	));
}

#[tokio::test]
async fn test_remote_error_round_trips_code_and_message() {
	let mut mock = MockTransport::new();
	mock.expect_send_raw_request().times(1).returning(|_, _| {
		Ok(remote_error(
			1013,
			"Account not found",
			Some(json!({ "address": "0:abc" })),
		))
	});

	let dispatcher = Dispatcher::new(Arc::new(mock));
	let err = dispatcher
		.call(
			"contracts.load",
			RequestParams::new().field("address", "0:abc"),
			decode::identity,
		)
		.await
		.unwrap_err();

	match err {
		DispatchError::Remote {
			code,
			message,
			data,
		} => {
			assert_eq!(code, 1013);
			assert_eq!(message, "Account not found");
			assert_eq!(data, Some(json!({ "address": "0:abc" })));
		}
		other => panic!("expected a remote error, got: {other}"),
	}
}

#[tokio::test]
async fn test_shape_mismatch_is_decoding_not_remote() {
	let mut mock = MockTransport::new();
	mock.expect_send_raw_request()
		.times(1)
		.returning(|_, _| Ok(success(json!({ "unexpected": "mapping" }))));

	let dispatcher = Dispatcher::new(Arc::new(mock));
	let err = dispatcher
		.call(
			"boc.get_blockchain_config",
			RequestParams::new().field("block_boc", "te6ccg=="),
			decode::string,
		)
		.await
		.unwrap_err();

	assert!(matches!(&err, DispatchError::Decoding(_)));
	assert!(!matches!(&err, DispatchError::Remote { .. }));
}

/// Transport that never completes within a test's deadline.
struct StalledTransport;

#[async_trait::async_trait]
impl SdkTransport for StalledTransport {
	async fn send_raw_request(
		&self,
		_function_name: &str,
		_params: Value,
	) -> Result<Value, TransportError> {
		tokio::time::sleep(Duration::from_secs(60)).await;
		Ok(success(Value::Null))
	}
}

#[tokio::test]
async fn test_deadline_surfaces_as_timeout() {
	let config: ClientConfig = serde_json::from_str(r#"{ "timeout_ms": 20 }"#).unwrap();
	let dispatcher = Dispatcher::with_config(Arc::new(StalledTransport), &config);

	let err = dispatcher
		.call("contracts.load", RequestParams::new(), decode::identity)
		.await
		.unwrap_err();

	assert!(matches!(
		err,
		DispatchError::Transport(TransportError::Timeout(_))
	));
}
