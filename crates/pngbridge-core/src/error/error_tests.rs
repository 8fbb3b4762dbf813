#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case(BridgeError::Config("x".into()), 1, "Config")]
#[test_case(BridgeError::InvalidPath("x".into()), 2, "InvalidPath")]
#[test_case(BridgeError::Decode("x".into()), 3, "Decode")]
#[test_case(BridgeError::Panic("x".into()), 4, "Panic")]
fn BridgeError___variant___maps_to_correct_code(
    error: BridgeError,
    expected_code: u32,
    variant_name: &str,
) {
    assert_eq!(
        error.error_code(),
        expected_code,
        "{} should map to code {}",
        variant_name,
        expected_code
    );
}

#[test]
fn BridgeError___display___includes_message() {
    let error = BridgeError::InvalidPath("interior nul byte".into());

    assert_eq!(error.to_string(), "invalid path: interior nul byte");
}

#[test]
fn BridgeError___from_serde_json___becomes_config_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

    let error: BridgeError = json_err.into();

    assert!(matches!(error, BridgeError::Config(_)));
}
