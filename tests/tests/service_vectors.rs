//! End-to-end vectors through the service boundary, JSON in and out
//!
//! The payloads here are the wire shapes an HTTP binding would pass
//! through verbatim: requests deserialize from JSON, responses serialize
//! back to the documented field names.

use gfpoly_service::{ops, schema::BinaryOpRequest, schema::UnaryOpRequest, ServiceError};
use serde_json::{json, Value};

fn binary_request(payload: Value) -> BinaryOpRequest {
    serde_json::from_value(payload).unwrap()
}

fn unary_request(payload: Value) -> UnaryOpRequest {
    serde_json::from_value(payload).unwrap()
}

#[test]
fn test_add_vector() {
    let request = binary_request(json!({
        "m": 8, "bits": 16, "type": "hex", "hex1": "001A", "hex2": "002B"
    }));
    let response = ops::add(&request).unwrap();
    let body = serde_json::to_value(&response).unwrap();
    assert_eq!(
        body,
        json!({"result": {"hex": "0x0031", "bin": "0b0000000000110001"}})
    );
}

#[test]
fn test_add_vector_binary_form() {
    let request = binary_request(json!({
        "m": 8, "bits": 16, "type": "bin",
        "bin1": "0000000000011010", "bin2": "0000000000101011"
    }));
    let response = ops::add(&request).unwrap();
    assert_eq!(response.result.hex, "0x0031");
    assert_eq!(response.result.bin, "0b0000000000110001");
}

#[test]
fn test_subtract_vector() {
    let request = binary_request(json!({
        "m": 8, "bits": 16, "type": "hex", "hex1": "001A", "hex2": "002B"
    }));
    let response = ops::subtract(&request).unwrap();
    assert_eq!(response.result.hex, "0x0031");
}

#[test]
fn test_multiply_vector() {
    let request = binary_request(json!({
        "m": 8, "bits": 16, "type": "hex", "hex1": "001A", "hex2": "002B"
    }));
    let response = ops::multiply(&request).unwrap();
    assert_eq!(response.result.hex, "0x0093");
    assert_eq!(response.result.bin, "0b0000000010010011");
}

#[test]
fn test_long_division_vector() {
    let request = binary_request(json!({
        "m": 8, "bits": 16, "type": "hex", "hex1": "001A", "hex2": "002B"
    }));
    let response = ops::divide_with_remainder(&request).unwrap();
    let body = serde_json::to_value(&response).unwrap();
    assert_eq!(
        body,
        json!({
            "quotient_hex": "0x0000",
            "quotient_bin": "0b0000000000000000",
            "remainder_hex": "0x001A",
            "remainder_bin": "0b0000000000011010"
        })
    );
}

#[test]
fn test_invert_vector() {
    let request = unary_request(json!({
        "m": 8, "bits": 16, "type": "hex", "hex": "001A"
    }));
    let response = ops::invert(&request).unwrap();
    assert_eq!(response.result.hex, "0x00FD");
    assert_eq!(response.result.bin, "0b0000000011111101");
}

#[test]
fn test_modulo_vector() {
    let request = unary_request(json!({
        "m": 8, "bits": 16, "type": "bin", "bin": "0000000000011010"
    }));
    let response = ops::modulo(&request).unwrap();
    assert_eq!(response.result.hex, "0x001A");
    assert_eq!(response.result.bin, "0b0000000000011010");
}

#[test]
fn test_invert_zero_is_404() {
    let request = unary_request(json!({
        "m": 8, "bits": 16, "type": "hex", "hex": "0000"
    }));
    let err = ops::invert(&request).unwrap_err();
    assert_eq!(err, ServiceError::ZeroHasNoInverse);
    assert_eq!(err.status(), 404);
}

#[test]
fn test_divide_by_zero_is_404() {
    let request = binary_request(json!({
        "m": 8, "bits": 16, "type": "bin",
        "bin1": "0000000000011010", "bin2": "0000000000000000"
    }));
    let err = ops::divide(&request).unwrap_err();
    assert_eq!(err, ServiceError::DivisionByZero);
    assert_eq!(err.status(), 404);
}

#[test]
fn test_malformed_payloads_are_400() {
    // second operand missing
    let request = binary_request(json!({
        "m": 8, "bits": 16, "type": "hex", "hex1": "001A"
    }));
    assert_eq!(ops::add(&request).unwrap_err().status(), 400);

    // hex alphabet violation
    let request = binary_request(json!({
        "m": 8, "bits": 16, "type": "hex", "hex1": "00ZZ", "hex2": "002B"
    }));
    assert_eq!(ops::add(&request).unwrap_err().status(), 400);

    // binary operand given as hex text
    let request = binary_request(json!({
        "m": 8, "bits": 16, "type": "bin",
        "bin1": "0000000000011010", "bin2": "002B"
    }));
    assert_eq!(ops::multiply(&request).unwrap_err().status(), 400);
}

#[test]
fn test_unknown_type_string_is_rejected_at_deserialization() {
    let result: Result<BinaryOpRequest, _> = serde_json::from_value(json!({
        "m": 8, "bits": 16, "type": "octal", "hex1": "001A", "hex2": "002B"
    }));
    assert!(result.is_err());
}
