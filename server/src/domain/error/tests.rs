//! Tests for the error taxonomy and its serialised shape.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Error::invalid_identity("bad"), ErrorCode::InvalidIdentity)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::backend_read("read"), ErrorCode::BackendRead)]
#[case(Error::backend_write("write"), ErrorCode::BackendWrite)]
#[case(Error::encoding("encode"), ErrorCode::Encoding)]
#[case(Error::decoding("decode"), ErrorCode::Decoding)]
#[case(Error::unimplemented("later"), ErrorCode::Unimplemented)]
#[case(Error::unknown("boom"), ErrorCode::Unknown)]
fn constructors_set_the_matching_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[test]
fn display_uses_the_message() {
    let error = Error::not_found("no user with identity `x`");
    assert_eq!(error.to_string(), "no user with identity `x`");
}

#[test]
fn codes_serialise_as_snake_case() {
    let value = serde_json::to_value(Error::invalid_identity("bad")).expect("serialise");
    assert_eq!(value["code"], json!("invalid_identity"));
    assert_eq!(value["message"], json!("bad"));
    assert!(value.get("details").is_none());
}

#[test]
fn details_round_trip_through_json() {
    let error = Error::not_found("missing").with_details(json!({ "id": "42" }));
    let value = serde_json::to_value(&error).expect("serialise");
    let parsed: Error = serde_json::from_value(value).expect("deserialise");
    assert_eq!(parsed, error);
    assert_eq!(parsed.details(), Some(&json!({ "id": "42" })));
}
