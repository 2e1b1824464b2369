//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[case(Error::invalid_identity("bad id"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::backend_read("read failed"), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(Error::backend_write("write failed"), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(Error::encoding("bad key"), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(Error::decoding("bad row"), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(Error::unimplemented("not yet"), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(Error::unknown("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

async fn response_body(error: &Error) -> Value {
    let response = ResponseError::error_response(error);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error body is JSON")
}

#[actix_web::test]
async fn known_kinds_keep_their_code_and_message() {
    let error = Error::not_found("no user with identity `42`");
    let body = response_body(&error).await;

    assert_eq!(body["code"], json!("not_found"));
    assert_eq!(body["message"], json!("no user with identity `42`"));
}

#[actix_web::test]
async fn unknown_errors_are_redacted() {
    let error = Error::unknown("connection refused at postgres://user:secret@db")
        .with_details(json!({ "driver": "pgx" }));
    let body = response_body(&error).await;

    assert_eq!(body["code"], json!("unknown"));
    assert_eq!(body["message"], json!("internal server error"));
    assert!(body.get("details").is_none());
}

#[actix_web::test]
async fn actix_errors_promote_to_redacted_unknown() {
    let source = actix_web::error::ErrorBadGateway("upstream stack trace");
    let error = Error::from(source);

    assert_eq!(error.code(), ErrorCode::Unknown);
    let body = response_body(&error).await;
    assert_eq!(body["message"], json!("internal server error"));
}
