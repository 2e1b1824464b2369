//! Identity decoding and driver error mapping for the document adapters.

use mongodb::bson::{self, Document, oid::ObjectId};
use mongodb::error::ErrorKind;
use serde::Serialize;
use tracing::{debug, error};

use crate::domain::Error;

/// Decode a textual identity back to the backend's native object id.
///
/// Pure precondition check: runs before any driver await, so malformed
/// input never reaches the backend. Decode failure is a typed invalid
/// identity, never treated as not-found.
pub(crate) fn parse_object_id(id: &str) -> Result<ObjectId, Error> {
    ObjectId::parse_str(id).map_err(|err| {
        debug!(id, error = %err, "identity is not a well-formed object id");
        Error::invalid_identity(format!("`{id}` is not a valid 24-character hex identity"))
    })
}

/// Render a value as the `$set` payload of an update.
pub(crate) fn to_set_document<T: Serialize>(value: &T) -> Result<Document, Error> {
    bson::to_document(value).map_err(|err| {
        error!(error = %err, "entity does not serialise to a document");
        Error::encoding("entity does not serialise to a document")
    })
}

/// Map a driver failure during a read to the taxonomy.
///
/// The driver error carries connection detail; it is logged here and kept
/// out of the returned message.
pub(crate) fn map_read_error(err: mongodb::error::Error) -> Error {
    match err.kind.as_ref() {
        ErrorKind::BsonDeserialization(detail) => {
            error!(error = %detail, "stored document does not match the entity shape");
            Error::decoding("stored document does not match the entity shape")
        }
        _ => {
            error!(error = %err, "document backend read failed");
            Error::backend_read("document backend read failed")
        }
    }
}

/// Map a driver failure during a write to the taxonomy.
pub(crate) fn map_write_error(err: mongodb::error::Error) -> Error {
    match err.kind.as_ref() {
        ErrorKind::BsonSerialization(detail) => {
            error!(error = %detail, "entity does not serialise to a document");
            Error::encoding("entity does not serialise to a document")
        }
        _ => {
            error!(error = %err, "document backend write failed");
            Error::backend_write("document backend write failed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use mongodb::bson::Bson;
    use rstest::rstest;
    use std::collections::HashMap;

    #[rstest]
    #[case("not-a-valid-id")]
    #[case("abc")]
    #[case("zzzzzzzzzzzzzzzzzzzzzzzz")]
    #[case("65b0f0a1b2c3d4e5f6a7b8")]
    #[case("")]
    fn malformed_identities_are_rejected_without_io(#[case] id: &str) {
        let err = parse_object_id(id).expect_err("must reject");
        assert_eq!(err.code(), ErrorCode::InvalidIdentity);
    }

    #[test]
    fn well_formed_identity_round_trips() {
        let oid = parse_object_id("65b0f0a1b2c3d4e5f6a7b8c9").expect("valid id");
        assert_eq!(oid.to_hex(), "65b0f0a1b2c3d4e5f6a7b8c9");
    }

    #[test]
    fn bson_deserialisation_failures_map_to_decoding() {
        let detail = mongodb::bson::from_bson::<i32>(Bson::String("x".into()))
            .expect_err("type mismatch");
        let err = map_read_error(mongodb::error::Error::from(detail));
        assert_eq!(err.code(), ErrorCode::Decoding);
    }

    #[test]
    fn other_read_failures_map_to_backend_read() {
        let detail = std::io::Error::other("connection reset");
        let err = map_read_error(mongodb::error::Error::from(detail));
        assert_eq!(err.code(), ErrorCode::BackendRead);
    }

    #[test]
    fn bson_serialisation_failures_map_to_encoding() {
        let unkeyable: HashMap<Vec<u8>, i32> = HashMap::from([(vec![1], 2)]);
        let detail = mongodb::bson::to_bson(&unkeyable).expect_err("non-string keys");
        let err = map_write_error(mongodb::error::Error::from(detail));
        assert_eq!(err.code(), ErrorCode::Encoding);
    }

    #[test]
    fn other_write_failures_map_to_backend_write() {
        let detail = std::io::Error::other("broken pipe");
        let err = map_write_error(mongodb::error::Error::from(detail));
        assert_eq!(err.code(), ErrorCode::BackendWrite);
    }
}
