//! Internal BSON document shapes for the MongoDB collections.
//!
//! Implementation details of the document adapter, never exposed to the
//! domain. The identity key is optional so one shape serves both inserts
//! (the backend assigns `_id`) and `$set` updates (no `_id` key in the
//! payload, so backend-internal fields outside the entity shape survive).

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::{Author, Book, Error, User};

/// Document shape for the users collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct UserDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub username: String,
    pub password_hash: String,
}

impl UserDocument {
    /// Write shape: the caller-side identity is dropped on purpose.
    pub(crate) fn from_domain(user: &User) -> Self {
        Self {
            id: None,
            email: user.email.clone(),
            username: user.username.clone(),
            password_hash: user.password_hash.clone(),
        }
    }

    pub(crate) fn into_domain(self) -> Result<User, Error> {
        let id = self
            .id
            .ok_or_else(|| Error::decoding("stored user document has no identity"))?;
        Ok(User {
            id: id.to_hex(),
            email: self.email,
            username: self.username,
            password_hash: self.password_hash,
        })
    }
}

/// Author payload embedded inside book documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AuthorSubdocument {
    pub id: String,
    pub name: String,
}

/// Document shape for the books collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct BookDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub author: AuthorSubdocument,
}

impl BookDocument {
    pub(crate) fn from_domain(book: &Book) -> Self {
        Self {
            id: None,
            name: book.name.clone(),
            author: AuthorSubdocument {
                id: book.author.id.clone(),
                name: book.author.name.clone(),
            },
        }
    }

    pub(crate) fn into_domain(self) -> Result<Book, Error> {
        let id = self
            .id
            .ok_or_else(|| Error::decoding("stored book document has no identity"))?;
        Ok(Book {
            id: id.to_hex(),
            name: self.name,
            author: Author {
                id: self.author.id,
                name: self.author.name,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use mongodb::bson;

    fn stored_user() -> UserDocument {
        UserDocument {
            id: Some(ObjectId::parse_str("65b0f0a1b2c3d4e5f6a7b8c9").expect("valid oid")),
            email: "a@b.com".into(),
            username: "a".into(),
            password_hash: "x".into(),
        }
    }

    #[test]
    fn stored_user_maps_to_domain_with_hex_identity() {
        let user = stored_user().into_domain().expect("maps");
        assert_eq!(user.id, "65b0f0a1b2c3d4e5f6a7b8c9");
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.password_hash, "x");
    }

    #[test]
    fn stored_user_without_identity_is_a_decoding_failure() {
        let document = UserDocument {
            id: None,
            ..stored_user()
        };
        let err = document.into_domain().expect_err("no identity");
        assert_eq!(err.code(), ErrorCode::Decoding);
    }

    #[test]
    fn write_shape_drops_caller_identity() {
        let user = User {
            id: "65b0f0a1b2c3d4e5f6a7b8c9".into(),
            email: "a@b.com".into(),
            username: "a".into(),
            password_hash: "x".into(),
        };
        let document = bson::to_document(&UserDocument::from_domain(&user)).expect("serialises");
        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("email"), Ok("a@b.com"));
    }

    #[test]
    fn book_round_trip_keeps_the_embedded_author() {
        let book = Book {
            id: String::new(),
            name: "Excession".into(),
            author: Author {
                id: "7".into(),
                name: "Iain Banks".into(),
            },
        };
        let mut document = BookDocument::from_domain(&book);
        document.id = Some(ObjectId::parse_str("65b0f0a1b2c3d4e5f6a7b8c9").expect("valid oid"));
        let mapped = document.into_domain().expect("maps");
        assert_eq!(mapped.author, book.author);
        assert_eq!(mapped.name, "Excession");
        assert_eq!(mapped.id.len(), 24);
    }
}
