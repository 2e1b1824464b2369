//! MongoDB-backed `Storage<Book>` adapter.
//!
//! Books embed their author payload, so the stored document carries the
//! full author sub-document rather than a reference.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};
use tracing::{debug, trace};

use crate::domain::ports::Storage;
use crate::domain::{Book, Error};

use super::documents::BookDocument;
use super::helpers::{map_read_error, map_write_error, parse_object_id, to_set_document};

/// Document-store implementation of the book storage port.
#[derive(Clone)]
pub struct MongoBookRepository {
    collection: Collection<BookDocument>,
}

impl MongoBookRepository {
    /// Bind the adapter to a collection inside an already-connected database.
    pub fn new(database: &Database, collection: &str) -> Self {
        Self {
            collection: database.collection(collection),
        }
    }
}

#[async_trait]
impl Storage<Book> for MongoBookRepository {
    async fn create(&self, entity: &Book) -> Result<String, Error> {
        debug!(name = %entity.name, "create book");
        let document = BookDocument::from_domain(entity);
        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(map_write_error)?;
        result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .ok_or_else(|| Error::encoding("assigned book key is not an object id"))
    }

    async fn find_all(&self) -> Result<Vec<Book>, Error> {
        debug!("find all books");
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(map_read_error)?;
        let documents: Vec<BookDocument> = cursor.try_collect().await.map_err(map_read_error)?;
        documents
            .into_iter()
            .map(BookDocument::into_domain)
            .collect()
    }

    async fn find_one(&self, id: &str) -> Result<Book, Error> {
        let oid = parse_object_id(id)?;
        debug!(%oid, "find one book");
        self.collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(map_read_error)?
            .ok_or_else(|| Error::not_found(format!("no book with identity `{id}`")))?
            .into_domain()
    }

    async fn update(&self, entity: &Book) -> Result<(), Error> {
        let oid = parse_object_id(&entity.id)?;
        let fields = to_set_document(&BookDocument::from_domain(entity))?;
        let result = self
            .collection
            .update_one(doc! { "_id": oid }, doc! { "$set": fields })
            .await
            .map_err(map_write_error)?;
        if result.matched_count == 0 {
            return Err(Error::not_found(format!(
                "no book with identity `{}` to update",
                entity.id
            )));
        }
        trace!(
            matched = result.matched_count,
            modified = result.modified_count,
            "book update applied"
        );
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), Error> {
        let oid = parse_object_id(id)?;
        let result = self
            .collection
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(map_write_error)?;
        if result.deleted_count == 0 {
            return Err(Error::not_found(format!(
                "no book with identity `{id}` to delete"
            )));
        }
        trace!(deleted = result.deleted_count, "book delete applied");
        Ok(())
    }
}
