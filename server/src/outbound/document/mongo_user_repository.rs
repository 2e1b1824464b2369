//! MongoDB-backed `Storage<User>` adapter.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};
use tracing::{debug, trace};

use crate::domain::ports::Storage;
use crate::domain::{Error, User};

use super::documents::UserDocument;
use super::helpers::{map_read_error, map_write_error, parse_object_id, to_set_document};

/// Document-store implementation of the user storage port.
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    /// Bind the adapter to a collection inside an already-connected database.
    pub fn new(database: &Database, collection: &str) -> Self {
        Self {
            collection: database.collection(collection),
        }
    }
}

#[async_trait]
impl Storage<User> for MongoUserRepository {
    async fn create(&self, entity: &User) -> Result<String, Error> {
        debug!("create user");
        let document = UserDocument::from_domain(entity);
        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(map_write_error)?;
        result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .ok_or_else(|| Error::encoding("assigned user key is not an object id"))
    }

    async fn find_all(&self) -> Result<Vec<User>, Error> {
        debug!("find all users");
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(map_read_error)?;
        let documents: Vec<UserDocument> = cursor.try_collect().await.map_err(map_read_error)?;
        documents
            .into_iter()
            .map(UserDocument::into_domain)
            .collect()
    }

    async fn find_one(&self, id: &str) -> Result<User, Error> {
        let oid = parse_object_id(id)?;
        debug!(%oid, "find one user");
        self.collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(map_read_error)?
            .ok_or_else(|| Error::not_found(format!("no user with identity `{id}`")))?
            .into_domain()
    }

    async fn update(&self, entity: &User) -> Result<(), Error> {
        let oid = parse_object_id(&entity.id)?;
        let fields = to_set_document(&UserDocument::from_domain(entity))?;
        let result = self
            .collection
            .update_one(doc! { "_id": oid }, doc! { "$set": fields })
            .await
            .map_err(map_write_error)?;
        if result.matched_count == 0 {
            return Err(Error::not_found(format!(
                "no user with identity `{}` to update",
                entity.id
            )));
        }
        trace!(
            matched = result.matched_count,
            modified = result.modified_count,
            "user update applied"
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
                "no user with identity `{id}` to delete"
            )));
        }
        trace!(deleted = result.deleted_count, "user delete applied");
        Ok(())
    }
}
