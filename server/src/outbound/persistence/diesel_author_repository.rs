//! PostgreSQL-backed `Storage<Author>` adapter.
//!
//! Each operation is a single static Diesel query with bound parameters;
//! no SQL text is assembled at runtime. Update and delete are not part of
//! this rollout for authors: they fail with a typed unimplemented error
//! after the identity precondition check, so callers can detect the gap
//! deterministically instead of hitting a silent no-op.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::{debug, error};

use crate::domain::ports::Storage;
use crate::domain::{Author, Error};

use super::models::{AuthorRow, NewAuthorRow};
use super::pool::{DbPool, PoolError};
use super::schema::authors;

/// Relational implementation of the author storage port.
#[derive(Clone)]
pub struct DieselAuthorRepository {
    pool: DbPool,
}

impl DieselAuthorRepository {
    /// Create a repository over an already-built connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Check the textual identity against the backend's key type.
///
/// Pure precondition: runs before any pool checkout, so malformed input
/// never costs a round-trip.
fn parse_author_id(id: &str) -> Result<i32, Error> {
    id.parse().map_err(|_| {
        debug!(id, "identity is not a numeric key");
        Error::invalid_identity(format!("`{id}` is not a numeric identity"))
    })
}

fn unimplemented_operation(operation: &str) -> Error {
    Error::unimplemented(format!(
        "author storage does not implement `{operation}` in this rollout"
    ))
}

fn map_checkout_read(err: PoolError) -> Error {
    error!(error = %err, "author backend connection failed");
    Error::backend_read("author backend connection failed")
}

fn map_checkout_write(err: PoolError) -> Error {
    error!(error = %err, "author backend connection failed");
    Error::backend_write("author backend connection failed")
}

fn map_read_error(err: diesel::result::Error) -> Error {
    match err {
        diesel::result::Error::DeserializationError(detail) => {
            error!(error = %detail, "author row does not match the entity shape");
            Error::decoding("author row does not match the entity shape")
        }
        other => {
            error!(error = %other, "author backend read failed");
            Error::backend_read("author backend read failed")
        }
    }
}

fn map_write_error(err: diesel::result::Error) -> Error {
    error!(error = %err, "author backend write failed");
    Error::backend_write("author backend write failed")
}

fn row_to_author(row: AuthorRow) -> Author {
    Author {
        id: row.id.to_string(),
        name: row.name,
    }
}

#[async_trait]
impl Storage<Author> for DieselAuthorRepository {
    async fn create(&self, entity: &Author) -> Result<String, Error> {
        debug!(name = %entity.name, "create author");
        let mut conn = self.pool.get().await.map_err(map_checkout_write)?;
        let id: i32 = diesel::insert_into(authors::table)
            .values(NewAuthorRow { name: &entity.name })
            .returning(authors::id)
            .get_result(&mut conn)
            .await
            .map_err(map_write_error)?;
        Ok(id.to_string())
    }

    async fn find_all(&self) -> Result<Vec<Author>, Error> {
        debug!("find all authors");
        let mut conn = self.pool.get().await.map_err(map_checkout_read)?;
        let rows: Vec<AuthorRow> = authors::table
            .select(AuthorRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_read_error)?;
        Ok(rows.into_iter().map(row_to_author).collect())
    }

    async fn find_one(&self, id: &str) -> Result<Author, Error> {
        let key = parse_author_id(id)?;
        debug!(key, "find one author");
        let mut conn = self.pool.get().await.map_err(map_checkout_read)?;
        let row: Option<AuthorRow> = authors::table
            .find(key)
            .select(AuthorRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_read_error)?;
        row.map(row_to_author)
            .ok_or_else(|| Error::not_found(format!("no author with identity `{id}`")))
    }

    async fn update(&self, entity: &Author) -> Result<(), Error> {
        parse_author_id(&entity.id)?;
        Err(unimplemented_operation("update"))
    }

    async fn delete(&self, id: &str) -> Result<(), Error> {
        parse_author_id(id)?;
        Err(unimplemented_operation("delete"))
    }
}
