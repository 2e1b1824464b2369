//! Port abstraction for persistence backends.

use async_trait::async_trait;

use crate::domain::Error;

/// Backend-agnostic persistence capability.
///
/// Every backend (document store, relational store, in-memory fake) exposes
/// the same five operations for an entity type `E`; handler code depends on
/// `dyn Storage<E>` only, never a concrete backend. Identities are opaque
/// strings whose well-formedness each backend checks as a pure precondition
/// before its first driver await, so malformed input never costs a network
/// round-trip.
///
/// Cancellation follows Rust async semantics: the HTTP layer drops the
/// operation future when the request is abandoned, so no backend call
/// outlives its caller.
#[async_trait]
pub trait Storage<E>: Send + Sync {
    /// Persist a new record and return the backend-assigned identity.
    ///
    /// The input entity's identity must be empty; a caller-supplied identity
    /// is advisory undefined behaviour and backends are free to ignore it.
    ///
    /// # Errors
    /// [`ErrorCode::BackendWrite`] on transport failure;
    /// [`ErrorCode::Encoding`] when the assigned key cannot be rendered in
    /// the public identity format.
    ///
    /// [`ErrorCode::BackendWrite`]: crate::domain::ErrorCode::BackendWrite
    /// [`ErrorCode::Encoding`]: crate::domain::ErrorCode::Encoding
    async fn create(&self, entity: &E) -> Result<String, Error>;

    /// Return every record; order is not guaranteed stable across calls.
    ///
    /// An empty store is success with an empty vector, never an error. A
    /// record that fails to parse aborts the whole read rather than
    /// returning partial results.
    async fn find_all(&self) -> Result<Vec<E>, Error>;

    /// Look up a single record by identity.
    async fn find_one(&self, id: &str) -> Result<E, Error>;

    /// Replace every field except the identity, matched by `entity.id`.
    ///
    /// Zero matched records is [`ErrorCode::NotFound`]; matched but
    /// unchanged data is still success.
    ///
    /// [`ErrorCode::NotFound`]: crate::domain::ErrorCode::NotFound
    async fn update(&self, entity: &E) -> Result<(), Error>;

    /// Physically remove the record with this identity.
    ///
    /// Zero deleted records is [`ErrorCode::NotFound`].
    ///
    /// [`ErrorCode::NotFound`]: crate::domain::ErrorCode::NotFound
    async fn delete(&self, id: &str) -> Result<(), Error>;
}
