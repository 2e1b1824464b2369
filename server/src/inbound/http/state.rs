//! Shared HTTP adapter state.
//!
//! Handlers accept this via `actix_web::web::Data` so they only depend on
//! the storage port and remain testable without a running backend.

use std::sync::Arc;

use crate::domain::ports::Storage;
use crate::domain::{Author, Book, User};

/// Dependency bundle for HTTP handlers: one storage port per resource.
#[derive(Clone)]
pub struct HttpState {
    /// User persistence (document backend in production).
    pub users: Arc<dyn Storage<User>>,
    /// Author persistence (relational backend in production).
    pub authors: Arc<dyn Storage<Author>>,
    /// Book persistence (document backend in production).
    pub books: Arc<dyn Storage<Book>>,
}
