//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Thin adapters only: they translate between Diesel rows and domain
//! entities and map database errors to the domain taxonomy. Row structs
//! (`models`) and table definitions (`schema`) are internal. Connections
//! come from a `bb8` pool over `diesel-async`.

mod diesel_author_repository;
mod models;
mod pool;
mod schema;

pub use diesel_author_repository::DieselAuthorRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
