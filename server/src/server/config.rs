//! Environment-driven application configuration.
//!
//! Read exactly once at process start and passed by value into the server
//! wiring; nothing re-reads the environment afterwards.

use std::env;
use std::net::SocketAddr;

/// Collection holding user documents.
pub const USERS_COLLECTION: &str = "users";
/// Collection holding book documents.
pub const BOOKS_COLLECTION: &str = "books";

/// Process configuration assembled from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// PostgreSQL URL for the relational backend.
    pub database_url: String,
    /// MongoDB connection string for the document backend.
    pub mongodb_uri: String,
    /// Database name inside the document backend.
    pub mongodb_database: String,
}

impl AppConfig {
    /// Assemble configuration from the environment.
    ///
    /// `DATABASE_URL` is mandatory; the rest default to local development
    /// values. A missing or unparsable value is fatal: the process has no
    /// sensible way to continue without a complete configuration.
    pub fn from_env() -> std::io::Result<Self> {
        let bind_addr = env::var("FOLIO_BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".into())
            .parse()
            .map_err(|err| std::io::Error::other(format!("invalid FOLIO_BIND_ADDR: {err}")))?;
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| std::io::Error::other("DATABASE_URL is not set"))?;
        let mongodb_uri =
            env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".into());
        let mongodb_database = env::var("MONGODB_DATABASE").unwrap_or_else(|_| "folio".into());

        Ok(Self {
            bind_addr,
            database_url,
            mongodb_uri,
            mongodb_database,
        })
    }
}
