//! Domain entities, ports, and errors.
//!
//! Purpose: define the transport-agnostic core the adapters plug into. The
//! entities are plain records; `ports::Storage` is the capability every
//! persistence backend implements; `Error`/`ErrorCode` is the closed failure
//! taxonomy crossing both boundaries.

pub mod author;
pub mod book;
pub mod error;
pub mod ports;
pub mod user;

pub use self::author::Author;
pub use self::book::Book;
pub use self::error::{Error, ErrorCode};
pub use self::user::User;
