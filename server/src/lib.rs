//! Folio backend library modules.
//!
//! The crate follows a ports-and-adapters layout: `domain` holds entities,
//! the storage capability trait, and the error taxonomy; `inbound` holds the
//! HTTP adapter; `outbound` holds the persistence adapters (document store
//! and relational store).

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
