//! Book entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Author;

/// Book record, persisted in the document backend.
///
/// The author travels embedded by value rather than as a foreign key, so a
/// single read returns the full payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Backend-assigned identity; 24 hex characters once created.
    #[serde(default)]
    pub id: String,
    /// Book title.
    pub name: String,
    /// Embedded author payload.
    pub author: Author,
}
