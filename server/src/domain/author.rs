//! Author entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Author record, persisted in the relational backend.
///
/// The relational backend assigns a serial key and renders it in decimal;
/// at this layer the identity is an opaque string like every other entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Backend-assigned identity; empty until created.
    #[serde(default)]
    pub id: String,
    /// Author display name.
    pub name: String,
}
