//! User entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Registered account, persisted in the document backend.
///
/// The identity is backend-assigned: it is empty until [`create`] returns
/// and immutable afterwards. The password hash is stored verbatim; the
/// plaintext never enters the system, and the HTTP adapter keeps the hash
/// out of response bodies.
///
/// [`create`]: crate::domain::ports::Storage::create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend-assigned identity; 24 hex characters once created.
    #[serde(default)]
    pub id: String,
    /// Contact address used as the login name.
    pub email: String,
    /// Public handle.
    pub username: String,
    /// Hash of the account password.
    pub password_hash: String,
}
