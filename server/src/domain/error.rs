//! Domain-level error taxonomy.
//!
//! These errors are transport agnostic. Persistence backends construct them
//! and return them upward; the HTTP inbound adapter is the single point that
//! maps them to status codes and response bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Stable machine-readable code naming the failure category.
///
/// The set is closed on purpose: the HTTP adapter maps it exhaustively, so a
/// new category forces a conscious decision about its client-visible status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The supplied identity is not well formed for the target backend.
    InvalidIdentity,
    /// No record matches the supplied identity.
    NotFound,
    /// The backend failed while servicing a read.
    BackendRead,
    /// The backend failed while servicing a write.
    BackendWrite,
    /// A value could not be rendered into its backend or public form.
    Encoding,
    /// A stored record could not be parsed into the entity shape.
    Decoding,
    /// The backend does not implement this operation.
    Unimplemented,
    /// A failure outside the closed taxonomy.
    Unknown,
}

/// Typed error value crossing the storage and HTTP boundaries.
///
/// Immutable once constructed. The message is written for clients: backends
/// log driver-level detail at the point of failure and keep it out of here.
///
/// # Examples
/// ```
/// use folio::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("no author with identity `42`");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Error {
    #[schema(example = "not_found")]
    code: ErrorCode,
    #[schema(example = "no user with identity `65b0…`")]
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Create an error with an explicit code.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Supplementary structured details, if any.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach structured details to the error.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidIdentity`].
    pub fn invalid_identity(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidIdentity, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::BackendRead`].
    pub fn backend_read(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BackendRead, message)
    }

    /// Convenience constructor for [`ErrorCode::BackendWrite`].
    pub fn backend_write(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BackendWrite, message)
    }

    /// Convenience constructor for [`ErrorCode::Encoding`].
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Encoding, message)
    }

    /// Convenience constructor for [`ErrorCode::Decoding`].
    pub fn decoding(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Decoding, message)
    }

    /// Convenience constructor for [`ErrorCode::Unimplemented`].
    pub fn unimplemented(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unimplemented, message)
    }

    /// Convenience constructor for [`ErrorCode::Unknown`].
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unknown, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests;
