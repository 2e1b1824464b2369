//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting actix
//! handlers turn failures into consistent JSON responses and status codes.
//! Handlers return `ApiResult` and never write error responses themselves;
//! this impl is the single point of translation, so every request gets at
//! most one response write.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidIdentity => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::BackendRead
        | ErrorCode::BackendWrite
        | ErrorCode::Encoding
        | ErrorCode::Decoding
        | ErrorCode::Unimplemented
        | ErrorCode::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Strip client-visible detail from failures outside the closed taxonomy.
fn redact_if_unknown(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::Unknown) {
        Error::unknown("internal server error")
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(redact_if_unknown(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Log here; the client body must not carry implementation details.
        error!(error = %err, "actix error promoted to domain error");
        Error::unknown("internal server error")
    }
}

#[cfg(test)]
mod tests;
