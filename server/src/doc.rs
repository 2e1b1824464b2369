//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST surface:
//! every resource endpoint from the inbound layer, the health probes, and
//! the shared error schema clients can rely on across endpoints.

use utoipa::OpenApi;

use crate::domain::{Author, Book, Error, ErrorCode};
use crate::inbound::http::authors::AuthorRequest;
use crate::inbound::http::books::{BookRequest, PatchBookRequest};
use crate::inbound::http::users::{PatchUserRequest, UserRequest, UserResponse};

/// OpenAPI document for the REST API.
/// Swagger UI is mounted in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Folio API",
        description = "CRUD over users, authors, and books with pluggable storage backends."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::replace_user,
        crate::inbound::http::users::patch_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::authors::list_authors,
        crate::inbound::http::authors::get_author,
        crate::inbound::http::authors::create_author,
        crate::inbound::http::authors::replace_author,
        crate::inbound::http::authors::patch_author,
        crate::inbound::http::authors::delete_author,
        crate::inbound::http::books::list_books,
        crate::inbound::http::books::get_book,
        crate::inbound::http::books::create_book,
        crate::inbound::http::books::replace_book,
        crate::inbound::http::books::patch_book,
        crate::inbound::http::books::delete_book,
        crate::inbound::http::health::live,
        crate::inbound::http::health::ready,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Author,
        Book,
        AuthorRequest,
        BookRequest,
        PatchBookRequest,
        UserRequest,
        PatchUserRequest,
        UserResponse,
    ))
)]
pub struct ApiDoc;
