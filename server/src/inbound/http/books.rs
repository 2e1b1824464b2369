//! Books API handlers.
//!
//! Same surface as `/users`, backed by the document store. The author
//! travels embedded in every payload, so clients never chase references.

use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Author, Book, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /books` and `PUT /books/{id}`.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    /// Book title.
    pub name: String,
    /// Full author payload to embed.
    pub author: Author,
}

/// Request body for `PATCH /books/{id}`; absent fields keep their value.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatchBookRequest {
    /// New title, if changing.
    #[serde(default)]
    pub name: Option<String>,
    /// Replacement author payload, if changing.
    #[serde(default)]
    pub author: Option<Author>,
}

/// List all books.
#[utoipa::path(
    get,
    path = "/books",
    tags = ["books"],
    responses(
        (status = 200, description = "Books", body = [Book]),
        (status = 500, description = "Backend failure", body = Error)
    )
)]
#[get("/books")]
pub async fn list_books(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Book>>> {
    Ok(web::Json(state.books.find_all().await?))
}

/// Fetch one book by identity.
#[utoipa::path(
    get,
    path = "/books/{id}",
    tags = ["books"],
    params(("id" = String, Path, description = "Book identity")),
    responses(
        (status = 200, description = "Book", body = Book),
        (status = 400, description = "Malformed identity", body = Error),
        (status = 404, description = "No such book", body = Error)
    )
)]
#[get("/books/{id}")]
pub async fn get_book(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Book>> {
    Ok(web::Json(state.books.find_one(&path.into_inner()).await?))
}

/// Create a book; the backend assigns the identity.
#[utoipa::path(
    post,
    path = "/books",
    tags = ["books"],
    request_body = BookRequest,
    responses(
        (status = 201, description = "Created", body = Book),
        (status = 500, description = "Backend failure", body = Error)
    )
)]
#[post("/books")]
pub async fn create_book(
    state: web::Data<HttpState>,
    payload: web::Json<BookRequest>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let book = Book {
        id: String::new(),
        name: body.name,
        author: body.author,
    };
    let id = state.books.create(&book).await?;
    Ok(HttpResponse::Created().json(Book {
        id,
        name: book.name,
        author: book.author,
    }))
}

/// Replace every field of a book.
#[utoipa::path(
    put,
    path = "/books/{id}",
    tags = ["books"],
    params(("id" = String, Path, description = "Book identity")),
    request_body = BookRequest,
    responses(
        (status = 204, description = "Replaced"),
        (status = 400, description = "Malformed identity", body = Error),
        (status = 404, description = "No such book", body = Error)
    )
)]
#[put("/books/{id}")]
pub async fn replace_book(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<BookRequest>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let book = Book {
        id: path.into_inner(),
        name: body.name,
        author: body.author,
    };
    state.books.update(&book).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Update the provided fields of a book, keeping the rest.
#[utoipa::path(
    patch,
    path = "/books/{id}",
    tags = ["books"],
    params(("id" = String, Path, description = "Book identity")),
    request_body = PatchBookRequest,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Malformed identity", body = Error),
        (status = 404, description = "No such book", body = Error)
    )
)]
#[patch("/books/{id}")]
pub async fn patch_book(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<PatchBookRequest>,
) -> ApiResult<HttpResponse> {
    let mut book = state.books.find_one(&path.into_inner()).await?;
    let body = payload.into_inner();
    if let Some(name) = body.name {
        book.name = name;
    }
    if let Some(author) = body.author {
        book.author = author;
    }
    state.books.update(&book).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Delete a book.
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tags = ["books"],
    params(("id" = String, Path, description = "Book identity")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Malformed identity", body = Error),
        (status = 404, description = "No such book", body = Error)
    )
)]
#[delete("/books/{id}")]
pub async fn delete_book(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.books.delete(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::in_memory_state;
    use actix_web::{App, http::StatusCode, test as actix_test};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn created_book_embeds_the_author_payload() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(in_memory_state()))
                .service(get_book)
                .service(create_book),
        )
        .await;

        let created = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/books")
                .set_json(json!({
                    "name": "Excession",
                    "author": { "id": "7", "name": "Iain Banks" }
                }))
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);
        let body: Value =
            serde_json::from_slice(&actix_test::read_body(created).await).expect("JSON");
        let id = body["id"].as_str().expect("id string").to_owned();

        let fetched = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/books/{id}"))
                .to_request(),
        )
        .await;
        assert_eq!(fetched.status(), StatusCode::OK);
        let fetched_body: Value =
            serde_json::from_slice(&actix_test::read_body(fetched).await).expect("JSON");
        assert_eq!(fetched_body["author"]["name"], json!("Iain Banks"));
        assert_eq!(fetched_body["author"]["id"], json!("7"));
    }
}
