//! Authors API handlers.
//!
//! Same surface as `/users`, backed by the relational store in production.
//! The `Author` entity has no server-side fields to hide, so responses carry
//! the domain record directly.

use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Author, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /authors` and `PUT /authors/{id}`.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRequest {
    /// Author display name.
    pub name: String,
}

/// List all authors.
#[utoipa::path(
    get,
    path = "/authors",
    tags = ["authors"],
    responses(
        (status = 200, description = "Authors", body = [Author]),
        (status = 500, description = "Backend failure", body = Error)
    )
)]
#[get("/authors")]
pub async fn list_authors(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Author>>> {
    Ok(web::Json(state.authors.find_all().await?))
}

/// Fetch one author by identity.
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tags = ["authors"],
    params(("id" = String, Path, description = "Author identity")),
    responses(
        (status = 200, description = "Author", body = Author),
        (status = 400, description = "Malformed identity", body = Error),
        (status = 404, description = "No such author", body = Error)
    )
)]
#[get("/authors/{id}")]
pub async fn get_author(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Author>> {
    Ok(web::Json(state.authors.find_one(&path.into_inner()).await?))
}

/// Create an author; the backend assigns the identity.
#[utoipa::path(
    post,
    path = "/authors",
    tags = ["authors"],
    request_body = AuthorRequest,
    responses(
        (status = 201, description = "Created", body = Author),
        (status = 500, description = "Backend failure", body = Error)
    )
)]
#[post("/authors")]
pub async fn create_author(
    state: web::Data<HttpState>,
    payload: web::Json<AuthorRequest>,
) -> ApiResult<HttpResponse> {
    let author = Author {
        id: String::new(),
        name: payload.into_inner().name,
    };
    let id = state.authors.create(&author).await?;
    Ok(HttpResponse::Created().json(Author {
        id,
        name: author.name,
    }))
}

/// Replace every field of an author.
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tags = ["authors"],
    params(("id" = String, Path, description = "Author identity")),
    request_body = AuthorRequest,
    responses(
        (status = 204, description = "Replaced"),
        (status = 400, description = "Malformed identity", body = Error),
        (status = 404, description = "No such author", body = Error),
        (status = 500, description = "Operation not available on this backend", body = Error)
    )
)]
#[put("/authors/{id}")]
pub async fn replace_author(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<AuthorRequest>,
) -> ApiResult<HttpResponse> {
    let author = Author {
        id: path.into_inner(),
        name: payload.into_inner().name,
    };
    state.authors.update(&author).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Update the provided fields of an author, keeping the rest.
#[utoipa::path(
    patch,
    path = "/authors/{id}",
    tags = ["authors"],
    params(("id" = String, Path, description = "Author identity")),
    request_body = AuthorRequest,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Malformed identity", body = Error),
        (status = 404, description = "No such author", body = Error),
        (status = 500, description = "Operation not available on this backend", body = Error)
    )
)]
#[patch("/authors/{id}")]
pub async fn patch_author(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<AuthorRequest>,
) -> ApiResult<HttpResponse> {
    let mut author = state.authors.find_one(&path.into_inner()).await?;
    author.name = payload.into_inner().name;
    state.authors.update(&author).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Delete an author.
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tags = ["authors"],
    params(("id" = String, Path, description = "Author identity")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Malformed identity", body = Error),
        (status = 404, description = "No such author", body = Error),
        (status = 500, description = "Operation not available on this backend", body = Error)
    )
)]
#[delete("/authors/{id}")]
pub async fn delete_author(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.authors.delete(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::in_memory_state;
    use actix_web::{App, http::StatusCode, test as actix_test};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn create_list_and_fetch_authors() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(in_memory_state()))
                .service(list_authors)
                .service(get_author)
                .service(create_author),
        )
        .await;

        let created = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/authors")
                .set_json(json!({ "name": "Iain Banks" }))
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);
        let body: Value =
            serde_json::from_slice(&actix_test::read_body(created).await).expect("JSON");
        let id = body["id"].as_str().expect("id string").to_owned();
        assert_eq!(body["name"], json!("Iain Banks"));

        let listed = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/authors").to_request(),
        )
        .await;
        assert_eq!(listed.status(), StatusCode::OK);
        let list: Value =
            serde_json::from_slice(&actix_test::read_body(listed).await).expect("JSON");
        assert_eq!(list.as_array().map(Vec::len), Some(1));

        let fetched = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/authors/{id}"))
                .to_request(),
        )
        .await;
        assert_eq!(fetched.status(), StatusCode::OK);
    }
}
