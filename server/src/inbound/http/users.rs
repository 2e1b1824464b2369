//! Users API handlers.
//!
//! ```text
//! GET    /users
//! GET    /users/{id}
//! POST   /users
//! PUT    /users/{id}
//! PATCH  /users/{id}
//! DELETE /users/{id}
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /users` and `PUT /users/{id}`.
///
/// Carries the password hash, never a plaintext password; hashing happens
/// upstream of this service.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    /// Contact address used as the login name.
    pub email: String,
    /// Public handle.
    pub username: String,
    /// Hash of the account password.
    pub password_hash: String,
}

/// Request body for `PATCH /users/{id}`; absent fields keep their value.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatchUserRequest {
    /// New contact address, if changing.
    #[serde(default)]
    pub email: Option<String>,
    /// New public handle, if changing.
    #[serde(default)]
    pub username: Option<String>,
    /// New password hash, if changing.
    #[serde(default)]
    pub password_hash: Option<String>,
}

/// User payload returned to clients; the password hash stays server-side.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Backend-assigned identity.
    pub id: String,
    /// Contact address.
    pub email: String,
    /// Public handle.
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
        }
    }
}

/// List all users.
#[utoipa::path(
    get,
    path = "/users",
    tags = ["users"],
    responses(
        (status = 200, description = "Users", body = [UserResponse]),
        (status = 500, description = "Backend failure", body = Error)
    )
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users.find_all().await?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Fetch one user by identity.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tags = ["users"],
    params(("id" = String, Path, description = "User identity")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 400, description = "Malformed identity", body = Error),
        (status = 404, description = "No such user", body = Error)
    )
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state.users.find_one(&path.into_inner()).await?;
    Ok(web::Json(user.into()))
}

/// Create a user; the backend assigns the identity.
#[utoipa::path(
    post,
    path = "/users",
    tags = ["users"],
    request_body = UserRequest,
    responses(
        (status = 201, description = "Created", body = UserResponse),
        (status = 500, description = "Backend failure", body = Error)
    )
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let user = User {
        id: String::new(),
        email: body.email,
        username: body.username,
        password_hash: body.password_hash,
    };
    let id = state.users.create(&user).await?;
    Ok(HttpResponse::Created().json(UserResponse {
        id,
        email: user.email,
        username: user.username,
    }))
}

/// Replace every field of a user.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tags = ["users"],
    params(("id" = String, Path, description = "User identity")),
    request_body = UserRequest,
    responses(
        (status = 204, description = "Replaced"),
        (status = 400, description = "Malformed identity", body = Error),
        (status = 404, description = "No such user", body = Error)
    )
)]
#[put("/users/{id}")]
pub async fn replace_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let user = User {
        id: path.into_inner(),
        email: body.email,
        username: body.username,
        password_hash: body.password_hash,
    };
    state.users.update(&user).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Update the provided fields of a user, keeping the rest.
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tags = ["users"],
    params(("id" = String, Path, description = "User identity")),
    request_body = PatchUserRequest,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Malformed identity", body = Error),
        (status = 404, description = "No such user", body = Error)
    )
)]
#[patch("/users/{id}")]
pub async fn patch_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<PatchUserRequest>,
) -> ApiResult<HttpResponse> {
    let mut user = state.users.find_one(&path.into_inner()).await?;
    let body = payload.into_inner();
    if let Some(email) = body.email {
        user.email = email;
    }
    if let Some(username) = body.username {
        user.username = username;
    }
    if let Some(password_hash) = body.password_hash {
        user.password_hash = password_hash;
    }
    state.users.update(&user).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tags = ["users"],
    params(("id" = String, Path, description = "User identity")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Malformed identity", body = Error),
        (status = 404, description = "No such user", body = Error)
    )
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.users.delete(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
