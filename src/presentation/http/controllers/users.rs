// src/presentation/http/controllers/users.rs
use crate::application::queries::users::GetUserQuery;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi_types::{UserListResponse, UserResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

/// List all users.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users.", body = UserListResponse),
        (status = 404, description = "No users exist (when configured).", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn list_users(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<UserListResponse>> {
    state
        .services
        .user_queries
        .list_users()
        .await
        .into_http()
        .map(|users| Json(UserListResponse { users }))
}

/// Fetch a user by username.
#[utoipa::path(
    get,
    path = "/api/users/{username}",
    params(("username" = String, Path, description = "Exact username")),
    responses(
        (status = 200, description = "The user.", body = UserResponse),
        (status = 404, description = "No such user.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Path(username): Path<String>,
) -> HttpResult<Json<UserResponse>> {
    state
        .services
        .user_queries
        .get_user(GetUserQuery { username })
        .await
        .into_http()
        .map(|user| Json(UserResponse { user }))
}
