//! User handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{PathParams, ValidatedJson};
use crate::api::AppState;
use crate::domain::{NewUser, User, UserPatch};
use crate::errors::AppResult;
use crate::types::{DeletedResponse, ItemResponse, ListResponse};

use super::favourite_handler::favourite_routes;

/// User creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// User email address
    #[validate(length(min = 1, message = "email is required"))]
    #[schema(example = "luke@tatooine.org")]
    pub email: String,
    /// User password, stored as given
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "x")]
    pub password: String,
}

/// Partial user update; absent fields are left untouched
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    /// New email address
    #[validate(length(min = 1, message = "email cannot be empty"))]
    #[schema(example = "leia@alderaan.org")]
    pub email: Option<String>,
    /// New password
    #[validate(length(min = 1, message = "password cannot be empty"))]
    pub password: Option<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser {
            email: req.email,
            password: req.password,
        }
    }
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        UserPatch {
            email: req.email,
            password: req.password,
        }
    }
}

/// Create user routes, favourites included
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).patch(update_user).delete(delete_user))
        .merge(favourite_routes())
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users in insertion order", body = [User])
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<ListResponse<Vec<User>>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(ListResponse::new("Users list", users)))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Missing field or email already taken")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Json<ItemResponse<User>>> {
    let user = state.user_service.create_user(payload.into()).await?;
    Ok(Json(ItemResponse::new("User added", user)))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<Json<ItemResponse<User>>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(ItemResponse::new("User found", user)))
}

/// Update email and/or password
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Empty field or email already taken"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<ItemResponse<User>>> {
    let user = state.user_service.update_user(id, payload.into()).await?;
    Ok(Json(ItemResponse::new("User updated", user)))
}

/// Delete a user and their favourites
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted; body carries the removed row under `user delete`"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<Json<DeletedResponse<User>>> {
    let user = state.user_service.delete_user(id).await?;
    Ok(Json(DeletedResponse::new("User deleted", "user", user)))
}
