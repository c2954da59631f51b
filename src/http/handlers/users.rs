//! CRUD handlers for `/api/users`.

use axum::{extract::State, http::StatusCode, Json};
use tracing::instrument;

use crate::error::UserError;
use crate::http::dtos::{UserDeletedResponse, UserListResponse, UserPayload, UserResponse};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonOrForm, UserIdParam};
use crate::http::state::AppState;

/// `GET /api/users`
#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<UserListResponse>, ApiError> {
    let users = state.users.list_users().await?;

    Ok(Json(UserListResponse {
        success: true,
        count: users.len(),
        users,
    }))
}

/// `GET /api/users/:id`
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    UserIdParam(id): UserIdParam,
) -> Result<Json<UserResponse>, ApiError> {
    let id = id.ok_or_else(ApiError::user_not_found)?;
    let user = state
        .users
        .get_user(id)
        .await?
        .ok_or(UserError::NotFound(id))?;

    Ok(Json(UserResponse {
        success: true,
        user,
    }))
}

/// `POST /api/users`
#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<UserPayload>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let create = payload.into_create()?;
    let user = state.users.create_user(create).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            success: true,
            user,
        }),
    ))
}

/// `PUT /api/users/:id`. Only non-empty fields in the body are written.
#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    UserIdParam(id): UserIdParam,
    JsonOrForm(payload): JsonOrForm<UserPayload>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = id.ok_or_else(ApiError::user_not_found)?;
    let user = state.users.update_user(id, payload.into_patch()).await?;

    Ok(Json(UserResponse {
        success: true,
        user,
    }))
}

/// `DELETE /api/users/:id`. Responds with the removed record.
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    UserIdParam(id): UserIdParam,
) -> Result<Json<UserDeletedResponse>, ApiError> {
    let id = id.ok_or_else(ApiError::user_not_found)?;
    let user = state.users.delete_user(id).await?;

    Ok(Json(UserDeletedResponse {
        success: true,
        message: "User deleted",
        user,
    }))
}
