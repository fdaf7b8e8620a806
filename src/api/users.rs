//! User resource endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, JsonBody};
use crate::domain::user::{User, UserDraft};

/// Build a draft from a parsed body, taking `name` and `email` as sent
fn draft_from_body(body: &Value) -> UserDraft {
    let field = |key: &str| body.get(key).cloned();

    UserDraft {
        name: field("name"),
        email: field("email"),
    }
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state.user_service.create(draft_from_body(&body)).await?;

    debug!(user_id = %user.id(), "Created user");

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    debug!(user_id = %id, "Getting user");

    let user = state.user_service.get(&id).await?;

    Ok(Json(user))
}

/// PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: JsonBody,
) -> Result<Json<User>, ApiError> {
    let user = state
        .user_service
        .update(&id, draft_from_body(&body))
        .await?;

    Ok(Json(user))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.user_service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /
pub async fn index() -> &'static str {
    "Hello World!"
}
