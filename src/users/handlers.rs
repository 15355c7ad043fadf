use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    errors::AppError,
    state::AppState,
    users::{dto::UserWithMessages, repo_types::UserRow, services},
};

/// Trailing slashes resolve to the same handlers.
pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/", get(list_users))
        .route("/users/:id", get(get_user))
        .route("/users/:id/", get(get_user))
}

/// GET /users
#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserRow>>, AppError> {
    let users = services::list_users(state.users.as_ref()).await?;
    Ok(Json(users))
}

/// GET /users/:id -> {name, type, messages: [{id, msg}]}
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<UserWithMessages>, AppError> {
    let Path(id) = id.map_err(|rejection| AppError::InvalidUserId(rejection.body_text()))?;
    let user = services::get_user_with_messages(state.users.as_ref(), id).await?;
    Ok(Json(user))
}
