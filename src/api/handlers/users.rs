use crate::{
    auth::middleware::AuthUser,
    types::{Result, UserResponse},
    AppState,
};
use axum::{extract::State, Json};

/// List all users. Requires a valid bearer token; hashes are stripped.
pub async fn list_users(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
) -> Result<Json<Vec<UserResponse>>> {
    let users = state.store.list().await?;

    Ok(Json(users.iter().map(UserResponse::from).collect()))
}
