use crate::{
    db::NewUser,
    types::{
        AppError, LoginRequest, LoginResponse, RegisterRequest, Result, UserResponse, ValidLogin,
        ValidRegistration,
    },
    AppState,
};
use axum::{extract::State, http::StatusCode, Extension, Json};

/// Register a new user
///
/// The validation stage has already run: fields are present and the role is
/// normalized. The response never includes the stored hash.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = UserResponse),
        (status = 400, description = "Missing username or password"),
        (status = 422, description = "Unacceptable role name")
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<AppState>,
    Extension(payload): Extension<ValidRegistration>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    let password_hash = state.auth_service.hash_password(&payload.password)?;

    let created = state
        .store
        .add(NewUser {
            username: payload.username,
            password_hash,
            role_name: payload.role_name,
        })
        .await?;

    tracing::info!(user_id = created.id, username = %created.username, "user registered");

    Ok((StatusCode::CREATED, Json(UserResponse::from(&created))))
}

/// Login with username and password
///
/// Unknown username and wrong password produce the same response, in the
/// same shape, so callers cannot probe which usernames exist.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Extension(payload): Extension<ValidLogin>,
) -> Result<Json<LoginResponse>> {
    let Some(user) = state.store.find_by_username(&payload.username).await? else {
        return Err(AppError::InvalidCredentials);
    };

    if !state
        .auth_service
        .verify_password(&payload.password, &user.password_hash)?
    {
        return Err(AppError::InvalidCredentials);
    }

    let token = state.auth_service.generate_token(&user)?;

    tracing::debug!(user_id = user.id, "login succeeded");

    Ok(Json(LoginResponse {
        message: format!("{} is back!", user.username),
        token,
    }))
}
