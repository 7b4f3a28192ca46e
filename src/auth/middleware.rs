use crate::types::{
    AppError, Claims, LoginRequest, RegisterRequest, ValidLogin, ValidRegistration,
};
use crate::AppState;
use axum::{
    body::{to_bytes, Body},
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};

/// Upper bound on buffered request bodies. Auth payloads are tiny; anything
/// bigger is rejected before deserialization.
const MAX_BODY_BYTES: usize = 16 * 1024;

const MAX_ROLE_NAME_LEN: usize = 32;

/// Registration stage: parses the body, requires `username` and `password`,
/// and normalizes `role_name` (trimmed; blank defaults to the configured
/// role; `admin` and over-long names are rejected). Deposits a
/// [`ValidRegistration`] in the request extensions for the handler.
pub async fn validate_registration(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (parts, body) = req.into_parts();
    let payload: RegisterRequest = read_json(body).await?;

    let username = payload.username.trim();
    if username.is_empty() || payload.password.is_empty() {
        return Err(AppError::InvalidInput(
            "username and password are required".to_string(),
        ));
    }

    let role_name = match payload.role_name.as_deref().map(str::trim) {
        None | Some("") => state.config.auth.default_role.clone(),
        Some(role) if role.eq_ignore_ascii_case("admin") => {
            return Err(AppError::Unprocessable(
                "role name can not be admin".to_string(),
            ));
        }
        Some(role) if role.chars().count() > MAX_ROLE_NAME_LEN => {
            return Err(AppError::Unprocessable(format!(
                "role name can not be longer than {} chars",
                MAX_ROLE_NAME_LEN
            )));
        }
        Some(role) => role.to_string(),
    };

    let mut req = Request::from_parts(parts, Body::empty());
    req.extensions_mut().insert(ValidRegistration {
        username: username.to_string(),
        password: payload.password,
        role_name,
    });

    Ok(next.run(req).await)
}

/// Login stage: parses the body and requires both fields. It deliberately
/// does not check whether the username exists - the handler answers unknown
/// usernames and wrong passwords identically.
pub async fn validate_login(req: Request, next: Next) -> Result<Response, AppError> {
    let (parts, body) = req.into_parts();
    let payload: LoginRequest = read_json(body).await?;

    let username = payload.username.trim();
    if username.is_empty() || payload.password.is_empty() {
        return Err(AppError::InvalidInput(
            "username and password are required".to_string(),
        ));
    }

    let mut req = Request::from_parts(parts, Body::empty());
    req.extensions_mut().insert(ValidLogin {
        username: username.to_string(),
        password: payload.password,
    });

    Ok(next.run(req).await)
}

/// Bearer-token stage for protected routes. Verifies the token and inserts
/// the [`Claims`] for handlers to extract via [`AuthUser`].
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("missing authorization header".to_string()))?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Unauthorized("authorization header must carry a bearer token".to_string())
    })?;

    let claims = state.auth_service.verify_token(token)?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

async fn read_json<T: serde::de::DeserializeOwned>(body: Body) -> Result<T, AppError> {
    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|_| AppError::InvalidInput("request body unreadable or too large".to_string()))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| AppError::InvalidInput(format!("malformed request body: {}", e)))
}

/// Extractor for the claims deposited by [`require_auth`].
pub struct AuthUser(pub Claims);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::Unauthorized("missing authentication".to_string()))
    }
}
