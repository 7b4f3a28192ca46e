use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= API Request/Response Types =============

/// Body of `POST /api/auth/register`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// A user as returned to callers. Never carries the password hash.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub user_id: i64,
    pub username: String,
    pub role_name: String,
}

impl From<&crate::db::User> for UserResponse {
    fn from(user: &crate::db::User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            role_name: user.role_name.clone(),
        }
    }
}

/// Successful login response: greeting plus the signed token.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

// ============= Validated Payloads =============
//
// The validation stages in `auth::middleware` deposit these into request
// extensions; handlers extract them instead of re-parsing the body.

/// Registration payload after the validation stage ran: fields are present
/// and `role_name` is normalized.
#[derive(Debug, Clone)]
pub struct ValidRegistration {
    pub username: String,
    pub password: String,
    pub role_name: String,
}

/// Login payload after the validation stage ran.
#[derive(Debug, Clone)]
pub struct ValidLogin {
    pub username: String,
    pub password: String,
}

// ============= Token Claims =============

/// Claims embedded in every issued token.
///
/// `sub` is the store-generated numeric user id. `exp` is absolute:
/// `iat` plus the configured expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub username: String,
    pub role_name: String,
    pub iat: usize,
    pub exp: usize,
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    /// Unknown username or wrong password. One variant for both causes so
    /// the response never reveals which it was.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let (status, body) = match self {
            // The login contract pins the exact unauthorized body shape.
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                serde_json::json!({ "message": "Invalid credentials" }),
            ),
            AppError::Database(msg) | AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": msg }),
            ),
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, serde_json::json!({ "error": msg }))
            }
            AppError::InvalidInput(msg) => {
                (StatusCode::BAD_REQUEST, serde_json::json!({ "error": msg }))
            }
            AppError::Unprocessable(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::json!({ "error": msg }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
