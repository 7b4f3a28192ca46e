//! Credential verification and token issuance
//!
//! This module is the heart of the service: password hashing, login
//! verification, and the stages that run in front of the handlers.
//!
//! # Module Structure
//!
//! - [`auth::jwt`](crate::auth::jwt) - `AuthService`: Argon2id hashing and HS256 token issue/verify
//! - [`auth::middleware`](crate::auth::middleware) - validation pipeline stages and the bearer extractor
//!
//! # Security Properties
//!
//! - **Password Hashing**: Argon2id (memory-hard) with a configurable work
//!   factor; stored as PHC strings with per-record random salts
//! - **Tokens**: HS256-signed claims with an absolute expiry embedded in the
//!   signed payload (24 hours by default)
//! - **Uniform login failure**: unknown usernames and wrong passwords are
//!   indistinguishable to callers
//!
//! # Usage
//!
//! ## Token Issuance
//!
//! ```ignore
//! use portcullis::auth::jwt::AuthService;
//!
//! let auth = AuthService::new(secret, 86400, params);
//! let token = auth.generate_token(&user)?;
//! ```
//!
//! ## Pipeline
//!
//! The stages compose in front of the handlers as an ordered chain; each
//! stage either deposits its typed output in the request extensions or
//! short-circuits with a terminal response:
//!
//! ```ignore
//! Router::new()
//!     .route("/auth/register", post(register))
//!     .route_layer(middleware::from_fn_with_state(state, validate_registration));
//! ```
//!
//! # Configuration
//!
//! Configure via `portcullis.toml`:
//! ```toml
//! [auth]
//! jwt_secret_env = "JWT_SECRET"  # env var holding the signing secret
//! jwt_expiry = 86400             # token validity in seconds
//! ```

/// Password hashing and token issue/verify.
pub mod jwt;
/// Validation pipeline stages and extractors for protected routes.
pub mod middleware;
