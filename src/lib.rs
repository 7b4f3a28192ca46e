//! # Portcullis
//!
//! A small authentication service: user registration with Argon2id-hashed
//! credentials and role assignment, and login issuing a signed, time-limited
//! token carrying identity claims.
//!
//! ## Overview
//!
//! Portcullis can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `portcullis-server` binary
//! 2. **As a library** - Mount the router inside your own Axum application
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use portcullis::{api, auth::jwt::AuthService, db::StoreProvider, AppConfig, AppState};
//! use std::sync::Arc;
//!
//! let config = AppConfig::load("portcullis.toml")?;
//! let auth_service = AuthService::new(config.jwt_secret()?, config.auth.jwt_expiry, config.hash_params()?);
//! let store = StoreProvider::from_url(&config.database.url).create_store().await?;
//!
//! let state = AppState {
//!     config: Arc::new(config),
//!     store,
//!     auth_service: Arc::new(auth_service),
//! };
//!
//! let app = axum::Router::new().nest("/api", api::routes::create_router(state));
//! ```
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`auth`] - password hashing, token issuance, and the validation pipeline
//! - [`db`] - the user-record store (libsql, in-memory or file)
//! - [`types`] - request/response types and error handling
//! - [`utils`] - configuration loading
//! - [`cli`] - command-line interface for the server binary
//!
//! ## Design
//!
//! Request processing is stateless: nothing is shared between requests
//! except the read-only configuration, the signing secret (loaded once at
//! startup), and the store. Validation runs as an ordered pipeline of
//! stages in front of each handler; a stage either deposits a typed,
//! normalized payload for the handler or short-circuits with a terminal
//! response.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Password hashing, token issuance, and validation pipeline stages.
pub mod auth;
/// Command-line interface for the server binary.
pub mod cli;
/// User-record persistence (libsql).
pub mod db;
/// Core types (requests, responses, claims, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use auth::jwt::AuthService;
pub use db::{StoreProvider, UserStore};
pub use types::{AppError, Claims, Result};
pub use utils::config::{AppConfig, ConfigError};

use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Immutable configuration, loaded once at startup
    pub config: Arc<AppConfig>,
    /// User-record store
    pub store: Arc<dyn UserStore>,
    /// Authentication service (hashing + token issue/verify)
    pub auth_service: Arc<AuthService>,
}
