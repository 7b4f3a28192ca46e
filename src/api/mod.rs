//! HTTP API Handlers and Routes
//!
//! This module provides the REST API layer for Portcullis, built on the Axum
//! web framework.
//!
//! # Module Structure
//!
//! - [`api::handlers`](crate::api::handlers) - Request handlers for each endpoint
//! - [`api::routes`](crate::api::routes) - Route definitions and router configuration
//!
//! # API Endpoints
//!
//! ## Authentication (`/api/auth`)
//! - `POST /api/auth/register` - Register new user
//! - `POST /api/auth/login` - Login and receive a signed token
//!
//! ## Users (`/api/users`)
//! - `GET /api/users` - List users (requires a valid token)
//!
//! ## Health (`/health`)
//! - `GET /health` - Health check endpoint
//!
//! # Authentication
//!
//! Protected endpoints require a valid token in the `Authorization` header:
//! ```text
//! Authorization: Bearer <token>
//! ```

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;
