//! User persistence.
//!
//! This module provides the credential-record store behind the registration
//! and login handlers:
//! - [`traits`] - the `UserStore` trait and provider selection
//! - [`sqlite`] - libsql-backed implementation (in-memory or file)
//!
//! Records are created on registration and read on login; nothing in this
//! subsystem mutates or deletes them. Username uniqueness is enforced here,
//! at the schema level, not by the handlers.

pub mod sqlite;
pub mod traits;

// Re-exports
pub use sqlite::SqliteStore;
pub use traits::{StoreProvider, UserStore};

/// A stored credential record.
///
/// `password_hash` is a PHC-formatted Argon2id string; the plaintext secret
/// never persists.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub role_name: String,
    pub created_at: i64,
}

/// What the registration handler hands the store. The store generates the
/// numeric id and timestamp.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub role_name: String,
}
