//! Store abstraction
//!
//! The `UserStore` trait abstracts over storage backends so handlers and
//! tests construct whichever fits:
//!
//! ```rust,ignore
//! use portcullis::db::StoreProvider;
//!
//! // In-memory store (default for development/testing)
//! let store = StoreProvider::Memory.create_store().await?;
//!
//! // File-backed SQLite
//! let store = StoreProvider::Sqlite { path: "data/portcullis.db".into() }
//!     .create_store()
//!     .await?;
//! ```

use super::{NewUser, User};
use crate::types::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Store backend selection.
#[derive(Debug, Clone, Default)]
pub enum StoreProvider {
    /// In-memory SQLite database (ephemeral, lost on restart)
    #[default]
    Memory,
    /// File-based SQLite database
    Sqlite {
        /// Path to the SQLite database file
        path: String,
    },
}

impl StoreProvider {
    /// Derive a provider from a database URL. `:memory:` selects the
    /// in-memory backend; anything else is treated as a file path.
    pub fn from_url(url: &str) -> Self {
        if url == ":memory:" {
            StoreProvider::Memory
        } else {
            StoreProvider::Sqlite {
                path: url.to_string(),
            }
        }
    }

    /// Create a user store from this provider configuration.
    pub async fn create_store(&self) -> Result<Arc<dyn UserStore>> {
        match self {
            StoreProvider::Memory => {
                let store = super::sqlite::SqliteStore::new_memory().await?;
                Ok(Arc::new(store))
            }
            StoreProvider::Sqlite { path } => {
                let store = super::sqlite::SqliteStore::new_file(path).await?;
                Ok(Arc::new(store))
            }
        }
    }
}

/// Operations the handlers need from a credential-record store.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new record and return it with the generated id.
    async fn add(&self, user: NewUser) -> Result<User>;

    /// Look up a record by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// All stored records, oldest first.
    async fn list(&self) -> Result<Vec<User>>;
}
