use super::{NewUser, User};
use crate::types::{AppError, Result};
use async_trait::async_trait;
use chrono::Utc;
use libsql::{Builder, Connection, Database};

/// libsql-backed user store. Works against an in-memory database or a
/// file on disk; the schema is created on connect.
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    /// Create an in-memory store. Ephemeral; used in development and tests.
    pub async fn new_memory() -> Result<Self> {
        let db = Builder::new_local(":memory:")
            .build()
            .await
            .map_err(|e| AppError::Database(format!("Failed to open in-memory database: {}", e)))?;

        let store = Self { db };
        store.initialize_schema().await?;

        Ok(store)
    }

    /// Create a file-backed store at `path`.
    pub async fn new_file(path: &str) -> Result<Self> {
        let db = Builder::new_local(path)
            .build()
            .await
            .map_err(|e| AppError::Database(format!("Failed to open database at {}: {}", path, e)))?;

        let store = Self { db };
        store.initialize_schema().await?;

        Ok(store)
    }

    fn connection(&self) -> Result<Connection> {
        self.db
            .connect()
            .map_err(|e| AppError::Database(format!("Failed to get connection: {}", e)))
    }

    async fn initialize_schema(&self) -> Result<()> {
        let conn = self.connection()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                role_name TEXT NOT NULL,
                created_at INTEGER NOT NULL
            )",
            (),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create users table: {}", e)))?;

        Ok(())
    }

    fn row_to_user(row: &libsql::Row) -> Result<User> {
        Ok(User {
            id: row.get(0).map_err(|e| AppError::Database(e.to_string()))?,
            username: row.get(1).map_err(|e| AppError::Database(e.to_string()))?,
            password_hash: row.get(2).map_err(|e| AppError::Database(e.to_string()))?,
            role_name: row.get(3).map_err(|e| AppError::Database(e.to_string()))?,
            created_at: row.get(4).map_err(|e| AppError::Database(e.to_string()))?,
        })
    }
}

#[async_trait]
impl super::traits::UserStore for SqliteStore {
    async fn add(&self, user: NewUser) -> Result<User> {
        let conn = self.connection()?;
        let now = Utc::now().timestamp();

        let mut rows = conn
            .query(
                "INSERT INTO users (username, password_hash, role_name, created_at)
                 VALUES (?, ?, ?, ?)
                 RETURNING id, username, password_hash, role_name, created_at",
                (user.username, user.password_hash, user.role_name, now),
            )
            .await
            .map_err(|e| AppError::Database(format!("Failed to create user: {}", e)))?;

        let row = rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
            .ok_or_else(|| AppError::Database("Insert returned no row".to_string()))?;

        Self::row_to_user(&row)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let conn = self.connection()?;

        let mut rows = conn
            .query(
                "SELECT id, username, password_hash, role_name, created_at
                 FROM users WHERE username = ?",
                [username],
            )
            .await
            .map_err(|e| AppError::Database(format!("Failed to query user: {}", e)))?;

        if let Some(row) = rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            Ok(Some(Self::row_to_user(&row)?))
        } else {
            Ok(None)
        }
    }

    async fn list(&self) -> Result<Vec<User>> {
        let conn = self.connection()?;

        let mut rows = conn
            .query(
                "SELECT id, username, password_hash, role_name, created_at
                 FROM users ORDER BY id ASC",
                (),
            )
            .await
            .map_err(|e| AppError::Database(format!("Failed to query users: {}", e)))?;

        let mut users = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            users.push(Self::row_to_user(&row)?);
        }

        Ok(users)
    }
}
