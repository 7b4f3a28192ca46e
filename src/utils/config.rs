//! TOML-based configuration for Portcullis
//!
//! Declarative configuration for the server, authentication, and database
//! via a TOML file (`portcullis.toml`). The signing secret itself never
//! lives in the file - the config names an environment variable and the
//! secret is resolved from it exactly once, at startup.

use argon2::Params;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure loaded from portcullis.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub database: DatabaseConfig,
}

// ============= Server Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

// ============= Authentication Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Environment variable name containing the signing secret
    #[serde(default = "default_jwt_secret_env")]
    pub jwt_secret_env: String,

    /// Token validity in seconds
    #[serde(default = "default_jwt_expiry")]
    pub jwt_expiry: i64,

    /// Role assigned when registration omits one
    #[serde(default = "default_role")]
    pub default_role: String,

    /// Argon2id memory cost in KiB
    #[serde(default = "default_hash_memory_kib")]
    pub hash_memory_kib: u32,

    /// Argon2id iteration count
    #[serde(default = "default_hash_iterations")]
    pub hash_iterations: u32,

    /// Argon2id lane count
    #[serde(default = "default_hash_parallelism")]
    pub hash_parallelism: u32,
}

fn default_jwt_secret_env() -> String {
    "JWT_SECRET".to_string()
}

fn default_jwt_expiry() -> i64 {
    86400
}

fn default_role() -> String {
    "user".to_string()
}

fn default_hash_memory_kib() -> u32 {
    19456
}

fn default_hash_iterations() -> u32 {
    2
}

fn default_hash_parallelism() -> u32 {
    1
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret_env: default_jwt_secret_env(),
            jwt_expiry: default_jwt_expiry(),
            default_role: default_role(),
            hash_memory_kib: default_hash_memory_kib(),
            hash_iterations: default_hash_iterations(),
            hash_parallelism: default_hash_parallelism(),
        }
    }
}

// ============= Database Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL/path; `:memory:` selects the in-memory store
    #[serde(default = "default_database_url")]
    pub url: String,
}

fn default_database_url() -> String {
    "./data/portcullis.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

// ============= Configuration Loading & Validation =============

/// Errors that can occur during configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Environment variable '{0}' referenced in config is not set")]
    MissingEnvVar(String),
}

impl AppConfig {
    /// Load configuration from a TOML file and validate it.
    ///
    /// The server cannot run without a valid config; callers treat any
    /// error here as fatal at startup.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration for internal consistency and env var
    /// availability. A missing or empty signing secret fails here, at
    /// startup, never per-request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let secret = self.jwt_secret()?;
        if secret.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "environment variable '{}' is set but empty",
                self.auth.jwt_secret_env
            )));
        }

        self.hash_params().map(|_| ())
    }

    /// Get the signing secret from the environment.
    pub fn jwt_secret(&self) -> Result<String, ConfigError> {
        std::env::var(&self.auth.jwt_secret_env)
            .map_err(|_| ConfigError::MissingEnvVar(self.auth.jwt_secret_env.clone()))
    }

    /// Build Argon2id parameters from the configured work factor.
    pub fn hash_params(&self) -> Result<Params, ConfigError> {
        Params::new(
            self.auth.hash_memory_kib,
            self.auth.hash_iterations,
            self.auth.hash_parallelism,
            None,
        )
        .map_err(|e| ConfigError::ValidationError(format!("invalid hash parameters: {}", e)))
    }
}
