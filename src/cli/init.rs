//! Init command implementation
//!
//! Scaffolds a new Portcullis deployment: configuration file, data
//! directory, and an `.env.example` documenting the required secret.

use super::output::Output;
use std::fs;
use std::path::PathBuf;

/// Result of the init operation
pub enum InitResult {
    /// Initialization completed successfully
    Success,
    /// Deployment already exists (portcullis.toml found)
    AlreadyExists,
    /// An error occurred during initialization
    Error(String),
}

/// Configuration for the init command
pub struct InitConfig {
    /// Directory to initialize
    pub path: PathBuf,
    /// Overwrite existing files
    pub force: bool,
    /// Host address for the server
    pub host: String,
    /// Port for the server
    pub port: u16,
}

/// Run the init command
pub fn run(config: InitConfig, output: &Output) -> InitResult {
    output.banner();
    output.header("Initializing Portcullis deployment");

    let base_path = &config.path;

    // Check if portcullis.toml already exists
    let config_path = base_path.join("portcullis.toml");
    if config_path.exists() && !config.force {
        output.warning("portcullis.toml already exists!");
        output.hint("Use --force to overwrite existing files");
        return InitResult::AlreadyExists;
    }

    output.subheader("Creating directories");

    let data_dir = base_path.join("data");
    if !data_dir.exists() {
        if let Err(e) = fs::create_dir_all(&data_dir) {
            output.error(&format!("Failed to create data/: {}", e));
            return InitResult::Error(e.to_string());
        }
        output.created("data/");
    } else {
        output.skipped("data/", "already exists");
    }

    output.subheader("Creating configuration files");

    let toml_content = config_template(&config.host, config.port);
    if let Err(e) = fs::write(&config_path, toml_content) {
        output.error(&format!("Failed to write portcullis.toml: {}", e));
        return InitResult::Error(e.to_string());
    }
    output.created("portcullis.toml");

    let env_path = base_path.join(".env.example");
    if let Err(e) = fs::write(&env_path, ENV_EXAMPLE) {
        output.error(&format!("Failed to write .env.example: {}", e));
        return InitResult::Error(e.to_string());
    }
    output.created(".env.example");

    output.header("Done");
    output.success("Deployment scaffolded");
    output.hint("Set JWT_SECRET (see .env.example), then run: portcullis-server");

    InitResult::Success
}

/// Render the default configuration file.
pub fn config_template(host: &str, port: u16) -> String {
    format!(
        r#"# Portcullis configuration
#
# The signing secret is NOT stored here. [auth].jwt_secret_env names the
# environment variable it is read from at startup.

[server]
host = "{host}"
port = {port}
log_level = "info"

[auth]
# Environment variable holding the token signing secret.
jwt_secret_env = "JWT_SECRET"
# Token validity in seconds (24 hours).
jwt_expiry = 86400
# Role assigned when registration omits one.
default_role = "user"
# Argon2id work factor. Raise hash_memory_kib on production hardware.
hash_memory_kib = 19456
hash_iterations = 2
hash_parallelism = 1

[database]
# SQLite file path, or ":memory:" for an ephemeral store.
url = "./data/portcullis.db"
"#
    )
}

const ENV_EXAMPLE: &str = r#"# Copy to .env (or export in the environment) before starting the server.

# Token signing secret. Use a long random value; at least 32 characters.
JWT_SECRET=change-me-to-a-long-random-value
"#;
