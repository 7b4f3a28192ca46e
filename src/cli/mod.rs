//! CLI module for Portcullis
//!
//! Provides command-line interface parsing and handling for the
//! portcullis-server binary. Uses clap for argument parsing and owo-colors
//! for colored terminal output.

pub mod init;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Portcullis - credential registration and token issuance
///
/// A small authentication service: registers users with Argon2id-hashed
/// passwords and issues signed, expiring tokens on login.
#[derive(Parser, Debug)]
#[command(
    name = "portcullis-server",
    author = "Dirmacs <build@dirmacs.com>",
    version,
    about = "Portcullis - credential registration and token issuance",
    long_about = "A small authentication service: registers users with Argon2id-hashed\n\
                  passwords and issues signed, expiring tokens on login.\n\n\
                  Run without arguments to start the server, or use 'init' to scaffold\n\
                  a new deployment.",
    after_help = "EXAMPLES:\n    \
                  portcullis-server init                # Scaffold portcullis.toml and data/\n    \
                  portcullis-server                     # Start the server (requires portcullis.toml)\n    \
                  portcullis-server --config my.toml    # Use a custom config file\n    \
                  portcullis-server config --validate   # Check the config without starting"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "portcullis.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new Portcullis deployment
    ///
    /// Creates portcullis.toml, the data/ directory, and an .env.example
    /// documenting the required secret.
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite existing files without prompting
        #[arg(short, long)]
        force: bool,

        /// Host address for the server
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for the server
        #[arg(long, default_value = "3000")]
        port: u16,
    },

    /// Show configuration information
    Config {
        /// Validate the configuration file
        #[arg(long)]
        validate: bool,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
