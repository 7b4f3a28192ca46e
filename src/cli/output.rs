//! Colored output helpers for CLI
//!
//! Provides consistent, colored terminal output for the Portcullis CLI.

use owo_colors::OwoColorize;

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print the Portcullis banner
    pub fn banner(&self) {
        if self.colored {
            println!(
                r#"
   {}
   {}
   {}
"#,
                " _  _  Portcullis ".bright_cyan().bold(),
                "| || | credential registration".cyan(),
                "|_||_| and token issuance".blue(),
            );
            println!(
                "   {}\n",
                format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
            );
        } else {
            println!(
                r#"
 _  _  Portcullis
| || | credential registration
|_||_| and token issuance v{}
"#,
                env!("CARGO_PKG_VERSION")
            );
        }
    }

    /// Print a section header
    pub fn header(&self, message: &str) {
        if self.colored {
            println!("\n{}\n", message.bright_white().bold());
        } else {
            println!("\n== {} ==\n", message);
        }
    }

    /// Print a sub-section header
    pub fn subheader(&self, message: &str) {
        if self.colored {
            println!("{}", message.bright_white());
        } else {
            println!("-- {}", message);
        }
    }

    /// Print a success message with a checkmark
    pub fn success(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "✓".green().bold(), message.green());
        } else {
            println!("  [OK] {}", message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "•".blue(), message);
        } else {
            println!("  [INFO] {}", message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "⚠".yellow().bold(), message.yellow());
        } else {
            println!("  [WARN] {}", message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    /// Print a hint for the user's next step
    pub fn hint(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "→".dimmed(), message.dimmed());
        } else {
            println!("  [HINT] {}", message);
        }
    }

    /// Print a file creation message
    pub fn created(&self, path: &str) {
        if self.colored {
            println!("  {} created {}", "+".green().bold(), path.bright_white());
        } else {
            println!("  [+] created {}", path);
        }
    }

    /// Print a skipped-file message
    pub fn skipped(&self, path: &str, reason: &str) {
        if self.colored {
            println!(
                "  {} skipped {} ({})",
                "-".dimmed(),
                path.dimmed(),
                reason.dimmed()
            );
        } else {
            println!("  [-] skipped {} ({})", path, reason);
        }
    }
}
