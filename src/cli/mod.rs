//! CLI module for godoc-lint
//!
//! ## Commands
//!
//! - `check [PATH...]` - Check Go files and directories (also the default action)
//! - `--lex FILE` - Dump the token stream of one file (debug)
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `discover` - Go file discovery
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod discover;

use std::fmt;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::config::{LintConfig, OutputFormat};
use crate::diagnostics::Category;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Go doc comment convention checker
#[derive(Parser, Debug)]
#[command(name = "godoc-lint")]
#[command(version = VERSION)]
#[command(about = "Check that Go doc comments start with the name they document", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Files or directories to check (default action when no subcommand given)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "paths")]
    pub lex_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check Go files for doc comment conventions
    Check {
        /// Files or directories to check; `dir/...` is accepted
        #[arg(value_name = "PATH", default_value = ".")]
        paths: Vec<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Only report these categories (repeatable)
        #[arg(long = "category", value_name = "CATEGORY")]
        categories: Vec<Category>,
        /// Disable coloured output
        #[arg(long)]
        no_color: bool,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub async fn run() {
    let cli = Cli::parse();

    match execute(cli).await {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
async fn execute(cli: Cli) -> CliResult<ExitCode> {
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file);
    }

    match cli.command {
        Some(Command::Check {
            paths,
            format,
            categories,
            no_color,
        }) => {
            let config = LintConfig::new()
                .with_format(format)
                .with_categories(categories)
                .with_color(!no_color && std::io::stdout().is_terminal());
            commands::check_paths(&paths, &config).await
        }
        None => {
            let paths = if cli.paths.is_empty() {
                vec![PathBuf::from(".")]
            } else {
                cli.paths
            };
            let config = LintConfig::new().with_color(std::io::stdout().is_terminal());
            commands::check_paths(&paths, &config).await
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
