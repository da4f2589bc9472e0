#![forbid(unsafe_code)]
//! godoc-lint: Go doc comment convention checker
//!
//! Reads Go source, finds the comment block that documents each file-scope declaration, and reports blocks that
//! do not lead with the declared name. Lexing lives in the `godoc_syntax` crate; this crate holds the checking
//! pipeline, diagnostics, and the command line.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Malformed input**: A declaration the rules cannot evaluate is skipped, never a panic.

pub mod check;
pub mod cli;
pub mod config;
pub mod diagnostics;

pub use godoc_syntax::{Keyword, LexError, LexErrorKind, Position, Token, TokenKind, lexer};

pub use check::{check_source, check_tokens, spawn_check};
pub use config::{LintConfig, OutputFormat};
pub use diagnostics::{Category, CheckedLexeme, CheckedWord};
