//! Go syntax frontend for godoc-lint: token model and lexer.
//!
//! This crate is dependency-light and runtime-free. It knows nothing about documentation rules; it only turns Go
//! source text into the positioned lexeme stream the checker consumes.
//!
//! ## Notes
//! - The lexer does not insert Go's automatic semicolons. Declaration shape is recovered from token order and
//!   positions instead.
//! - Columns are byte-based and 1-based, matching `go/token`.
//!
//! ## Examples
//! ```rust,no_run
//! use godoc_syntax::lexer;
//!
//! let tokens = lexer::lex("package widgets\n").unwrap();
//! assert_eq!(tokens.len(), 2);
//! ```

pub mod errors;
pub mod lexer;
pub mod token_helpers;

pub use errors::{LexError, LexErrorKind};
pub use lexer::{Keyword, Position, Token, TokenKind, lex};
