//! Lexer errors.
//!
//! Errors carry a labelled span so callers holding the source text can render them through `miette`.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::lexer::Position;

/// What went wrong while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("comment not terminated")]
    UnterminatedComment,

    #[error("string literal not terminated")]
    UnterminatedString,

    #[error("raw string literal not terminated")]
    UnterminatedRawString,

    #[error("rune literal not terminated")]
    UnterminatedChar,

    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),
}

/// A lexing failure at a known source position.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic(code(godoc::lex))]
pub struct LexError {
    pub kind: LexErrorKind,
    pub pos: Position,
    #[label("here")]
    pub span: SourceSpan,
}

impl LexError {
    /// Build an error covering `len` bytes starting at `pos`.
    pub fn new(kind: LexErrorKind, pos: Position, len: usize) -> Self {
        Self {
            kind,
            pos,
            span: (pos.offset, len.max(1)).into(),
        }
    }
}
