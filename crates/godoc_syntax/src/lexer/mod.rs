//! Lexer for Go source text
//!
//! Handles tokenization including:
//! - Line (`//`) and general (`/* */`) comments, kept as tokens with their markers
//! - Identifiers (Unicode letters and digits) and the 25 keywords
//! - Numeric, rune, interpreted-string and raw-string literals
//! - Operators and punctuation (longest match)
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Keyword, Token, Position)
//! - `literals` - String/rune/number scanning

mod literals;
pub mod tokens;

pub use tokens::{Keyword, Position, Token, TokenKind};

use crate::errors::{LexError, LexErrorKind};

// ============================================================================
// LEXER STATE
// ============================================================================

/// Operators and punctuation, longest spellings first so a prefix scan finds the maximal munch.
const OPERATORS: &[&str] = &[
    "<<=", ">>=", "&^=", "...", //
    "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", "&^", "&&", "||", "<-", "++", "--", "==", "!=",
    "<=", ">=", ":=", //
    "+", "-", "*", "/", "%", "&", "|", "^", "<", ">", "=", "!", "(", ")", "[", "]", "{", "}", ",", ";", ".", ":",
    "~",
];

const BOM: char = '\u{feff}';

/// Lexer for Go source code.
///
/// Converts source text into a flat token stream. Whitespace and newlines produce no tokens; line structure is
/// recoverable from each token's [`Position`].
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: usize,
    line_start: usize,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    ///
    /// A leading byte order mark is skipped; columns on the first line count from the character after it.
    pub fn new(source: &'a str) -> Self {
        let mut lexer = Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            line_start: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        };
        if source.starts_with(BOM) {
            lexer.advance();
            lexer.line_start = lexer.current_pos;
        }
        lexer
    }

    /// Tokenize the entire source code.
    ///
    /// Returns every token on success, or every error found on failure. Scanning continues past errors so one
    /// run reports all of them.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<LexError>> {
        while !self.is_at_end() {
            self.scan_token();
        }

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next();
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.line_start = self.current_pos;
        }
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Position of the next unconsumed character.
    fn position(&self) -> Position {
        Position::new(self.line, self.current_pos - self.line_start + 1, self.current_pos)
    }

    fn add_token(&mut self, kind: TokenKind, start: Position) {
        let text = &self.source[start.offset..self.current_pos];
        self.tokens.push(Token::new(kind, text, start));
    }

    fn error(&mut self, kind: LexErrorKind, start: Position) {
        let len = self.current_pos.saturating_sub(start.offset);
        self.errors.push(LexError::new(kind, start, len));
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }

        let start = self.position();

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            '/' if self.peek() == Some('/') => self.scan_line_comment(start),
            '/' if self.peek() == Some('*') => self.scan_general_comment(start),
            '"' => self.scan_string(start),
            '`' => self.scan_raw_string(start),
            '\'' => self.scan_char(start),
            '0'..='9' => self.scan_number(start),
            '.' if self.peek().is_some_and(|c| c.is_ascii_digit()) => self.scan_number(start),
            _ if is_ident_start(c) => self.scan_identifier(start),
            _ => self.scan_operator(start, c),
        }
    }

    // ========================================================================
    // Comments
    // ========================================================================

    fn scan_line_comment(&mut self, start: Position) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
        let text = self.source[start.offset..self.current_pos].trim_end_matches('\r');
        self.tokens.push(Token::new(TokenKind::Comment, text, start));
    }

    fn scan_general_comment(&mut self, start: Position) {
        self.advance(); // '*'
        loop {
            match self.advance() {
                Some('*') if self.match_char('/') => break,
                Some(_) => {}
                None => {
                    self.error(LexErrorKind::UnterminatedComment, start);
                    return;
                }
            }
        }
        self.add_token(TokenKind::Comment, start);
    }

    // ========================================================================
    // Identifiers and operators
    // ========================================================================

    fn scan_identifier(&mut self, start: Position) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let word = &self.source[start.offset..self.current_pos];
        let kind = Keyword::lookup(word).map(TokenKind::Keyword).unwrap_or(TokenKind::Ident);
        self.add_token(kind, start);
    }

    fn scan_operator(&mut self, start: Position, first: char) {
        let rest = &self.source[start.offset..];
        let Some(op) = OPERATORS.iter().find(|op| rest.starts_with(**op)) else {
            self.error(LexErrorKind::UnexpectedCharacter(first), start);
            return;
        };
        // Operators are ASCII, so remaining length in bytes equals remaining chars.
        for _ in 1..op.len() {
            self.advance();
        }
        self.add_token(TokenKind::Operator, start);
    }
}

// ============================================================================
// Helper functions
// ============================================================================

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<LexError>> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
