//! Literal scanning for the Go lexer
//!
//! Literals are consumed, not decoded: the checker only needs their extent so that quote characters and digits
//! inside them never leak into the token stream as operators or comments.

use super::Lexer;
use super::tokens::{Position, TokenKind};
use crate::errors::LexErrorKind;

impl<'a> Lexer<'a> {
    /// Scan an interpreted string. Called after the opening `"`.
    pub(super) fn scan_string(&mut self, start: Position) {
        if self.scan_quoted('"') {
            self.add_token(TokenKind::String, start);
        } else {
            self.error(LexErrorKind::UnterminatedString, start);
        }
    }

    /// Scan a rune literal. Called after the opening `'`.
    pub(super) fn scan_char(&mut self, start: Position) {
        if self.scan_quoted('\'') {
            self.add_token(TokenKind::Char, start);
        } else {
            self.error(LexErrorKind::UnterminatedChar, start);
        }
    }

    /// Scan a raw string. Called after the opening backquote; raw strings may span lines.
    pub(super) fn scan_raw_string(&mut self, start: Position) {
        loop {
            match self.advance() {
                Some('`') => break,
                Some(_) => {}
                None => {
                    self.error(LexErrorKind::UnterminatedRawString, start);
                    return;
                }
            }
        }
        self.add_token(TokenKind::String, start);
    }

    /// Consume up to and including `quote`, honouring backslash escapes.
    ///
    /// Returns `false` when a newline or end of input is reached first; the newline is left unconsumed.
    fn scan_quoted(&mut self, quote: char) -> bool {
        while let Some(c) = self.peek() {
            match c {
                '\n' => return false,
                '\\' => {
                    self.advance();
                    if self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                }
                _ => {
                    self.advance();
                    if c == quote {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Scan a numeric literal. Called after its first character (a digit, or `.` followed by a digit).
    ///
    /// Consumption is permissive: digits, letters, `_` and `.` are taken greedily, plus a sign directly after an
    /// exponent marker (`e`/`E` for decimal, `p`/`P` for hexadecimal).
    pub(super) fn scan_number(&mut self, start: Position) {
        let is_hex = {
            let head = &self.source[start.offset..];
            head.starts_with("0x") || head.starts_with("0X")
        };
        let is_exponent = |c: char| if is_hex { c == 'p' || c == 'P' } else { c == 'e' || c == 'E' };

        let mut prev = self.source[start.offset..self.current_pos].chars().last().unwrap_or('0');
        let mut is_float = prev == '.';

        while let Some(c) = self.peek() {
            let sign_after_exponent = (c == '+' || c == '-') && is_exponent(prev);
            if c.is_ascii_alphanumeric() || c == '_' || sign_after_exponent {
                if is_exponent(c) {
                    is_float = true;
                }
            } else if c == '.' && self.peek_next() != Some('.') {
                is_float = true;
            } else {
                break;
            }
            self.advance();
            prev = c;
        }

        let kind = if prev == 'i' {
            TokenKind::Imag
        } else if is_float {
            TokenKind::Float
        } else {
            TokenKind::Int
        };
        self.add_token(kind, start);
    }
}
