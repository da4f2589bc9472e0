//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites in the group filters and rules.

use crate::lexer::{Keyword, Token, TokenKind};

impl TokenKind {
    /// Return the keyword, if this is a keyword token.
    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == kw)
    }
}

impl Token {
    pub fn is_comment(&self) -> bool {
        self.kind == TokenKind::Comment
    }

    pub fn is_ident(&self) -> bool {
        self.kind == TokenKind::Ident
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.kind.is_keyword(kw)
    }

    /// Return `true` if this is the operator/punctuation spelled `op`.
    pub fn is_operator(&self, op: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == op
    }

    /// Change in bracket nesting caused by this token: `+1` for `(`, `[`, `{`; `-1` for their closers.
    pub fn nesting_delta(&self) -> isize {
        if self.kind != TokenKind::Operator {
            return 0;
        }
        match self.text.as_str() {
            "(" | "[" | "{" => 1,
            ")" | "]" | "}" => -1,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    #[test]
    fn test_nesting_delta() {
        let tokens = lex("( [ { } ] ) , x").unwrap();
        let deltas: Vec<isize> = tokens.iter().map(Token::nesting_delta).collect();
        assert_eq!(deltas, vec![1, 1, 1, -1, -1, -1, 0, 0]);
    }

    #[test]
    fn test_keyword_helpers() {
        let tokens = lex("type T").unwrap();
        assert!(tokens[0].is_keyword(Keyword::Type));
        assert_eq!(tokens[0].kind.keyword(), Some(Keyword::Type));
        assert!(!tokens[1].is_keyword(Keyword::Type));
        assert!(tokens[1].is_ident());
    }
}
