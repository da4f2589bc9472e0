//! Token types for the Go lexer.
//!
//! A token keeps its literal spelling alongside its kind: the documentation rules compare comment words against
//! identifier text, so every token carries `text` rather than a decoded value.

use std::fmt;

// ============================================================================
// POSITIONS
// ============================================================================

/// Source position of a token's first byte.
///
/// ## Notes
/// - `line` and `column` are 1-based; `column` counts bytes, as `go/token` does.
/// - `offset` is the 0-based byte offset into the source, used when rendering source context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.line, self.column, self.offset).cmp(&(other.line, other.column, other.offset))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

// ============================================================================
// KEYWORDS
// ============================================================================

/// The 25 reserved words of Go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Break,
    Case,
    Chan,
    Const,
    Continue,
    Default,
    Defer,
    Else,
    Fallthrough,
    For,
    Func,
    Go,
    Goto,
    If,
    Import,
    Interface,
    Map,
    Package,
    Range,
    Return,
    Select,
    Struct,
    Switch,
    Type,
    Var,
}

impl Keyword {
    /// Resolve a spelling to a keyword. Lookup is case-sensitive.
    pub fn lookup(word: &str) -> Option<Keyword> {
        let kw = match word {
            "break" => Keyword::Break,
            "case" => Keyword::Case,
            "chan" => Keyword::Chan,
            "const" => Keyword::Const,
            "continue" => Keyword::Continue,
            "default" => Keyword::Default,
            "defer" => Keyword::Defer,
            "else" => Keyword::Else,
            "fallthrough" => Keyword::Fallthrough,
            "for" => Keyword::For,
            "func" => Keyword::Func,
            "go" => Keyword::Go,
            "goto" => Keyword::Goto,
            "if" => Keyword::If,
            "import" => Keyword::Import,
            "interface" => Keyword::Interface,
            "map" => Keyword::Map,
            "package" => Keyword::Package,
            "range" => Keyword::Range,
            "return" => Keyword::Return,
            "select" => Keyword::Select,
            "struct" => Keyword::Struct,
            "switch" => Keyword::Switch,
            "type" => Keyword::Type,
            "var" => Keyword::Var,
            _ => return None,
        };
        Some(kw)
    }

    /// Canonical spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Break => "break",
            Keyword::Case => "case",
            Keyword::Chan => "chan",
            Keyword::Const => "const",
            Keyword::Continue => "continue",
            Keyword::Default => "default",
            Keyword::Defer => "defer",
            Keyword::Else => "else",
            Keyword::Fallthrough => "fallthrough",
            Keyword::For => "for",
            Keyword::Func => "func",
            Keyword::Go => "go",
            Keyword::Goto => "goto",
            Keyword::If => "if",
            Keyword::Import => "import",
            Keyword::Interface => "interface",
            Keyword::Map => "map",
            Keyword::Package => "package",
            Keyword::Range => "range",
            Keyword::Return => "return",
            Keyword::Select => "select",
            Keyword::Struct => "struct",
            Keyword::Switch => "switch",
            Keyword::Type => "type",
            Keyword::Var => "var",
        }
    }
}

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `// ...` or `/* ... */`, markers included in the text
    Comment,
    Ident,
    Keyword(Keyword),

    // ========== Literals ==========
    Int,
    Float,
    Imag,
    Char,
    String,

    /// Operators and punctuation; the spelling lives in `Token::text`
    Operator,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Comment => write!(f, "COMMENT"),
            TokenKind::Ident => write!(f, "IDENT"),
            TokenKind::Keyword(kw) => write!(f, "{}", kw.as_str().to_ascii_uppercase()),
            TokenKind::Int => write!(f, "INT"),
            TokenKind::Float => write!(f, "FLOAT"),
            TokenKind::Imag => write!(f, "IMAG"),
            TokenKind::Char => write!(f, "CHAR"),
            TokenKind::String => write!(f, "STRING"),
            TokenKind::Operator => write!(f, "OP"),
        }
    }
}

/// A lexeme: kind, literal spelling and source position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub pos: Position,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
        }
    }
}
