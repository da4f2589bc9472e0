//! Diagnostics and reporting for godoc-lint
//!
//! A diagnostic ([`CheckedLexeme`]) is created only by the rule engine and never modified afterwards. This module
//! also owns the two presentations of diagnostics: a compiler-style text rendering with source context, and JSON.

use std::fmt;
use std::str::FromStr;

use serde_json::{Value, json};
use thiserror::Error;

use crate::Token;

// ============================================================================
// Diagnostic records
// ============================================================================

/// Classification of a violation by the visibility of the documented name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// The subject starts with an upper-case letter (or is a package clause).
    GodocExport,
    /// The subject starts with a lower-case letter.
    GodocLocal,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::GodocExport, Category::GodocLocal];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::GodocExport => "godoc-export",
            Category::GodocLocal => "godoc-local",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}' (expected godoc-export or godoc-local)")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// One `(found, expected)` word pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedWord {
    /// The word the comment has (empty if the comment ran out of words)
    pub found: String,
    /// The word or phrase the comment should have
    pub suggest: String,
}

impl CheckedWord {
    pub fn new(found: impl Into<String>, suggest: impl Into<String>) -> Self {
        Self {
            found: found.into(),
            suggest: suggest.into(),
        }
    }
}

/// A reported doc comment violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedLexeme {
    /// First comment token of the offending documentation block
    pub anchor: Token,
    pub category: Category,
    pub words: Vec<CheckedWord>,
}

impl CheckedLexeme {
    pub fn new(anchor: Token, category: Category, words: Vec<CheckedWord>) -> Self {
        Self {
            anchor,
            category,
            words,
        }
    }

    /// One-line summary, e.g. `comment should start with "Parse"`.
    pub fn message(&self) -> String {
        match self.words.first() {
            Some(word) => format!("comment should start with \"{}\"", word.suggest),
            None => "comment does not name its declaration".to_string(),
        }
    }
}

// ============================================================================
// Text rendering
// ============================================================================

/// Render a diagnostic with source context, compiler style.
///
/// ```text
/// lint[godoc-export]: comment should start with "Parse"
///  --> parse.go:3:1
///   |
/// 3 | // Reads input.
///   | ^^^^^^^^^^^^^^^
///   = help: replace "Reads" with "Parse"
/// ```
pub fn render(file_name: &str, source: &str, diag: &CheckedLexeme, colored: bool) -> String {
    let (yellow, cyan, bold, reset) = if colored {
        ("\x1b[33m", "\x1b[36m", "\x1b[1m", "\x1b[0m")
    } else {
        ("", "", "", "")
    };

    let pos = diag.anchor.pos;
    let line_text = get_line_text(source, pos.offset);
    let gutter = " ".repeat(pos.line.to_string().len());

    let mut out = String::new();
    out.push_str(&format!(
        "{bold}{yellow}lint[{category}]{reset}{bold}: {message}{reset}\n",
        category = diag.category,
        message = diag.message(),
    ));
    out.push_str(&format!(
        "{gutter}{cyan}-->{reset} {file_name}:{line}:{col}\n",
        line = pos.line,
        col = pos.column,
    ));
    out.push_str(&format!("{gutter} {cyan}|{reset}\n"));
    out.push_str(&format!("{cyan}{line} |{reset} {line_text}\n", line = pos.line));

    // Keep tabs in the padding so the caret lines up with indented comments.
    let pad: String = line_text
        .get(..pos.column.saturating_sub(1))
        .unwrap_or("")
        .chars()
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();
    let width = diag.anchor.text.lines().next().map(|l| l.chars().count()).unwrap_or(1).max(1);
    out.push_str(&format!(
        "{gutter} {cyan}|{reset} {pad}{yellow}{carets}{reset}\n",
        carets = "^".repeat(width),
    ));

    for word in &diag.words {
        let help = if word.found.is_empty() {
            format!("add \"{}\"", word.suggest)
        } else {
            format!("replace \"{}\" with \"{}\"", word.found, word.suggest)
        };
        out.push_str(&format!("{gutter} {cyan}= help:{reset} {help}\n"));
    }

    out
}

/// Compact single-line form: `file:line:col: lint[category]: message`.
pub fn render_short(file_name: &str, diag: &CheckedLexeme) -> String {
    format!(
        "{file_name}:{pos}: lint[{category}]: {message}",
        pos = diag.anchor.pos,
        category = diag.category,
        message = diag.message(),
    )
}

/// Get the text of the line containing a byte offset (without the newline).
fn get_line_text(source: &str, offset: usize) -> &str {
    let offset = offset.min(source.len());
    let line_start = source[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());
    source[line_start..line_end].trim_end_matches('\r')
}

// ============================================================================
// JSON rendering
// ============================================================================

/// JSON form of one file's diagnostics.
pub fn to_json(file_name: &str, diags: &[CheckedLexeme]) -> Value {
    Value::Array(
        diags
            .iter()
            .map(|d| {
                json!({
                    "file": file_name,
                    "line": d.anchor.pos.line,
                    "column": d.anchor.pos.column,
                    "category": d.category.as_str(),
                    "words": d
                        .words
                        .iter()
                        .map(|w| json!({ "found": w.found, "suggest": w.suggest }))
                        .collect::<Vec<_>>(),
                })
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, TokenKind};

    fn diag(text: &str, pos: Position, words: Vec<CheckedWord>) -> CheckedLexeme {
        CheckedLexeme::new(Token::new(TokenKind::Comment, text, pos), Category::GodocExport, words)
    }

    #[test]
    fn test_category_round_trip_through_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert_eq!(
            "godoc".parse::<Category>(),
            Err(UnknownCategory("godoc".to_string()))
        );
    }

    #[test]
    fn test_message_uses_first_suggestion() {
        let d = diag(
            "// Widgets helper package.",
            Position::new(1, 1, 0),
            vec![CheckedWord::new("Widgets", "// Package widgets")],
        );
        assert_eq!(d.message(), "comment should start with \"// Package widgets\"");
    }

    #[test]
    fn test_render_plain() {
        let source = "package p\n\n// Reads input.\nfunc Parse() {}\n";
        let d = diag(
            "// Reads input.",
            Position::new(3, 1, 11),
            vec![CheckedWord::new("Reads", "Parse")],
        );
        insta::assert_snapshot!(render("parse.go", source, &d, false).trim_end(), @r#"
        lint[godoc-export]: comment should start with "Parse"
         --> parse.go:3:1
          |
        3 | // Reads input.
          | ^^^^^^^^^^^^^^^
          = help: replace "Reads" with "Parse"
        "#);
    }

    #[test]
    fn test_render_keeps_tab_indent() {
        let source = "type (\n\t// foo.\n\tFoo int\n)\n";
        let d = diag("// foo.", Position::new(2, 2, 8), vec![CheckedWord::new("foo.", "Foo")]);
        let rendered = render("t.go", source, &d, false);
        assert!(rendered.contains("2 | \t// foo.\n"));
        assert!(rendered.contains("  | \t^^^^^^^\n"));
    }

    #[test]
    fn test_render_missing_word() {
        let source = "// Package\npackage widgets\n";
        let d = diag("// Package", Position::new(1, 1, 0), vec![CheckedWord::new("", "widgets")]);
        assert!(render("w.go", source, &d, false).contains("= help: add \"widgets\""));
    }

    #[test]
    fn test_render_short() {
        let d = diag("// x", Position::new(7, 3, 40), vec![CheckedWord::new("x", "Y")]);
        assert_eq!(
            render_short("a.go", &d),
            "a.go:7:3: lint[godoc-export]: comment should start with \"Y\""
        );
    }

    #[test]
    fn test_json_shape() {
        let d = diag(
            "// Reads input.",
            Position::new(3, 1, 11),
            vec![CheckedWord::new("Reads", "Parse")],
        );
        let value = to_json("parse.go", &[d]);
        assert_eq!(
            value,
            json!([{
                "file": "parse.go",
                "line": 3,
                "column": 1,
                "category": "godoc-export",
                "words": [{ "found": "Reads", "suggest": "Parse" }],
            }])
        );
    }
}
