//! Doc comment rules
//!
//! Every group passes an ordered chain of gates:
//!
//! ```text
//! non-empty → aligned → adjacent → shaped → not-swagger → package | named
//! ```
//!
//! Failing any gate silently skips the group; this checker is advisory and a group it cannot evaluate is simply
//! not reported. Only the final branch produces a [`CheckedLexeme`].

use tokio::sync::mpsc::{Receiver, Sender};

use super::block::{doc_block, first_non_comment};
use super::stream::Item;
use crate::diagnostics::{Category, CheckedLexeme, CheckedWord};
use crate::{Keyword, Token, TokenKind};

/// What a group declares, as far as the rules care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeclShape<'a> {
    /// `package <name>`
    Package { name: &'a Token },
    /// Anything else; `subject` is the name the comment should lead with
    Named { subject: &'a Token },
}

impl<'a> DeclShape<'a> {
    /// Classify a group by its last two tokens.
    ///
    /// Root groups end in `keyword name`, so the name is last. Type groups carry one token after the name
    /// (`Parser struct`, `List [`), so when the next-to-last token is an identifier it is the subject.
    fn of(group: &'a [Token]) -> Option<Self> {
        let [.., penultimate, last] = group else {
            return None;
        };
        let shape = match penultimate.kind {
            TokenKind::Keyword(Keyword::Package) => DeclShape::Package { name: last },
            TokenKind::Ident => DeclShape::Named { subject: penultimate },
            TokenKind::Comment
            | TokenKind::Keyword(_)
            | TokenKind::Int
            | TokenKind::Float
            | TokenKind::Imag
            | TokenKind::Char
            | TokenKind::String
            | TokenKind::Operator => DeclShape::Named { subject: last },
        };
        Some(shape)
    }
}

fn skip(gate: &'static str, at: Option<&Token>) -> Option<CheckedLexeme> {
    if let Some(tok) = at {
        tracing::trace!(gate, line = tok.pos.line, column = tok.pos.column, "comment group skipped");
    } else {
        tracing::trace!(gate, "comment group skipped");
    }
    None
}

/// Validate one group; `None` means conforming or not evaluable.
pub fn check_group(group: &[Token]) -> Option<CheckedLexeme> {
    let block = doc_block(group);
    let (Some(first), Some(last)) = (block.first(), block.last()) else {
        return skip("non-empty", group.first());
    };
    let Some(decl) = first_non_comment(group) else {
        return skip("declaration", Some(first));
    };

    // A comment that does not line up with the code is a free-floating remark.
    if decl.pos.column != first.pos.column {
        return skip("aligned", Some(first));
    }
    if decl.pos.line != last.pos.line + 1 {
        return skip("adjacent", Some(first));
    }

    let fields: Vec<&str> = first.text.split_whitespace().collect();
    let [_, lead, rest @ ..] = fields.as_slice() else {
        return skip("shaped", Some(first));
    };
    let second = rest.first().copied();

    // go-swagger annotations, not prose
    if lead.starts_with("swagger") {
        return skip("not-swagger", Some(first));
    }

    match DeclShape::of(group)? {
        DeclShape::Package { name } => check_package(first, lead, second, name),
        DeclShape::Named { subject } => check_named(first, lead, second, subject),
    }
}

/// `// Package <name> ...` is required; command packages (`main`) are exempt.
fn check_package(anchor: &Token, lead: &str, second: Option<&str>, name: &Token) -> Option<CheckedLexeme> {
    if name.text == "main" {
        return skip("main", Some(anchor));
    }

    let has_pkg = lead == "Package";
    let has_name = second == Some(name.text.as_str());
    let word = match (has_pkg, has_name) {
        (true, true) => return None,
        (false, false) => CheckedWord::new(lead, format!("// Package {}", name.text)),
        (false, true) => CheckedWord::new(lead, "Package"),
        (true, false) => CheckedWord::new(second.unwrap_or_default(), name.text.as_str()),
    };
    Some(CheckedLexeme::new(anchor.clone(), Category::GodocExport, vec![word]))
}

/// The comment must lead with the subject, or with `A`/`An` followed by it.
fn check_named(anchor: &Token, lead: &str, second: Option<&str>, subject: &Token) -> Option<CheckedLexeme> {
    let name = subject.text.as_str();
    if (lead == "A" || lead == "An") && second == Some(name) {
        return None;
    }
    if lead == name {
        return None;
    }

    let category = if is_exported(name) {
        Category::GodocExport
    } else {
        Category::GodocLocal
    };
    Some(CheckedLexeme::new(anchor.clone(), category, vec![CheckedWord::new(lead, name)]))
}

/// The first character is unchanged by single-character upper-casing.
///
/// Characters whose upper case expands to several (`ß` to `SS`) have no single-character mapping and count as
/// unchanged.
fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(|c| {
        let mut upper = c.to_uppercase();
        upper.len() > 1 || upper.next() == Some(c)
    })
}

/// Validator worker: read groups from `rx` and send each violation to `out`.
///
/// Groups end at [`Item::Boundary`]; tokens left over when `rx` closes never formed a complete group and are
/// dropped. Returns when `rx` closes or `out` has no receiver.
pub async fn check_go_doc(mut rx: Receiver<Item>, out: Sender<CheckedLexeme>, chain: &'static str) {
    let mut group: Vec<Token> = Vec::new();
    let mut groups = 0usize;
    let mut reported = 0usize;

    while let Some(item) = rx.recv().await {
        match item {
            Item::Token(tok) => group.push(tok),
            Item::Boundary => {
                groups += 1;
                let diag = check_group(&group);
                group.clear();
                if let Some(diag) = diag {
                    reported += 1;
                    if out.send(diag).await.is_err() {
                        tracing::debug!(chain, "diagnostic receiver dropped");
                        break;
                    }
                }
            }
        }
    }

    tracing::debug!(chain, groups, reported, "validator finished");
}
