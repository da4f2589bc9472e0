//! Group filters: carve documentation candidates out of the token stream
//!
//! Each filter watches one nesting level, remembers the comment run it has just seen, and decides from the
//! following tokens whether that run documents a declaration it cares about. When it does, the filter forwards
//! the comments plus the declaration tokens the rules need, and closes the group with [`Item::Boundary`].
//!
//! | filter                     | group shape                              |
//! |----------------------------|------------------------------------------|
//! | [`DeclRootCommentFilter`]  | `comments.. package\|func\|var\|const name` |
//! | [`DeclTypeFilter`]         | `comments.. type name next` or `comments.. type ( <depth-1 tokens> )` |
//! | [`DeclIdentCommentFilter`] | `comments.. [type] ident next`           |
//!
//! The type chain runs [`DeclTypeFilter`] then [`DeclIdentCommentFilter`]; the root chain runs
//! [`DeclRootCommentFilter`] alone.

use std::mem;

use super::stream::{GroupFilter, Item};
use crate::{Keyword, Token};

// ============================================================================
// Nesting
// ============================================================================

/// Bracket depth as tokens stream past.
#[derive(Debug, Default)]
struct Nesting {
    depth: isize,
}

impl Nesting {
    /// Account for `tok` and return the depth it sits at. A bracket sits at the level outside the pair it forms.
    fn enter(&mut self, tok: &Token) -> isize {
        let delta = tok.nesting_delta();
        if delta < 0 {
            self.depth = (self.depth + delta).max(0);
            self.depth
        } else {
            let at = self.depth;
            self.depth += delta;
            at
        }
    }
}

fn emit_group(group: &mut Vec<Token>, out: &mut Vec<Item>) {
    out.extend(group.drain(..).map(Item::Token));
    out.push(Item::Boundary);
}

// ============================================================================
// Root declarations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RootState {
    Idle,
    /// Saw a documented declaration keyword; waiting for the declared name
    AwaitName(Keyword),
}

/// Groups comment runs documenting `package`, `func`, `var` and `const` declarations at file scope.
///
/// A method receiver is skipped so the group ends in the method name. Parenthesised `var (` / `const (` blocks
/// do not form a group.
#[derive(Debug)]
pub struct DeclRootCommentFilter {
    nesting: Nesting,
    pending: Vec<Token>,
    group: Vec<Token>,
    state: RootState,
}

impl DeclRootCommentFilter {
    pub fn new() -> Self {
        Self {
            nesting: Nesting::default(),
            pending: Vec::new(),
            group: Vec::new(),
            state: RootState::Idle,
        }
    }

    fn idle(&mut self, tok: Token, depth: isize) {
        if depth != 0 {
            self.pending.clear();
            return;
        }
        if tok.is_comment() {
            self.pending.push(tok);
            return;
        }
        match tok.kind.keyword() {
            Some(kw @ (Keyword::Package | Keyword::Func | Keyword::Var | Keyword::Const)) if !self.pending.is_empty() => {
                self.group = mem::take(&mut self.pending);
                self.group.push(tok);
                self.state = RootState::AwaitName(kw);
            }
            _ => self.pending.clear(),
        }
    }

    fn await_name(&mut self, keyword: Keyword, tok: Token, depth: isize, out: &mut Vec<Item>) {
        if tok.is_comment() {
            return;
        }
        if depth == 0 && tok.is_ident() {
            self.group.push(tok);
            emit_group(&mut self.group, out);
            self.state = RootState::Idle;
            return;
        }
        let in_receiver = keyword == Keyword::Func && (depth > 0 || tok.is_operator("(") || tok.is_operator(")"));
        if !in_receiver {
            self.group.clear();
            self.state = RootState::Idle;
        }
    }
}

impl Default for DeclRootCommentFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupFilter for DeclRootCommentFilter {
    fn accept(&mut self, item: Item, out: &mut Vec<Item>) {
        let Item::Token(tok) = item else {
            *self = Self::new();
            return;
        };
        let depth = self.nesting.enter(&tok);
        match self.state {
            RootState::Idle => self.idle(tok, depth),
            RootState::AwaitName(keyword) => self.await_name(keyword, tok, depth, out),
        }
    }
}

// ============================================================================
// Type declarations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypeState {
    Idle,
    /// After `type`: forward this many more header tokens
    Header(usize),
    /// Inside `type ( ... )`
    Block,
}

/// Passes the tokens of file-scope `type` declarations.
///
/// For a single spec that is the preceding comment run, `type`, the name and the token after it. For a
/// parenthesised block it is the comment run, `type`, `(` and every token directly inside the parentheses.
#[derive(Debug)]
pub struct DeclTypeFilter {
    nesting: Nesting,
    pending: Vec<Token>,
    state: TypeState,
}

impl DeclTypeFilter {
    pub fn new() -> Self {
        Self {
            nesting: Nesting::default(),
            pending: Vec::new(),
            state: TypeState::Idle,
        }
    }
}

impl Default for DeclTypeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupFilter for DeclTypeFilter {
    fn accept(&mut self, item: Item, out: &mut Vec<Item>) {
        let Item::Token(tok) = item else {
            *self = Self::new();
            return;
        };
        let depth = self.nesting.enter(&tok);
        match self.state {
            TypeState::Idle => {
                if depth != 0 {
                    self.pending.clear();
                } else if tok.is_comment() {
                    self.pending.push(tok);
                } else if tok.is_keyword(Keyword::Type) {
                    out.extend(self.pending.drain(..).map(Item::Token));
                    out.push(Item::Token(tok));
                    self.state = TypeState::Header(2);
                } else {
                    self.pending.clear();
                }
            }
            TypeState::Header(remaining) => {
                if tok.is_comment() {
                    return;
                }
                if remaining == 2 && tok.is_operator("(") {
                    out.push(Item::Token(tok));
                    self.state = TypeState::Block;
                    return;
                }
                out.push(Item::Token(tok));
                if remaining <= 1 {
                    out.push(Item::Boundary);
                    self.state = TypeState::Idle;
                } else {
                    self.state = TypeState::Header(remaining - 1);
                }
            }
            TypeState::Block => {
                if depth == 0 {
                    out.push(Item::Boundary);
                    self.state = TypeState::Idle;
                } else if depth == 1 {
                    out.push(Item::Token(tok));
                }
            }
        }
    }

    fn finish(&mut self, out: &mut Vec<Item>) {
        if self.state != TypeState::Idle {
            out.push(Item::Boundary);
            self.state = TypeState::Idle;
        }
    }
}

// ============================================================================
// Identifier-led specs
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdentState {
    Collect,
    AfterType,
    AwaitNext,
}

/// Groups a comment run that is directly followed by an identifier (optionally preceded by `type`), keeping the
/// identifier and the one token after it.
#[derive(Debug)]
pub struct DeclIdentCommentFilter {
    pending: Vec<Token>,
    group: Vec<Token>,
    state: IdentState,
}

impl DeclIdentCommentFilter {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            group: Vec::new(),
            state: IdentState::Collect,
        }
    }

    fn collect(&mut self, tok: Token) {
        if tok.is_comment() {
            self.pending.push(tok);
            return;
        }
        if self.pending.is_empty() {
            return;
        }
        let next_state = if tok.is_keyword(Keyword::Type) {
            IdentState::AfterType
        } else if tok.is_ident() {
            IdentState::AwaitNext
        } else {
            self.pending.clear();
            return;
        };
        self.group = mem::take(&mut self.pending);
        self.group.push(tok);
        self.state = next_state;
    }
}

impl Default for DeclIdentCommentFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupFilter for DeclIdentCommentFilter {
    fn accept(&mut self, item: Item, out: &mut Vec<Item>) {
        let Item::Token(tok) = item else {
            *self = Self::new();
            return;
        };
        match self.state {
            IdentState::Collect => self.collect(tok),
            IdentState::AfterType => {
                if tok.is_ident() {
                    self.group.push(tok);
                    self.state = IdentState::AwaitNext;
                } else {
                    self.group.clear();
                    self.state = IdentState::Collect;
                    self.collect(tok);
                }
            }
            IdentState::AwaitNext => {
                self.group.push(tok);
                emit_group(&mut self.group, out);
                self.state = IdentState::Collect;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    /// Run a filter synchronously and return each closed group as token texts.
    fn groups<F: GroupFilter>(mut filter: F, items: Vec<Item>) -> Vec<Vec<String>> {
        let mut out = Vec::new();
        for item in items {
            filter.accept(item, &mut out);
        }
        filter.finish(&mut out);

        let mut groups = Vec::new();
        let mut current = Vec::new();
        for item in out {
            match item {
                Item::Token(tok) => current.push(tok.text),
                Item::Boundary => groups.push(mem::take(&mut current)),
            }
        }
        groups
    }

    fn items(source: &str) -> Vec<Item> {
        lex(source).unwrap().into_iter().map(Item::Token).collect()
    }

    fn type_chain(source: &str) -> Vec<Vec<String>> {
        let mut stage_one = Vec::new();
        let mut filter = DeclTypeFilter::new();
        for item in items(source) {
            filter.accept(item, &mut stage_one);
        }
        filter.finish(&mut stage_one);
        groups(DeclIdentCommentFilter::new(), stage_one)
    }

    #[test]
    fn test_root_package_func_var_const() {
        let source = "// Package p.\npackage p\n\n// F does.\nfunc F() {\n\t// inner\n\tx := 1\n}\n\n\
                      // V is.\nvar V = 1\n\n// C is.\nconst C = 2\n";
        assert_eq!(
            groups(DeclRootCommentFilter::new(), items(source)),
            vec![
                vec!["// Package p.", "package", "p"],
                vec!["// F does.", "func", "F"],
                vec!["// V is.", "var", "V"],
                vec!["// C is.", "const", "C"],
            ]
        );
    }

    #[test]
    fn test_root_skips_method_receiver() {
        let source = "// Len reports.\nfunc (l *List[T]) Len() int { return 0 }\n";
        assert_eq!(
            groups(DeclRootCommentFilter::new(), items(source)),
            vec![vec!["// Len reports.", "func", "Len"]]
        );
    }

    #[test]
    fn test_root_ignores_grouped_var_and_types() {
        let source = "// Vars.\nvar (\n\t// A is.\n\tA = 1\n)\n\n// T is.\ntype T int\n\nimport \"fmt\"\n";
        assert!(groups(DeclRootCommentFilter::new(), items(source)).is_empty());
    }

    #[test]
    fn test_root_needs_a_comment() {
        assert!(groups(DeclRootCommentFilter::new(), items("func F() {}\nvar x = 1\n")).is_empty());
    }

    #[test]
    fn test_root_keeps_detached_comments_in_the_run() {
        let source = "// old note\n\n// F does.\nfunc F() {}\n";
        assert_eq!(
            groups(DeclRootCommentFilter::new(), items(source)),
            vec![vec!["// old note", "// F does.", "func", "F"]]
        );
    }

    #[test]
    fn test_root_boundary_resets_state() {
        let mut input = items("// F does.\nfunc");
        input.push(Item::Boundary);
        input.extend(items("G()"));
        assert!(groups(DeclRootCommentFilter::new(), input).is_empty());
    }

    #[test]
    fn test_type_chain_single_spec() {
        let source = "// A Parser reads input.\ntype Parser struct{}\n\n// List holds.\ntype List[T any] []T\n";
        assert_eq!(
            type_chain(source),
            vec![
                vec!["// A Parser reads input.", "type", "Parser", "struct"],
                vec!["// List holds.", "type", "List", "["],
            ]
        );
    }

    #[test]
    fn test_type_chain_block() {
        let source = "// Types.\ntype (\n\t// Foo is.\n\tFoo struct {\n\t\t// x field\n\t\tx int\n\t}\n\n\
                      \t// Bar is.\n\tBar = Foo\n)\n";
        assert_eq!(
            type_chain(source),
            vec![vec!["// Foo is.", "Foo", "struct"], vec!["// Bar is.", "Bar", "="]]
        );
    }

    #[test]
    fn test_type_filter_ignores_other_declarations() {
        let source = "// F does.\nfunc F() {\n\ttype local int\n}\n";
        assert!(type_chain(source).is_empty());
    }

    #[test]
    fn test_type_filter_closes_open_group_at_end() {
        let mut out = Vec::new();
        let mut filter = DeclTypeFilter::new();
        for item in items("// T.\ntype T") {
            filter.accept(item, &mut out);
        }
        filter.finish(&mut out);
        assert_eq!(out.last(), Some(&Item::Boundary));
    }

    #[test]
    fn test_ident_filter_needs_trailing_token() {
        assert!(groups(DeclIdentCommentFilter::new(), items("// Foo.\nFoo")).is_empty());
    }
}
