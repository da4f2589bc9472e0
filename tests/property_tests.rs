//! Property-based tests for godoc-lint
//!
//! These tests use proptest to check the rule gates across many generated declarations, catching shapes that
//! hand-written fixtures might miss.

use godoc_lint::diagnostics::{Category, CheckedLexeme};
use godoc_lint::{Keyword, LintConfig, check_source};
use proptest::prelude::*;

fn check(source: &str) -> Vec<CheckedLexeme> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    runtime
        .block_on(check_source(source, &LintConfig::default()))
        .expect("generated source should lex")
}

/// A Go identifier that is not a keyword.
fn ident() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,8}".prop_filter("keywords are not identifiers", |s| Keyword::lookup(s).is_none())
}

/// A lower-case prose word that cannot be mistaken for a swagger annotation.
fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}".prop_filter("swagger prefix", |s| !s.starts_with("swagger"))
}

/// One file-scope declaration of `name`.
fn decl(name: String) -> impl Strategy<Value = String> {
    prop_oneof![
        Just(format!("func {name}() {{}}")),
        Just(format!("func (r *recv) {name}(x int) error {{ return nil }}")),
        Just(format!("var {name} int")),
        Just(format!("const {name} = 1")),
        Just(format!("type {name} struct{{}}")),
        Just(format!("type {name} = int")),
    ]
}

fn named_decl() -> impl Strategy<Value = (String, String)> {
    ident().prop_flat_map(|name| (Just(name.clone()), decl(name)))
}

// =============================================================================
// Gate properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: a comment that leads with the declared name never produces a diagnostic
    #[test]
    fn conforming_comment_is_clean((name, decl) in named_decl(), rest in word()) {
        let source = format!("package p\n\n// {name} {rest}.\n{decl}\n");
        prop_assert!(check(&source).is_empty(), "{source}");
    }

    /// Property: a comment indented differently from its declaration is ignored
    #[test]
    fn misaligned_comment_is_ignored((_name, decl) in named_decl(), lead in word(), indent in 1usize..4) {
        let source = format!("package p\n\n{}// {lead} text.\n{decl}\n", " ".repeat(indent));
        prop_assert!(check(&source).is_empty(), "{source}");
    }

    /// Property: a blank line between comment and declaration detaches the comment
    #[test]
    fn detached_comment_is_ignored((_name, decl) in named_decl(), lead in word()) {
        let source = format!("package p\n\n// {lead} text.\n\n{decl}\n");
        prop_assert!(check(&source).is_empty(), "{source}");
    }

    /// Property: swagger annotations are never checked
    #[test]
    fn swagger_annotation_is_ignored((_name, decl) in named_decl(), tag in word()) {
        let source = format!("package p\n\n// swagger:{tag} x\n{decl}\n");
        prop_assert!(check(&source).is_empty(), "{source}");
    }

    /// Property: a wrong lead word yields exactly one diagnostic naming the declaration
    #[test]
    fn wrong_lead_is_reported((name, decl) in named_decl(), lead in word()) {
        prop_assume!(lead != name);
        let source = format!("package p\n\n// {lead} text.\n{decl}\n");
        let diags = check(&source);
        prop_assert_eq!(diags.len(), 1, "{}", source);

        let expected = if name.starts_with(|c: char| c.is_ascii_uppercase()) {
            Category::GodocExport
        } else {
            Category::GodocLocal
        };
        prop_assert_eq!(diags[0].category, expected);
        prop_assert_eq!(&diags[0].words[0].found, &lead);
        prop_assert_eq!(&diags[0].words[0].suggest, &name);
    }
}
