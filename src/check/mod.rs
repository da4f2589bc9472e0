//! Doc comment checking pipeline
//!
//! ```text
//!                         ┌─ DeclRootCommentFilter ──────────────────────────── validator ─┐
//! tokens ─ duplicate ─────┤                                                               ├─ diagnostics
//!                         └─ DeclTypeFilter ── DeclIdentCommentFilter ───────── validator ─┘
//! ```
//!
//! Each stage runs on its own task and talks over bounded channels. Within one chain diagnostics come out in
//! source order; the two chains interleave freely, so [`check_tokens`] sorts by anchor position.
//!
//! ## Modules
//!
//! - `stream` - duplicator, filter driver, `Item`
//! - `filters` - the three group filters
//! - `block` - documentation block extraction
//! - `rules` - gate chain and validator worker

pub mod block;
pub mod filters;
pub mod rules;
pub mod stream;

use tokio::sync::mpsc::{self, Receiver, Sender};

use crate::config::LintConfig;
use crate::diagnostics::CheckedLexeme;
use crate::{LexError, Token, lexer};

pub use block::{doc_block, first_non_comment};
pub use filters::{DeclIdentCommentFilter, DeclRootCommentFilter, DeclTypeFilter};
pub use rules::{check_go_doc, check_group};
pub use stream::{GroupFilter, Item, duplicate, filter};

/// Run the full check over `tokens`, sending every violation to `out`.
///
/// Returns once the token stream has closed and both validators have drained their chains.
#[tracing::instrument(skip_all, fields(capacity = capacity))]
pub async fn check_go_docs(tokens: Receiver<Token>, out: Sender<CheckedLexeme>, capacity: usize) {
    let [root, types] = duplicate::<_, 2>(tokens, capacity);

    let root_chain = filter(root, DeclRootCommentFilter::new(), capacity);
    let type_chain = filter(
        filter(types, DeclTypeFilter::new(), capacity),
        DeclIdentCommentFilter::new(),
        capacity,
    );

    let workers = [
        ("root", tokio::spawn(check_go_doc(root_chain, out.clone(), "root"))),
        ("type", tokio::spawn(check_go_doc(type_chain, out, "type"))),
    ];
    for (chain, handle) in workers {
        if let Err(err) = handle.await {
            tracing::error!(chain, error = %err, "validator task failed");
        }
    }
}

/// Start a check on the current runtime and return the diagnostic stream.
///
/// The returned receiver closes when the check is complete.
pub fn spawn_check(tokens: Receiver<Token>, config: &LintConfig) -> Receiver<CheckedLexeme> {
    let capacity = config.channel_capacity.max(1);
    let (tx, rx) = mpsc::channel(capacity);
    tokio::spawn(check_go_docs(tokens, tx, capacity));
    rx
}

/// Check an already-lexed file and return its diagnostics sorted by position.
pub async fn check_tokens(tokens: Vec<Token>, config: &LintConfig) -> Vec<CheckedLexeme> {
    let (tx, rx) = mpsc::channel(config.channel_capacity.max(1));
    tokio::spawn(async move {
        for tok in tokens {
            if tx.send(tok).await.is_err() {
                break;
            }
        }
    });

    let mut diagnostics = spawn_check(rx, config);
    let mut found = Vec::new();
    while let Some(diag) = diagnostics.recv().await {
        found.push(diag);
    }
    found.sort_by(|a, b| a.anchor.pos.cmp(&b.anchor.pos));
    found
}

/// Lex and check Go source text.
pub async fn check_source(source: &str, config: &LintConfig) -> Result<Vec<CheckedLexeme>, Vec<LexError>> {
    let tokens = lexer::lex(source)?;
    Ok(check_tokens(tokens, config).await)
}
