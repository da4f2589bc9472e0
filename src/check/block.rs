//! Documentation block extraction
//!
//! A group starts with a run of comments and continues with declaration tokens. Only the last line-contiguous
//! part of that run can document the declaration; anything above a blank line is a detached remark.

use crate::Token;

/// The trailing line-contiguous comment run at the front of `group`.
///
/// Each comment must sit on the line right after the previous one; a gap restarts the block at that comment.
/// Scanning stops at the first non-comment token. Empty only if the group does not start with a comment.
pub fn doc_block(group: &[Token]) -> &[Token] {
    let mut start = 0;
    let mut end = 0;
    let mut want_line = None;

    for (i, tok) in group.iter().enumerate() {
        if !tok.is_comment() {
            break;
        }
        if want_line != Some(tok.pos.line) {
            start = i;
        }
        want_line = Some(tok.pos.line + 1);
        end = i + 1;
    }

    &group[start..end]
}

/// The first token of `group` that is not a comment: the start of the documented declaration.
pub fn first_non_comment(group: &[Token]) -> Option<&Token> {
    group.iter().find(|tok| !tok.is_comment())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_contiguous_block() {
        let group = lex("// Parse reads\n// input.\nfunc Parse").unwrap();
        assert_eq!(texts(doc_block(&group)), vec!["// Parse reads", "// input."]);
        assert_eq!(first_non_comment(&group).map(|t| t.text.as_str()), Some("func"));
    }

    #[test]
    fn test_gap_keeps_last_run() {
        let group = lex("// detached\n\n// Parse reads\n// input.\nfunc Parse").unwrap();
        assert_eq!(texts(doc_block(&group)), vec!["// Parse reads", "// input."]);
    }

    #[test]
    fn test_single_line_after_gap() {
        let group = lex("// a\n// b\n\n// c\nfunc F").unwrap();
        assert_eq!(texts(doc_block(&group)), vec!["// c"]);
    }

    #[test]
    fn test_two_comments_on_one_line() {
        // Same line twice is not "next line": the second comment restarts the block.
        let group = lex("/* a */ // b\nfunc F").unwrap();
        assert_eq!(texts(doc_block(&group)), vec!["// b"]);
    }

    #[test]
    fn test_comment_only_group() {
        let group = lex("// a\n// b").unwrap();
        assert_eq!(doc_block(&group).len(), 2);
        assert!(first_non_comment(&group).is_none());
    }

    #[test]
    fn test_group_without_comments() {
        let group = lex("func F").unwrap();
        assert!(doc_block(&group).is_empty());
        assert!(doc_block(&[]).is_empty());
    }
}
