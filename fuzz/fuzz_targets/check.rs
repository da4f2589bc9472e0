#![no_main]

use godoc_lint::check::{DeclRootCommentFilter, GroupFilter, Item, check_group};
use godoc_lint::lexer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(tokens) = lexer::lex(s) {
            // Drive the root filter synchronously and run the rules over every group it closes
            let mut filter = DeclRootCommentFilter::new();
            let mut out = Vec::new();
            for tok in tokens {
                filter.accept(Item::Token(tok), &mut out);
            }
            filter.finish(&mut out);

            let mut group = Vec::new();
            for item in out {
                match item {
                    Item::Token(tok) => group.push(tok),
                    Item::Boundary => {
                        let _ = check_group(&group);
                        group.clear();
                    }
                }
            }
        }
    }
});
