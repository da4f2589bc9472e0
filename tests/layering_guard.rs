//! Layering guardrails to keep the syntax crate runtime-free.
//!
//! `godoc_syntax` only turns text into tokens. The async pipeline, JSON output and the CLI belong to the
//! `godoc-lint` crate, so none of their dependencies may appear in the syntax crate's `[dependencies]`.

const FORBIDDEN: [&str; 4] = ["tokio", "serde_json", "clap", "tracing-subscriber"];

#[test]
fn syntax_crate_stays_runtime_free() {
    let manifest = include_str!("../crates/godoc_syntax/Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        let name = line_no_comment.split(['=', ' ']).next().unwrap_or("");
        if FORBIDDEN.contains(&name) {
            panic!("`{name}` must not appear in godoc_syntax [dependencies]");
        }
    }
}

#[test]
fn checker_depends_on_syntax_crate() {
    let manifest = include_str!("../Cargo.toml");
    assert!(
        manifest.lines().any(|l| l.trim_start().starts_with("godoc_syntax")),
        "godoc-lint must take its tokens from godoc_syntax"
    );
}
