//! Go file discovery
//!
//! Directories are walked recursively. `vendor`, `testdata` and hidden directories are skipped, the same set the
//! `go` tool ignores for `./...` patterns.

use std::fs;
use std::path::{Path, PathBuf};

const SKIPPED_DIRS: [&str; 2] = ["vendor", "testdata"];

/// Expand command line paths into a sorted, de-duplicated list of `.go` files.
///
/// A trailing `/...` is accepted and means the same as the directory itself. Explicitly named files are kept even
/// without a `.go` extension. Paths that do not exist are returned in `missing`.
pub fn collect_go_files(paths: &[PathBuf]) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let mut files = Vec::new();
    let mut missing = Vec::new();

    for path in paths {
        let path = strip_ellipsis(path);
        if path.is_file() {
            files.push(path);
        } else if path.is_dir() {
            walk(&path, &mut files);
        } else {
            missing.push(path);
        }
    }

    files.sort();
    files.dedup();
    (files, missing)
}

fn strip_ellipsis(path: &Path) -> PathBuf {
    let text = path.to_string_lossy();
    match text.strip_suffix("...") {
        Some("") => PathBuf::from("."),
        Some(rest) => {
            let rest = rest.trim_end_matches('/');
            PathBuf::from(if rest.is_empty() { "." } else { rest })
        }
        None => path.to_path_buf(),
    }
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), error = %err, "cannot read directory");
            return;
        }
    };

    for entry in entries.flatten() {
        let entry_path = entry.path();
        if entry_path.is_dir() {
            let name = entry_path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            if !name.starts_with('.') && !name.starts_with('_') && !SKIPPED_DIRS.contains(&name) {
                walk(&entry_path, files);
            }
        } else if entry_path.extension().is_some_and(|ext| ext == "go") {
            files.push(entry_path);
        }
    }
}
