//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::{Path, PathBuf};

use miette::{NamedSource, Report};
use serde_json::Value;

use crate::check::check_tokens;
use crate::config::{LintConfig, OutputFormat};
use crate::diagnostics::{self, CheckedLexeme};
use crate::{LexError, lexer};

use super::discover::collect_go_files;
use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Larger files are rejected rather than read into memory.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file with size validation.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be accessed
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
/// - The file is not valid UTF-8
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(file_path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path.display(), e)))
}

/// Render lexer errors with source context.
fn format_lex_errors(file_name: &str, source: &str, errs: Vec<LexError>) -> String {
    let mut msg = String::new();
    for err in errs {
        let report = Report::new(err).with_source_code(NamedSource::new(file_name, source.to_string()));
        msg.push_str(&format!("{report:?}\n"));
    }
    msg
}

/// Lex a file and print its tokens (debug).
pub fn lex_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source).map_err(|errs| {
        let msg = format_lex_errors(&file_path.to_string_lossy(), &source, errs);
        CliError::failure(msg.trim_end())
    })?;

    for tok in &tokens {
        println!("{:>4}:{:<3} {:<10} {}", tok.pos.line, tok.pos.column, tok.kind, tok.text);
    }
    Ok(ExitCode::SUCCESS)
}

/// Format one file's diagnostics in the configured output format.
///
/// JSON is a pretty-printed array for this file alone; `check_paths` merges files into one array instead.
/// Returns an empty string when there is nothing to report.
pub fn format_report(file_name: &str, source: &str, diags: &[CheckedLexeme], config: &LintConfig) -> String {
    if diags.is_empty() {
        return String::new();
    }
    if config.format == OutputFormat::Json {
        return format!("{:#}\n", diagnostics::to_json(file_name, diags));
    }

    let mut out = String::new();
    for diag in diags {
        match config.format {
            OutputFormat::Short => {
                out.push_str(&diagnostics::render_short(file_name, diag));
                out.push('\n');
            }
            OutputFormat::Text | OutputFormat::Json => {
                out.push_str(&diagnostics::render(file_name, source, diag, config.color));
                out.push('\n');
            }
        }
    }
    out
}

/// Check every Go file under `paths` and print the diagnostics.
///
/// Exit code 1 when any diagnostic was printed, a path was missing, or a file could not be read or lexed.
pub async fn check_paths(paths: &[PathBuf], config: &LintConfig) -> CliResult<ExitCode> {
    let (files, missing) = collect_go_files(paths);
    let mut failed = !missing.is_empty();
    for path in &missing {
        eprintln!("Error: path '{}' does not exist", path.display());
    }
    tracing::debug!(files = files.len(), "discovered Go files");

    let mut reported = 0usize;
    let mut json = Vec::new();

    for file in &files {
        let file_name = file.to_string_lossy();
        let source = match read_source(file) {
            Ok(source) => source,
            Err(err) => {
                tracing::warn!(file = %file_name, "skipping unreadable file");
                eprintln!("{}", err.message);
                failed = true;
                continue;
            }
        };

        let tokens = match lexer::lex(&source) {
            Ok(tokens) => tokens,
            Err(errs) => {
                eprint!("{}", format_lex_errors(&file_name, &source, errs));
                failed = true;
                continue;
            }
        };

        let diags: Vec<CheckedLexeme> = check_tokens(tokens, config)
            .await
            .into_iter()
            .filter(|d| config.reports(d.category))
            .collect();
        reported += diags.len();

        if config.format == OutputFormat::Json {
            if let Value::Array(items) = diagnostics::to_json(&file_name, &diags) {
                json.extend(items);
            }
        } else {
            print!("{}", format_report(&file_name, &source, &diags, config));
        }
    }

    if config.format == OutputFormat::Json {
        let rendered = serde_json::to_string_pretty(&Value::Array(json))
            .map_err(|e| CliError::failure(format!("Error encoding JSON: {}", e)))?;
        println!("{rendered}");
    } else if reported > 0 {
        eprintln!(
            "found {} issue{} in {} file{}",
            reported,
            if reported == 1 { "" } else { "s" },
            files.len(),
            if files.len() == 1 { "" } else { "s" }
        );
    }

    if failed || reported > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::check::check_source;

    #[tokio::test]
    async fn test_short_report() {
        let source = "// Reads input.\nfunc Parse() {}\n";
        let config = LintConfig::new().with_format(OutputFormat::Short);
        let diags = check_source(source, &config).await.unwrap();
        assert_eq!(
            format_report("parse.go", source, &diags, &config),
            "parse.go:1:1: lint[godoc-export]: comment should start with \"Parse\"\n"
        );
    }

    #[tokio::test]
    async fn test_clean_file_reports_nothing() {
        let source = "// Parse reads input.\nfunc Parse() {}\n";
        let config = LintConfig::new();
        let diags = check_source(source, &config).await.unwrap();
        assert!(format_report("parse.go", source, &diags, &config).is_empty());
    }

    #[tokio::test]
    async fn test_json_report() {
        let source = "// Reads input.\nfunc Parse() {}\n";
        let config = LintConfig::new().with_format(OutputFormat::Json);
        let diags = check_source(source, &config).await.unwrap();
        let report = format_report("parse.go", source, &diags, &config);
        let value: Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value, diagnostics::to_json("parse.go", &diags));
        assert_eq!(value[0]["words"][0]["suggest"], "Parse");
    }

    #[test]
    fn test_lex_errors_are_rendered_with_file_name() {
        let source = "var s = \"open\n";
        let errs = lexer::lex(source).unwrap_err();
        let msg = format_lex_errors("bad.go", source, errs);
        assert!(msg.contains("bad.go"));
    }

    #[tokio::test]
    async fn test_missing_path_fails() {
        let code = check_paths(&[PathBuf::from("/definitely/not/here")], &LintConfig::new().with_color(false))
            .await
            .unwrap();
        assert_eq!(code, ExitCode::FAILURE);
    }
}
