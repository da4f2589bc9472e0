//! Checker configuration
//!
//! None of these settings change which comments are flagged; they shape the pipeline's buffering and what the
//! presentation layer prints.

use crate::diagnostics::Category;

/// Checker configuration
#[derive(Debug, Clone)]
pub struct LintConfig {
    /// Capacity of every channel in the checking pipeline
    pub channel_capacity: usize,
    /// Categories to report; diagnostics of other categories are dropped before printing
    pub categories: Vec<Category>,
    /// How diagnostics are printed
    pub format: OutputFormat,
    /// Whether text output uses ANSI colours
    pub color: bool,
}

/// Output style for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compiler-style report with source context
    Text,
    /// One line per diagnostic
    Short,
    /// JSON array of diagnostics
    Json,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 64,
            categories: Category::ALL.to_vec(),
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl LintConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pipeline channel capacity (clamped to at least 1)
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }

    /// Restrict reporting to the given categories; an empty list keeps the current selection
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        if !categories.is_empty() {
            self.categories = categories;
        }
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable coloured text output
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Whether diagnostics of `category` should be printed
    pub fn reports(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}
