//! Output configuration types

use clap::ValueEnum;

const DEFAULT_INDENT_WIDTH: usize = 2;

/// Rendered text format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Nested YAML lists keyed by directory
    #[default]
    Yaml,
    /// `tree`-style listing with box-drawing connectors
    Tree,
}

/// Character used for one level of indentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum IndentStyle {
    #[default]
    Spaces,
    Tabs,
}

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub indent: IndentStyle,
    /// Spaces per YAML nesting level; ignored for tabs
    pub indent_width: usize,
    pub use_color: bool,
}

impl OutputConfig {
    /// One YAML indentation unit.
    pub fn indent_unit(&self) -> String {
        match self.indent {
            IndentStyle::Spaces => " ".repeat(self.indent_width),
            IndentStyle::Tabs => "\t".to_string(),
        }
    }

    /// Padding under an ancestor that still has siblings below it.
    pub fn continuation(&self) -> &'static str {
        match self.indent {
            IndentStyle::Spaces => "│   ",
            IndentStyle::Tabs => "│\t",
        }
    }

    /// Padding under an ancestor that was the last of its siblings.
    pub fn blank(&self) -> &'static str {
        match self.indent {
            IndentStyle::Spaces => "    ",
            IndentStyle::Tabs => "\t",
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: IndentStyle::Spaces,
            indent_width: DEFAULT_INDENT_WIDTH,
            use_color: false,
        }
    }
}
