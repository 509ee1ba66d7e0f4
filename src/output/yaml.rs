//! YAML formatter
//!
//! Each root becomes a mapping key whose value is the list of its children.
//! Directories are single-key mappings (`- name/:`) holding their own list,
//! files are plain list items. Indentation grows by one unit per depth level:
//!
//! ```text
//! .:
//!   - a/:
//!     - b.txt
//!   - d.txt
//! ```
//!
//! Names stay plain scalars unless YAML would read them as something else
//! (`true`, `123`, `#notes.md`, `a: b`); those are single-quoted, or
//! double-quoted when they hold control characters.

use std::borrow::Cow;

use crate::tree::{Forest, TreeNode};

use super::config::OutputConfig;
use super::label::label;

const EMPTY_LIST: &str = " []";

/// Formatter for nested YAML list output.
pub struct YamlFormatter {
    config: OutputConfig,
}

impl YamlFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, forest: &Forest) -> String {
        let unit = self.config.indent_unit();
        let mut output = String::new();

        for root in forest.roots() {
            // A root naming a single file has nothing to nest
            if !root.is_dir() {
                output.push_str(&scalar(root.segment()));
                output.push('\n');
                continue;
            }

            output.push_str(&scalar(root.segment()));
            output.push(':');
            if root.children().is_empty() {
                output.push_str(EMPTY_LIST);
            }
            output.push('\n');

            for child in root.children() {
                self.format_node(child, &unit, 1, &mut output);
            }
        }
        output
    }

    fn format_node(&self, node: &TreeNode, unit: &str, depth: usize, output: &mut String) {
        output.push_str(&unit.repeat(depth));
        output.push_str("- ");
        output.push_str(&scalar(&label(node, "/")));
        if node.is_dir() {
            output.push(':');
            if node.children().is_empty() {
                output.push_str(EMPTY_LIST);
            }
        }
        output.push('\n');

        for child in node.children() {
            self.format_node(child, unit, depth + 1, output);
        }
    }
}

/// Quote `text` when a plain scalar would not load back as the same string.
fn scalar(text: &str) -> Cow<'_, str> {
    if text.chars().any(char::is_control) {
        return Cow::Owned(double_quoted(text));
    }
    if needs_quotes(text) {
        return Cow::Owned(format!("'{}'", text.replace('\'', "''")));
    }
    Cow::Borrowed(text)
}

fn needs_quotes(text: &str) -> bool {
    const INDICATORS: &[char] = &[
        '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '"', '%',
        '@', '`',
    ];
    const RESERVED: &[&str] = &[
        "~", "null", "true", "false", "yes", "no", "on", "off", "y", "n",
    ];

    text.is_empty()
        || text.starts_with(INDICATORS)
        || text.starts_with(' ')
        || text.ends_with(' ')
        || text.ends_with(':')
        || text.contains(": ")
        || text.contains(" #")
        || RESERVED.iter().any(|word| text.eq_ignore_ascii_case(word))
        || looks_numeric(text)
}

fn looks_numeric(text: &str) -> bool {
    let unsigned = text.trim_start_matches(['+', '-']);
    let radix = |prefix: &str, radix: u32| {
        unsigned
            .strip_prefix(prefix)
            .is_some_and(|digits| u64::from_str_radix(digits, radix).is_ok())
    };
    text.parse::<f64>().is_ok()
        || radix("0x", 16)
        || radix("0o", 8)
        || matches!(unsigned.to_ascii_lowercase().as_str(), ".inf" | ".nan")
}

fn double_quoted(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\t' => quoted.push_str("\\t"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
