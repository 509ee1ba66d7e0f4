//! Tree formatter for `tree`-style output
//!
//! This module provides `TreeFormatter` which renders a `Forest` one line per
//! node, with connectors built from each ancestor's last-sibling flag, either
//! into a string or printed with colors.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{Forest, TreeNode};

use super::config::OutputConfig;
use super::label::label;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";

/// One rendered line: connector prefix followed by the node label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub prefix: String,
    pub label: String,
    pub is_dir: bool,
}

/// Formatter for `tree`-style output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Every line of the listing in pre-order. Roots are printed bare.
    pub fn lines(&self, forest: &Forest) -> Vec<TreeLine> {
        let mut lines = Vec::new();
        for root in forest.roots() {
            lines.push(TreeLine {
                prefix: String::new(),
                label: label(root, ""),
                is_dir: root.is_dir(),
            });
            self.push_children(root, "", &mut lines);
        }
        lines
    }

    pub fn format(&self, forest: &Forest) -> String {
        let mut output = String::new();
        for line in self.lines(forest) {
            output.push_str(&line.prefix);
            output.push_str(&line.label);
            output.push('\n');
        }
        output
    }

    pub fn print(&self, forest: &Forest) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        for line in self.lines(forest) {
            write!(stdout, "{}", line.prefix)?;
            if line.is_dir {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            }
            write!(stdout, "{}", line.label)?;
            stdout.reset()?;
            writeln!(stdout)?;
        }
        Ok(())
    }

    fn push_children(&self, node: &TreeNode, prefix: &str, lines: &mut Vec<TreeLine>) {
        let children = node.children();
        for (i, child) in children.iter().enumerate() {
            let is_last = i == children.len() - 1;
            let connector = if is_last { LAST_BRANCH } else { BRANCH };
            lines.push(TreeLine {
                prefix: format!("{}{}", prefix, connector),
                label: label(child, "/"),
                is_dir: child.is_dir(),
            });

            let padding = if is_last {
                self.config.blank()
            } else {
                self.config.continuation()
            };
            self.push_children(child, &format!("{}{}", prefix, padding), lines);
        }
    }
}
