//! Forest formatting
//!
//! - `config` - Output configuration types
//! - `label` - Node display labels shared by both formats
//! - `yaml` - Nested YAML list formatter
//! - `tree` - `tree`-style formatter with box-drawing connectors

mod config;
mod label;
mod tree;
mod yaml;

pub use config::{IndentStyle, OutputConfig, OutputFormat};
pub use label::label;
pub use tree::{TreeFormatter, TreeLine};
pub use yaml::YamlFormatter;

use crate::tree::Forest;

/// Render `forest` in the requested format. The text ends with a newline.
pub fn render(forest: &Forest, format: OutputFormat, config: &OutputConfig) -> String {
    match format {
        OutputFormat::Yaml => YamlFormatter::new(config.clone()).format(forest),
        OutputFormat::Tree => TreeFormatter::new(config.clone()).format(forest),
    }
}
