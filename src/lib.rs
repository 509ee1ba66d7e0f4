//! git-tree-structure - Render the files git knows about as YAML or a tree listing
//!
//! Paths listed by [`GitPathSource`] are inserted into a [`Forest`] (one tree
//! per declared root) and rendered with [`YamlFormatter`] or [`TreeFormatter`].

pub mod error;
pub mod git;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use git::{GitPathSource, ListingOptions};
pub use output::{IndentStyle, OutputConfig, OutputFormat, TreeFormatter, YamlFormatter, render};
pub use tree::{Entry, Forest, REPO_ROOT, TreeNode};
