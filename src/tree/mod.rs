//! In-memory directory tree built from a flat path listing
//!
//! - `TreeNode`: one path segment owning its children
//! - `Forest`: one tree per declared root, filled via `Forest::insert_path`
//!
//! The forest is built once per run, handed to a single formatter and dropped.

mod forest;
mod node;

pub use forest::{Entry, Forest, REPO_ROOT};
pub use node::TreeNode;
