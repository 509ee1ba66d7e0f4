//! Display labels for tree nodes

use crate::tree::TreeNode;

/// Node segment, with `dir_suffix` appended when the node is a directory.
pub fn label(node: &TreeNode, dir_suffix: &str) -> String {
    if node.is_dir() {
        format!("{}{}", node.segment(), dir_suffix)
    } else {
        node.segment().to_string()
    }
}
