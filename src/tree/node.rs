//! A single node of the directory tree

/// One path component and the nodes beneath it.
///
/// Children keep first-seen order and never repeat a segment. A node is a
/// directory when it has children or was created as an intermediate
/// component of a longer path (roots included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    segment: String,
    dir: bool,
    children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn file(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            dir: false,
            children: Vec::new(),
        }
    }

    pub fn dir(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            dir: true,
            children: Vec::new(),
        }
    }

    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn is_dir(&self) -> bool {
        self.dir || !self.children.is_empty()
    }

    pub(crate) fn mark_dir(&mut self, dir: bool) {
        self.dir = dir;
    }

    /// Return the child named `segment`, appending a new file node if absent.
    ///
    /// Sorted input always matches the most recently appended child, so the
    /// search runs from the back.
    pub(crate) fn child_or_insert(&mut self, segment: &str) -> &mut TreeNode {
        let index = match self.children.iter().rposition(|c| c.segment == segment) {
            Some(i) => i,
            None => {
                self.children.push(TreeNode::file(segment));
                self.children.len() - 1
            }
        };
        &mut self.children[index]
    }

    /// Count directories and files beneath this node, excluding the node itself.
    pub fn counts(&self) -> (usize, usize) {
        let mut dir_count = 0;
        let mut file_count = 0;
        for child in &self.children {
            let (d, f) = child.counts();
            dir_count += d;
            file_count += f;
            if child.is_dir() {
                dir_count += 1;
            } else {
                file_count += 1;
            }
        }
        (dir_count, file_count)
    }
}
