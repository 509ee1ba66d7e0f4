//! Building the forest of root trees from repository-relative paths

use super::node::TreeNode;

/// Root label that anchors every path in the repository.
pub const REPO_ROOT: &str = ".";

/// Ordered collection of independent root trees, one per declared root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    roots: Vec<TreeNode>,
}

/// A node visited during pre-order traversal.
#[derive(Debug)]
pub struct Entry<'a> {
    pub node: &'a TreeNode,
    /// Root label followed by every segment down to this node, `/`-joined.
    pub path: String,
    /// Number of ancestors; 0 for roots.
    pub depth: usize,
    /// Last child of its parent, or the last root.
    pub is_last: bool,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    /// Register a root so that it is rendered even if no path lands in it.
    pub fn add_root(&mut self, root: &str) -> &mut TreeNode {
        let index = match self.roots.iter().position(|r| r.segment() == root) {
            Some(i) => i,
            None => {
                self.roots.push(TreeNode::dir(root));
                self.roots.len() - 1
            }
        };
        &mut self.roots[index]
    }

    /// Insert `path` beneath `root`, creating missing nodes along the way.
    ///
    /// Paths are appended in first-seen order; no sort is applied, so sibling
    /// order follows input order. Inserting a path that is already present
    /// changes nothing. A path equal to `root` marks the root as a single file.
    ///
    /// # Panics
    ///
    /// Panics if `path` is empty, absolute, or not beneath `root`. The path
    /// source is responsible for handing over only well-formed paths.
    pub fn insert_path(&mut self, path: &str, root: &str) {
        assert!(!path.is_empty(), "empty path inserted under root {root:?}");
        assert!(
            !path.starts_with('/'),
            "absolute path {path:?} inserted under root {root:?}"
        );
        let relative = strip_root(path, root)
            .unwrap_or_else(|| panic!("path {path:?} is outside root {root:?}"));

        let mut cursor = self.add_root(root);
        if relative.is_empty() {
            cursor.mark_dir(false);
            return;
        }

        let mut segments = relative.split('/').filter(|s| !s.is_empty()).peekable();
        while let Some(segment) = segments.next() {
            cursor = cursor.child_or_insert(segment);
            if segments.peek().is_some() {
                cursor.mark_dir(true);
            }
        }
    }

    /// Every node in pre-order, roots first in declaration order.
    pub fn entries(&self) -> Vec<Entry<'_>> {
        let mut entries = Vec::new();
        for (i, root) in self.roots.iter().enumerate() {
            let is_last = i == self.roots.len() - 1;
            collect_entries(root, root.segment().to_string(), 0, is_last, &mut entries);
        }
        entries
    }

    /// Repository-relative paths of every file, in traversal order.
    pub fn file_paths(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|e| !e.node.is_dir())
            .map(|e| match e.path.strip_prefix("./") {
                Some(rest) => rest.to_string(),
                None => e.path,
            })
            .collect()
    }

    /// Directory and file counts across all roots, roots not included.
    pub fn counts(&self) -> (usize, usize) {
        self.roots.iter().fold((0, 0), |(dirs, files), root| {
            let (d, f) = root.counts();
            if root.is_dir() {
                (dirs + d, files + f)
            } else {
                (dirs, files + 1)
            }
        })
    }

    /// True when no root holds anything.
    pub fn is_empty(&self) -> bool {
        self.roots
            .iter()
            .all(|r| r.is_dir() && r.children().is_empty())
    }
}

fn strip_root<'a>(path: &'a str, root: &str) -> Option<&'a str> {
    if root == REPO_ROOT {
        return Some(path);
    }
    if path == root {
        return Some("");
    }
    path.strip_prefix(root)?.strip_prefix('/')
}

fn collect_entries<'a>(
    node: &'a TreeNode,
    path: String,
    depth: usize,
    is_last: bool,
    entries: &mut Vec<Entry<'a>>,
) {
    let children = node.children();
    let child_paths: Vec<String> = children
        .iter()
        .map(|c| format!("{}/{}", path, c.segment()))
        .collect();
    entries.push(Entry {
        node,
        path,
        depth,
        is_last,
    });
    for (i, (child, child_path)) in children.iter().zip(child_paths).enumerate() {
        let child_is_last = i == children.len() - 1;
        collect_entries(child, child_path, depth + 1, child_is_last, entries);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn build(paths: &[&str], root: &str) -> Forest {
        let mut forest = Forest::new();
        forest.add_root(root);
        for path in paths {
            forest.insert_path(path, root);
        }
        forest
    }

    fn segments(node: &TreeNode) -> Vec<&str> {
        node.children().iter().map(TreeNode::segment).collect()
    }

    #[test]
    fn test_basic_structure() {
        let forest = build(&["a/b.txt", "a/c.txt", "d.txt"], ".");
        let root = &forest.roots()[0];
        assert_eq!(root.segment(), ".");
        assert_eq!(segments(root), ["a", "d.txt"]);

        let a = &root.children()[0];
        assert!(a.is_dir());
        assert_eq!(segments(a), ["b.txt", "c.txt"]);
        assert!(!root.children()[1].is_dir());
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let once = build(&["x/y/z.txt"], ".");
        let twice = build(&["x/y/z.txt", "x/y/z.txt"], ".");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_round_trip_paths() {
        let input = [
            "Cargo.toml",
            "src/lib.rs",
            "src/tree/forest.rs",
            "src/tree/node.rs",
            "src/lib.rs",
            "tests/integration.rs",
        ];
        let forest = build(&input, ".");

        let expected: BTreeSet<_> = input.iter().map(|p| p.to_string()).collect();
        let actual: BTreeSet<_> = forest.file_paths().into_iter().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_sibling_order_follows_sorted_input() {
        let forest = build(&["a.txt", "b/c.txt", "b/d.txt", "e/f/g.txt", "h.txt"], ".");
        let root = &forest.roots()[0];
        assert_eq!(segments(root), ["a.txt", "b", "e", "h.txt"]);
    }

    #[test]
    fn test_no_implicit_sort() {
        let forest = build(&["z.txt", "a.txt"], ".");
        assert_eq!(segments(&forest.roots()[0]), ["z.txt", "a.txt"]);
    }

    #[test]
    fn test_depth_matches_separator_count() {
        let forest = build(&["a/b/c.txt", "a/d.txt", "e.txt"], ".");
        for entry in forest.entries() {
            let separators = entry.path.matches('/').count();
            assert_eq!(entry.depth, separators, "depth mismatch for {}", entry.path);
        }
    }

    #[test]
    fn test_entries_last_sibling_flags() {
        let forest = build(&["a/b.txt", "a/c.txt", "d.txt"], ".");
        let flags: Vec<_> = forest
            .entries()
            .iter()
            .map(|e| (e.path.clone(), e.is_last))
            .collect();
        assert_eq!(
            flags,
            [
                (".".to_string(), true),
                ("./a".to_string(), false),
                ("./a/b.txt".to_string(), false),
                ("./a/c.txt".to_string(), true),
                ("./d.txt".to_string(), true),
            ]
        );
    }

    #[test]
    fn test_multiple_roots() {
        let mut forest = Forest::new();
        forest.add_root("src");
        forest.add_root("docs");
        forest.insert_path("src/main.rs", "src");
        forest.insert_path("src/util/mod.rs", "src");
        forest.insert_path("docs/guide.md", "docs");

        let roots: Vec<_> = forest.roots().iter().map(TreeNode::segment).collect();
        assert_eq!(roots, ["src", "docs"]);
        assert_eq!(segments(&forest.roots()[0]), ["main.rs", "util"]);
        assert_eq!(segments(&forest.roots()[1]), ["guide.md"]);
        assert_eq!(
            forest.file_paths(),
            ["src/main.rs", "src/util/mod.rs", "docs/guide.md"]
        );
    }

    #[test]
    fn test_unmatched_root_is_empty_dir() {
        let mut forest = Forest::new();
        forest.add_root("src");
        forest.add_root("empty");
        forest.insert_path("src/main.rs", "src");

        let empty = &forest.roots()[1];
        assert!(empty.is_dir());
        assert!(empty.children().is_empty());
        assert!(!forest.is_empty());
    }

    #[test]
    fn test_single_file_root() {
        let forest = build(&["README.md"], "README.md");
        let root = &forest.roots()[0];
        assert!(!root.is_dir());
        assert_eq!(forest.file_paths(), ["README.md"]);
        assert_eq!(forest.counts(), (0, 1));
    }

    #[test]
    fn test_root_created_on_first_insert() {
        let mut forest = Forest::new();
        forest.insert_path("lib.rs", ".");
        assert_eq!(forest.roots().len(), 1);
        assert_eq!(forest.roots()[0].segment(), ".");
    }

    #[test]
    fn test_empty_forest() {
        let forest = build(&[], ".");
        assert!(forest.is_empty());
        assert_eq!(forest.counts(), (0, 0));
        assert!(forest.file_paths().is_empty());
    }

    #[test]
    fn test_counts() {
        let forest = build(&["a/b/c.txt", "a/d.txt", "e.txt"], ".");
        assert_eq!(forest.counts(), (2, 3));
    }

    #[test]
    #[should_panic(expected = "outside root")]
    fn test_path_outside_root_panics() {
        let mut forest = Forest::new();
        forest.insert_path("docs/guide.md", "src");
    }

    #[test]
    #[should_panic(expected = "outside root")]
    fn test_root_prefix_must_end_at_separator() {
        let mut forest = Forest::new();
        forest.insert_path("srcs/main.rs", "src");
    }

    #[test]
    #[should_panic(expected = "empty path")]
    fn test_empty_path_panics() {
        let mut forest = Forest::new();
        forest.insert_path("", ".");
    }
}
