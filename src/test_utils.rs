//! Temporary git repositories for tests and benchmarks.
//!
//! Only compiled for tests or with the `test-utils` feature.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary directory, optionally initialized as a git repository.
///
/// Cleaned up when dropped.
pub struct TestRepo {
    dir: TempDir,
    git_initialized: bool,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            dir,
            git_initialized: false,
        }
    }

    pub fn with_git() -> Self {
        let mut repo = Self::new();
        repo.init_git();
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run `git init` and set a committer identity.
    pub fn init_git(&mut self) {
        self.git(&["init"]);
        self.git(&["config", "user.email", "test@test.com"]);
        self.git(&["config", "user.name", "Test"]);
        self.git_initialized = true;
    }

    /// Write a file, creating parent directories, and stage it.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.write(path, content);
        if self.git_initialized {
            self.git(&["add", path]);
        }
        full_path
    }

    /// Write a file without staging it.
    pub fn add_untracked(&self, path: &str, content: &str) -> PathBuf {
        self.write(path, content)
    }

    /// Populate the index with many files in one `git add`.
    pub fn add_files<'a>(&self, paths: impl IntoIterator<Item = &'a str>) {
        for path in paths {
            self.write(path, "");
        }
        if self.git_initialized {
            self.git(&["add", "."]);
        }
    }

    pub fn commit(&self, message: &str) {
        assert!(self.git_initialized, "Git not initialized");
        self.git(&["commit", "-m", message, "--allow-empty"]);
    }

    fn write(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    fn git(&self, args: &[&str]) {
        Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .unwrap_or_else(|e| panic!("Failed to run git {:?}: {}", args, e));
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
