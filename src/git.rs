//! Git repository integration
//!
//! Lists the paths git knows about (index entries and untracked files) as
//! repository-relative, `/`-separated strings, the way `git ls-files` does.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use git2::{Repository, Status, StatusOptions};
use glob::{MatchOptions, Pattern};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::tree::REPO_ROOT;

/// Which paths to list.
#[derive(Debug, Clone)]
pub struct ListingOptions {
    /// Untracked files
    pub others: bool,
    /// Staged files from the index
    pub stage: bool,
    /// Tracked files from the index
    pub cached: bool,
    /// Skip untracked files matched by .gitignore and friends
    pub exclude_standard: bool,
    /// Gitignore-style patterns, applied to tracked and untracked paths
    pub exclude: Vec<String>,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            others: true,
            stage: true,
            cached: false,
            exclude_standard: true,
            exclude: Vec::new(),
        }
    }
}

pub struct GitPathSource {
    repo: Repository,
    workdir: PathBuf,
}

impl GitPathSource {
    /// Open the repository containing `path`, searching parent directories.
    pub fn discover(path: &Path) -> Result<Self> {
        let path = path
            .canonicalize()
            .map_err(|e| Error::not_found(path, e))?;
        let repo = Repository::discover(&path).map_err(|source| Error::NotARepository {
            path: path.clone(),
            source,
        })?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| Error::BareRepository { path: path.clone() })?;
        let workdir = workdir
            .canonicalize()
            .map_err(|e| Error::not_found(workdir, e))?;
        debug!("Git root path: {}", workdir.display());

        Ok(Self { repo, workdir })
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Convert a filesystem path into a root label relative to the working
    /// directory: `"."` for the working directory itself, `a/b` below it.
    pub fn relative_root(&self, path: &Path) -> Result<String> {
        let path = path
            .canonicalize()
            .map_err(|e| Error::not_found(path, e))?;
        let relative = path
            .strip_prefix(&self.workdir)
            .map_err(|_| Error::OutsideRepository {
                path: path.clone(),
                workdir: self.workdir.clone(),
            })?;

        if relative.as_os_str().is_empty() {
            return Ok(REPO_ROOT.to_string());
        }
        let parts: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Ok(parts.join("/"))
    }

    /// List paths equal to or beneath `root`, deduplicated and sorted
    /// byte-wise, matching the order `git ls-files` prints.
    pub fn list(&self, root: &str, options: &ListingOptions) -> Result<Vec<String>> {
        let mut paths = BTreeSet::new();

        if options.stage || options.cached {
            let index = self.repo.index()?;
            for entry in index.iter() {
                paths.insert(decode_path(&entry.path));
            }
        }

        if options.others {
            let mut status_options = StatusOptions::new();
            status_options
                .include_untracked(true)
                .recurse_untracked_dirs(true)
                .include_ignored(!options.exclude_standard)
                .recurse_ignored_dirs(!options.exclude_standard);

            let statuses = self.repo.statuses(Some(&mut status_options))?;
            for entry in statuses.iter() {
                let status = entry.status();
                if !status.intersects(Status::WT_NEW | Status::IGNORED) {
                    continue;
                }
                paths.insert(decode_path(entry.path_bytes()));
            }
        }

        let patterns = compile_patterns(&options.exclude);
        let paths: Vec<String> = paths
            .into_iter()
            .filter(|p| is_under_root(p, root) && !is_excluded(p, &patterns))
            .collect();
        debug!("Found {} paths under {}", paths.len(), root);

        Ok(paths)
    }
}

/// Paths git hands back are raw bytes; names that are not UTF-8 are kept,
/// with replacement characters.
fn decode_path(bytes: &[u8]) -> String {
    let path = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = path {
        warn!("Path is not valid UTF-8, showing it as '{}'", path);
    }
    path.into_owned()
}

/// An exclude pattern read with gitignore rules: a trailing `/` only matches
/// directories, a leading or inner `/` anchors the pattern at the repository
/// root, a leading `!` re-includes what earlier patterns excluded.
#[derive(Debug)]
struct ExcludePattern {
    glob: Pattern,
    anchored: bool,
    dir_only: bool,
    negated: bool,
}

impl ExcludePattern {
    fn parse(raw: &str) -> Option<Self> {
        let (negated, rest) = match raw.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        let (dir_only, rest) = match rest.strip_suffix('/') {
            Some(rest) => (true, rest),
            None => (false, rest),
        };
        let anchored = rest.contains('/');
        let rest = rest.strip_prefix('/').unwrap_or(rest);
        if rest.is_empty() {
            warn!("Ignoring empty exclude pattern '{}'", raw);
            return None;
        }

        match Pattern::new(rest) {
            Ok(glob) => Some(Self {
                glob,
                anchored,
                dir_only,
                negated,
            }),
            Err(e) => {
                warn!("Ignoring invalid exclude pattern '{}': {}", raw, e);
                None
            }
        }
    }

    /// True if the pattern matches the path or any of its parent directories.
    fn matches(&self, path: &str) -> bool {
        let options = MatchOptions {
            require_literal_separator: true,
            ..MatchOptions::new()
        };
        let components: Vec<&str> = path.split('/').collect();

        for (i, component) in components.iter().enumerate() {
            let is_dir = i + 1 < components.len();
            if self.dir_only && !is_dir {
                continue;
            }
            let matched = if self.anchored {
                self.glob.matches_with(&components[..=i].join("/"), options)
            } else {
                self.glob.matches_with(component, options)
            };
            if matched {
                return true;
            }
        }
        false
    }
}

fn compile_patterns(patterns: &[String]) -> Vec<ExcludePattern> {
    patterns
        .iter()
        .filter_map(|p| ExcludePattern::parse(p))
        .collect()
}

fn is_under_root(path: &str, root: &str) -> bool {
    root == REPO_ROOT
        || path == root
        || path
            .strip_prefix(root)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// The last matching pattern decides.
fn is_excluded(path: &str, patterns: &[ExcludePattern]) -> bool {
    patterns.iter().fold(false, |excluded, p| {
        if p.matches(path) { !p.negated } else { excluded }
    })
}
