//! Errors raised while locating the repository and listing its paths

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("path '{}' does not exist", path.display())]
    NotFound {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("path '{}' is not inside a git repository", path.display())]
    NotARepository { path: PathBuf, source: git2::Error },
    #[error("repository at '{}' has no working directory", path.display())]
    BareRepository { path: PathBuf },
    #[error("path '{}' is outside the repository at '{}'", path.display(), workdir.display())]
    OutsideRepository { path: PathBuf, workdir: PathBuf },
    #[error("git error: {0}")]
    Git(#[from] git2::Error),
    #[error("error writing output: {0}")]
    Write(#[source] std::io::Error),
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::NotFound {
            path: path.into(),
            source,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
