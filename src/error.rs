//! Error types for structure rendering

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while walking the tree or emitting the report.
///
/// Permission failures while listing a directory are recovered inside the
/// walker and never reach this type.
#[derive(Error, Debug)]
pub enum StructureError {
    #[error("root directory not found: {0}")]
    RootNotFound(PathBuf),

    #[error("root is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("IO error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report to '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report to stdout: {0}")]
    Stdout(#[source] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StructureError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StructureError>;
