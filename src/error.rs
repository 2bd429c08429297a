//! Error types for content loading

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading the content tree
#[derive(Debug, Error)]
pub enum ContentError {
    /// A directory or file could not be listed or read
    #[error("failed to read `{}`", path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The frontmatter block is not valid YAML or does not match the schema
    #[error("invalid frontmatter in `{}`: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// The `date` field is not a calendar date
    #[error("invalid date `{value}` in `{}`", path.display())]
    InvalidDate { path: PathBuf, value: String },
}

impl ContentError {
    pub(crate) fn fs(path: &Path, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn parse(path: &Path, message: impl ToString) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }

    /// Path of the file or directory the error refers to
    pub fn path(&self) -> &Path {
        match self {
            Self::FileSystem { path, .. }
            | Self::Parse { path, .. }
            | Self::InvalidDate { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
