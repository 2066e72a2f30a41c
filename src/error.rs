//! Error kinds raised by the build steps

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list directory {}: {source}", .path.display())]
    DirectoryListing {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Invalid code working with FF remote rules in {}: {reason}", .path.display())]
    InvalidPreload { path: PathBuf, reason: String },

    #[error("Unknown browser: {0}")]
    UnknownBrowser(String),
}

impl BuildError {
    pub fn io(action: &'static str, path: &Path, source: std::io::Error) -> Self {
        BuildError::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type BuildResult<T> = std::result::Result<T, BuildError>;
