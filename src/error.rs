//! Error taxonomy for colortree.
//!
//! Only run-level failures are errors. Unreadable directories during a walk
//! are rendered inline and never surface here, and bad numeric input is
//! handled inside the prompt loop.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    /// No root path from CLI, config or prompt
    #[error("No path provided.")]
    MissingPath,

    /// Root does not exist or is not a directory
    #[error("Invalid directory path: '{}'", .0.display())]
    InvalidPath(PathBuf),

    /// Config file or one of its fields could not be parsed
    #[error("Invalid config in {}: {reason}", path.display())]
    ConfigParse { path: PathBuf, reason: String },

    /// Config file could not be written
    #[error("Failed to write config {}: {source}", path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, TreeError>;
