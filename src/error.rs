//! Error types for the organizer.
//!
//! Every variant carries the path it failed on. The binary adds run-level
//! context on top with anyhow.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrganizeError>;

#[derive(Error, Debug)]
pub enum OrganizeError {
    /// Input path missing, unreadable, or a directory below it could not be listed
    #[error("failed to walk input path {}: {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read modification time of {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to format modification time of {}: {source}", .path.display())]
    Timestamp {
        path: PathBuf,
        #[source]
        source: time::error::Format,
    },

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to move {} to {}: {source}", .from.display(), .to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl OrganizeError {
    /// The file or directory the error is about.
    pub fn path(&self) -> &std::path::Path {
        match self {
            OrganizeError::Walk { source, root } => source.path().unwrap_or(root.as_path()),
            OrganizeError::Metadata { path, .. }
            | OrganizeError::Timestamp { path, .. }
            | OrganizeError::CreateDir { path, .. } => path.as_path(),
            OrganizeError::Move { from, .. } => from.as_path(),
        }
    }
}
