//! Filesystem Materializer: the only place that mutates the disk.

use crate::error::{OrganizeError, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirOutcome {
    Created,
    AlreadyExists,
    /// dry run, nothing checked or created
    Skipped,
}

#[derive(Debug, Clone, Copy)]
pub struct Materializer {
    dry_run: bool,
}

impl Materializer {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Create `path` if it does not exist yet.
    ///
    /// Not recursive: the parent must already exist, otherwise this fails.
    pub fn ensure_directory(&self, path: &Path) -> Result<DirOutcome> {
        if self.dry_run {
            return Ok(DirOutcome::Skipped);
        }

        if path.exists() {
            debug!("{} already exists", path.display());
            return Ok(DirOutcome::AlreadyExists);
        }

        debug!("Creating {}...", path.display());
        fs::create_dir(path).map_err(|source| OrganizeError::CreateDir {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(DirOutcome::Created)
    }

    /// Rename `from` to `to`. The intended move is logged in dry run as well.
    ///
    /// An existing file at `to` is handled by the platform rename (replaced on Unix).
    pub fn move_file(&self, from: &Path, to: &Path) -> Result<()> {
        info!("moving to {}", to.display());
        if self.dry_run {
            return Ok(());
        }

        fs::rename(from, to).map_err(|source| OrganizeError::Move {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })
    }
}
