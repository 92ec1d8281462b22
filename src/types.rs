use serde::Serialize;
use std::ffi::OsString;
use std::path::PathBuf;
use time::OffsetDateTime;

/// One discovered file, consumed right after it is resolved.
#[derive(Clone, Debug)]
pub struct FileRecord {
    pub path: PathBuf,

    /// mtime, full sub-second precision
    pub modified_at: OffsetDateTime,
}

/// Where a file goes: `<directory>/<file_name>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Destination {
    pub directory: PathBuf,
    pub file_name: OsString,

    /// 1 = first file with this prefix, >1 = collision
    pub suffix: u32,
}

impl Destination {
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    pub fn is_collision(&self) -> bool {
        self.suffix > 1
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct MovedFile {
    pub from: PathBuf,
    pub to: PathBuf,
    pub suffix: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct FailedFile {
    pub path: PathBuf,
    pub error: String,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct RunSummary {
    pub dry_run: bool,

    /// files that got a destination (moved, or would be moved in dry run)
    pub processed: usize,
    pub collisions: usize,

    pub moves: Vec<MovedFile>,
    pub failures: Vec<FailedFile>,
}

impl RunSummary {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
