use crate::error::{OrganizeError, Result};
use crate::types::FileRecord;
use std::fs;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use walkdir::WalkDir;

/// Every regular file under `root`, recursively. Directories are descended
/// into but not yielded; symlinks are neither followed nor yielded.
///
/// Entries of one directory come out sorted by file name so that collision
/// numbering is the same on every run.
pub fn walk_files(root: &Path) -> impl Iterator<Item = Result<PathBuf>> + '_ {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(e) if e.file_type().is_file() => Some(Ok(e.into_path())),
            Ok(_) => None,
            Err(source) => Some(Err(OrganizeError::Walk {
                root: root.to_path_buf(),
                source,
            })),
        })
}

/// Snapshot of `walk_files`, stopping at the first walk error.
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    walk_files(root).collect()
}

/// mtime (giữ nguyên phần lẻ dưới giây)
fn modified_at(meta: &fs::Metadata) -> std::io::Result<OffsetDateTime> {
    meta.modified().map(OffsetDateTime::from)
}

/// Tạo FileRecord từ path
pub fn stat_file(p: &Path) -> Result<FileRecord> {
    let meta = fs::metadata(p).map_err(|source| OrganizeError::Metadata {
        path: p.to_path_buf(),
        source,
    })?;
    let modified_at = modified_at(&meta).map_err(|source| OrganizeError::Metadata {
        path: p.to_path_buf(),
        source,
    })?;

    Ok(FileRecord {
        path: p.to_path_buf(),
        modified_at,
    })
}
