// src/core/scanner/walk.rs
use std::fs;
use std::path::Path;

use tracing::{info, trace};
use walkdir::WalkDir;

use crate::core::scanner::file::scan_file;
use crate::core::scanner::utils::is_tex_file;
use crate::error::ScanError;
use crate::models::FileRecord;

/// Scans every `.tex` file below `dir` and returns one record per file.
///
/// Entries are visited in file-name order, so files with equal totals keep a
/// stable, lexical order in the result. The result is sorted by total count,
/// largest first.
///
/// Symlinked directories are listed but never entered, so link cycles and
/// aliases inside the tree are harmless. A symlink named `*.tex` is opened
/// and scanned through its target.
///
/// # Arguments
///
/// * `dir` - The root directory of the LaTeX project
///
/// # Returns
///
/// * `Ok(Vec<FileRecord>)` - One record per `.tex` file; empty if there are none
///
/// # Errors
///
/// The first failure aborts the whole scan:
/// * [`ScanError::Root`] if `dir` does not exist or cannot be inspected
/// * [`ScanError::NotADirectory`] if `dir` is not a directory
/// * [`ScanError::Walk`] if traversal fails (permission denied on a subdirectory)
/// * [`ScanError::Open`] / [`ScanError::Read`] if a `.tex` file cannot be read
#[inline]
pub fn scan_directory(dir: &Path) -> Result<Vec<FileRecord>, ScanError> {
    let metadata = fs::metadata(dir).map_err(|source| ScanError::Root {
        path: dir.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    info!(root = %dir.display(), "scanning for .tex files");
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        trace!(path = %entry.path().display(), "visiting");
        if !is_tex_file(&entry) {
            continue;
        }

        files.push(scan_file(entry.path())?);
    }

    files.sort_by(|a, b| b.total().cmp(&a.total()));
    info!(files = files.len(), "scan complete");
    Ok(files)
}
