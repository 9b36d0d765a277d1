// src/models/file_record.rs

use std::path::PathBuf;

use crate::models::LineCounts;

/// Counts for one scanned `.tex` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub chinese: u64,
    pub english: u64,
}

impl FileRecord {
    #[inline]
    #[must_use]
    pub const fn new(path: PathBuf, counts: LineCounts) -> Self {
        Self {
            path,
            chinese: counts.chinese,
            english: counts.english,
        }
    }

    /// Chinese characters plus English words; the sort key of a scan.
    #[inline]
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.chinese.saturating_add(self.english)
    }
}
