// src/models/scan_totals.rs
use crate::models::FileRecord;

/// Aggregate counts over every file of a scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanTotals {
    pub chinese: u64,
    pub english: u64,
}

impl ScanTotals {
    #[inline]
    #[must_use]
    pub fn from_records(records: &[FileRecord]) -> Self {
        records.iter().fold(Self::default(), |totals, record| Self {
            chinese: totals.chinese.saturating_add(record.chinese),
            english: totals.english.saturating_add(record.english),
        })
    }

    #[inline]
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.chinese.saturating_add(self.english)
    }
}
