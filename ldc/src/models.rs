// src/models.rs
pub mod file_record;
pub mod line_counts;
pub mod scan_totals;

pub use file_record::FileRecord;
pub use line_counts::LineCounts;
pub use scan_totals::ScanTotals;
