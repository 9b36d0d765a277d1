// src/core/scanner/file.rs
use std::fs::File;
use std::io::{BufRead as _, BufReader};
use std::path::Path;

use tracing::debug;

use crate::core::cleaner::clean_line;
use crate::core::counter::count_line;
use crate::error::ScanError;
use crate::models::{FileRecord, LineCounts};

/// Cleans and counts a single file, streaming it one line at a time.
///
/// Line endings (`\n` or `\r\n`) are dropped before cleaning. Bytes that are
/// not valid UTF-8 are replaced with U+FFFD and never count as a word.
///
/// # Errors
///
/// * [`ScanError::Open`] if the file cannot be opened
/// * [`ScanError::Read`] if reading fails part way through; no partial
///   counts are returned
#[inline]
pub fn scan_file(path: &Path) -> Result<FileRecord, ScanError> {
    let file = File::open(path).map_err(|source| ScanError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    let mut counts = LineCounts::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| ScanError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        if read == 0 {
            break;
        }

        let line = String::from_utf8_lossy(trim_line_ending(&buf));
        counts = counts.add(count_line(&clean_line(&line)));
    }

    debug!(
        path = %path.display(),
        chinese = counts.chinese,
        english = counts.english,
        "scanned file"
    );
    Ok(FileRecord::new(path.to_path_buf(), counts))
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
