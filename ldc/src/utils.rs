// src/utils.rs
use std::fmt::Write as _;
use std::path::Path;

use unicode_width::{UnicodeWidthChar as _, UnicodeWidthStr as _};

use crate::models::{FileRecord, ScanTotals};

const NAME_WIDTH: usize = 20;
const ELLIPSIS: &str = "...";
const SEPARATOR: &str = "+----------------------+--------------+--------------+--------------+";
const HEADER: &str = "| File                 | Chinese Count| English Count| Total Count  |";

/// Base name of `path`, cut to fit the file column of the table.
///
/// Widths are terminal columns, so a CJK character takes two.
#[must_use]
pub fn display_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    if name.width() <= NAME_WIDTH {
        return name;
    }

    let budget = NAME_WIDTH - ELLIPSIS.len();
    let mut cut = String::new();
    let mut used = 0;
    for ch in name.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        cut.push(ch);
        used += w;
    }
    cut.push_str(ELLIPSIS);
    cut
}

fn pad_right(s: &str, width: usize) -> String {
    let visual = s.width();
    if visual >= width {
        s.to_owned()
    } else {
        format!("{s}{}", " ".repeat(width - visual))
    }
}

fn push_row(out: &mut String, label: &str, chinese: u64, english: u64, total: u64) {
    let _ = writeln!(
        out,
        "| {} | {chinese:>12} | {english:>12} | {total:>12} |",
        pad_right(label, NAME_WIDTH)
    );
}

/// Renders the per-file table followed by a Total row.
#[must_use]
pub fn render_table(files: &[FileRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{SEPARATOR}");
    let _ = writeln!(out, "{HEADER}");
    let _ = writeln!(out, "{SEPARATOR}");
    for file in files {
        push_row(
            &mut out,
            &display_name(&file.path),
            file.chinese,
            file.english,
            file.total(),
        );
    }

    let totals = ScanTotals::from_records(files);
    let _ = writeln!(out, "{SEPARATOR}");
    push_row(
        &mut out,
        "Total",
        totals.chinese,
        totals.english,
        totals.total(),
    );
    let _ = writeln!(out, "{SEPARATOR}");
    out
}

pub fn print_table(files: &[FileRecord]) {
    print!("{}", render_table(files));
}
