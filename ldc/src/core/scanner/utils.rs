// src/core/scanner/utils.rs
use glob::{MatchOptions, Pattern};
use std::sync::LazyLock;

static TEX_FILE: LazyLock<Pattern> =
    LazyLock::new(|| Pattern::new("*.tex").expect("valid tex glob"));

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Whether a walked entry is a LaTeX source: a file or a symlink whose name
/// ends in `.tex`, in any letter case.
///
/// Symlinks are not resolved here; the scanner opens them like any file.
/// Names that are not valid UTF-8 are matched on their lossy form.
pub fn is_tex_file(entry: &walkdir::DirEntry) -> bool {
    let file_type = entry.file_type();
    (file_type.is_file() || file_type.is_symlink())
        && TEX_FILE.matches_with(&entry.file_name().to_string_lossy(), MATCH_OPTIONS)
}
