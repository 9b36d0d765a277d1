// src/core/counter.rs
use regex::Regex;
use std::sync::LazyLock;

use crate::models::LineCounts;

static HAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{Han}").expect("valid han regex"));
static ENGLISH_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]+").expect("valid english word regex"));

/// Counts Han-script code points, one per character.
#[inline]
#[must_use]
pub fn count_chinese(line: &str) -> u64 {
    u64::try_from(HAN.find_iter(line).count()).unwrap_or(u64::MAX)
}

/// Counts maximal runs of ASCII letters. Anything else separates words.
#[inline]
#[must_use]
pub fn count_english(line: &str) -> u64 {
    u64::try_from(ENGLISH_WORD.find_iter(line).count()).unwrap_or(u64::MAX)
}

/// Counts both categories on an already cleaned line.
#[inline]
#[must_use]
pub fn count_line(line: &str) -> LineCounts {
    LineCounts {
        chinese: count_chinese(line),
        english: count_english(line),
    }
}
