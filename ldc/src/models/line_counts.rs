// src/models/line_counts.rs

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LineCounts {
    pub chinese: u64,
    pub english: u64,
}

impl LineCounts {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chinese: 0,
            english: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn add(self, other: Self) -> Self {
        Self {
            chinese: self.chinese.saturating_add(other.chinese),
            english: self.english.saturating_add(other.english),
        }
    }
}
