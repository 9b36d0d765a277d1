// src/lib.rs
//! Counts Chinese characters and English words in a tree of LaTeX sources.
//!
//! Each line of every `.tex` file is cleaned of comments, environment
//! delimiters and command markup before counting, so the numbers follow the
//! prose rather than the markup.
pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, run, usage};
pub use crate::core::cleaner::{
    clean_line, strip_commands, strip_comment, strip_environments, unwrap_decorations,
};
pub use crate::core::counter::{count_chinese, count_english, count_line};
pub use crate::core::scanner::{scan_directory, scan_file};
pub use crate::error::ScanError;
pub use crate::models::{FileRecord, LineCounts, ScanTotals};
pub use crate::utils::{display_name, print_table, render_table};
