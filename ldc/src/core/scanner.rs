// src/core/scanner.rs
pub mod file;
pub mod walk;

mod utils;

#[cfg(test)]
pub mod test_utils;

pub use file::scan_file;
pub use walk::scan_directory;
