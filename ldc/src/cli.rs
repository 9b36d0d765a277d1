// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{CommandFactory as _, Parser};
use std::path::PathBuf;

use crate::core::scanner::scan_directory;
use crate::utils::print_table;

#[derive(Parser, Debug)]
#[command(name = "ldc", author, version, about, long_about = None)]
pub struct Args {
    /// Root directory of the LaTeX sources to count
    pub directory: PathBuf,
}

/// One-line usage text, printed when the arguments are wrong.
#[must_use]
pub fn usage() -> String {
    Args::command().render_usage().to_string()
}

/// Scans `args.directory` and prints the count table.
///
/// Nothing is printed unless every file was scanned successfully.
///
/// # Errors
///
/// Returns the scan error, with the directory as context, if the root is
/// unusable or any `.tex` file cannot be read.
pub fn run(args: &Args) -> Result<()> {
    let files = scan_directory(&args.directory).with_context(|| {
        format!(
            "Failed to scan directory: {}",
            args.directory.display()
        )
    })?;
    print_table(&files);
    Ok(())
}
