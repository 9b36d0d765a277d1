// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of a directory scan. Every variant is fatal to the whole scan.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot access scan root {}", path.display())]
    Root { path: PathBuf, source: io::Error },

    #[error("scan root {} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("failed to traverse directory tree")]
    Walk(#[from] walkdir::Error),

    #[error("failed to open {}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to read {}", path.display())]
    Read { path: PathBuf, source: io::Error },
}
