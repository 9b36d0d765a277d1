use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(&dir, "short.tex", "one two three")?;
    create_test_file(&dir, "long.tex", "寶寶寶寶寶 test test test")?;
    create_test_file(&dir, "chapters/middle.tex", "\\section{Intro} 前言")?;

    create_test_file(&dir, "notes.md", "not latex at all, plenty of words here")?;
    create_test_file(&dir, "refs.bib", "@book{key, title={Ignored}}")?;

    Ok(dir)
}
