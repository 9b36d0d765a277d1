// tests/integration_tests/scanning_test.rs
use super::common::{create_test_file, setup_thesis};
use anyhow::Result;
use ldc::{FileRecord, ScanTotals, render_table, scan_directory};

fn find<'a>(files: &'a [FileRecord], suffix: &str) -> &'a FileRecord {
    files
        .iter()
        .find(|f| f.path.ends_with(suffix))
        .unwrap_or_else(|| panic!("{suffix} should be scanned"))
}

#[test]
fn test_thesis_counts() -> Result<()> {
    let temp_dir = setup_thesis()?;

    let files = scan_directory(temp_dir.path())?;
    assert_eq!(files.len(), 4, "only .tex files, any case");

    let intro = find(&files, "chapters/intro.tex");
    assert_eq!((intro.chinese, intro.english), (8, 2));

    let method = find(&files, "chapters/method.TEX");
    assert_eq!((method.chinese, method.english), (4, 6));

    let notes = find(&files, "appendix/notes.tex");
    assert_eq!((notes.chinese, notes.english), (0, 4), "cite keys are unwrapped, not dropped");

    let main = find(&files, "main.tex");
    assert_eq!(main.total(), 0);

    Ok(())
}

#[test]
fn test_thesis_order() -> Result<()> {
    let temp_dir = setup_thesis()?;

    let files = scan_directory(temp_dir.path())?;
    let totals: Vec<u64> = files.iter().map(FileRecord::total).collect();
    assert_eq!(totals, vec![10, 10, 4, 0]);

    // intro and method tie; `chapters/intro.tex` sorts before `chapters/method.TEX`.
    assert!(files[0].path.ends_with("chapters/intro.tex"));
    assert!(files[1].path.ends_with("chapters/method.TEX"));
    Ok(())
}

#[test]
fn test_thesis_totals_and_table() -> Result<()> {
    let temp_dir = setup_thesis()?;

    let files = scan_directory(temp_dir.path())?;
    let totals = ScanTotals::from_records(&files);
    assert_eq!(totals.chinese, 12);
    assert_eq!(totals.english, 12);

    let table = render_table(&files);
    assert!(table.contains("| intro.tex            |            8 |            2 |           10 |"));
    assert!(table.contains("| Total                |           12 |           12 |           24 |"));
    Ok(())
}

#[test]
fn test_paths_are_rooted_at_scan_dir() -> Result<()> {
    let temp_dir = setup_thesis()?;

    let files = scan_directory(temp_dir.path())?;
    assert!(files.iter().all(|f| f.path.starts_with(temp_dir.path())));
    Ok(())
}

#[test]
fn test_deeply_nested_file() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    create_test_file(temp_dir.path(), "a/b/c/d/e/deep.tex", "深層 nested")?;

    let files = scan_directory(temp_dir.path())?;
    assert_eq!(files.len(), 1);
    assert_eq!((files[0].chinese, files[0].english), (2, 1));
    Ok(())
}
