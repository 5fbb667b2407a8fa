//! Batch driver against the real filesystem.

use crate::common::{code, markdown, notebook_json, stream};
use nbpress_render::{
    run_batch, BatchError, BatchSettings, ConvertError, FsStorage, HtmlOptions, NotebookEntry,
};
use std::fs;
use tempfile::tempdir;

fn write_notebook(dir: &std::path::Path, name: &str, marker: &str) {
    let json = notebook_json(vec![
        markdown(&format!("# {marker}")),
        code("print('ok')", vec![stream("ok\n")]),
    ]);
    fs::write(dir.join(name), json).unwrap();
}

#[test]
fn missing_entry_does_not_stop_the_batch() {
    let dir = tempdir().unwrap();
    let sources = dir.path().join("notebooks");
    fs::create_dir_all(&sources).unwrap();
    write_notebook(&sources, "first.ipynb", "First analysis");
    write_notebook(&sources, "third.ipynb", "Third analysis");

    let settings = BatchSettings {
        source_root: sources,
        output_root: dir.path().join("public"),
        output_file: "index.html".to_string(),
    };
    let entries = vec![
        NotebookEntry::new("first.ipynb", "first", "First"),
        NotebookEntry::new("second.ipynb", "second", "Second"),
        NotebookEntry::new("third.ipynb", "third", "Third"),
    ];

    let report = run_batch(&FsStorage, &entries, &settings, &HtmlOptions::default());

    let converted: Vec<&str> = report.converted.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(converted, vec!["first", "third"]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].slug, "second");
    assert!(matches!(
        report.skipped[0].error,
        BatchError::Convert(ConvertError::MissingSource { .. })
    ));

    let first = fs::read_to_string(dir.path().join("public/first/index.html")).unwrap();
    assert!(first.contains("First analysis"));
    assert!(first.contains("<title>First</title>"));
    assert!(dir.path().join("public/third/index.html").is_file());
    assert!(!dir.path().join("public/second").exists());
}

#[test]
fn malformed_entry_writes_nothing() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("broken.ipynb"), "{\"cells\": [").unwrap();

    let settings = BatchSettings {
        source_root: dir.path().to_path_buf(),
        output_root: dir.path().join("out"),
        output_file: "index.html".to_string(),
    };
    let entries = vec![NotebookEntry::new("broken.ipynb", "broken", "Broken")];

    let report = run_batch(&FsStorage, &entries, &settings, &HtmlOptions::default());

    assert!(report.converted.is_empty());
    assert!(matches!(
        report.skipped[0].error,
        BatchError::Convert(ConvertError::MalformedDocument { .. })
    ));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn rerunning_overwrites_with_identical_bytes() {
    let dir = tempdir().unwrap();
    write_notebook(dir.path(), "nb.ipynb", "Stable");
    let settings = BatchSettings {
        source_root: dir.path().to_path_buf(),
        output_root: dir.path().join("out"),
        output_file: "page.html".to_string(),
    };
    let entries = vec![NotebookEntry::new("nb.ipynb", "stable", "Stable")];
    let output = dir.path().join("out/stable/page.html");

    run_batch(&FsStorage, &entries, &settings, &HtmlOptions::default());
    let first = fs::read(&output).unwrap();
    run_batch(&FsStorage, &entries, &settings, &HtmlOptions::default());
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}
