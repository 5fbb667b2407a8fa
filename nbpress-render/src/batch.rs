//! Batch driver
//!
//! Converts a fixed list of notebooks one after another. A failing entry is
//! logged and recorded in the [`BatchReport`]; it never stops the run.

use crate::convert::convert_with_options;
use crate::error::BatchError;
use crate::html::HtmlOptions;
use crate::storage::Storage;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// One notebook to publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookEntry {
    /// Notebook file, relative to the source root
    pub source: PathBuf,
    /// Output directory name and lookup key
    pub slug: String,
    /// Display title of the rendered page
    pub title: String,
}

impl NotebookEntry {
    pub fn new(source: impl Into<PathBuf>, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            slug: slug.into(),
            title: title.into(),
        }
    }

    fn validate(&self) -> Result<(), BatchError> {
        if self.slug.trim().is_empty() {
            return Err(BatchError::InvalidEntry(format!(
                "entry for '{}' has no slug",
                self.source.display()
            )));
        }
        if self.source.as_os_str().is_empty() {
            return Err(BatchError::InvalidEntry(format!(
                "entry '{}' has no source file",
                self.slug
            )));
        }
        Ok(())
    }
}

/// Where sources are read from and pages are written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSettings {
    pub source_root: PathBuf,
    pub output_root: PathBuf,
    /// File name written inside each slug directory
    pub output_file: String,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("notebooks"),
            output_root: PathBuf::from("public/notebooks"),
            output_file: "index.html".to_string(),
        }
    }
}

impl BatchSettings {
    pub fn source_path(&self, entry: &NotebookEntry) -> PathBuf {
        self.source_root.join(&entry.source)
    }

    /// `<output_root>/<slug>/<output_file>`
    pub fn output_path(&self, entry: &NotebookEntry) -> PathBuf {
        self.output_root.join(&entry.slug).join(&self.output_file)
    }
}

#[derive(Debug)]
pub struct Converted {
    pub slug: String,
    pub output: PathBuf,
}

#[derive(Debug)]
pub struct Skipped {
    pub slug: String,
    pub error: BatchError,
}

/// Outcome of a batch run, in entry order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<Converted>,
    pub skipped: Vec<Skipped>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "converted {}, skipped {}",
            self.converted.len(),
            self.skipped.len()
        )
    }
}

/// Convert every entry, writing each page through `storage`.
///
/// `options` supplies everything but the title, which comes from each entry
/// (falling back to the slug when blank).
pub fn run_batch(
    storage: &dyn Storage,
    entries: &[NotebookEntry],
    settings: &BatchSettings,
    options: &HtmlOptions,
) -> BatchReport {
    let mut report = BatchReport::default();
    let mut seen = HashSet::new();

    for entry in entries {
        let source = settings.source_path(entry);
        let result = if seen.insert(entry.slug.as_str()) {
            convert_entry(storage, entry, &source, settings, options)
        } else {
            // A later entry must not overwrite an earlier page.
            Err(BatchError::InvalidEntry(format!(
                "slug '{}' is already used by an earlier entry",
                entry.slug
            )))
        };
        match result {
            Ok(output) => {
                info!(slug = %entry.slug, output = %output.display(), "converted notebook");
                report.converted.push(Converted {
                    slug: entry.slug.clone(),
                    output,
                });
            }
            Err(error) => {
                warn!(
                    slug = %entry.slug,
                    source = %source.display(),
                    %error,
                    "skipping notebook"
                );
                report.skipped.push(Skipped {
                    slug: entry.slug.clone(),
                    error,
                });
            }
        }
    }

    report
}

fn convert_entry(
    storage: &dyn Storage,
    entry: &NotebookEntry,
    source: &Path,
    settings: &BatchSettings,
    options: &HtmlOptions,
) -> Result<PathBuf, BatchError> {
    entry.validate()?;

    let mut options = options.clone();
    options.title = if entry.title.trim().is_empty() {
        entry.slug.clone()
    } else {
        entry.title.clone()
    };

    let html = convert_with_options(storage, source, &options)?;
    let output = settings.output_path(entry);
    storage
        .write(&output, html.as_bytes())
        .map_err(|source| BatchError::Write {
            path: output.clone(),
            source,
        })?;
    Ok(output)
}
