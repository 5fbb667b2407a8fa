//! The `convert` operation: one notebook file in, one HTML page out.

use crate::error::{ConvertError, Result};
use crate::html::{render_notebook, HtmlOptions};
use crate::notebook::parse_notebook;
use crate::storage::Storage;
use std::path::Path;

/// Convert the notebook at `path` into a complete HTML page titled `slug`.
///
/// # Errors
///
/// - [`ConvertError::MissingSource`] when the file cannot be read
/// - [`ConvertError::MalformedDocument`] when it is not a notebook
pub fn convert(storage: &dyn Storage, path: &Path, slug: &str) -> Result<String> {
    convert_with_options(storage, path, &HtmlOptions::new(slug))
}

/// Convert with explicit rendering options.
pub fn convert_with_options(
    storage: &dyn Storage,
    path: &Path,
    options: &HtmlOptions,
) -> Result<String> {
    let bytes = storage
        .read(path)
        .map_err(|source| ConvertError::MissingSource {
            path: path.to_path_buf(),
            source,
        })?;
    let notebook = parse_notebook(&bytes, path)?;
    Ok(render_notebook(&notebook, options))
}
