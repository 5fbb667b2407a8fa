//! Notebook document model (nbformat 4 subset)
//!
//! Only the fields the renderer needs are modelled. Unknown cell and output
//! kinds deserialize into catch-all variants so a notebook produced by a newer
//! Jupyter release still converts; they are simply not rendered.

use crate::error::{ConvertError, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// A parsed notebook: the ordered cell sequence and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
}

/// One notebook cell, tagged by `cell_type`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    Code {
        #[serde(default)]
        source: MultilineText,
        #[serde(default)]
        outputs: Vec<Output>,
    },
    Markdown {
        #[serde(default)]
        source: MultilineText,
    },
    Raw {
        #[serde(default)]
        source: MultilineText,
    },
    #[serde(other)]
    Unknown,
}

impl Cell {
    /// Short name of the cell kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Cell::Code { .. } => "code",
            Cell::Markdown { .. } => "markdown",
            Cell::Raw { .. } => "raw",
            Cell::Unknown => "unknown",
        }
    }
}

/// One entry of a code cell's `outputs`, tagged by `output_type`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "output_type", rename_all = "snake_case")]
pub enum Output {
    Stream {
        #[serde(default)]
        name: String,
        #[serde(default)]
        text: MultilineText,
    },
    ExecuteResult {
        #[serde(default)]
        data: MimeBundle,
    },
    DisplayData {
        #[serde(default)]
        data: MimeBundle,
    },
    Error {
        #[serde(default)]
        ename: String,
        #[serde(default)]
        evalue: String,
        #[serde(default)]
        traceback: Vec<String>,
    },
    #[serde(other)]
    Unknown,
}

/// Text stored either as one string or as a list of line fragments.
///
/// nbformat allows both; fragments are concatenated as-is (they carry their
/// own trailing newlines).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultilineText(String);

impl MultilineText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for MultilineText {
    fn from(s: &str) -> Self {
        MultilineText(s.to_string())
    }
}

impl<'de> Deserialize<'de> for MultilineText {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            One(String),
            Many(Vec<String>),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::One(text) => MultilineText(text),
            Repr::Many(parts) => MultilineText(parts.concat()),
        })
    }
}

/// MIME type → content mapping of a rich output.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct MimeBundle(BTreeMap<String, Value>);

impl MimeBundle {
    /// Textual content stored under `mime`, if any.
    ///
    /// Strings and line lists are returned as text; any other JSON value
    /// (e.g. `application/json` payloads) is returned as compact JSON.
    pub fn get(&self, mime: &str) -> Option<String> {
        match self.0.get(mime)? {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            Value::Array(items) if items.iter().all(Value::is_string) => Some(
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .concat(),
            ),
            other => Some(other.to_string()),
        }
    }

    pub fn contains(&self, mime: &str) -> bool {
        self.0.contains_key(mime)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for MimeBundle {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        MimeBundle(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Parse raw notebook bytes read from `path`.
///
/// # Errors
///
/// Returns [`ConvertError::MalformedDocument`] when the bytes are not UTF-8,
/// not JSON, or lack the `cells` sequence.
pub fn parse_notebook(bytes: &[u8], path: &Path) -> Result<Notebook> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ConvertError::malformed(path, format!("not valid UTF-8: {e}")))?;
    parse_notebook_from_str(text).map_err(|e| ConvertError::malformed(path, e))
}

/// Parse a notebook from JSON text.
pub fn parse_notebook_from_str(content: &str) -> serde_json::Result<Notebook> {
    serde_json::from_str(content.trim_start_matches('\u{feff}'))
}
