//! Shared configuration loader for nbpress.
//!
//! `defaults/nbpress.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`PressConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use nbpress_render::{BatchSettings, BoilerplateFilter, HtmlOptions, NotebookEntry};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/nbpress.default.toml");

/// Top-level configuration consumed by nbpress.
#[derive(Debug, Clone, Deserialize)]
pub struct PressConfig {
    pub paths: PathsConfig,
    pub render: RenderConfig,
    pub filter: FilterConfig,
    pub notebooks: Vec<NotebookEntryConfig>,
}

/// Source and output locations.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    pub source_root: PathBuf,
    pub output_root: PathBuf,
    pub output_file: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub sections: bool,
    /// Path to extra CSS; empty string disables it.
    pub custom_css: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    pub extra_markers: Vec<String>,
}

/// One `[[notebooks]]` record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotebookEntryConfig {
    pub source: PathBuf,
    pub slug: String,
    pub title: String,
}

impl From<&NotebookEntryConfig> for NotebookEntry {
    fn from(config: &NotebookEntryConfig) -> Self {
        NotebookEntry::new(
            config.source.clone(),
            config.slug.clone(),
            config.title.clone(),
        )
    }
}

impl From<&PathsConfig> for BatchSettings {
    fn from(config: &PathsConfig) -> Self {
        BatchSettings {
            source_root: config.source_root.clone(),
            output_root: config.output_root.clone(),
            output_file: config.output_file.clone(),
        }
    }
}

impl PressConfig {
    /// The configured notebook list, in declaration order.
    pub fn entries(&self) -> Vec<NotebookEntry> {
        self.notebooks.iter().map(NotebookEntry::from).collect()
    }

    pub fn batch_settings(&self) -> BatchSettings {
        BatchSettings::from(&self.paths)
    }

    /// Rendering options without a title (the batch driver sets one per entry)
    /// and without custom CSS (reading the file is left to the caller).
    pub fn html_options(&self) -> HtmlOptions {
        HtmlOptions::default()
            .with_sections(self.render.sections)
            .with_filter(BoilerplateFilter::new().with_extra_markers(&self.filter.extra_markers))
    }

    pub fn custom_css_path(&self) -> Option<&Path> {
        let trimmed = self.render.custom_css.trim();
        (!trimmed.is_empty()).then(|| Path::new(trimmed))
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<PressConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<PressConfig, ConfigError> {
    Loader::new().build()
}
