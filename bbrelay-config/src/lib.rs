//! Shared configuration loader for the bbrelay toolchain.
//!
//! `defaults/bbrelay.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`BbrelayConfig`].

use bbrelay_babel::formats::HtmlFormat;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use url::Url;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/bbrelay.default.toml");

/// Top-level configuration consumed by bbrelay applications.
#[derive(Debug, Clone, Deserialize)]
pub struct BbrelayConfig {
    pub import: ImportConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

/// HTML import knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    pub base_url: String,
}

impl ImportConfig {
    /// The configured base URL, `None` when left empty.
    pub fn base_url(&self) -> Result<Option<Url>, url::ParseError> {
        let raw = self.base_url.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        Url::parse(raw).map(Some)
    }

    /// An HTML importer resolving against the configured base URL.
    pub fn html_format(&self) -> Result<HtmlFormat, url::ParseError> {
        Ok(HtmlFormat::new(self.base_url()?))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub dialect: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
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
    pub fn build(self) -> Result<BbrelayConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BbrelayConfig, ConfigError> {
    Loader::new().build()
}
