//! Format lookup by name, site alias or file extension.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::{GazelleFormat, HtmlFormat, NexusPhpFormat, TreeFormat};
use crate::tree::Node;
use std::collections::HashMap;
use std::path::Path;

/// Site names and the dialect each one accepts.
pub const SITE_ALIASES: &[(&str, &str)] = &[
    ("ops", "gazelle"),
    ("red", "gazelle"),
    ("dic", "gazelle"),
    ("opencd", "nexusphp"),
    ("tjupt", "nexusphp"),
];

/// Registered formats, keyed by [`Format::name`].
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Adds `format`, replacing any format registered under the same name.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Maps a site name onto the dialect it accepts. Registered names and
    /// unknown names come back unchanged.
    pub fn resolve_alias<'a>(&self, name: &'a str) -> &'a str {
        if self.formats.contains_key(name) {
            return name;
        }
        SITE_ALIASES
            .iter()
            .find(|(site, _)| site.eq_ignore_ascii_case(name))
            .map(|(_, dialect)| *dialect)
            .unwrap_or(name)
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(self.resolve_alias(name))
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(self.resolve_alias(name))
    }

    /// Registered names, sorted.
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// First format, by name, claiming the file's extension.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = Path::new(filename).extension()?.to_str()?;
        self.list_formats().into_iter().find(|name| {
            self.formats
                .get(name)
                .is_some_and(|format| format.file_extensions().contains(&extension))
        })
    }

    pub fn parse(&self, source: &str, format: &str) -> Result<Vec<Node>, FormatError> {
        self.parse_with_options(source, format, &HashMap::new())
    }

    /// Imports `source`, passing extra parameters such as `base-url` to the format.
    pub fn parse_with_options(
        &self,
        source: &str,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<Vec<Node>, FormatError> {
        let found = self.get(format)?;
        if !found.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support parsing"
            )));
        }
        found.parse_with_options(source, options)
    }

    pub fn serialize(&self, nodes: &[Node], format: &str) -> Result<String, FormatError> {
        let found = self.get(format)?;
        if !found.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support serialization"
            )));
        }
        found.serialize(nodes)
    }

    /// Html import without a base URL, both dialects and the JSON tree.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(HtmlFormat::default());
        registry.register(GazelleFormat);
        registry.register(NexusPhpFormat);
        registry.register(TreeFormat);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
