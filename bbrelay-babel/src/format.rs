//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for importing source text into the canonical tree
//! and serializing the tree into a dialect.

use crate::error::FormatError;
use crate::tree::Node;
use std::collections::HashMap;

/// Trait for markup formats
///
/// Implementors convert between a string representation and the canonical node sequence.
/// Formats can support parsing, serialization, or both. Rendered HTML is parse-only, the
/// BBCode dialects are serialize-only.
///
/// # Examples
///
/// ```ignore
/// struct MyDialect;
///
/// impl Format for MyDialect {
///     fn name(&self) -> &str {
///         "my-dialect"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, nodes: &[Node]) -> Result<String, FormatError> {
///         // Walk the nodes and emit markup
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "gazelle", "nexusphp")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["html", "htm"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → nodes)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (nodes → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a canonical node sequence
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support parsing should override this method.
    fn parse(&self, _source: &str) -> Result<Vec<Node>, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Parse source text, optionally using extra parameters (e.g. `base-url`).
    ///
    /// The default implementation delegates to [`Format::parse`] when no options are given.
    fn parse_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<Vec<Node>, FormatError> {
        if options.is_empty() {
            self.parse(source)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }

    /// Serialize a canonical node sequence into source text
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support serialization should override this method.
    fn serialize(&self, _nodes: &[Node]) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
