//! Error types for format operations

use thiserror::Error;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error while reading the source text
    #[error("Parse error: {0}")]
    ParseError(String),
    /// The importer hit a fatal structural anomaly
    #[error("Import error: {0}")]
    Import(#[from] ImportError),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested direction
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}

/// Multi-element HTML idioms whose counterpart must exist for the import to proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Idiom {
    /// Anchor with a `QuoteJump` click handler, paired with a later blockquote.
    NamedQuote,
    /// `.quoteheader` element, paired with a later blockquote.
    QuoteHeader,
    /// Bold label plus spoiler toggle anchor, paired with a later blockquote.
    SpoilerCollapse,
    /// `.codetop` leader, paired with the next element.
    CodeBlock,
    /// `table.hide`, which needs a title row and a body row.
    HiddenTable,
}

impl std::fmt::Display for Idiom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Idiom::NamedQuote => "named quote",
            Idiom::QuoteHeader => "quote header",
            Idiom::SpoilerCollapse => "spoiler collapse",
            Idiom::CodeBlock => "code block",
            Idiom::HiddenTable => "hidden table",
        };
        f.write_str(name)
    }
}

/// Fatal import failures. Each carries the offending node rendered as an opening tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("{idiom} idiom at {element} has no counterpart")]
    MissingCounterpart { idiom: Idiom, element: String },
    #[error("unsupported node {node}")]
    UnsupportedNode { node: String },
}
