//! Rich-text conversion between tracker sites
//!
//!     This crate moves release descriptions between community trackers. Every site family renders
//!     the same semantic content (bold, quotes, spoilers, images, tables, lists, headings) with its
//!     own HTML idiom, and expects it back in its own BBCode dialect.
//!
//!     TLDR: For format authors:
//!         - Everything goes through the canonical tree (./tree). Importers produce it, serializers consume it.
//!         - Importers recognize intent, not markup: tag name, inline style, class and sibling lookahead, in that order.
//!         - Serializers never fail on a valid tree. A construct the dialect lacks is remapped or degraded and logged.
//!         - Dialect control sequences inside text must be escaped so that text survives the trip.
//!
//! Architecture
//!
//!     HTML fragment ──▶ html importer ──▶ Vec<Node> ──▶ gazelle / nexusphp serializer ──▶ markup
//!                                            │
//!                                            └──▶ tree (JSON) ──▶ release record
//!
//!     This is a pure lib, that is, it powers bbrelay-cli but is shell agnostic: no code here should
//!     suppose a shell environment, be it std print, env vars etc. Diagnostics go through `tracing`.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── record.rs               # Release record and description joining
//!     ├── tree                    # Canonical tree model + JSON form
//!     ├── common                  # Text-run and bracket-markup helpers
//!     ├── formats
//!     │   ├── html                # Importer (dom queries, style heuristics, cursor walker)
//!     │   ├── gazelle             # Dialect serializer for OPS / RED / DIC
//!     │   ├── nexusphp            # Dialect serializer for OpenCD / TJUPT
//!     │   └── tree                # JSON tree, both directions
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── common
//!     ├── <format>
//!     │   └── <testname>.rs
//!     └── fixtures
//!         └── <theme>_<idiom>.html
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Core Algorithms
//!
//!     The hard part is the import. Rendered descriptions are presentation-layer HTML from at least
//!     four unrelated themes, and several idioms span more than one sibling (a header element followed
//!     later by the blockquote holding the body). The importer snapshots each child list and walks it
//!     with an explicit cursor so those idioms can consume their counterparts; everything else is a
//!     fold of recognized style layers around the element's children. See ./formats/html.
//!
//!     Serialization is a single recursive walk per dialect. Gazelle renames; NexusPHP remaps
//!     headings to sizes, collapses to hide, and lays lists out as indented lines.
//!
//! Formats
//!
//!     Format specific capabilities are implemented with the Format trait. Formats have a name, file
//!     extensions, and parse() and/or serialize(). See the trait def [./format.rs ]
//!     - Format trait: Uniform interface for all formats (parsing and/or serialization)
//!     - FormatRegistry: Centralized discovery and selection of formats, plus site aliases
//!     - Format implementations: html (in), gazelle and nexusphp (out), tree (both)
//!
//!     Round trips are not lossless: the dialects are less expressive than the tree, and the tree is
//!     less expressive than the HTML.
//!
//! Library Choices
//!
//!     HTML parsing is html5ever + markup5ever_rcdom, URL joining is the `url` crate, and the tree's
//!     record form is serde. We never hand-roll an HTML tokenizer.
//!
pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod record;
pub mod registry;
pub mod tree;

pub use error::{FormatError, Idiom, ImportError};
pub use format::Format;
pub use formats::{Diagnostic, Import};
pub use record::{join_descriptions, Description, Record};
pub use registry::FormatRegistry;
pub use tree::{Alignment, Node, NodeKind};

/// Imports an HTML fragment and serializes it for the named dialect or site.
pub fn convert_html(html: &str, base: &url::Url, target: &str) -> Result<String, FormatError> {
    let registry = FormatRegistry::default();
    let import = formats::import_fragment(html, base)?;
    registry.serialize(&import.nodes, target)
}
