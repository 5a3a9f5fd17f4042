//! HTML format implementation
//!
//! This module reconstructs the canonical tree from HTML as rendered by the
//! tracker themes. It is import-only: nothing is ever written back as HTML.
//!
//! # Library Choice
//!
//! We use the `html5ever` + `markup5ever_rcdom` pair for parsing:
//! - `html5ever`: Browser-grade HTML5 parser from the Servo project
//! - `markup5ever_rcdom`: Reference-counted DOM tree implementation
//!
//! Rendered descriptions are tag soup (unclosed paragraphs, stray table rows),
//! so a WHATWG tree builder is the only sane entry point.
//!
//! # Element Mapping Table
//!
//! | HTML                                         | Canonical node                       | Notes                                   |
//! |----------------------------------------------|--------------------------------------|-----------------------------------------|
//! | text                                         | `#text`                              | Runs merged, whitespace collapsed       |
//! | `<br>`                                       | `\n` appended to the previous text   |                                         |
//! | `<ul>` / `<ol>`                              | `ul` / `ol` of `li`                  | One item per child element              |
//! | `<table class="hide">`                       | `#collapse`                          | Row 1 is the title, row 2 the body      |
//! | `<table>`                                    | `table` → `tr` → `td`                | `<caption>` becomes a centered line     |
//! | `<blockquote>`, `<q>`                        | `quote` (untitled)                   |                                         |
//! | `<fieldset><legend>`                         | `quote` titled by the legend         |                                         |
//! | `<pre>`                                      | `pre`                                | Text kept verbatim                      |
//! | `<font face size color>`                     | nested `font`                        | face innermost                          |
//! | `<h1>`…`<h6>`                                | `h`                                  |                                         |
//! | `<a onclick="QuoteJump…">` + `<blockquote>`  | `quote` titled by the anchor         | Siblings in between are consumed        |
//! | `.quoteheader` + `<blockquote>`              | `quote` titled by the header         |                                         |
//! | `<strong>` + spoiler toggle + `<blockquote>` | `#collapse`                          | Three trailing siblings are consumed    |
//! | `.codetop` + code body (+ `.codemain`)       | body children, spliced               |                                         |
//! | `<a href>`                                   | `url`                                | Resolved against the base URL           |
//! | `<img class="listicon">`                     | empty `li`                           |                                         |
//! | `<img>`                                      | `img`                                | `src` resolved, `alt` kept              |
//! | `<hr>`                                       | `hr`                                 |                                         |
//! | `<b>`, `<i>`, `<u>`, `<s>`, `<code>`, …      | `b`, `i`, `u`, `s`, `code`, …        | Includes `strong`, `em`, `ins`, `del`, `tt` |
//! | `<center>`, `<marquee>`                      | `align=center`                       |                                         |
//! | `<span class="mask">`                        | `#spoiler`                           |                                         |
//! | `<p class="sub">`                            | `h=2`                                |                                         |
//! | anything else                                | style/class wrappers (see `style`)   | Dropped when nothing is recognized      |
//!
//! # Failure Modes
//!
//! Lookahead idioms whose counterpart never shows up, comments, and foreign
//! (SVG/MathML) elements abort the import with an [`ImportError`]. Input that
//! is merely unrecognized degrades and is reported in [`Import::diagnostics`].

mod dom;
mod importer;
mod style;

pub use style::{InlineStyle, Layer};

use crate::error::{FormatError, ImportError};
use crate::format::Format;
use crate::tree::Node;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, RcDom};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;
use url::Url;

/// Result of a successful import.
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub nodes: Vec<Node>,
    /// Non-fatal degradations, in document order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Input the importer did not recognize and degraded instead of failing on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A `font-size` with no matching `size` class.
    UnrecognizedFontSize { element: String, value: String },
    /// An element with no recognized tag, style or class. Spans keep their
    /// children; everything else is dropped.
    UnrecognizedElement { element: String, children_kept: bool },
    /// A relative URL that could not be joined onto the base.
    UnresolvedUrl { url: String, reason: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnrecognizedFontSize { element, value } => {
                write!(f, "unrecognized font-size '{value}' on {element}")
            }
            Diagnostic::UnrecognizedElement {
                element,
                children_kept: true,
            } => write!(f, "unrecognized element {element}, keeping its children"),
            Diagnostic::UnrecognizedElement { element, .. } => {
                write!(f, "unrecognized element {element} dropped")
            }
            Diagnostic::UnresolvedUrl { url, reason } => {
                write!(f, "cannot resolve '{url}' against the base URL: {reason}")
            }
        }
    }
}

/// Imports the children of an already parsed element.
pub fn import_element(root: &Handle, base: &Url) -> Result<Import, ImportError> {
    importer::Importer::new(Some(base)).run(root)
}

/// Parses an HTML fragment and imports the contents of its `<body>`.
pub fn import_fragment(html: &str, base: &Url) -> Result<Import, FormatError> {
    import_source(html, Some(base))
}

fn import_source(html: &str, base: Option<&Url>) -> Result<Import, FormatError> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| FormatError::ParseError(format!("HTML parsing failed: {e}")))?;
    let body = find_body(&dom.document)
        .ok_or_else(|| FormatError::ParseError("document has no <body>".to_string()))?;

    let import = importer::Importer::new(base).run(&body)?;
    debug!(
        nodes = import.nodes.len(),
        diagnostics = import.diagnostics.len(),
        "imported HTML fragment"
    );
    Ok(import)
}

fn find_body(handle: &Handle) -> Option<Handle> {
    if dom::is_tag(handle, "body") {
        return Some(handle.clone());
    }
    handle
        .children
        .borrow()
        .iter()
        .find_map(find_body)
}

/// Format implementation for rendered HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    /// Base for relative links and image sources. Without one they are kept as written.
    base_url: Option<Url>,
}

impl HtmlFormat {
    pub fn new(base_url: Option<Url>) -> Self {
        Self { base_url }
    }

    pub fn with_base_url(base_url: Url) -> Self {
        Self::new(Some(base_url))
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Rendered tracker HTML (import only)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<Node>, FormatError> {
        Ok(import_source(source, self.base_url.as_ref())?.nodes)
    }

    fn parse_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<Vec<Node>, FormatError> {
        let mut base_url = self.base_url.clone();
        for (key, value) in options {
            match key.as_str() {
                "base-url" => {
                    let url = Url::parse(value).map_err(|e| {
                        FormatError::ParseError(format!("Invalid base-url '{value}': {e}"))
                    })?;
                    base_url = Some(url);
                }
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'html' does not support option '{other}'"
                    )))
                }
            }
        }
        Ok(import_source(source, base_url.as_ref())?.nodes)
    }
}
