//! NexusPHP BBCode dialect
//!
//! Serialize-only. NexusPHP sites (OpenCD, TJUPT) have no heading, code or
//! collapse primitives and parse list markers line by line, so the serializer
//! remaps those constructs before emitting:
//!
//! | Canonical        | NexusPHP                                  |
//! |------------------|-------------------------------------------|
//! | `h=L`            | `[size=8-L]`                              |
//! | `code`           | `[font=monospace]`                        |
//! | `#spoiler`       | `[mask]`                                  |
//! | `#collapse=T`    | `[hide=T]`                                |
//! | `align=center`   | `[center]`                                |
//! | `align=left/right` | children only                           |
//! | `ul` / `ol`      | `[*] item` / `[*] N. item` lines, indented four spaces per level |
//! | `img`            | `[img=URL]`                               |
//! | `pre=T`          | `[pre]`                                   |
//!
//! Text is escaped by splicing U+200B inside the brackets of anything that
//! looks like a tag.

mod serializer;

pub use serializer::{escape_text, serialize};

use crate::error::FormatError;
use crate::format::Format;
use crate::tree::Node;

/// Format implementation for the NexusPHP dialect
#[derive(Debug, Clone, Copy, Default)]
pub struct NexusPhpFormat;

impl Format for NexusPhpFormat {
    fn name(&self) -> &str {
        "nexusphp"
    }

    fn description(&self) -> &str {
        "NexusPHP BBCode (OpenCD, TJUPT)"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, nodes: &[Node]) -> Result<String, FormatError> {
        Ok(serializer::serialize(nodes))
    }
}
