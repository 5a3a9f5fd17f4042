//! Gazelle BBCode dialect
//!
//! Serialize-only. The Gazelle family (OPS, RED, DIC) understands nearly the
//! whole canonical vocabulary, so the serializer mostly renames.
//!
//! ## Mapping
//!
//! | Canonical            | Gazelle                        |
//! |----------------------|--------------------------------|
//! | text with a tag      | `[plain]text[/plain]`          |
//! | `li` in `ul` / `ol`  | `[*]` / `[#]`, one per line    |
//! | `img`                | `[img=URL]alt[/img]`           |
//! | `#spoiler`           | `[hide]…[/hide]`               |
//! | `#collapse=T`        | `[hide=T]…[/hide]`             |
//! | anything else        | `[tag]`, `[tag]…[/tag]`, `[tag=value]…[/tag]` |

mod serializer;

pub use serializer::serialize;

use crate::error::FormatError;
use crate::format::Format;
use crate::tree::Node;

/// Format implementation for the Gazelle dialect
#[derive(Debug, Clone, Copy, Default)]
pub struct GazelleFormat;

impl Format for GazelleFormat {
    fn name(&self) -> &str {
        "gazelle"
    }

    fn description(&self) -> &str {
        "Gazelle BBCode (OPS, RED, DIC)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["bbcode"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, nodes: &[Node]) -> Result<String, FormatError> {
        Ok(serializer::serialize(nodes))
    }
}
