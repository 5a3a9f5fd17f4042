//! Canonical tree as JSON
//!
//! Both directions. The document is an array of node records:
//!
//! ```text
//! [
//!   {"tag": "quote", "value": "Alice", "children": [
//!     {"tag": "b", "children": [{"tag": "#text", "value": "hi"}]}
//!   ]},
//!   {"tag": "img", "value": "https://x.test/a.png", "alt": "cover"}
//! ]
//! ```
//!
//! This is the shape the release record stores in `description_tree`.

use crate::error::FormatError;
use crate::format::Format;
use crate::tree::Node;

/// Format implementation for the JSON tree
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeFormat;

impl Format for TreeFormat {
    fn name(&self) -> &str {
        "tree"
    }

    fn description(&self) -> &str {
        "Canonical document tree as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<Node>, FormatError> {
        let value: serde_json::Value = serde_json::from_str(source)
            .map_err(|e| FormatError::ParseError(format!("Invalid JSON: {e}")))?;
        let nodes = if value.is_array() {
            serde_json::from_value::<Vec<Node>>(value)
        } else {
            serde_json::from_value::<Node>(value).map(|node| vec![node])
        };
        nodes.map_err(|e| FormatError::ParseError(format!("Invalid tree: {e}")))
    }

    fn serialize(&self, nodes: &[Node]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(nodes).map_err(|e| {
            FormatError::SerializationError(format!("JSON serialization failed: {e}"))
        })
    }
}
