//! Canonical document tree shared by the importer and every dialect.
//!
//! A node is a tag, an optional scalar value and an optional ordered child
//! list. Tags partition into five kinds (text, void, value-void, view,
//! value-view); the kind of a node is decided by its tag alone.

pub mod json;
pub mod nodes;
pub mod values;

pub use nodes::{Node, NodeKind, ValueVoid, Valued, ViewTag, VoidTag, TEXT_TAG};
pub use values::{Alignment, HeadingLevel, Size, UnknownAlignment, Value};
