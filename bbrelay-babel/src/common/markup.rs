//! Bracket-markup primitives shared by the dialect serializers.

use crate::tree::Node;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Matches one bracket tag: `[b]`, `[/b]`, `[url=…]`, `[*]` or `[#]`.
///
/// The tag body is captured in group 1.
pub static BRACKET_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(/?(?:[0-9A-Za-z_]+(?:=.+?)?|\*|#))\]").unwrap());

/// Whether `text` contains anything a dialect parser would read as a tag.
pub fn contains_tag(text: &str) -> bool {
    BRACKET_TAG.is_match(text)
}

/// One step of a serializer walk over a child list.
#[derive(Debug, PartialEq)]
pub enum Run<'a> {
    /// Adjacent text nodes, joined.
    Text(Cow<'a, str>),
    Node(&'a Node),
}

/// Joins adjacent text nodes so a tag split across them is escaped as a whole.
pub fn runs(nodes: &[Node]) -> Vec<Run<'_>> {
    let mut runs: Vec<Run<'_>> = Vec::new();
    for node in nodes {
        if let (Node::Text(next), Some(Run::Text(text))) = (node, runs.last_mut()) {
            text.to_mut().push_str(next);
            continue;
        }
        runs.push(match node {
            Node::Text(text) => Run::Text(Cow::Borrowed(text.as_str())),
            node => Run::Node(node),
        });
    }
    runs
}

/// Emits `[tag]`, or `[tag=value]` when the value is non-empty.
pub fn open_tag(out: &mut String, tag: &str, value: &str) {
    out.push('[');
    out.push_str(tag);
    if !value.is_empty() {
        out.push('=');
        out.push_str(value);
    }
    out.push(']');
}

pub fn close_tag(out: &mut String, tag: &str) {
    out.push_str("[/");
    out.push_str(tag);
    out.push(']');
}
