//! Text-run handling for the importer.
//!
//! Rendered HTML splits prose across many text nodes and sprinkles it with
//! source indentation. These helpers fold runs into single [`Node::Text`]
//! values and place the hard line breaks that `<br>` and `<p>` imply.

use crate::tree::Node;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Which ends of a node sequence receive a line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edges {
    Leading,
    Trailing,
    Both,
}

impl Edges {
    fn leading(self) -> bool {
        matches!(self, Edges::Leading | Edges::Both)
    }

    fn trailing(self) -> bool {
        matches!(self, Edges::Trailing | Edges::Both)
    }
}

/// Replaces every whitespace run with a single space.
pub fn collapse_whitespace(text: &str) -> Cow<'_, str> {
    WHITESPACE.replace_all(text, " ")
}

/// Appends a text run to `nodes`.
///
/// In raw mode every run becomes its own node, verbatim. Otherwise the run is
/// whitespace-collapsed and merged into a preceding text node; when that node
/// already ends in whitespace the new run loses its leading whitespace.
pub fn push_text(nodes: &mut Vec<Node>, run: &str, raw: bool) {
    if raw {
        nodes.push(Node::text(run));
        return;
    }
    if let Some(Node::Text(last)) = nodes.last_mut() {
        let run = if last.ends_with(char::is_whitespace) {
            run.trim_start()
        } else {
            run
        };
        last.push_str(&collapse_whitespace(run));
    } else {
        nodes.push(Node::text(collapse_whitespace(run)));
    }
}

/// Appends already imported nodes to `nodes`.
///
/// Outside raw mode a leading text node is joined onto a trailing one, so a
/// run of prose never spans two adjacent text nodes. The joined run keeps its
/// line breaks and loses leading spaces when the previous run ends in whitespace.
pub fn splice(nodes: &mut Vec<Node>, spliced: Vec<Node>, raw: bool) {
    let mut spliced = spliced.into_iter();
    if raw {
        nodes.extend(spliced);
        return;
    }
    let Some(first) = spliced.next() else {
        return;
    };
    let joined = match (nodes.last_mut(), &first) {
        (Some(Node::Text(last)), Node::Text(run)) => {
            let run = if last.ends_with(char::is_whitespace) {
                run.trim_start_matches(' ')
            } else {
                run.as_str()
            };
            last.push_str(run);
            true
        }
        _ => false,
    };
    if !joined {
        nodes.push(first);
    }
    nodes.extend(spliced);
}

/// Places a line break at the requested ends of `nodes`.
///
/// A text node at that end has its run of spaces replaced by `\n`; any other
/// node gets a standalone `"\n"` text node beside it.
pub fn wrap_newline(nodes: &mut Vec<Node>, edges: Edges) {
    if edges.leading() {
        match nodes.first_mut() {
            Some(Node::Text(first)) => {
                let rest = first.trim_start_matches(' ');
                *first = format!("\n{rest}");
            }
            _ => nodes.insert(0, Node::text("\n")),
        }
    }
    if edges.trailing() {
        match nodes.last_mut() {
            Some(Node::Text(last)) => {
                let kept = last.trim_end_matches(' ').len();
                last.truncate(kept);
                last.push('\n');
            }
            _ => nodes.push(Node::text("\n")),
        }
    }
}
