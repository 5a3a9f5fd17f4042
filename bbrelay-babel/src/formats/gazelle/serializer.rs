//! Canonical tree → Gazelle BBCode.

use crate::common::markup::{close_tag, contains_tag, open_tag, runs, Run};
use crate::tree::{Node, ValueVoid, Valued, ViewTag};
use std::fmt::Write;
use tracing::debug;

const PLAIN_CLOSE: &str = "[/plain]";
/// A literal `[/plain]` inside a `[plain]` run: the wrapper closes right after
/// its `[` and reopens before the rest.
const ESCAPED_PLAIN_CLOSE: &str = "[[/plain][plain]/plain]";

/// Serializes a node sequence, trimming surrounding whitespace.
pub fn serialize(nodes: &[Node]) -> String {
    let mut out = String::new();
    write_children(&mut out, nodes);
    debug!(bytes = out.len(), "serialized gazelle markup");
    out.trim().to_string()
}

/// `ordered` only matters for list items: it picks `[#]` over `[*]`.
fn write_node(out: &mut String, node: &Node, ordered: bool) {
    match node {
        Node::Text(text) => write_text(out, text),
        Node::Void(tag) => open_tag(out, tag.tag(), ""),
        Node::ValueVoid(ValueVoid::Image { src, alt }) => {
            let _ = write!(out, "[img={src}]{alt}[/img]");
        }
        Node::View(ViewTag::ListItem, children) => {
            out.push_str(if ordered { "[#]" } else { "[*]" });
            write_children(out, children);
        }
        Node::View(ViewTag::UnorderedList, items) => write_items(out, items, false),
        Node::View(ViewTag::OrderedList, items) => write_items(out, items, true),
        Node::View(ViewTag::Spoiler, children) => write_element(out, "hide", "", children),
        Node::View(tag, children) => write_element(out, tag.tag(), "", children),
        Node::ValueView(Valued::Collapse(title), children) => {
            write_element(out, "hide", title, children)
        }
        Node::ValueView(valued, children) => {
            write_element(out, valued.tag(), &valued.value().to_string(), children)
        }
    }
}

fn write_items(out: &mut String, items: &[Node], ordered: bool) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_node(out, item, ordered);
    }
}

fn write_element(out: &mut String, tag: &str, value: &str, children: &[Node]) {
    open_tag(out, tag, value);
    write_children(out, children);
    close_tag(out, tag);
}

fn write_children(out: &mut String, children: &[Node]) {
    for run in runs(children) {
        match run {
            Run::Text(text) => write_text(out, &text),
            Run::Node(node) => write_node(out, node, false),
        }
    }
}

/// Text holding anything tag-like goes out inside a single `[plain]` wrapper.
fn write_text(out: &mut String, text: &str) {
    if !contains_tag(text) {
        out.push_str(text);
        return;
    }
    out.push_str("[plain]");
    out.push_str(&text.replace(PLAIN_CLOSE, ESCAPED_PLAIN_CLOSE));
    out.push_str(PLAIN_CLOSE);
}
