//! Canonical tree → NexusPHP BBCode.

use crate::common::markup::{close_tag, open_tag, runs, Run, BRACKET_TAG};
use crate::tree::{Alignment, Node, ValueVoid, Valued, ViewTag};
use std::borrow::Cow;
use std::fmt::Write;
use tracing::{debug, warn};

const INDENT: &str = "    ";
const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// Serializes a node sequence, trimming surrounding whitespace.
pub fn serialize(nodes: &[Node]) -> String {
    let mut out = String::new();
    write_children(&mut out, nodes, None);
    debug!(bytes = out.len(), "serialized nexusphp markup");
    out.trim().to_string()
}

/// Splices a zero-width space inside the brackets of every tag-like substring.
///
/// Runs until nothing tag-like is left, since a splice can expose a new match
/// inside the value of the one before it.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    let replacement = format!("[{ZERO_WIDTH_SPACE}${{1}}{ZERO_WIDTH_SPACE}]");
    let mut escaped = BRACKET_TAG.replace_all(text, replacement.as_str());
    while BRACKET_TAG.is_match(&escaped) {
        escaped = Cow::Owned(
            BRACKET_TAG
                .replace_all(&escaped, replacement.as_str())
                .into_owned(),
        );
    }
    escaped
}

/// `depth` is the nesting level of the innermost enclosing list, `None` outside lists.
fn write_node(out: &mut String, node: &Node, depth: Option<usize>) {
    match node {
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Void(tag) => open_tag(out, tag.tag(), ""),
        Node::ValueVoid(ValueVoid::Image { src, .. }) => open_tag(out, "img", src),
        Node::View(ViewTag::Code, children) => write_element(out, "font", "monospace", children),
        Node::View(ViewTag::Spoiler, children) => write_element(out, "mask", "", children),
        Node::View(ViewTag::ListItem, children) => {
            warn!("list item outside of a list");
            out.push_str("[*]");
            write_children(out, children, None);
        }
        Node::View(ViewTag::UnorderedList, items) => write_list(out, items, false, depth),
        Node::View(ViewTag::OrderedList, items) => write_list(out, items, true, depth),
        Node::View(tag, children) => write_element(out, tag.tag(), "", children),
        Node::ValueView(Valued::Heading(level), children) => {
            let size = 8 - level.get();
            write_element(out, "size", &size.to_string(), children)
        }
        Node::ValueView(Valued::Align(Alignment::Center), children) => {
            write_element(out, "center", "", children)
        }
        Node::ValueView(Valued::Align(align), children) => {
            warn!(%align, "alignment not supported, keeping the content only");
            write_children(out, children, depth);
        }
        Node::ValueView(Valued::Collapse(title), children) => {
            write_element(out, "hide", title, children)
        }
        Node::ValueView(Valued::Pre(_), children) => write_element(out, "pre", "", children),
        Node::ValueView(valued, children) => {
            write_element(out, valued.tag(), &valued.value().to_string(), children)
        }
    }
}

fn write_list(out: &mut String, items: &[Node], ordered: bool, depth: Option<usize>) {
    let depth = depth.map_or(0, |d| d + 1);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&INDENT.repeat(depth));
        out.push_str("[*] ");
        if ordered {
            let _ = write!(out, "{}. ", i + 1);
        }
        for run in runs(item.children().unwrap_or_default()) {
            if matches!(run, Run::Node(child) if is_list(child)) && !out.ends_with('\n') {
                out.push('\n');
            }
            write_run(out, run, Some(depth));
        }
    }
}

fn is_list(node: &Node) -> bool {
    matches!(
        node,
        Node::View(ViewTag::UnorderedList | ViewTag::OrderedList, _)
    )
}

fn write_element(out: &mut String, tag: &str, value: &str, children: &[Node]) {
    open_tag(out, tag, value);
    write_children(out, children, None);
    close_tag(out, tag);
}

fn write_children(out: &mut String, children: &[Node], depth: Option<usize>) {
    for run in runs(children) {
        write_run(out, run, depth);
    }
}

fn write_run(out: &mut String, run: Run<'_>, depth: Option<usize>) {
    match run {
        Run::Text(text) => out.push_str(&escape_text(&text)),
        Run::Node(node) => write_node(out, node, depth),
    }
}
