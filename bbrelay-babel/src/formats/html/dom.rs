//! Read-only queries over `markup5ever_rcdom` handles.

use html5ever::ns;
use markup5ever_rcdom::{Handle, NodeData};
use std::fmt::Write;

/// Local name of an HTML-namespace element, `None` for anything else.
pub fn tag_name(handle: &Handle) -> Option<&str> {
    match &handle.data {
        NodeData::Element { name, .. } if name.ns == ns!(html) => Some(&*name.local),
        _ => None,
    }
}

pub fn is_tag(handle: &Handle, tag: &str) -> bool {
    tag_name(handle) == Some(tag)
}

/// Any element, HTML or foreign.
pub fn is_element(handle: &Handle) -> bool {
    matches!(handle.data, NodeData::Element { .. })
}

pub fn attr(handle: &Handle, name: &str) -> Option<String> {
    match &handle.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| &*a.name.local == name)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

pub fn classes(handle: &Handle) -> Vec<String> {
    attr(handle, "class")
        .map(|value| value.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

pub fn has_class(handle: &Handle, class: &str) -> bool {
    classes(handle).iter().any(|c| c == class)
}

/// Element children in document order.
pub fn child_elements(handle: &Handle) -> Vec<Handle> {
    handle
        .children
        .borrow()
        .iter()
        .filter(|child| is_element(child))
        .cloned()
        .collect()
}

pub fn first_child_element(handle: &Handle) -> Option<Handle> {
    handle
        .children
        .borrow()
        .iter()
        .find(|child| is_element(child))
        .cloned()
}

/// Element children with the given tag name.
pub fn children_named(handle: &Handle, tag: &str) -> Vec<Handle> {
    child_elements(handle)
        .into_iter()
        .filter(|child| is_tag(child, tag))
        .collect()
}

/// Cells of a table row (`td` and `th`).
pub fn cells(row: &Handle) -> Vec<Handle> {
    child_elements(row)
        .into_iter()
        .filter(|child| is_tag(child, "td") || is_tag(child, "th"))
        .collect()
}

/// Concatenated text of every descendant text node.
pub fn text_content(handle: &Handle) -> String {
    let mut out = String::new();
    collect_text(handle, &mut out);
    out
}

fn collect_text(handle: &Handle, out: &mut String) {
    if let NodeData::Text { contents } = &handle.data {
        out.push_str(&contents.borrow());
    }
    for child in handle.children.borrow().iter() {
        collect_text(child, out);
    }
}

/// Renders a node as its opening tag (`<a href="…" onclick="…">`), for error messages.
pub fn describe(handle: &Handle) -> String {
    match &handle.data {
        NodeData::Element { name, attrs, .. } => {
            let mut out = format!("<{}", name.local);
            for attr in attrs.borrow().iter() {
                let _ = write!(out, " {}=\"{}\"", attr.name.local, attr.value);
            }
            out.push('>');
            out
        }
        NodeData::Text { contents } => format!("#text {:?}", contents.borrow().to_string()),
        NodeData::Comment { contents } => format!("<!--{contents}-->"),
        NodeData::Doctype { name, .. } => format!("<!DOCTYPE {name}>"),
        NodeData::ProcessingInstruction { target, contents } => format!("<?{target} {contents}?>"),
        NodeData::Document => "#document".to_string(),
    }
}
