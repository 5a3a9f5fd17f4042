//! Core data structures for the canonical document tree.

use super::values::{Alignment, HeadingLevel, Size, Value};

/// Tag of plain text runs.
pub const TEXT_TAG: &str = "#text";

/// Structural variant of a node.
///
/// The variant is a function of the tag alone, see [`NodeKind::of_tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Text,
    Void,
    ValueVoid,
    View,
    ValueView,
}

impl NodeKind {
    /// Classifies a tag string. Returns `None` for tags outside the vocabulary.
    pub fn of_tag(tag: &str) -> Option<NodeKind> {
        if tag == TEXT_TAG {
            Some(NodeKind::Text)
        } else if VoidTag::from_tag(tag).is_some() {
            Some(NodeKind::Void)
        } else if tag == IMAGE_TAG {
            Some(NodeKind::ValueVoid)
        } else if ViewTag::from_tag(tag).is_some() {
            Some(NodeKind::View)
        } else if VALUE_VIEW_TAGS.contains(&tag) {
            Some(NodeKind::ValueView)
        } else {
            None
        }
    }
}

/// A node of the canonical tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    Void(VoidTag),
    ValueVoid(ValueVoid),
    View(ViewTag, Vec<Node>),
    ValueView(Valued, Vec<Node>),
}

/// Nodes with neither value nor children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoidTag {
    HorizontalRule,
}

impl VoidTag {
    pub fn tag(self) -> &'static str {
        match self {
            VoidTag::HorizontalRule => "hr",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "hr" => Some(VoidTag::HorizontalRule),
            _ => None,
        }
    }
}

pub(crate) const IMAGE_TAG: &str = "img";

/// Nodes with a required value and no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueVoid {
    /// `src` is the value; `alt` rides along as auxiliary text.
    Image { src: String, alt: String },
}

impl ValueVoid {
    pub fn tag(&self) -> &'static str {
        match self {
            ValueVoid::Image { .. } => IMAGE_TAG,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            ValueVoid::Image { src, .. } => src,
        }
    }
}

/// Nodes with children and no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTag {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Subscript,
    Superscript,
    Code,
    Spoiler,
    ListItem,
    UnorderedList,
    OrderedList,
    Table,
    TableRow,
    TableCell,
}

impl ViewTag {
    pub fn tag(self) -> &'static str {
        match self {
            ViewTag::Bold => "b",
            ViewTag::Italic => "i",
            ViewTag::Underline => "u",
            ViewTag::Strikethrough => "s",
            ViewTag::Subscript => "sub",
            ViewTag::Superscript => "sup",
            ViewTag::Code => "code",
            ViewTag::Spoiler => "#spoiler",
            ViewTag::ListItem => "li",
            ViewTag::UnorderedList => "ul",
            ViewTag::OrderedList => "ol",
            ViewTag::Table => "table",
            ViewTag::TableRow => "tr",
            ViewTag::TableCell => "td",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        let view = match tag {
            "b" => ViewTag::Bold,
            "i" => ViewTag::Italic,
            "u" => ViewTag::Underline,
            "s" => ViewTag::Strikethrough,
            "sub" => ViewTag::Subscript,
            "sup" => ViewTag::Superscript,
            "code" => ViewTag::Code,
            "#spoiler" => ViewTag::Spoiler,
            "li" => ViewTag::ListItem,
            "ul" => ViewTag::UnorderedList,
            "ol" => ViewTag::OrderedList,
            "table" => ViewTag::Table,
            "tr" => ViewTag::TableRow,
            "td" => ViewTag::TableCell,
            _ => return None,
        };
        Some(view)
    }
}

pub(crate) const VALUE_VIEW_TAGS: &[&str] = &[
    "font",
    "size",
    "color",
    "h",
    "url",
    "align",
    "quote",
    "pre",
    "#collapse",
];

/// Nodes with a value and children.
///
/// The value type depends on the tag: sizes and heading levels are clamped
/// integers, alignment is a closed enum, everything else is free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Valued {
    Font(String),
    Size(Size),
    Color(String),
    Heading(HeadingLevel),
    Link(String),
    Align(Alignment),
    /// Title of the quote, possibly empty.
    Quote(String),
    Pre(String),
    /// Title shown on the collapsed region.
    Collapse(String),
}

impl Valued {
    pub fn tag(&self) -> &'static str {
        match self {
            Valued::Font(_) => "font",
            Valued::Size(_) => "size",
            Valued::Color(_) => "color",
            Valued::Heading(_) => "h",
            Valued::Link(_) => "url",
            Valued::Align(_) => "align",
            Valued::Quote(_) => "quote",
            Valued::Pre(_) => "pre",
            Valued::Collapse(_) => "#collapse",
        }
    }

    pub fn value(&self) -> Value<'_> {
        match self {
            Valued::Font(s)
            | Valued::Color(s)
            | Valued::Link(s)
            | Valued::Quote(s)
            | Valued::Pre(s)
            | Valued::Collapse(s) => Value::Str(s),
            Valued::Size(size) => Value::Int(size.get()),
            Valued::Heading(level) => Value::Int(level.get()),
            Valued::Align(align) => Value::Str(align.as_str()),
        }
    }
}

impl Node {
    pub fn tag(&self) -> &'static str {
        match self {
            Node::Text(_) => TEXT_TAG,
            Node::Void(tag) => tag.tag(),
            Node::ValueVoid(v) => v.tag(),
            Node::View(tag, _) => tag.tag(),
            Node::ValueView(v, _) => v.tag(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Text(_) => NodeKind::Text,
            Node::Void(_) => NodeKind::Void,
            Node::ValueVoid(_) => NodeKind::ValueVoid,
            Node::View(..) => NodeKind::View,
            Node::ValueView(..) => NodeKind::ValueView,
        }
    }

    pub fn value(&self) -> Option<Value<'_>> {
        match self {
            Node::Text(text) => Some(Value::Str(text)),
            Node::ValueVoid(v) => Some(Value::Str(v.value())),
            Node::ValueView(v, _) => Some(v.value()),
            Node::Void(_) | Node::View(..) => None,
        }
    }

    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::View(_, children) | Node::ValueView(_, children) => Some(children),
            _ => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    pub fn horizontal_rule() -> Self {
        Node::Void(VoidTag::HorizontalRule)
    }

    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Node::ValueVoid(ValueVoid::Image {
            src: src.into(),
            alt: alt.into(),
        })
    }

    pub fn bold(children: Vec<Node>) -> Self {
        Node::View(ViewTag::Bold, children)
    }

    pub fn italic(children: Vec<Node>) -> Self {
        Node::View(ViewTag::Italic, children)
    }

    pub fn underline(children: Vec<Node>) -> Self {
        Node::View(ViewTag::Underline, children)
    }

    pub fn strikethrough(children: Vec<Node>) -> Self {
        Node::View(ViewTag::Strikethrough, children)
    }

    pub fn subscript(children: Vec<Node>) -> Self {
        Node::View(ViewTag::Subscript, children)
    }

    pub fn superscript(children: Vec<Node>) -> Self {
        Node::View(ViewTag::Superscript, children)
    }

    pub fn code(children: Vec<Node>) -> Self {
        Node::View(ViewTag::Code, children)
    }

    pub fn spoiler(children: Vec<Node>) -> Self {
        Node::View(ViewTag::Spoiler, children)
    }

    pub fn list_item(children: Vec<Node>) -> Self {
        Node::View(ViewTag::ListItem, children)
    }

    pub fn unordered_list(items: Vec<Node>) -> Self {
        Node::View(ViewTag::UnorderedList, items)
    }

    pub fn ordered_list(items: Vec<Node>) -> Self {
        Node::View(ViewTag::OrderedList, items)
    }

    pub fn table(rows: Vec<Node>) -> Self {
        Node::View(ViewTag::Table, rows)
    }

    pub fn table_row(cells: Vec<Node>) -> Self {
        Node::View(ViewTag::TableRow, cells)
    }

    pub fn table_cell(children: Vec<Node>) -> Self {
        Node::View(ViewTag::TableCell, children)
    }

    pub fn font(face: impl Into<String>, children: Vec<Node>) -> Self {
        Node::ValueView(Valued::Font(face.into()), children)
    }

    /// Builds a size node, clamping `raw` into `1..=8`.
    pub fn size(raw: i64, children: Vec<Node>) -> Self {
        Node::ValueView(Valued::Size(Size::new(raw)), children)
    }

    pub fn color(color: impl Into<String>, children: Vec<Node>) -> Self {
        Node::ValueView(Valued::Color(color.into()), children)
    }

    /// Builds a heading node, clamping `raw` into `1..=7`.
    pub fn heading(raw: i64, children: Vec<Node>) -> Self {
        Node::ValueView(Valued::Heading(HeadingLevel::new(raw)), children)
    }

    pub fn link(href: impl Into<String>, children: Vec<Node>) -> Self {
        Node::ValueView(Valued::Link(href.into()), children)
    }

    pub fn align(alignment: Alignment, children: Vec<Node>) -> Self {
        Node::ValueView(Valued::Align(alignment), children)
    }

    pub fn quote(title: impl Into<String>, children: Vec<Node>) -> Self {
        Node::ValueView(Valued::Quote(title.into()), children)
    }

    pub fn pre(title: impl Into<String>, children: Vec<Node>) -> Self {
        Node::ValueView(Valued::Pre(title.into()), children)
    }

    pub fn collapse(title: impl Into<String>, children: Vec<Node>) -> Self {
        Node::ValueView(Valued::Collapse(title.into()), children)
    }
}

fn collect_text(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(text),
        Node::View(_, children) | Node::ValueView(_, children) => {
            for child in children {
                collect_text(child, out);
            }
        }
        Node::Void(_) | Node::ValueVoid(_) => {}
    }
}
