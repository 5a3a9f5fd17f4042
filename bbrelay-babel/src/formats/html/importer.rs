//! Rendered HTML → canonical tree.
//!
//! The importer walks a snapshot of an element's child list with an explicit
//! cursor. Most nodes consume exactly one sibling; the multi-element idioms
//! (named quotes, spoiler collapses, code blocks) look ahead and consume every
//! sibling up to their counterpart.

use super::dom;
use super::style::{self, InlineStyle, Presentation};
use super::{Diagnostic, Import};
use crate::common::text::{push_text, splice, wrap_newline, Edges};
use crate::error::{Idiom, ImportError};
use crate::tree::{Alignment, Node};
use markup5ever_rcdom::{Handle, NodeData};
use once_cell::sync::Lazy;
use regex::Regex;
use std::rc::Rc;
use tracing::warn;
use url::Url;

static ABSOLUTE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z+]+://").unwrap());

/// Siblings skipped after the body of a spoiler collapse: the theme renders a
/// closing toggle, a line break and trailing whitespace there.
const SPOILER_TRAILER: usize = 3;

pub(super) struct Importer<'a> {
    base: Option<&'a Url>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Importer<'a> {
    pub(super) fn new(base: Option<&'a Url>) -> Self {
        Self {
            base,
            diagnostics: Vec::new(),
        }
    }

    pub(super) fn run(mut self, root: &Handle) -> Result<Import, ImportError> {
        let nodes = self.children(root, false)?;
        Ok(Import {
            nodes,
            diagnostics: self.diagnostics,
        })
    }

    fn diagnose(&mut self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    fn children(&mut self, parent: &Handle, raw: bool) -> Result<Vec<Node>, ImportError> {
        let siblings = parent.children.borrow().clone();
        self.siblings(&siblings, raw)
    }

    fn siblings(&mut self, siblings: &[Handle], raw: bool) -> Result<Vec<Node>, ImportError> {
        let mut out = Vec::new();
        let mut index = 0;
        while index < siblings.len() {
            index += self.step(siblings, index, &mut out, raw)?;
        }
        Ok(out)
    }

    /// Imports the sibling at `index`, returning how many siblings were consumed.
    fn step(
        &mut self,
        siblings: &[Handle],
        index: usize,
        out: &mut Vec<Node>,
        raw: bool,
    ) -> Result<usize, ImportError> {
        let node = &siblings[index];
        if let NodeData::Text { contents } = &node.data {
            push_text(out, &contents.borrow(), raw);
            return Ok(1);
        }
        let Some(tag) = dom::tag_name(node) else {
            return Err(ImportError::UnsupportedNode {
                node: dom::describe(node),
            });
        };

        match tag {
            "br" => wrap_newline(out, Edges::Trailing),
            "ul" => out.push(Node::unordered_list(self.list_items(node)?)),
            "ol" => out.push(Node::ordered_list(self.list_items(node)?)),
            "table" => self.table(node, out)?,
            "blockquote" | "q" => out.push(Node::quote("", self.children(node, false)?)),
            "pre" => out.push(Node::pre("", self.children(node, true)?)),
            "fieldset" => out.push(self.fieldset(node)?),
            "font" => self.font(node, out, raw)?,
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = tag[1..].parse().unwrap_or(1);
                out.push(Node::heading(level, self.children(node, false)?));
            }
            "a" => return self.anchor(siblings, index, out),
            "img" => {
                if dom::has_class(node, "listicon") {
                    out.push(Node::list_item(vec![]));
                } else {
                    let src = self.resolve(&dom::attr(node, "src").unwrap_or_default());
                    out.push(Node::image(src, dom::attr(node, "alt").unwrap_or_default()));
                }
            }
            "hr" => out.push(Node::horizontal_rule()),
            _ => return self.generic(siblings, index, tag, out, raw),
        }
        Ok(1)
    }

    fn list_items(&mut self, list: &Handle) -> Result<Vec<Node>, ImportError> {
        dom::child_elements(list)
            .iter()
            .map(|item| Ok(Node::list_item(self.children(item, false)?)))
            .collect()
    }

    fn table(&mut self, table: &Handle, out: &mut Vec<Node>) -> Result<(), ImportError> {
        if dom::has_class(table, "hide") {
            let missing = || ImportError::MissingCounterpart {
                idiom: Idiom::HiddenTable,
                element: dom::describe(table),
            };
            let rows = dom::children_named(table, "tbody")
                .first()
                .map(|body| dom::children_named(body, "tr"))
                .unwrap_or_default();
            let first_cell =
                |row: Option<&Handle>| row.and_then(|r| dom::cells(r).into_iter().next());
            let title = first_cell(rows.first()).ok_or_else(missing)?;
            let body = first_cell(rows.get(1)).ok_or_else(missing)?;
            let title = dom::text_content(&title).trim().to_string();
            out.push(Node::collapse(title, self.children(&body, false)?));
            return Ok(());
        }

        let caption = dom::first_child_element(table).filter(|c| dom::is_tag(c, "caption"));
        if let Some(caption) = caption {
            out.push(Node::align(Alignment::Center, self.children(&caption, false)?));
        }

        let sections = dom::children_named(table, "thead")
            .into_iter()
            .take(1)
            .chain(dom::children_named(table, "tbody"));
        let mut rows = Vec::new();
        for section in sections {
            for row in dom::children_named(&section, "tr") {
                let cells = dom::cells(&row)
                    .iter()
                    .map(|cell| Ok(Node::table_cell(self.children(cell, false)?)))
                    .collect::<Result<Vec<_>, ImportError>>()?;
                rows.push(Node::table_row(cells));
            }
        }
        out.push(Node::table(rows));
        Ok(())
    }

    fn fieldset(&mut self, fieldset: &Handle) -> Result<Node, ImportError> {
        match dom::first_child_element(fieldset).filter(|c| dom::is_tag(c, "legend")) {
            Some(legend) => {
                let title = dom::text_content(&legend).trim().to_string();
                let body: Vec<Handle> = fieldset
                    .children
                    .borrow()
                    .iter()
                    .filter(|child| !Rc::ptr_eq(*child, &legend))
                    .cloned()
                    .collect();
                Ok(Node::quote(title, self.siblings(&body, false)?))
            }
            None => Ok(Node::quote("", self.children(fieldset, false)?)),
        }
    }

    fn font(
        &mut self,
        font: &Handle,
        out: &mut Vec<Node>,
        raw: bool,
    ) -> Result<(), ImportError> {
        let layers = ["face", "size", "color"]
            .into_iter()
            .filter_map(|name| dom::attr(font, name).filter(|v| !v.is_empty()))
            .map(style::Layer::Font)
            .collect();
        match style::fold(layers, self.children(font, false)?) {
            Ok(outer) => out.push(outer),
            Err(children) => splice(out, children, raw),
        }
        Ok(())
    }

    fn anchor(
        &mut self,
        siblings: &[Handle],
        index: usize,
        out: &mut Vec<Node>,
    ) -> Result<usize, ImportError> {
        let anchor = &siblings[index];
        let onclick = dom::attr(anchor, "onclick").unwrap_or_default();
        if onclick.starts_with("QuoteJump") {
            let title = dom::first_child_element(anchor)
                .map(|c| dom::text_content(&c).trim().to_string())
                .unwrap_or_default();
            return self.named_quote(siblings, index, Idiom::NamedQuote, title, out);
        }

        let href = self.resolve(&dom::attr(anchor, "href").unwrap_or_default());
        out.push(Node::link(href, self.children(anchor, false)?));
        Ok(1)
    }

    /// Pairs the sibling at `index` with the next quote element after it.
    fn named_quote(
        &mut self,
        siblings: &[Handle],
        index: usize,
        idiom: Idiom,
        title: String,
        out: &mut Vec<Node>,
    ) -> Result<usize, ImportError> {
        let found = next_quote(siblings, index).ok_or_else(|| ImportError::MissingCounterpart {
            idiom,
            element: dom::describe(&siblings[index]),
        })?;
        let node = match idiom {
            Idiom::SpoilerCollapse => Node::collapse(title, self.children(&siblings[found], false)?),
            _ => Node::quote(title, self.children(&siblings[found], false)?),
        };
        out.push(node);
        Ok(found - index + 1)
    }

    fn generic(
        &mut self,
        siblings: &[Handle],
        index: usize,
        tag: &str,
        out: &mut Vec<Node>,
        raw: bool,
    ) -> Result<usize, ImportError> {
        let element = &siblings[index];
        if dom::has_class(element, "mature") {
            return Ok(1);
        }

        if dom::has_class(element, "quoteheader") {
            let title = dom::text_content(element).trim().to_string();
            return self.named_quote(siblings, index, Idiom::QuoteHeader, title, out);
        }

        if matches!(tag, "b" | "strong") && toggles_spoiler(siblings, index) {
            let title = dom::text_content(element).trim().to_string();
            let consumed =
                self.named_quote(siblings, index, Idiom::SpoilerCollapse, title, out)?;
            return Ok(consumed + SPOILER_TRAILER);
        }

        if dom::has_class(element, "codetop") {
            return self.code_block(siblings, index, out, raw);
        }

        let shortcut: Option<fn(Vec<Node>) -> Node> = match tag {
            "b" | "strong" => Some(Node::bold),
            "i" | "em" => Some(Node::italic),
            "u" | "ins" => Some(Node::underline),
            "s" | "strike" | "del" => Some(Node::strikethrough),
            "code" | "tt" => Some(Node::code),
            "sub" => Some(Node::subscript),
            "sup" => Some(Node::superscript),
            "center" | "marquee" => Some(|children| Node::align(Alignment::Center, children)),
            _ => None,
        };
        if let Some(build) = shortcut {
            out.push(build(self.children(element, false)?));
            return Ok(1);
        }

        self.presentational(element, tag, out, raw)?;
        Ok(1)
    }

    /// `.codetop` leader: the code body is the next element; a following
    /// element whose first child is `.codemain` holds the rest of it.
    fn code_block(
        &mut self,
        siblings: &[Handle],
        index: usize,
        out: &mut Vec<Node>,
        raw: bool,
    ) -> Result<usize, ImportError> {
        let body = next_element(siblings, index).ok_or_else(|| ImportError::MissingCounterpart {
            idiom: Idiom::CodeBlock,
            element: dom::describe(&siblings[index]),
        })?;
        let body_nodes = self.children(&siblings[body], false)?;
        splice(out, body_nodes, raw);

        if let Some(next) = next_element(siblings, body) {
            let main = dom::first_child_element(&siblings[next])
                .filter(|child| dom::has_class(child, "codemain"));
            if let Some(main) = main {
                let main_nodes = self.children(&main, false)?;
                splice(out, main_nodes, raw);
                return Ok(next - index + 1);
            }
        }
        Ok(body - index + 1)
    }

    /// Elements recognized only by their inline style and classes.
    fn presentational(
        &mut self,
        element: &Handle,
        tag: &str,
        out: &mut Vec<Node>,
        raw: bool,
    ) -> Result<(), ImportError> {
        let children = self.children(element, false)?;
        let class_attr = dom::attr(element, "class").unwrap_or_default();
        let style_attr = dom::attr(element, "style").unwrap_or_default();

        if tag == "p" && dom::has_class(element, "sub") {
            out.push(Node::heading(2, children));
            return Ok(());
        }
        let bare_span = tag == "span" && class_attr.is_empty() && style_attr.is_empty();
        if tag == "span" && !bare_span && dom::has_class(element, "mask") {
            out.push(Node::spoiler(children));
            return Ok(());
        }

        let wraps_pre = dom::first_child_element(element).is_some_and(|c| dom::is_tag(&c, "pre"));
        let presentation = Presentation::read(
            &InlineStyle::parse(&style_attr),
            &dom::classes(element),
            wraps_pre,
        );
        if let Some(value) = presentation.unrecognized_font_size {
            self.diagnose(Diagnostic::UnrecognizedFontSize {
                element: dom::describe(element),
                value,
            });
        }
        let allow_unwrap = presentation.allow_unwrap || bare_span;

        match style::fold(presentation.layers, children) {
            Ok(outer) if tag == "p" => {
                let mut nodes = vec![outer];
                wrap_newline(&mut nodes, Edges::Both);
                splice(out, nodes, raw);
            }
            Err(mut children) if tag == "p" => {
                wrap_newline(&mut children, Edges::Both);
                splice(out, children, raw);
            }
            Ok(outer) => out.push(outer),
            Err(children) if allow_unwrap => splice(out, children, raw),
            Err(children) => {
                let children_kept = tag == "span";
                self.diagnose(Diagnostic::UnrecognizedElement {
                    element: dom::describe(element),
                    children_kept,
                });
                if children_kept {
                    splice(out, children, raw);
                }
            }
        }
        Ok(())
    }

    fn resolve(&mut self, url: &str) -> String {
        if ABSOLUTE_URL.is_match(url) {
            return url.to_string();
        }
        let Some(base) = self.base else {
            return url.to_string();
        };
        match base.join(url) {
            Ok(resolved) => resolved.to_string(),
            Err(err) => {
                self.diagnose(Diagnostic::UnresolvedUrl {
                    url: url.to_string(),
                    reason: err.to_string(),
                });
                url.to_string()
            }
        }
    }
}

/// Position of the first quote element after `index`.
fn next_quote(siblings: &[Handle], index: usize) -> Option<usize> {
    (index + 1..siblings.len())
        .find(|&i| dom::is_tag(&siblings[i], "blockquote") || dom::is_tag(&siblings[i], "q"))
}

/// Position of the first HTML element after `index`.
fn next_element(siblings: &[Handle], index: usize) -> Option<usize> {
    (index + 1..siblings.len()).find(|&i| dom::tag_name(&siblings[i]).is_some())
}

/// Whether the next element sibling, line breaks aside, is a spoiler toggle anchor.
fn toggles_spoiler(siblings: &[Handle], index: usize) -> bool {
    siblings[index + 1..]
        .iter()
        .find(|s| dom::tag_name(s).is_some_and(|t| t != "br"))
        .filter(|s| dom::is_tag(s, "a"))
        .and_then(|a| dom::attr(a, "onclick"))
        .is_some_and(|onclick| onclick.contains("spoiler"))
}
