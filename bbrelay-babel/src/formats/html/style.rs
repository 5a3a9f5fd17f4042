//! Presentation-layer heuristics: inline `style` declarations and the
//! wrapper fold that turns them into nested formatting nodes.

use crate::tree::{Alignment, Node};
use once_cell::sync::Lazy;
use regex::Regex;

static SIZE_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^size-?(\d+)$").unwrap());

/// Declarations of a `style` attribute, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    /// Parses a `style` attribute. A `font` shorthand is expanded in place
    /// into the longhands it resets.
    pub fn parse(style: &str) -> Self {
        let declarations = style
            .split(';')
            .filter_map(|decl| {
                let decl = decl.trim();
                if decl.is_empty() {
                    return None;
                }

                let mut parts = decl.splitn(2, ':');
                let name = parts.next()?.trim();
                let value = parts.next()?.trim();
                let value = value.strip_suffix("!important").unwrap_or(value).trim_end();

                if name.is_empty() || value.is_empty() {
                    return None;
                }

                Some((name.to_ascii_lowercase(), value.to_lowercase()))
            })
            .flat_map(|(name, value)| {
                if name == "font" {
                    expand_font(&value).unwrap_or_default()
                } else {
                    vec![(name, value)]
                }
            })
            .collect();
        Self { declarations }
    }

    /// Lowercased value of a property; later declarations win.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }
}

const SYSTEM_FONTS: &[&str] = &[
    "caption",
    "icon",
    "menu",
    "message-box",
    "small-caption",
    "status-bar",
];

const FONT_STRETCHES: &[&str] = &[
    "ultra-condensed",
    "extra-condensed",
    "condensed",
    "semi-condensed",
    "semi-expanded",
    "expanded",
    "extra-expanded",
    "ultra-expanded",
];

const SIZE_KEYWORDS: &[&str] = &[
    "xx-small", "x-small", "small", "medium", "large", "x-large", "xx-large", "xxx-large",
    "smaller", "larger",
];

/// Longhands set by a `font` shorthand:
/// `[style || variant || weight || stretch] size[/line-height] family`.
///
/// `None` for system fonts and malformed values, which set nothing.
fn expand_font(value: &str) -> Option<Vec<(String, String)>> {
    if SYSTEM_FONTS.contains(&value) {
        return None;
    }

    let mut style = "normal";
    let mut weight = "normal";
    let mut rest = value;
    let size = loop {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (token, tail) = rest.split_at(end);
        rest = tail.trim_start();
        match token {
            "" => return None,
            "normal" | "small-caps" => {}
            "italic" | "oblique" => style = token,
            "bold" | "bolder" | "lighter" => weight = token,
            _ if FONT_STRETCHES.contains(&token) => {}
            _ if style == "oblique" && token.ends_with("deg") => {}
            _ if token
                .parse::<f64>()
                .is_ok_and(|w| (1.0..=1000.0).contains(&w)) =>
            {
                weight = token
            }
            _ => break token,
        }
    };

    let (size, line_height) = match size.split_once('/') {
        Some((size, line_height)) => (size, Some(line_height)),
        None => (size, None),
    };
    let sized = SIZE_KEYWORDS.contains(&size)
        || size.starts_with(|c: char| c.is_ascii_digit() || c == '.');
    if !sized {
        return None;
    }
    if line_height.is_none() {
        if let Some(spaced) = rest.strip_prefix('/') {
            let spaced = spaced.trim_start();
            let end = spaced.find(char::is_whitespace).unwrap_or(spaced.len());
            rest = spaced[end..].trim_start();
        }
    }

    let family = rest.trim();
    if family.is_empty() {
        return None;
    }
    Some(
        [
            ("font-style", style),
            ("font-weight", weight),
            ("font-size", size),
            ("font-family", family),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect(),
    )
}

/// One formatting layer recognized on an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Font(String),
    Size(i64),
    Color(String),
    Align(Alignment),
}

impl Layer {
    fn wrap(self, children: Vec<Node>) -> Node {
        match self {
            Layer::Bold => Node::bold(children),
            Layer::Italic => Node::italic(children),
            Layer::Underline => Node::underline(children),
            Layer::Strikethrough => Node::strikethrough(children),
            Layer::Font(face) => Node::font(face, children),
            Layer::Size(size) => Node::size(size, children),
            Layer::Color(color) => Node::color(color, children),
            Layer::Align(align) => Node::align(align, children),
        }
    }
}

/// What the generic rules read off an element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Presentation {
    /// Innermost first.
    pub layers: Vec<Layer>,
    /// The element may be replaced by its children when no layer applies.
    pub allow_unwrap: bool,
    /// A `font-size` that no size class accounted for.
    pub unrecognized_font_size: Option<String>,
}

impl Presentation {
    /// Reads the element's style and classes. `wraps_pre` is set when the
    /// element's first child element is a `<pre>`.
    pub fn read(style: &InlineStyle, classes: &[String], wraps_pre: bool) -> Self {
        let mut presentation = Presentation::default();
        let layers = &mut presentation.layers;

        if let Some(weight) = style.get("font-weight") {
            if leading_number(weight).is_some_and(|w| w >= 550.0)
                || weight == "bold"
                || weight == "bolder"
            {
                layers.push(Layer::Bold);
            }
        }

        if let Some(font_style) = style.get("font-style") {
            if font_style == "italic" || font_style.starts_with("oblique") {
                layers.push(Layer::Italic);
            }
        }

        let decoration = style.get("text-decoration").unwrap_or_default();
        let decoration_line = style.get("text-decoration-line").unwrap_or_default();
        let decorated = |line: &str| {
            decoration_line == line || decoration.split_whitespace().any(|d| d == line)
        };
        if decorated("underline") {
            layers.push(Layer::Underline);
        } else if decorated("line-through") {
            layers.push(Layer::Strikethrough);
        }

        if let Some(family) = style.get("font-family") {
            if wraps_pre {
                presentation.allow_unwrap = true;
            } else {
                layers.push(Layer::Font(family.to_string()));
            }
        }

        let size_class = classes
            .iter()
            .find_map(|class| SIZE_CLASS.captures(class))
            .map(|caps| caps[1].parse::<i64>().unwrap_or(i64::MAX));
        if let Some(size) = size_class {
            layers.push(Layer::Size(size.clamp(0, 7)));
        } else if let Some(font_size) = style.get("font-size") {
            presentation.unrecognized_font_size = Some(font_size.to_string());
        }

        if let Some(color) = style.get("color") {
            layers.push(Layer::Color(color.to_string()));
        }

        if let Some(align) = style.get("text-align").and_then(|a| a.parse().ok()) {
            layers.push(Layer::Align(align));
        }

        presentation
    }
}

/// Folds the layers around `children`, innermost first.
///
/// Returns the children untouched when there are no layers.
pub fn fold(layers: Vec<Layer>, children: Vec<Node>) -> Result<Node, Vec<Node>> {
    layers.into_iter().fold(Err(children), |acc, layer| {
        let inner = match acc {
            Ok(node) => vec![node],
            Err(children) => children,
        };
        Ok(layer.wrap(inner))
    })
}

/// `parseFloat`-style leading number: `"700"`, `"600.5"`, `"700 !x"`.
fn leading_number(value: &str) -> Option<f64> {
    let end = value
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(value.len());
    value[..end].parse().ok()
}
