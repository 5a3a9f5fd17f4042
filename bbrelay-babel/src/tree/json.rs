//! Record form of the tree: `{"tag", "value"?, "children"?, "alt"?}`.
//!
//! `Node` (de)serializes through [`RawNode`]. Decoding validates the tag
//! vocabulary, clamps sizes and heading levels, and rejects alignments outside
//! the three supported literals.

use super::nodes::{Node, NodeKind, ValueVoid, Valued, ViewTag, VoidTag, IMAGE_TAG};
use super::values::{Alignment, HeadingLevel, Size, Value};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RawNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Int(i64),
    Str(String),
}

impl RawValue {
    fn into_string(self) -> String {
        match self {
            RawValue::Int(n) => n.to_string(),
            RawValue::Str(s) => s,
        }
    }

    fn as_int(&self) -> Option<i64> {
        match self {
            RawValue::Int(n) => Some(*n),
            RawValue::Str(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("unknown tag '{0}'")]
    UnknownTag(String),
    #[error("tag '{0}' requires a value")]
    MissingValue(String),
    #[error("tag '{tag}' cannot take value '{value}'")]
    InvalidValue { tag: String, value: String },
}

impl From<Node> for RawNode {
    fn from(node: Node) -> Self {
        match node {
            Node::Text(text) => RawNode {
                tag: super::nodes::TEXT_TAG.to_string(),
                value: Some(RawValue::Str(text)),
                children: None,
                alt: None,
            },
            Node::Void(tag) => RawNode {
                tag: tag.tag().to_string(),
                value: None,
                children: None,
                alt: None,
            },
            Node::ValueVoid(ValueVoid::Image { src, alt }) => RawNode {
                tag: IMAGE_TAG.to_string(),
                value: Some(RawValue::Str(src)),
                children: None,
                alt: Some(alt),
            },
            Node::View(tag, children) => RawNode {
                tag: tag.tag().to_string(),
                value: None,
                children: Some(children.into_iter().map(RawNode::from).collect()),
                alt: None,
            },
            Node::ValueView(valued, children) => {
                let value = match valued.value() {
                    Value::Int(n) => RawValue::Int(n as i64),
                    Value::Str(s) => RawValue::Str(s.to_string()),
                };
                RawNode {
                    tag: valued.tag().to_string(),
                    value: Some(value),
                    children: Some(children.into_iter().map(RawNode::from).collect()),
                    alt: None,
                }
            }
        }
    }
}

impl TryFrom<RawNode> for Node {
    type Error = TreeError;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        let kind = NodeKind::of_tag(&raw.tag).ok_or_else(|| TreeError::UnknownTag(raw.tag.clone()))?;
        let children = raw
            .children
            .unwrap_or_default()
            .into_iter()
            .map(Node::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let node = match kind {
            NodeKind::Text => Node::Text(raw.value.map(RawValue::into_string).unwrap_or_default()),
            NodeKind::Void => match VoidTag::from_tag(&raw.tag) {
                Some(tag) => Node::Void(tag),
                None => return Err(TreeError::UnknownTag(raw.tag)),
            },
            NodeKind::ValueVoid => {
                let src = raw
                    .value
                    .ok_or_else(|| TreeError::MissingValue(raw.tag.clone()))?
                    .into_string();
                Node::image(src, raw.alt.unwrap_or_default())
            }
            NodeKind::View => match ViewTag::from_tag(&raw.tag) {
                Some(tag) => Node::View(tag, children),
                None => return Err(TreeError::UnknownTag(raw.tag)),
            },
            NodeKind::ValueView => Node::ValueView(valued(&raw.tag, raw.value)?, children),
        };
        Ok(node)
    }
}

fn valued(tag: &str, value: Option<RawValue>) -> Result<Valued, TreeError> {
    let missing = || TreeError::MissingValue(tag.to_string());
    let invalid = |value: &RawValue| TreeError::InvalidValue {
        tag: tag.to_string(),
        value: value.clone().into_string(),
    };

    let valued = match tag {
        "size" => {
            let value = value.ok_or_else(missing)?;
            let n = value.as_int().ok_or_else(|| invalid(&value))?;
            Valued::Size(Size::new(n))
        }
        "h" => {
            let value = value.ok_or_else(missing)?;
            let n = value.as_int().ok_or_else(|| invalid(&value))?;
            Valued::Heading(HeadingLevel::new(n))
        }
        "align" => {
            let value = value.ok_or_else(missing)?;
            let align: Alignment = match &value {
                RawValue::Str(s) => s.parse().map_err(|_| invalid(&value))?,
                RawValue::Int(_) => return Err(invalid(&value)),
            };
            Valued::Align(align)
        }
        _ => {
            let text = value.map(RawValue::into_string).unwrap_or_default();
            match tag {
                "font" => Valued::Font(text),
                "color" => Valued::Color(text),
                "url" => Valued::Link(text),
                "quote" => Valued::Quote(text),
                "pre" => Valued::Pre(text),
                "#collapse" => Valued::Collapse(text),
                other => return Err(TreeError::UnknownTag(other.to_string())),
            }
        }
    };
    Ok(valued)
}

impl Serialize for Node {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawNode::from(self.clone()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawNode::deserialize(deserializer)?;
        Node::try_from(raw).map_err(serde::de::Error::custom)
    }
}
