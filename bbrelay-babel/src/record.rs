//! Release record carried from the source site to the target site.
//!
//! A record holds the release-group and item metadata scraped from a source
//! page. Each side carries a [`Description`]: the site's own markup, the
//! imported canonical tree, or both. When posting to a target site the two
//! descriptions are rendered in the target dialect and joined with a rule.

use crate::error::FormatError;
use crate::format::Format;
use crate::tree::Node;
use serde::{Deserialize, Serialize};

/// Separator placed between joined descriptions.
pub const DESCRIPTION_SEPARATOR: &str = "\n[hr]\n";

/// Free-text description in markup form, tree form, or both. Never neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDescription")]
pub struct Description {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_tree: Option<Vec<Node>>,
}

#[derive(Deserialize)]
struct RawDescription {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    description_tree: Option<Vec<Node>>,
}

impl TryFrom<RawDescription> for Description {
    type Error = String;

    fn try_from(raw: RawDescription) -> Result<Self, Self::Error> {
        if raw.description.is_none() && raw.description_tree.is_none() {
            return Err("either `description` or `description_tree` is required".to_string());
        }
        Ok(Description {
            description: raw.description,
            description_tree: raw.description_tree,
        })
    }
}

impl Description {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            description: Some(text.into()),
            description_tree: None,
        }
    }

    pub fn tree(nodes: Vec<Node>) -> Self {
        Self {
            description: None,
            description_tree: Some(nodes),
        }
    }
}

/// Ripping logs attached to an item, stored either as text or base64url.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogCollection {
    Plain {
        plain: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        recovered: Option<bool>,
    },
    Encoded {
        encoded: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        recovered: Option<bool>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<String>,
    #[serde(default)]
    pub guests: Vec<String>,
    #[serde(default)]
    pub composers: Vec<String>,
    #[serde(default)]
    pub conductor: Vec<String>,
    #[serde(default)]
    pub producer: Vec<String>,
    #[serde(default)]
    pub dj: Vec<String>,
    #[serde(default)]
    pub remixer: Vec<String>,
    pub label: String,
    pub catalogue: String,
    pub year: u32,
    pub image: String,
    #[serde(flatten)]
    pub description: Description,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalogue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    pub media: String,
    pub encoding: String,
    pub format: String,
    pub scene: bool,
    pub uploaded_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs: Option<LogCollection>,
    #[serde(flatten)]
    pub description: Description,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Site the record was extracted from.
    pub site: String,
    pub group: Group,
    pub item: Item,
}

impl Record {
    /// Group description first, then the item's.
    pub fn descriptions(&self) -> [&Description; 2] {
        [&self.group.description, &self.item.description]
    }

    /// Renders both descriptions through `format`, see [`join_descriptions`].
    pub fn joined_descriptions(&self, format: &dyn Format) -> Result<Vec<String>, FormatError> {
        join_descriptions(self.descriptions(), format)
    }
}

/// Joins descriptions for posting.
///
/// Yields up to two candidates, in this order:
/// - if the first description has markup, the markup of every description
///   (falling back to the rendered tree);
/// - if the first description has a tree, the rendered tree of every
///   description (falling back to the markup).
///
/// Empty parts are skipped and the rest joined with [`DESCRIPTION_SEPARATOR`].
pub fn join_descriptions<'a, I>(
    descriptions: I,
    format: &dyn Format,
) -> Result<Vec<String>, FormatError>
where
    I: IntoIterator<Item = &'a Description>,
{
    let parts = descriptions
        .into_iter()
        .map(|d| {
            let rendered = d
                .description_tree
                .as_deref()
                .map(|nodes| format.serialize(nodes))
                .transpose()?;
            Ok((d.description.clone(), rendered))
        })
        .collect::<Result<Vec<_>, FormatError>>()?;

    let Some(((first_plain, first_rendered), rest)) = parts.split_first() else {
        return Ok(Vec::new());
    };

    let join = |first: &str, prefer_plain: bool| -> String {
        std::iter::once(first)
            .chain(rest.iter().map(|part| pick(part, prefer_plain)))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(DESCRIPTION_SEPARATOR)
    };

    let mut joined = Vec::new();
    if let Some(plain) = first_plain {
        joined.push(join(plain, true));
    }
    if let Some(rendered) = first_rendered {
        joined.push(join(rendered, false));
    }
    Ok(joined)
}

fn pick(part: &(Option<String>, Option<String>), prefer_plain: bool) -> &str {
    let (plain, rendered) = part;
    let picked = if prefer_plain {
        plain.as_ref().or(rendered.as_ref())
    } else {
        rendered.as_ref().or(plain.as_ref())
    };
    picked.map(String::as_str).unwrap_or("")
}
