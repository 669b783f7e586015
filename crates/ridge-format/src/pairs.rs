//! The key/value output shape.
//!
//! Tag names are lower-cased and each raw attribute becomes a
//! `{key, value}` pair, where `value` is `null` for a bare key. Attribute
//! order and duplicates are preserved.

use core::convert::Infallible;

use ridge_dom as dom;
use ridge_html::{Formatter, ParseOptions};
use serde::Serialize;

use crate::value::{split_head, unquote};

/// A node in the key/value shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// An element.
    Element(Element),
    /// Character data.
    Text {
        /// The text, verbatim.
        content: String,
    },
    /// A comment.
    Comment {
        /// The comment body.
        content: String,
    },
}

/// Element data in the key/value shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Lower-cased tag name.
    pub tag_name: String,
    /// Attributes in source order.
    pub attributes: Vec<Attribute>,
    /// Child nodes.
    pub children: Vec<Node>,
}

/// One attribute as a key and an optional value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Everything before the first `=`.
    pub key: String,
    /// Unquoted text after the first `=`, or `None` for a bare key.
    pub value: Option<String>,
}

impl Attribute {
    /// Split a raw attribute string.
    ///
    /// # Example
    /// ```
    /// use ridge_format::pairs::Attribute;
    ///
    /// let attribute = Attribute::parse(" cake='man' ");
    /// assert_eq!(attribute.key, "cake");
    /// assert_eq!(attribute.value.as_deref(), Some("man"));
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let (key, value) = split_head(raw.trim(), "=");
        Self {
            key: key.to_string(),
            value: value.map(|v| unquote(v).to_string()),
        }
    }
}

/// Convert a raw forest to the key/value shape.
#[must_use]
pub fn format_nodes(nodes: Vec<dom::Node>) -> Vec<Node> {
    nodes.into_iter().map(format_node).collect()
}

fn format_node(node: dom::Node) -> Node {
    match node {
        dom::Node::Element(element) => Node::Element(Element {
            tag_name: element.tag_name.to_lowercase(),
            attributes: element.attributes.iter().map(|raw| Attribute::parse(raw)).collect(),
            children: format_nodes(element.children),
        }),
        dom::Node::Text { content } => Node::Text { content },
        dom::Node::Comment { content } => Node::Comment { content },
    }
}

/// Formatter producing the key/value shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairsFormatter;

impl Formatter for PairsFormatter {
    type Output = Vec<Node>;
    type Error = Infallible;

    fn format(&self, nodes: Vec<dom::Node>, _options: &ParseOptions) -> Result<Vec<Node>, Infallible> {
        Ok(format_nodes(nodes))
    }
}
