//! The object output shape.
//!
//! Attributes become an ordered object with camel-cased keys. `class`,
//! `style` and `data-*` get dedicated structure, and numeric text is cast to
//! numbers:
//!
//! ```text
//! <div class='a b' style='font-size: 12px' data-count='2' tab-index=1>
//! {"className": ["a", "b"], "style": {"fontSize": "12px"},
//!  "dataset": {"count": 2}, "tabIndex": 1}
//! ```

use indexmap::IndexMap;
use ridge_common::warning::warn_once;
use ridge_dom as dom;
use ridge_html::{Formatter, ParseOptions};
use serde::Serialize;

use crate::error::FormatError;
use crate::value::{Value, camel_case, cast_value, split_head, unquote};

/// A node in the object shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
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

impl Node {
    /// Returns true for a text node that is empty or only whitespace.
    #[must_use]
    pub fn is_blank_text(&self) -> bool {
        matches!(self, Self::Text { content } if content.trim().is_empty())
    }
}

/// Element data in the object shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Lower-cased tag name.
    pub tag_name: String,
    /// Attributes keyed by camel-cased name, in first-seen order.
    pub attributes: IndexMap<String, AttributeValue>,
    /// Child nodes.
    pub children: Vec<Node>,
}

/// The value stored under one attribute key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// A plain attribute.
    Value(Value),
    /// `className`: the whitespace-separated classes.
    ClassList(Vec<String>),
    /// `style`: camel-cased property to value.
    Style(IndexMap<String, Value>),
    /// `dataset`: camel-cased `data-*` suffix to value.
    Dataset(IndexMap<String, Value>),
}

/// Parse the body of a `style` attribute.
///
/// Declarations are split on `;` and then on their first `:`. Declarations
/// without a value are skipped.
///
/// # Example
/// ```
/// use ridge_format::semantic::format_styles;
/// use ridge_format::value::Value;
///
/// let style = format_styles("background-color: #fff; z-index: 3");
/// assert_eq!(style.get("backgroundColor"), Some(&Value::from("#fff")));
/// assert_eq!(style.get("zIndex"), Some(&Value::Number(3.0)));
/// ```
#[must_use]
pub fn format_styles(text: &str) -> IndexMap<String, Value> {
    text.trim()
        .split(';')
        .filter_map(|rule| {
            let (key, value) = rule.trim().split_once(':')?;
            let (key, value) = (key.trim(), value.trim());
            (!key.is_empty() && !value.is_empty()).then(|| (camel_case(key), cast_value(value)))
        })
        .collect()
}

/// Shape the raw attributes of one element.
///
/// # Errors
///
/// Returns [`FormatError::EmptyAttributeName`] for an attribute like `="x"`.
pub fn format_attributes(
    tag_name: &str,
    raw_attributes: &[String],
) -> Result<IndexMap<String, AttributeValue>, FormatError> {
    let mut attributes = IndexMap::new();
    for raw in raw_attributes {
        let (key, value) = split_head(raw.trim(), "=");
        if key.is_empty() {
            return Err(FormatError::EmptyAttributeName {
                tag: tag_name.to_string(),
                raw: raw.clone(),
            });
        }
        let value = match value {
            Some(value) if !value.is_empty() => unquote(value),
            _ => key,
        };

        let replaced = if key == "class" {
            let classes = value.split_whitespace().map(ToString::to_string).collect();
            attributes.insert("className".to_string(), AttributeValue::ClassList(classes))
        } else if key == "style" {
            attributes.insert("style".to_string(), AttributeValue::Style(format_styles(value)))
        } else if let Some(suffix) = key.strip_prefix("data-") {
            insert_data(&mut attributes, tag_name, camel_case(suffix), cast_value(value));
            None
        } else {
            attributes.insert(camel_case(key), AttributeValue::Value(cast_value(value)))
        };

        if replaced.is_some() {
            warn_duplicate(tag_name, key);
        }
    }
    Ok(attributes)
}

fn insert_data(
    attributes: &mut IndexMap<String, AttributeValue>,
    tag_name: &str,
    property: String,
    value: Value,
) {
    let slot = attributes
        .entry("dataset".to_string())
        .or_insert_with(|| AttributeValue::Dataset(IndexMap::new()));
    if !matches!(slot, AttributeValue::Dataset(_)) {
        // A literal `dataset` attribute came first.
        warn_duplicate(tag_name, "dataset");
        *slot = AttributeValue::Dataset(IndexMap::new());
    }
    if let AttributeValue::Dataset(dataset) = slot
        && dataset.insert(property.clone(), value).is_some()
    {
        warn_duplicate(tag_name, &format!("data-{property}"));
    }
}

fn warn_duplicate(tag_name: &str, key: &str) {
    warn_once(
        "Formatter",
        &format!("duplicate attribute `{key}` on <{tag_name}>, keeping the last value"),
    );
}

/// Convert a raw forest to the object shape.
///
/// # Errors
///
/// Fails on the first attribute with an empty name.
pub fn format_nodes(nodes: Vec<dom::Node>) -> Result<Vec<Node>, FormatError> {
    nodes.into_iter().map(format_node).collect()
}

fn format_node(node: dom::Node) -> Result<Node, FormatError> {
    Ok(match node {
        dom::Node::Element(element) => {
            let tag_name = element.tag_name.to_lowercase();
            let attributes = format_attributes(&tag_name, &element.attributes)?;
            Node::Element(Element {
                tag_name,
                attributes,
                children: format_nodes(element.children)?,
            })
        }
        dom::Node::Text { content } => Node::Text { content },
        dom::Node::Comment { content } => Node::Comment { content },
    })
}

/// Formatter producing the object shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemanticFormatter;

impl Formatter for SemanticFormatter {
    type Output = Vec<Node>;
    type Error = FormatError;

    fn format(&self, nodes: Vec<dom::Node>, _options: &ParseOptions) -> Result<Vec<Node>, FormatError> {
        format_nodes(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(raw: &[&str]) -> IndexMap<String, AttributeValue> {
        let raw: Vec<String> = raw.iter().map(ToString::to_string).collect();
        format_attributes("div", &raw).unwrap()
    }

    #[test]
    fn missing_value_falls_back_to_key() {
        let attributes = attrs(&["disabled", "checked="]);
        assert_eq!(
            attributes.get("disabled"),
            Some(&AttributeValue::Value(Value::from("disabled")))
        );
        assert_eq!(
            attributes.get("checked"),
            Some(&AttributeValue::Value(Value::from("checked")))
        );
    }

    #[test]
    fn duplicate_keeps_first_position_and_last_value() {
        let attributes = attrs(&["a=1", "b=2", "a=3"]);
        assert_eq!(attributes.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(
            attributes.get("a"),
            Some(&AttributeValue::Value(Value::Number(3.0)))
        );
    }

    #[test]
    fn empty_styles_are_skipped() {
        let style = format_styles("color: ; ; margin: 0; :x");
        assert_eq!(style.len(), 1);
        assert_eq!(style.get("margin"), Some(&Value::Number(0.0)));
    }

    #[test]
    fn style_value_keeps_later_colons() {
        let style = format_styles("background: url(http://x/y.png)");
        assert_eq!(style.get("background"), Some(&Value::from("url(http://x/y.png)")));
    }
}
