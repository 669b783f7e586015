//! The cell output shape.
//!
//! The forest is wrapped in one root cell. Each element becomes a cell whose
//! `$type` is the tag name, whose attributes sit beside it under their raw
//! keys, and whose child elements are listed in `$components`. Text is not a
//! component: it is concatenated into the parent's `$html`.
//!
//! ```text
//! <div id=x><h1>Hi</h1></div>
//! {"$type": "div", "class": "cell-root", "$cell": true,
//!  "$components": [{"$type": "div", "id": "x",
//!                   "$components": [{"$type": "h1", "$html": "Hi"}]}]}
//! ```

use core::convert::Infallible;

use indexmap::IndexMap;
use ridge_dom as dom;
use ridge_html::{Formatter, ParseOptions};
use serde::Serialize;

use crate::value::{split_head, unquote};

/// The wrapper cell around the whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootOptions {
    /// `$type` of the root cell.
    pub cell_type: String,
    /// `class` of the root cell.
    pub class: String,
    /// `$cell` of the root cell.
    pub active: bool,
}

impl Default for RootOptions {
    fn default() -> Self {
        Self {
            cell_type: "div".to_string(),
            class: "cell-root".to_string(),
            active: true,
        }
    }
}

/// Options for [`CellFormatter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellOptions {
    /// The root cell.
    pub root: RootOptions,
    /// Trim text before adding it to `$html`, dropping whitespace-only runs.
    pub trim: bool,
    /// Lower-case element tag names.
    pub lower_case_tag: bool,
}

impl Default for CellOptions {
    fn default() -> Self {
        Self {
            root: RootOptions::default(),
            trim: false,
            lower_case_tag: true,
        }
    }
}

/// The root of the cell shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootCell {
    /// Root tag name.
    #[serde(rename = "$type")]
    pub cell_type: String,
    /// Root class.
    pub class: String,
    /// Whether the root is an active cell.
    #[serde(rename = "$cell")]
    pub active: bool,
    /// Top-level text, concatenated.
    #[serde(rename = "$html", skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Top-level elements. Always present, even when empty.
    #[serde(rename = "$components")]
    pub components: Vec<Cell>,
}

/// One element in the cell shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    /// Tag name.
    #[serde(rename = "$type")]
    pub cell_type: String,
    /// Raw attribute keys to unquoted values; `None` for a bare key.
    #[serde(flatten)]
    pub attributes: IndexMap<String, Option<String>>,
    /// Text children, concatenated.
    #[serde(rename = "$html", skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Element children.
    #[serde(rename = "$components", skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Cell>,
}

/// Map raw attributes to cell keys.
///
/// Keys are kept as written. Later duplicates overwrite earlier values but
/// keep the first position.
///
/// # Example
/// ```
/// use ridge_format::cell::format_attributes;
///
/// let raw = ["foo=\"bar\"".to_string(), "disabled".to_string()];
/// let attributes = format_attributes(&raw);
/// assert_eq!(attributes["foo"].as_deref(), Some("bar"));
/// assert_eq!(attributes["disabled"], None);
/// ```
#[must_use]
pub fn format_attributes(raw_attributes: &[String]) -> IndexMap<String, Option<String>> {
    raw_attributes
        .iter()
        .map(|raw| {
            let (key, value) = split_head(raw.trim(), "=");
            (key.to_string(), value.map(|value| unquote(value).to_string()))
        })
        .collect()
}

/// Formatter producing the cell shape.
#[derive(Debug, Clone, Default)]
pub struct CellFormatter {
    /// How cells are built.
    pub options: CellOptions,
}

impl CellFormatter {
    /// Create a formatter with the given options.
    #[must_use]
    pub const fn new(options: CellOptions) -> Self {
        Self { options }
    }

    /// Split `nodes` into the components and `$html` of their parent.
    /// Comments are dropped.
    fn components(&self, nodes: Vec<dom::Node>) -> (Vec<Cell>, Option<String>) {
        let mut components = Vec::new();
        let mut html: Option<String> = None;
        for node in nodes {
            match node {
                dom::Node::Element(element) => components.push(self.cell(element)),
                dom::Node::Text { content } => {
                    let text = if self.options.trim { content.trim() } else { &content };
                    if !self.options.trim || !text.is_empty() {
                        html.get_or_insert_with(String::new).push_str(text);
                    }
                }
                dom::Node::Comment { .. } => {}
            }
        }
        (components, html)
    }

    fn cell(&self, element: dom::Element) -> Cell {
        let cell_type = if self.options.lower_case_tag {
            element.tag_name.to_lowercase()
        } else {
            element.tag_name
        };
        let attributes = format_attributes(&element.attributes);
        let (components, html) = self.components(element.children);
        Cell {
            cell_type,
            attributes,
            html,
            components,
        }
    }
}

impl Formatter for CellFormatter {
    type Output = RootCell;
    type Error = Infallible;

    fn format(&self, nodes: Vec<dom::Node>, _options: &ParseOptions) -> Result<RootCell, Infallible> {
        let root = &self.options.root;
        let (components, html) = self.components(nodes);
        Ok(RootCell {
            cell_type: root.cell_type.clone(),
            class: root.class.clone(),
            active: root.active,
            html,
            components,
        })
    }
}
