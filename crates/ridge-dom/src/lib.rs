//! Raw HTML tree produced by the ridge parser.
//!
//! The parser emits a forest: an ordered list of root [`Node`]s, since an
//! HTML fragment need not have a single root. Every node owns its children
//! outright, so there is no sharing and no cycles.
//!
//! # Design
//!
//! The tree is deliberately "raw": element attributes are kept as the
//! untouched source strings (`key`, `key=value`, `key='v a l'`). Shaping them
//! into maps or lists is the job of a formatter, which receives this tree
//! as-is.

use std::fmt::Write;

use serde::Serialize;

/// A node in the raw tree.
///
/// Serializes as `{"type": "element" | "text" | "comment", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// An element with its raw attributes and children.
    Element(Element),
    /// A run of character data, whitespace preserved verbatim.
    Text {
        /// The text as it appeared in the source.
        content: String,
    },
    /// An HTML comment, without the `<!--` and `-->` delimiters.
    Comment {
        /// The comment body.
        content: String,
    },
}

/// Element-specific data.
///
/// `children` is empty exactly when the tag is void, self-closing, or a
/// raw-text tag with no inner content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Tag name in its original source casing.
    pub tag_name: String,
    /// Raw attribute strings in source order, duplicates included.
    pub attributes: Vec<String>,
    /// Child nodes in source order.
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no children.
    #[must_use]
    pub const fn new(tag_name: String, attributes: Vec<String>) -> Self {
        Self {
            tag_name,
            attributes,
            children: Vec::new(),
        }
    }
}

impl Node {
    /// Create an element node.
    #[must_use]
    pub fn element(tag_name: &str, attributes: &[&str], children: Vec<Self>) -> Self {
        Self::Element(Element {
            tag_name: tag_name.to_string(),
            attributes: attributes.iter().map(ToString::to_string).collect(),
            children,
        })
    }

    /// Create a text node.
    #[must_use]
    pub fn text(content: &str) -> Self {
        Self::Text {
            content: content.to_string(),
        }
    }

    /// Create a comment node.
    #[must_use]
    pub fn comment(content: &str) -> Self {
        Self::Comment {
            content: content.to_string(),
        }
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { content } => Some(content),
            _ => None,
        }
    }

    /// Returns true if this is a text node.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    /// Child nodes; always empty for text and comments.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Element(element) => &element.children,
            Self::Text { .. } | Self::Comment { .. } => &[],
        }
    }

    /// Visit this node and then its descendants, depth-first, in document order.
    pub fn walk<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a Self),
    {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

/// Visit every node of a forest depth-first, in document order.
///
/// # Example
/// ```
/// use ridge_dom::{Node, walk};
///
/// let forest = vec![Node::element("p", &[], vec![Node::text("hi")])];
/// let mut count = 0;
/// walk(&forest, &mut |_| count += 1);
/// assert_eq!(count, 2);
/// ```
pub fn walk<'a, F>(nodes: &'a [Node], visit: &mut F)
where
    F: FnMut(&'a Node),
{
    for node in nodes {
        node.walk(visit);
    }
}

/// Render a forest as an indented, human-readable outline.
///
/// Whitespace in text nodes is made visible (`\n` and `·`).
#[must_use]
pub fn tree_to_string(nodes: &[Node], indent: usize) -> String {
    let mut out = String::new();
    write_tree(&mut out, nodes, indent);
    out
}

fn write_tree(out: &mut String, nodes: &[Node], indent: usize) {
    let prefix = "  ".repeat(indent);
    for node in nodes {
        match node {
            Node::Element(data) => {
                if data.attributes.is_empty() {
                    let _ = writeln!(out, "{prefix}<{}>", data.tag_name);
                } else {
                    let _ = writeln!(
                        out,
                        "{prefix}<{} {}>",
                        data.tag_name,
                        data.attributes.join(" ")
                    );
                }
                write_tree(out, &data.children, indent + 1);
            }
            Node::Text { content } => {
                let display = content.replace('\n', "\\n").replace(' ', "\u{00B7}");
                let _ = writeln!(out, "{prefix}\"{display}\"");
            }
            Node::Comment { content } => {
                let _ = writeln!(out, "{prefix}<!-- {content} -->");
            }
        }
    }
}

/// Print a forest to stdout as an indented outline.
pub fn print_tree(nodes: &[Node], indent: usize) {
    print!("{}", tree_to_string(nodes, indent));
}
