//! Render the key/value shape back to HTML.

use ridge_html::TagSet;
use ridge_html::tags::VOID_TAGS;

use crate::pairs::{Attribute, Node};

/// Options for [`to_html`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringifyOptions {
    /// Tags rendered without a closing tag.
    pub void_tags: TagSet,
    /// Quote values with `"` instead of `'` when possible.
    pub prefer_double_quote_attributes: bool,
    /// Close void tags explicitly (`<br></br>`).
    pub xml: bool,
}

impl Default for StringifyOptions {
    fn default() -> Self {
        Self {
            void_tags: TagSet::new(VOID_TAGS),
            prefer_double_quote_attributes: false,
            xml: false,
        }
    }
}

/// Render attributes, each preceded by a space.
///
/// Values are wrapped in the preferred quote, falling back to the other one
/// when the value contains the preferred quote character.
#[must_use]
pub fn format_attributes(attributes: &[Attribute], prefer_double_quote: bool) -> String {
    let mut out = String::new();
    for Attribute { key, value } in attributes {
        out.push(' ');
        out.push_str(key);
        let Some(value) = value else {
            continue;
        };
        let (preferred, fallback) = if prefer_double_quote {
            ('"', '\'')
        } else {
            ('\'', '"')
        };
        let quote = if value.contains(preferred) {
            fallback
        } else {
            preferred
        };
        out.push('=');
        out.push(quote);
        out.push_str(value);
        out.push(quote);
    }
    out
}

/// Render a forest as HTML. Text is emitted verbatim.
///
/// # Example
/// ```
/// use ridge_format::pairs::PairsFormatter;
/// use ridge_format::stringify::{StringifyOptions, to_html};
/// use ridge_html::{ParseOptions, parse_document};
///
/// let html = "<div class='foo bar'><br>x</div>";
/// let nodes = parse_document(html, &ParseOptions::default(), &PairsFormatter).unwrap();
/// assert_eq!(to_html(&nodes, &StringifyOptions::default()), html);
/// ```
#[must_use]
pub fn to_html(nodes: &[Node], options: &StringifyOptions) -> String {
    let mut out = String::new();
    write_nodes(&mut out, nodes, options);
    out
}

fn write_nodes(out: &mut String, nodes: &[Node], options: &StringifyOptions) {
    for node in nodes {
        match node {
            Node::Text { content } => out.push_str(content),
            Node::Comment { content } => {
                out.push_str("<!--");
                out.push_str(content);
                out.push_str("-->");
            }
            Node::Element(element) => {
                out.push('<');
                out.push_str(&element.tag_name);
                out.push_str(&format_attributes(
                    &element.attributes,
                    options.prefer_double_quote_attributes,
                ));
                out.push('>');
                if !options.xml && options.void_tags.contains(&element.tag_name) {
                    continue;
                }
                write_nodes(out, &element.children, options);
                out.push_str("</");
                out.push_str(&element.tag_name);
                out.push('>');
            }
        }
    }
}
