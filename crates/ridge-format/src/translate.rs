//! Render the object shape as HTML or Pug.

use indexmap::IndexMap;
use ridge_html::TagSet;
use ridge_html::tags::{RAW_TEXT_TAGS, VOID_TAGS};

use crate::semantic::{AttributeValue, Element, Node};
use crate::value::{Value, dasherize};

const NEWLINE: char = '\n';

/// Options for [`to_html`] and [`to_pug`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Doctype to target. `xml` closes void tags and writes boolean
    /// attributes out in full; for Pug it also names the `doctype` line.
    pub doctype: Option<String>,
    /// One level of Pug indentation.
    pub indentation: String,
    /// Tags rendered without a closing tag.
    pub void_tags: TagSet,
    /// Tags whose text is always rendered as a Pug block.
    pub raw_text_tags: TagSet,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            doctype: None,
            indentation: "  ".to_string(),
            void_tags: TagSet::new(VOID_TAGS),
            raw_text_tags: TagSet::new(RAW_TEXT_TAGS),
        }
    }
}

impl TranslateOptions {
    fn is_xml(&self) -> bool {
        self.doctype.as_deref() == Some("xml")
    }
}

/// `key='value'`, or a bare `key` when the value repeats the key outside XML.
fn serialize_attribute(key: &str, value: &str, xml: bool) -> String {
    if !xml && key == value {
        return key.to_string();
    }
    let quote = if value.contains('\'') { '"' } else { '\'' };
    format!("{key}={quote}{value}{quote}")
}

fn inline_style(style: &IndexMap<String, Value>) -> String {
    style
        .iter()
        .map(|(property, value)| format!("{}: {value}", dasherize(property)))
        .collect::<Vec<_>>()
        .join("; ")
}

fn dataset_attributes<'a>(
    dataset: &'a IndexMap<String, Value>,
    xml: bool,
) -> impl Iterator<Item = String> + 'a {
    dataset.iter().map(move |(property, value)| {
        serialize_attribute(&format!("data-{}", dasherize(property)), &value.to_string(), xml)
    })
}

/// Render one attribute entry as one or more serialized attributes.
fn serialize_entry(key: &str, value: &AttributeValue, xml: bool) -> Vec<String> {
    match value {
        AttributeValue::Dataset(dataset) => dataset_attributes(dataset, xml).collect(),
        AttributeValue::Style(style) => vec![serialize_attribute("style", &inline_style(style), false)],
        AttributeValue::ClassList(classes) => {
            vec![serialize_attribute("class", &classes.join(" "), false)]
        }
        AttributeValue::Value(value) => {
            vec![serialize_attribute(&dasherize(key), &value.to_string(), xml)]
        }
    }
}

/// Render a forest as HTML.
///
/// # Example
/// ```
/// use ridge_format::semantic::SemanticFormatter;
/// use ridge_format::translate::{TranslateOptions, to_html};
/// use ridge_html::{ParseOptions, parse_document};
///
/// let html = "<div data-one='5' style='color: #fff; font-size: 12px'></div>";
/// let nodes = parse_document(html, &ParseOptions::default(), &SemanticFormatter).unwrap();
/// assert_eq!(to_html(&nodes, &TranslateOptions::default()), html);
/// ```
#[must_use]
pub fn to_html(nodes: &[Node], options: &TranslateOptions) -> String {
    let mut out = String::new();
    write_html(&mut out, nodes, options);
    out
}

fn write_html(out: &mut String, nodes: &[Node], options: &TranslateOptions) {
    let xml = options.is_xml();
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
                for (key, value) in element.attributes.iter() {
                    for attribute in serialize_entry(key, value, xml) {
                        out.push(' ');
                        out.push_str(&attribute);
                    }
                }
                out.push('>');
                if !xml && options.void_tags.contains(&element.tag_name) {
                    continue;
                }
                write_html(out, &element.children, options);
                out.push_str("</");
                out.push_str(&element.tag_name);
                out.push('>');
            }
        }
    }
}

/// Render a forest as Pug.
///
/// Whitespace-only text nodes are dropped, text lines are piped, and
/// multi-line text is re-indented to the nesting depth.
///
/// # Example
/// ```
/// use ridge_format::semantic::SemanticFormatter;
/// use ridge_format::translate::{TranslateOptions, to_pug};
/// use ridge_html::{ParseOptions, parse_document};
///
/// let html = "<div class='card'><h1>Hello</h1></div>";
/// let nodes = parse_document(html, &ParseOptions::default(), &SemanticFormatter).unwrap();
/// assert_eq!(to_pug(&nodes, &TranslateOptions::default()), ".card\n  h1 Hello");
/// ```
#[must_use]
pub fn to_pug(nodes: &[Node], options: &TranslateOptions) -> String {
    let pug = PugWriter::new(options);
    pug.nodes(nodes, 0)
}

struct PugWriter<'a> {
    options: &'a TranslateOptions,
    replace_tabs: bool,
}

impl<'a> PugWriter<'a> {
    fn new(options: &'a TranslateOptions) -> Self {
        Self {
            options,
            replace_tabs: options.indentation.contains('\t'),
        }
    }

    fn nodes(&self, nodes: &[Node], depth: usize) -> String {
        nodes
            .iter()
            .filter(|node| !node.is_blank_text())
            .map(|node| self.node(node, depth))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn node(&self, node: &Node, depth: usize) -> String {
        match node {
            Node::Text { content } => self.multiline(content, depth, "| "),
            Node::Comment { content } if content.contains(NEWLINE) => {
                format!(
                    "{}{NEWLINE}{}",
                    self.multiline("//", depth, ""),
                    self.multiline(content, depth + 1, "")
                )
            }
            Node::Comment { content } => self.multiline(&format!("//{content}"), depth, ""),
            Node::Element(element) => self.element(element, depth),
        }
    }

    fn element(&self, element: &Element, depth: usize) -> String {
        let xml = self.options.is_xml();
        let attributes = &element.attributes;

        let mut head = element.tag_name.clone();
        if let Some(AttributeValue::Value(id)) = attributes.get("id") {
            let id = id.to_string();
            if !id.is_empty() {
                head.push('#');
                head.push_str(&id);
            }
        }
        if let Some(AttributeValue::ClassList(classes)) = attributes.get("className")
            && !classes.is_empty()
        {
            head.push('.');
            head.push_str(&classes.join("."));
        }
        if element.tag_name == "div" && head.len() > 3 {
            head.replace_range(..3, "");
        }

        let mut tag = self.multiline(&head, depth, "");
        let props: Vec<String> = attributes
            .iter()
            .filter(|&(key, _)| key != "className" && key != "id")
            .flat_map(|(key, value)| serialize_entry(key, value, xml))
            .collect();
        if !props.is_empty() {
            tag.push('(');
            tag.push_str(&props.join(", "));
            tag.push(')');
        }

        let tag_name = element.tag_name.to_lowercase();
        if self.options.void_tags.contains(&tag_name) {
            if tag_name == "!doctype" {
                let doctype = self
                    .options
                    .doctype
                    .clone()
                    .unwrap_or_else(|| doctype_shortcut(&tag).to_string());
                return self.multiline(&format!("doctype {doctype}"), depth, "");
            }
            return tag;
        }

        let children = &element.children;
        if self.options.raw_text_tags.contains(&tag_name) {
            let text: String = children.iter().filter_map(text_content).collect();
            if text.trim().is_empty() {
                return tag;
            }
            return format!("{tag}.{NEWLINE}{}", self.multiline(&text, depth + 1, ""));
        }
        match children.as_slice() {
            [] => tag,
            [Node::Text { content }] if content.contains(NEWLINE) => {
                format!("{tag}.{NEWLINE}{}", self.multiline(content, depth + 1, ""))
            }
            [Node::Text { content }] => format!("{tag} {content}"),
            _ => format!("{tag}{NEWLINE}{}", self.nodes(children, depth + 1)),
        }
    }

    /// Split on newlines, drop blank lines, strip the shared leading
    /// whitespace, then indent each line to `depth` behind `lead`.
    fn multiline(&self, text: &str, depth: usize, lead: &str) -> String {
        let lines: Vec<String> = text
            .split(NEWLINE)
            .map(|line| {
                if self.replace_tabs {
                    line.replace('\t', &self.options.indentation)
                } else {
                    line.to_string()
                }
            })
            .filter(|line| !line.trim().is_empty())
            .collect();

        let shared = max_shared_indent(&lines);
        let indent = self.options.indentation.repeat(depth);
        lines
            .iter()
            .map(|line| {
                let rest = line.char_indices().nth(shared).map_or("", |(at, _)| &line[at..]);
                format!("{indent}{lead}{rest}")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn text_content(node: &Node) -> Option<&str> {
    match node {
        Node::Text { content } => Some(content),
        _ => None,
    }
}

/// Leading whitespace, in characters, common to every line.
fn max_shared_indent(lines: &[String]) -> usize {
    lines
        .iter()
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0)
}

/// The Pug doctype keyword for a rendered doctype tag.
#[must_use]
pub fn doctype_shortcut(tag: &str) -> &'static str {
    let tag = tag.to_lowercase();
    [
        ("transitional", "transitional"),
        ("strict", "strict"),
        ("frameset", "frameset"),
        ("basic", "basic"),
        ("1.1", "1.1"),
        ("mobile", "mobile"),
    ]
    .into_iter()
    .find_map(|(needle, shortcut)| tag.contains(needle).then_some(shortcut))
    .unwrap_or("html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_attribute_picks_quotes() {
        assert_eq!(serialize_attribute("a", "b", false), "a='b'");
        assert_eq!(serialize_attribute("a", "it's", false), "a=\"it's\"");
        assert_eq!(serialize_attribute("async", "async", false), "async");
        assert_eq!(serialize_attribute("async", "async", true), "async='async'");
    }

    #[test]
    fn multiline_strips_shared_indent() {
        let options = TranslateOptions::default();
        let pug = PugWriter::new(&options);
        assert_eq!(
            pug.multiline("\n    a\n      b\n\n", 1, "| "),
            "  | a\n  |   b"
        );
    }

    #[test]
    fn tabs_become_indentation_when_indenting_with_tabs() {
        let options = TranslateOptions {
            indentation: "\t\t".to_string(),
            ..TranslateOptions::default()
        };
        let pug = PugWriter::new(&options);
        assert_eq!(pug.multiline("x\n\ty", 0, ""), "x\n\t\ty");
    }

    #[test]
    fn doctype_shortcuts() {
        assert_eq!(doctype_shortcut("!doctype(html)"), "html");
        assert_eq!(
            doctype_shortcut("!doctype(html, public, \"-//w3c//dtd xhtml 1.0 transitional//en\")"),
            "transitional"
        );
        assert_eq!(doctype_shortcut("!DOCTYPE html PUBLIC \"XHTML Basic 1.1\""), "basic");
    }
}
