//! Property tests over generated markup.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use ridge_dom::{Node, walk};
use ridge_html::{ParseOptions, Token, parse_raw, parse_with_issues, tokenize};

/// Fragments that combine into mostly-broken HTML.
const FRAGMENTS: &[&str] = &[
    "<", "</", ">", "/>", "/", " ", "\n", "=", "'", "\"", "<!--", "-->", "div", "p", "li", "ul",
    "table", "td", "tr", "br", "img", "script", "style", "DIV", "Br", "a", "x=1", "class='a b'",
    "text", "é", "✓", "<!DOCTYPE html>",
];

/// A string assembled from HTML-ish fragments.
#[derive(Debug, Clone)]
struct Markup(String);

impl Arbitrary for Markup {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 64;
        let markup = (0..len)
            .filter_map(|_| g.choose(FRAGMENTS).copied())
            .collect();
        Self(markup)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Self))
    }
}

#[quickcheck]
fn lexer_never_panics(input: String) -> bool {
    let options = ParseOptions::default();
    let _ = tokenize(&input, &options);
    let _ = parse_with_issues(&input, &options);
    true
}

#[quickcheck]
fn lexer_never_panics_on_markup(input: Markup) -> bool {
    let _ = parse_with_issues(&input.0, &ParseOptions::default());
    true
}

#[quickcheck]
fn plain_text_is_one_token(input: String) -> bool {
    if input.is_empty() || input.contains('<') {
        return true;
    }
    tokenize(&input, &ParseOptions::default()) == [Token::Text { content: input }]
}

#[quickcheck]
fn void_tags_never_nest(input: Markup) -> bool {
    let options = ParseOptions::default();
    let nodes = parse_raw(&input.0, &options);
    let mut ok = true;
    walk(&nodes, &mut |node| {
        if let Node::Element(element) = node
            && options.is_void(&element.tag_name)
        {
            ok &= element.children.is_empty();
        }
    });
    ok
}

#[quickcheck]
fn parsing_is_deterministic(input: Markup) -> bool {
    let options = ParseOptions::default();
    parse_raw(&input.0, &options) == parse_raw(&input.0, &options)
}

#[quickcheck]
fn raw_text_content_is_opaque(body: String) -> bool {
    if body.is_empty() || body.to_lowercase().contains("</") {
        return true;
    }
    let html = format!("<script>{body}</script>");
    parse_raw(&html, &ParseOptions::default())
        == [Node::element("script", &[], vec![Node::Text { content: body }])]
}

#[quickcheck]
fn false_raw_text_closers_terminate(count: u16) -> bool {
    let count = usize::from(count % 2000);
    let html = format!("<style>{}</style>", "</styl ".repeat(count));
    let nodes = parse_raw(&html, &ParseOptions::default());
    nodes.len() == 1 && nodes[0].children().len() == usize::from(count > 0)
}
