//! The pluggable last stage of the pipeline.

use core::convert::Infallible;

use ridge_dom::Node;

use crate::lexer::tokenize;
use crate::parser::parse;
use crate::tags::ParseOptions;

/// Turns the raw forest into a caller-chosen output shape.
///
/// The formatter receives the full forest by value along with the options the
/// document was parsed with.
pub trait Formatter {
    /// What the formatter produces.
    type Output;
    /// Why formatting can fail.
    type Error;

    /// Shape a parsed forest.
    ///
    /// # Errors
    ///
    /// Whatever the formatter considers unrepresentable input.
    fn format(&self, nodes: Vec<Node>, options: &ParseOptions) -> Result<Self::Output, Self::Error>;
}

/// The identity formatter: returns the raw tree unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawFormatter;

impl Formatter for RawFormatter {
    type Output = Vec<Node>;
    type Error = Infallible;

    fn format(&self, nodes: Vec<Node>, _options: &ParseOptions) -> Result<Vec<Node>, Infallible> {
        Ok(nodes)
    }
}

/// Lex, parse and format `source`.
///
/// # Errors
///
/// Only the formatter can fail; lexing and parsing always succeed.
pub fn parse_document<F: Formatter>(
    source: &str,
    options: &ParseOptions,
    formatter: &F,
) -> Result<F::Output, F::Error> {
    let tokens = tokenize(source, options);
    let nodes = parse(tokens, options);
    formatter.format(nodes, options)
}

/// Lex and parse `source` into the raw tree.
///
/// # Example
/// ```
/// use ridge_html::{ParseOptions, parse_raw};
///
/// let nodes = parse_raw("<p>one<p>two", &ParseOptions::default());
/// assert_eq!(nodes.len(), 2);
/// ```
#[must_use]
pub fn parse_raw(source: &str, options: &ParseOptions) -> Vec<Node> {
    match parse_document(source, options, &RawFormatter) {
        Ok(nodes) => nodes,
        Err(never) => match never {},
    }
}
