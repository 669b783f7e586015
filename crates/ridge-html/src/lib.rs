//! Forgiving HTML lexer and parser for ridge.
//!
//! # Scope
//!
//! This crate implements:
//! - **Lexer**: text, comments, tags, attribute reassembly and raw-text
//!   elements (`<script>`, `<style>`, `<template>`)
//! - **Parser**: tree construction with void elements, optionally-closing
//!   elements and ancestor breakers
//! - **Formatter** seam: the last pipeline stage, chosen by the caller
//!
//! Malformed input never fails. The lexer and parser recover and, on
//! request, report what they recovered from as [`ParseIssue`]s.
//!
//! # Not Implemented
//!
//! - Character reference decoding (`&amp;` stays as written)
//! - Streaming input
//! - Source positions on nodes

/// Formatter trait and the end-to-end entry points.
pub mod format;
/// Recovery records.
pub mod issue;
/// Source text to tokens.
pub mod lexer;
/// Tokens to tree.
pub mod parser;
/// Tag tables and parse configuration.
pub mod tags;

pub use format::{Formatter, RawFormatter, parse_document, parse_raw};
pub use issue::{IssueKind, ParseIssue};
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parser, parse};
pub use tags::{ParseOptions, TagSet};

use ridge_dom::Node;

/// Lex and parse `source`, returning the raw tree together with every
/// recovery made by the lexer and then the parser.
#[must_use]
pub fn parse_with_issues(source: &str, options: &ParseOptions) -> (Vec<Node>, Vec<ParseIssue>) {
    let mut lexer = Lexer::new(source, options);
    lexer.run();
    let (tokens, mut issues) = lexer.into_parts();
    let (nodes, parse_issues) = Parser::new(tokens, options).run_with_issues();
    issues.extend(parse_issues);
    (nodes, issues)
}
