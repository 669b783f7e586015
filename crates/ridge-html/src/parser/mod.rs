//! Tree construction from the token stream.

/// Parser state and the open-element stack.
pub mod core;

pub use core::Parser;

use ridge_dom::Node;

use crate::lexer::Token;
use crate::tags::ParseOptions;

/// Build a forest of raw nodes from `tokens`.
///
/// Never fails: stray tokens are ignored, unmatched closing tags dropped,
/// and anything left open at the end is closed.
#[must_use]
pub fn parse(tokens: Vec<Token>, options: &ParseOptions) -> Vec<Node> {
    Parser::new(tokens, options).run()
}
