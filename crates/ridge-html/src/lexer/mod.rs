//! HTML lexer module.
//!
//! Turns source text into a flat token stream. The lexer never fails: any
//! input, however malformed, produces tokens.

/// Lexer state and the main scanning loop.
pub mod core;
/// Scanning helpers shared by tag and raw-text lexing.
pub mod helpers;
/// Token types produced by the lexer.
pub mod token;

pub use core::Lexer;
pub use token::Token;

use crate::tags::ParseOptions;

/// Lex `source` into tokens using the tag tables in `options`.
///
/// # Example
/// ```
/// use ridge_html::{ParseOptions, Token, tokenize};
///
/// let tokens = tokenize("<b>hi</b>", &ParseOptions::default());
/// assert_eq!(tokens[1], Token::tag_name("b"));
/// assert_eq!(tokens[3], Token::text("hi"));
/// ```
#[must_use]
pub fn tokenize(source: &str, options: &ParseOptions) -> Vec<Token> {
    let mut lexer = Lexer::new(source, options);
    lexer.run();
    lexer.into_tokens()
}
