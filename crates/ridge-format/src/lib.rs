//! Output shapes and stringifiers for ridge trees.
//!
//! - [`pairs`]: tag names lower-cased, attributes as `{key, value}` pairs
//! - [`semantic`]: attributes as a camel-cased object with `className`,
//!   `style` and `dataset` structure
//! - [`cell`]: a root cell with element cells nested in `$components`
//! - [`stringify`]: the pairs shape back to HTML
//! - [`translate`]: the semantic shape to HTML or Pug
//!
//! Every shape plugs into [`ridge_html::parse_document`] through the
//! [`ridge_html::Formatter`] trait.

/// Cell shape.
pub mod cell;
/// Formatter errors.
pub mod error;
/// Key/value shape.
pub mod pairs;
/// Object shape.
pub mod semantic;
/// Pairs shape to HTML.
pub mod stringify;
/// Semantic shape to HTML and Pug.
pub mod translate;
/// Attribute values and string helpers.
pub mod value;

pub use cell::{CellFormatter, CellOptions};
pub use error::FormatError;
pub use pairs::PairsFormatter;
pub use semantic::SemanticFormatter;
pub use stringify::StringifyOptions;
pub use translate::TranslateOptions;
pub use value::Value;
