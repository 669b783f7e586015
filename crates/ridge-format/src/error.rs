//! Formatter errors.

use thiserror::Error;

/// Raw input a formatter cannot represent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// An attribute such as `="x"` whose key is empty.
    #[error("attribute `{raw}` on <{tag}> has an empty name")]
    EmptyAttributeName {
        /// Tag name of the element carrying the attribute.
        tag: String,
        /// The raw attribute string.
        raw: String,
    },
}
