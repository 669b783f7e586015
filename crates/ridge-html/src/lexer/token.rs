//! Lexer tokens.

use core::fmt;

/// A lexical unit of the HTML source.
///
/// A tag always lexes as `TagStart`, `TagName`, zero or more `Attribute`s,
/// then `TagEnd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Character data between tags, verbatim.
    Text {
        /// The text, whitespace included.
        content: String,
    },
    /// The body of a `<!-- ... -->` comment.
    Comment {
        /// Everything between the delimiters.
        content: String,
    },
    /// `<` or `</`.
    TagStart {
        /// True for `</`.
        closing: bool,
    },
    /// The tag name, in source casing.
    TagName {
        /// The name as written.
        content: String,
    },
    /// One raw attribute string such as `key`, `key=value` or `key="v a l"`.
    Attribute {
        /// The reassembled attribute text.
        content: String,
    },
    /// `>` or `/>`.
    TagEnd {
        /// True for `/>`.
        self_closing: bool,
    },
}

impl Token {
    /// Create a text token.
    #[must_use]
    pub fn text(content: &str) -> Self {
        Self::Text {
            content: content.to_string(),
        }
    }

    /// Create a comment token.
    #[must_use]
    pub fn comment(content: &str) -> Self {
        Self::Comment {
            content: content.to_string(),
        }
    }

    /// Create a tag-name token.
    #[must_use]
    pub fn tag_name(content: &str) -> Self {
        Self::TagName {
            content: content.to_string(),
        }
    }

    /// Create an attribute token.
    #[must_use]
    pub fn attribute(content: &str) -> Self {
        Self::Attribute {
            content: content.to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text { content } => write!(f, "Text({content:?})"),
            Self::Comment { content } => write!(f, "Comment({content:?})"),
            Self::TagStart { closing: false } => write!(f, "TagStart(<)"),
            Self::TagStart { closing: true } => write!(f, "TagStart(</)"),
            Self::TagName { content } => write!(f, "TagName({content})"),
            Self::Attribute { content } => write!(f, "Attribute({content})"),
            Self::TagEnd { self_closing: false } => write!(f, "TagEnd(>)"),
            Self::TagEnd { self_closing: true } => write!(f, "TagEnd(/>)"),
        }
    }
}
