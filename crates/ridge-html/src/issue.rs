//! Recoveries from malformed input.
//!
//! Nothing here is an error. The lexer and parser always produce a tree;
//! these records only say where they had to guess.

use core::fmt;

use strum_macros::Display;

/// The kind of recovery that was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum IssueKind {
    /// A `<!--` without a matching `-->`; the comment runs to end of input.
    UnterminatedComment,
    /// A raw-text element without its closing tag; its text runs to end of input.
    UnterminatedRawText,
    /// A closing tag that matched no open element and was ignored.
    UnmatchedClosingTag,
    /// An element implicitly closed by the closing tag of an ancestor.
    MisnestedClosingTag,
    /// An element still open when the input ended.
    UnclosedElement,
}

impl IssueKind {
    /// Returns true for issues raised by the lexer, whose positions are byte
    /// offsets. Parser issues are positioned by token index.
    #[must_use]
    pub const fn is_lexical(self) -> bool {
        matches!(self, Self::UnterminatedComment | Self::UnterminatedRawText)
    }
}

/// A single recovery, with enough context to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// What happened.
    pub kind: IssueKind,
    /// The tag involved, in source casing, when there is one.
    pub tag: Option<String>,
    /// Byte offset into the source for lexical issues, token index otherwise.
    pub position: usize,
}

impl ParseIssue {
    /// Create an issue about a specific tag.
    #[must_use]
    pub fn for_tag(kind: IssueKind, tag: &str, position: usize) -> Self {
        Self {
            kind,
            tag: Some(tag.to_string()),
            position,
        }
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(tag) = &self.tag {
            write!(f, " <{tag}>")?;
        }
        let unit = if self.kind.is_lexical() { "byte" } else { "token" };
        write!(f, " at {unit} {}", self.position)
    }
}
