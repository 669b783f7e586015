//! Tag tables and parse configuration.
//!
//! The defaults below are the drop-in tables every caller gets from
//! [`ParseOptions::default`]. Membership tests are case-insensitive: names are
//! stored lower-cased and queries are lower-cased before lookup.

use std::collections::{HashMap, HashSet};

/// Tags which do not need the closing tag.
/// For example: `<img>` does not need `</img>`.
pub const VOID_TAGS: &[&str] = &[
    "!doctype", "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen",
    "link", "meta", "param", "source", "track", "wbr",
];

/// Tags which contain arbitrary non-parsed content.
/// For example: `<script>` JavaScript should not be parsed.
pub const RAW_TEXT_TAGS: &[&str] = &["style", "script", "template"];

/// Tags which auto-close because they cannot be nested.
/// For example: `<p>Outer<p>Inner` is `<p>Outer</p><p>Inner</p>`.
pub const OPTIONALLY_CLOSING_TAGS: &[&str] = &[
    "html", "head", "body", "p", "dt", "dd", "li", "option", "thead", "th", "tbody", "tr", "td",
    "tfoot", "colgroup",
];

/// Optionally-closing tags paired with the ancestors that stop them from
/// auto-closing. In `<li><ul><li></ul></li>` the outer `<li>` stays open.
pub const ANCESTOR_BREAKERS: &[(&str, &[&str])] = &[
    ("li", &["ul", "ol", "menu"]),
    ("dt", &["dl"]),
    ("dd", &["dl"]),
    ("tbody", &["table"]),
    ("thead", &["table"]),
    ("tfoot", &["table"]),
    ("tr", &["table"]),
    ("td", &["table"]),
];

/// Compare two tag names ignoring case, without allocating.
#[must_use]
pub fn tag_eq(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// A case-insensitive set of tag names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    names: HashSet<String>,
}

impl TagSet {
    /// Build a set from tag names in any case.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names.into_iter().map(|n| n.as_ref().to_lowercase()).collect(),
        }
    }

    /// Add a tag name. Returns false if it was already present.
    pub fn insert(&mut self, name: &str) -> bool {
        self.names.insert(name.to_lowercase())
    }

    /// Case-insensitive membership test.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name) || self.names.contains(&name.to_lowercase())
    }

    /// Number of names in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the set holds no names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over the lower-cased names, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Configuration shared by the lexer and the parser.
///
/// This is a plain value: build one, borrow it into every `tokenize`/`parse`
/// call, and nothing mutates it behind your back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Elements that never have children or a closing tag.
    pub void_tags: TagSet,
    /// Elements whose content is lexed as a single text run.
    pub raw_text_tags: TagSet,
    /// Elements implicitly closed by a following element of the same name.
    pub optionally_closing_tags: TagSet,
    /// Lower-cased tag name to the ancestors that block its auto-close.
    pub ancestor_breakers: HashMap<String, TagSet>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            void_tags: TagSet::new(VOID_TAGS),
            raw_text_tags: TagSet::new(RAW_TEXT_TAGS),
            optionally_closing_tags: TagSet::new(OPTIONALLY_CLOSING_TAGS),
            ancestor_breakers: ANCESTOR_BREAKERS
                .iter()
                .map(|&(tag, breakers)| (tag.to_string(), TagSet::new(breakers)))
                .collect(),
        }
    }
}

impl ParseOptions {
    /// Options with every table empty: no void, raw-text or auto-closing tags.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            void_tags: TagSet::default(),
            raw_text_tags: TagSet::default(),
            optionally_closing_tags: TagSet::default(),
            ancestor_breakers: HashMap::new(),
        }
    }

    /// Replace the void tag table.
    #[must_use]
    pub fn with_void_tags(mut self, names: &[&str]) -> Self {
        self.void_tags = TagSet::new(names);
        self
    }

    /// Replace the raw-text tag table.
    #[must_use]
    pub fn with_raw_text_tags(mut self, names: &[&str]) -> Self {
        self.raw_text_tags = TagSet::new(names);
        self
    }

    /// Replace the optionally-closing tag table.
    #[must_use]
    pub fn with_optionally_closing_tags(mut self, names: &[&str]) -> Self {
        self.optionally_closing_tags = TagSet::new(names);
        self
    }

    /// Set the ancestor breakers for one optionally-closing tag.
    #[must_use]
    pub fn with_ancestor_breakers(mut self, tag: &str, breakers: &[&str]) -> Self {
        let _ = self
            .ancestor_breakers
            .insert(tag.to_lowercase(), TagSet::new(breakers));
        self
    }

    /// Returns true if `name` is a void tag.
    #[must_use]
    pub fn is_void(&self, name: &str) -> bool {
        self.void_tags.contains(name)
    }

    /// Returns true if `name` is a raw-text tag.
    #[must_use]
    pub fn is_raw_text(&self, name: &str) -> bool {
        self.raw_text_tags.contains(name)
    }

    /// Returns true if `name` may omit its closing tag.
    #[must_use]
    pub fn is_optionally_closing(&self, name: &str) -> bool {
        self.optionally_closing_tags.contains(name)
    }

    /// The ancestors that block auto-closing of `name`, if any.
    /// Expects a lower-cased name.
    #[must_use]
    pub fn ancestor_breakers_for(&self, name: &str) -> Option<&TagSet> {
        self.ancestor_breakers.get(name)
    }
}
