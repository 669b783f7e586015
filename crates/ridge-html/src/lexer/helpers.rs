//! Scanning helpers for the lexer.
//!
//! All positions are byte offsets into the source and always sit on a UTF-8
//! character boundary.

/// Find where the text run starting at `from` ends: the next `<` that is
/// followed by `/`, `!` or an ASCII letter or digit. A `<` followed by
/// anything else is ordinary text.
#[must_use]
pub fn find_text_end(source: &str, from: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    let mut index = from;
    while let Some(offset) = source[index..].find('<') {
        let at = index + offset;
        match bytes.get(at + 1) {
            Some(b'/' | b'!') => return Some(at),
            Some(c) if c.is_ascii_alphanumeric() => return Some(at),
            _ => index = at + 1,
        }
    }
    None
}

fn is_name_char(c: char) -> bool {
    !(c.is_whitespace() || c == '/' || c == '>')
}

/// Locate a tag name starting at `from`, skipping any leading whitespace,
/// `/` or `>`. Returns the `(start, end)` byte range; the range is empty at
/// end of input.
#[must_use]
pub fn scan_tag_name(source: &str, from: usize) -> (usize, usize) {
    let start = source[from..]
        .char_indices()
        .find(|&(_, c)| is_name_char(c))
        .map_or(source.len(), |(offset, _)| from + offset);
    let end = source[start..]
        .char_indices()
        .find(|&(_, c)| !is_name_char(c))
        .map_or(source.len(), |(offset, _)| start + offset);
    (start, end)
}

/// Scan the attribute area of a tag starting at `from`.
///
/// Words are split on whitespace outside of quotes and the scan stops at the
/// first unquoted `/` or `>`. Returns the reassembled attributes and the
/// offset of the terminator (or end of input).
#[must_use]
pub fn scan_attributes(source: &str, from: usize) -> (Vec<String>, usize) {
    let mut words = Vec::new();
    let mut quote: Option<char> = None;
    let mut word_start = from;
    let mut end = source.len();

    for (offset, c) in source[from..].char_indices() {
        let at = from + offset;
        if let Some(open) = quote {
            if c == open {
                quote = None;
            }
            continue;
        }
        if c == '/' || c == '>' {
            end = at;
            break;
        }
        if c.is_whitespace() {
            if at != word_start {
                words.push(&source[word_start..at]);
            }
            word_start = at + c.len_utf8();
            continue;
        }
        if c == '\'' || c == '"' {
            quote = Some(c);
        }
    }
    if end > word_start {
        words.push(&source[word_start..end]);
    }

    (assemble_attributes(&words), end)
}

/// Rejoin words that belong to one attribute, so that `key = "v"`,
/// `key ="v"` and `key= "v"` all become `key="v"`.
#[must_use]
pub fn assemble_attributes(words: &[&str]) -> Vec<String> {
    let mut attributes = Vec::with_capacity(words.len());
    let mut i = 0;
    while i < words.len() {
        let word = words[i];
        if !word.contains('=')
            && let Some(next) = words.get(i + 1)
            && next.starts_with('=')
        {
            if next.len() > 1 {
                attributes.push(format!("{word}{next}"));
                i += 2;
                continue;
            }
            // `key = value`
            i += 1;
            if let Some(value) = words.get(i + 1) {
                attributes.push(format!("{word}={value}"));
                i += 2;
                continue;
            }
        }
        if let Some(key) = word.strip_suffix('=') {
            match words.get(i + 1) {
                Some(value) if !value.contains('=') => {
                    attributes.push(format!("{word}{value}"));
                    i += 2;
                }
                _ => {
                    attributes.push(key.to_string());
                    i += 1;
                }
            }
            continue;
        }
        attributes.push(word.to_string());
        i += 1;
    }
    attributes
}

/// Step past the `>` or `/>` that ends a tag at `at`.
///
/// After a `/` exactly one more character is consumed, whatever it is.
#[must_use]
pub fn skip_tag_end(source: &str, at: usize) -> usize {
    let mut chars = source[at..].chars();
    match chars.next() {
        Some('/') => at + 1 + chars.next().map_or(0, char::len_utf8),
        Some(c) => at + c.len_utf8(),
        None => at,
    }
}
