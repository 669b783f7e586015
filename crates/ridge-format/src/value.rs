//! Attribute values and the string helpers shared by the formatters.

use core::fmt;

use serde::{Serialize, Serializer};

/// A scalar attribute value: a number when the text is purely numeric,
/// otherwise the text itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A finite number.
    Number(f64),
    /// Anything else, verbatim.
    Text(String),
}

impl Value {
    /// The text, if this is not a number.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64's Display already drops a zero fraction.
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Largest magnitude below which every integer is exactly representable.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Serialize for Value {
    #[allow(clippy::cast_possible_truncation)]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(number) if number.fract() == 0.0 && number.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*number as i64)
            }
            Self::Number(number) => serializer.serialize_f64(*number),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

/// Convert attribute text to a [`Value`].
///
/// The text is trimmed and parsed as a decimal number; only a full, finite
/// parse becomes a number. Empty and whitespace-only text is never cast.
///
/// # Example
/// ```
/// use ridge_format::value::{Value, cast_value};
///
/// assert_eq!(cast_value("12"), Value::Number(12.0));
/// assert_eq!(cast_value("1abc"), Value::Text("1abc".into()));
/// assert_eq!(cast_value(""), Value::Text(String::new()));
/// ```
#[must_use]
pub fn cast_value(text: &str) -> Value {
    let trimmed = text.trim();
    if !trimmed.is_empty()
        && let Ok(number) = trimmed.parse::<f64>()
        && number.is_finite()
    {
        return Value::Number(number);
    }
    Value::Text(text.to_string())
}

/// Split at the first `sep`. The second part is `None` when `sep` is absent.
#[must_use]
pub fn split_head<'a>(text: &'a str, sep: &str) -> (&'a str, Option<&'a str>) {
    match text.split_once(sep) {
        Some((head, tail)) => (head, Some(tail)),
        None => (text, None),
    }
}

/// Strip one pair of matching `'` or `"` quotes.
#[must_use]
pub fn unquote(text: &str) -> &str {
    match text.chars().next() {
        Some(quote @ ('"' | '\'')) if text[1..].ends_with(quote) || text.len() == 1 => {
            text.get(1..text.len() - 1).unwrap_or_default()
        }
        _ => text,
    }
}

/// `font-size` to `fontSize`. Only `-` separates words.
#[must_use]
pub fn camel_case(text: &str) -> String {
    let mut words = text.split('-');
    let mut out = words.next().unwrap_or_default().to_string();
    for word in words {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// `backgroundColor` to `background-color`.
///
/// Trims, puts a `-` before every ASCII capital, collapses runs of `-`, `_`
/// and whitespace into one `-`, and lower-cases the result.
#[must_use]
pub fn dasherize(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut in_separator = false;
    for c in text.trim().chars() {
        if c == '-' || c == '_' || c.is_whitespace() || c.is_ascii_uppercase() {
            if !in_separator {
                out.push('-');
            }
            in_separator = !c.is_ascii_uppercase();
            if c.is_ascii_uppercase() {
                out.push(c.to_ascii_lowercase());
            }
            continue;
        }
        in_separator = false;
        out.extend(c.to_lowercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cast_value_only_casts_whole_numbers() {
        assert_eq!(cast_value("12"), Value::Number(12.0));
        assert_eq!(cast_value(" 1.5 "), Value::Number(1.5));
        assert_eq!(cast_value("-3e2"), Value::Number(-300.0));
        assert_eq!(cast_value("this has a 12"), Value::from("this has a 12"));
        assert_eq!(cast_value("1abc"), Value::from("1abc"));
        assert_eq!(cast_value("   "), Value::from("   "));
        assert_eq!(cast_value("NaN"), Value::from("NaN"));
        assert_eq!(cast_value("inf"), Value::from("inf"));
    }

    #[test]
    fn numbers_display_without_zero_fraction() {
        assert_eq!(Value::Number(5.0).to_string(), "5");
        assert_eq!(Value::Number(0.25).to_string(), "0.25");
    }

    #[test]
    fn split_head_splits_once() {
        assert_eq!(split_head("a=b=c", "="), ("a", Some("b=c")));
        assert_eq!(split_head("a", "="), ("a", None));
        assert_eq!(split_head("a=", "="), ("a", Some("")));
    }

    #[test]
    fn unquote_needs_matching_quotes() {
        assert_eq!(unquote("'man'"), "man");
        assert_eq!(unquote("\"bar\""), "bar");
        assert_eq!(unquote("'mixed\""), "'mixed\"");
        assert_eq!(unquote("'"), "");
        assert_eq!(unquote("plain"), "plain");
    }

    #[test]
    fn camel_case_joins_dashed_words() {
        assert_eq!(camel_case("border-top-left-radius"), "borderTopLeftRadius");
        assert_eq!(camel_case("color"), "color");
        assert_eq!(camel_case("a--b"), "aB");
    }

    #[test]
    fn dasherize_reverses_camel_case() {
        assert_eq!(dasherize("backgroundColor"), "background-color");
        assert_eq!(dasherize(" font_size "), "font-size");
        assert_eq!(dasherize("a  -_B"), "a-b");
        assert_eq!(dasherize("width"), "width");
    }
}
