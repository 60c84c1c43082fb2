//! Escaping rules for text, attribute values and raw-text element bodies
//!
//! Everything here is total: any string can be escaped and nothing fails.
//! Values that already carry rendered HTML implement [`Markup`] and bypass
//! escaping entirely when used as content.

use std::fmt;

/// A value that renders itself as trusted HTML
///
/// Anything implementing this trait is spliced into the output verbatim when
/// used as content. Builders and placeholder handles implement it, which is how
/// snippets are embedded in one another.
pub trait Markup {
    /// Render the value as HTML
    fn to_html(&self) -> String;
}

/// A string of HTML that will not be escaped
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Html(String);

impl Html {
    /// Wrap an already rendered HTML string
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Capture the rendered output of any markup-capable value
    pub fn of(value: &impl Markup) -> Self {
        Self(value.to_html())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Markup for Html {
    fn to_html(&self) -> String {
        self.0.clone()
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Html {
    fn from(html: String) -> Self {
        Self(html)
    }
}

impl From<&str> for Html {
    fn from(html: &str) -> Self {
        Self(html.to_string())
    }
}

/// Escape text content
pub fn escape_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(ch),
        }
    }
    result
}

/// Escape an attribute value, including its delimiters
///
/// Non-empty alphanumeric values are emitted bare; anything else is wrapped in
/// double quotes.
///
/// ```
/// use html5tagger::escape::escape_attribute;
///
/// assert_eq!(escape_attribute("checkbox"), "checkbox");
/// assert_eq!(escape_attribute("utf-8"), r#""utf-8""#);
/// assert_eq!(escape_attribute(r#"say "hi""#), r#""say &quot;hi&quot;""#);
/// ```
pub fn escape_attribute(value: &str) -> String {
    if !value.is_empty() && value.chars().all(char::is_alphanumeric) {
        return value.to_string();
    }
    let mut result = String::with_capacity(value.len() + 10);
    result.push('"');
    for ch in value.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(ch),
        }
    }
    result.push('"');
    result
}

/// Escape the body of an inline `<script>` element
pub fn escape_script(code: &str) -> String {
    escape_end_tag(code, "script>")
}

/// Escape the body of an inline `<style>` element
pub fn escape_style(code: &str) -> String {
    escape_end_tag(code, "style>")
}

/// Escape comment text so that it cannot terminate the comment early
pub fn escape_comment(text: &str) -> String {
    text.replace("-->", "‒‒>")
}

/// Reverse the entity references produced by the escapers in this module
///
/// ```
/// use html5tagger::escape::{escape_text, unescape};
///
/// assert_eq!(unescape(&escape_text("a < b && c")), "a < b && c");
/// ```
pub fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

/// Insert a backslash into every `</` followed by `name` (ASCII case-insensitive)
fn escape_end_tag(text: &str, name: &str) -> String {
    let bytes = text.as_bytes();
    let mut result = String::with_capacity(text.len());
    let mut last = 0;
    let mut i = 0;
    while i + 2 <= bytes.len() {
        if &bytes[i..i + 2] == b"</"
            && bytes.len() >= i + 2 + name.len()
            && bytes[i + 2..i + 2 + name.len()].eq_ignore_ascii_case(name.as_bytes())
        {
            // Both slice boundaries sit next to ASCII bytes, so they are char boundaries
            result.push_str(&text[last..i + 1]);
            result.push('\\');
            last = i + 1;
            i += 2 + name.len();
        } else {
            i += 1;
        }
    }
    result.push_str(&text[last..]);
    result
}
