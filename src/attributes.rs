//! Attribute serialization
//!
//! Converts ordered name/value pairs into the shortest valid HTML5 attribute
//! text: boolean attributes collapse to their bare name, simple values go
//! unquoted and names written as Rust identifiers are mangled into HTML names.

use crate::builder::Builder;
use crate::escape::{escape_attribute, Html, Markup};
use crate::template::Template;

/// The value of a single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// `true` emits the bare name, `false` omits the attribute
    Flag(bool),
    /// Omitted from the output
    Absent,
    /// Escaped and quoted as needed
    Text(String),
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Flag(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Text(value.clone())
    }
}

impl From<char> for AttrValue {
    fn from(value: char) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<Html> for AttrValue {
    fn from(value: Html) -> Self {
        AttrValue::Text(value.into_string())
    }
}

impl From<&Builder> for AttrValue {
    fn from(value: &Builder) -> Self {
        AttrValue::Text(value.to_html())
    }
}

impl From<&mut Builder> for AttrValue {
    fn from(value: &mut Builder) -> Self {
        AttrValue::Text(value.to_html())
    }
}

impl From<&Template> for AttrValue {
    fn from(value: &Template) -> Self {
        AttrValue::Text(value.to_html())
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttrValue::Absent, Into::into)
    }
}

macro_rules! attr_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> Self {
                    AttrValue::Text(value.to_string())
                }
            }
        )*
    };
}

attr_from_display!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// An ordered set of attributes
///
/// Insertion order is output order; nothing is sorted or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute, builder style
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Set an attribute, replacing an earlier entry with the same HTML name
    ///
    /// The replacement keeps the position of the earlier entry.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        let key = mangle(&name);
        match self.entries.iter_mut().find(|(existing, _)| mangle(existing) == key) {
            Some(entry) => *entry = (name, value),
            None => self.entries.push((name, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize to attribute text, see [`serialize_attributes`]
    pub fn render(&self) -> String {
        serialize_attributes(self)
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.push(name, value);
        }
        attrs
    }
}

/// Mangle a Rust-friendly identifier into an HTML tag or attribute name
///
/// Trailing underscores are removed and the remaining underscores become
/// hyphens.
///
/// ```
/// use html5tagger::attributes::mangle;
///
/// assert_eq!(mangle("for_"), "for");
/// assert_eq!(mangle("aria_role"), "aria-role");
/// ```
pub fn mangle(name: &str) -> String {
    name.trim_end_matches('_').replace('_', "-")
}

/// Serialize attributes, each with a single leading space
///
/// ```
/// use html5tagger::attributes::{serialize_attributes, Attributes};
///
/// let attrs = Attributes::new()
///     .with("type", "checkbox")
///     .with("id", "somebox")
///     .with("checked", true);
/// assert_eq!(serialize_attributes(&attrs), " type=checkbox id=somebox checked");
/// ```
pub fn serialize_attributes(attrs: &Attributes) -> String {
    let mut out = String::new();
    for (name, value) in attrs.iter() {
        let text = match value {
            AttrValue::Flag(false) | AttrValue::Absent => continue,
            AttrValue::Flag(true) => None,
            AttrValue::Text(text) => Some(text),
        };
        out.push(' ');
        out.push_str(&mangle(name));
        if let Some(text) = text {
            out.push('=');
            out.push_str(&escape_attribute(text));
        }
    }
    out
}
