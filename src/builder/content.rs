//! Values accepted as element content

use std::fmt::Display;

use crate::escape::{Html, Markup};
use crate::template::Template;

use super::Builder;

/// Content for an element, a placeholder or a document
///
/// Text is escaped when it is added; markup is spliced verbatim. Builders are
/// flattened into the host while their placeholder slots stay live; a builder
/// that has to stay live as a whole is embedded through [`Builder::share`].
#[derive(Debug)]
pub enum Content {
    /// Adds nothing
    Empty,
    /// Raw text, escaped on insertion
    Text(String),
    /// Trusted HTML
    Markup(String),
    /// A snippet to flatten into the host builder
    Snippet(Builder),
    /// A placeholder slot, rendered lazily
    Slot(Template),
}

impl Content {
    /// Text from anything with a string form
    pub fn display(value: impl Display) -> Self {
        Content::Text(value.to_string())
    }

    /// Trusted HTML from any markup-capable value
    pub fn markup(value: &impl Markup) -> Self {
        Content::Markup(value.to_html())
    }
}

impl From<()> for Content {
    fn from(_: ()) -> Self {
        Content::Empty
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<&String> for Content {
    fn from(text: &String) -> Self {
        Content::Text(text.clone())
    }
}

impl From<char> for Content {
    fn from(ch: char) -> Self {
        Content::Text(ch.to_string())
    }
}

impl From<Html> for Content {
    fn from(html: Html) -> Self {
        Content::Markup(html.into_string())
    }
}

impl From<&Html> for Content {
    fn from(html: &Html) -> Self {
        Content::Markup(html.as_str().to_string())
    }
}

impl From<Builder> for Content {
    fn from(builder: Builder) -> Self {
        Content::Snippet(builder)
    }
}

impl From<&Builder> for Content {
    fn from(builder: &Builder) -> Self {
        Content::Snippet(builder.snapshot())
    }
}

impl From<&mut Builder> for Content {
    fn from(builder: &mut Builder) -> Self {
        Content::Snippet(builder.snapshot())
    }
}

impl From<Template> for Content {
    fn from(template: Template) -> Self {
        Content::Slot(template)
    }
}

impl From<&Template> for Content {
    fn from(template: &Template) -> Self {
        Content::Slot(template.clone())
    }
}

impl<T: Into<Content>> From<Option<T>> for Content {
    fn from(value: Option<T>) -> Self {
        value.map_or(Content::Empty, Into::into)
    }
}

macro_rules! content_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Content {
                fn from(value: $ty) -> Self {
                    Content::Text(value.to_string())
                }
            }
        )*
    };
}

content_from_display!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
