//! html5tagger - Generate HTML5 documents directly from Rust code
//!
//! Tags are addressed by name and closed implicitly following HTML5's
//! optional end tag rules, text and attributes are escaped automatically, and
//! named placeholders let parts of a finished document be replaced and
//! rendered again.
//!
//! # Example
//!
//! ```rust
//! use html5tagger::{document, DocumentConfig};
//!
//! let mut doc = document(&DocumentConfig::new().with_title("Greeting").with_lang("en"))?;
//! doc.tag("body");
//! doc.tag("h1").place("Heading")?;
//! doc.tag("input").attr("type", "checkbox").attr("id", "somebox").attr("checked", true);
//!
//! doc.set("Heading", "Hello & welcome")?;
//! assert_eq!(
//!     doc.render(),
//!     concat!(
//!         r#"<!DOCTYPE html><html lang=en><meta charset="utf-8"><title>Greeting</title>"#,
//!         r#"<body><h1>Hello &amp; welcome</h1><input type=checkbox id=somebox checked>"#,
//!     )
//! );
//! # Ok::<(), html5tagger::BuilderError>(())
//! ```

pub mod attributes;
pub mod builder;
pub mod document;
pub mod error;
pub mod escape;
pub mod html5;
pub mod template;

pub use attributes::{AttrValue, Attributes};
pub use builder::{Builder, Content, Scope};
pub use document::{document, ConfigError, DocumentConfig};
pub use error::BuilderError;
pub use escape::{Html, Markup};
pub use template::Template;

/// Create an empty builder for composing a snippet
///
/// ```rust
/// use html5tagger::snippet;
///
/// let mut doc = snippet();
/// doc.tag("table").content(
///     snippet().tag("tr").content(snippet().tag("th").content("First")),
/// );
/// assert_eq!(doc.render(), "<table><tr><th>First</table>");
/// ```
pub fn snippet() -> Builder {
    Builder::new("E Builder")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_is_empty() {
        let doc = snippet();
        assert!(doc.is_empty());
        assert_eq!(doc.name(), "E Builder");
        assert_eq!(doc.render(), "");
    }

    #[test]
    fn test_nested_snippets() {
        let mut doc = snippet();
        doc.tag("ul").content(
            snippet()
                .tag("li")
                .content("one")
                .tag("li")
                .content("two"),
        );
        assert_eq!(doc.render(), "<ul><li>one<li>two</ul>");
    }

    #[test]
    fn test_markup_value_is_not_escaped() {
        struct Badge(&'static str);
        impl Markup for Badge {
            fn to_html(&self) -> String {
                format!("<span class=badge>{}</span>", self.0)
            }
        }
        let mut doc = snippet();
        doc.tag("p").contents([Content::from("new "), Content::markup(&Badge("<3"))]);
        assert_eq!(doc.render(), "<p>new <span class=badge><3</span>");
    }

    #[test]
    fn test_display_values_are_coerced() {
        let mut doc = snippet();
        doc.tag("td").content(42).tag("td").content(2.5).tag("td").content(Content::display('x'));
        assert_eq!(doc.render(), "<td>42<td>2.5<td>x");
    }
}
