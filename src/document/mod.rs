//! Complete HTML5 documents
//!
//! [`document`] seeds a builder with the DOCTYPE and a minimal head section
//! (root tag attributes, charset, title, viewport and linked resources) so that
//! user content can follow directly.

pub mod config;
pub mod resources;

pub use config::{ConfigError, DocumentConfig, DEFAULT_VIEWPORT};
pub use resources::{classify, Resource};

use crate::builder::Builder;
use crate::error::BuilderError;
use crate::escape::Html;

/// Construct a new document builder
///
/// The `<html>` tag is only written when it has attributes. The charset and
/// `<title>` are only written when a title is configured, so an empty
/// configuration produces just the DOCTYPE.
///
/// ```
/// use html5tagger::{document, DocumentConfig};
///
/// let config = DocumentConfig::new().with_title("Test").with_lang("en");
/// let mut doc = document(&config)?;
/// doc.tag("p").content("Hello");
/// assert_eq!(
///     doc.render(),
///     r#"<!DOCTYPE html><html lang=en><meta charset="utf-8"><title>Test</title><p>Hello"#
/// );
/// # Ok::<(), html5tagger::BuilderError>(())
/// ```
pub fn document(config: &DocumentConfig) -> Result<Builder, BuilderError> {
    let mut doc = Builder::new("Document Builder");
    doc.content(Html::new("<!DOCTYPE html>"));
    if !config.html.is_empty() {
        doc.tag("html").attrs(
            config
                .html
                .iter()
                .map(|(name, value)| (name, value.clone())),
        );
    }
    if let Some(title) = &config.title {
        doc.tag("meta").attr("charset", "utf-8");
        doc.tag("title").content(title);
    }
    if let Some(viewport) = &config.viewport {
        doc.tag("meta")
            .attr("name", "viewport")
            .attr("content", viewport);
    }
    for url in &config.urls {
        match classify(url)? {
            Resource::Link(attrs) => {
                doc.tag("link").attr("href", url).attrs(
                    attrs.iter().map(|(name, value)| (name, value.clone())),
                );
            }
            Resource::Script => {
                doc.tag("script")
                    .attr("src", url)
                    .attr("defer", true)
                    .close();
            }
            Resource::Module => {
                doc.tag("script")
                    .attr("src", url)
                    .attr("type", "module")
                    .close();
            }
        }
    }
    log::debug!(
        "document seeded with {} linked resource(s)",
        config.urls.len()
    );
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_doctype_only() {
        let doc = document(&DocumentConfig::default()).unwrap();
        assert_eq!(doc.render(), "<!DOCTYPE html>");
    }

    #[test]
    fn test_html_attributes_without_title() {
        let config = DocumentConfig::new().with_lang("en").with_html_attr("class_", "dark");
        let doc = document(&config).unwrap();
        assert_eq!(doc.render(), "<!DOCTYPE html><html lang=en class=dark>");
    }

    #[test]
    fn test_lang_override_replaces_configured_lang() {
        let config = DocumentConfig::from_toml("[html]\nlang = \"en\"")
            .unwrap()
            .with_lang("fi");
        let doc = document(&config).unwrap();
        assert_eq!(doc.render(), "<!DOCTYPE html><html lang=fi>");
    }

    #[test]
    fn test_title_is_escaped() {
        let config = DocumentConfig::new().with_title("Q&A <live>");
        let doc = document(&config).unwrap();
        assert_eq!(
            doc.render(),
            r#"<!DOCTYPE html><meta charset="utf-8"><title>Q&amp;A &lt;live&gt;</title>"#
        );
    }

    #[test]
    fn test_viewport() {
        let config = DocumentConfig::new().with_viewport(true);
        let doc = document(&config).unwrap();
        assert_eq!(
            doc.render(),
            r#"<!DOCTYPE html><meta name=viewport content="width=device-width,initial-scale=1">"#
        );
    }

    #[test]
    fn test_resources() {
        let config = DocumentConfig::new()
            .with_url("style.css")
            .with_url("favicon.png")
            .with_url("app.js")
            .with_url("main.mjs");
        let doc = document(&config).unwrap();
        assert_eq!(
            doc.render(),
            concat!(
                r#"<!DOCTYPE html>"#,
                r#"<link href="style.css" rel=stylesheet>"#,
                r#"<link href="favicon.png" rel=icon type="image/png">"#,
                r#"<script src="app.js" defer></script>"#,
                r#"<script src="main.mjs" type=module></script>"#,
            )
        );
    }

    #[test]
    fn test_unknown_resource_fails() {
        let config = DocumentConfig::new().with_url("notes.txt");
        let err = document(&config).unwrap_err();
        assert!(matches!(err, BuilderError::UnknownResource { .. }));
    }
}
