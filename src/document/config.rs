//! Configuration for document construction
//!
//! A document configuration can be built in code with the `with_*` methods or
//! loaded from a TOML file:
//!
//! ```toml
//! title = "My page"
//! viewport = true
//! urls = ["style.css", "app.js"]
//!
//! [html]
//! lang = "en"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::attributes::{AttrValue, Attributes};

/// Viewport setting used when `viewport = true`
pub const DEFAULT_VIEWPORT: &str = "width=device-width,initial-scale=1";

/// Errors that can occur when loading a document configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read document config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse document config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for the head section seeded by [`crate::document`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentConfig {
    /// Page title; also triggers the charset declaration
    pub title: Option<String>,
    /// Attributes for the `<html>` tag, in order
    pub html: Attributes,
    /// Content of the viewport meta tag
    pub viewport: Option<String>,
    /// Stylesheets, icons, manifests and scripts to link
    pub urls: Vec<String>,
}

/// TOML structure for deserializing document configurations
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlDocument {
    title: Option<String>,
    html: Option<toml::Table>,
    viewport: Option<TomlViewport>,
    #[serde(default)]
    urls: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TomlViewport {
    Enabled(bool),
    Content(String),
}

impl DocumentConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlDocument = toml::from_str(content)?;

        let html = parsed
            .html
            .unwrap_or_default()
            .into_iter()
            .map(|(name, value)| (name, toml_attr_value(value)))
            .collect();
        let viewport = match parsed.viewport {
            Some(TomlViewport::Enabled(true)) => Some(DEFAULT_VIEWPORT.to_string()),
            Some(TomlViewport::Enabled(false)) | None => None,
            Some(TomlViewport::Content(content)) => Some(content),
        };

        Ok(DocumentConfig {
            title: parsed.title,
            html,
            viewport,
            urls: parsed.urls,
        })
    }

    /// Set the page title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the document language
    pub fn with_lang(self, lang: impl Into<String>) -> Self {
        self.with_html_attr("lang", lang.into())
    }

    /// Set an attribute of the `<html>` tag, replacing any earlier value
    pub fn with_html_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.html.set(name, value);
        self
    }

    /// Enable or disable the default viewport meta tag
    pub fn with_viewport(mut self, enabled: bool) -> Self {
        self.viewport = enabled.then(|| DEFAULT_VIEWPORT.to_string());
        self
    }

    /// Use a custom viewport setting
    pub fn with_viewport_content(mut self, content: impl Into<String>) -> Self {
        self.viewport = Some(content.into());
        self
    }

    /// Link a resource; its kind is decided by the file name
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.urls.push(url.into());
        self
    }
}

fn toml_attr_value(value: toml::Value) -> AttrValue {
    match value {
        toml::Value::Boolean(flag) => AttrValue::Flag(flag),
        toml::Value::String(text) => AttrValue::Text(text),
        other => AttrValue::Text(other.to_string()),
    }
}
