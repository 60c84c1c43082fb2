//! Classification of linked resources by file name

use crate::attributes::Attributes;
use crate::error::BuilderError;

/// How a resource URL is linked into the head section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// `<link href=URL ...>` with the given extra attributes
    Link(Attributes),
    /// `<script src=URL defer></script>`
    Script,
    /// `<script src=URL type=module></script>`
    Module,
}

/// Link attributes by exact file name or by extension
const LINK_TYPES: &[(&str, &str, Option<&str>)] = &[
    ("manifest.json", "manifest", None),
    ("css", "stylesheet", None),
    ("png", "icon", Some("image/png")),
    ("svg", "icon", Some("image/svg+xml")),
    ("ico", "icon", Some("image/x-icon")),
    ("webp", "icon", Some("image/webp")),
    ("avif", "icon", Some("image/avif")),
];

fn link_for(key: &str) -> Option<Attributes> {
    LINK_TYPES
        .iter()
        .find(|(name, _, _)| *name == key)
        .map(|(_, rel, mime)| Attributes::new().with("rel", *rel).with("type", *mime))
}

/// Decide how to link `url`, looking at the file name first, then the extension
pub fn classify(url: &str) -> Result<Resource, BuilderError> {
    let file = url.rsplit('/').next().unwrap_or(url);
    let ext = file.rsplit('.').next().unwrap_or(file);

    if let Some(attrs) = link_for(file).or_else(|| link_for(ext)) {
        return Ok(Resource::Link(attrs));
    }
    match ext {
        "js" if file.contains('.') => Ok(Resource::Script),
        "mjs" if file.contains('.') => Ok(Resource::Module),
        _ => Err(BuilderError::UnknownResource {
            url: url.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(url: &str) -> String {
        match classify(url).unwrap() {
            Resource::Link(attrs) => attrs.render(),
            other => panic!("expected a link, got {other:?}"),
        }
    }

    #[test]
    fn test_stylesheet_and_icons() {
        assert_eq!(link("/static/site.css"), " rel=stylesheet");
        assert_eq!(link("favicon.png"), r#" rel=icon type="image/png""#);
        assert_eq!(link("logo.svg"), r#" rel=icon type="image/svg+xml""#);
        assert_eq!(link("https://example.com/favicon.ico"), r#" rel=icon type="image/x-icon""#);
    }

    #[test]
    fn test_manifest_matches_whole_file_name() {
        assert_eq!(link("/app/manifest.json"), " rel=manifest");
        assert!(classify("/app/data.json").is_err());
    }

    #[test]
    fn test_scripts() {
        assert_eq!(classify("js/app.js"), Ok(Resource::Script));
        assert_eq!(classify("js/main.mjs"), Ok(Resource::Module));
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(
            classify("/feed.xml"),
            Err(BuilderError::UnknownResource {
                url: "/feed.xml".to_string()
            })
        );
        assert!(classify("/js").is_err());
    }
}
