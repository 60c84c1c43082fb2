//! HTML5 element classification
//!
//! HTML5 makes many end tags optional and forbids them on void elements. The
//! builder consults these tables to decide which end tags it has to emit.

/// Elements that never have content or an end tag
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "menuitem",
    "meta", "param", "source", "track", "wbr",
];

/// Elements whose end tag may always be left out
pub const OPTIONAL_END_ELEMENTS: &[&str] = &[
    "html", "head", "body", "p", "colgroup", "thead", "tbody", "tfoot", "tr", "th", "td", "li",
    "dt", "dd", "optgroup", "option",
];

/// How an element is closed and how its text content is escaped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// No content and no end tag
    Void,
    /// End tag implied by the parser; never emitted automatically
    OptionalEnd,
    /// `<script>`: raw text body, end tag required
    Script,
    /// `<style>`: raw text body, end tag required
    Style,
    /// Everything else: end tag required
    Normal,
}

impl ElementKind {
    /// Classify a tag name (ASCII case-insensitive)
    pub fn classify(tag: &str) -> Self {
        let lower = tag.to_ascii_lowercase();
        let lower = lower.as_str();
        if VOID_ELEMENTS.contains(&lower) {
            ElementKind::Void
        } else if OPTIONAL_END_ELEMENTS.contains(&lower) {
            ElementKind::OptionalEnd
        } else if lower == "script" {
            ElementKind::Script
        } else if lower == "style" {
            ElementKind::Style
        } else {
            ElementKind::Normal
        }
    }

    /// Whether an end tag must be emitted when the element is closed implicitly
    pub fn requires_end_tag(self) -> bool {
        matches!(
            self,
            ElementKind::Script | ElementKind::Style | ElementKind::Normal
        )
    }

    pub fn is_void(self) -> bool {
        self == ElementKind::Void
    }
}
