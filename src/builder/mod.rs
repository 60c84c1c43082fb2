//! Chained-call HTML builder
//!
//! A [`Builder`] records output as a flat sequence of fragments. Tags are
//! addressed by name and closed implicitly: the next tag, content or the end
//! of the document decides whether an end tag has to be written, following
//! HTML5's optional end tag rules.
//!
//! ```
//! use html5tagger::snippet;
//!
//! let mut doc = snippet();
//! doc.tag("p").content("Hello & welcome")
//!     .tag("input").attr("type", "checkbox").attr("checked", true)
//!     .tag("div").attr("class_", "note").content("Done");
//! assert_eq!(
//!     doc.render(),
//!     r#"<p>Hello &amp; welcome<input type=checkbox checked><div class=note>Done</div>"#
//! );
//! ```

mod content;
mod fragment;
mod scope;
mod stack;

pub use content::Content;
pub use scope::Scope;

use std::fmt;

use crate::attributes::{mangle, serialize_attributes, AttrValue, Attributes};
use crate::error::BuilderError;
use crate::escape::{escape_comment, escape_script, escape_style, escape_text, Markup};
use crate::html5::ElementKind;
use crate::template::{Template, TemplateRegistry};

use fragment::{Fragment, FragmentStore};
use stack::{OpenTag, TagStack};

/// Output longer than this is abbreviated by [`Builder::brief`]
const BRIEF_LIMIT: usize = 100;
/// Output longer than this is cut down by [`Builder::inspect`]
const INSPECT_LIMIT: usize = 10_000;
const INSPECT_KEEP: usize = 1_000;

/// HTML document or snippet under construction
///
/// Every mutator returns the builder so calls can be chained. Rendering never
/// changes the builder; any element still open is closed in the output only.
pub struct Builder {
    name: String,
    fragments: FragmentStore,
    templates: TemplateRegistry,
    stack: TagStack,
}

impl Builder {
    /// Create an empty builder
    ///
    /// The name only shows up in [`Builder::inspect`] output and log messages.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fragments: FragmentStore::default(),
            templates: TemplateRegistry::default(),
            stack: TagStack::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Open a new element
    ///
    /// The name is mangled like attribute names (`my_widget` becomes
    /// `my-widget`). The previously pending element is closed first; its end
    /// tag is written only when HTML5 requires one.
    pub fn tag(&mut self, name: &str) -> &mut Self {
        let name = mangle(name);
        self.close();
        let bracket = self.fragments.push_text(format!("<{name}>"));
        self.stack.open(OpenTag::new(name, bracket));
        self
    }

    /// Add an attribute to the pending element
    pub fn attr(&mut self, name: &str, value: impl Into<AttrValue>) -> &mut Self {
        self.apply_attributes(&Attributes::new().with(name, value))
    }

    /// Add several attributes to the pending element, in order
    pub fn attrs<I, K, V>(&mut self, attrs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttrValue>,
    {
        let attrs: Attributes = attrs.into_iter().collect();
        self.apply_attributes(&attrs)
    }

    fn apply_attributes(&mut self, attrs: &Attributes) -> &mut Self {
        let text = serialize_attributes(attrs);
        if text.is_empty() {
            return self;
        }
        let bracket = self.stack.pending().map(|tag| tag.bracket);
        let applied = bracket.is_some_and(|index| self.fragments.extend_opening_tag(index, &text));
        if !applied {
            log::warn!(
                "{}: no pending element, attributes '{}' ignored",
                self.name,
                text.trim_start()
            );
        }
        self
    }

    /// Add content to the pending element and close it
    pub fn content(&mut self, content: impl Into<Content>) -> &mut Self {
        self.push_content(content.into());
        self.close()
    }

    /// Add several content items to the pending element and close it
    pub fn contents<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Content>,
    {
        for item in items {
            self.push_content(item.into());
        }
        self.close()
    }

    /// Add content without closing the pending element
    pub fn append(&mut self, content: impl Into<Content>) -> &mut Self {
        self.push_content(content.into());
        self
    }

    /// Close the pending element now, writing its end tag if HTML5 requires it
    pub fn close(&mut self) -> &mut Self {
        if let Some(end) = self.stack.resolve() {
            self.fragments.push_text(end);
        }
        self
    }

    fn push_content(&mut self, content: Content) {
        match content {
            Content::Empty => {}
            Content::Text(text) => {
                let escaped = match self.stack.text_kind() {
                    Some(ElementKind::Script) => escape_script(&text),
                    Some(ElementKind::Style) => escape_style(&text),
                    _ => escape_text(&text),
                };
                self.fragments.push_text(escaped);
            }
            Content::Markup(html) => {
                self.fragments.push_text(html);
            }
            Content::Snippet(snippet) => self.adopt(snippet),
            Content::Slot(template) => {
                if template.is_placeholder() {
                    self.templates.adopt(&template);
                } else {
                    self.templates.merge(template.placeholders());
                }
                self.fragments.push_slot(template);
            }
        }
    }

    /// Flatten another builder into this one
    ///
    /// Its text is copied; its placeholder slots are shared.
    fn adopt(&mut self, snippet: Builder) {
        let Builder {
            name,
            fragments,
            templates,
            stack,
        } = snippet;
        if !templates.is_empty() {
            log::debug!(
                "{}: adopting placeholders [{}] from {}",
                self.name,
                templates.names().collect::<Vec<_>>().join(", "),
                name
            );
        }
        self.templates.merge(templates);
        self.fragments.extend(fragments);
        for end in stack.trailing() {
            self.fragments.push_text(end);
        }
    }

    /// Whether `target` is one of this builder's slots or nested in one
    pub(crate) fn contains_slot(&self, target: &Template) -> bool {
        self.fragments.iter().any(|fragment| match fragment {
            Fragment::Slot(template) => template.same_slot(target) || template.contains(target),
            Fragment::Text(_) => false,
        })
    }

    pub(crate) fn registry(&self) -> &TemplateRegistry {
        &self.templates
    }

    /// Turn this builder into a shared handle, see [`Template::shared`]
    ///
    /// Embedding the handle references the builder, so content added to it
    /// later still shows up.
    pub fn share(self) -> Template {
        Template::shared(self)
    }

    /// Copy of this builder with every open element closed
    pub(crate) fn snapshot(&self) -> Builder {
        let mut fragments = self.fragments.clone();
        for end in self.stack.trailing() {
            fragments.push_text(end);
        }
        Builder {
            name: self.name.clone(),
            fragments,
            templates: self.templates.clone(),
            stack: TagStack::default(),
        }
    }

    /// Inline JavaScript; only `</script>` inside the code is escaped
    pub fn script(&mut self, code: &str) -> &mut Self {
        self.tag("script").content(code)
    }

    /// Inline CSS; only `</style>` inside the rules is escaped
    pub fn style(&mut self, css: &str) -> &mut Self {
        self.tag("style").content(css)
    }

    /// Add an HTML comment without closing the pending element
    pub fn comment(&mut self, text: impl fmt::Display) -> &mut Self {
        let text = escape_comment(&text.to_string());
        self.fragments.push_text(format!("<!--{text}-->"));
        self
    }

    /// Keep the pending element open until the returned guard is dropped
    ///
    /// The element's end tag is written when the guard goes away, even for
    /// elements whose end tag HTML5 would let us leave out, because siblings
    /// after the scope must not end up inside it.
    pub fn open(&mut self) -> Scope<'_> {
        if let Some(tag) = self.stack.pending().filter(|tag| tag.kind.is_void()) {
            log::warn!("{}: <{}> is a void element and cannot be nested into", self.name, tag.name);
        }
        self.stack.enter();
        Scope::new(self)
    }

    /// Run `f` inside the pending element, see [`Builder::open`]
    pub fn nest<R>(&mut self, f: impl FnOnce(&mut Builder) -> R) -> R {
        let mut scope = self.open();
        f(&mut scope)
    }

    pub(crate) fn exit_scope(&mut self) {
        self.close();
        if let Some(end) = self.stack.exit() {
            self.fragments.push_text(end);
        }
    }

    /// Number of scopes currently open
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Declare a placeholder and place it at the current position
    ///
    /// Placing does not close the pending element.
    pub fn place(&mut self, name: &str) -> Result<&mut Self, BuilderError> {
        let template = self.templates.declare(name)?;
        log::debug!(
            "{}: placeholder '{}' placed at fragment {}",
            self.name,
            name,
            self.fragments.len()
        );
        self.fragments.push_slot(template);
        Ok(self)
    }

    /// Declare a placeholder seeded with `content` and place it
    pub fn place_with(
        &mut self,
        name: &str,
        content: impl Into<Content>,
    ) -> Result<&mut Self, BuilderError> {
        let template = self.templates.declare(name)?;
        template.add(content)?;
        log::debug!(
            "{}: placeholder '{}' placed at fragment {}",
            self.name,
            name,
            self.fragments.len()
        );
        self.fragments.push_slot(template);
        Ok(self)
    }

    /// Fetch a live handle to a placeholder for further composition
    pub fn template(&self, name: &str) -> Result<Template, BuilderError> {
        self.templates
            .get(name)
            .cloned()
            .ok_or_else(|| BuilderError::unknown(name))
    }

    /// Replace the content of a placeholder
    pub fn set(&mut self, name: &str, content: impl Into<Content>) -> Result<&mut Self, BuilderError> {
        self.template(name)?.set(content)?;
        Ok(self)
    }

    /// Empty a placeholder
    pub fn clear(&mut self, name: &str) -> Result<&mut Self, BuilderError> {
        self.template(name)?.clear()?;
        Ok(self)
    }

    /// Names of all placeholders known to this builder
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.templates.names()
    }

    /// Drop all content, placeholders and open elements
    pub fn reset(&mut self) {
        self.fragments.clear();
        self.templates.clear();
        self.stack.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Render to an HTML string
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        for fragment in self.fragments.iter() {
            match fragment {
                Fragment::Text(text) => out.push_str(text),
                Fragment::Slot(template) => template.render_into(out),
            }
        }
        for end in self.stack.trailing() {
            out.push_str(&end);
        }
    }

    /// One-line summary: `《name》` or `《name:output》`
    pub fn brief(&self) -> String {
        let value = self.render();
        let count = value.chars().count();
        let value = if count > BRIEF_LIMIT {
            format!(":{} ···", value.chars().take(20).collect::<String>())
        } else if count > 0 {
            format!(":{value}")
        } else {
            String::new()
        };
        format!("《{}{}》", self.name, value)
    }

    /// Output with placeholders shown as `《name:content》` markers
    pub fn inspect(&self) -> String {
        let mut ret = String::new();
        for fragment in self.fragments.iter() {
            match fragment {
                Fragment::Text(text) => ret.push_str(text),
                Fragment::Slot(template) => ret.push_str(&template.brief()),
            }
        }
        for end in self.stack.trailing() {
            ret.push_str(&end);
        }
        let count = ret.chars().count();
        if count > INSPECT_LIMIT {
            let head: String = ret.chars().take(INSPECT_KEEP).collect();
            let tail: String = ret.chars().skip(count - INSPECT_KEEP).collect();
            ret = format!("{head} ··· {tail}");
        }
        if ret.chars().count() > BRIEF_LIMIT {
            format!("《{}》\n{}", self.name, ret)
        } else {
            self.brief()
        }
    }
}

impl Markup for Builder {
    fn to_html(&self) -> String {
        self.render()
    }
}

impl fmt::Display for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escape::Html;

    fn snippet() -> Builder {
        Builder::new("test")
    }

    #[test]
    fn test_normal_element_closed_by_sibling() {
        let mut doc = snippet();
        doc.tag("div").tag("span");
        assert_eq!(doc.render(), "<div></div><span></span>");
    }

    #[test]
    fn test_optional_end_element_left_open() {
        let mut doc = snippet();
        doc.tag("p").tag("b");
        assert_eq!(doc.render(), "<p><b></b>");
    }

    #[test]
    fn test_void_element_never_closed() {
        let mut doc = snippet();
        doc.tag("br").tag("hr").tag("img").attr("src", "a.png");
        assert_eq!(doc.render(), "<br><hr><img src=\"a.png\">");
    }

    #[test]
    fn test_content_after_void_follows_it() {
        let mut doc = snippet();
        doc.tag("br").content("text");
        assert_eq!(doc.render(), "<br>text");
    }

    #[test]
    fn test_content_closes_element() {
        let mut doc = snippet();
        doc.tag("h1").content("Title").tag("p").content("Body");
        assert_eq!(doc.render(), "<h1>Title</h1><p>Body");
    }

    #[test]
    fn test_append_keeps_element_open() {
        let mut doc = snippet();
        doc.tag("div").append("a").append("b");
        assert_eq!(doc.render(), "<div>ab</div>");
        doc.attr("id", "late");
        assert_eq!(doc.render(), "<div id=late>ab</div>");
    }

    #[test]
    fn test_contents() {
        let mut doc = snippet();
        doc.tag("p")
            .contents([Content::from("x < y "), Content::from(Html::new("<b>!</b>"))]);
        assert_eq!(doc.render(), "<p>x &lt; y <b>!</b>");
    }

    #[test]
    fn test_attributes_without_pending_element_are_ignored() {
        let mut doc = snippet();
        doc.tag("div").content("x").attr("id", "nope");
        assert_eq!(doc.render(), "<div>x</div>");
    }

    #[test]
    fn test_attrs_iterator() {
        let mut doc = snippet();
        doc.tag("input")
            .attrs([("type", "checkbox"), ("id", "somebox")])
            .attr("checked", true)
            .attr("disabled", false);
        assert_eq!(doc.render(), "<input type=checkbox id=somebox checked>");
    }

    #[test]
    fn test_tag_names_are_mangled() {
        let mut doc = snippet();
        doc.tag("my_widget").content("x");
        assert_eq!(doc.render(), "<my-widget>x</my-widget>");
    }

    #[test]
    fn test_render_does_not_mutate() {
        let mut doc = snippet();
        doc.tag("div");
        assert_eq!(doc.render(), "<div></div>");
        doc.content("late");
        assert_eq!(doc.render(), "<div>late</div>");
    }

    #[test]
    fn test_explicit_close() {
        let mut doc = snippet();
        doc.tag("script").attr("src", "app.js").close().tag("p");
        assert_eq!(doc.render(), r#"<script src="app.js"></script><p>"#);
    }

    #[test]
    fn test_script_and_style_bodies() {
        let mut doc = snippet();
        doc.script("if (a < b) x = '</script>';").style("p > b { }");
        assert_eq!(
            doc.render(),
            r"<script>if (a < b) x = '<\/script>';</script><style>p > b { }</style>"
        );
    }

    #[test]
    fn test_script_tag_content_uses_script_escaping() {
        let mut doc = snippet();
        doc.tag("script").attr("type", "module").content("a && b");
        assert_eq!(doc.render(), "<script type=module>a && b</script>");
    }

    #[test]
    fn test_comment() {
        let mut doc = snippet();
        doc.tag("div").comment("a --> b").content("x");
        assert_eq!(doc.render(), "<div><!--a ‒‒> b-->x</div>");
    }

    #[test]
    fn test_scope_closes_optional_end_element() {
        let mut doc = snippet();
        {
            let mut row = doc.tag("tr").open();
            row.tag("td").content("1");
            row.tag("td").content("2");
        }
        doc.tag("p");
        assert_eq!(doc.render(), "<tr><td>1<td>2</tr><p>");
    }

    #[test]
    fn test_scope_closes_pending_normal_element_inside() {
        let mut doc = snippet();
        doc.tag("section").nest(|s| {
            s.tag("div");
        });
        assert_eq!(doc.render(), "<section><div></div></section>");
    }

    #[test]
    fn test_render_inside_scope_closes_everything() {
        let mut doc = snippet();
        let mut outer = doc.tag("main").open();
        let mut inner = outer.tag("div").open();
        inner.tag("span");
        assert_eq!(inner.render(), "<main><div><span></span></div></main>");
        assert_eq!(inner.depth(), 2);
    }

    #[test]
    fn test_nest_returns_closure_value() {
        let mut doc = snippet();
        let depth = doc.tag("ul").nest(|ul| {
            ul.tag("li").content("x");
            ul.depth()
        });
        assert_eq!(depth, 1);
        assert_eq!(doc.depth(), 0);
        assert_eq!(doc.render(), "<ul><li>x</ul>");
    }

    #[test]
    fn test_scope_on_void_element_writes_no_end_tag() {
        let mut doc = snippet();
        doc.tag("br").nest(|b| {
            b.tag("span").content("x");
        });
        assert_eq!(doc.render(), "<br><span>x</span>");
    }

    #[test]
    fn test_scope_closes_on_error_path() {
        fn fill(doc: &mut Builder) -> Result<(), BuilderError> {
            doc.tag("div").nest(|div| {
                div.tag("p").content("before");
                div.set("Missing", "x")?;
                Ok(())
            })
        }
        let mut doc = snippet();
        assert!(fill(&mut doc).is_err());
        assert_eq!(doc.render(), "<div><p>before</div>");
    }

    #[test]
    fn test_embedding_builder_closes_its_elements() {
        let mut inner = snippet();
        inner.tag("em").append("hi");
        let mut doc = snippet();
        doc.tag("p").content(&inner);
        assert_eq!(doc.render(), "<p><em>hi</em>");
        // the original is untouched
        assert_eq!(inner.render(), "<em>hi</em>");
    }

    #[test]
    fn test_reset() {
        let mut doc = snippet();
        doc.tag("div").place("Slot").unwrap();
        doc.reset();
        assert!(doc.is_empty());
        assert_eq!(doc.placeholders().count(), 0);
        assert_eq!(doc.render(), "");
    }

    #[test]
    fn test_brief() {
        let mut doc = Builder::new("Doc");
        assert_eq!(doc.brief(), "《Doc》");
        doc.tag("b").content("x");
        assert_eq!(doc.brief(), "《Doc:<b>x</b>》");
        doc.tag("p").content("y".repeat(120));
        assert_eq!(doc.brief(), "《Doc:<b>x</b><p>yyyyyyyyy ···》");
    }

    #[test]
    fn test_inspect_shows_placeholders() {
        let mut doc = Builder::new("Doc");
        doc.tag("title").place("Title").unwrap();
        doc.set("Title", "Hi").unwrap();
        assert_eq!(doc.inspect(), "《Doc:<title>Hi</title>》");

        doc.tag("p").content("z".repeat(100));
        let inspected = doc.inspect();
        assert!(inspected.starts_with("《Doc》\n<title>《Title:Hi》</title><p>"));
        assert_eq!(format!("{doc:?}"), inspected);
    }

    #[test]
    fn test_inspect_abbreviates_long_output() {
        let mut doc = Builder::new("Doc");
        doc.tag("p").content("a".repeat(20_000));
        let inspected = doc.inspect();
        assert!(inspected.contains(" ··· "));
        assert!(inspected.chars().count() < 2_100);
    }
}
