//! Auto-close state machine
//!
//! At most one element is pending at a time: the most recently addressed tag
//! whose closing has not been decided yet. Elements opened as scopes are kept
//! on a stack and closed explicitly when the scope ends.

use crate::html5::ElementKind;

/// The element most recently addressed
#[derive(Debug, Clone)]
pub(crate) struct OpenTag {
    pub name: String,
    pub kind: ElementKind,
    /// Fragment index of the `<name ...>` text
    pub bracket: usize,
}

impl OpenTag {
    pub fn new(name: String, bracket: usize) -> Self {
        let kind = ElementKind::classify(&name);
        Self {
            name,
            kind,
            bracket,
        }
    }

    pub fn end_tag(&self) -> String {
        format!("</{}>", self.name)
    }

    /// End tag text owed when the element is closed implicitly
    pub fn implied_end_tag(&self) -> Option<String> {
        self.kind.requires_end_tag().then(|| self.end_tag())
    }
}

/// An element held open by a scope
#[derive(Debug, Clone)]
struct Scoped {
    /// Kind of the element text inside the scope belongs to
    kind: Option<ElementKind>,
    end: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct TagStack {
    pending: Option<OpenTag>,
    /// Open scopes, outermost first
    scopes: Vec<Scoped>,
}

impl TagStack {
    pub fn pending(&self) -> Option<&OpenTag> {
        self.pending.as_ref()
    }

    /// Make `tag` the pending element
    ///
    /// Any previously pending element must be resolved first, its end tag has
    /// to land in the fragments before the new opening tag.
    pub fn open(&mut self, tag: OpenTag) {
        debug_assert!(self.pending.is_none(), "pending element not resolved");
        self.pending = Some(tag);
    }

    /// Decide the pending element, returning its end tag if one must be emitted
    pub fn resolve(&mut self) -> Option<String> {
        self.pending.take().and_then(|tag| tag.implied_end_tag())
    }

    /// Kind of the element that text added now ends up in
    ///
    /// The pending element if there is one, otherwise the innermost scope.
    pub fn text_kind(&self) -> Option<ElementKind> {
        self.pending
            .as_ref()
            .map(|tag| tag.kind)
            .or_else(|| self.scopes.last().and_then(|scope| scope.kind))
    }

    /// Turn the pending element into a scope
    ///
    /// The scope owes the element's end tag even when HTML5 would allow leaving
    /// it out. Void elements owe nothing. A scope entered with nothing pending
    /// keeps the text kind of its parent.
    pub fn enter(&mut self) -> Option<&str> {
        let tag = self.pending.take();
        let kind = tag.as_ref().map(|tag| tag.kind).or_else(|| self.text_kind());
        let end = tag.filter(|tag| !tag.kind.is_void()).map(|tag| tag.end_tag());
        self.scopes.push(Scoped { kind, end });
        self.scopes.last().and_then(|scope| scope.end.as_deref())
    }

    /// Leave the innermost scope, returning the end tag it owes
    pub fn exit(&mut self) -> Option<String> {
        self.scopes.pop().and_then(|scope| scope.end)
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// End tags that rendering appends after the fragments, in order
    pub fn trailing(&self) -> impl Iterator<Item = String> + '_ {
        self.pending
            .as_ref()
            .and_then(OpenTag::implied_end_tag)
            .into_iter()
            .chain(self.scopes.iter().rev().filter_map(|scope| scope.end.clone()))
    }

    pub fn clear(&mut self) {
        self.pending = None;
        self.scopes.clear();
    }
}
