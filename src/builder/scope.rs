//! Scoped nesting
//!
//! A [`Scope`] keeps an element open while it is alive and writes the
//! element's end tag when dropped, also when the scope is left by unwinding.

use std::ops::{Deref, DerefMut};

use super::Builder;

/// An element held open until the guard is dropped
///
/// Created by [`Builder::open`]. Dereferences to the builder, so tags and
/// content added through the guard land inside the element.
///
/// ```
/// use html5tagger::snippet;
///
/// let mut doc = snippet();
/// {
///     let mut list = doc.tag("ul").open();
///     list.tag("li").content("one");
///     list.tag("li").content("two");
/// }
/// assert_eq!(doc.render(), "<ul><li>one<li>two</ul>");
/// ```
pub struct Scope<'a> {
    builder: &'a mut Builder,
}

impl<'a> Scope<'a> {
    pub(crate) fn new(builder: &'a mut Builder) -> Self {
        Self { builder }
    }
}

impl Deref for Scope<'_> {
    type Target = Builder;

    fn deref(&self) -> &Builder {
        self.builder
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut Builder {
        self.builder
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        self.builder.exit_scope();
    }
}
