//! Named placeholders for mutate-then-render templating
//!
//! A placeholder reserves a position in a builder's output. Its content lives
//! in a shared slot builder, so it can be replaced or extended after the
//! surrounding document has been built, and every render reflects the latest
//! content.
//!
//! # Example
//!
//! ```
//! use html5tagger::snippet;
//!
//! let mut doc = snippet();
//! doc.tag("h1").place("Heading")?;
//! doc.tag("p").content("Static text");
//!
//! doc.set("Heading", "First")?;
//! assert_eq!(doc.render(), "<h1>First</h1><p>Static text");
//!
//! doc.set("Heading", "Second")?;
//! assert_eq!(doc.render(), "<h1>Second</h1><p>Static text");
//! # Ok::<(), html5tagger::BuilderError>(())
//! ```

mod registry;

pub use registry::TemplateRegistry;

use std::cell::{Cell, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::builder::{Builder, Content};
use crate::error::BuilderError;
use crate::escape::Markup;

/// Live handle to a placeholder slot or a shared builder
///
/// Clones share the same slot. Changes made through any handle show up the
/// next time a builder containing the slot is rendered.
#[derive(Clone)]
pub struct Template {
    name: Rc<str>,
    slot: Rc<RefCell<Builder>>,
    /// Set while the slot is being walked, guards against cycles
    visiting: Rc<Cell<bool>>,
    placeholder: bool,
}

impl Template {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: Rc::from(name),
            slot: Rc::new(RefCell::new(Builder::new(name))),
            visiting: Rc::new(Cell::new(false)),
            placeholder: true,
        }
    }

    /// Share a builder so that it is referenced, not copied, when embedded
    ///
    /// Later changes made through the handle show up wherever it was used as
    /// content. A shared builder is not a placeholder: embedding it does not
    /// register its name with the host.
    ///
    /// ```
    /// use html5tagger::{snippet, Template};
    ///
    /// let card = Template::shared(snippet());
    /// card.edit(|c| { c.tag("p").content("early"); });
    ///
    /// let mut page = snippet();
    /// page.place("Main")?;
    /// page.set("Main", &card)?;
    /// card.edit(|c| { c.tag("p").content("late"); });
    /// assert_eq!(page.render(), "<p>early<p>late");
    /// # Ok::<(), html5tagger::BuilderError>(())
    /// ```
    pub fn shared(builder: Builder) -> Self {
        Self {
            name: Rc::from(builder.name()),
            slot: Rc::new(RefCell::new(builder)),
            visiting: Rc::new(Cell::new(false)),
            placeholder: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this handle was declared as a named placeholder
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    /// Whether two handles refer to the same slot
    pub fn same_slot(&self, other: &Template) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }

    /// Mutable access to the slot's builder
    ///
    /// Content added this way is not checked for cycles; a slot that ends up
    /// inside itself is rendered once and a warning is logged.
    ///
    /// # Panics
    ///
    /// Panics if the slot is already borrowed, e.g. when called from inside
    /// [`Template::edit`] on the same slot.
    pub fn builder(&self) -> RefMut<'_, Builder> {
        self.slot.borrow_mut()
    }

    /// Compose the slot's content with full builder access
    ///
    /// # Panics
    ///
    /// Panics if the slot is already borrowed, e.g. when nested inside another
    /// `edit` of the same slot.
    pub fn edit<R>(&self, f: impl FnOnce(&mut Builder) -> R) -> R {
        f(&mut self.slot.borrow_mut())
    }

    /// Replace the content
    pub fn set(&self, content: impl Into<Content>) -> Result<(), BuilderError> {
        let content = self.check(content.into())?;
        let mut slot = self.slot_mut()?;
        log::debug!("placeholder '{}' replaced", self.name);
        slot.reset();
        slot.content(content);
        Ok(())
    }

    /// Add content after what the slot already holds
    pub fn add(&self, content: impl Into<Content>) -> Result<(), BuilderError> {
        let content = self.check(content.into())?;
        self.slot_mut()?.content(content);
        Ok(())
    }

    /// Empty the slot; it renders as nothing until set again
    pub fn clear(&self) -> Result<(), BuilderError> {
        self.slot_mut()?.reset();
        log::debug!("placeholder '{}' cleared", self.name);
        Ok(())
    }

    /// Whether the slot holds no content; a slot being edited is not empty
    pub fn is_empty(&self) -> bool {
        self.slot.try_borrow().is_ok_and(|slot| slot.is_empty())
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        if self.visiting.replace(true) {
            log::warn!(
                "placeholder '{}' contains itself and is not rendered again",
                self.name
            );
            return;
        }
        match self.slot.try_borrow() {
            Ok(slot) => slot.render_into(out),
            Err(_) => log::warn!(
                "placeholder '{}' is being edited and renders as empty",
                self.name
            ),
        }
        self.visiting.set(false);
    }

    /// `《name:content》` marker used by [`Builder::inspect`]
    pub fn brief(&self) -> String {
        match self.slot.try_borrow() {
            Ok(slot) => slot.brief(),
            Err(_) => format!("《{}》", self.name),
        }
    }

    /// Whether `target` can be reached through this slot's content
    pub(crate) fn contains(&self, target: &Template) -> bool {
        if self.visiting.replace(true) {
            return false;
        }
        let found = self
            .slot
            .try_borrow()
            .is_ok_and(|slot| slot.contains_slot(target));
        self.visiting.set(false);
        found
    }

    /// Placeholders currently declared inside the slot
    pub(crate) fn placeholders(&self) -> TemplateRegistry {
        self.slot
            .try_borrow()
            .map(|slot| slot.registry().clone())
            .unwrap_or_default()
    }

    fn slot_mut(&self) -> Result<RefMut<'_, Builder>, BuilderError> {
        self.slot.try_borrow_mut().map_err(|_| BuilderError::SlotBusy {
            name: self.name.to_string(),
        })
    }

    fn check(&self, content: Content) -> Result<Content, BuilderError> {
        let cyclic = match &content {
            Content::Slot(other) => other.same_slot(self) || other.contains(self),
            Content::Snippet(builder) => builder.contains_slot(self),
            _ => false,
        };
        if cyclic {
            return Err(BuilderError::SelfReference {
                name: self.name.to_string(),
            });
        }
        Ok(content)
    }
}

impl Markup for Template {
    fn to_html(&self) -> String {
        self.render()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.brief())
    }
}
