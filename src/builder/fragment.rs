//! Ordered storage of rendered text and placeholder references

use crate::template::Template;

/// One unit of a builder's output
#[derive(Debug, Clone)]
pub(crate) enum Fragment {
    /// Already escaped text
    Text(String),
    /// A named slot, rendered when the builder is rendered
    Slot(Template),
}

/// Append-only fragment sequence
///
/// Indices returned by the push methods stay valid for the lifetime of the
/// store (until [`FragmentStore::clear`]).
#[derive(Debug, Clone, Default)]
pub(crate) struct FragmentStore {
    fragments: Vec<Fragment>,
}

impl FragmentStore {
    pub fn push_text(&mut self, text: impl Into<String>) -> usize {
        self.fragments.push(Fragment::Text(text.into()));
        self.fragments.len() - 1
    }

    pub fn push_slot(&mut self, template: Template) -> usize {
        self.fragments.push(Fragment::Slot(template));
        self.fragments.len() - 1
    }

    /// Insert attribute text before the closing `>` of an opening tag
    ///
    /// Returns false when `index` does not hold an opening tag.
    pub fn extend_opening_tag(&mut self, index: usize, attrs: &str) -> bool {
        match self.fragments.get_mut(index) {
            Some(Fragment::Text(tag)) if tag.starts_with('<') && tag.ends_with('>') => {
                tag.insert_str(tag.len() - 1, attrs);
                true
            }
            _ => false,
        }
    }

    pub fn extend(&mut self, fragments: impl IntoIterator<Item = Fragment>) {
        self.fragments.extend(fragments);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn clear(&mut self) {
        self.fragments.clear();
    }
}

impl IntoIterator for FragmentStore {
    type Item = Fragment;
    type IntoIter = std::vec::IntoIter<Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_returns_index() {
        let mut store = FragmentStore::default();
        assert_eq!(store.push_text("<p>"), 0);
        assert_eq!(store.push_text("hi"), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_extend_opening_tag() {
        let mut store = FragmentStore::default();
        let tag = store.push_text("<div>");
        let text = store.push_text("body");
        assert!(store.extend_opening_tag(tag, " id=main"));
        assert!(!store.extend_opening_tag(text, " id=x"));
        assert!(!store.extend_opening_tag(7, " id=x"));
        let rendered: Vec<_> = store
            .iter()
            .map(|f| match f {
                Fragment::Text(t) => t.as_str(),
                Fragment::Slot(_) => "",
            })
            .collect();
        assert_eq!(rendered, vec!["<div id=main>", "body"]);
    }
}
