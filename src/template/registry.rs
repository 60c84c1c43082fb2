//! Placeholder registry for a single builder

use std::collections::HashMap;

use crate::error::BuilderError;

use super::Template;

/// Placeholders known to a builder, by name
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl TemplateRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a new placeholder
    ///
    /// Positions are reserved once, so a name can only be declared once.
    pub fn declare(&mut self, name: &str) -> Result<Template, BuilderError> {
        if self.templates.contains_key(name) {
            return Err(BuilderError::duplicate(name));
        }
        let template = Template::new(name);
        self.templates.insert(name.to_string(), template.clone());
        Ok(template)
    }

    /// Register a placeholder created elsewhere
    ///
    /// The adopted slot replaces an existing entry with the same name, so the
    /// name keeps addressing the most recently embedded position. Returns
    /// whether the registry changed.
    pub fn adopt(&mut self, template: &Template) -> bool {
        if let Some(existing) = self.templates.get(template.name()) {
            if existing.same_slot(template) {
                return false;
            }
            log::warn!(
                "placeholder '{}' declared again by an embedded snippet, the new slot replaces the earlier one",
                template.name()
            );
        }
        self.templates
            .insert(template.name().to_string(), template.clone());
        true
    }

    /// Adopt every placeholder of another registry
    pub fn merge(&mut self, other: TemplateRegistry) {
        for template in other.templates.values() {
            self.adopt(template);
        }
    }

    /// Get a placeholder by name
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Check if a placeholder exists
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Get all placeholder names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn clear(&mut self) {
        self.templates.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_declare_and_get() {
        let mut registry = TemplateRegistry::new();
        registry.declare("Title").expect("Should declare");
        assert!(registry.contains("Title"));
        assert!(registry.get("Title").is_some());
        assert!(registry.get("Body").is_none());
    }

    #[test]
    fn test_registry_duplicate_error() {
        let mut registry = TemplateRegistry::new();
        registry.declare("Title").expect("First declare should succeed");
        let result = registry.declare("Title");
        assert!(matches!(result, Err(BuilderError::DuplicateName { .. })));
    }

    #[test]
    fn test_adopt_replaces_existing_slot() {
        let mut registry = TemplateRegistry::new();
        let original = registry.declare("Title").unwrap();
        assert!(!registry.adopt(&original));

        let foreign = Template::new("Title");
        assert!(registry.adopt(&foreign));
        assert!(registry.get("Title").unwrap().same_slot(&foreign));
        assert_eq!(registry.len(), 1);

        assert!(registry.adopt(&Template::new("Body")));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_merge() {
        let mut a = TemplateRegistry::new();
        a.declare("One").unwrap();
        let mut b = TemplateRegistry::new();
        b.declare("Two").unwrap();
        b.declare("One").unwrap();
        a.merge(b);
        let mut names: Vec<_> = a.names().collect();
        names.sort();
        assert_eq!(names, vec!["One", "Two"]);
    }

    #[test]
    fn test_clear() {
        let mut registry = TemplateRegistry::new();
        registry.declare("X").unwrap();
        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.declare("X").is_ok());
    }
}
