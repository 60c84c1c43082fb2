//! Error types for builder operations

use thiserror::Error;

/// Errors raised by placeholder and document operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// A placeholder with this name was already placed in the builder
    #[error("placeholder '{name}' is already declared")]
    DuplicateName { name: String },

    /// No placeholder with this name exists in the builder
    #[error("placeholder '{name}' not found (declare it with place(\"{name}\") first)")]
    UnknownPlaceholder { name: String },

    /// A placeholder was given itself as content
    #[error("placeholder '{name}' cannot contain itself")]
    SelfReference { name: String },

    /// The slot is borrowed for editing, e.g. from inside its own `edit` closure
    #[error("placeholder '{name}' is being edited")]
    SlotBusy { name: String },

    /// A document resource URL whose file type is not recognized
    #[error("unknown resource type for '{url}'")]
    UnknownResource { url: String },
}

impl BuilderError {
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownPlaceholder { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            BuilderError::duplicate("Title").to_string(),
            "placeholder 'Title' is already declared"
        );
        assert_eq!(
            BuilderError::unknown("Body").to_string(),
            "placeholder 'Body' not found (declare it with place(\"Body\") first)"
        );
        let err = BuilderError::UnknownResource {
            url: "data.xml".to_string(),
        };
        assert_eq!(err.to_string(), "unknown resource type for 'data.xml'");
    }
}
