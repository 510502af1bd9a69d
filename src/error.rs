//! Error types shared by the registry, generator and session layers.
//!
//! The core is almost entirely total: rendering, labelling and filtering never
//! fail. The only failures come from the registry boundary, either a lookup for
//! a category nobody registered or a template definition that cannot be
//! accepted.

use std::path::Path;

/// Errors surfaced by the lookup core.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The category is not registered, or the name does not parse to one.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// A template definition carried no tags, which would make it unreachable
    /// by any tag filter.
    #[error("Template has no tags: {template}")]
    EmptyTags { template: String },

    /// A custom template file could not be read or decoded.
    #[error("Invalid template file {path}: {message}")]
    TemplateFile { path: String, message: String },
}

impl AppError {
    pub fn unknown_category(name: impl Into<String>) -> Self {
        Self::UnknownCategory(name.into())
    }

    pub fn empty_tags(template: impl Into<String>) -> Self {
        Self::EmptyTags {
            template: template.into(),
        }
    }

    pub fn template_file(path: &Path, message: impl Into<String>) -> Self {
        Self::TemplateFile {
            path: path.display().to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_unknown_category_message() {
        let err = AppError::unknown_category("Vehicle");
        assert_eq!(err.to_string(), "Unknown category: Vehicle");
    }

    #[test]
    fn test_empty_tags_message() {
        let err = AppError::empty_tags("https://example.com/$domain");
        assert!(err.to_string().contains("https://example.com/$domain"));
        assert!(matches!(err, AppError::EmptyTags { .. }));
    }

    #[test]
    fn test_template_file_message_includes_path() {
        let err = AppError::template_file(&PathBuf::from("/tmp/extra.json"), "missing field `url`");
        let message = err.to_string();
        assert!(message.contains("/tmp/extra.json"));
        assert!(message.contains("missing field `url`"));
    }
}
