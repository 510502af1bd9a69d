//! In-memory template registry.

use super::builtin;
use super::template_file;
use crate::domain::entities::{Category, TemplateEntry};
use crate::domain::repositories::TemplateRegistry;
use crate::error::AppError;
use std::path::Path;
use tracing::{debug, info};

/// Template registry backed by in-memory tables.
///
/// Categories keep their registration order, and so do the entries inside each
/// category. The registry is read-only once built and is shared behind an
/// `Arc`.
///
/// # Examples
///
/// ```
/// use osint_hub::domain::entities::{Category, TemplateEntry};
/// use osint_hub::domain::repositories::TemplateRegistry;
/// use osint_hub::infrastructure::registry::StaticTemplateRegistry;
///
/// let registry = StaticTemplateRegistry::builder()
///     .register(
///         Category::Domain,
///         vec![TemplateEntry::new("https://crt.sh/?q=$domain", ["Certificates"]).unwrap()],
///     )
///     .build();
///
/// assert_eq!(registry.categories(), vec![Category::Domain]);
/// assert!(registry.entries_for(Category::Username).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticTemplateRegistry {
    tables: Vec<(Category, Vec<TemplateEntry>)>,
}

impl StaticTemplateRegistry {
    /// Registry holding the compiled-in tables for every category.
    pub fn builtin() -> Self {
        let mut builder = Self::builder();
        for category in Category::ALL {
            let entries = builtin::table(category)
                .iter()
                .map(|&(template, tags)| TemplateEntry::from_static(template, tags))
                .collect();
            builder = builder.register(category, entries);
        }

        let registry = builder.build();
        debug!(
            categories = registry.tables.len(),
            templates = registry.template_count(),
            "Built-in template registry loaded"
        );
        registry
    }

    pub fn builder() -> StaticTemplateRegistryBuilder {
        StaticTemplateRegistryBuilder::default()
    }

    /// Appends the templates defined in a JSON template file.
    ///
    /// Entries for an already registered category are appended after the
    /// existing ones; new categories are appended at the end, in key order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::TemplateFile`] if the file cannot be read or decoded,
    /// [`AppError::UnknownCategory`] for an unrecognised category key, and
    /// [`AppError::EmptyTags`] for a template without tags. The registry is
    /// left unchanged on error.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<(), AppError> {
        let loaded = template_file::load(path)?;
        let count: usize = loaded.iter().map(|(_, entries)| entries.len()).sum();

        for (category, entries) in loaded {
            self.append(category, entries);
        }

        info!(path = %path.display(), templates = count, "Custom templates loaded");
        Ok(())
    }

    /// Total number of templates across all categories.
    pub fn template_count(&self) -> usize {
        self.tables.iter().map(|(_, entries)| entries.len()).sum()
    }

    fn append(&mut self, category: Category, entries: Vec<TemplateEntry>) {
        match self.tables.iter_mut().find(|(c, _)| *c == category) {
            Some((_, existing)) => existing.extend(entries),
            None => self.tables.push((category, entries)),
        }
    }
}

impl TemplateRegistry for StaticTemplateRegistry {
    fn categories(&self) -> Vec<Category> {
        self.tables.iter().map(|(category, _)| *category).collect()
    }

    fn entries_for(&self, category: Category) -> Result<Vec<TemplateEntry>, AppError> {
        self.tables
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, entries)| entries.clone())
            .ok_or_else(|| AppError::unknown_category(category.label()))
    }
}

/// Builder for [`StaticTemplateRegistry`].
#[derive(Debug, Default)]
pub struct StaticTemplateRegistryBuilder {
    registry: StaticTemplateRegistry,
}

impl StaticTemplateRegistryBuilder {
    /// Registers `entries` for `category`. Registering the same category again
    /// appends to its list.
    pub fn register(mut self, category: Category, entries: Vec<TemplateEntry>) -> Self {
        self.registry.append(category, entries);
        self
    }

    pub fn build(self) -> StaticTemplateRegistry {
        self.registry
    }
}
