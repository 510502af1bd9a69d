//! Entry generation: registry lookup plus substitution.

use crate::domain::entities::{Category, Generation, RenderedEntry, TagUniverse};
use crate::domain::repositories::TemplateRegistry;
use crate::error::AppError;
use crate::utils::display_label::display_label;
use crate::utils::substitution::render;
use std::sync::Arc;
use tracing::debug;

/// Options controlling a generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Render entries even when the input value is empty, producing
    /// template-shaped URLs with an empty segment. When false an empty value
    /// yields no entries.
    pub render_empty_input: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            render_empty_input: true,
        }
    }
}

/// Service rendering a category's templates for one input value.
///
/// Stateless apart from the shared registry: the same `(category, value)`
/// always produces the same [`Generation`].
pub struct GeneratorService<R: TemplateRegistry> {
    registry: Arc<R>,
    options: GeneratorOptions,
}

impl<R: TemplateRegistry> GeneratorService<R> {
    /// Creates a generator with default options.
    pub fn new(registry: Arc<R>) -> Self {
        Self::with_options(registry, GeneratorOptions::default())
    }

    pub fn with_options(registry: Arc<R>, options: GeneratorOptions) -> Self {
        Self { registry, options }
    }

    pub fn options(&self) -> GeneratorOptions {
        self.options
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Categories available for selection, in registry order.
    pub fn categories(&self) -> Vec<Category> {
        self.registry.categories()
    }

    /// Every tag offered by `category`, independent of any input value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownCategory`] if `category` is not registered.
    pub fn tags_for(&self, category: Category) -> Result<TagUniverse, AppError> {
        let mut tags = TagUniverse::new();
        for template in self.registry.entries_for(category)? {
            tags.extend_from(template.tags());
        }
        Ok(tags)
    }

    /// Renders every template registered for `category` with `value`.
    ///
    /// Entries come out in registry order. Each entry's tags are copied from
    /// its template and collected into the snapshot's [`TagUniverse`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownCategory`] if `category` is not registered.
    /// The category is checked even when rendering is skipped for empty input.
    pub fn generate(&self, category: Category, value: &str) -> Result<Generation, AppError> {
        let templates = self.registry.entries_for(category)?;

        if value.is_empty() && !self.options.render_empty_input {
            debug!(category = %category, "Empty input, rendering skipped");
            return Ok(Generation::empty(category, value));
        }

        let placeholder = category.placeholder();
        let mut tags = TagUniverse::new();
        let mut entries = Vec::with_capacity(templates.len());

        for template in &templates {
            let url = render(template.template(), placeholder, value);
            let label = display_label(&url);
            tags.extend_from(template.tags());
            entries.push(RenderedEntry::new(url, template.tags().to_vec(), label));
        }

        debug!(
            category = %category,
            entries = entries.len(),
            tags = tags.len(),
            "Entries rendered"
        );

        Ok(Generation {
            category,
            value: value.to_string(),
            entries,
            tags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TemplateEntry;
    use crate::domain::repositories::MockTemplateRegistry;

    fn entry(template: &str, tags: &[&str]) -> TemplateEntry {
        TemplateEntry::new(template, tags.iter().copied()).unwrap()
    }

    fn domain_templates() -> Vec<TemplateEntry> {
        vec![
            entry("https://crt.sh/?q=$domain", &["Certificates", "Networking"]),
            entry("https://who.is/whois/$domain", &["Whois", "Networking"]),
        ]
    }

    #[test]
    fn test_generate_renders_in_registry_order() {
        let mut mock_registry = MockTemplateRegistry::new();
        mock_registry
            .expect_entries_for()
            .withf(|c| *c == Category::Domain)
            .times(1)
            .returning(|_| Ok(domain_templates()));

        let service = GeneratorService::new(Arc::new(mock_registry));

        let generation = service.generate(Category::Domain, "example.com").unwrap();

        let urls: Vec<_> = generation.entries.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(
            urls,
            ["https://crt.sh/?q=example.com", "https://who.is/whois/example.com"]
        );
        assert_eq!(generation.entries[0].display_label, "crt.sh");
        assert_eq!(generation.value, "example.com");
    }

    #[test]
    fn test_generate_collects_tag_universe() {
        let mut mock_registry = MockTemplateRegistry::new();
        mock_registry
            .expect_entries_for()
            .returning(|_| Ok(domain_templates()));

        let service = GeneratorService::new(Arc::new(mock_registry));

        let generation = service.generate(Category::Domain, "a.com").unwrap();
        let tags: Vec<_> = generation.tags.iter().collect();
        assert_eq!(tags, ["Certificates", "Networking", "Whois"]);
    }

    #[test]
    fn test_generate_propagates_unknown_category() {
        let mut mock_registry = MockTemplateRegistry::new();
        mock_registry
            .expect_entries_for()
            .times(1)
            .returning(|c| Err(AppError::unknown_category(c.label())));

        let service = GeneratorService::new(Arc::new(mock_registry));

        let result = service.generate(Category::Image, "cat.png");
        assert!(matches!(result, Err(AppError::UnknownCategory(_))));
    }

    #[test]
    fn test_generate_empty_value_renders_by_default() {
        let mut mock_registry = MockTemplateRegistry::new();
        mock_registry
            .expect_entries_for()
            .returning(|_| Ok(domain_templates()));

        let service = GeneratorService::new(Arc::new(mock_registry));

        let generation = service.generate(Category::Domain, "").unwrap();
        assert_eq!(generation.entries.len(), 2);
        assert_eq!(generation.entries[1].url, "https://who.is/whois/");
        assert_eq!(generation.tags.len(), 3);
    }

    #[test]
    fn test_generate_empty_value_skipped_when_disabled() {
        let mut mock_registry = MockTemplateRegistry::new();
        mock_registry
            .expect_entries_for()
            .times(1)
            .returning(|_| Ok(domain_templates()));

        let service = GeneratorService::with_options(
            Arc::new(mock_registry),
            GeneratorOptions {
                render_empty_input: false,
            },
        );

        let generation = service.generate(Category::Domain, "").unwrap();
        assert!(generation.entries.is_empty());
        assert!(generation.tags.is_empty());
    }

    #[test]
    fn test_generate_skip_still_checks_category() {
        let mut mock_registry = MockTemplateRegistry::new();
        mock_registry
            .expect_entries_for()
            .returning(|c| Err(AppError::unknown_category(c.label())));

        let service = GeneratorService::with_options(
            Arc::new(mock_registry),
            GeneratorOptions {
                render_empty_input: false,
            },
        );

        assert!(service.generate(Category::Domain, "").is_err());
    }

    #[test]
    fn test_tags_for_ignores_empty_input_policy() {
        let mut mock_registry = MockTemplateRegistry::new();
        mock_registry
            .expect_entries_for()
            .returning(|_| Ok(domain_templates()));

        let service = GeneratorService::with_options(
            Arc::new(mock_registry),
            GeneratorOptions {
                render_empty_input: false,
            },
        );

        let tags = service.tags_for(Category::Domain).unwrap();
        assert_eq!(tags.len(), 3);
    }

    #[test]
    fn test_categories_delegates_to_registry() {
        let mut mock_registry = MockTemplateRegistry::new();
        mock_registry
            .expect_categories()
            .times(1)
            .returning(|| vec![Category::Username, Category::Domain]);

        let service = GeneratorService::new(Arc::new(mock_registry));

        assert_eq!(
            service.categories(),
            vec![Category::Username, Category::Domain]
        );
    }
}
