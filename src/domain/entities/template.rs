//! Template entity: one registered lookup URL pattern and its tags.

use crate::error::AppError;

/// A URL pattern registered for a category.
///
/// The template normally contains its category's placeholder token once; a
/// template without it renders unchanged (static landing pages such as phone
/// lookup sites). Tags are never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    template: String,
    tags: Vec<String>,
}

impl TemplateEntry {
    /// Creates a template entry.
    ///
    /// Blank tags (empty or whitespace-only) are dropped; the remaining tags
    /// keep their order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmptyTags`] if `tags` is empty or contains only
    /// blank strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use osint_hub::domain::entities::TemplateEntry;
    ///
    /// let entry = TemplateEntry::new("https://crt.sh/?q=$domain", ["Certificates"]).unwrap();
    /// assert_eq!(entry.tags(), ["Certificates"]);
    /// ```
    pub fn new<I, S>(template: impl Into<String>, tags: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let template = template.into();
        let tags: Vec<String> = tags
            .into_iter()
            .map(Into::into)
            .filter(|tag: &String| !tag.trim().is_empty())
            .collect();

        if tags.is_empty() {
            return Err(AppError::empty_tags(template));
        }

        Ok(Self { template, tags })
    }

    /// Builds an entry from the compiled-in tables. Those tables are covered by
    /// a test asserting every entry has tags.
    pub(crate) fn from_static(template: &'static str, tags: &'static [&'static str]) -> Self {
        debug_assert!(!tags.is_empty(), "built-in template without tags: {template}");
        Self {
            template: template.to_string(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns true if `placeholder` occurs in the template.
    pub fn has_placeholder(&self, placeholder: &str) -> bool {
        !placeholder.is_empty() && self.template.contains(placeholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_tag_order() {
        let entry =
            TemplateEntry::new("https://github.com/$username", ["profile", "social media"]).unwrap();

        assert_eq!(entry.template(), "https://github.com/$username");
        assert_eq!(entry.tags(), ["profile", "social media"]);
    }

    #[test]
    fn test_new_allows_duplicate_tags() {
        let entry = TemplateEntry::new("https://x.test/$ip", ["IP", "IP"]).unwrap();
        assert_eq!(entry.tags().len(), 2);
    }

    #[test]
    fn test_new_rejects_empty_tags() {
        let result = TemplateEntry::new("https://x.test/$ip", Vec::<String>::new());
        assert!(matches!(result, Err(AppError::EmptyTags { .. })));
    }

    #[test]
    fn test_new_drops_blank_tags() {
        let entry = TemplateEntry::new("https://x.test/$domain", ["", "DNS", "  "]).unwrap();
        assert_eq!(entry.tags(), ["DNS"]);
    }

    #[test]
    fn test_new_rejects_blank_only_tags() {
        let result = TemplateEntry::new("https://x.test/$ip", ["", "  "]);
        assert!(result.is_err());
    }

    #[test]
    fn test_has_placeholder() {
        let entry = TemplateEntry::new("https://spydialer.com/", ["phone"]).unwrap();
        assert!(!entry.has_placeholder("$phone"));
        assert!(!entry.has_placeholder(""));

        let entry = TemplateEntry::new("https://ok.ru/$username", ["profile"]).unwrap();
        assert!(entry.has_placeholder("$username"));
    }
}
