//! Rendered entries and the tag universe produced by one generation pass.

use crate::domain::entities::Category;
use serde::Serialize;
use std::collections::BTreeSet;

/// A template after placeholder substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedEntry {
    pub url: String,
    pub tags: Vec<String>,
    pub display_label: String,
}

impl RenderedEntry {
    pub fn new(url: String, tags: Vec<String>, display_label: String) -> Self {
        Self {
            url,
            tags,
            display_label,
        }
    }

    /// Returns true if any of this entry's tags equals `tag` exactly.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Every distinct tag present in one category's rendered entries.
///
/// Iteration is sorted and case-sensitive, which is the order tag menus are
/// offered in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagUniverse(BTreeSet<String>);

impl TagUniverse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every tag of `tags` to the universe.
    pub fn extend_from<'a>(&mut self, tags: impl IntoIterator<Item = &'a String>) {
        for tag in tags {
            if !self.0.contains(tag) {
                self.0.insert(tag.clone());
            }
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for TagUniverse {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Output of one generation pass: an immutable snapshot for one
/// `(category, value)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generation {
    pub category: Category,
    pub value: String,
    pub entries: Vec<RenderedEntry>,
    pub tags: TagUniverse,
}

impl Generation {
    /// A snapshot with no entries, used when rendering is skipped.
    pub fn empty(category: Category, value: impl Into<String>) -> Self {
        Self {
            category,
            value: value.into(),
            entries: Vec::new(),
            tags: TagUniverse::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_has_tag_is_case_sensitive() {
        let entry = RenderedEntry::new(
            "https://crt.sh/?q=a.com".to_string(),
            tags(&["DNS", "Certificates"]),
            "crt.sh".to_string(),
        );

        assert!(entry.has_tag("DNS"));
        assert!(!entry.has_tag("dns"));
    }

    #[test]
    fn test_tag_universe_is_sorted_and_distinct() {
        let mut universe = TagUniverse::new();
        universe.extend_from(&tags(&["Whois", "DNS", "Networking"]));
        universe.extend_from(&tags(&["DNS", "Archives"]));

        let collected: Vec<_> = universe.iter().collect();
        assert_eq!(collected, ["Archives", "DNS", "Networking", "Whois"]);
        assert_eq!(universe.len(), 4);
    }

    #[test]
    fn test_tag_universe_keeps_case_variants_apart() {
        let universe: TagUniverse = tags(&["dns", "DNS"]).into_iter().collect();
        assert_eq!(universe.len(), 2);
        assert!(universe.contains("dns"));
        assert!(universe.contains("DNS"));
    }

    #[test]
    fn test_empty_generation() {
        let generation = Generation::empty(Category::Domain, "");
        assert!(generation.entries.is_empty());
        assert!(generation.tags.is_empty());
    }
}
