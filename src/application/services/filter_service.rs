//! Visibility classification for rendered entries.

use crate::domain::entities::{FilterState, RenderedEntry, TagQueryMode, TagUniverse};
use std::collections::BTreeSet;
use tracing::debug;

/// Classifies rendered entries as visible or hidden under a [`FilterState`].
///
/// An entry is visible when every active condition holds:
///
/// - **Tags** (active when tags are selected): the entry shares at least one
///   tag with the selection, compared case-sensitively.
/// - **Text** (active when the query is non-empty): the lower-cased query
///   occurs in the entry's display label or URL, or one of its tags matches
///   according to the configured [`TagQueryMode`].
///
/// With no active condition every entry is visible. The service never mutates
/// the filter state or the entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterService {
    tag_query_mode: TagQueryMode,
}

impl FilterService {
    pub fn new(tag_query_mode: TagQueryMode) -> Self {
        Self { tag_query_mode }
    }

    pub fn tag_query_mode(&self) -> TagQueryMode {
        self.tag_query_mode
    }

    /// Returns one visibility flag per entry, indexed like `entries`.
    pub fn classify_visibility(&self, entries: &[RenderedEntry], filter: &FilterState) -> Vec<bool> {
        if filter.is_identity() {
            return vec![true; entries.len()];
        }

        let query = filter.text_query.to_lowercase();
        let visibility: Vec<bool> = entries
            .iter()
            .map(|entry| {
                matches_tags(entry, &filter.selected_tags)
                    && (query.is_empty() || self.matches_text(entry, &query))
            })
            .collect();

        debug!(
            entries = entries.len(),
            visible = visibility.iter().filter(|v| **v).count(),
            selected_tags = filter.selected_tags.len(),
            query = %filter.text_query,
            "Visibility classified"
        );

        visibility
    }

    /// Tag-menu filtering: the tag condition alone, text ignored.
    pub fn filter_by_tags(&self, entries: &[RenderedEntry], selected: &BTreeSet<String>) -> Vec<bool> {
        let filter = FilterState {
            selected_tags: selected.clone(),
            text_query: String::new(),
        };
        self.classify_visibility(entries, &filter)
    }

    /// Indices of the entries visible under `filter`, in entry order.
    pub fn visible_indices(&self, entries: &[RenderedEntry], filter: &FilterState) -> Vec<usize> {
        self.classify_visibility(entries, filter)
            .into_iter()
            .enumerate()
            .filter_map(|(index, visible)| visible.then_some(index))
            .collect()
    }

    /// Entries visible under `filter`, in entry order.
    pub fn visible_entries<'a>(
        &self,
        entries: &'a [RenderedEntry],
        filter: &FilterState,
    ) -> Vec<&'a RenderedEntry> {
        self.visible_indices(entries, filter)
            .into_iter()
            .map(|index| &entries[index])
            .collect()
    }

    /// Indices of the entries that belong in a launch list.
    ///
    /// Same tag condition as [`classify_visibility`](Self::classify_visibility),
    /// but the text query only looks at the display label and URL; tags never
    /// satisfy it.
    pub fn launch_indices(&self, entries: &[RenderedEntry], filter: &FilterState) -> Vec<usize> {
        let query = filter.text_query.to_lowercase();
        entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| {
                matches_tags(entry, &filter.selected_tags)
                    && (query.is_empty() || matches_location(entry, &query))
            })
            .map(|(index, _)| index)
            .collect()
    }

    /// `query` is already lower-cased and non-empty.
    fn matches_text(&self, entry: &RenderedEntry, query: &str) -> bool {
        if matches_location(entry, query) {
            return true;
        }

        entry.tags.iter().any(|tag| {
            let tag = tag.to_lowercase();
            match self.tag_query_mode {
                TagQueryMode::Legacy => query.contains(&tag),
                TagQueryMode::Contains => tag.contains(query),
            }
        })
    }
}

fn matches_location(entry: &RenderedEntry, query: &str) -> bool {
    entry.display_label.to_lowercase().contains(query) || entry.url.to_lowercase().contains(query)
}

fn matches_tags(entry: &RenderedEntry, selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || entry.tags.iter().any(|tag| selected.contains(tag))
}

/// Tags from `universe` starting with `prefix`, compared case-insensitively,
/// in the universe's sorted order. An empty prefix suggests every tag.
pub fn suggest_tags<'a>(universe: &'a TagUniverse, prefix: &str) -> Vec<&'a str> {
    let prefix = prefix.to_lowercase();
    universe
        .iter()
        .filter(|tag| tag.to_lowercase().starts_with(&prefix))
        .collect()
}
