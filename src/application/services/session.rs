//! Caller-owned lookup session.

use super::filter_service::{FilterService, suggest_tags};
use super::generator_service::GeneratorService;
use crate::domain::entities::{Category, FilterState, Generation, RenderedEntry, TagUniverse};
use crate::domain::repositories::TemplateRegistry;
use crate::error::AppError;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// State of one interactive lookup: the chosen category and value, the current
/// rendered snapshot, the filter, the entries the user marked, and free-form
/// notes.
///
/// Everything a front end needs between events is held here and passed
/// explicitly; nothing lives in process-wide state. Each change of category or
/// value replaces the snapshot and drops the marks, since mark indices refer to
/// the snapshot they were made on. Notes are kept for the life of the session.
pub struct LookupSession<R: TemplateRegistry> {
    generator: Arc<GeneratorService<R>>,
    filter_service: FilterService,
    generation: Generation,
    filter: FilterState,
    marked: BTreeSet<usize>,
    notes: String,
}

impl<R: TemplateRegistry> LookupSession<R> {
    /// Opens a session on `category` with an empty value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownCategory`] if `category` is not registered.
    pub fn new(
        generator: Arc<GeneratorService<R>>,
        filter_service: FilterService,
        category: Category,
    ) -> Result<Self, AppError> {
        let generation = generator.generate(category, "")?;
        Ok(Self {
            generator,
            filter_service,
            generation,
            filter: FilterState::new(),
            marked: BTreeSet::new(),
            notes: String::new(),
        })
    }

    pub fn category(&self) -> Category {
        self.generation.category
    }

    pub fn value(&self) -> &str {
        &self.generation.value
    }

    pub fn entries(&self) -> &[RenderedEntry] {
        &self.generation.entries
    }

    pub fn tags(&self) -> &TagUniverse {
        &self.generation.tags
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn categories(&self) -> Vec<Category> {
        self.generator.categories()
    }

    /// Switches to another category, clearing the value, the tag selection and
    /// the marks. The text query is kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownCategory`] if `category` is not registered;
    /// the session is left unchanged.
    pub fn select_category(&mut self, category: Category) -> Result<(), AppError> {
        self.generation = self.generator.generate(category, "")?;
        self.filter.selected_tags.clear();
        self.marked.clear();
        debug!(category = %category, "Category selected");
        Ok(())
    }

    /// Re-renders the current category for `value`. Marks are cleared; tag
    /// selection and text query are kept.
    pub fn set_value(&mut self, value: &str) -> Result<(), AppError> {
        self.generation = self.generator.generate(self.generation.category, value)?;
        self.marked.clear();
        Ok(())
    }

    pub fn set_text_query(&mut self, query: impl Into<String>) {
        self.filter.text_query = query.into();
    }

    /// Flips selection of `tag`, returning whether it is now selected.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.filter.selected_tags.remove(tag) {
            false
        } else {
            self.filter.selected_tags.insert(tag.to_string());
            true
        }
    }

    /// Replaces the tag selection.
    pub fn set_selected_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter.selected_tags = tags.into_iter().map(Into::into).collect();
    }

    /// Clears both the tag selection and the text query.
    pub fn clear_filters(&mut self) {
        self.filter = FilterState::new();
    }

    /// One visibility flag per entry.
    pub fn visibility(&self) -> Vec<bool> {
        self.filter_service
            .classify_visibility(&self.generation.entries, &self.filter)
    }

    /// Entries visible under the current filter, with their indices.
    pub fn visible_entries(&self) -> Vec<(usize, &RenderedEntry)> {
        self.visibility()
            .into_iter()
            .zip(self.generation.entries.iter())
            .enumerate()
            .filter_map(|(index, (visible, entry))| visible.then_some((index, entry)))
            .collect()
    }

    /// Flips the mark on entry `index`, returning whether it is now marked, or
    /// `None` if there is no such entry.
    pub fn toggle_mark(&mut self, index: usize) -> Option<bool> {
        if index >= self.generation.entries.len() {
            warn!(index, entries = self.generation.entries.len(), "Mark index out of range");
            return None;
        }

        if self.marked.remove(&index) {
            Some(false)
        } else {
            self.marked.insert(index);
            Some(true)
        }
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.marked.contains(&index)
    }

    /// URLs of the marked entries, in entry order, whether or not they are
    /// currently visible.
    pub fn marked_urls(&self) -> Vec<&str> {
        self.marked
            .iter()
            .filter_map(|index| self.generation.entries.get(*index))
            .map(|entry| entry.url.as_str())
            .collect()
    }

    /// URLs for a bulk launch, in entry order: the selected tags apply, and
    /// the text query must occur in the label or URL. Unlike
    /// [`visible_entries`](Self::visible_entries) a query matching only a tag
    /// does not count. Front ends should confirm the count before acting on
    /// the whole list.
    pub fn launch_urls(&self) -> Vec<&str> {
        self.filter_service
            .launch_indices(&self.generation.entries, &self.filter)
            .into_iter()
            .map(|index| self.generation.entries[index].url.as_str())
            .collect()
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Replaces the session notes. Never persisted.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Tags of the current snapshot starting with `prefix`.
    pub fn tag_suggestions(&self, prefix: &str) -> Vec<&str> {
        suggest_tags(&self.generation.tags, prefix)
    }
}
