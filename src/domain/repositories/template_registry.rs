//! Repository trait for template lookup.

use crate::domain::entities::{Category, TemplateEntry};
use crate::error::AppError;

/// Read-only table of URL templates, grouped by category.
///
/// # Implementations
///
/// - [`crate::infrastructure::registry::StaticTemplateRegistry`] - Built-in
///   tables, optionally extended from a JSON file
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRegistry: Send + Sync {
    /// Registered categories, in registration order.
    fn categories(&self) -> Vec<Category>;

    /// Templates registered for `category`, in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownCategory`] if `category` is not registered.
    fn entries_for(&self, category: Category) -> Result<Vec<TemplateEntry>, AppError>;
}
