//! Core domain entities representing the lookup data model.
//!
//! Entities are plain data structures. Registry lookups, rendering and
//! filtering live in the application layer (see [`crate::application::services`]).
//!
//! # Entity Types
//!
//! - [`Category`] - The kind of input a lookup starts from
//! - [`TemplateEntry`] - A registered URL pattern with its tags
//! - [`RenderedEntry`] - A template after substitution, with its display label
//! - [`TagUniverse`] - Every distinct tag of one generation pass
//! - [`FilterState`] - Caller-owned tag selection and text query
//!
//! All entities include unit tests demonstrating their construction and usage.

pub mod category;
pub mod filter;
pub mod rendered;
pub mod template;

pub use category::Category;
pub use filter::{FilterState, TagQueryMode};
pub use rendered::{Generation, RenderedEntry, TagUniverse};
pub use template::TemplateEntry;
