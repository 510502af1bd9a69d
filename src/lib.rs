//! # OSINT Hub
//!
//! Turns one piece of identifying input (a username, domain, email address,
//! IP address or phone number) into a list of lookup URLs on public
//! reconnaissance services, and narrows that list by tag or free text.
//!
//! ## Architecture
//!
//! The crate keeps a layered layout:
//!
//! - **Domain Layer** ([`domain`]) - Categories, templates, rendered entries and the registry trait
//! - **Application Layer** ([`application`]) - Generation, filtering and the lookup session
//! - **Infrastructure Layer** ([`infrastructure`]) - The built-in template registry and template files
//! - **Utilities** ([`utils`]) - Placeholder substitution and display labels
//!
//! ## Quick Start
//!
//! ```bash
//! # Render every domain lookup for a value and keep the DNS ones
//! cargo run -- generate domain example.com --tag DNS
//!
//! # Add your own templates on top of the built-in tables
//! export OSINT_TEMPLATES_FILE="./templates.json"
//! cargo run -- interactive
//! ```
//!
//! ## Library Use
//!
//! ```
//! use osint_hub::prelude::*;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(StaticTemplateRegistry::builtin());
//! let generator = GeneratorService::new(registry);
//!
//! let generation = generator.generate(Category::Domain, "example.com").unwrap();
//! let filter = FilterState::with_tags(["Certificates"]);
//! let visible = FilterService::default().visible_entries(&generation.entries, &filter);
//!
//! assert!(visible.iter().any(|e| e.url == "https://crt.sh/?q=example.com"));
//! ```
//!
//! ## Configuration
//!
//! Runtime configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub mod config;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        FilterService, GeneratorOptions, GeneratorService, LookupSession,
    };
    pub use crate::domain::entities::{
        Category, FilterState, Generation, RenderedEntry, TagQueryMode, TagUniverse, TemplateEntry,
    };
    pub use crate::domain::repositories::TemplateRegistry;
    pub use crate::error::AppError;
    pub use crate::infrastructure::registry::StaticTemplateRegistry;
}
