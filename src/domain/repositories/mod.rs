//! Repository trait definitions for the domain layer.
//!
//! # Architecture
//!
//! - Traits define the contract for template lookup
//! - Implementations live in `crate::infrastructure::registry`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`TemplateRegistry`] - Per-category template tables

pub mod template_registry;

pub use template_registry::TemplateRegistry;

#[cfg(test)]
pub use template_registry::MockTemplateRegistry;
