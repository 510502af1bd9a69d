//! Infrastructure layer for template sources.
//!
//! This layer implements the registry interface defined by the domain layer.
//!
//! # Modules
//!
//! - [`registry`] - In-memory template registry and template file loader

pub mod registry;
