//! Domain layer containing the lookup entities and the registry contract.
//!
//! Defines the data model and the repository interface independent of where
//! templates come from.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Template registry trait definition
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - The registry trait is implemented by [`crate::infrastructure::registry`]
//! - Rendering and filtering are orchestrated in [`crate::application::services`]

pub mod entities;
pub mod repositories;
