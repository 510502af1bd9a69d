//! Application layer services implementing the lookup workflow.
//!
//! This layer coordinates registry lookups, rendering and filtering. Services
//! consume the registry trait and provide a clean API for front ends.
//!
//! # Available Services
//!
//! - [`services::generator_service::GeneratorService`] - Renders a category's templates for a value
//! - [`services::filter_service::FilterService`] - Tag and text visibility classification
//! - [`services::session::LookupSession`] - Caller-owned state for interactive front ends

pub mod services;
