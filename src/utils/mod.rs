//! Utility functions for template rendering and label derivation.
//!
//! - [`substitution`] - Placeholder replacement in URL templates
//! - [`display_label`] - Host extraction and truncation for display

pub mod display_label;
pub mod substitution;
