//! Services orchestrating lookups for front ends.

pub mod filter_service;
pub mod generator_service;
pub mod session;

pub use filter_service::{FilterService, suggest_tags};
pub use generator_service::{GeneratorOptions, GeneratorService};
pub use session::LookupSession;
