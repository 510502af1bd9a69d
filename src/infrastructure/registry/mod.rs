//! Template registry implementations.
//!
//! - [`StaticTemplateRegistry`] - Built-in tables, optionally extended from a
//!   JSON template file (see [`template_file`])

mod builtin;
mod static_registry;
pub mod template_file;

pub use static_registry::{StaticTemplateRegistry, StaticTemplateRegistryBuilder};
