#![allow(dead_code)]

use osint_hub::application::services::{
    FilterService, GeneratorOptions, GeneratorService, LookupSession,
};
use osint_hub::domain::entities::{Category, RenderedEntry, TagQueryMode};
use osint_hub::infrastructure::registry::StaticTemplateRegistry;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

pub fn builtin_registry() -> Arc<StaticTemplateRegistry> {
    Arc::new(StaticTemplateRegistry::builtin())
}

pub fn create_test_generator() -> Arc<GeneratorService<StaticTemplateRegistry>> {
    Arc::new(GeneratorService::new(builtin_registry()))
}

pub fn create_generator_skipping_empty() -> GeneratorService<StaticTemplateRegistry> {
    GeneratorService::with_options(
        builtin_registry(),
        GeneratorOptions {
            render_empty_input: false,
        },
    )
}

pub fn create_test_session(
    category: Category,
    mode: TagQueryMode,
) -> LookupSession<StaticTemplateRegistry> {
    LookupSession::new(create_test_generator(), FilterService::new(mode), category).unwrap()
}

pub fn write_template_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

pub fn position_of(entries: &[RenderedEntry], url: &str) -> usize {
    entries
        .iter()
        .position(|e| e.url == url)
        .unwrap_or_else(|| panic!("no entry rendered as {url}"))
}
