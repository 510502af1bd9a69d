//! JSON template files that extend the built-in registry.
//!
//! A template file maps category names to template lists:
//!
//! ```json
//! {
//!   "Domain": [
//!     { "url": "https://bgp.he.net/dns/$domain", "tags": ["DNS", "BGP"] },
//!     { "url": "https://rdap.org/domain/$domain", "tags": "Whois RDAP" }
//!   ]
//! }
//! ```
//!
//! Tags may be a list or a single whitespace-delimited string; both are
//! normalized into an ordered list here, so nothing past this boundary has to
//! care which form was used.

use crate::domain::entities::{Category, TemplateEntry};
use crate::error::AppError;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Tags as written in a template file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TagSpec {
    List(Vec<String>),
    Delimited(String),
}

impl TagSpec {
    fn into_tags(self) -> Vec<String> {
        match self {
            TagSpec::List(tags) => tags,
            TagSpec::Delimited(raw) => raw.split_whitespace().map(str::to_string).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TemplateRecord {
    url: String,
    tags: TagSpec,
}

/// Reads and validates a template file.
///
/// Categories are returned sorted by key; entries keep their file order.
///
/// # Errors
///
/// Returns [`AppError::TemplateFile`] for I/O or JSON errors,
/// [`AppError::UnknownCategory`] for an unrecognised key and
/// [`AppError::EmptyTags`] for a template without tags.
pub fn load(path: &Path) -> Result<Vec<(Category, Vec<TemplateEntry>)>, AppError> {
    let raw = fs::read_to_string(path).map_err(|e| AppError::template_file(path, e.to_string()))?;
    parse(&raw).map_err(|e| match e {
        AppError::TemplateFile { message, .. } => AppError::template_file(path, message),
        other => other,
    })
}

/// Parses template file contents.
///
/// # Errors
///
/// See [`load`]. JSON errors carry an empty path.
pub fn parse(raw: &str) -> Result<Vec<(Category, Vec<TemplateEntry>)>, AppError> {
    let document: Map<String, Value> = serde_json::from_str(raw)
        .map_err(|e| AppError::template_file(Path::new(""), e.to_string()))?;

    let mut tables = Vec::with_capacity(document.len());
    for (key, value) in document {
        let category: Category = key.parse()?;

        let records: Vec<TemplateRecord> = serde_json::from_value(value)
            .map_err(|e| AppError::template_file(Path::new(""), format!("{key}: {e}")))?;

        let entries = records
            .into_iter()
            .map(|record| TemplateEntry::new(record.url, record.tags.into_tags()))
            .collect::<Result<Vec<_>, _>>()?;

        tables.push((category, entries));
    }

    Ok(tables)
}
