//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any lookup
//! runs. A `.env` file in the working directory is honoured (loaded via
//! `dotenvy` in `main.rs`).
//!
//! ## Variables
//!
//! - `RUST_LOG` - Log filter (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `OSINT_RENDER_EMPTY_INPUT` - Render templates for an empty value
//!   (`true`/`false`/`1`/`0`, default: `true`)
//! - `OSINT_TAG_QUERY_MODE` - How text queries match tags: `legacy` or
//!   `contains` (default: `legacy`)
//! - `OSINT_TEMPLATES_FILE` - Optional JSON file with extra templates
//!
//! ```bash
//! export OSINT_TAG_QUERY_MODE="contains"
//! export OSINT_TEMPLATES_FILE="$HOME/.config/osint-hub/templates.json"
//! ```

use crate::application::services::GeneratorOptions;
use crate::domain::entities::TagQueryMode;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: String,
    /// Render template-shaped entries when the value is empty.
    pub render_empty_input: bool,
    pub tag_query_mode: TagQueryMode,
    /// Extra templates appended to the built-in registry.
    pub templates_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
            render_empty_input: true,
            tag_query_mode: TagQueryMode::default(),
            templates_file: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let render_empty_input = match env::var("OSINT_RENDER_EMPTY_INPUT") {
            Ok(v) => parse_bool(&v)
                .with_context(|| format!("OSINT_RENDER_EMPTY_INPUT must be a boolean, got '{v}'"))?,
            Err(_) => true,
        };

        let tag_query_mode = match env::var("OSINT_TAG_QUERY_MODE") {
            Ok(v) => v
                .parse::<TagQueryMode>()
                .map_err(anyhow::Error::msg)
                .context("Invalid OSINT_TAG_QUERY_MODE")?,
            Err(_) => TagQueryMode::default(),
        };

        let templates_file = env::var("OSINT_TEMPLATES_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            log_level,
            log_format,
            render_empty_input,
            tag_query_mode,
            templates_file,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `templates_file` is set but does not point at a file
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if let Some(ref path) = self.templates_file
            && !path.is_file()
        {
            anyhow::bail!(
                "OSINT_TEMPLATES_FILE does not point at a file: {}",
                path.display()
            );
        }

        Ok(())
    }

    /// Generator options derived from this configuration.
    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            render_empty_input: self.render_empty_input,
        }
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Render empty input: {}", self.render_empty_input);
        tracing::info!("  Tag query mode: {}", self.tag_query_mode);

        match self.templates_file {
            Some(ref path) => tracing::info!("  Templates file: {}", path.display()),
            None => tracing::info!("  Templates file: none (built-in only)"),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
