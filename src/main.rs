//! Command line front end for osint-hub.
//!
//! Renders lookup URLs for a piece of identifying input and narrows them by
//! tag or text. URLs are printed, never opened.
//!
//! # Usage
//!
//! ```bash
//! # List input categories
//! osint-hub categories
//!
//! # Show the tags offered for a category
//! osint-hub tags domain
//!
//! # Render, filter by tag and text, print as JSON
//! osint-hub generate domain example.com --tag DNS --query dns --format json
//!
//! # Interactive session with tag menus, marks, notes and launch lists
//! osint-hub interactive
//! ```
//!
//! # Environment Variables
//!
//! See [`osint_hub::config`] for the full list. `RUST_LOG` and `LOG_FORMAT`
//! control diagnostics, which go to stderr.

use osint_hub::application::services::{FilterService, GeneratorService, LookupSession};
use osint_hub::config::{self, Config};
use osint_hub::domain::entities::{Category, FilterState, RenderedEntry};
use osint_hub::domain::repositories::TemplateRegistry;
use osint_hub::infrastructure::registry::StaticTemplateRegistry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use serde::Serialize;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Turn a username, domain, email, IP or phone number into OSINT lookup URLs.
#[derive(Parser)]
#[command(name = "osint-hub")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// List input categories
    Categories,

    /// Show the tags offered for a category
    Tags {
        /// Category name (e.g. "domain", "email", "ip")
        category: Category,
    },

    /// Render lookup URLs for a value
    Generate {
        /// Category name (e.g. "username", "domain")
        category: Category,

        /// The value substituted into every template
        value: String,

        /// Only show entries carrying this tag (repeatable, any match)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Only show entries whose label, URL or tags match this text
        #[arg(short, long)]
        query: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Start an interactive lookup session
    Interactive,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Coloured table
    Text,
    /// JSON document
    Json,
    /// One URL per line
    Urls,
}

/// JSON shape of `generate --format json`.
#[derive(Serialize)]
struct GenerateOutput<'a> {
    category: Category,
    value: &'a str,
    tags: Vec<&'a str>,
    entries: Vec<EntryOutput<'a>>,
}

#[derive(Serialize)]
struct EntryOutput<'a> {
    index: usize,
    #[serde(flatten)]
    entry: &'a RenderedEntry,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    init_tracing(&config);
    config.print_summary();

    let registry = Arc::new(build_registry(&config)?);
    let generator = Arc::new(GeneratorService::with_options(
        registry,
        config.generator_options(),
    ));
    let filter_service = FilterService::new(config.tag_query_mode);

    match cli.command {
        Commands::Categories => handle_categories(&generator)?,
        Commands::Tags { category } => handle_tags(&generator, category)?,
        Commands::Generate {
            category,
            value,
            tags,
            query,
            format,
        } => {
            let filter = FilterState {
                selected_tags: tags.into_iter().collect(),
                text_query: query.unwrap_or_default(),
            };
            handle_generate(&generator, filter_service, category, &value, &filter, format)?;
        }
        Commands::Interactive => run_interactive(generator, filter_service)?,
    }

    Ok(())
}

/// Installs the tracing subscriber. Diagnostics go to stderr so stdout stays
/// clean for `--format json` and `--format urls`.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Built-in registry, extended by the configured template file if any.
fn build_registry(config: &Config) -> Result<StaticTemplateRegistry> {
    let mut registry = StaticTemplateRegistry::builtin();

    if let Some(ref path) = config.templates_file {
        registry
            .extend_from_file(path)
            .context("Failed to load custom templates")?;
    }

    Ok(registry)
}

/// Lists categories with their placeholder and template count.
fn handle_categories(generator: &GeneratorService<StaticTemplateRegistry>) -> Result<()> {
    println!("{}", "📂 Categories".bright_blue().bold());
    println!();
    println!(
        "  {:<16} {:<12} {}",
        "Name".bright_white().bold(),
        "Placeholder".bright_white().bold(),
        "Templates".bright_white().bold()
    );
    println!("  {}", "─".repeat(40).bright_black());

    for category in generator.categories() {
        let count = generator.registry().entries_for(category)?.len();
        println!(
            "  {:<16} {:<12} {}",
            category.label().cyan(),
            category.placeholder().bright_black(),
            count
        );
    }

    println!();
    Ok(())
}

/// Prints the sorted tag universe of a category.
fn handle_tags(generator: &GeneratorService<StaticTemplateRegistry>, category: Category) -> Result<()> {
    let tags = generator.tags_for(category)?;

    println!("{}", format!("🏷  Tags for {category}").bright_blue().bold());
    println!();
    for tag in tags.iter() {
        println!("  {}", tag.cyan());
    }
    println!();
    println!("  Total: {}", tags.len().to_string().bright_white().bold());

    Ok(())
}

/// Renders, filters and prints the entries for one value.
fn handle_generate(
    generator: &GeneratorService<StaticTemplateRegistry>,
    filter_service: FilterService,
    category: Category,
    value: &str,
    filter: &FilterState,
    format: OutputFormat,
) -> Result<()> {
    let generation = generator.generate(category, value)?;
    let visible = filter_service.visible_indices(&generation.entries, filter);

    for tag in filter.selected_tags.iter() {
        if !generation.tags.contains(tag) {
            tracing::warn!(tag = %tag, category = %category, "Selected tag is not offered by this category");
        }
    }

    match format {
        OutputFormat::Json => {
            let output = GenerateOutput {
                category,
                value,
                tags: generation.tags.iter().collect(),
                entries: visible
                    .iter()
                    .map(|&index| EntryOutput {
                        index,
                        entry: &generation.entries[index],
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Urls => {
            for index in visible {
                println!("{}", generation.entries[index].url);
            }
        }
        OutputFormat::Text => {
            println!(
                "{}",
                format!("🔎 {category}: {value}").bright_blue().bold()
            );
            println!(
                "  {} of {} entries shown",
                visible.len().to_string().bright_white().bold(),
                generation.entries.len()
            );
            println!();

            let rows: Vec<_> = visible
                .iter()
                .map(|&index| (index, &generation.entries[index], false))
                .collect();
            print_entries(&rows);
        }
    }

    Ok(())
}

/// Prints `(index, entry, marked)` rows as a table.
fn print_entries(rows: &[(usize, &RenderedEntry, bool)]) {
    if rows.is_empty() {
        println!("{}", "  No entries match".yellow());
        println!();
        return;
    }

    println!(
        "  {:<4} {:<31} {}",
        "#".bright_white().bold(),
        "Label".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for (index, entry, marked) in rows {
        let marker = if *marked { "*".green().bold() } else { " ".normal() };
        println!(
            "{} {:<4} {:<31} {}",
            marker,
            index.to_string().bright_black(),
            entry.display_label.cyan(),
            entry.url
        );
        println!("  {:<4} {}", "", entry.tags.join(", ").bright_black());
    }

    println!();
}

/// Interactive prompt loop over a [`LookupSession`].
fn run_interactive(
    generator: Arc<GeneratorService<StaticTemplateRegistry>>,
    filter_service: FilterService,
) -> Result<()> {
    let categories = generator.categories();
    let first = *categories.first().context("No categories registered")?;
    let mut session = LookupSession::new(generator, filter_service, first)?;

    choose_category(&mut session)?;
    enter_value(&mut session)?;

    const ACTIONS: [&str; 11] = [
        "Show entries",
        "Select tags",
        "Search text",
        "Clear filters",
        "Toggle mark",
        "Show marked",
        "Launch list",
        "Change value",
        "Change category",
        "Edit notes",
        "Quit",
    ];

    loop {
        let action = Select::new()
            .with_prompt(format!(
                "{} '{}'",
                session.category(),
                session.value()
            ))
            .items(&ACTIONS)
            .default(0)
            .interact()?;

        match action {
            0 => show_session_entries(&session),
            1 => select_tags(&mut session)?,
            2 => {
                let suggestions = session.tag_suggestions("");
                if !suggestions.is_empty() {
                    println!("  {} {}", "Tags:".bright_black(), suggestions.join(", ").bright_black());
                }
                let query: String = Input::new()
                    .with_prompt("Search (empty clears)")
                    .with_initial_text(session.filter().text_query.clone())
                    .allow_empty(true)
                    .interact_text()?;
                session.set_text_query(query);
                show_session_entries(&session);
            }
            3 => {
                session.clear_filters();
                println!("{}", "✨ Filters cleared".green());
            }
            4 => {
                let index: usize = Input::new().with_prompt("Entry #").interact_text()?;
                match session.toggle_mark(index) {
                    Some(true) => println!("{}", format!("✅ Marked #{index}").green()),
                    Some(false) => println!("{}", format!("Unmarked #{index}").yellow()),
                    None => println!("{}", format!("❌ No entry #{index}").red()),
                }
            }
            5 => print_url_list("📌 Marked", &session.marked_urls()),
            6 => {
                let urls = session.launch_urls();
                let confirmed = Confirm::new()
                    .with_prompt(format!("You are about to list {} URLs. Continue?", urls.len()))
                    .default(false)
                    .interact()?;
                if confirmed {
                    print_url_list("🚀 Launch list", &urls);
                } else {
                    println!("{}", "❌ Cancelled".red());
                }
            }
            7 => enter_value(&mut session)?,
            8 => {
                choose_category(&mut session)?;
                enter_value(&mut session)?;
            }
            9 => {
                let notes: String = Input::new()
                    .with_prompt("Notes")
                    .with_initial_text(session.notes().to_string())
                    .allow_empty(true)
                    .interact_text()?;
                session.set_notes(notes);
            }
            _ => break,
        }
    }

    Ok(())
}

fn choose_category(session: &mut LookupSession<StaticTemplateRegistry>) -> Result<()> {
    let categories = session.categories();
    let labels: Vec<&str> = categories.iter().map(|c| c.label()).collect();
    let current = categories
        .iter()
        .position(|c| *c == session.category())
        .unwrap_or(0);

    let choice = Select::new()
        .with_prompt("Category")
        .items(&labels)
        .default(current)
        .interact()?;

    session.select_category(categories[choice])?;
    Ok(())
}

fn enter_value(session: &mut LookupSession<StaticTemplateRegistry>) -> Result<()> {
    let value: String = Input::new()
        .with_prompt(format!("Enter {}", session.category().label().to_lowercase()))
        .allow_empty(true)
        .interact_text()?;

    session.set_value(&value)?;
    show_session_entries(session);
    Ok(())
}

fn select_tags(session: &mut LookupSession<StaticTemplateRegistry>) -> Result<()> {
    let tags: Vec<String> = session.tags().iter().map(str::to_string).collect();
    if tags.is_empty() {
        println!("{}", "  No tags for this category".yellow());
        return Ok(());
    }

    let defaults: Vec<bool> = tags
        .iter()
        .map(|t| session.filter().selected_tags.contains(t))
        .collect();

    let chosen = MultiSelect::new()
        .with_prompt("Filter by tags (space toggles, enter confirms)")
        .items(&tags)
        .defaults(&defaults)
        .interact()?;

    session.set_selected_tags(chosen.into_iter().map(|i| tags[i].clone()));
    show_session_entries(session);
    Ok(())
}

fn show_session_entries(session: &LookupSession<StaticTemplateRegistry>) {
    let rows: Vec<_> = session
        .visible_entries()
        .into_iter()
        .map(|(index, entry)| (index, entry, session.is_marked(index)))
        .collect();

    println!();
    println!(
        "  {} of {} entries shown",
        rows.len().to_string().bright_white().bold(),
        session.entries().len()
    );
    println!();
    print_entries(&rows);
}

fn print_url_list(title: &str, urls: &[&str]) {
    println!("{}", title.bright_blue().bold());
    if urls.is_empty() {
        println!("{}", "  Nothing to list".yellow());
    }
    for url in urls {
        println!("  {url}");
    }
    println!();
}
