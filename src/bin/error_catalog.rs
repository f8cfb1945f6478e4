//! Terminal browser for the error-message catalog.
//!
//! Usage:
//!   error-catalog categories
//!   error-catalog category payment
//!   error-catalog example payment-declined
//!   error-catalog search card declined
//!   error-catalog about
//!   error-catalog --json search payment
//!   error-catalog validate --file catalogs/ux_error_catalog_v1.json
//!
//! The catalog comes from `--catalog`, then `ERROR_CATALOG_PATH`, then the
//! copy compiled into the binary.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{Value, json};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use ux_error_catalog::about::ABOUT;
use ux_error_catalog::catalog::BUNDLED_CATALOG;
use ux_error_catalog::guidelines::{self, MESSAGE_TEMPLATE};
use ux_error_catalog::{
    CatalogIndex, CatalogSchema, CatalogSource, Category, ErrorExample, SearchResult,
    open_catalog, resolve_catalog_source, search, validate_catalog_value,
};

const DEFAULT_FEATURED: usize = 3;

#[derive(Parser, Debug)]
#[command(name = "error-catalog")]
#[command(about = "Browse and search bad/good UX error-message examples")]
struct Cli {
    /// Catalog document to read instead of the bundled one.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every category with its example count.
    Categories,
    /// Show one category and its examples.
    Category { id: String },
    /// Show one error example in full.
    Example { id: String },
    /// Search categories and examples.
    Search {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },
    /// Show the first few examples.
    Featured {
        #[arg(long, default_value_t = DEFAULT_FEATURED)]
        count: usize,
    },
    /// Print the error-message writing guidelines.
    Guidelines,
    /// Describe what the catalog is for and where it came from.
    About,
    /// Check a catalog document against the schema and loader rules.
    ///
    /// The schema pins a single `schema_version`; versions added through
    /// ERROR_CATALOG_ALLOWED_SCHEMAS also need a matching `--schema`.
    Validate {
        /// Document to check; defaults to the resolved catalog source.
        #[arg(long)]
        file: Option<PathBuf>,
        /// Schema to check against; defaults to the bundled schema.
        #[arg(long)]
        schema: Option<PathBuf>,
    },
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("error-catalog: {err:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let source = resolve_catalog_source(cli.catalog.as_deref());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let json = cli.json;

    match &cli.command {
        Command::Categories => list_categories(&mut out, json, &*open_catalog(&source)?),
        Command::Category { id } => show_category(&mut out, json, &*open_catalog(&source)?, id),
        Command::Example { id } => show_example(&mut out, json, &*open_catalog(&source)?, id),
        Command::Search { query } => {
            show_search(&mut out, json, &*open_catalog(&source)?, &query.join(" "))
        }
        Command::Featured { count } => {
            show_featured(&mut out, json, &*open_catalog(&source)?, *count)
        }
        Command::Guidelines => show_guidelines(&mut out, json),
        Command::About => show_about(&mut out, json),
        Command::Validate { file, schema } => {
            validate(&mut out, json, &source, file.as_ref(), schema.as_ref())
        }
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("serializing output")?;
    writeln!(out)?;
    Ok(())
}

fn list_categories<W: Write>(out: &mut W, as_json: bool, catalog: &CatalogIndex) -> Result<()> {
    if as_json {
        let rows: Vec<Value> = catalog
            .categories()
            .iter()
            .map(|category| {
                json!({
                    "category": category,
                    "example_count": catalog.category_example_count(category.id.as_str()),
                })
            })
            .collect();
        return write_json(out, &rows);
    }

    for category in catalog.categories() {
        let count = catalog.category_example_count(category.id.as_str());
        writeln!(
            out,
            "{}  ({} example{})",
            category_heading(category),
            count,
            if count == 1 { "" } else { "s" }
        )?;
        writeln!(out, "    id: {}", category.id)?;
        writeln!(out, "    {}", category.description)?;
    }
    Ok(())
}

fn show_category<W: Write>(
    out: &mut W,
    as_json: bool,
    catalog: &CatalogIndex,
    id: &str,
) -> Result<()> {
    let Some(category) = catalog.category(id) else {
        bail!("category '{id}' not found; run 'error-catalog categories' to browse all categories");
    };
    let examples = catalog.examples_by_category(id);

    if as_json {
        return write_json(out, &json!({"category": category, "examples": examples}));
    }

    writeln!(out, "{}", category_heading(category))?;
    writeln!(out, "{}", category.description)?;
    writeln!(out)?;
    if examples.is_empty() {
        writeln!(out, "No examples yet.")?;
        return Ok(());
    }
    for example in examples {
        write_card(out, example)?;
    }
    Ok(())
}

fn show_example<W: Write>(
    out: &mut W,
    as_json: bool,
    catalog: &CatalogIndex,
    id: &str,
) -> Result<()> {
    let Some(example) = catalog.error_example(id) else {
        bail!("error example '{id}' not found");
    };
    let category_title = catalog
        .category_of(example)
        .map(|category| category.title.as_str())
        .unwrap_or("Category");

    if as_json {
        return write_json(
            out,
            &json!({"example": example, "category_title": category_title}),
        );
    }

    writeln!(out, "{} [{}]", example.title, example.fixability.label())?;
    writeln!(out, "{}", example.context)?;
    if !example.tags.is_empty() {
        writeln!(out, "Tags: {}", example.tags.join(", "))?;
    }
    writeln!(out, "In: {category_title} ({})", example.category_id)?;
    writeln!(out)?;
    writeln!(out, "Bad example:")?;
    writeln!(out, "  \"{}\"", example.bad_example.message)?;
    writeln!(out, "  {}", example.bad_example.explanation)?;
    writeln!(out)?;
    writeln!(out, "Good example:")?;
    writeln!(out, "  \"{}\"", example.good_example.message)?;
    writeln!(out, "  {}", example.good_example.explanation)?;
    if !example.what_makes_it_better.is_empty() {
        writeln!(out)?;
        writeln!(out, "What makes it better:")?;
        for point in &example.what_makes_it_better {
            writeln!(out, "  - {point}")?;
        }
    }
    writeln!(out)?;
    writeln!(out, "Reusable copy pattern:")?;
    writeln!(out, "  {}", example.copy_pattern)?;
    Ok(())
}

fn show_search<W: Write>(
    out: &mut W,
    as_json: bool,
    catalog: &CatalogIndex,
    query: &str,
) -> Result<()> {
    let results = search(catalog, query);
    if as_json {
        return write_json(out, &results);
    }

    if query.trim().is_empty() {
        writeln!(out, "Enter a search term to find error examples and categories.")?;
        return Ok(());
    }
    if results.is_empty() {
        writeln!(
            out,
            "No results found for \"{query}\". Try checking your spelling or using different keywords."
        )?;
        return Ok(());
    }

    let (categories, examples): (Vec<SearchResult<'_>>, Vec<SearchResult<'_>>) =
        results.into_iter().partition(SearchResult::is_category);
    if !categories.is_empty() {
        writeln!(out, "Categories")?;
        for hit in &categories {
            if let SearchResult::Category {
                id,
                title,
                description,
            } = hit
            {
                writeln!(out, "  {title} ({id})")?;
                writeln!(out, "    {description}")?;
            }
        }
    }
    if !examples.is_empty() {
        if !categories.is_empty() {
            writeln!(out)?;
        }
        writeln!(out, "Error Examples")?;
        for hit in &examples {
            if let SearchResult::Error { id, title, context } = hit {
                writeln!(out, "  {title} ({id})")?;
                writeln!(out, "    {context}")?;
            }
        }
    }
    Ok(())
}

fn show_featured<W: Write>(
    out: &mut W,
    as_json: bool,
    catalog: &CatalogIndex,
    count: usize,
) -> Result<()> {
    let featured = catalog.featured(count);
    if as_json {
        return write_json(out, featured);
    }
    for example in featured {
        write_card(out, example)?;
    }
    Ok(())
}

fn show_guidelines<W: Write>(out: &mut W, as_json: bool) -> Result<()> {
    if as_json {
        return write_json(
            out,
            &json!({
                "introduction": guidelines::INTRODUCTION,
                "principles": guidelines::principles(),
                "template": MESSAGE_TEMPLATE,
            }),
        );
    }

    writeln!(out, "Core Principles for Error Messages")?;
    writeln!(out, "{}", guidelines::INTRODUCTION)?;
    for principle in guidelines::principles() {
        writeln!(out)?;
        writeln!(out, "{}. {}", principle.number, principle.title)?;
        if let (Some(avoid), Some(prefer)) = (principle.avoid, principle.prefer) {
            writeln!(out, "  Instead of this: \"{avoid}\"")?;
            writeln!(out, "  Use this:        \"{prefer}\"")?;
        }
        writeln!(out, "  {}", principle.rationale)?;
        for point in principle.points {
            writeln!(out, "  - {point}")?;
        }
    }
    writeln!(out)?;
    writeln!(out, "Error Message Template")?;
    for (pos, part) in MESSAGE_TEMPLATE.parts.iter().enumerate() {
        writeln!(out, "  {}. {}: {}", pos + 1, part.name, part.guidance)?;
    }
    writeln!(out, "  {}", MESSAGE_TEMPLATE.pattern)?;
    writeln!(out, "  \"{}\"", MESSAGE_TEMPLATE.example)?;
    Ok(())
}

fn show_about<W: Write>(out: &mut W, as_json: bool) -> Result<()> {
    if as_json {
        return write_json(out, &ABOUT);
    }

    writeln!(out, "About This Project")?;
    writeln!(out, "{}", ABOUT.summary)?;
    writeln!(out)?;
    writeln!(out, "Inspiration")?;
    writeln!(
        out,
        "  {} by {}",
        ABOUT.inspiration.title, ABOUT.inspiration.author
    )?;
    writeln!(out, "  {}", ABOUT.inspiration.url)?;
    writeln!(out)?;
    writeln!(out, "Our Mission")?;
    writeln!(out, "{}", ABOUT.mission)?;
    for point in ABOUT.mission_points {
        writeln!(out, "  - {point}")?;
    }
    writeln!(out)?;
    writeln!(out, "How To Use This Library")?;
    writeln!(out, "{}", ABOUT.usage)?;
    for point in ABOUT.usage_points {
        writeln!(out, "  - {point}")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", ABOUT.closing)?;
    Ok(())
}

fn validate<W: Write>(
    out: &mut W,
    as_json: bool,
    source: &CatalogSource,
    file: Option<&PathBuf>,
    schema_path: Option<&PathBuf>,
) -> Result<()> {
    let schema = match schema_path {
        Some(path) => CatalogSchema::load(path)?,
        None => CatalogSchema::bundled()?,
    };

    let target = match (file, source) {
        (Some(path), _) => Some(path.clone()),
        (None, CatalogSource::File(path)) => Some(path.clone()),
        (None, CatalogSource::Bundled) => None,
    };
    let (label, raw) = match &target {
        Some(path) => (
            path.display().to_string(),
            fs::read_to_string(path)
                .with_context(|| format!("reading catalog {}", path.display()))?,
        ),
        None => ("bundled catalog".to_string(), BUNDLED_CATALOG.to_string()),
    };

    let document: Value =
        serde_json::from_str(&raw).with_context(|| format!("parsing {label} as JSON"))?;
    let index = validate_catalog_value(&schema, document)
        .with_context(|| format!("validating {label}"))?;

    let dangling = index.dangling_examples();
    for example in &dangling {
        tracing::warn!(
            example = %example.id,
            category = %example.category_id,
            "example is unreachable from category browsing"
        );
    }

    if as_json {
        let dangling_ids: Vec<&str> = dangling.iter().map(|example| example.id.as_str()).collect();
        return write_json(
            out,
            &json!({
                "catalog": index.key(),
                "categories": index.categories().len(),
                "examples": index.examples().len(),
                "dangling": dangling_ids,
            }),
        );
    }

    writeln!(
        out,
        "{label}: ok ({} categories, {} examples, {} without a category)",
        index.categories().len(),
        index.examples().len(),
        dangling.len()
    )?;
    Ok(())
}

fn category_heading(category: &Category) -> String {
    match &category.emoji {
        Some(emoji) => format!("{emoji} {}", category.title),
        None => category.title.clone(),
    }
}

fn write_card<W: Write>(out: &mut W, example: &ErrorExample) -> Result<()> {
    writeln!(
        out,
        "{} [{}] ({})",
        example.title,
        example.fixability.label(),
        example.id
    )?;
    writeln!(out, "    {}", example.context)?;
    writeln!(out, "    Bad:  \"{}\"", example.bad_example.message)?;
    writeln!(out, "    Good: \"{}\"", example.good_example.message)?;
    Ok(())
}
