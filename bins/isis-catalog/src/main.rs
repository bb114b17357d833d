//! isis-catalog: search and inspect the product catalog from the command line.

use anyhow::Context;
use clap::{Parser, Subcommand};
use isis_cli::output::{format_count, format_duration, format_price_pair, Status};
use isis_cli::progress;
use isis_core::config::Config;
use isis_core::error::exit_codes;
use isis_search::{
    calculate_relevance, levenshtein_distance, normalize_query, CatalogError, CatalogErrorCode,
    Item, JsonFileCatalog, Page, SearchRequest, SearchService,
};
use isis_telemetry::{metrics, Event, TelemetryConfig, Timer};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "isis-catalog")]
#[command(about = "Search and inspect the product catalog")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to .isis-search.toml when present)
    #[arg(long, global = true, env = "ISIS_CONFIG")]
    config: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog and print one page of ranked results
    Search {
        /// Catalog file (JSON array of products)
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Exact, case-sensitive category filter
        #[arg(long)]
        category: Option<String>,
        /// Free-text query
        #[arg(long, short)]
        query: Option<String>,
        /// Page to show, clamped into range
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,
    },
    /// Show a single product
    Details {
        /// Catalog file (JSON array of products)
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Product ID
        id: String,
    },
    /// Print the edit distance between two strings
    Distance {
        a: String,
        b: String,
    },
    /// Score an ad-hoc product against a query
    Score {
        /// Query text
        query: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        let core = err.downcast_ref::<isis_core::Error>();

        match core {
            Some(e) if json => match serde_json::to_string(&e.to_report()) {
                Ok(report) => eprintln!("{report}"),
                Err(_) => eprintln!("{e}"),
            },
            _ => Status::error(&format!("{err:#}")),
        }

        std::process::exit(core.map_or(exit_codes::FAILURE, isis_core::Error::exit_code));
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    isis_telemetry::init_with_config(TelemetryConfig {
        log_level: config.schema.logging.level.clone(),
        json: config.schema.logging.json,
        ..TelemetryConfig::default()
    })?;

    if let Some(path) = &config.path {
        tracing::debug!(path = %path, "Loaded configuration");
    }

    match cli.command {
        Commands::Search {
            catalog,
            category,
            query,
            page,
        } => {
            let service = open_catalog(&config, catalog)?;
            let request = SearchRequest {
                category,
                search_term: query,
                page_number: page,
            };
            search(&service, &request, cli.json)?;
        }

        Commands::Details { catalog, id } => {
            let service = open_catalog(&config, catalog)?;
            let item = service
                .details(&id)
                .map_err(catalog_failure)?
                .ok_or_else(|| isis_core::Error::item_not_found(&id))?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&item)?);
            } else {
                print_details(&item);
            }
        }

        Commands::Distance { a, b } => {
            let distance = levenshtein_distance(&a, &b);
            if cli.json {
                println!("{}", serde_json::json!({ "a": a, "b": b, "distance": distance }));
            } else {
                println!("{distance}");
            }
        }

        Commands::Score {
            query,
            name,
            category,
            description,
        } => {
            let item = Item::new("", name.unwrap_or_default())
                .with_category(category.unwrap_or_default())
                .with_description(description.unwrap_or_default());
            let normalized = normalize_query(&query);
            let score = if normalized.is_empty() {
                0
            } else {
                calculate_relevance(&item, &normalized)
            };

            if cli.json {
                println!("{}", serde_json::json!({ "query": normalized, "score": score }));
            } else {
                println!("{score}");
            }
        }
    }

    tracing::debug!(metrics = %metrics().export_json(), "Run finished");
    Ok(())
}

fn open_catalog(config: &Config, catalog: Option<PathBuf>) -> anyhow::Result<SearchService<JsonFileCatalog>> {
    let path = catalog
        .or_else(|| config.schema.search.catalog_path.as_ref().map(PathBuf::from))
        .ok_or_else(|| {
            isis_core::Error::config("No catalog file given").with_suggestion(
                "Pass --catalog, set search.catalog_path in .isis-search.toml, or set ISIS_CATALOG_PATH",
            )
        })?;

    Ok(SearchService::with_page_size(
        JsonFileCatalog::new(path),
        config.schema.search.page_size,
    ))
}

fn search(
    service: &SearchService<JsonFileCatalog>,
    request: &SearchRequest,
    json: bool,
) -> anyhow::Result<()> {
    let spinner = (!json).then(|| progress::spinner("Searching catalog"));
    let timer = Timer::start("search.duration_ms");
    metrics().increment("search.requests");

    let result = service.search(request);
    let elapsed = timer.stop();
    if let Some(pb) = &spinner {
        progress::finish_clear(pb);
    }

    let page = result
        .map_err(|e| {
            metrics().increment("search.catalog_failures");
            catalog_failure(e)
        })
        .with_context(|| format!("Searching {}", service.source().path().display()))?;

    Event::new(
        "search",
        serde_json::json!({
            "category": request.category,
            "query": request.search_term,
            "page": page.page_number(),
            "total_items": page.total_items(),
            "duration_ms": elapsed.as_millis(),
        }),
    )
    .log();

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print_page(&page, request);
        Status::info(&format!("Searched in {}", format_duration(elapsed)));
    }

    Ok(())
}

/// Map a catalog source failure onto the shared error codes.
fn catalog_failure(err: CatalogError) -> isis_core::Error {
    let message = err.to_string();
    let mapped = match err.code() {
        CatalogErrorCode::Unavailable => isis_core::Error::catalog_unavailable(message),
        CatalogErrorCode::InvalidData => isis_core::Error::catalog_invalid(message),
    };
    mapped.with_source(err)
}

fn print_page(page: &Page<Item>, request: &SearchRequest) {
    let title = match request.search_term.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => format!("Results for \"{q}\""),
        _ => "Catalog".to_string(),
    };
    Status::header(&title);

    if page.is_empty() {
        Status::warning("No matching products");
        return;
    }

    let offset = (page.page_number() - 1) * page.page_size();
    for (i, item) in page.items().iter().enumerate() {
        println!(
            "{:>4}. {} [{}] {}",
            offset + i + 1,
            item.name(),
            item.category(),
            format_price_pair(item.price(), item.discount_price()),
        );
    }

    println!();
    Status::info(&format!(
        "Page {} of {} ({})",
        page.page_number(),
        page.total_pages(),
        format_count(page.total_items(), "product", "products"),
    ));
}

fn print_details(item: &Item) {
    Status::header(item.name());
    Status::field("ID", item.id());
    Status::field("Category", item.category());
    Status::field("Price", &format_price_pair(item.price(), item.discount_price()));
    Status::field("Image", &item.web_image());
    if !item.description().is_empty() {
        println!();
        println!("{}", item.description());
    }
}
