use std::collections::BTreeMap;
use std::process;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use storefront::types::{Catalog, Listing};
use storefront::{ItemStore, WebScraper};

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Browse the storefront seed items, posts and linux laptop catalogs", long_about = None)]
struct Cli {
    #[arg(
        short = 'l',
        long = "log-level",
        value_enum,
        default_value = "info",
        global = true,
        help = "Set the logging level"
    )]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the bundled seed items
    Items {
        #[arg(
            short = 'o',
            long = "output",
            value_enum,
            default_value = "text",
            help = "Output format"
        )]
        format: OutputFormat,
    },
    /// Print the posts relayed from the upstream JSON API
    Posts,
    /// Scrape product listings from a catalog page
    Listings {
        #[arg(
            long,
            value_parser = parse_catalog,
            default_value = "laptops",
            help = "Catalog to scrape (laptops, mini_computers, accessories)"
        )]
        catalog: Catalog,

        #[arg(long, help = "Scrape every catalog concurrently", conflicts_with = "catalog")]
        all: bool,

        #[arg(
            short = 'o',
            long = "output",
            value_enum,
            default_value = "text",
            help = "Output format"
        )]
        format: OutputFormat,
    },
}

fn parse_catalog(s: &str) -> Result<Catalog, String> {
    Catalog::from_str(s).map_err(|e| e.to_string())
}

fn serialize_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Error serializing to JSON: {}", e);
            process::exit(1);
        }
    }
}

fn print_listings(catalog: Catalog, listings: &[Listing]) {
    println!("== {} ({} listing(s))", catalog, listings.len());
    if listings.is_empty() {
        println!("No entries to display.");
    }
    for listing in listings {
        println!("{}", listing);
    }
}

fn by_catalog(scraped: Vec<(Catalog, Vec<Listing>)>) -> BTreeMap<Catalog, Vec<Listing>> {
    scraped.into_iter().collect()
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.clone().into())
        .init();

    match cli.command {
        Commands::Items { format } => {
            let store = ItemStore::seeded().unwrap_or_else(|e| {
                log::error!("Error loading seed items: {}", e);
                process::exit(1);
            });
            let items = store.list().await;

            match format {
                OutputFormat::Json => serialize_json(&items),
                OutputFormat::Text => {
                    for item in &items {
                        println!("{}", item);
                    }
                    println!("\nTotal: {}", items.len());
                }
            }
        }

        Commands::Posts => {
            let scraper = new_scraper();
            let posts = scraper.fetch_posts().await.unwrap_or_else(|e| {
                log::error!("Error fetching posts: {}", e);
                process::exit(1);
            });
            println!("{}", posts);
        }

        Commands::Listings {
            catalog,
            all,
            format,
        } => {
            let scraper = new_scraper();

            let scraped = if all {
                scraper.fetch_all_listings().await
            } else {
                scraper
                    .fetch_listings(catalog)
                    .await
                    .map(|listings| vec![(catalog, listings)])
            };
            let scraped = scraped.unwrap_or_else(|e| {
                log::error!("Error scraping listings: {}", e);
                process::exit(1);
            });

            let scraped = by_catalog(scraped);
            match format {
                OutputFormat::Json if all => serialize_json(&scraped),
                OutputFormat::Json => serialize_json(&scraped[&catalog]),
                OutputFormat::Text => {
                    for (catalog, listings) in &scraped {
                        print_listings(*catalog, listings);
                    }
                }
            }
        }
    }
}

fn new_scraper() -> WebScraper {
    WebScraper::new().unwrap_or_else(|e| {
        log::error!("Error creating scraper: {}", e);
        process::exit(1);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront::types::ListingInfo;

    fn listing(title: &str) -> Listing {
        Listing {
            title: title.to_string(),
            image: String::new(),
            price: "1".to_string(),
            infos: vec![ListingInfo {
                label: "CPU".to_string(),
                value: "N100".to_string(),
            }],
        }
    }

    #[test]
    fn test_all_catalogs_serialize_as_object() {
        let scraped = vec![
            (Catalog::Accessories, vec![]),
            (Catalog::Laptops, vec![listing("Pro 14")]),
            (Catalog::MiniComputers, vec![listing("Mini")]),
        ];

        let json = serde_json::to_value(by_catalog(scraped)).unwrap();
        let object = json.as_object().expect("keyed by catalog");
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["accessories", "laptops", "mini_computers"]);
        assert_eq!(json["laptops"][0]["title"], "Pro 14");
        assert_eq!(json["accessories"], serde_json::json!([]));
    }
}
