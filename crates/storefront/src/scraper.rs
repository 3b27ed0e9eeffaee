use crate::parser::{ParseError, parse_listings};
use crate::types::{Catalog, Listing};

use futures::future;
use reqwest::Client;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ScraperError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
}

#[derive(Debug, Clone)]
pub struct WebScraper {
    client: Client,
    catalog_base_url: String,
    posts_url: String,
}

impl WebScraper {
    pub fn new() -> Result<Self, ScraperError> {
        Self::with_base_urls(crate::CATALOG_BASE_URL, crate::POSTS_URL)
    }

    /// Scraper pointed at other hosts, e.g. a local stand-in for tests.
    pub fn with_base_urls(catalog_base_url: &str, posts_url: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            client,
            catalog_base_url: catalog_base_url.trim_end_matches('/').to_string(),
            posts_url: posts_url.to_string(),
        })
    }

    pub fn catalog_url(&self, catalog: Catalog) -> String {
        format!("{}/{}/", self.catalog_base_url, catalog.slug())
    }

    /// Raw body of the upstream posts endpoint, untouched.
    pub async fn fetch_posts(&self) -> Result<String, ScraperError> {
        log::info!("Fetching posts: {}", self.posts_url);
        self.get_text(&self.posts_url).await
    }

    pub async fn fetch_listings(&self, catalog: Catalog) -> Result<Vec<Listing>, ScraperError> {
        let url = self.catalog_url(catalog);
        log::info!("Fetching {} catalog: {}", catalog, url);
        let html = self.get_text(&url).await?;
        let listings = parse_listings(&html, &url)?;
        log::debug!("Parsed {} listing(s) from {}", listings.len(), url);
        Ok(listings)
    }

    /// Scrapes every catalog concurrently. Fails if any single catalog fails.
    pub async fn fetch_all_listings(&self) -> Result<Vec<(Catalog, Vec<Listing>)>, ScraperError> {
        future::try_join_all(Catalog::ALL.into_iter().map(|catalog| async move {
            let listings = self.fetch_listings(catalog).await?;
            Ok::<_, ScraperError>((catalog, listings))
        }))
        .await
    }

    async fn get_text(&self, url: &str) -> Result<String, ScraperError> {
        Ok(self
            .client
            .get(url)
            .send()
            .await
            .inspect_err(|e| log::error!("HTTP error: {e:?}"))?
            .error_for_status()?
            .text()
            .await
            .inspect_err(|e| log::error!("Decode error: {e:?}"))?)
    }
}
