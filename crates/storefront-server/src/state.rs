use std::sync::Arc;

use storefront::{ItemStore, StoreError, WebScraper, ScraperError};

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Scraper(#[from] ScraperError),
}

/// Shared by every handler. The store is the only mutable piece and carries
/// its own lock.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<ItemStore>,
    pub scraper: WebScraper,
}

impl AppState {
    pub fn new(store: ItemStore, scraper: WebScraper) -> Self {
        Self {
            store: Arc::new(store),
            scraper,
        }
    }

    /// Seeded store and a scraper aimed at the real upstream hosts.
    pub fn from_defaults() -> Result<Self, StateError> {
        Ok(Self::new(ItemStore::seeded()?, WebScraper::new()?))
    }
}
