mod parser;
pub mod scraper;
pub mod store;
pub mod types;

pub use parser::ParseError;
pub use scraper::{ScraperError, WebScraper};
pub use store::{ItemStore, StoreError};

pub(crate) const CATALOG_BASE_URL: &str = "https://laptopwithlinux.com";
pub(crate) const POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";
