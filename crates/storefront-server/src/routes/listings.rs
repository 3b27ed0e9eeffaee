use axum::Json;
use axum::extract::State;
use storefront::types::{Catalog, Listing};

use crate::error::AppError;
use crate::state::AppState;

async fn scrape(state: &AppState, catalog: Catalog) -> Result<Json<Vec<Listing>>, AppError> {
    let listings = state
        .scraper
        .fetch_listings(catalog)
        .await
        .inspect_err(|e| log::error!("Failed to scrape {catalog} catalog: {e}"))?;
    Ok(Json(listings))
}

pub async fn laptops(State(state): State<AppState>) -> Result<Json<Vec<Listing>>, AppError> {
    scrape(&state, Catalog::Laptops).await
}

pub async fn mini_computers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Listing>>, AppError> {
    scrape(&state, Catalog::MiniComputers).await
}

pub async fn accessories(State(state): State<AppState>) -> Result<Json<Vec<Listing>>, AppError> {
    scrape(&state, Catalog::Accessories).await
}
