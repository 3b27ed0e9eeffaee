use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::error::AppError;
use crate::state::AppState;

/// Relays the upstream body as-is.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let body = state
        .scraper
        .fetch_posts()
        .await
        .inspect_err(|e| log::error!("Failed to fetch posts: {e}"))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}
