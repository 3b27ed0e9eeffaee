use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

pub mod items;
pub mod listings;
pub mod posts;

async fn hello() -> &'static str {
    "Hello World"
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/api/items", get(items::list).post(items::create))
        .route(
            "/api/items/{id}",
            get(items::get).patch(items::update).delete(items::delete),
        )
        .route("/api/posts", get(posts::list))
        .route("/api/laptops", get(listings::laptops))
        .route("/api/mini-computers", get(listings::mini_computers))
        .route("/api/accessories", get(listings::accessories))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
