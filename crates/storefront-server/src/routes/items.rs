use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;
use storefront::store::parse_id;
use storefront::types::{Item, ItemPatch, NewItem};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ItemMessage {
    pub message: &'static str,
    pub item: Item,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.store.list().await)
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>, AppError> {
    let id = parse_id(&id).ok_or(AppError::NotFound)?;
    let item = state.store.get(id).await.ok_or(AppError::NotFound)?;
    Ok(Json(item))
}

/// A body sent without a JSON content type reads as an empty object; a JSON
/// body that fails to parse is still rejected.
fn body_or_default<T: Default>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match body {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(AppError::Body(rejection)),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewItem>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemMessage>), AppError> {
    let new = body_or_default(body)?;
    let item = state.store.create(new).await?;
    log::info!("Created item {}", item.id);

    Ok((
        StatusCode::CREATED,
        Json(ItemMessage {
            message: "Item successfully created !",
            item,
        }),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ItemPatch>, JsonRejection>,
) -> Result<Json<ItemMessage>, AppError> {
    let id = parse_id(&id).ok_or(AppError::NotFound)?;
    let patch = body_or_default(body)?;
    let item = state
        .store
        .update(id, patch)
        .await
        .ok_or(AppError::NotFound)?;

    Ok(Json(ItemMessage {
        message: "Item successfully edited !",
        item,
    }))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, AppError> {
    let id = parse_id(&id).ok_or(AppError::NotFound)?;
    let removed = state.store.delete(id).await.ok_or(AppError::NotFound)?;
    log::info!("Deleted item {}", removed.id);

    Ok(Json(Message {
        message: "Item successfully deleted !",
    }))
}
