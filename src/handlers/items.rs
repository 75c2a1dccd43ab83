//! Item CRUD handlers. Each one issues a single storage statement while holding the storage guard.

use crate::error::AppError;
use crate::extractors::ItemId;
use crate::model::{Item, ItemPayload};
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};

fn parse_body(body: &[u8]) -> Result<ItemPayload, AppError> {
    ItemPayload::from_body(body).map_err(|e| {
        tracing::debug!(error = %e, "rejecting request body");
        AppError::InvalidBody
    })
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Item>>, AppError> {
    let storage = state.storage().await;
    let items = storage.list().await?;
    Ok(Json(items))
}

pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload = parse_body(&body)?;
    let storage = state.storage().await;
    let id = storage.insert(&payload.name).await?;
    drop(storage);
    tracing::info!(id, "item created");
    Ok((StatusCode::CREATED, Json(payload.into_item(id))))
}

pub async fn read(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> Result<Json<Item>, AppError> {
    let storage = state.storage().await;
    let item = storage.fetch(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(item))
}

/// Renames the item. A missing row is not detected; the response echoes the path id and new name.
pub async fn update(
    State(state): State<AppState>,
    ItemId(id): ItemId,
    body: Bytes,
) -> Result<Json<Item>, AppError> {
    let payload = parse_body(&body)?;
    let storage = state.storage().await;
    storage.update(id, &payload.name).await?;
    Ok(Json(payload.into_item(id)))
}

pub async fn delete(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> Result<StatusCode, AppError> {
    let storage = state.storage().await;
    storage.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn collection_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Unsupported method on `/items/<id>`. Reached only once the id has parsed, so a bad id stays a 400.
pub async fn item_method_not_allowed(_id: ItemId) -> AppError {
    AppError::MethodNotAllowed
}

/// `/items/` with nothing after the slash.
pub async fn missing_id() -> AppError {
    AppError::InvalidId
}
