//! # Item Handlers
//!
//! CRUD over the inventory table.
//!
//! ## Outcome Mapping
//! ```text
//! ┌──────────┬──────────────────────┬──────────────────────────────────────┐
//! │ Handler  │ Success              │ Domain outcome (200 + Message)       │
//! ├──────────┼──────────────────────┼──────────────────────────────────────┤
//! │ list     │ 200 [Item, ...]      │                                      │
//! │ get      │ 200 Item             │ Record not found!                    │
//! │ create   │ 201 Item (new id)    │ Duplicate entry!                     │
//! │ update   │ 201 Item (path id)   │ Record not found! / Duplicate entry! │
//! │ delete   │ 200 Record deleted!  │ Record not found!                    │
//! └──────────┴──────────────────────┴──────────────────────────────────────┘
//! ```

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, info};

use inventory_core::{validation::validate_payload, ItemPayload};
use inventory_db::DbError;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

pub const RECORD_NOT_FOUND: &str = "Record not found!";
pub const DUPLICATE_ENTRY: &str = "Duplicate entry!";
pub const RECORD_DELETED: &str = "Record deleted!";

/// Plain message body, e.g. `{"Message":"Record deleted!"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageResponse {
    #[serde(rename = "Message")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}

/// 200 with a message body.
fn message(text: &str) -> Response {
    (StatusCode::OK, Json(MessageResponse::new(text))).into_response()
}

/// Turns the storage outcomes clients see as messages into responses;
/// everything else becomes an `ApiError`.
fn storage_outcome(err: DbError) -> ApiResult<Response> {
    match err {
        DbError::NotFound { .. } => Ok(message(RECORD_NOT_FOUND)),
        DbError::UniqueViolation { detail } => {
            debug!(%detail, "Rejected duplicate entry");
            Ok(message(DUPLICATE_ENTRY))
        }
        other => Err(ApiError::from(other)),
    }
}

/// `GET {prefix}/items`
pub async fn list_items(State(state): State<AppState>) -> ApiResult<Response> {
    let items = state.db.items().list().await?;
    Ok(Json(items).into_response())
}

/// `GET {prefix}/items/{id}`
pub async fn get_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Response> {
    let Path(id) = id?;

    match state.db.items().get_by_id(id).await? {
        Some(item) => Ok(Json(item).into_response()),
        None => Ok(message(RECORD_NOT_FOUND)),
    }
}

/// `POST {prefix}/items`
///
/// Any `id` in the body is ignored; storage assigns one.
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(payload) = payload?;
    validate_payload(&payload)?;

    match state.db.items().insert(&payload).await {
        Ok(item) => {
            info!(id = item.id, name = %item.name, "Item created");
            Ok((StatusCode::CREATED, Json(item)).into_response())
        }
        Err(err) => storage_outcome(err),
    }
}

/// `PATCH {prefix}/items/{id}`
///
/// Full replacement: every field in the body is written. The response
/// carries the path id, whatever the body says.
pub async fn update_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> ApiResult<Response> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    validate_payload(&payload)?;

    match state.db.items().update(id, &payload).await {
        Ok(item) => {
            info!(id = item.id, "Item updated");
            Ok((StatusCode::CREATED, Json(item)).into_response())
        }
        Err(err) => storage_outcome(err),
    }
}

/// `DELETE {prefix}/items/{id}`
pub async fn delete_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Response> {
    let Path(id) = id?;

    match state.db.items().delete(id).await {
        Ok(()) => {
            info!(id, "Item deleted");
            Ok(message(RECORD_DELETED))
        }
        Err(err) => storage_outcome(err),
    }
}
