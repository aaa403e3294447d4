use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::error::ApiResult;
use crate::AppState;

/// `Content-Disposition` sent with every export.
pub const CSV_DISPOSITION: &str = "attachment;filename=inventory.csv";

/// Streams every item as a CSV attachment.
///
/// The body is fully encoded before the first byte is sent, so an encoding
/// failure still yields a clean 500 rather than a truncated download.
pub async fn export_csv(State(state): State<AppState>) -> ApiResult<Response> {
    let items = state.db.items().list().await?;
    let csv_data = inventory_core::export::encode(&items)?;

    info!(rows = items.len(), bytes = csv_data.len(), "Exported inventory CSV");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (header::CONTENT_DISPOSITION, CSV_DISPOSITION),
        ],
        csv_data,
    )
        .into_response())
}
