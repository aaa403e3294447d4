//! Route table.
//!
//! ```text
//! GET    /health
//! GET    {prefix}/items
//! POST   {prefix}/items
//! GET    {prefix}/items/csv
//! GET    {prefix}/items/{id}
//! PATCH  {prefix}/items/{id}
//! DELETE {prefix}/items/{id}
//! ```
//!
//! `/items/csv` is a static segment, so it wins over the `{id}` capture.

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, AppState};

/// Builds the application router with every route mounted under `prefix`.
///
/// `prefix` is expected in normalised form (see
/// [`normalize_prefix`](crate::config::normalize_prefix)); an empty prefix
/// mounts the item routes at the root.
pub fn create_router(state: AppState, prefix: &str) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            &format!("{prefix}/items"),
            get(handlers::list_items).post(handlers::create_item),
        )
        .route(&format!("{prefix}/items/csv"), get(handlers::export_csv))
        .route(
            &format!("{prefix}/items/{{id}}"),
            get(handlers::get_item)
                .patch(handlers::update_item)
                .delete(handlers::delete_item),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
