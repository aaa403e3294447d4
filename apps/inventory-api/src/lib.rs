//! # Inventory API
//!
//! HTTP surface of the inventory service: CRUD over a single `inventory`
//! table plus a CSV export of every item.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  HTTP request                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Router (CORS, TraceLayer)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Handler ── decode / validate ──► 400 ErrorResponse                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ItemRepository ── NotFound / UniqueViolation ──► 200 {"Message"}      │
//! │       │          └─ anything else ──────────────► 500 ErrorResponse    │
//! │       ▼                                                                 │
//! │  Item JSON / CSV bytes                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The binary in `main.rs` wires configuration, logging and shutdown around
//! [`create_router`]; tests drive the same router in-process.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

use inventory_db::Database;

pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult};
pub use routes::create_router;

/// Shared application state.
///
/// `Database` wraps a connection pool, so cloning the state per request is
/// a reference-count bump.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db }
    }
}
