//! Request handlers.

mod export;
mod health;
mod items;

pub use export::{export_csv, CSV_DISPOSITION};
pub use health::{health, HealthResponse};
pub use items::{
    create_item, delete_item, get_item, list_items, update_item, MessageResponse,
    DUPLICATE_ENTRY, RECORD_DELETED, RECORD_NOT_FOUND,
};
