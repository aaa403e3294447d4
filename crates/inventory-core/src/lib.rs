//! # inventory-core: Record Model for the Inventory Service
//!
//! This crate holds everything about an inventory [`Item`] that does not
//! touch a database or a socket: the type itself, its JSON and CSV shapes,
//! and the rules an inbound payload must satisfy.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Inventory Service Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                inventory-api (Axum handlers)                    │   │
//! │  │   list ─ get ─ create ─ update ─ delete ─ export csv            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ inventory-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │  export   │  │ validation│                  │   │
//! │  │   │   Item    │  │ CsvRecord │  │   rules   │                  │   │
//! │  │   │  Payload  │  │  encode   │  │  checks   │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                inventory-db (Database Layer)                    │   │
//! │  │             SQLite queries, migrations, repository              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Item` and the inbound `ItemPayload`
//! - [`export`] - CSV encoding through the [`CsvRecord`] trait
//! - [`error`] - Validation and export errors
//! - [`validation`] - Payload rules
//!
//! ## Example Usage
//!
//! ```rust
//! use inventory_core::{export, Item};
//!
//! let items = vec![Item {
//!     id: 1,
//!     name: "A".to_string(),
//!     quantity: 1,
//!     unit_price: 1.0,
//! }];
//!
//! let csv = export::encode(&items).unwrap();
//! assert_eq!(csv, b"Id,Name,Quantity,UnitPrice\n1,A,1,1.000000\n");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod export;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ExportError, ValidationError};
pub use export::{CsvField, CsvRecord};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of an item name, in characters.
///
/// Matches the `varchar(255)` column the inventory table has always used.
pub const MAX_NAME_LENGTH: usize = 255;
