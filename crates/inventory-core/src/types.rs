//! # Domain Types
//!
//! The single inventory entity and the body clients send to create or
//! replace one.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────┐   decode    ┌─────────────────┐                   │
//! │  │  ItemPayload    │ ──────────► │      Item       │                   │
//! │  │  ─────────────  │  + id from  │  ─────────────  │                   │
//! │  │  name           │   storage   │  id (i64)       │                   │
//! │  │  quantity       │   or path   │  name           │                   │
//! │  │  unit_price     │             │  quantity       │                   │
//! │  └─────────────────┘             │  unit_price     │                   │
//! │                                  └─────────────────┘                   │
//! │                                                                         │
//! │  JSON keys:  id, name, quantity, unit_price                             │
//! │  CSV header: Id, Name, Quantity, UnitPrice                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `created_at` / `updated_at` live in the table but never leave the
//! storage layer.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::export::{CsvField, CsvRecord};

// =============================================================================
// Item
// =============================================================================

/// An item stored in the inventory table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Item {
    /// Identifier assigned by storage (auto-increment).
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Units on hand.
    pub quantity: i32,

    /// Price of a single unit.
    pub unit_price: f64,
}

impl CsvRecord for Item {
    const HEADERS: &'static [&'static str] = &["Id", "Name", "Quantity", "UnitPrice"];

    fn fields(&self) -> Vec<CsvField<'_>> {
        vec![
            self.id.into(),
            self.name.as_str().into(),
            self.quantity.into(),
            self.unit_price.into(),
        ]
    }
}

// =============================================================================
// Item Payload
// =============================================================================

/// Request body for create and update.
///
/// An `id` key in the body is accepted and ignored: on create storage assigns
/// the id, on update the id comes from the path. Every other field is
/// required, so an update is always a full replace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemPayload {
    pub name: String,
    pub quantity: i32,
    pub unit_price: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_json_keys() {
        let item = Item {
            id: 7,
            name: "Widget".to_string(),
            quantity: 5,
            unit_price: 2.5,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "name": "Widget", "quantity": 5, "unit_price": 2.5})
        );
    }

    #[test]
    fn test_payload_ignores_id() {
        let payload: ItemPayload =
            serde_json::from_str(r#"{"id":42,"name":"Widget","quantity":5,"unit_price":2.50}"#)
                .unwrap();

        assert_eq!(
            payload,
            ItemPayload {
                name: "Widget".to_string(),
                quantity: 5,
                unit_price: 2.5,
            }
        );
    }

    #[test]
    fn test_payload_requires_all_fields() {
        let result = serde_json::from_str::<ItemPayload>(r#"{"name":"Widget","quantity":5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_item_csv_fields_follow_header_order() {
        let item = Item {
            id: 1,
            name: "A".to_string(),
            quantity: 1,
            unit_price: 1.0,
        };

        let rendered: Vec<String> = item.fields().iter().map(CsvField::render).collect();
        assert_eq!(Item::HEADERS.len(), rendered.len());
        assert_eq!(rendered, vec!["1", "A", "1", "1.000000"]);
    }
}
