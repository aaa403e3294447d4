//! # Validation Module
//!
//! Checks an [`ItemPayload`] must pass before it reaches storage.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Layer 1: JSON decoding (serde, in the HTTP extractor)                 │
//! │  ├── Well-formed JSON                                                  │
//! │  └── All fields present with the right types (numbers are finite)     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── name: at most MAX_NAME_LENGTH characters (column width)           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── unique indexes, if any                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Empty names, negative quantities (returns, corrections) and negative
//! prices are stored as sent.

use crate::error::{ValidationError, ValidationResult};
use crate::types::ItemPayload;
use crate::MAX_NAME_LENGTH;

/// Validates a create/update payload.
pub fn validate_payload(payload: &ItemPayload) -> ValidationResult<()> {
    validate_item_name(&payload.name)
}

/// Rejects names longer than [`MAX_NAME_LENGTH`] characters.
///
/// Length is counted in characters, not bytes.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Widget").is_ok());
        assert!(validate_item_name("").is_ok());
        assert!(validate_item_name(&"A".repeat(MAX_NAME_LENGTH)).is_ok());

        assert!(matches!(
            validate_item_name(&"A".repeat(MAX_NAME_LENGTH + 1)),
            Err(ValidationError::TooLong { max: MAX_NAME_LENGTH, .. })
        ));
    }

    #[test]
    fn test_name_length_counts_characters() {
        // 255 two-byte characters is still within the limit
        assert!(validate_item_name(&"é".repeat(MAX_NAME_LENGTH)).is_ok());
        assert!(validate_item_name(&"é".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_negative_numbers_are_accepted() {
        let payload = ItemPayload {
            name: "Refund".to_string(),
            quantity: -3,
            unit_price: -1.0,
        };

        assert!(validate_payload(&payload).is_ok());
    }
}
