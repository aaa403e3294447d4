//! # Error Types
//!
//! Domain-specific error types for inventory-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  inventory-core errors (this file)                                     │
//! │  ├── ValidationError  - Payload rule violations                        │
//! │  └── ExportError      - CSV encoding failures                          │
//! │                                                                         │
//! │  inventory-db errors (separate crate)                                  │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  inventory-api errors                                                  │
//! │  └── ApiError         - What HTTP clients see (status + JSON body)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised after a payload decoded successfully but before it reaches storage.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Field value is longer than the column allows.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

// =============================================================================
// Export Error
// =============================================================================

/// CSV export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The CSV writer rejected a record (e.g. a row with the wrong width).
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the writer into its buffer failed.
    #[error("CSV flush failed: {0}")]
    Io(#[from] std::io::Error),

    /// The buffer could not be recovered from the writer.
    #[error("CSV buffer unavailable: {0}")]
    Buffer(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 255,
        };
        assert_eq!(err.to_string(), "name must be at most 255 characters");
    }

    #[test]
    fn test_io_converts_to_export_error() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err: ExportError = io.into();
        assert!(matches!(err, ExportError::Io(_)));
        assert!(err.to_string().contains("disk gone"));
    }
}
