//! # CSV Export
//!
//! Turns a slice of records into a complete CSV document held in memory.
//!
//! ## How A Row Is Built
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Item { id: 2, name: "B", quantity: 2, unit_price: 2.0 }               │
//! │       │                                                                 │
//! │       ▼  CsvRecord::fields()                                           │
//! │  [Int(2), Text("B"), Int(2), Float(2.0)]                               │
//! │       │                                                                 │
//! │       ▼  CsvField::render()                                            │
//! │  ["2", "B", "2", "2.000000"]                                           │
//! │       │                                                                 │
//! │       ▼  csv::Writer (quoting per RFC 4180), flush                     │
//! │  2,B,2,2.000000\n                                                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The encoder never looks at concrete field names. A record type only lists
//! its header and hands back its fields in the same order; conversion is
//! decided by the field's type family.

use csv::Writer;

use crate::error::{ExportError, ExportResult};

// =============================================================================
// Field Conversion
// =============================================================================

/// A single CSV cell, tagged by the type family it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CsvField<'a> {
    /// Any integer type; rendered in decimal.
    Int(i128),
    /// Any floating-point type; rendered in fixed notation, six decimals.
    Float(f64),
    /// Text; rendered verbatim.
    Text(&'a str),
}

impl CsvField<'_> {
    /// Renders the cell as it appears in the CSV output (before quoting).
    pub fn render(&self) -> String {
        match self {
            CsvField::Int(value) => value.to_string(),
            CsvField::Float(value) => format!("{value:.6}"),
            CsvField::Text(value) => (*value).to_string(),
        }
    }
}

macro_rules! int_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for CsvField<'_> {
                fn from(value: $ty) -> Self {
                    CsvField::Int(i128::from(value))
                }
            }
        )*
    };
}

int_fields!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<f32> for CsvField<'_> {
    fn from(value: f32) -> Self {
        CsvField::Float(f64::from(value))
    }
}

impl From<f64> for CsvField<'_> {
    fn from(value: f64) -> Self {
        CsvField::Float(value)
    }
}

impl<'a> From<&'a str> for CsvField<'a> {
    fn from(value: &'a str) -> Self {
        CsvField::Text(value)
    }
}

impl<'a> From<&'a String> for CsvField<'a> {
    fn from(value: &'a String) -> Self {
        CsvField::Text(value.as_str())
    }
}

// =============================================================================
// Record Contract
// =============================================================================

/// A fixed-shape record that can be written as one CSV row.
///
/// `fields()` must return exactly `HEADERS.len()` cells, in header order.
/// The writer rejects rows of a different width.
pub trait CsvRecord {
    /// Column names, written once at the top of an export.
    const HEADERS: &'static [&'static str];

    /// The record's cells in column order.
    fn fields(&self) -> Vec<CsvField<'_>>;
}

// =============================================================================
// Encoder
// =============================================================================

/// Encodes `records` as CSV: one header row, then one row per record.
///
/// The writer is flushed after every row. Output uses `\n` line endings.
///
/// ## Example
/// ```rust
/// use inventory_core::{export, Item};
///
/// let items = vec![
///     Item { id: 1, name: "A".into(), quantity: 1, unit_price: 1.0 },
///     Item { id: 2, name: "B".into(), quantity: 2, unit_price: 2.0 },
/// ];
///
/// let bytes = export::encode(&items).unwrap();
/// assert_eq!(
///     String::from_utf8(bytes).unwrap(),
///     "Id,Name,Quantity,UnitPrice\n1,A,1,1.000000\n2,B,2,2.000000\n"
/// );
/// ```
pub fn encode<R: CsvRecord>(records: &[R]) -> ExportResult<Vec<u8>> {
    let mut writer = Writer::from_writer(Vec::new());

    writer.write_record(R::HEADERS)?;
    writer.flush()?;

    for record in records {
        writer.write_record(record.fields().iter().map(CsvField::render))?;
        writer.flush()?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))
}

// =============================================================================
// Unit Tests
// =============================================================================
