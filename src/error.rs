//! Error types for grid construction and field access.
//!
//! Most operations on a [`crate::View`] are infallible by construction: a magic-header
//! mismatch produces an empty view rather than an error, and iteration never fails.
//! The fallible surface is small and local:
//!
//! - **Structural errors**: ragged input rejected during construction (strict mode)
//! - **Lookup errors**: row/column indices or header names that don't resolve
//! - **Conversion errors**: field text that cannot be interpreted as a number
//! - **I/O errors**: reading input from a `Read` source
//!
//! Every failure is synchronous and carries enough context to identify the offending
//! record, index, or text. No operation ever surfaces a partial result.
//!
//! ## Examples
//!
//! ```rust
//! use gridsv::{from_str, Error};
//!
//! let text = "\"gridsv\"\na,b\n1,2\n";
//! let view = from_str(text).unwrap();
//!
//! match view.get_named_field(1, "missing") {
//!     Err(Error::ColumnNotFound { name }) => assert_eq!(name, "missing"),
//!     other => panic!("expected ColumnNotFound, got {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Represents all possible errors produced by this crate.
///
/// Each variant includes the context needed to diagnose the failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error while reading input
    #[error("IO error: {0}")]
    Io(String),

    /// Input bytes were not valid UTF-8
    #[error("input is not valid UTF-8: {0}")]
    Utf8(String),

    /// A record's field count disagrees with the column count fixed by the
    /// first record (strict mode only)
    #[error("record {record} has {found} fields, expected {expected}")]
    Ragged {
        record: usize,
        expected: usize,
        found: usize,
    },

    /// Row index past the end of the grid
    #[error("row {row} out of range: grid has {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },

    /// Field coordinates past the edge of the grid
    #[error("field ({row}, {column}) out of range: grid is {rows} x {columns}")]
    FieldOutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// No field in the header record matches the requested column name
    #[error("no column named {name:?} in the header record")]
    ColumnNotFound { name: String },

    /// Field text that cannot be interpreted as an integer
    #[error("cannot interpret {text:?} as an integer")]
    IntegerParse { text: String },

    /// Field text that cannot be interpreted as a floating-point number
    #[error("cannot interpret {text:?} as a floating-point number")]
    FloatParse { text: String },
}

impl Error {
    /// Creates a structural error for a record whose field count does not match
    /// the grid's column count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gridsv::Error;
    ///
    /// let err = Error::ragged(3, 4, 5);
    /// assert!(err.to_string().contains("record 3"));
    /// ```
    pub fn ragged(record: usize, expected: usize, found: usize) -> Self {
        Error::Ragged {
            record,
            expected,
            found,
        }
    }

    /// Creates an out-of-range error for a row lookup.
    pub fn row_out_of_range(row: usize, rows: usize) -> Self {
        Error::RowOutOfRange { row, rows }
    }

    /// Creates an out-of-range error for a field lookup.
    pub fn field_out_of_range(row: usize, column: usize, rows: usize, columns: usize) -> Self {
        Error::FieldOutOfRange {
            row,
            column,
            rows,
            columns,
        }
    }

    /// Creates a lookup error for a column name absent from the header record.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gridsv::Error;
    ///
    /// let err = Error::column_not_found("Age");
    /// assert!(err.to_string().contains("\"Age\""));
    /// ```
    pub fn column_not_found(name: &str) -> Self {
        Error::ColumnNotFound {
            name: name.to_string(),
        }
    }

    /// Creates a conversion error for text that is not a valid integer literal.
    pub fn integer_parse(text: &str) -> Self {
        Error::IntegerParse {
            text: text.to_string(),
        }
    }

    /// Creates a conversion error for text that is not a valid float literal.
    pub fn float_parse(text: &str) -> Self {
        Error::FloatParse {
            text: text.to_string(),
        }
    }

    /// Creates an I/O error for input reading failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
