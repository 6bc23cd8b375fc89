//! # gridsv
//!
//! Zero-copy, quote-aware grid views over embedded CSV with dependency-free
//! numeric field conversion.
//!
//! ## What is gridsv?
//!
//! gridsv frames delimiter-separated tabular text with a short magic prefix
//! (`"gridsv"` plus a newline) and builds an immutable, rectangular view over
//! it. Fields are spans into the original buffer — nothing is copied or
//! unescaped — and field text is interpreted as a number only when a caller
//! asks for it, via the crate's own integer/float literal parser.
//!
//! ## Key properties
//!
//! - **Zero-copy**: every accessor returns `&str` slices of the one backing
//!   buffer; construction allocates only the flat span arena
//! - **Rectangular by construction**: the column count is fixed by the first
//!   record and ragged input fails loudly (strict mode, the default)
//! - **Quote-aware**: delimiters and newlines inside quoted fields are text,
//!   not structure; doubled-quote escapes scan correctly and are returned
//!   verbatim
//! - **Self-contained numerics**: integers in any radix 2-36 with
//!   `0x`/`0o`/`0b` prefixes, and floats with fraction/exponent/`inf`/`nan`,
//!   parsed without `str::parse` or any other general-purpose facility
//! - **Immutable and shareable**: once built, a view never changes;
//!   unsynchronized concurrent reads are safe
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gridsv = "0.1"
//! ```
//!
//! ### Viewing a table
//!
//! ```rust
//! use gridsv::from_str;
//!
//! let blob = "\"gridsv\"\nName,Age,City\nAlice,30,Paris\nBob,25,Tokyo\n";
//! let view = from_str(blob).unwrap();
//!
//! assert_eq!(view.columns(), 3);
//! assert_eq!(view.rows(), 3); // the header record counts as row 0
//!
//! // Lookup by index or by header name
//! assert_eq!(view.get_field(2, 0).unwrap(), "Bob");
//! assert_eq!(view.get_named_field(1, "City").unwrap(), "Paris");
//!
//! // Numeric interpretation on demand
//! assert_eq!(view.integer_field(1, 1).unwrap(), 30);
//! ```
//!
//! ### Searching
//!
//! ```rust
//! use gridsv::from_str;
//!
//! let blob = "\"gridsv\"\nName,Age\nAlice,30\nBob,25\n";
//! let view = from_str(blob).unwrap();
//!
//! let bob = view.find_row(|row| row.get(0) == Some("Bob")).unwrap();
//! assert_eq!(bob.integer(1).unwrap(), 25);
//!
//! // Absence is explicit, never a sentinel value
//! assert!(view.find_row(|row| row.get(0) == Some("Carol")).is_none());
//! ```
//!
//! ### Plain CSV without the magic prefix
//!
//! ```rust
//! use gridsv::{from_str_with_options, ViewOptions};
//!
//! let view = from_str_with_options("a,b\n1,2\n", ViewOptions::new().headerless()).unwrap();
//! assert_eq!(view.rows(), 2);
//! ```
//!
//! ## Header mismatch is not an error
//!
//! When the magic prefix is missing the result is an *empty view* (zero
//! rows), which the caller checks with [`View::is_empty`]. Only structural
//! problems in the body — a ragged record in strict mode, unreadable input —
//! produce an [`Error`].
//!
//! ## Performance characteristics
//!
//! - **Construction**: 2-3 linear passes over the input, O(n) total
//! - **Lookup**: O(1) by indices on the flat arena; O(columns) by header name
//! - **Numeric conversion**: O(field length), plus O(|exponent|) for floats
//!   in E notation
//!
//! ## Format
//!
//! The full input format, quoting rules and numeric literal grammar are
//! documented in the [`spec`] module.

pub mod convert;
pub mod error;
pub mod header;
pub mod options;
mod scan;
pub mod spec;
pub mod view;

pub use convert::{parse_float, parse_integer};
pub use error::{Error, Result};
pub use header::MAGIC;
pub use options::{Delimiter, ViewOptions};
pub use view::{Fields, Row, RowFields, Rows, View};

use std::io;

/// Builds a [`View`] over a string of gridsv text.
///
/// A missing or corrupted magic prefix yields an empty view, not an error.
///
/// # Examples
///
/// ```rust
/// use gridsv::from_str;
///
/// let view = from_str("\"gridsv\"\na,b\n1,2\n").unwrap();
/// assert_eq!(view.columns(), 2);
///
/// let empty = from_str("not a gridsv blob").unwrap();
/// assert!(empty.is_empty());
/// ```
///
/// # Errors
///
/// Returns [`Error::Ragged`] when a record's field count differs from the
/// column count fixed by the first record.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(text: &str) -> Result<View> {
    View::new(text)
}

/// Builds a [`View`] with custom options (delimiter, headerless input,
/// lenient rectangularity).
///
/// # Examples
///
/// ```rust
/// use gridsv::{from_str_with_options, Delimiter, ViewOptions};
///
/// let options = ViewOptions::new()
///     .with_delimiter(Delimiter::Pipe)
///     .headerless();
/// let view = from_str_with_options("a|b\n1|2\n", options).unwrap();
/// assert_eq!(view.get_field(1, 1).unwrap(), "2");
/// ```
///
/// # Errors
///
/// Returns [`Error::Ragged`] for ragged input in strict mode.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(text: &str, options: ViewOptions) -> Result<View> {
    View::with_options(text, options)
}

/// Builds a [`View`] from bytes of gridsv text.
///
/// # Examples
///
/// ```rust
/// use gridsv::from_slice;
///
/// let view = from_slice(b"\"gridsv\"\na,b\n1,2\n").unwrap();
/// assert_eq!(view.rows(), 2);
/// ```
///
/// # Errors
///
/// Returns [`Error::Utf8`] when the bytes are not valid UTF-8, and
/// [`Error::Ragged`] for ragged input in strict mode.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(bytes: &[u8]) -> Result<View> {
    let text = std::str::from_utf8(bytes).map_err(|e| Error::Utf8(e.to_string()))?;
    from_str(text)
}

/// Builds a [`View`] by reading all input from `reader` first.
///
/// The read is the only I/O this crate performs; tokenization itself never
/// blocks or suspends.
///
/// # Examples
///
/// ```rust
/// use gridsv::from_reader;
/// use std::io::Cursor;
///
/// let cursor = Cursor::new(b"\"gridsv\"\na,b\n1,2\n");
/// let view = from_reader(cursor).unwrap();
/// assert_eq!(view.columns(), 2);
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] when reading fails, and the usual construction
/// errors afterwards.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<View>
where
    R: io::Read,
{
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(&e.to_string()))?;
    View::new(text)
}
