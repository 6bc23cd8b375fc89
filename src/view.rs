//! The grid view: an immutable, zero-copy window over tabular text.
//!
//! A [`View`] owns its backing buffer and a flat arena of field spans built
//! once at construction. Every accessor hands out `&str` borrows into the
//! buffer; nothing is ever copied or mutated after construction, so a shared
//! `&View` is safe to read from any number of threads.
//!
//! ## Construction
//!
//! Most users go through [`crate::from_str`] and friends. A magic-header
//! mismatch is not an error: it produces an empty view with zero rows, which
//! callers check via [`View::is_empty`]. Ragged input, by contrast, fails
//! loudly in strict mode (the default).
//!
//! ## Field addressing
//!
//! The grid is rectangular by construction. Fields live in a single flat arena
//! addressed as `row * columns + column`, so bounds checks happen on one
//! linear structure and rows never allocate.
//!
//! ## Examples
//!
//! ```rust
//! use gridsv::from_str;
//!
//! let text = "\"gridsv\"\nName,Age,City\nAlice,30,Paris\nBob,25,Tokyo\n";
//! let view = from_str(text).unwrap();
//!
//! assert_eq!(view.columns(), 3);
//! assert_eq!(view.rows(), 3); // the header record counts as row 0
//! assert_eq!(view.get_named_field(1, "Age").unwrap(), "30");
//! assert_eq!(view.integer_field(2, 1).unwrap(), 25);
//! ```

use std::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::convert;
use crate::error::{Error, Result};
use crate::header;
use crate::options::ViewOptions;
use crate::scan::{FieldSpan, GridTokenizer};

/// An immutable rectangular grid of zero-copy field spans over owned text.
///
/// Created via [`View::new`] / [`View::with_options`] or the crate-level
/// `from_*` functions. See the [module documentation](self) for an overview.
#[derive(Debug)]
pub struct View {
    buffer: String,
    spans: Vec<FieldSpan>,
    columns: usize,
    rows: usize,
}

impl View {
    /// Builds a view over `text` with default options: comma-delimited,
    /// magic header required, strict rectangularity.
    ///
    /// A missing or corrupted magic header yields an empty view, not an
    /// error. Ragged body text yields [`Error::Ragged`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gridsv::View;
    ///
    /// let view = View::new("\"gridsv\"\na,b\n1,2\n").unwrap();
    /// assert_eq!(view.rows(), 2);
    ///
    /// let empty = View::new("no header here").unwrap();
    /// assert!(empty.is_empty());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<View> {
        Self::with_options(text, ViewOptions::default())
    }

    /// Builds a view over `text` with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Ragged`] in strict mode when a record's field count
    /// differs from the column count fixed by the first record.
    pub fn with_options(text: impl Into<String>, options: ViewOptions) -> Result<View> {
        let buffer = text.into();
        let body_start = if options.require_header {
            match header::strip_magic(&buffer) {
                Some(body) => buffer.len() - body.len(),
                None => return Ok(View::empty(buffer)),
            }
        } else {
            0
        };
        if body_start == buffer.len() {
            return Ok(View::empty(buffer));
        }
        let scanner = GridTokenizer::new(&buffer[body_start..], options.delimiter.as_byte());
        let columns = scanner.count_columns();
        let rows = scanner.count_rows(columns);
        let mut spans = scanner.build(columns, rows, options.strict)?;
        // Spans come back relative to the body; rebase onto the full buffer.
        for span in &mut spans {
            span.start += body_start;
            span.end += body_start;
        }
        Ok(View {
            buffer,
            spans,
            columns,
            rows,
        })
    }

    fn empty(buffer: String) -> View {
        View {
            buffer,
            spans: Vec::new(),
            columns: 0,
            rows: 0,
        }
    }

    fn span_text(&self, index: usize) -> &str {
        let span = self.spans[index];
        &self.buffer[span.start..span.end]
    }

    /// Column count, fixed by the first record. Zero only for an empty view.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Row count. The header record, when present, counts as row 0.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Whether this view holds no rows (header mismatch or empty body).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// The full backing text, including any magic prefix.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.buffer
    }

    /// Returns the row at `row`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowOutOfRange`] when `row >= rows()`.
    pub fn get_row(&self, row: usize) -> Result<Row<'_>> {
        if row >= self.rows {
            return Err(Error::row_out_of_range(row, self.rows));
        }
        Ok(Row { view: self, row })
    }

    /// Returns the field at `(row, column)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldOutOfRange`] when either index is out of bounds.
    pub fn get_field(&self, row: usize, column: usize) -> Result<&str> {
        if row >= self.rows || column >= self.columns {
            return Err(Error::field_out_of_range(
                row,
                column,
                self.rows,
                self.columns,
            ));
        }
        Ok(self.span_text(row * self.columns + column))
    }

    /// Returns the field at `row` in the column whose header-record text
    /// equals `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowOutOfRange`] for a bad row index and
    /// [`Error::ColumnNotFound`] when no header field matches `name`.
    pub fn get_named_field(&self, row: usize, name: &str) -> Result<&str> {
        if row >= self.rows {
            return Err(Error::row_out_of_range(row, self.rows));
        }
        let column = self.column_index(name)?;
        self.get_field(row, column)
    }

    /// Resolves a column name against the header record (row 0) by linear
    /// scan.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnNotFound`] when no header field matches.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        // A non-empty view always has at least one row, so the first
        // `columns` spans are the header record.
        for column in 0..self.columns {
            if self.span_text(column) == name {
                return Ok(column);
            }
        }
        Err(Error::column_not_found(name))
    }

    /// Interprets the field at `(row, column)` as a base-10 integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldOutOfRange`] for bad coordinates and
    /// [`Error::IntegerParse`] when the text is not a valid integer literal.
    pub fn integer_field(&self, row: usize, column: usize) -> Result<i64> {
        self.integer_field_radix(row, column, 10)
    }

    /// Interprets the field at `(row, column)` as an integer in `radix`
    /// (2-36). The `0x`/`0o`/`0b` prefixes still override the radix.
    pub fn integer_field_radix(&self, row: usize, column: usize, radix: u32) -> Result<i64> {
        let text = self.get_field(row, column)?;
        convert::parse_integer(text, radix).ok_or_else(|| Error::integer_parse(text))
    }

    /// Interprets the field at `(row, column)` as a floating-point number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldOutOfRange`] for bad coordinates and
    /// [`Error::FloatParse`] when the text is not a valid float literal.
    pub fn float_field(&self, row: usize, column: usize) -> Result<f64> {
        let text = self.get_field(row, column)?;
        convert::parse_float(text).ok_or_else(|| Error::float_parse(text))
    }

    /// Iterates over every field in row-major order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gridsv::from_str;
    ///
    /// let view = from_str("\"gridsv\"\na,b\nc,d\n").unwrap();
    /// let fields: Vec<&str> = view.fields().collect();
    /// assert_eq!(fields, ["a", "b", "c", "d"]);
    /// ```
    #[must_use]
    pub fn fields(&self) -> Fields<'_> {
        Fields {
            view: self,
            index: 0,
        }
    }

    /// Iterates over rows in order.
    #[must_use]
    pub fn iter(&self) -> Rows<'_> {
        Rows { view: self, row: 0 }
    }

    /// Returns the first field matching `predicate`, scanning row-major, or
    /// `None` when nothing matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gridsv::from_str;
    ///
    /// let view = from_str("\"gridsv\"\na,b\nc,d\n").unwrap();
    /// assert_eq!(view.find_field(|f| f == "c"), Some("c"));
    /// assert_eq!(view.find_field(|f| f == "zzz"), None);
    /// ```
    pub fn find_field(&self, mut predicate: impl FnMut(&str) -> bool) -> Option<&str> {
        self.fields().find(|field| predicate(field))
    }

    /// Returns the first row matching `predicate`, or `None` when nothing
    /// matches.
    pub fn find_row(&self, mut predicate: impl FnMut(Row<'_>) -> bool) -> Option<Row<'_>> {
        self.iter().find(|row| predicate(*row))
    }
}

impl<'a> IntoIterator for &'a View {
    type Item = Row<'a>;
    type IntoIter = Rows<'a>;

    fn into_iter(self) -> Rows<'a> {
        self.iter()
    }
}

impl Serialize for View {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.rows))?;
        for row in self {
            seq.serialize_element(&row)?;
        }
        seq.end()
    }
}

/// One row of a [`View`]: a borrowed, fixed-length cursor over a stripe of the
/// field arena. Always exactly `columns()` fields long.
#[derive(Clone, Copy)]
pub struct Row<'a> {
    view: &'a View,
    row: usize,
}

impl<'a> Row<'a> {
    /// The row's index within the grid.
    #[must_use]
    pub fn index(&self) -> usize {
        self.row
    }

    /// Field count; always equals the view's column count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.view.columns
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.view.columns == 0
    }

    /// Returns the field at `column`, or `None` out of bounds.
    #[must_use]
    pub fn get(&self, column: usize) -> Option<&'a str> {
        if column < self.view.columns {
            Some(self.view.span_text(self.row * self.view.columns + column))
        } else {
            None
        }
    }

    /// Returns the field at `column`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldOutOfRange`] when `column >= len()`.
    pub fn field(&self, column: usize) -> Result<&'a str> {
        self.view.get_field(self.row, column)
    }

    /// Returns this row's field in the column named `name` in the header
    /// record.
    pub fn named(&self, name: &str) -> Result<&'a str> {
        let column = self.view.column_index(name)?;
        self.field(column)
    }

    /// Interprets the field at `column` as a base-10 integer.
    pub fn integer(&self, column: usize) -> Result<i64> {
        self.view.integer_field(self.row, column)
    }

    /// Interprets the field at `column` as an integer in `radix` (2-36).
    pub fn integer_radix(&self, column: usize, radix: u32) -> Result<i64> {
        self.view.integer_field_radix(self.row, column, radix)
    }

    /// Interprets the field at `column` as a floating-point number.
    pub fn float(&self, column: usize) -> Result<f64> {
        self.view.float_field(self.row, column)
    }

    /// Iterates over this row's fields in column order.
    #[must_use]
    pub fn iter(&self) -> RowFields<'a> {
        RowFields {
            view: self.view,
            row: self.row,
            column: 0,
        }
    }
}

impl fmt::Debug for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for Row<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<'a> IntoIterator for Row<'a> {
    type Item = &'a str;
    type IntoIter = RowFields<'a>;

    fn into_iter(self) -> RowFields<'a> {
        self.iter()
    }
}

impl Serialize for Row<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for field in self.iter() {
            seq.serialize_element(field)?;
        }
        seq.end()
    }
}

/// Row-major iterator over every field of a [`View`].
pub struct Fields<'a> {
    view: &'a View,
    index: usize,
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.index < self.view.spans.len() {
            let field = self.view.span_text(self.index);
            self.index += 1;
            Some(field)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.view.spans.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Fields<'_> {}

/// Iterator over the rows of a [`View`].
pub struct Rows<'a> {
    view: &'a View,
    row: usize,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Row<'a>> {
        if self.row < self.view.rows {
            let row = Row {
                view: self.view,
                row: self.row,
            };
            self.row += 1;
            Some(row)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.view.rows - self.row;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}

/// Iterator over the fields of a single [`Row`].
pub struct RowFields<'a> {
    view: &'a View,
    row: usize,
    column: usize,
}

impl<'a> Iterator for RowFields<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.column < self.view.columns {
            let field = self.view.span_text(self.row * self.view.columns + self.column);
            self.column += 1;
            Some(field)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.view.columns - self.column;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RowFields<'_> {}
