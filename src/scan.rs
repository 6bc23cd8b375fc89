//! Quote-aware grid tokenization.
//!
//! The scanner is a two-state finite-state machine over raw bytes. The quote
//! state toggles on *every* quote byte, regardless of context: a doubled quote
//! inside a quoted field toggles twice and nets to no change, which is exactly
//! what keeps the scan correct past an escaped quote without a separate
//! escape-detection branch.
//!
//! Tokenization runs in three linear passes over the body text:
//!
//! 1. [`GridTokenizer::count_columns`] fixes the column count from the first
//!    record.
//! 2. [`GridTokenizer::count_rows`] derives the row count from boundary
//!    crossings across the whole text.
//! 3. [`GridTokenizer::build`] produces a flat arena of exactly
//!    `rows * columns` field spans, addressed as `row * columns + column`.
//!
//! Delimiter, quote and newline bytes are all ASCII, so byte positions are
//! always UTF-8 character boundaries and the resulting spans slice safely.

use crate::error::{Error, Result};

/// Two-state scanner position: inside or outside a quoted region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum QuoteState {
    Outside,
    Inside,
}

impl QuoteState {
    /// Flips the state. Called on every quote byte, unconditionally.
    fn toggle(&mut self) {
        *self = match self {
            QuoteState::Outside => QuoteState::Inside,
            QuoteState::Inside => QuoteState::Outside,
        };
    }

    fn is_outside(self) -> bool {
        self == QuoteState::Outside
    }
}

/// A half-open byte range into the backing buffer, denoting one normalized
/// field. The default span is the empty field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct FieldSpan {
    pub start: usize,
    pub end: usize,
}

/// Scanner over one grid body. Holds the body text and the active delimiter.
pub(crate) struct GridTokenizer<'a> {
    text: &'a str,
    delimiter: u8,
}

impl<'a> GridTokenizer<'a> {
    pub fn new(text: &'a str, delimiter: u8) -> Self {
        GridTokenizer { text, delimiter }
    }

    /// Column count, fixed by the first record: outside-quotes delimiters
    /// before the first outside-quotes newline, plus one. Minimum 1.
    pub fn count_columns(&self) -> usize {
        let mut columns = 1;
        let mut state = QuoteState::Outside;
        for &byte in self.text.as_bytes() {
            if byte == b'"' {
                state.toggle();
            }
            if state.is_outside() {
                if byte == self.delimiter {
                    columns += 1;
                }
                if byte == b'\n' {
                    break;
                }
            }
        }
        columns
    }

    /// Row count, derived from boundary crossings over the whole text.
    ///
    /// Each outside-quotes delimiter is a crossing while fewer than `columns`
    /// have been seen in the current record; each outside-quotes newline is a
    /// crossing that also resets the per-record counter. A final record with
    /// no terminating newline contributes its missing crossing at end of
    /// input. The row count is total crossings divided by `columns`; ragged
    /// input silently yields a truncated count rather than an error here
    /// (strict validation happens in [`Self::build`]).
    pub fn count_rows(&self, columns: usize) -> usize {
        let mut crossings = 0;
        let mut boundary = 0;
        let mut state = QuoteState::Outside;
        let mut ends_with_newline = false;
        for &byte in self.text.as_bytes() {
            if byte == b'"' {
                state.toggle();
            }
            ends_with_newline = false;
            if state.is_outside() {
                if byte == self.delimiter && boundary < columns {
                    crossings += 1;
                    boundary += 1;
                }
                if byte == b'\n' {
                    crossings += 1;
                    boundary = 0;
                    ends_with_newline = true;
                }
            }
        }
        if !self.text.is_empty() && !ends_with_newline {
            crossings += 1;
        }
        crossings / columns
    }

    /// Builds the flat span arena: a single linear pass with the same quote
    /// FSM, closing a field on every outside-quotes delimiter or newline while
    /// the record's field index is below `columns`.
    ///
    /// With `strict` set, any record whose field count differs from `columns`
    /// fails with [`Error::Ragged`]. Without it, extra fields are scanned past
    /// but dropped and short records leave empty spans, matching the legacy
    /// engine's silent behavior.
    pub fn build(&self, columns: usize, rows: usize, strict: bool) -> Result<Vec<FieldSpan>> {
        let bytes = self.text.as_bytes();
        let mut spans = vec![FieldSpan::default(); rows * columns];
        let mut state = QuoteState::Outside;
        let mut field_start = 0;
        let mut row = 0;
        let mut field = 0;
        // Actual fields closed in the current record, including dropped ones.
        let mut record_fields = 0;

        for (position, &byte) in bytes.iter().enumerate() {
            if byte == b'"' {
                state.toggle();
            }
            if state.is_outside() {
                if byte == self.delimiter || byte == b'\n' {
                    if field < columns && row < rows {
                        spans[row * columns + field] = self.normalize(field_start, position);
                        field += 1;
                    }
                    field_start = position + 1;
                    record_fields += 1;
                }
                if byte == b'\n' {
                    if strict && record_fields != columns {
                        return Err(Error::ragged(row, columns, record_fields));
                    }
                    field = 0;
                    row += 1;
                    record_fields = 0;
                }
            }
        }
        // A final record without a terminating newline still closes its last
        // field at end of input.
        if field_start < bytes.len() || field != 0 {
            if field < columns && row < rows {
                spans[row * columns + field] = self.normalize(field_start, bytes.len());
            }
            record_fields += 1;
            if strict && record_fields != columns {
                return Err(Error::ragged(row, columns, record_fields));
            }
        }
        Ok(spans)
    }

    /// Normalizes a raw slice into a field span: drop one leading delimiter
    /// byte left over from slicing, then drop wrapping quotes when the span is
    /// longer than one byte and both ends are quotes. Inner doubled-quote
    /// escapes are kept verbatim.
    fn normalize(&self, mut start: usize, mut end: usize) -> FieldSpan {
        let bytes = self.text.as_bytes();
        if start < end && bytes[start] == self.delimiter {
            start += 1;
        }
        if end - start > 1 && bytes[start] == b'"' && bytes[end - 1] == b'"' {
            start += 1;
            end -= 1;
        }
        FieldSpan { start, end }
    }
}
