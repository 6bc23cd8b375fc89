//! gridsv Text Format
//!
//! This module documents the gridsv input format as implemented by this
//! library.
//!
//! # Overview
//!
//! A gridsv blob is a fixed magic prefix followed by delimiter-separated
//! records. The engine builds a rectangular, zero-copy view over the blob: no
//! field text is ever copied, unescaped or re-encoded; accessors hand out
//! slices of the original buffer.
//!
//! # Framing
//!
//! The blob starts with the magic prefix:
//!
//! ```text
//! "gridsv"
//! ```
//!
//! that is, the seven bytes `"gridsv"` (quotes included) terminated by a
//! newline — [`crate::MAGIC`]. The comparison is exact; any mismatch,
//! including input shorter than the prefix, produces an *empty view* rather
//! than an error. Callers that want to view plain delimiter-separated text
//! with no framing use [`crate::ViewOptions::headerless`].
//!
//! # Records and fields
//!
//! ```text
//! Name,Age,City
//! Alice,30,Paris
//! Bob,25,Tokyo
//! ```
//!
//! - Records are terminated by `\n`. A final record without a terminating
//!   newline is still closed at end of input.
//! - The **column count** is fixed by the first record: its outside-quotes
//!   delimiter count plus one. Minimum 1.
//! - The first record doubles as the **header record** for lookups by column
//!   name; it is an ordinary row (row 0) in every other respect.
//! - Every record must have exactly the column count's worth of fields. In
//!   strict mode (the default) a ragged record fails construction; in lenient
//!   mode extra fields are dropped and the row count silently truncates, which
//!   matches the legacy engine this format comes from.
//!
//! # Quoting
//!
//! A field wrapped in quote characters has the quotes stripped, provided the
//! span is longer than one byte and both ends are quotes:
//!
//! ```text
//! "hello, world",plain
//! ```
//!
//! yields the fields `hello, world` and `plain`. Delimiters and newlines
//! inside a quoted region are field text, not structure.
//!
//! The scanner's quote state toggles on *every* quote byte. A doubled quote
//! inside a quoted field therefore toggles twice and nets to no change, which
//! is what carries the scan past an escaped quote:
//!
//! ```text
//! "say ""hi""",x
//! ```
//!
//! is two fields. The first comes back as `say ""hi""` — the doubled quotes
//! are **not** collapsed. Unescaping is the caller's business; the engine
//! returns the inner text verbatim to stay zero-copy.
//!
//! Quote parity must return to "outside" at every unescaped record boundary.
//! Input that violates this is malformed; the scan does not attempt recovery.
//!
//! # Delimiters
//!
//! The delimiter is a single ASCII byte, comma by default. Tab, pipe and
//! semicolon are available through [`crate::Delimiter`]. The delimiter choice
//! is out-of-band: nothing in the blob itself declares it.
//!
//! # Numeric field interpretation
//!
//! Fields are text until a caller asks for a number. Conversion is performed
//! by this crate's own literal parser ([`crate::parse_integer`],
//! [`crate::parse_float`]) rather than the standard library's:
//!
//! ## Integers
//!
//! ```text
//! 42      -17      0x2A      0o17      0b101      zz (radix 36)
//! ```
//!
//! - Optional `-` sign; no `+`.
//! - Case-insensitive `0x`/`0o`/`0b` prefixes override the requested radix
//!   with 16/8/2. A prefix with no digits after it is zero.
//! - Digits extend through ASCII letters up to base 36.
//! - Any invalid digit fails the whole conversion; no partial value is ever
//!   produced.
//!
//! ## Floats
//!
//! ```text
//! 3.14      -1.5e2      .5      25e-2      inf      infinity      nan
//! ```
//!
//! - Optional `-` sign, decimal point, E notation with a signed integer
//!   exponent. No `+` in the exponent, no hexadecimal float notation.
//! - The special literals are matched case-insensitively and must cover the
//!   whole field; `info` is not `inf` plus garbage, it is a failed parse.
//! - The exponent is applied by repeated multiplication or division with no
//!   overflow guard; extreme exponents saturate the way repeated `f64`
//!   arithmetic does.
//!
//! Both parsers trim a run of leading spaces and a run of trailing spaces or
//! NUL bytes, nothing else.
//!
//! # Limitations
//!
//! - **Line endings**: records are terminated by `\n` only. A `\r` byte is
//!   field text; CRLF input is not normalized.
//! - **Encoding**: input must be UTF-8. All structural bytes are ASCII, so
//!   multi-byte characters pass through untouched.
//! - **No streaming**: the whole blob is held in memory and scanned in 2-3
//!   linear passes at construction.
//! - **No mutation**: a view is immutable once built; new text means a new
//!   view.

// This module contains only documentation; no implementation code
