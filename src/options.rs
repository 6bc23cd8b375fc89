//! Configuration options for grid construction.
//!
//! This module provides types to customize how input text is tokenized:
//!
//! - [`ViewOptions`]: Main configuration struct
//! - [`Delimiter`]: Choice of field delimiter (comma, tab, pipe, or semicolon)
//!
//! ## Examples
//!
//! ```rust
//! use gridsv::{from_str_with_options, Delimiter, ViewOptions};
//!
//! // Tab-delimited body with no magic header
//! let options = ViewOptions::new()
//!     .with_delimiter(Delimiter::Tab)
//!     .headerless();
//! let view = from_str_with_options("a\tb\n1\t2\n", options).unwrap();
//! assert_eq!(view.columns(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Field delimiter used when tokenizing records.
///
/// The delimiter must be a single ASCII byte so the scanner can operate on byte
/// positions without caring about UTF-8 encoding. Multi-byte or non-ASCII
/// delimiters are not supported.
///
/// # Examples
///
/// ```rust
/// use gridsv::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_char(), ',');
/// assert_eq!(Delimiter::Tab.as_char(), '\t');
/// assert_eq!(Delimiter::Pipe.as_char(), '|');
/// assert_eq!(Delimiter::Semicolon.as_char(), ';');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl Delimiter {
    /// Returns the delimiter character.
    #[must_use]
    pub const fn as_char(&self) -> char {
        self.as_byte() as char
    }

    /// Returns the delimiter as a raw byte, as used by the scanner.
    #[must_use]
    pub(crate) const fn as_byte(&self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
            Delimiter::Pipe => b'|',
            Delimiter::Semicolon => b';',
        }
    }
}

/// Configuration options for constructing a [`crate::View`].
///
/// Controls the field delimiter, whether the magic header is required, and
/// whether ragged input is rejected.
///
/// # Examples
///
/// ```rust
/// use gridsv::{Delimiter, ViewOptions};
///
/// // Defaults: comma-delimited, magic header required, strict rectangularity
/// let options = ViewOptions::new();
///
/// // Plain CSV body, tolerate ragged records like the legacy engine did
/// let options = ViewOptions::new().headerless().lenient();
///
/// // Pipe-delimited
/// let options = ViewOptions::new().with_delimiter(Delimiter::Pipe);
/// ```
#[derive(Clone, Debug)]
pub struct ViewOptions {
    pub delimiter: Delimiter,
    pub require_header: bool,
    pub strict: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        ViewOptions {
            delimiter: Delimiter::default(),
            require_header: true,
            strict: true,
        }
    }
}

impl ViewOptions {
    /// Creates default options (comma delimiter, magic header required, strict).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gridsv::ViewOptions;
    ///
    /// let options = ViewOptions::new();
    /// assert!(options.require_header);
    /// assert!(options.strict);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field delimiter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gridsv::{Delimiter, ViewOptions};
    ///
    /// let options = ViewOptions::new().with_delimiter(Delimiter::Semicolon);
    /// assert_eq!(options.delimiter, Delimiter::Semicolon);
    /// ```
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Skips the magic-header check, treating the whole input as grid body.
    ///
    /// Useful for viewing plain CSV text that was never wrapped in the gridsv
    /// framing convention.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gridsv::ViewOptions;
    ///
    /// let options = ViewOptions::new().headerless();
    /// assert!(!options.require_header);
    /// ```
    #[must_use]
    pub fn headerless(mut self) -> Self {
        self.require_header = false;
        self
    }

    /// Disables eager rectangularity validation.
    ///
    /// In lenient mode a ragged record is not an error: extra fields are
    /// scanned past but dropped, and the row count silently truncates, matching
    /// the legacy engine. Strict mode (the default) fails construction with
    /// [`crate::Error::Ragged`] instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gridsv::ViewOptions;
    ///
    /// let options = ViewOptions::new().lenient();
    /// assert!(!options.strict);
    /// ```
    #[must_use]
    pub fn lenient(mut self) -> Self {
        self.strict = false;
        self
    }
}
