//! Magic-header validation.
//!
//! A gridsv blob starts with the fixed prefix [`MAGIC`] (`"gridsv"` in quotes,
//! terminated by a newline) before the first record. The check is an exact byte
//! comparison and nothing more: a missing or corrupted prefix is a normal
//! outcome the caller handles by producing an empty view, not an error.

/// The magic prefix expected at the start of a gridsv blob.
///
/// # Examples
///
/// ```rust
/// use gridsv::MAGIC;
///
/// let blob = format!("{}a,b\n1,2\n", MAGIC);
/// let view = gridsv::from_str(&blob).unwrap();
/// assert_eq!(view.rows(), 2);
/// ```
pub const MAGIC: &str = "\"gridsv\"\n";

/// Strips the magic prefix from `input`.
///
/// Returns the remaining body on an exact match, `None` on any mismatch,
/// including input shorter than the prefix.
pub(crate) fn strip_magic(input: &str) -> Option<&str> {
    input.strip_prefix(MAGIC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_exact_prefix() {
        assert_eq!(strip_magic("\"gridsv\"\na,b\n"), Some("a,b\n"));
    }

    #[test]
    fn strips_prefix_from_empty_body() {
        assert_eq!(strip_magic("\"gridsv\"\n"), Some(""));
    }

    #[test]
    fn rejects_missing_prefix() {
        assert_eq!(strip_magic("a,b\n1,2\n"), None);
    }

    #[test]
    fn rejects_short_input() {
        assert_eq!(strip_magic("\"grid"), None);
        assert_eq!(strip_magic(""), None);
    }

    #[test]
    fn rejects_case_variation() {
        assert_eq!(strip_magic("\"GRIDSV\"\na\n"), None);
    }

    #[test]
    fn rejects_missing_terminating_newline() {
        assert_eq!(strip_magic("\"gridsv\"a,b\n"), None);
    }
}
