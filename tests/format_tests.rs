//! Format-conformance tests: framing, delimiters, rectangularity modes and
//! the serde view of a grid.

use gridsv::{from_str, from_str_with_options, Delimiter, Error, ViewOptions, MAGIC};
use serde_json::json;

#[test]
fn test_magic_constant() {
    assert_eq!(MAGIC, "\"gridsv\"\n");
}

#[test]
fn test_header_mismatch_yields_empty_view() {
    for input in ["", "a,b\n1,2\n", "\"grid", "\"GRIDSV\"\na\n"] {
        let view = from_str(input).unwrap();
        assert!(view.is_empty(), "expected empty view for {:?}", input);
        assert_eq!(view.rows(), 0);
    }
}

#[test]
fn test_header_with_empty_body_is_empty() {
    let view = from_str(MAGIC).unwrap();
    assert!(view.is_empty());
}

#[test]
fn test_headerless_mode() {
    let view = from_str_with_options("a,b\n1,2\n", ViewOptions::new().headerless()).unwrap();
    assert_eq!(view.columns(), 2);
    assert_eq!(view.rows(), 2);
    assert_eq!(view.get_field(1, 1).unwrap(), "2");
}

#[test]
fn test_missing_trailing_newline() {
    let blob = format!("{}a,b\n1,2", MAGIC);
    let view = from_str(&blob).unwrap();
    assert_eq!(view.rows(), 2);
    assert_eq!(view.get_field(1, 1).unwrap(), "2");
}

#[test]
fn test_single_column_grid() {
    let blob = format!("{}name\nAlice\nBob\n", MAGIC);
    let view = from_str(&blob).unwrap();
    assert_eq!(view.columns(), 1);
    assert_eq!(view.rows(), 3);
    assert_eq!(view.get_field(2, 0).unwrap(), "Bob");
}

#[test]
fn test_tab_delimiter() {
    let options = ViewOptions::new().with_delimiter(Delimiter::Tab).headerless();
    let view = from_str_with_options("a\tb\n1\t2\n", options).unwrap();
    assert_eq!(view.columns(), 2);
    assert_eq!(view.get_field(1, 0).unwrap(), "1");
}

#[test]
fn test_pipe_delimiter() {
    let options = ViewOptions::new().with_delimiter(Delimiter::Pipe).headerless();
    let view = from_str_with_options("a|b|c\n1|2|3\n", options).unwrap();
    assert_eq!(view.columns(), 3);
    assert_eq!(view.get_field(1, 2).unwrap(), "3");
}

#[test]
fn test_semicolon_delimiter_with_header() {
    let blob = format!("{}a;b\n1;2\n", MAGIC);
    let options = ViewOptions::new().with_delimiter(Delimiter::Semicolon);
    let view = from_str_with_options(&blob, options).unwrap();
    assert_eq!(view.columns(), 2);
    // Commas are plain field text under another delimiter.
    let blob = format!("{}a,b;c\n", MAGIC);
    let view = from_str_with_options(&blob, ViewOptions::new().with_delimiter(Delimiter::Semicolon))
        .unwrap();
    assert_eq!(view.get_field(0, 0).unwrap(), "a,b");
}

#[test]
fn test_strict_rejects_long_record() {
    let blob = format!("{}a,b\n1,2,3\n", MAGIC);
    assert_eq!(
        from_str(&blob).unwrap_err(),
        Error::Ragged {
            record: 1,
            expected: 2,
            found: 3
        }
    );
}

#[test]
fn test_strict_rejects_short_record() {
    let blob = format!("{}a,b,c\n1,2\n", MAGIC);
    assert_eq!(
        from_str(&blob).unwrap_err(),
        Error::Ragged {
            record: 1,
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn test_strict_rejects_short_final_record() {
    let blob = format!("{}a,b\n1", MAGIC);
    assert!(matches!(
        from_str(&blob).unwrap_err(),
        Error::Ragged { record: 1, .. }
    ));
}

#[test]
fn test_lenient_reproduces_legacy_truncation() {
    // Ragged input in lenient mode: extra fields are dropped, short records
    // leave empty fields, and the row count silently truncates.
    let blob = format!("{}a,b,c\nd,e\nf,g\n", MAGIC);
    let view = from_str_with_options(&blob, ViewOptions::new().lenient()).unwrap();
    assert_eq!(view.columns(), 3);
    assert_eq!(view.rows(), 2); // the "f,g" record is lost entirely
    assert_eq!(view.get_field(1, 0).unwrap(), "d");
    assert_eq!(view.get_field(1, 1).unwrap(), "e");
    assert_eq!(view.get_field(1, 2).unwrap(), "");
}

#[test]
fn test_lenient_drops_extra_fields() {
    let blob = format!("{}a,b\n1,2,dropped\n", MAGIC);
    let view = from_str_with_options(&blob, ViewOptions::new().lenient()).unwrap();
    assert_eq!(view.columns(), 2);
    assert_eq!(view.get_field(1, 0).unwrap(), "1");
    assert_eq!(view.get_field(1, 1).unwrap(), "2");
}

#[test]
fn test_crlf_is_not_normalized() {
    // Records end at '\n' only; a '\r' byte is ordinary field text.
    let blob = format!("{}a,b\r\nc,d\n", MAGIC);
    let view = from_str(&blob).unwrap();
    assert_eq!(view.get_field(0, 1).unwrap(), "b\r");
}

#[test]
fn test_unicode_field_text() {
    let blob = format!("{}city,emoji\nTōkyō,🗼\n", MAGIC);
    let view = from_str(&blob).unwrap();
    assert_eq!(view.get_field(1, 0).unwrap(), "Tōkyō");
    assert_eq!(view.get_field(1, 1).unwrap(), "🗼");
}

#[test]
fn test_serialize_grid_as_json() {
    let blob = format!("{}Name,Age\nAlice,30\n", MAGIC);
    let view = from_str(&blob).unwrap();
    assert_eq!(
        serde_json::to_value(&view).unwrap(),
        json!([["Name", "Age"], ["Alice", "30"]])
    );
}

#[test]
fn test_serialize_single_row() {
    let blob = format!("{}x,y\n1,2\n", MAGIC);
    let view = from_str(&blob).unwrap();
    let row = view.get_row(1).unwrap();
    assert_eq!(serde_json::to_value(row).unwrap(), json!(["1", "2"]));
}

#[test]
fn test_serialize_empty_view() {
    let view = from_str("no header").unwrap();
    assert_eq!(serde_json::to_string(&view).unwrap(), "[]");
}
