use gridsv::{from_reader, from_str, parse_float, parse_integer, Error, MAGIC};

fn people() -> gridsv::View {
    let blob = format!("{}Name,Age,City\nAlice,30,Paris\nBob,25,Tokyo\n", MAGIC);
    from_str(&blob).unwrap()
}

#[test]
fn test_table_shape() {
    let view = people();
    assert_eq!(view.columns(), 3);
    assert_eq!(view.rows(), 3); // header record counts as row 0
}

#[test]
fn test_lookup_by_name() {
    let view = people();
    assert_eq!(view.get_named_field(1, "Age").unwrap(), "30");
    assert_eq!(view.get_named_field(2, "City").unwrap(), "Tokyo");
}

#[test]
fn test_lookup_by_index() {
    let view = people();
    assert_eq!(view.get_field(0, 0).unwrap(), "Name");
    assert_eq!(view.get_field(2, 2).unwrap(), "Tokyo");
}

#[test]
fn test_missing_column_is_explicit() {
    let view = people();
    assert_eq!(
        view.get_named_field(1, "Country").unwrap_err(),
        Error::ColumnNotFound {
            name: "Country".to_string()
        }
    );
}

#[test]
fn test_out_of_range_lookups() {
    let view = people();
    assert!(matches!(
        view.get_row(3).unwrap_err(),
        Error::RowOutOfRange { row: 3, rows: 3 }
    ));
    assert!(matches!(
        view.get_field(0, 3).unwrap_err(),
        Error::FieldOutOfRange { column: 3, .. }
    ));
}

#[test]
fn test_quoted_field_round() {
    let blob = format!("{}note,x\n\"hello, world\",1\n", MAGIC);
    let view = from_str(&blob).unwrap();
    assert_eq!(view.get_field(1, 0).unwrap(), "hello, world");
}

#[test]
fn test_doubled_quote_stays_verbatim() {
    let blob = format!("{}note,x\n\"say \"\"hi\"\"\",1\n", MAGIC);
    let view = from_str(&blob).unwrap();
    // Quote-toggle parity carries the scan past the escape; the inner text
    // is not unescaped.
    assert_eq!(view.get_field(1, 0).unwrap(), "say \"\"hi\"\"");
    assert_eq!(view.get_field(1, 1).unwrap(), "1");
}

#[test]
fn test_quoted_newline_is_field_text() {
    let blob = format!("{}note,x\n\"two\nlines\",1\n", MAGIC);
    let view = from_str(&blob).unwrap();
    assert_eq!(view.rows(), 2);
    assert_eq!(view.get_field(1, 0).unwrap(), "two\nlines");
}

#[test]
fn test_find_row_explicit_absence() {
    let view = people();
    assert!(view.find_row(|_| false).is_none());

    let bob = view.find_row(|row| row.get(0) == Some("Bob")).unwrap();
    assert_eq!(bob.named("City").unwrap(), "Tokyo");
}

#[test]
fn test_find_field_explicit_absence() {
    let view = people();
    assert_eq!(view.find_field(|f| f == "Paris"), Some("Paris"));
    assert_eq!(view.find_field(|_| false), None);
}

#[test]
fn test_row_major_iteration() {
    let view = people();
    let fields: Vec<&str> = view.fields().collect();
    assert_eq!(
        fields,
        ["Name", "Age", "City", "Alice", "30", "Paris", "Bob", "25", "Tokyo"]
    );

    let first_cells: Vec<&str> = view.iter().map(|row| row.get(0).unwrap()).collect();
    assert_eq!(first_cells, ["Name", "Alice", "Bob"]);
}

#[test]
fn test_numeric_interpretation_on_demand() {
    let view = people();
    assert_eq!(view.integer_field(1, 1).unwrap(), 30);
    assert_eq!(view.float_field(2, 1).unwrap(), 25.0);

    let age_column = view.column_index("Age").unwrap();
    let total: i64 = view
        .iter()
        .skip(1)
        .map(|row| row.integer(age_column).unwrap())
        .sum();
    assert_eq!(total, 55);
}

#[test]
fn test_numeric_failure_never_partial() {
    let view = people();
    assert_eq!(
        view.integer_field(1, 0).unwrap_err(),
        Error::IntegerParse {
            text: "Alice".to_string()
        }
    );
}

#[test]
fn test_integer_conversions() {
    assert_eq!(parse_integer("42", 10), Some(42));
    assert_eq!(parse_integer("-0x2A", 10), Some(-42));
    assert_eq!(parse_integer("0b101", 10), Some(5));
    assert_eq!(parse_integer("12a", 10), None);
}

#[test]
fn test_float_conversions() {
    assert_eq!(parse_float("3.14"), Some(3.14));
    assert_eq!(parse_float("-1.5e2"), Some(-150.0));
    assert_eq!(parse_float("inf"), Some(f64::INFINITY));
    let nan = parse_float("nan").unwrap();
    assert_ne!(nan, nan);
    assert_eq!(parse_float("abc"), None);
}

#[test]
fn test_from_reader_end_to_end() {
    let blob = format!("{}k,v\ntimeout,250\n", MAGIC);
    let cursor = std::io::Cursor::new(blob);
    let view = from_reader(cursor).unwrap();
    let row = view.find_row(|r| r.get(0) == Some("timeout")).unwrap();
    assert_eq!(row.integer(1).unwrap(), 250);
}

#[test]
fn test_views_are_shareable_across_threads() {
    let view = people();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(view.get_named_field(2, "Age").unwrap(), "25");
            });
        }
    });
}
