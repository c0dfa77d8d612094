use std::str::FromStr;

use timeline_model::{CellValue, ColumnDescriptor, DataTable, Role, TimelineError, Viewport};

#[test]
fn role_parses_case_insensitively() {
    assert_eq!(Role::from_str("Date").unwrap(), Role::Date);
    assert_eq!(Role::from_str(" symbol ").unwrap(), Role::Symbol);
    assert!(matches!(
        Role::from_str("severity"),
        Err(TimelineError::UnknownRole(name)) if name == "severity"
    ));
}

#[test]
fn column_role_flags() {
    let column = ColumnDescriptor::new("When")
        .with_role(Role::Date)
        .with_role(Role::Event);
    assert!(column.has_role(Role::Date));
    assert!(column.has_role(Role::Event));
    assert!(!column.has_role(Role::Color));
}

#[test]
fn cell_display_is_generic_coercion() {
    assert_eq!(CellValue::Text("launch".to_string()).display(), "launch");
    assert_eq!(CellValue::Number(42.0).display(), "42");
    assert_eq!(CellValue::Number(2.5).display(), "2.5");
    assert_eq!(CellValue::Bool(true).display(), "true");
    assert_eq!(CellValue::Missing.display(), "");
}

#[test]
fn short_rows_read_as_missing() {
    let mut table = DataTable::new(vec![
        ColumnDescriptor::new("a"),
        ColumnDescriptor::new("b"),
    ]);
    table.push_row(vec![CellValue::from("only one cell")]);

    assert_eq!(table.row_count(), 1);
    assert_eq!(table.cell(0, 0), Some(CellValue::from("only one cell")));
    assert_eq!(table.cell(0, 1), Some(CellValue::Missing));
    assert_eq!(table.cell(1, 0), None);
}

#[test]
fn viewport_is_plain_data() {
    let viewport = Viewport::new(800.0, 400.0);
    assert_eq!(viewport.width, 800.0);
    assert_eq!(viewport.height, 400.0);
}
