//! Property tests for the mapper invariants.

use proptest::prelude::{ProptestConfig, prop_assert, prop_assert_eq, proptest};

use timeline_map::{EncodingState, map_records, text, truncate_event_label};
use timeline_model::{CellValue, ColumnDescriptor, DataTable, Role};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn output_length_equals_row_count(
        rows in proptest::collection::vec(
            proptest::collection::vec("[ -~]{0,20}", 0..4),
            0..32,
        )
    ) {
        let mut table = DataTable::new(vec![
            ColumnDescriptor::new("When").with_role(Role::Date),
            ColumnDescriptor::new("What").with_role(Role::Event),
            ColumnDescriptor::new("Team").with_role(Role::Color),
        ]);
        for cells in &rows {
            table.push_row(cells.iter().map(|cell| CellValue::from(cell.as_str())).collect());
        }

        let records = map_records(&table, &mut EncodingState::new());
        prop_assert_eq!(records.len(), rows.len());
    }

    #[test]
    fn truncated_display_never_exceeds_max(label in "\\PC{0,40}") {
        let display = truncate_event_label(&label);
        prop_assert!(display.chars().count() <= text::EVENT_DISPLAY_MAX);
        if label.chars().count() > text::EVENT_DISPLAY_MAX {
            prop_assert!(display.ends_with(text::ELLIPSIS));
        } else {
            prop_assert_eq!(display, label);
        }
    }

    #[test]
    fn repeated_labels_resolve_identically(labels in proptest::collection::vec("[a-z]{1,6}", 1..24)) {
        let mut state = EncodingState::new();
        let first_pass: Vec<String> = labels.iter().map(|label| state.color_for(label)).collect();
        let second_pass: Vec<String> = labels.iter().map(|label| state.color_for(label)).collect();
        prop_assert_eq!(first_pass, second_pass);
    }
}
