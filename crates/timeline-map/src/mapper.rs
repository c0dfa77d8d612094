//! Table-to-record transformation.

use timeline_model::{CellValue, DataTable, Record, Role};
use tracing::{debug, trace};

use crate::datetime::format_display_date;
use crate::encoding::EncodingState;
use crate::roles::RoleMap;
use crate::text::truncate_event_label;

/// Maps every table row to a normalized [`Record`], preserving row order.
///
/// Missing optional roles default silently; only the row count determines
/// the output length. The encoding state is threaded explicitly so callers
/// decide whether color/symbol assignment persists across update cycles.
pub fn map_records(table: &DataTable, encoding: &mut EncodingState) -> Vec<Record> {
    let roles = RoleMap::resolve(&table.columns);
    debug!(rows = table.row_count(), ?roles, "mapping table rows");

    let mut records = Vec::with_capacity(table.row_count());
    for row in 0..table.row_count() {
        let record = map_row(table, &roles, encoding, row);
        trace!(row, date = %record.date, event = %record.event, "mapped row");
        records.push(record);
    }
    records
}

fn map_row(
    table: &DataTable,
    roles: &RoleMap,
    encoding: &mut EncodingState,
    row: usize,
) -> Record {
    let mut record = Record::default();

    if let Some(value) = role_value(table, roles, Role::Date, row) {
        record.date_display = format_display_date(&value);
        record.date = value;
    }
    if let Some(value) = role_value(table, roles, Role::Event, row) {
        record.event_display = truncate_event_label(&value);
        record.event = value;
    }
    if let Some(value) = role_value(table, roles, Role::Description, row) {
        record.description = value;
    }
    // A resolved Color/Symbol role always feeds the scale, even for empty
    // labels; the neutral defaults apply only when the role is unresolved.
    if let Some(label) = role_value(table, roles, Role::Color, row) {
        record.color = encoding.color_for(&label);
        record.color_attribute = label;
    }
    if let Some(label) = role_value(table, roles, Role::Symbol, row) {
        record.symbol = encoding.symbol_for(&label);
        record.symbol_attribute = label;
    }

    record
}

/// Display string of the cell backing `role`, or `None` when the role is
/// unresolved.
fn role_value(table: &DataTable, roles: &RoleMap, role: Role, row: usize) -> Option<String> {
    let column = roles.index(role)?;
    let cell = table.cell(row, column).unwrap_or(CellValue::Missing);
    Some(cell.display())
}
