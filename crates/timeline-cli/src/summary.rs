//! Terminal summary output.

use std::path::PathBuf;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use timeline_model::Record;

/// Result of one render invocation.
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    pub output: PathBuf,
    pub records: usize,
    pub markers: usize,
    /// Distinct dates that could not be positioned on the axis.
    pub undrawn_dates: usize,
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn print_render_summary(outcome: &RenderOutcome) {
    println!("Timeline: {}", outcome.output.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Records"),
        header_cell("Markers"),
        header_cell("Undrawn dates"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(outcome.records).set_alignment(CellAlignment::Right),
        Cell::new(outcome.markers).set_alignment(CellAlignment::Right),
        count_cell(outcome.undrawn_dates, Color::Yellow),
    ]);
    println!("{table}");
}

/// Mapped records as a styled table, one row per record.
pub fn records_table(records: &[Record]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Date"),
        header_cell("Display"),
        header_cell("Event"),
        header_cell("Description"),
        header_cell("Color"),
        header_cell("Symbol"),
    ]);
    apply_table_style(&mut table);
    for (row, record) in records.iter().enumerate() {
        table.add_row(vec![
            Cell::new(row).set_alignment(CellAlignment::Right),
            Cell::new(&record.date),
            Cell::new(&record.date_display),
            Cell::new(&record.event_display),
            Cell::new(&record.description),
            Cell::new(&record.color),
            Cell::new(record.symbol.as_str()),
        ]);
    }
    table
}

pub fn print_records(records: &[Record]) {
    println!("{}", records_table(records));
    println!("{} record(s)", records.len());
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, highlight: Color) -> Cell {
    let cell = Cell::new(count).set_alignment(CellAlignment::Right);
    if count > 0 { cell.fg(highlight) } else { cell }
}
