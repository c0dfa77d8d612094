//! CSV ingestion into the host table shape.
//!
//! The first CSV row is the header. Role flags from the command line are
//! matched against headers case-insensitively and become role flags on the
//! resulting column descriptors. Headers and cells are trimmed and stripped
//! of a leading BOM.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use tracing::debug;

use timeline_model::{CellValue, ColumnDescriptor, DataTable, Role};

/// Column headers assigned to roles via CLI flags.
#[derive(Debug, Clone, Default)]
pub struct RoleAssignments {
    assignments: Vec<(Role, String)>,
}

impl RoleAssignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `role` to the column whose header matches `header`.
    pub fn assign(&mut self, role: Role, header: impl Into<String>) {
        self.assignments.push((role, header.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    fn roles_for(&self, header: &str) -> BTreeSet<Role> {
        self.assignments
            .iter()
            .filter(|(_, assigned)| assigned.eq_ignore_ascii_case(header))
            .map(|&(role, _)| role)
            .collect()
    }

    /// Assignments whose header matches none of the given columns.
    fn unmatched<'a>(&'a self, columns: &[ColumnDescriptor]) -> Vec<&'a (Role, String)> {
        self.assignments
            .iter()
            .filter(|(_, assigned)| {
                !columns
                    .iter()
                    .any(|column| column.name.eq_ignore_ascii_case(assigned))
            })
            .collect()
    }
}

/// Loads a CSV file as a [`DataTable`] with the given role flags.
///
/// Fails when an assignment names a header that does not exist — a typo'd
/// flag would otherwise silently render an empty timeline.
pub fn load_csv_table(path: &Path, roles: &RoleAssignments) -> Result<DataTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open {}", path.display()))?;

    let headers = reader.headers().context("read csv header")?.clone();
    let columns: Vec<ColumnDescriptor> = headers
        .iter()
        .map(|raw| {
            let name = normalize_header(raw);
            let roles = roles.roles_for(&name);
            ColumnDescriptor { name, roles }
        })
        .collect();

    let unmatched = roles.unmatched(&columns);
    if !unmatched.is_empty() {
        let missing: Vec<String> = unmatched
            .iter()
            .map(|(role, header)| format!("--{role}-column {header}"))
            .collect();
        let available: Vec<&str> = columns.iter().map(|column| column.name.as_str()).collect();
        bail!(
            "no csv header matches {}; available headers: {}",
            missing.join(", "),
            available.join(", ")
        );
    }

    let mut table = DataTable::new(columns);
    for result in reader.records() {
        let record = result.context("read csv record")?;
        table.push_row(
            record
                .iter()
                .map(|cell| CellValue::from(normalize_cell(cell)))
                .collect(),
        );
    }

    debug!(
        rows = table.row_count(),
        columns = table.columns.len(),
        "loaded csv table"
    );
    Ok(table)
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_headers() {
        assert_eq!(normalize_header("\u{feff} Event  Date "), "Event Date");
        assert_eq!(normalize_header("plain"), "plain");
    }

    #[test]
    fn role_matching_is_case_insensitive() {
        let mut roles = RoleAssignments::new();
        roles.assign(Role::Date, "When");
        assert!(roles.roles_for("WHEN").contains(&Role::Date));
        assert!(roles.roles_for("other").is_empty());
    }
}
