use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::Role;

/// One column of the inbound host table, with its semantic role flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub roles: BTreeSet<Role>,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roles: BTreeSet::new(),
        }
    }

    /// Builder-style role flag, mirroring how hosts tag columns.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.insert(role);
        self
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// A raw cell value as delivered by the host.
///
/// Display conversion is generic string coercion; no locale-aware number or
/// date parsing happens here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Missing,
}

impl CellValue {
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(text) => text.clone(),
            CellValue::Number(number) => format_number(*number),
            CellValue::Bool(flag) => flag.to_string(),
            CellValue::Missing => String::new(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// Integral floats print without a trailing `.0` so cell text matches what
/// the host displayed.
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// The inbound tabular dataset: ordered columns plus positionally aligned
/// rows. Rows shorter than the column list read as `Missing` past their end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataTable {
    pub columns: Vec<ColumnDescriptor>,
    pub rows: Vec<Vec<CellValue>>,
}

impl DataTable {
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell at (row, column); `None` only when the row index is out of
    /// bounds. Short rows yield `Missing` for trailing columns.
    pub fn cell(&self, row: usize, column: usize) -> Option<CellValue> {
        let cells = self.rows.get(row)?;
        Some(cells.get(column).cloned().unwrap_or(CellValue::Missing))
    }
}

/// Viewport size in length units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
