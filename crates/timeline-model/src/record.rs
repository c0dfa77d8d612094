//! Normalized display records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Neutral color assigned when the Color role is unresolved.
pub const NEUTRAL_COLOR: &str = "#000000";

/// Marker shape resolved through the symbol encoding scale.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    /// Neutral shape assigned when the Symbol role is unresolved.
    #[default]
    Circle,
    Square,
    Triangle,
    Diamond,
    Cross,
    Star,
    Wye,
}

impl Symbol {
    /// The full shape set, in ordinal-scale assignment order.
    pub const ALL: [Symbol; 7] = [
        Symbol::Circle,
        Symbol::Square,
        Symbol::Triangle,
        Symbol::Diamond,
        Symbol::Cross,
        Symbol::Star,
        Symbol::Wye,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Symbol::Circle => "circle",
            Symbol::Square => "square",
            Symbol::Triangle => "triangle",
            Symbol::Diamond => "diamond",
            Symbol::Cross => "cross",
            Symbol::Star => "star",
            Symbol::Wye => "wye",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized, display-ready row derived from raw host table data.
///
/// Every field defaults to an empty string or a neutral visual value when
/// its source role is absent; missing optional roles never fail the mapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Raw date string; scale input and grouping key.
    pub date: String,
    /// `DD/MM/YYYY` display form, or the invalid-date sentinel.
    pub date_display: String,
    /// Raw event label.
    pub event: String,
    /// Event label truncated to the 10-character display form.
    pub event_display: String,
    /// Free text shown in tooltips.
    pub description: String,
    /// Raw category label feeding the color scale.
    pub color_attribute: String,
    /// Raw category label feeding the symbol scale.
    pub symbol_attribute: String,
    /// Resolved hex color.
    pub color: String,
    /// Resolved marker shape.
    pub symbol: Symbol,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            date: String::new(),
            date_display: String::new(),
            event: String::new(),
            event_display: String::new(),
            description: String::new(),
            color_attribute: String::new(),
            symbol_attribute: String::new(),
            color: NEUTRAL_COLOR.to_string(),
            symbol: Symbol::Circle,
        }
    }
}
