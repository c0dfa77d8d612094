//! Ordinal label→visual encoding scales.
//!
//! Both scales assign slots first-seen-first: the first label encountered
//! takes the first palette/shape entry, the next new label the second, and
//! so on in encounter order, wrapping when the set is exhausted. Repeated
//! labels always resolve to their original slot for as long as the state
//! lives — holding one [`EncodingState`] across update cycles reproduces
//! session-stable assignment, while a fresh state per cycle gives
//! per-update determinism.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use timeline_model::Symbol;

/// Fixed categorical color palette, 10 entries.
pub const COLOR_PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct OrdinalIndex {
    /// Labels in encounter order.
    seen: Vec<String>,
    slots: BTreeMap<String, usize>,
}

impl OrdinalIndex {
    fn slot(&mut self, label: &str) -> usize {
        if let Some(&slot) = self.slots.get(label) {
            return slot;
        }
        let slot = self.seen.len();
        self.seen.push(label.to_string());
        self.slots.insert(label.to_string(), slot);
        slot
    }
}

/// Label→visual assignment state for the color and symbol scales.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EncodingState {
    colors: OrdinalIndex,
    symbols: OrdinalIndex,
}

impl EncodingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a category label to a palette color.
    pub fn color_for(&mut self, label: &str) -> String {
        let slot = self.colors.slot(label);
        COLOR_PALETTE[slot % COLOR_PALETTE.len()].to_string()
    }

    /// Resolves a category label to a marker shape.
    pub fn symbol_for(&mut self, label: &str) -> Symbol {
        let slot = self.symbols.slot(label);
        Symbol::ALL[slot % Symbol::ALL.len()]
    }

    /// Color labels seen so far, in encounter order.
    pub fn color_domain(&self) -> &[String] {
        &self.colors.seen
    }

    /// Symbol labels seen so far, in encounter order.
    pub fn symbol_domain(&self) -> &[String] {
        &self.symbols.seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_is_first_seen_first() {
        let mut state = EncodingState::new();
        assert_eq!(state.color_for("alpha"), COLOR_PALETTE[0]);
        assert_eq!(state.color_for("beta"), COLOR_PALETTE[1]);
        assert_eq!(state.color_for("alpha"), COLOR_PALETTE[0]);
        assert_eq!(state.color_domain(), ["alpha", "beta"]);
    }

    #[test]
    fn symbols_wrap_after_seven_labels() {
        let mut state = EncodingState::new();
        for index in 0..7 {
            let label = format!("label-{index}");
            assert_eq!(state.symbol_for(&label), Symbol::ALL[index]);
        }
        assert_eq!(state.symbol_for("label-7"), Symbol::ALL[0]);
    }

    #[test]
    fn colors_wrap_after_ten_labels() {
        let mut state = EncodingState::new();
        for index in 0..10 {
            state.color_for(&format!("c{index}"));
        }
        assert_eq!(state.color_for("c10"), COLOR_PALETTE[0]);
        // Existing assignments are untouched by wrapping.
        assert_eq!(state.color_for("c3"), COLOR_PALETTE[3]);
    }
}
