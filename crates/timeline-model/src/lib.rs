pub mod error;
pub mod record;
pub mod role;
pub mod settings;
pub mod table;

pub use error::{Result, TimelineError};
pub use record::{NEUTRAL_COLOR, Record, Symbol};
pub use role::Role;
pub use settings::{MarkerSettings, TooltipSettings, VisualSettings};
pub use table::{CellValue, ColumnDescriptor, DataTable, Viewport};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_defaults_are_neutral() {
        let record = Record::default();
        assert_eq!(record.date, "");
        assert_eq!(record.event_display, "");
        assert_eq!(record.color, NEUTRAL_COLOR);
        assert_eq!(record.symbol, Symbol::Circle);
    }

    #[test]
    fn settings_round_trip() {
        let settings = VisualSettings::default();
        let json = serde_json::to_string(&settings).expect("serialize settings");
        let round: VisualSettings = serde_json::from_str(&json).expect("deserialize settings");
        assert_eq!(round, settings);
        assert_eq!(round.marker.resting_radius, 5.0);
        assert_eq!(round.marker.transition_ms, 200);
    }

    #[test]
    fn settings_defaults_fill_missing_fields() {
        let settings: VisualSettings =
            serde_json::from_str(r#"{"marker":{"hovered_radius":12.0}}"#)
                .expect("partial settings");
        assert_eq!(settings.marker.hovered_radius, 12.0);
        assert_eq!(settings.marker.resting_radius, 5.0);
        assert_eq!(settings.tooltip.offset_x, 15.0);
    }
}
