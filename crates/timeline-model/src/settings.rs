//! User-configurable visual settings and the host formatting model.
//!
//! The settings carry the standard marker and tooltip constants as serde
//! defaults so a host can override individual values without restating the
//! rest. `formatting_model` exports the current values as an
//! opaque descriptor; its schema is owned by the host platform.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Marker visuals for the resting and hovered states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerSettings {
    /// Radius while resting.
    pub resting_radius: f64,
    /// Radius while hovered.
    pub hovered_radius: f64,
    /// Fill color (both states).
    pub fill: String,
    /// Stroke color while resting.
    pub resting_stroke: String,
    /// Highlight stroke color while hovered.
    pub hovered_stroke: String,
    /// Stroke width while resting.
    pub resting_stroke_width: f64,
    /// Stroke width while hovered.
    pub hovered_stroke_width: f64,
    /// Duration of the resting/hovered transition animation.
    pub transition_ms: u32,
}

impl Default for MarkerSettings {
    fn default() -> Self {
        Self {
            resting_radius: 5.0,
            hovered_radius: 8.0,
            fill: "#000000".to_string(),
            resting_stroke: "#000000".to_string(),
            hovered_stroke: "#ff0000".to_string(),
            resting_stroke_width: 2.0,
            hovered_stroke_width: 3.0,
            transition_ms: 200,
        }
    }
}

/// Tooltip panel behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipSettings {
    /// Horizontal offset from the pointer while tracking it.
    pub offset_x: f64,
    /// Vertical offset from the pointer while tracking it.
    pub offset_y: f64,
}

impl Default for TooltipSettings {
    fn default() -> Self {
        Self {
            offset_x: 15.0,
            offset_y: 15.0,
        }
    }
}

/// All user-configurable visual settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualSettings {
    pub marker: MarkerSettings,
    pub tooltip: TooltipSettings,
}

impl VisualSettings {
    /// Descriptor of the configurable setting groups for the host.
    ///
    /// The host treats this as opaque pass-through; only group/slice names
    /// and current values are promised, not a stable schema.
    pub fn formatting_model(&self) -> Value {
        json!({
            "groups": [
                {
                    "name": "marker",
                    "displayName": "Marker",
                    "slices": {
                        "restingRadius": self.marker.resting_radius,
                        "hoveredRadius": self.marker.hovered_radius,
                        "fill": self.marker.fill,
                        "restingStroke": self.marker.resting_stroke,
                        "hoveredStroke": self.marker.hovered_stroke,
                        "restingStrokeWidth": self.marker.resting_stroke_width,
                        "hoveredStrokeWidth": self.marker.hovered_stroke_width,
                        "transitionMs": self.marker.transition_ms,
                    },
                },
                {
                    "name": "tooltip",
                    "displayName": "Tooltip",
                    "slices": {
                        "offsetX": self.tooltip.offset_x,
                        "offsetY": self.tooltip.offset_y,
                    },
                },
            ],
        })
    }
}
