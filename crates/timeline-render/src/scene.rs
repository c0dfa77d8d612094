//! Declarative scene model consumed by rendering backends.

use serde::{Deserialize, Serialize};

use timeline_model::{MarkerSettings, Viewport};

/// Identifier of a marker within one scene.
pub type MarkerId = usize;

/// A straight line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub width: f64,
}

/// An axis tick with its label, positioned on the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub x: f64,
    pub label: String,
}

/// Mutable visual attributes of a marker glyph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerVisual {
    pub radius: f64,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

impl MarkerVisual {
    /// Resting-state visuals.
    pub fn resting(settings: &MarkerSettings) -> Self {
        Self {
            radius: settings.resting_radius,
            fill: settings.fill.clone(),
            stroke: settings.resting_stroke.clone(),
            stroke_width: settings.resting_stroke_width,
        }
    }

    /// Hovered-state visuals.
    pub fn hovered(settings: &MarkerSettings) -> Self {
        Self {
            radius: settings.hovered_radius,
            fill: settings.fill.clone(),
            stroke: settings.hovered_stroke.clone(),
            stroke_width: settings.hovered_stroke_width,
        }
    }
}

/// The interactive glyph for one distinct date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: MarkerId,
    pub x: f64,
    pub y: f64,
    /// Raw date value the marker groups.
    pub date: String,
    /// Rows of the record slice grouped under this marker, encounter order.
    pub member_rows: Vec<usize>,
    pub visual: MarkerVisual,
    /// Prebuilt tooltip body for the hover panel.
    pub tooltip: String,
}

/// One rendered frame: baseline, axis ticks, and markers.
///
/// A scene replaces all prior output; nothing is diffed between updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub viewport: Viewport,
    pub baseline: Line,
    pub ticks: Vec<Tick>,
    pub markers: Vec<Marker>,
}

impl Scene {
    pub fn marker(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.id == id)
    }

    pub fn marker_mut(&mut self, id: MarkerId) -> Option<&mut Marker> {
        self.markers.iter_mut().find(|marker| marker.id == id)
    }
}
