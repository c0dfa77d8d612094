//! Scene construction.

use timeline_map::{display_date, parse_calendar_date};
use timeline_model::{Record, Viewport, VisualSettings};
use tracing::debug;

use crate::group::group_by_date;
use crate::scale::{AXIS_INSET, TimeScale};
use crate::scene::{Line, Marker, MarkerVisual, Scene, Tick};
use crate::tooltip::tooltip_text;

/// Ticks requested from the scale per render.
const TICK_COUNT: usize = 5;

const BASELINE_WIDTH: f64 = 1.0;

/// Renders records into a scene for the given viewport.
///
/// Pure: the same records, viewport, and settings always produce the same
/// scene. An empty record slice renders the baseline alone.
pub fn render(records: &[Record], viewport: Viewport, settings: &VisualSettings) -> Scene {
    let baseline_y = viewport.height / 2.0;
    let baseline = Line {
        x1: AXIS_INSET,
        y1: baseline_y,
        x2: viewport.width - AXIS_INSET,
        y2: baseline_y,
        width: BASELINE_WIDTH,
    };

    let groups = group_by_date(records);
    let scale = TimeScale::from_dates(
        groups.iter().filter_map(|group| parse_calendar_date(&group.date)),
        AXIS_INSET,
        viewport.width - AXIS_INSET,
    );

    let mut markers = Vec::new();
    let mut ticks = Vec::new();
    if let Some(scale) = scale {
        for group in &groups {
            let Some(date) = parse_calendar_date(&group.date) else {
                debug!(date = %group.date, "marker skipped: date does not parse");
                continue;
            };
            markers.push(Marker {
                id: markers.len(),
                x: scale.position(date),
                y: baseline_y,
                date: group.date.clone(),
                member_rows: group.member_rows.clone(),
                visual: MarkerVisual::resting(&settings.marker),
                tooltip: tooltip_text(group.member_rows.iter().map(|&row| &records[row])),
            });
        }
        ticks = scale
            .ticks(TICK_COUNT)
            .into_iter()
            .map(|date| Tick {
                x: scale.position(date),
                label: display_date(date),
            })
            .collect();
    }

    debug!(
        records = records.len(),
        markers = markers.len(),
        "rendered scene"
    );

    Scene {
        viewport,
        baseline,
        ticks,
        markers,
    }
}
