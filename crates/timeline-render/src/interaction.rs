//! Hover interaction: declarative intents and their interpreter.
//!
//! Each marker carries an intent record — what should happen on pointer
//! enter, move, and leave — and [`InteractionState`] interprets those
//! intents against a mutable scene. Rendering adapters that animate can
//! read the `duration_ms` hints; the interpreter itself applies the end
//! state immediately.
//!
//! Pointer callbacks are host-serialized on the render thread and never
//! overlap a render, so the state machine is plain `&mut self`.

use serde::{Deserialize, Serialize};

use timeline_model::VisualSettings;

use crate::scene::{MarkerId, MarkerVisual, Scene};

/// One interaction effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    /// Transition the marker glyph to `visual` over `duration_ms`.
    SetVisual {
        visual: MarkerVisual,
        duration_ms: u32,
    },
    /// Reveal the tooltip panel, initially anchored at the marker.
    ShowTooltip,
    /// Track the pointer at the given offset.
    MoveTooltip { offset_x: f64, offset_y: f64 },
    /// Hide the tooltip panel.
    HideTooltip,
}

/// Declarative interaction contract for one marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventIntents {
    pub marker_id: MarkerId,
    pub on_enter: Vec<Effect>,
    pub on_move: Vec<Effect>,
    pub on_leave: Vec<Effect>,
}

/// Builds the per-marker intents for a scene.
pub fn event_intents(scene: &Scene, settings: &VisualSettings) -> Vec<EventIntents> {
    scene
        .markers
        .iter()
        .map(|marker| EventIntents {
            marker_id: marker.id,
            on_enter: vec![
                Effect::SetVisual {
                    visual: MarkerVisual::hovered(&settings.marker),
                    duration_ms: settings.marker.transition_ms,
                },
                Effect::ShowTooltip,
            ],
            on_move: vec![Effect::MoveTooltip {
                offset_x: settings.tooltip.offset_x,
                offset_y: settings.tooltip.offset_y,
            }],
            on_leave: vec![
                Effect::SetVisual {
                    visual: MarkerVisual::resting(&settings.marker),
                    duration_ms: settings.marker.transition_ms,
                },
                Effect::HideTooltip,
            ],
        })
        .collect()
}

/// A pointer event delivered by the hosting surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Enter { marker: MarkerId },
    Move { x: f64, y: f64 },
    Leave { marker: MarkerId },
}

/// Placement of the visible tooltip panel.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipPlacement {
    pub marker: MarkerId,
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// The hover state machine: *resting* ⇄ *hovered*.
#[derive(Debug, Default)]
pub struct InteractionState {
    hovered: Option<MarkerId>,
    tooltip: Option<TooltipPlacement>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently hovered marker, if any.
    pub fn hovered(&self) -> Option<MarkerId> {
        self.hovered
    }

    /// Visible tooltip placement, if any.
    pub fn tooltip(&self) -> Option<&TooltipPlacement> {
        self.tooltip.as_ref()
    }

    /// Interprets a pointer event against the scene's intents.
    pub fn apply(&mut self, scene: &mut Scene, intents: &[EventIntents], event: PointerEvent) {
        match event {
            PointerEvent::Enter { marker } => {
                let Some(intent) = find_intent(intents, marker) else {
                    return;
                };
                self.run_effects(scene, marker, &intent.on_enter, None);
                self.hovered = Some(marker);
            }
            PointerEvent::Move { x, y } => {
                let Some(marker) = self.hovered else { return };
                let Some(intent) = find_intent(intents, marker) else {
                    return;
                };
                self.run_effects(scene, marker, &intent.on_move, Some((x, y)));
            }
            PointerEvent::Leave { marker } => {
                if let Some(intent) = find_intent(intents, marker) {
                    self.run_effects(scene, marker, &intent.on_leave, None);
                }
                if self.hovered == Some(marker) {
                    self.hovered = None;
                }
            }
        }
    }

    fn run_effects(
        &mut self,
        scene: &mut Scene,
        marker: MarkerId,
        effects: &[Effect],
        pointer: Option<(f64, f64)>,
    ) {
        for effect in effects {
            match effect {
                Effect::SetVisual { visual, .. } => {
                    if let Some(glyph) = scene.marker_mut(marker) {
                        glyph.visual = visual.clone();
                    }
                }
                Effect::ShowTooltip => {
                    if let Some(glyph) = scene.marker(marker) {
                        self.tooltip = Some(TooltipPlacement {
                            marker,
                            x: glyph.x,
                            y: glyph.y,
                            text: glyph.tooltip.clone(),
                        });
                    }
                }
                Effect::MoveTooltip { offset_x, offset_y } => {
                    if let (Some(tooltip), Some((x, y))) = (self.tooltip.as_mut(), pointer) {
                        tooltip.x = x + offset_x;
                        tooltip.y = y + offset_y;
                    }
                }
                Effect::HideTooltip => self.tooltip = None,
            }
        }
    }
}

fn find_intent(intents: &[EventIntents], marker: MarkerId) -> Option<&EventIntents> {
    intents.iter().find(|intent| intent.marker_id == marker)
}
