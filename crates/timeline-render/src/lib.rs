//! Timeline Renderer: normalized records → a declarative interactive scene.
//!
//! `render` derives a temporal scale from the records, draws one marker per
//! distinct date on a horizontal baseline, and prebuilds tooltip content.
//! Interaction is declarative: per-marker event intents interpreted by the
//! hover state machine in [`interaction`].

pub mod group;
pub mod interaction;
pub mod render;
pub mod scale;
pub mod scene;
pub mod tooltip;

pub use group::{MarkerGroup, group_by_date};
pub use interaction::{Effect, EventIntents, InteractionState, PointerEvent, event_intents};
pub use render::render;
pub use scale::{AXIS_INSET, TimeScale};
pub use scene::{Line, Marker, MarkerId, MarkerVisual, Scene, Tick};
pub use tooltip::tooltip_text;
