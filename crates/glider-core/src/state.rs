#![forbid(unsafe_code)]

//! The slider data model shared between the view engine and its host.
//!
//! [`SliderState`] is the immutable snapshot the controller passes in at
//! creation; [`RenderData`] is what it passes back for each render pass;
//! [`AppData`] is the minimal per-gesture context threaded through every
//! notification.

use crate::geometry::Axis;

/// Whether the slider has one handle or a from/to pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SliderKind {
    #[default]
    Single,
    Range,
}

/// Immutable slider configuration snapshot.
///
/// Owned by the external controller; the view reads it during
/// creation/re-creation and never mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderState {
    pub min: f64,
    pub max: f64,
    /// Current logical handle values, ordered by handle index.
    pub value: Vec<f64>,
    pub step: f64,
    pub axis: Axis,
    pub kind: SliderKind,
    pub scale_enabled: bool,
    pub tooltip_enabled: bool,
    pub bar_enabled: bool,
}

impl Default for SliderState {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            value: vec![0.0],
            step: 1.0,
            axis: Axis::Horizontal,
            kind: SliderKind::Single,
            scale_enabled: false,
            tooltip_enabled: false,
            bar_enabled: false,
        }
    }
}

/// Why a notification fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionTag {
    /// A user gesture produced new values.
    EventTriggered,

    /// Construction finished; the view is ready for its first render.
    SliderCreated,

    /// Committed settings require a full re-creation.
    RecreateApp,
}

/// Minimal per-gesture context carried by every notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppData {
    /// Index of the handle the gesture manipulates. Fixed at press time
    /// for the whole session.
    pub handle_id: usize,

    /// Track extent along the active axis, in pixels.
    pub limit: f64,

    /// Handle extent along the active axis, in pixels.
    pub handle_size: f64,
}

/// A pixel-position/logical-value pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalePoint {
    pub px_value: f64,
    pub value: f64,
}

impl ScalePoint {
    #[must_use]
    pub const fn new(px_value: f64, value: f64) -> Self {
        Self { px_value, value }
    }
}

/// Everything a render pass needs, supplied by the external controller.
///
/// The view never constructs this; it only fans it out to sub-components.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderData {
    pub handle_id: usize,
    pub kind: SliderKind,
    pub axis: Axis,
    /// Tick positions and labels for the scale, when enabled.
    pub scale_values: Vec<ScalePoint>,
    pub handle_size: f64,
    /// Per-handle position/value, ordered by handle index.
    pub handles: Vec<ScalePoint>,
}
