#![forbid(unsafe_code)]

//! Collaborator seams: components, the anchor, the factory, and pointer
//! capture.
//!
//! The view never creates or destroys platform nodes itself. A
//! [`ComponentFactory`] (selected by axis) builds the named sub-components
//! into the [`Anchor`]; the view only looks them up by name and reads
//! their live geometry. [`PointerGrab`] is the embedder-side analog of
//! registering document-level move/release listeners for the duration of
//! a drag: grabbed at press, released exactly once at release.

use glider_core::event::PointerDevice;
use glider_core::geometry::Bounds;
use glider_core::state::{RenderData, SliderState};

use crate::registry::Registry;

/// Well-known component names fixed by the factory contract.
pub mod names {
    /// A draggable handle. One instance per logical value.
    pub const HANDLE: &str = "handle";
    /// The track the handles move along.
    pub const TRACK: &str = "track";
    /// A tick mark on the scale, carrying a numeric label.
    pub const SCALE: &str = "scale";
    /// The settings form.
    pub const SETTINGS: &str = "settings";
}

/// A live visual element.
///
/// `bounds` reflects the current layout on every call; implementations
/// must not cache, since layout may change between gesture steps (e.g. a
/// responsive resize mid-drag).
pub trait Element {
    fn bounds(&self) -> Bounds;
}

/// One control inside the settings form, with its current value and
/// on-screen position.
#[derive(Debug, Clone, PartialEq)]
pub struct FormControl {
    pub name: String,
    pub value: String,
    pub bounds: Bounds,
}

impl FormControl {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            bounds,
        }
    }
}

/// A visual sub-component created by the factory.
///
/// Only `name` and `node` are required. The remaining methods are
/// capabilities: components that don't have them keep the defaults and
/// the view skips them silently.
pub trait Component {
    /// The registry name this instance belongs to.
    fn name(&self) -> &str;

    /// The component's root element, queried live.
    fn node(&self) -> &dyn Element;

    /// Apply a render pass. Default is a no-op; components without a
    /// visual update step simply ignore it.
    fn render(&mut self, _data: &RenderData) {}

    /// The numeric label text, for scale ticks.
    fn label(&self) -> Option<&str> {
        None
    }

    /// The current logical value, for handles.
    fn value(&self) -> Option<f64> {
        None
    }

    /// The form controls, for the settings component. Read live on each
    /// call, like geometry.
    fn controls(&self) -> Option<Vec<FormControl>> {
        None
    }
}

impl std::fmt::Debug for dyn Element + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("bounds", &self.bounds())
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for dyn Component + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Component")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}

/// The widget's root mount point.
pub trait Anchor {
    /// Live bounding box of the root.
    fn bounds(&self) -> Bounds;

    /// Show or hide the whole widget.
    fn set_visible(&mut self, visible: bool);

    /// Note one child attached to the root. Factories call this as they
    /// build, so `is_empty` reflects the live child count.
    fn attach_child(&mut self);

    /// Remove all children (teardown before re-creation).
    fn clear(&mut self);

    /// Whether the root currently has no children.
    fn is_empty(&self) -> bool;
}

/// Builds the named sub-components for one creation cycle.
pub trait ComponentFactory {
    fn create_components(&self, anchor: &mut dyn Anchor, state: &SliderState) -> Registry;
}

/// Picks the factory matching the active axis.
pub struct FactorySelector {
    horizontal: Box<dyn ComponentFactory>,
    vertical: Box<dyn ComponentFactory>,
}

impl FactorySelector {
    #[must_use]
    pub fn new(horizontal: Box<dyn ComponentFactory>, vertical: Box<dyn ComponentFactory>) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    #[must_use]
    pub fn select(&self, axis: glider_core::geometry::Axis) -> &dyn ComponentFactory {
        match axis {
            glider_core::geometry::Axis::Horizontal => self.horizontal.as_ref(),
            glider_core::geometry::Axis::Vertical => self.vertical.as_ref(),
        }
    }
}

impl std::fmt::Debug for FactorySelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactorySelector").finish_non_exhaustive()
    }
}

/// Host-side pointer capture for the duration of one drag session.
///
/// `grab` is called once when a drag session opens, scoped to the input
/// modality that started it; `release` exactly once when the session
/// closes. Between the two, the host routes document-level move/release
/// events to the view even when the pointer leaves the widget bounds, and
/// suppresses its platform's default drag behavior on the handles.
pub trait PointerGrab {
    fn grab(&mut self, device: PointerDevice);
    fn release(&mut self);
}

/// A no-op grab for hosts without document-level capture (e.g. tests of
/// pure geometry).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullGrab;

impl PointerGrab for NullGrab {
    fn grab(&mut self, _device: PointerDevice) {}
    fn release(&mut self) {}
}
