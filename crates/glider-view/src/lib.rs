#![forbid(unsafe_code)]

//! The Glider view engine: raw pointer input in, value notifications out.
//!
//! The engine owns no slider state. It resolves live component geometry,
//! classifies each press (drag a handle, pick a scale tick, or edit the
//! settings form), runs the press → move×N → release session, and
//! publishes the resulting pixel values on a subscribe/notify bus. The
//! controller that owns the authoritative values converts pixels to
//! logical values, clamps, snaps, and calls back with [`RenderData`] for
//! the next paint.
//!
//! Collaborators are trait seams: a [`ComponentFactory`] supplies the
//! visual sub-components, an [`Anchor`] is the mount point, and a
//! [`PointerGrab`] is the host-side analog of document-level listener
//! capture during a drag.
//!
//! [`RenderData`]: glider_core::state::RenderData

// Unit tests use the fakes from `glider-harness`, which itself depends
// on this crate. Linking the harness rlib into the lib-test target would
// pull in a second copy of this crate, so its traits would not match.
// Instead the harness source is compiled directly into the test build;
// the self-alias lets its `glider_view::` paths resolve to this crate.
#[cfg(test)]
extern crate self as glider_view;

#[cfg(test)]
#[path = "../../glider-harness/src/lib.rs"]
mod test_harness;

pub mod component;
pub mod coords;
pub mod error;
pub mod gesture;
pub mod observer;
pub mod registry;
pub mod settings;
pub mod view;

pub use component::{Anchor, Component, ComponentFactory, Element, FactorySelector, PointerGrab};
pub use coords::{Resolved, SpecialCoord, ViewContext};
pub use error::ViewError;
pub use gesture::{GestureEngine, GestureTarget};
pub use observer::{EventBus, ViewEvent};
pub use registry::Registry;
pub use view::SliderView;
