#![forbid(unsafe_code)]

//! Geometry access and derived coordinates.
//!
//! [`ViewContext`] bundles the registry with the active axis and answers
//! every coordinate question the gesture engine asks. Nothing here is
//! cached: each call re-reads live element bounds, because layout may
//! change between gesture steps.
//!
//! Derived measurements go through [`SpecialCoord`], a closed enumeration
//! of resolver kinds plus one explicit custom-function variant, so there
//! is no stringly-typed key table and no "unknown key" failure mode.

use glider_core::geometry::{Axis, Bounds, BoxField, Point};

use crate::component::names;
use crate::error::ViewError;
use crate::registry::Registry;

/// A resolved special coordinate: a single measurement or one entry per
/// handle.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    Scalar(f64),
    Series(Vec<f64>),
}

impl Resolved {
    /// The scalar value, if this resolved to one.
    #[must_use]
    pub fn scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Series(_) => None,
        }
    }

    /// The series, if this resolved to one.
    #[must_use]
    pub fn series(&self) -> Option<&[f64]> {
        match self {
            Self::Scalar(_) => None,
            Self::Series(values) => Some(values),
        }
    }
}

/// A derived measurement over the slider's current geometry.
pub enum SpecialCoord<'a> {
    /// Handle extent along the active axis (height if vertical, width if
    /// horizontal).
    HandleSize,

    /// Track extent along the active axis.
    TrackLimit,

    /// Per-handle offset along the active axis relative to the track
    /// origin. Horizontal: `handle.left - track.left`. Vertical: the
    /// absolute distance from the track top, so the offset grows downward
    /// from the track start even though client y grows downward too.
    HandleOffsets,

    /// Escape hatch for one-off derived measurements.
    Custom(&'a dyn Fn(&ViewContext<'_>) -> Result<Resolved, ViewError>),
}

impl std::fmt::Debug for SpecialCoord<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HandleSize => f.write_str("HandleSize"),
            Self::TrackLimit => f.write_str("TrackLimit"),
            Self::HandleOffsets => f.write_str("HandleOffsets"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Read-only view over the registry plus the active axis.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    registry: &'a Registry,
    axis: Axis,
}

impl<'a> ViewContext<'a> {
    #[must_use]
    pub fn new(registry: &'a Registry, axis: Axis) -> Self {
        Self { registry, axis }
    }

    #[must_use]
    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Live bounding box of a named component's first instance.
    pub fn bounds_of(&self, name: &str) -> Result<Bounds, ViewError> {
        Ok(self.registry.first(name)?.node().bounds())
    }

    /// One bounding-box field of a named component's first instance.
    ///
    /// When several fields are needed in tight succession, use
    /// [`bounds_of`](Self::bounds_of) and read them off the returned box
    /// to avoid repeated geometry queries.
    pub fn coord(&self, name: &str, field: BoxField) -> Result<f64, ViewError> {
        Ok(self.bounds_of(name)?.field(field))
    }

    /// Resolve a derived measurement.
    pub fn resolve(&self, coord: SpecialCoord<'_>) -> Result<Resolved, ViewError> {
        match coord {
            SpecialCoord::HandleSize => self.handle_size().map(Resolved::Scalar),
            SpecialCoord::TrackLimit => self.track_limit().map(Resolved::Scalar),
            SpecialCoord::HandleOffsets => self.handle_offsets().map(Resolved::Series),
            SpecialCoord::Custom(resolver) => resolver(self),
        }
    }

    /// Handle extent along the active axis.
    pub fn handle_size(&self) -> Result<f64, ViewError> {
        Ok(self.axis.extent(&self.bounds_of(names::HANDLE)?))
    }

    /// Track extent along the active axis.
    pub fn track_limit(&self) -> Result<f64, ViewError> {
        Ok(self.axis.extent(&self.bounds_of(names::TRACK)?))
    }

    /// Per-handle offset along the active axis, relative to the track
    /// origin, ordered by handle index.
    pub fn handle_offsets(&self) -> Result<Vec<f64>, ViewError> {
        let track = self.bounds_of(names::TRACK)?;
        let handles = self.registry.all(names::HANDLE)?;

        Ok(handles
            .iter()
            .map(|handle| {
                let bounds = handle.node().bounds();
                match self.axis {
                    Axis::Horizontal => bounds.left() - track.left(),
                    Axis::Vertical => (track.top() - bounds.top()).abs(),
                }
            })
            .collect())
    }

    /// Convert a pointer position to a pixel value along the track.
    ///
    /// Subtracts the track origin and half the handle size, so the value
    /// names where the handle's leading edge lands when centered on the
    /// cursor.
    pub fn cursor_px_value(&self, point: Point) -> Result<f64, ViewError> {
        let track = self.bounds_of(names::TRACK)?;
        let half_handle = self.handle_size()? / 2.0;
        Ok(self.axis.coordinate(point) - self.axis.origin(&track) - half_handle)
    }

    /// The full per-handle pixel-value sequence with the entry at
    /// `handle_id` replaced by the pointer's converted position.
    ///
    /// The stationary handles report their current offsets; only the
    /// horizontal branch applies the half-handle centering correction,
    /// mirroring where the visual anchor sits on each axis.
    pub fn handle_px_values(&self, point: Point, handle_id: usize) -> Result<Vec<f64>, ViewError> {
        let track = self.bounds_of(names::TRACK)?;
        let half_handle = self.handle_size()? / 2.0;
        let handles = self.registry.all(names::HANDLE)?;

        let mut values: Vec<f64> = handles
            .iter()
            .map(|handle| {
                let bounds = handle.node().bounds();
                match self.axis {
                    Axis::Horizontal => bounds.left() - track.left() - half_handle,
                    Axis::Vertical => (track.top() - bounds.top()).abs(),
                }
            })
            .collect();

        // handle_id comes from proximity over this same handle list.
        values[handle_id] = self.cursor_px_value(point)?;
        Ok(values)
    }
}
