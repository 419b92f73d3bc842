#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All slider math happens in client-space pixels (`f64`, origin at the
//! top-left, y increasing downward). [`Axis`] centralizes the
//! horizontal-vs-vertical branch so the rest of the engine never matches
//! on orientation directly.

/// A 2D point in client-space pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// An element's bounding box in client-space pixels.
///
/// The same shape a layout query returns: origin plus size, with edge
/// accessors derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Extent along the horizontal axis.
    pub width: f64,
    /// Extent along the vertical axis.
    pub height: f64,
}

impl Bounds {
    /// Create a new bounding box.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge (alias for x).
    #[inline]
    #[must_use]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    #[must_use]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge.
    #[inline]
    #[must_use]
    pub const fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Read one box field.
    #[must_use]
    pub const fn field(&self, field: BoxField) -> f64 {
        match field {
            BoxField::Left => self.left(),
            BoxField::Top => self.top(),
            BoxField::Right => self.right(),
            BoxField::Bottom => self.bottom(),
            BoxField::Width => self.width,
            BoxField::Height => self.height,
        }
    }

    /// Check if a point is inside the box (left/top inclusive,
    /// right/bottom exclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

/// Selector for a single bounding-box field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxField {
    Left,
    Top,
    Right,
    Bottom,
    Width,
    Height,
}

/// The active measurement direction of the slider.
///
/// Set once per creation cycle; every coordinate computation branches
/// through these helpers rather than matching on the axis itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    /// The element's extent along this axis (width if horizontal,
    /// height if vertical).
    #[inline]
    #[must_use]
    pub const fn extent(self, bounds: &Bounds) -> f64 {
        match self {
            Self::Horizontal => bounds.width,
            Self::Vertical => bounds.height,
        }
    }

    /// The element's origin along this axis (left if horizontal,
    /// top if vertical).
    #[inline]
    #[must_use]
    pub const fn origin(self, bounds: &Bounds) -> f64 {
        match self {
            Self::Horizontal => bounds.left(),
            Self::Vertical => bounds.top(),
        }
    }

    /// The client coordinate consulted along this axis (x if horizontal,
    /// y if vertical).
    #[inline]
    #[must_use]
    pub const fn coordinate(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, Bounds, BoxField, Point};

    #[test]
    fn bounds_edges() {
        let b = Bounds::new(100.0, 40.0, 300.0, 20.0);
        assert_eq!(b.left(), 100.0);
        assert_eq!(b.top(), 40.0);
        assert_eq!(b.right(), 400.0);
        assert_eq!(b.bottom(), 60.0);
    }

    #[test]
    fn bounds_field_selector() {
        let b = Bounds::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(b.field(BoxField::Left), 10.0);
        assert_eq!(b.field(BoxField::Top), 20.0);
        assert_eq!(b.field(BoxField::Right), 40.0);
        assert_eq!(b.field(BoxField::Bottom), 60.0);
        assert_eq!(b.field(BoxField::Width), 30.0);
        assert_eq!(b.field(BoxField::Height), 40.0);
    }

    #[test]
    fn bounds_contains_edges() {
        let b = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert!(b.contains(Point::new(0.0, 0.0)));
        assert!(b.contains(Point::new(9.9, 9.9)));
        assert!(!b.contains(Point::new(10.0, 5.0)));
        assert!(!b.contains(Point::new(5.0, 10.0)));
        assert!(!b.contains(Point::new(-0.1, 5.0)));
    }

    #[test]
    fn axis_extent_and_origin() {
        let b = Bounds::new(100.0, 40.0, 300.0, 20.0);
        assert_eq!(Axis::Horizontal.extent(&b), 300.0);
        assert_eq!(Axis::Vertical.extent(&b), 20.0);
        assert_eq!(Axis::Horizontal.origin(&b), 100.0);
        assert_eq!(Axis::Vertical.origin(&b), 40.0);
    }

    #[test]
    fn axis_coordinate_swaps_with_axis() {
        let p = Point::new(150.0, 75.0);
        assert_eq!(Axis::Horizontal.coordinate(p), 150.0);
        assert_eq!(Axis::Vertical.coordinate(p), 75.0);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn edges_are_origin_plus_extent(
                x in -1e6f64..1e6,
                y in -1e6f64..1e6,
                w in 0f64..1e6,
                h in 0f64..1e6,
            ) {
                let b = Bounds::new(x, y, w, h);
                prop_assert_eq!(b.field(BoxField::Right), b.field(BoxField::Left) + w);
                prop_assert_eq!(b.field(BoxField::Bottom), b.field(BoxField::Top) + h);
            }

            #[test]
            fn contained_point_projects_inside_on_both_axes(
                x in -1e3f64..1e3,
                y in -1e3f64..1e3,
                px in -2e3f64..2e3,
                py in -2e3f64..2e3,
            ) {
                let b = Bounds::new(x, y, 100.0, 50.0);
                let p = Point::new(px, py);
                if b.contains(p) {
                    for axis in [Axis::Horizontal, Axis::Vertical] {
                        let c = axis.coordinate(p);
                        prop_assert!(c >= axis.origin(&b));
                        prop_assert!(c < axis.origin(&b) + axis.extent(&b));
                    }
                }
            }
        }
    }
}
