#![forbid(unsafe_code)]

//! Canonical input events.
//!
//! The host normalizes whatever its platform delivers (mouse events,
//! touch lists, focus changes) into these types before feeding them to
//! the view. Mouse and touch gestures are handled uniformly: both carry a
//! device tag, a phase, and zero or more contact points.
//!
//! # Design Notes
//!
//! - A touch release legitimately carries no points (the finger is gone),
//!   so [`PointerEvent::primary`] is optional; press/move handlers decide
//!   whether a missing point is an error.
//! - Blur is its own variant because the settings path commits on it,
//!   independent of any pointer state.

use crate::geometry::Point;

/// An input event delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A pointer interaction (mouse or touch).
    Pointer(PointerEvent),

    /// A form control lost focus.
    Blur,
}

/// The input modality a pointer event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerDevice {
    Mouse,
    Touch,
}

/// The phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Button pressed or first finger down.
    Press,

    /// Pointer moved while pressed.
    Move,

    /// Button released or last finger lifted.
    Release,
}

/// A single pointer event.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    /// The originating modality.
    pub device: PointerDevice,

    /// Press, move, or release.
    pub phase: PointerPhase,

    /// Active contact points, in client-space pixels. One entry for a
    /// mouse event; zero or more for a touch event.
    points: Vec<Point>,
}

impl PointerEvent {
    /// Create a mouse event at the given client coordinates.
    #[must_use]
    pub fn mouse(phase: PointerPhase, x: f64, y: f64) -> Self {
        Self {
            device: PointerDevice::Mouse,
            phase,
            points: vec![Point::new(x, y)],
        }
    }

    /// Create a touch event from the current active touch list.
    #[must_use]
    pub fn touch(phase: PointerPhase, points: Vec<Point>) -> Self {
        Self {
            device: PointerDevice::Touch,
            phase,
            points,
        }
    }

    /// A mouse release without meaningful coordinates.
    #[must_use]
    pub fn mouse_release() -> Self {
        Self::mouse(PointerPhase::Release, 0.0, 0.0)
    }

    /// A touch release (no active touches remain).
    #[must_use]
    pub fn touch_release() -> Self {
        Self::touch(PointerPhase::Release, Vec::new())
    }

    /// The primary contact point: the mouse position, or the first
    /// active touch. `None` when no contact is active.
    #[must_use]
    pub fn primary(&self) -> Option<Point> {
        self.points.first().copied()
    }
}
