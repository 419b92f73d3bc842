#![forbid(unsafe_code)]

//! Gesture recognition: transforms raw pointer input into value
//! notifications.
//!
//! [`GestureEngine`] is a stateful processor. Each press is classified by
//! hit-testing live geometry into one of three targets — the settings
//! form, a scale tick, or a drag on the track/handles — and dispatched on
//! that closed enumeration. A drag opens a [`DragSession`] scoped to the
//! input modality that started it; moves from the other modality are
//! ignored, and the matching release closes the session.
//!
//! # Invariants
//!
//! 1. At most one drag session exists at a time; a press while a session
//!    is live is ignored (the pointer is already captured).
//! 2. The session's handle id is fixed at press time by proximity and
//!    never recomputed during moves.
//! 3. For one gesture the bus sees exactly one `Touch`, then zero or more
//!    `Move`s; release publishes nothing.
//! 4. Host capture is grabbed once per session and released exactly once,
//!    via the single consumption of the session record.
//! 5. A scale pick never opens a session and never grabs capture.

use glider_core::event::{Event, PointerDevice, PointerEvent, PointerPhase};
use glider_core::geometry::Point;
use glider_core::state::{ActionTag, AppData};

use crate::component::{names, PointerGrab};
use crate::coords::ViewContext;
use crate::error::ViewError;
use crate::observer::{EventBus, GesturePayload, ScalePayload, ViewEvent};
use crate::settings::{self, SettingsLatch};

/// What a press is aimed at, decided by explicit hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureTarget {
    /// A handle or the track: start a drag session.
    Drag,

    /// A scale tick (by instance index): pick its value directly.
    Scale { tick: usize },

    /// The settings form: arm the blur-commit latch.
    Settings,
}

/// One live drag, from press to the matching release.
///
/// Created only inside the press handler and consumed exactly once on
/// release; capture release is tied to that consumption, so no error
/// path can unbalance the grab/release pair.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    handle_id: usize,
    data: AppData,
    device: PointerDevice,
}

/// Stateful gesture engine. Feed it every host event via
/// [`process`](GestureEngine::process).
#[derive(Debug, Default)]
pub struct GestureEngine {
    session: Option<DragSession>,
    latch: SettingsLatch,
}

impl GestureEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag session is live.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Force-close any live session and disarm the settings latch.
    ///
    /// Used on re-creation so a teardown mid-drag cannot leave the host
    /// captured.
    pub fn reset(&mut self, grab: &mut dyn PointerGrab) {
        if self.session.take().is_some() {
            grab.release();
            tracing::debug!("drag session force-closed on reset");
        }
        self.latch.reset();
    }

    /// Classify a press point against the current component geometry.
    #[must_use]
    pub fn classify(ctx: &ViewContext<'_>, point: Point) -> GestureTarget {
        let on = |component: &Box<dyn crate::component::Component>| {
            component.node().bounds().contains(point)
        };

        if ctx.registry().instances(names::SETTINGS).iter().any(on) {
            return GestureTarget::Settings;
        }
        if let Some(tick) = ctx
            .registry()
            .instances(names::SCALE)
            .iter()
            .position(on)
        {
            return GestureTarget::Scale { tick };
        }
        GestureTarget::Drag
    }

    /// The handle nearest to a pixel value along the track.
    ///
    /// One handle wins trivially. With two, the lower-index handle wins
    /// only when strictly closer; ties go to the higher index. More than
    /// two handles are not generalized: the first two offsets are
    /// compared, matching the documented two-handle policy.
    pub fn closest_handle(ctx: &ViewContext<'_>, px_value: f64) -> Result<usize, ViewError> {
        let offsets = ctx.handle_offsets()?;
        if offsets.len() == 1 {
            return Ok(0);
        }
        let first = (px_value - offsets[0]).abs();
        let second = (px_value - offsets[1]).abs();
        Ok(if first < second { 0 } else { 1 })
    }

    /// Process one host event, publishing any resulting notifications.
    pub fn process(
        &mut self,
        event: &Event,
        ctx: &ViewContext<'_>,
        bus: &mut EventBus,
        grab: &mut dyn PointerGrab,
    ) -> Result<(), ViewError> {
        match event {
            Event::Pointer(pointer) => match pointer.phase {
                PointerPhase::Press => self.on_press(pointer, ctx, bus, grab),
                PointerPhase::Move => self.on_move(pointer, ctx, bus),
                PointerPhase::Release => {
                    self.on_release(pointer.device, grab);
                    Ok(())
                }
            },
            Event::Blur => self.on_blur(ctx, bus),
        }
    }

    fn on_press(
        &mut self,
        pointer: &PointerEvent,
        ctx: &ViewContext<'_>,
        bus: &mut EventBus,
        grab: &mut dyn PointerGrab,
    ) -> Result<(), ViewError> {
        if self.session.is_some() {
            // Pointer is already captured by a live session.
            tracing::trace!("press ignored during live drag session");
            return Ok(());
        }
        let point = pointer.primary().ok_or(ViewError::MissingPointer)?;

        match Self::classify(ctx, point) {
            GestureTarget::Settings => {
                if settings::press_on_control(ctx, point)? && self.latch.arm() {
                    tracing::trace!("settings latch armed");
                }
                Ok(())
            }
            GestureTarget::Scale { tick } => self.pick_scale(ctx, bus, point, tick),
            GestureTarget::Drag => self.open_session(pointer.device, point, ctx, bus, grab),
        }
    }

    fn open_session(
        &mut self,
        device: PointerDevice,
        point: Point,
        ctx: &ViewContext<'_>,
        bus: &mut EventBus,
        grab: &mut dyn PointerGrab,
    ) -> Result<(), ViewError> {
        let data = Self::app_data(ctx, point)?;
        let px_values = ctx.handle_px_values(point, data.handle_id)?;

        bus.notify(&ViewEvent::Touch(GesturePayload {
            data,
            px_values,
            action: ActionTag::EventTriggered,
        }));

        self.session = Some(DragSession {
            handle_id: data.handle_id,
            data,
            device,
        });
        grab.grab(device);
        tracing::debug!(handle_id = data.handle_id, device = ?device, "drag session opened");
        Ok(())
    }

    fn on_move(
        &mut self,
        pointer: &PointerEvent,
        ctx: &ViewContext<'_>,
        bus: &mut EventBus,
    ) -> Result<(), ViewError> {
        let Some(session) = self.session else {
            return Ok(());
        };
        if session.device != pointer.device {
            // Only the modality that opened the session is captured.
            return Ok(());
        }
        let point = pointer.primary().ok_or(ViewError::MissingPointer)?;
        let px_values = ctx.handle_px_values(point, session.handle_id)?;

        bus.notify(&ViewEvent::Move(GesturePayload {
            data: session.data,
            px_values,
            action: ActionTag::EventTriggered,
        }));
        Ok(())
    }

    fn on_release(&mut self, device: PointerDevice, grab: &mut dyn PointerGrab) {
        if self.session.is_some_and(|session| session.device == device) {
            self.session = None;
            grab.release();
            tracing::debug!(device = ?device, "drag session closed");
        }
    }

    fn pick_scale(
        &self,
        ctx: &ViewContext<'_>,
        bus: &mut EventBus,
        point: Point,
        tick: usize,
    ) -> Result<(), ViewError> {
        let ticks = ctx.registry().all(names::SCALE)?;
        let label = ticks[tick].label().ok_or_else(|| ViewError::MissingValue {
            name: names::SCALE.into(),
        })?;
        let picked: f64 = label
            .trim()
            .parse()
            .map_err(|_| ViewError::BadLabel { text: label.into() })?;

        let mut values = ctx
            .registry()
            .all(names::HANDLE)?
            .iter()
            .map(|handle| {
                handle.value().ok_or_else(|| ViewError::MissingValue {
                    name: names::HANDLE.into(),
                })
            })
            .collect::<Result<Vec<f64>, ViewError>>()?;

        let data = Self::app_data(ctx, point)?;
        values[data.handle_id] = picked;

        bus.notify(&ViewEvent::Scale(ScalePayload {
            data,
            values,
            action: ActionTag::EventTriggered,
        }));
        tracing::debug!(handle_id = data.handle_id, picked, "scale value picked");
        Ok(())
    }

    fn on_blur(&mut self, ctx: &ViewContext<'_>, bus: &mut EventBus) -> Result<(), ViewError> {
        if !self.latch.is_armed() {
            return Ok(());
        }
        // One-shot: disarm before reading, so a failed commit does not
        // replay on the next unrelated blur.
        self.latch.reset();
        let payload = settings::commit(ctx)?;
        bus.notify(&ViewEvent::Settings(payload));
        tracing::debug!("settings committed");
        Ok(())
    }

    fn app_data(ctx: &ViewContext<'_>, point: Point) -> Result<AppData, ViewError> {
        let handle_id = Self::closest_handle(ctx, ctx.cursor_px_value(point)?)?;
        Ok(AppData {
            handle_id,
            limit: ctx.track_limit()?,
            handle_size: ctx.handle_size()?,
        })
    }
}
