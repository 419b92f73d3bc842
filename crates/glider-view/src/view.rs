#![forbid(unsafe_code)]

//! The view façade: lifecycle, event intake, and the query surface.
//!
//! [`SliderView`] wires the collaborators together: it asks the
//! axis-matched factory to build components into the anchor, feeds every
//! host event through the gesture engine, fans render passes out to the
//! registry, and exposes node/geometry queries for embedders. It owns no
//! slider values; the subscribed controller does.

use glider_core::event::Event;
use glider_core::geometry::{Axis, BoxField, Bounds};
use glider_core::state::{ActionTag, AppData, RenderData, SliderState};

use crate::component::{Anchor, Element, FactorySelector, PointerGrab};
use crate::coords::{Resolved, SpecialCoord, ViewContext};
use crate::error::ViewError;
use crate::gesture::GestureEngine;
use crate::observer::{CreatePayload, EventBus, ViewEvent};
use crate::registry::Registry;

/// The slider's view layer, generic over its host via trait seams.
pub struct SliderView {
    anchor: Box<dyn Anchor>,
    factories: FactorySelector,
    registry: Registry,
    axis: Axis,
    bus: EventBus,
    engine: GestureEngine,
    grab: Box<dyn PointerGrab>,
}

impl SliderView {
    #[must_use]
    pub fn new(
        anchor: Box<dyn Anchor>,
        factories: FactorySelector,
        grab: Box<dyn PointerGrab>,
    ) -> Self {
        Self {
            anchor,
            factories,
            registry: Registry::new(),
            axis: Axis::default(),
            bus: EventBus::new(),
            engine: GestureEngine::new(),
            grab,
        }
    }

    /// Register a notification subscriber. Subscribers survive
    /// re-creation cycles.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&ViewEvent) + 'static) {
        self.bus.subscribe(subscriber);
    }

    /// Build the component set for `state` and announce completion.
    ///
    /// The axis is latched first so that every subsequent query and
    /// gesture reads coordinates on the correct axis. Completion is
    /// announced with the geometry facts the controller needs for its
    /// first render: the track limit and the handle size.
    pub fn create(&mut self, state: &SliderState) -> Result<(), ViewError> {
        self.axis = state.axis;
        let factory = self.factories.select(self.axis);
        self.registry = factory.create_components(self.anchor.as_mut(), state);
        tracing::debug!(axis = ?self.axis, registry = ?self.registry, "components created");

        let ctx = ViewContext::new(&self.registry, self.axis);
        let data = AppData {
            handle_id: 0,
            limit: ctx.track_limit()?,
            handle_size: ctx.handle_size()?,
        };
        self.bus.notify(&ViewEvent::FinishCreate(CreatePayload {
            data,
            action: ActionTag::SliderCreated,
        }));
        Ok(())
    }

    /// Tear down and rebuild for a changed configuration.
    ///
    /// Any live drag session is force-closed first so the host's pointer
    /// capture cannot outlive the components it pointed at. Subscribers
    /// are kept; they receive a fresh completion notification.
    pub fn re_create(&mut self, state: &SliderState) -> Result<(), ViewError> {
        self.engine.reset(self.grab.as_mut());
        if !self.anchor.is_empty() {
            self.destroy();
        }
        self.create(state)
    }

    /// Fan one render pass out to every component.
    pub fn render_ui(&mut self, data: &RenderData) {
        self.registry.render_all(data);
    }

    pub fn show(&mut self) {
        self.anchor.set_visible(true);
    }

    pub fn hide(&mut self) {
        self.anchor.set_visible(false);
    }

    /// Drop every component and clear the anchor.
    pub fn destroy(&mut self) {
        self.registry.clear();
        self.anchor.clear();
        tracing::debug!("components destroyed");
    }

    /// Feed one host event through the gesture engine.
    pub fn handle_event(&mut self, event: &Event) -> Result<(), ViewError> {
        self.engine.process(
            event,
            &ViewContext::new(&self.registry, self.axis),
            &mut self.bus,
            self.grab.as_mut(),
        )
    }

    /// Whether a drag session is currently live.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.engine.is_dragging()
    }

    /// The active axis, latched at the last `create`.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The first instance's root element under a name.
    pub fn get_node(&self, name: &str) -> Result<&dyn Element, ViewError> {
        Ok(self.registry.first(name)?.node())
    }

    /// Every instance's root element under a name, in creation order.
    pub fn get_nodes(&self, name: &str) -> Result<Vec<&dyn Element>, ViewError> {
        Ok(self
            .registry
            .all(name)?
            .iter()
            .map(|component| component.node())
            .collect())
    }

    /// Live bounding box of a named component's first instance.
    pub fn bounds_of(&self, name: &str) -> Result<Bounds, ViewError> {
        self.context().bounds_of(name)
    }

    /// One box field of a named component, queried live.
    pub fn coord(&self, name: &str, field: BoxField) -> Result<f64, ViewError> {
        self.context().coord(name, field)
    }

    /// Resolve a derived coordinate against live geometry.
    pub fn special_coord(&self, coord: SpecialCoord<'_>) -> Result<Resolved, ViewError> {
        self.context().resolve(coord)
    }

    fn context(&self) -> ViewContext<'_> {
        ViewContext::new(&self.registry, self.axis)
    }
}

impl std::fmt::Debug for SliderView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliderView")
            .field("axis", &self.axis)
            .field("registry", &self.registry)
            .field("dragging", &self.engine.is_dragging())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glider_core::geometry::Point;
    use glider_core::state::SliderKind;
    use crate::test_harness::{record_events, FakeAnchor, FakeFactory, RecordingGrab};

    fn range_state() -> SliderState {
        SliderState {
            value: vec![10.0, 70.0],
            kind: SliderKind::Range,
            ..SliderState::default()
        }
    }

    fn make_view() -> (SliderView, FakeAnchor, RecordingGrab) {
        let anchor = FakeAnchor::new(Bounds::new(80.0, 20.0, 340.0, 120.0));
        let grab = RecordingGrab::new();
        let view = SliderView::new(
            Box::new(anchor.clone()),
            FactorySelector::new(
                Box::new(FakeFactory::horizontal()),
                Box::new(FakeFactory::vertical()),
            ),
            Box::new(grab.clone()),
        );
        (view, anchor, grab)
    }

    #[test]
    fn create_announces_geometry_facts() {
        let state = range_state();
        let (mut view, anchor, _grab) = make_view();
        let events = record_events(&mut view);

        view.create(&state).unwrap();

        assert!(!anchor.is_empty());
        let events = events.borrow();
        assert_eq!(events.len(), 1);
        let ViewEvent::FinishCreate(payload) = &events[0] else {
            panic!("expected finish-create event");
        };
        assert_eq!(payload.data.handle_id, 0);
        assert_eq!(payload.data.limit, 300.0);
        assert_eq!(payload.data.handle_size, 20.0);
        assert_eq!(payload.action, ActionTag::SliderCreated);
    }

    #[test]
    fn create_latches_axis_from_state() {
        let state = SliderState {
            axis: Axis::Vertical,
            ..SliderState::default()
        };
        let (mut view, _anchor, _grab) = make_view();

        view.create(&state).unwrap();
        assert_eq!(view.axis(), Axis::Vertical);
        // The vertical preset's track is 300 tall.
        assert_eq!(view.bounds_of("track").unwrap().height, 300.0);
    }

    #[test]
    fn re_create_keeps_subscribers_and_renews_components() {
        let state = range_state();
        let (mut view, anchor, _grab) = make_view();
        let events = record_events(&mut view);

        view.create(&state).unwrap();
        view.re_create(&state).unwrap();

        assert!(!anchor.is_empty());
        let events = events.borrow();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[1], ViewEvent::FinishCreate(_)));
    }

    #[test]
    fn re_create_mid_drag_releases_capture() {
        let state = range_state();
        let (mut view, _anchor, grab) = make_view();

        view.create(&state).unwrap();
        view.handle_event(&Event::Pointer(
            glider_core::event::PointerEvent::mouse(
                glider_core::event::PointerPhase::Press,
                150.0,
                45.0,
            ),
        ))
        .unwrap();
        assert!(view.is_dragging());

        view.re_create(&state).unwrap();
        assert!(!view.is_dragging());
        assert_eq!(grab.release_count(), 1);
    }

    #[test]
    fn destroy_clears_registry_and_anchor() {
        let state = range_state();
        let (mut view, anchor, _grab) = make_view();

        view.create(&state).unwrap();
        view.destroy();

        assert!(anchor.is_empty());
        assert_eq!(
            view.get_node("track").unwrap_err(),
            ViewError::EmptyRegistry
        );
    }

    #[test]
    fn show_and_hide_toggle_the_anchor() {
        let state = range_state();
        let (mut view, anchor, _grab) = make_view();

        view.create(&state).unwrap();
        view.hide();
        assert!(!anchor.visible());
        view.show();
        assert!(anchor.visible());
    }

    #[test]
    fn render_ui_reaches_rendering_components() {
        let state = range_state();
        let horizontal = FakeFactory::horizontal();
        let renders = horizontal.render_counter();
        let mut view = SliderView::new(
            Box::new(FakeAnchor::new(Bounds::new(80.0, 20.0, 340.0, 120.0))),
            FactorySelector::new(Box::new(horizontal), Box::new(FakeFactory::vertical())),
            Box::new(RecordingGrab::new()),
        );
        view.create(&state).unwrap();

        let data = RenderData {
            handle_id: 0,
            kind: SliderKind::Range,
            axis: Axis::Horizontal,
            scale_values: vec![],
            handle_size: 20.0,
            handles: vec![],
        };
        view.render_ui(&data);
        // Track and both handles render; the factory builds nothing else
        // for a scale-less state.
        assert_eq!(renders.get(), 3);
    }

    #[test]
    fn node_queries_read_live_geometry() {
        let state = range_state();
        let (mut view, _anchor, _grab) = make_view();
        view.create(&state).unwrap();

        assert_eq!(view.coord("track", BoxField::Left).unwrap(), 100.0);
        assert_eq!(view.get_nodes("handle").unwrap().len(), 2);
        let resolved = view.special_coord(SpecialCoord::TrackLimit).unwrap();
        assert_eq!(resolved.scalar(), Some(300.0));
    }

    #[test]
    fn custom_coord_resolves_through_the_facade() {
        let state = range_state();
        let (mut view, _anchor, _grab) = make_view();
        view.create(&state).unwrap();

        let midpoint = |ctx: &ViewContext<'_>| {
            let track = ctx.bounds_of("track")?;
            Ok(Resolved::Scalar(track.left() + track.width / 2.0))
        };
        let resolved = view.special_coord(SpecialCoord::Custom(&midpoint)).unwrap();
        assert_eq!(resolved.scalar(), Some(250.0));
    }

    #[test]
    fn events_before_create_fail_on_empty_registry() {
        let state = range_state();
        let (mut view, _anchor, _grab) = make_view();

        let err = view
            .handle_event(&Event::Pointer(glider_core::event::PointerEvent::mouse(
                glider_core::event::PointerPhase::Press,
                150.0,
                45.0,
            )))
            .unwrap_err();
        assert_eq!(err, ViewError::EmptyRegistry);
    }

    #[test]
    fn point_queries_use_the_active_axis() {
        let state = range_state();
        let (mut view, _anchor, _grab) = make_view();
        view.create(&state).unwrap();

        let px = view
            .context()
            .cursor_px_value(Point::new(150.0, 45.0))
            .unwrap();
        assert_eq!(px, 40.0);
    }
}
