#![forbid(unsafe_code)]

//! Test harness and reference fixtures for Glider.
//!
//! Everything here stands in for an embedder: fake components with
//! externally mutable geometry, a fake anchor, a recording pointer grab,
//! and a deterministic component factory. The fakes share state through
//! `Rc` handles so a test can keep a clone, hand the original to the
//! view, and observe or mutate from outside — the same way a host's live
//! layout changes under the view.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glider_core::event::PointerDevice;
use glider_core::geometry::Bounds;
use glider_core::state::{RenderData, SliderKind, SliderState};
use glider_view::component::{names, Anchor, Component, ComponentFactory, Element, FormControl};
use glider_view::observer::ViewEvent;
use glider_view::registry::Registry;
use glider_view::view::SliderView;
use glider_view::PointerGrab;

/// A bounding box a test can move while the view holds the component.
///
/// Clones share the same cell, so `set` on the test's handle is visible
/// through the component's next `bounds` query.
#[derive(Debug, Clone, Default)]
pub struct SharedBounds {
    inner: Rc<Cell<Bounds>>,
}

impl SharedBounds {
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self {
            inner: Rc::new(Cell::new(bounds)),
        }
    }

    #[must_use]
    pub fn get(&self) -> Bounds {
        self.inner.get()
    }

    pub fn set(&self, bounds: Bounds) {
        self.inner.set(bounds);
    }
}

impl Element for SharedBounds {
    fn bounds(&self) -> Bounds {
        self.get()
    }
}

/// A component fake with every capability optional.
///
/// Constructors mirror the real component kinds: `plain` for tracks and
/// bars, `handle` for a value-carrying handle, `tick` for a labelled
/// scale mark, `settings` for the form.
pub struct FakeComponent {
    name: String,
    node: SharedBounds,
    label: Option<String>,
    value: Option<f64>,
    controls: Option<Vec<FormControl>>,
    renders: Option<Rc<Cell<usize>>>,
}

impl FakeComponent {
    #[must_use]
    pub fn plain(name: impl Into<String>, node: SharedBounds) -> Self {
        Self {
            name: name.into(),
            node,
            label: None,
            value: None,
            controls: None,
            renders: None,
        }
    }

    #[must_use]
    pub fn handle(node: SharedBounds, value: f64) -> Self {
        Self {
            value: Some(value),
            ..Self::plain(names::HANDLE, node)
        }
    }

    #[must_use]
    pub fn tick(node: SharedBounds, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::plain(names::SCALE, node)
        }
    }

    #[must_use]
    pub fn settings(node: SharedBounds, controls: Vec<FormControl>) -> Self {
        Self {
            controls: Some(controls),
            ..Self::plain(names::SETTINGS, node)
        }
    }

    /// Count render passes into a shared counter.
    #[must_use]
    pub fn counting(mut self, renders: Rc<Cell<usize>>) -> Self {
        self.renders = Some(renders);
        self
    }

    #[must_use]
    pub fn boxed(self) -> Box<dyn Component> {
        Box::new(self)
    }
}

impl Component for FakeComponent {
    fn name(&self) -> &str {
        &self.name
    }

    fn node(&self) -> &dyn Element {
        &self.node
    }

    fn render(&mut self, _data: &RenderData) {
        if let Some(renders) = &self.renders {
            renders.set(renders.get() + 1);
        }
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn value(&self) -> Option<f64> {
        self.value
    }

    fn controls(&self) -> Option<Vec<FormControl>> {
        self.controls.clone()
    }
}

#[derive(Debug, Default)]
struct AnchorState {
    bounds: Cell<Bounds>,
    visible: Cell<bool>,
    children: Cell<usize>,
}

/// A fake mount point. Clones share state, so a test keeps one handle
/// and boxes another into the view.
#[derive(Debug, Clone, Default)]
pub struct FakeAnchor {
    state: Rc<AnchorState>,
}

impl FakeAnchor {
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        let anchor = Self::default();
        anchor.state.bounds.set(bounds);
        anchor.state.visible.set(true);
        anchor
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.state.visible.get()
    }

    #[must_use]
    pub fn child_count(&self) -> usize {
        self.state.children.get()
    }

    /// Trait-independent emptiness check for test assertions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.child_count() == 0
    }
}

impl Anchor for FakeAnchor {
    fn bounds(&self) -> Bounds {
        self.state.bounds.get()
    }

    fn set_visible(&mut self, visible: bool) {
        self.state.visible.set(visible);
    }

    fn attach_child(&mut self) {
        self.state.children.set(self.state.children.get() + 1);
    }

    fn clear(&mut self) {
        self.state.children.set(0);
    }

    fn is_empty(&self) -> bool {
        self.state.children.get() == 0
    }
}

#[derive(Debug, Default)]
struct GrabState {
    grabs: RefCell<Vec<PointerDevice>>,
    releases: Cell<usize>,
}

/// A pointer grab that records every call. Clones share the record.
#[derive(Debug, Clone, Default)]
pub struct RecordingGrab {
    state: Rc<GrabState>,
}

impl RecordingGrab {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn grab_count(&self) -> usize {
        self.state.grabs.borrow().len()
    }

    #[must_use]
    pub fn release_count(&self) -> usize {
        self.state.releases.get()
    }

    #[must_use]
    pub fn last_device(&self) -> Option<PointerDevice> {
        self.state.grabs.borrow().last().copied()
    }

    /// Grabs minus releases. A well-behaved view ends every test at 0.
    #[must_use]
    pub fn active(&self) -> usize {
        self.grab_count() - self.release_count()
    }
}

impl PointerGrab for RecordingGrab {
    fn grab(&mut self, device: PointerDevice) {
        tracing::trace!(device = ?device, "fake capture grabbed");
        self.state.grabs.borrow_mut().push(device);
    }

    fn release(&mut self) {
        tracing::trace!("fake capture released");
        self.state.releases.set(self.state.releases.get() + 1);
    }
}

/// Deterministic component factory with a fixed layout per axis.
///
/// Horizontal preset: track at `(100, 40) 300×8`, 20×20 handles whose
/// offsets start at 30 and step by 60 per handle index. The vertical
/// preset is the same layout transposed. When the state enables the
/// scale, three labelled ticks (`0`, `50`, `100`) are laid out along the
/// track; the settings form sits well below the track so it never
/// shadows drag hit-tests.
pub struct FakeFactory {
    vertical: bool,
    renders: Rc<Cell<usize>>,
}

impl FakeFactory {
    #[must_use]
    pub fn horizontal() -> Self {
        Self {
            vertical: false,
            renders: Rc::default(),
        }
    }

    #[must_use]
    pub fn vertical() -> Self {
        Self {
            vertical: true,
            renders: Rc::default(),
        }
    }

    /// Shared counter incremented by every render pass on the track and
    /// handles this factory creates.
    #[must_use]
    pub fn render_counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.renders)
    }

    fn place(&self, along: f64, across: f64, length: f64, thickness: f64) -> Bounds {
        if self.vertical {
            Bounds::new(across, along, thickness, length)
        } else {
            Bounds::new(along, across, length, thickness)
        }
    }
}

impl ComponentFactory for FakeFactory {
    fn create_components(&self, anchor: &mut dyn Anchor, state: &SliderState) -> Registry {
        let mut registry = Registry::new();

        let track = FakeComponent::plain(names::TRACK, SharedBounds::new(self.place(100.0, 40.0, 300.0, 8.0)))
            .counting(Rc::clone(&self.renders));
        anchor.attach_child();
        registry.insert(names::TRACK, vec![track.boxed()]);

        let handles = state
            .value
            .iter()
            .enumerate()
            .map(|(id, value)| {
                anchor.attach_child();
                let along = 130.0 + 60.0 * id as f64;
                FakeComponent::handle(SharedBounds::new(self.place(along, 34.0, 20.0, 20.0)), *value)
                    .counting(Rc::clone(&self.renders))
                    .boxed()
            })
            .collect();
        registry.insert(names::HANDLE, handles);

        if state.scale_enabled {
            let ticks = [(100.0, "0"), (235.0, "50"), (370.0, "100")]
                .into_iter()
                .map(|(along, label)| {
                    anchor.attach_child();
                    FakeComponent::tick(SharedBounds::new(self.place(along, 60.0, 30.0, 16.0)), label)
                        .boxed()
                })
                .collect();
            registry.insert(names::SCALE, ticks);
        }

        let mut controls = vec![
            FormControl::new(
                "type",
                match state.kind {
                    SliderKind::Single => "single",
                    SliderKind::Range => "range",
                },
                Bounds::new(10.0, 410.0, 40.0, 20.0),
            ),
            FormControl::new(
                "from",
                format!("{}", state.value.first().copied().unwrap_or(state.min)),
                Bounds::new(60.0, 410.0, 40.0, 20.0),
            ),
            FormControl::new("step", format!("{}", state.step), Bounds::new(160.0, 410.0, 30.0, 20.0)),
        ];
        if state.kind == SliderKind::Range {
            controls.push(FormControl::new(
                "to",
                format!("{}", state.value.get(1).copied().unwrap_or(state.max)),
                Bounds::new(110.0, 410.0, 40.0, 20.0),
            ));
        }
        anchor.attach_child();
        registry.insert(
            names::SETTINGS,
            vec![
                FakeComponent::settings(SharedBounds::new(Bounds::new(0.0, 400.0, 200.0, 100.0)), controls)
                    .boxed(),
            ],
        );

        registry
    }
}

/// Subscribe a recorder to a view and return the shared event log.
#[must_use]
pub fn record_events(view: &mut SliderView) -> Rc<RefCell<Vec<ViewEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    view.subscribe(move |event| sink.borrow_mut().push(event.clone()));
    events
}
