#![forbid(unsafe_code)]

//! The notification bridge.
//!
//! A minimal subscribe/notify mechanism decoupling the gesture engine
//! from whatever controller owns authoritative slider state. Delivery is
//! synchronous and in subscription order; the engine never waits on a
//! subscriber.

use ahash::HashMap;
use glider_core::state::{ActionTag, AppData};

/// Payload of the construction-completion notification.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePayload {
    pub data: AppData,
    pub action: ActionTag,
}

/// Payload of a drag-step notification (press or move).
#[derive(Debug, Clone, PartialEq)]
pub struct GesturePayload {
    pub data: AppData,
    /// Per-handle pixel values, the gesture handle's entry replaced by
    /// the pointer position.
    pub px_values: Vec<f64>,
    pub action: ActionTag,
}

/// Payload of a direct value pick on the scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalePayload {
    pub data: AppData,
    /// The full logical handle-value sequence with the picked value
    /// spliced in at the nearest handle's index.
    pub values: Vec<f64>,
    pub action: ActionTag,
}

/// A committed settings-form value: numeric when it parses, raw text
/// otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Number(f64),
    Text(String),
}

/// Payload of a settings-form commit.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsPayload {
    /// Every remaining form field by name. The raw `from`/`to` entries
    /// are removed after deriving `value`.
    pub fields: HashMap<String, SettingValue>,
    /// `[from]` for a single slider, `[from, to]` for a range.
    pub value: Vec<f64>,
    pub action: ActionTag,
}

/// Notifications published to the external controller.
///
/// For one drag gesture the bridge publishes exactly one `Touch`,
/// then zero or more `Move`s; release is silent.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// Construction finished; the controller may issue the first render.
    FinishCreate(CreatePayload),

    /// A drag session opened (the press step).
    Touch(GesturePayload),

    /// A drag step moved the pointer.
    Move(GesturePayload),

    /// A scale tick was picked directly; no session was opened.
    Scale(ScalePayload),

    /// The settings form committed; the controller should re-create.
    Settings(SettingsPayload),
}

type Subscriber = Box<dyn FnMut(&ViewEvent)>;

/// Subscribe/notify hub for [`ViewEvent`]s.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Subscriber>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber. Subscribers are retained for the lifetime
    /// of the bus and invoked in subscription order.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&ViewEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Deliver an event to every subscriber, synchronously.
    pub fn notify(&mut self, event: &ViewEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn create_event() -> ViewEvent {
        ViewEvent::FinishCreate(CreatePayload {
            data: AppData {
                handle_id: 0,
                limit: 300.0,
                handle_size: 20.0,
            },
            action: ActionTag::SliderCreated,
        })
    }

    #[test]
    fn notify_reaches_all_subscribers_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        for tag in ["first", "second"] {
            let seen = Rc::clone(&seen);
            bus.subscribe(move |_| seen.borrow_mut().push(tag));
        }

        bus.notify(&create_event());
        assert_eq!(*seen.borrow(), vec!["first", "second"]);
        assert_eq!(bus.subscriber_count(), 2);
    }

    #[test]
    fn subscriber_sees_the_payload() {
        let last = Rc::new(RefCell::new(None));
        let mut bus = EventBus::new();
        {
            let last = Rc::clone(&last);
            bus.subscribe(move |event| *last.borrow_mut() = Some(event.clone()));
        }

        bus.notify(&create_event());
        assert_eq!(*last.borrow(), Some(create_event()));
    }
}
