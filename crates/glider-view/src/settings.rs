#![forbid(unsafe_code)]

//! The settings gesture: a debounced, blur-committed secondary path.
//!
//! Pressing a form control arms a one-shot latch; the commit happens on
//! the next blur, reading every control live. The latch is an explicit
//! two-state machine so the debounce is auditable: re-pressing while
//! armed does nothing, and commit always resets to idle.

use ahash::HashMap;
use glider_core::geometry::Point;
use glider_core::state::ActionTag;

use crate::component::names;
use crate::coords::ViewContext;
use crate::error::ViewError;
use crate::observer::{SettingValue, SettingsPayload};

/// The settings debounce latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsLatch {
    #[default]
    Idle,
    Armed,
}

impl SettingsLatch {
    #[must_use]
    pub fn is_armed(self) -> bool {
        self == Self::Armed
    }

    /// Arm the latch. Returns `false` when it was already armed
    /// (the repeated press is a no-op).
    pub fn arm(&mut self) -> bool {
        if self.is_armed() {
            return false;
        }
        *self = Self::Armed;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

/// Whether a press at `point` landed on one of the settings form's
/// controls. Presses elsewhere in the form never arm the latch.
pub(crate) fn press_on_control(ctx: &ViewContext<'_>, point: Point) -> Result<bool, ViewError> {
    let settings = ctx.registry().first(names::SETTINGS)?;
    let Some(controls) = settings.controls() else {
        return Ok(false);
    };
    Ok(controls.iter().any(|control| control.bounds.contains(point)))
}

/// Read the settings form and build the commit payload.
///
/// Every control's value is numeric-coerced when it parses. The logical
/// `value` sequence is derived from `from` (and `to` for a range, as
/// declared by the form's own `type` field); the raw keys are removed
/// from the payload afterwards.
pub(crate) fn commit(ctx: &ViewContext<'_>) -> Result<SettingsPayload, ViewError> {
    let settings = ctx
        .registry()
        .first(names::SETTINGS)
        .map_err(|_| ViewError::SettingsMissing)?;
    let controls = settings.controls().ok_or(ViewError::SettingsMissing)?;

    let mut fields: HashMap<String, SettingValue> = HashMap::default();
    for control in controls {
        let value = match control.value.trim().parse::<f64>() {
            Ok(number) => SettingValue::Number(number),
            Err(_) => SettingValue::Text(control.value),
        };
        fields.insert(control.name, value);
    }

    let single = matches!(
        fields.get("type"),
        Some(SettingValue::Text(kind)) if kind == "single"
    );
    let value_fields: &[&str] = if single { &["from"] } else { &["from", "to"] };

    let mut value = Vec::with_capacity(value_fields.len());
    for field in value_fields {
        match fields.remove(*field) {
            Some(SettingValue::Number(number)) => value.push(number),
            _ => {
                return Err(ViewError::MalformedSettings {
                    field: (*field).into(),
                });
            }
        }
    }

    Ok(SettingsPayload {
        fields,
        value,
        action: ActionTag::RecreateApp,
    })
}
