#![forbid(unsafe_code)]

//! View-engine errors.
//!
//! Every failure here indicates a construction or wiring defect, not a
//! transient condition, so there are no retry paths: errors propagate
//! synchronously to the caller and abort the current operation. The drag
//! session guard guarantees pointer capture is still released exactly
//! once even when a handler errors mid-gesture.

use std::fmt;

/// Errors raised by registry lookups, coordinate resolution, and gesture
/// handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// No component is registered under the given name.
    UnknownComponent { name: String },

    /// The name is registered but has zero instances.
    NoInstances { name: String },

    /// Lookup before `create` populated the registry.
    EmptyRegistry,

    /// A settings gesture fired but no settings form exists.
    SettingsMissing,

    /// A press or move event carried no active contact point.
    MissingPointer,

    /// A scale tick label did not parse as a number.
    BadLabel { text: String },

    /// A component that must expose a logical value does not.
    MissingValue { name: String },

    /// A committed settings field is missing or not numeric.
    MalformedSettings { field: String },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownComponent { name } => {
                write!(f, "no component registered under name '{name}'")
            }
            Self::NoInstances { name } => write!(f, "component '{name}' has no instances"),
            Self::EmptyRegistry => write!(f, "components have not been created yet"),
            Self::SettingsMissing => write!(f, "settings form is not part of this slider"),
            Self::MissingPointer => write!(f, "pointer event carries no active contact point"),
            Self::BadLabel { text } => write!(f, "scale label '{text}' is not numeric"),
            Self::MissingValue { name } => write!(f, "component '{name}' exposes no value"),
            Self::MalformedSettings { field } => {
                write!(f, "settings field '{field}' is missing or not numeric")
            }
        }
    }
}

impl std::error::Error for ViewError {}

#[cfg(test)]
mod tests {
    use super::ViewError;

    #[test]
    fn display_names_the_component() {
        let err = ViewError::UnknownComponent {
            name: "scale".into(),
        };
        assert_eq!(err.to_string(), "no component registered under name 'scale'");
    }

    #[test]
    fn display_names_the_field() {
        let err = ViewError::MalformedSettings { field: "to".into() };
        assert!(err.to_string().contains("'to'"));
    }
}
