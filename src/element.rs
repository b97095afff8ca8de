//! Capabilities the binders consume from the UI layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binders never touch the DOM directly. They work against these traits,
//! which the browser adapter in [`crate::web`] implements for `web-sys`
//! elements and which tests implement with in-memory fakes. Handles are
//! cheap to clone and mutate through `&self`, like DOM element references.

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use crate::error::FormError;

/// Event kinds the binders listen for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldEvent {
    /// Fired when an edited value is committed (typically on blur).
    Change,
    /// Fired on every edit.
    Input,
}

impl FieldEvent {
    /// DOM event name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Change => "change",
            Self::Input => "input",
        }
    }
}

/// Callback invoked when a registered event fires.
pub type Handler = Box<dyn FnMut()>;

/// A text-bearing input whose value can be read and replaced.
pub trait TextField {
    /// Current text of the field.
    fn value(&self) -> String;
    /// Replace the field's text.
    fn set_value(&self, value: &str);
}

/// Something that emits [`FieldEvent`]s.
pub trait EventSource {
    /// Register `handler` to run each time `event` fires.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Listener`] when the UI layer refuses the registration.
    fn listen(&self, event: FieldEvent, handler: Handler) -> Result<(), FormError>;
}

/// A gauge displaying a bounded number.
pub trait MeterTarget {
    fn set_meter(&self, value: f64);
}

/// An element displaying a short text label.
pub trait LabelTarget {
    fn set_label(&self, text: &str);
}
