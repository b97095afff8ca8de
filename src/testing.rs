//! In-memory element fakes for binder tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::element::{EventSource, FieldEvent, Handler, LabelTarget, MeterTarget, TextField};
use crate::error::FormError;

#[derive(Default)]
struct FieldState {
    value: String,
    handlers: HashMap<FieldEvent, Vec<Handler>>,
}

/// Text input fake. Clones share state, like DOM element references.
#[derive(Clone, Default)]
pub struct FakeField {
    state: Rc<RefCell<FieldState>>,
    refuse_listeners: bool,
}

impl FakeField {
    pub fn with_value(value: &str) -> Self {
        let field = Self::default();
        field.state.borrow_mut().value = value.to_owned();
        field
    }

    /// A field whose listener registration always fails.
    pub fn refusing_listeners(value: &str) -> Self {
        let mut field = Self::with_value(value);
        field.refuse_listeners = true;
        field
    }

    pub fn listener_count(&self, event: FieldEvent) -> usize {
        self.state.borrow().handlers.get(&event).map_or(0, Vec::len)
    }

    /// Simulate the user typing: replace the value without firing events.
    pub fn type_text(&self, value: &str) {
        self.state.borrow_mut().value = value.to_owned();
    }

    /// Fire `event`, running every registered handler.
    pub fn fire(&self, event: FieldEvent) {
        // Handlers read the field, so they cannot run while the state is borrowed.
        let mut handlers = self.state.borrow_mut().handlers.remove(&event).unwrap_or_default();
        for handler in &mut handlers {
            handler();
        }
        self.state.borrow_mut().handlers.entry(event).or_default().extend(handlers);
    }
}

impl TextField for FakeField {
    fn value(&self) -> String {
        self.state.borrow().value.clone()
    }

    fn set_value(&self, value: &str) {
        self.state.borrow_mut().value = value.to_owned();
    }
}

impl EventSource for FakeField {
    fn listen(&self, event: FieldEvent, handler: Handler) -> Result<(), FormError> {
        if self.refuse_listeners {
            return Err(FormError::Listener(format!("{} refused", event.as_str())));
        }
        self.state.borrow_mut().handlers.entry(event).or_default().push(handler);
        Ok(())
    }
}

/// Meter fake recording the last value set.
#[derive(Clone, Default)]
pub struct FakeMeter(Rc<RefCell<Option<f64>>>);

impl FakeMeter {
    pub fn value(&self) -> Option<f64> {
        *self.0.borrow()
    }
}

impl MeterTarget for FakeMeter {
    fn set_meter(&self, value: f64) {
        *self.0.borrow_mut() = Some(value);
    }
}

/// Label fake recording the current text.
#[derive(Clone, Default)]
pub struct FakeLabel(Rc<RefCell<String>>);

impl FakeLabel {
    pub fn with_text(text: &str) -> Self {
        let label = Self::default();
        label.set_label(text);
        label
    }

    pub fn text(&self) -> String {
        self.0.borrow().clone()
    }
}

impl LabelTarget for FakeLabel {
    fn set_label(&self, text: &str) {
        *self.0.borrow_mut() = text.to_owned();
    }
}
