// SPDX-License-Identifier: MPL-2.0
//! Quick input: a floating one-line prompt.

use super::handle::Handle;
use super::manager::{Binding, Manager};
use super::registry::{Callback, Hooks, Instance, SubmitCallback};
use crate::domain::overlay::{InstanceId, Kind};
use crate::surface::Surface;
use std::fmt;

/// Options for [`Manager::quick_input`].
#[derive(Default)]
pub struct QuickInputOptions {
    /// Defaults to the "type" placeholder label.
    pub placeholder: Option<String>,
    pub on_submit: Option<SubmitCallback>,
    pub on_cancel: Option<Callback>,
}

impl fmt::Debug for QuickInputOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuickInputOptions")
            .field("placeholder", &self.placeholder)
            .field("on_submit", &self.on_submit.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .finish()
    }
}

impl QuickInputOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn on_submit(mut self, callback: impl FnOnce(String) + 'static) -> Self {
        self.on_submit = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_cancel(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_cancel = Some(Box::new(callback));
        self
    }
}

impl<S: Surface> Manager<S> {
    /// Shows a floating input and focuses it.
    ///
    /// Enter or the send button submits; Escape cancels. Either way the
    /// prompt is removed.
    pub fn quick_input(&mut self, options: QuickInputOptions) -> Handle {
        let QuickInputOptions {
            placeholder,
            on_submit,
            on_cancel,
        } = options;
        let id = InstanceId::generate(Kind::QuickInput.id_prefix());
        let placeholder = placeholder.unwrap_or_else(|| self.labels.type_placeholder.clone());

        let wrap = self.surface.create_element("div");
        self.surface.add_class(wrap, "eph-quick-input");

        let input = self.surface.create_element("input");
        self.surface.add_class(input, "eph-input");
        self.surface.set_attribute(input, "placeholder", &placeholder);
        self.surface.append_child(wrap, input);

        let button = self.surface.create_element("button");
        self.surface.add_class(button, "eph-btn");
        self.surface.add_class(button, "eph-btn-primary");
        self.surface.set_text(button, &self.labels.send);
        self.surface.append_child(wrap, button);

        let body = self.surface.body();
        self.surface.append_child(body, wrap);
        self.surface.focus(input);

        self.bind(input, Binding::Field(id.clone()));
        self.bind(button, Binding::Submit(id.clone()));

        let mut instance =
            Instance::new(id, Kind::QuickInput, wrap).with_meta("placeholder", placeholder);
        instance.parts.input = Some(input);
        instance.hooks = Hooks::QuickInput {
            on_submit,
            on_cancel,
        };

        let id = self.register(instance, false, None);
        Handle::new(id, wrap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Document, Key, NodeId};
    use crate::ui::ephemeral::manager::Event;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, PartialEq)]
    enum Outcome {
        Submitted(String),
        Cancelled,
    }

    fn open(manager: &mut Manager<Document>) -> (Handle, NodeId, Rc<RefCell<Vec<Outcome>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let submit_log = Rc::clone(&log);
        let cancel_log = Rc::clone(&log);
        let handle = manager.quick_input(
            QuickInputOptions::new()
                .on_submit(move |value| submit_log.borrow_mut().push(Outcome::Submitted(value)))
                .on_cancel(move || cancel_log.borrow_mut().push(Outcome::Cancelled)),
        );
        let input = manager.surface().children(handle.element())[0];
        (handle, input, log)
    }

    #[test]
    fn input_is_focused_on_creation() {
        let mut manager = Manager::new(Document::new());
        let (_, input, _) = open(&mut manager);
        assert_eq!(manager.surface().focused(), Some(input));
        assert_eq!(manager.surface().attribute(input, "placeholder"), Some("Type..."));
    }

    #[test]
    fn enter_submits_current_value() {
        let mut manager = Manager::new(Document::new());
        let (handle, input, log) = open(&mut manager);
        manager.surface_mut().set_value(input, "rename me");

        manager.handle(Event::KeyDown {
            target: input,
            key: Key::Enter,
        });

        assert_eq!(*log.borrow(), vec![Outcome::Submitted("rename me".to_string())]);
        assert!(manager.get(handle.id()).is_none());
        assert!(!manager.surface().is_attached(handle.element()));
    }

    #[test]
    fn button_click_submits() {
        let mut manager = Manager::new(Document::new());
        let (handle, input, log) = open(&mut manager);
        manager.surface_mut().set_value(input, "via button");
        let button = manager.surface().children(handle.element())[1];

        manager.handle(Event::Click(button));
        assert_eq!(*log.borrow(), vec![Outcome::Submitted("via button".to_string())]);
        assert!(manager.registry().is_empty());
    }

    #[test]
    fn escape_cancels() {
        let mut manager = Manager::new(Document::new());
        let (handle, input, log) = open(&mut manager);

        manager.handle(Event::KeyDown {
            target: input,
            key: Key::Escape,
        });
        manager.handle(Event::KeyDown {
            target: input,
            key: Key::Escape,
        });

        assert_eq!(*log.borrow(), vec![Outcome::Cancelled]);
        assert!(manager.get(handle.id()).is_none());
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut manager = Manager::new(Document::new());
        let (handle, input, log) = open(&mut manager);

        manager.handle(Event::KeyDown {
            target: input,
            key: Key::Character("a".to_string()),
        });
        assert!(log.borrow().is_empty());
        assert!(manager.get(handle.id()).is_some());
    }

    #[test]
    fn remove_skips_callbacks() {
        let mut manager = Manager::new(Document::new());
        let (handle, _, log) = open(&mut manager);

        assert!(handle.remove(&mut manager));
        assert!(!handle.remove(&mut manager));
        assert!(log.borrow().is_empty());
        assert!(!manager.surface().is_attached(handle.element()));
    }
}
