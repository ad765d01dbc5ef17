// SPDX-License-Identifier: MPL-2.0
//! Snackbars: toasts with an optional action button.

use super::handle::Handle;
use super::manager::{Binding, Manager};
use super::registry::{Callback, Hooks, Instance};
use crate::domain::overlay::{Anchor, InstanceId, Kind};
use crate::surface::Surface;
use std::fmt;
use std::time::Duration;

/// Options for [`Manager::snackbar`].
#[derive(Default)]
pub struct SnackbarOptions {
    pub message: String,
    pub action_text: Option<String>,
    pub on_action: Option<Callback>,
    /// Defaults to the manager's snackbar duration.
    pub duration: Option<Duration>,
    pub anchor: Anchor,
}

impl fmt::Debug for SnackbarOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnackbarOptions")
            .field("message", &self.message)
            .field("action_text", &self.action_text)
            .field("duration", &self.duration)
            .field("anchor", &self.anchor)
            .finish_non_exhaustive()
    }
}

impl SnackbarOptions {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Adds an action button running `on_action` before the snackbar closes.
    #[must_use]
    pub fn action(mut self, text: impl Into<String>, on_action: impl FnOnce() + 'static) -> Self {
        self.action_text = Some(text.into());
        self.on_action = Some(Box::new(on_action));
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }
}

impl<S: Surface> Manager<S> {
    /// Shows a snackbar. It closes without an exit transition.
    pub fn snackbar(&mut self, options: SnackbarOptions) -> Handle {
        let SnackbarOptions {
            message,
            action_text,
            on_action,
            duration,
            anchor,
        } = options;

        let id = InstanceId::generate(Kind::Snackbar.id_prefix());
        let container = self.container(anchor);

        let el = self.surface.create_element("div");
        self.surface.add_class(el, "eph-snackbar");

        let msg = self.surface.create_element("span");
        self.surface.add_class(msg, "eph-msg");
        self.surface.set_text(msg, &message);
        self.surface.append_child(el, msg);

        let action_label = action_text.filter(|text| !text.is_empty());
        if let Some(text) = &action_label {
            let button = self.surface.create_element("button");
            self.surface.add_class(button, "eph-action");
            self.surface.set_text(button, text);
            self.surface.append_child(el, button);
            self.bind(button, Binding::Action(id.clone()));
        }

        self.surface.append_child(container, el);

        let mut instance = Instance::new(id, Kind::Snackbar, el)
            .with_meta("message", message)
            .with_meta("action_text", action_label.unwrap_or_default());
        instance.parts.text = Some(msg);
        instance.hooks = Hooks::Action(on_action);

        let lifetime = duration.unwrap_or(self.settings.snackbar_duration);
        let id = self.register(instance, true, Some(lifetime));
        Handle::new(id, el)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SNACKBAR_DURATION_MS;
    use crate::surface::Document;
    use crate::ui::ephemeral::manager::Event;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn action_runs_callback_then_dismisses() {
        let mut manager = Manager::new(Document::new());
        let clicked = Rc::new(Cell::new(0));
        let seen = Rc::clone(&clicked);
        let snack = manager.snackbar(
            SnackbarOptions::new("Deleted").action("Undo", move || seen.set(seen.get() + 1)),
        );
        let button = manager
            .surface()
            .find_child_with_class(snack.element(), "eph-action")
            .expect("action button");

        manager.handle(Event::Click(button));
        manager.handle(Event::Click(button));

        assert_eq!(clicked.get(), 1);
        assert!(manager.get(snack.id()).is_none());
        assert!(!manager.surface().is_attached(snack.element()));
    }

    #[test]
    fn snackbar_without_action_has_no_button() {
        let mut manager = Manager::new(Document::new());
        let snack = manager.snackbar(SnackbarOptions::new("Plain"));
        assert!(manager
            .surface()
            .find_child_with_class(snack.element(), "eph-action")
            .is_none());
    }

    #[test]
    fn remove_detaches_immediately() {
        let mut manager = Manager::new(Document::new());
        let snack = manager.snackbar(SnackbarOptions::new("Gone"));

        assert!(snack.remove(&mut manager));
        assert!(!snack.remove(&mut manager));
        assert!(!manager.surface().is_attached(snack.element()));
        assert!(manager.registry().is_empty());
    }

    #[test]
    fn expires_after_snackbar_duration() {
        let mut manager = Manager::new(Document::new());
        let snack = manager.snackbar(SnackbarOptions::new("Later"));

        manager.advance(Duration::from_millis(DEFAULT_SNACKBAR_DURATION_MS - 1));
        assert!(manager.get(snack.id()).is_some());
        manager.advance(Duration::from_millis(1));
        assert!(manager.get(snack.id()).is_none());
    }
}
