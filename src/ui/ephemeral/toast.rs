// SPDX-License-Identifier: MPL-2.0
//! Toasts: short stacked notices that fade in and out.

use super::handle::{Handle, ToastHandle};
use super::manager::{Binding, Manager};
use super::registry::Instance;
use crate::domain::overlay::{Anchor, InstanceId, Kind, Tone};
use crate::surface::Surface;
use crate::ui::design_tokens::{to_hex, tone_color};
use std::time::Duration;

/// Options for [`Manager::toast`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastOptions {
    pub message: String,
    pub tone: Tone,
    /// Defaults to the manager's default duration.
    pub duration: Option<Duration>,
    pub anchor: Anchor,
    /// Adds a close button.
    pub closable: bool,
    /// Leading icon text.
    pub icon: Option<String>,
}

impl ToastOptions {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
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

    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

impl<S: Surface> Manager<S> {
    /// Shows a toast in the container for `options.anchor`.
    pub fn toast(&mut self, options: ToastOptions) -> ToastHandle {
        let id = InstanceId::generate(Kind::Toast.id_prefix());
        let container = self.container(options.anchor);

        let el = self.surface.create_element("div");
        self.surface.add_class(el, "eph-toast");
        self.surface.set_style(
            el,
            "border-left",
            &format!("4px solid {}", to_hex(tone_color(options.tone))),
        );

        if let Some(icon) = &options.icon {
            let icon_node = self.surface.create_element("span");
            self.surface.add_class(icon_node, "eph-icon");
            self.surface.set_text(icon_node, icon);
            self.surface.append_child(el, icon_node);
        }

        let msg = self.surface.create_element("span");
        self.surface.add_class(msg, "eph-msg");
        self.surface.set_text(msg, &options.message);
        self.surface.append_child(el, msg);

        if options.closable {
            let close = self.surface.create_element("span");
            self.surface.add_class(close, "eph-close");
            self.surface.set_text(close, "✕");
            self.surface.set_attribute(close, "aria-label", &self.labels.close);
            self.surface.append_child(el, close);
            self.bind(close, Binding::Close(id.clone()));
        }

        self.surface.append_child(container, el);

        let mut instance = Instance::new(id, Kind::Toast, el)
            .with_meta("message", options.message)
            .with_meta("type", options.tone.as_str());
        instance.parts.text = Some(msg);

        let lifetime = options.duration.unwrap_or(self.settings.default_duration);
        let id = self.register(instance, true, Some(lifetime));
        ToastHandle(Handle::new(id, el))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_DURATION_MS, FRAME_INTERVAL_MS, TOAST_EXIT_MS};
    use crate::surface::Document;
    use crate::ui::ephemeral::manager::Event;

    fn manager() -> Manager<Document> {
        Manager::new(Document::new())
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn toast_lands_in_anchor_container() {
        let mut manager = manager();
        let toast = manager.toast(ToastOptions::new("Saved").anchor(Anchor::Top));

        let doc = manager.surface();
        let container = doc.query(".eph-top").expect("top container exists");
        assert_eq!(doc.parent(toast.element()), Some(container));
        assert_eq!(toast.id().prefix(), "toast");
    }

    #[test]
    fn show_class_is_added_on_next_frame() {
        let mut manager = manager();
        let toast = manager.toast(ToastOptions::new("Hi"));
        assert!(!manager.surface().has_class(toast.element(), "show"));

        manager.advance(ms(FRAME_INTERVAL_MS));
        assert!(manager.surface().has_class(toast.element(), "show"));
    }

    #[test]
    fn toast_expires_after_default_duration_plus_exit() {
        let mut manager = manager();
        let toast = manager.toast(ToastOptions::new("Bye"));

        manager.advance(ms(DEFAULT_DURATION_MS));
        let instance = manager.get(toast.id()).expect("still registered while leaving");
        assert!(instance.is_leaving());
        assert!(!manager.surface().has_class(toast.element(), "show"));

        manager.advance(ms(TOAST_EXIT_MS));
        assert!(manager.get(toast.id()).is_none());
        assert!(!manager.surface().is_attached(toast.element()));
    }

    #[test]
    fn remove_twice_is_a_no_op() {
        let mut manager = manager();
        let toast = manager.toast(ToastOptions::new("Once"));

        assert!(toast.remove(&mut manager));
        assert!(!toast.remove(&mut manager));
        manager.advance(ms(TOAST_EXIT_MS));

        assert!(manager.registry().is_empty());
        assert!(!manager.surface().is_attached(toast.element()));
        assert!(!toast.remove(&mut manager));
        assert_eq!(manager.surface().pending_wakeups(), 0);
    }

    #[test]
    fn update_changes_only_message_text() {
        let mut manager = manager();
        let toast = manager.toast(ToastOptions::new("Before").tone(Tone::Success));
        manager.advance(ms(FRAME_INTERVAL_MS));

        let doc = manager.surface();
        let classes_before = doc.classes(toast.element()).to_vec();
        let parent_before = doc.parent(toast.element());
        let border_before = doc.style(toast.element(), "border-left").map(str::to_string);

        assert!(toast.update(&mut manager, "X"));

        let doc = manager.surface();
        let msg = doc.find_child_with_class(toast.element(), "eph-msg").expect("message node");
        assert_eq!(doc.text(msg), Some("X"));
        assert_eq!(doc.classes(toast.element()), classes_before.as_slice());
        assert_eq!(doc.parent(toast.element()), parent_before);
        assert_eq!(
            doc.style(toast.element(), "border-left").map(str::to_string),
            border_before
        );
    }

    #[test]
    fn close_button_dismisses_and_cancels_timer() {
        let mut manager = manager();
        let toast = manager.toast(ToastOptions::new("Closable").closable(true));
        let close = manager
            .surface()
            .find_child_with_class(toast.element(), "eph-close")
            .expect("close button");

        manager.handle(Event::Click(close));
        manager.advance(ms(TOAST_EXIT_MS));

        assert!(manager.get(toast.id()).is_none());
        assert_eq!(manager.surface().pending_wakeups(), 0);
    }

    #[test]
    fn tone_sets_accent_border() {
        let mut manager = manager();
        let toast = manager.toast(ToastOptions::new("Oops").tone(Tone::Error));
        assert_eq!(
            manager.surface().style(toast.element(), "border-left"),
            Some("4px solid #ef4444")
        );
    }

    #[test]
    fn icon_precedes_message() {
        let mut manager = manager();
        let toast = manager.toast(ToastOptions::new("Starred").icon("★"));
        let doc = manager.surface();
        let children = doc.children(toast.element());
        assert!(doc.has_class(children[0], "eph-icon"));
        assert!(doc.has_class(children[1], "eph-msg"));
    }
}
