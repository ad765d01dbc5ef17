// SPDX-License-Identifier: MPL-2.0
//! Progress toasts: a labelled bar with no lifetime of its own.

use super::handle::{Handle, ProgressHandle};
use super::manager::Manager;
use super::registry::Instance;
use crate::domain::overlay::{Anchor, InstanceId, Kind};
use crate::domain::ui::newtypes::ProgressPercent;
use crate::surface::Surface;

/// Options for [`Manager::progress`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressOptions {
    /// Defaults to the "working" label.
    pub text: Option<String>,
    pub anchor: Anchor,
}

impl ProgressOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }
}

impl<S: Surface> Manager<S> {
    /// Shows a progress toast at 0%.
    ///
    /// It stays until [`ProgressHandle::complete`] or a removal.
    pub fn progress(&mut self, options: ProgressOptions) -> ProgressHandle {
        let id = InstanceId::generate(Kind::Progress.id_prefix());
        let container = self.container(options.anchor);
        let text = options.text.unwrap_or_else(|| self.labels.working.clone());

        let el = self.surface.create_element("div");
        self.surface.add_class(el, "eph-toast");
        self.surface.add_class(el, "eph-progress");

        let label = self.surface.create_element("span");
        self.surface.add_class(label, "eph-progress-text");
        self.surface.set_text(label, &text);
        self.surface.append_child(el, label);

        let start = ProgressPercent::default();
        let bar = self.surface.create_element("div");
        self.surface.add_class(bar, "eph-progress-bar");
        self.surface
            .set_style(bar, "width", &format!("{}%", start.bar_width()));
        self.surface.append_child(el, bar);

        self.surface.append_child(container, el);

        let mut instance = Instance::new(id, Kind::Progress, el)
            .with_meta("text", text)
            .with_meta("progress", start.value());
        instance.parts.text = Some(label);
        instance.parts.bar = Some(bar);

        let id = self.register(instance, true, None);
        ProgressHandle(Handle::new(id, el))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TOAST_EXIT_MS;
    use crate::surface::{Document, NodeId};
    use crate::ui::ephemeral::manager::InstanceUpdate;
    use std::time::Duration;

    fn bar_width(manager: &Manager<Document>, progress: &ProgressHandle) -> f32 {
        let doc = manager.surface();
        let bar: NodeId = doc
            .find_child_with_class(progress.element(), "eph-progress-bar")
            .expect("bar exists");
        doc.style_number(bar, "width").expect("width set")
    }

    #[test]
    fn update_clamps_stored_percent() {
        let mut manager = Manager::new(Document::new());
        let progress = manager.progress(ProgressOptions::new());

        assert_eq!(progress.update(&mut manager, 150.0), Some(100.0));
        assert_eq!(progress.percent(&manager), Some(100.0));

        assert_eq!(progress.update(&mut manager, -20.0), Some(0.0));
        assert_eq!(progress.percent(&manager), Some(0.0));
    }

    #[test]
    fn bar_never_drawn_below_floor() {
        let mut manager = Manager::new(Document::new());
        let progress = manager.progress(ProgressOptions::new());
        assert_eq!(bar_width(&manager, &progress), 30.0);

        for (pct, expected) in [(-20.0, 30.0), (10.0, 30.0), (55.0, 55.0), (150.0, 100.0)] {
            progress.update(&mut manager, pct);
            assert_eq!(bar_width(&manager, &progress), expected);
        }
    }

    #[test]
    fn generic_update_shares_clamping() {
        let mut manager = Manager::new(Document::new());
        let progress = manager.progress(ProgressOptions::new());

        assert!(manager.update(progress.id(), InstanceUpdate::progress(250.0)));
        assert_eq!(progress.percent(&manager), Some(100.0));
        assert_eq!(bar_width(&manager, &progress), 100.0);
    }

    #[test]
    fn progress_has_no_lifetime() {
        let mut manager = Manager::new(Document::new());
        let progress = manager.progress(ProgressOptions::new().text("Uploading"));
        manager.advance(Duration::from_secs(600));
        assert!(manager.get(progress.id()).is_some());
    }

    #[test]
    fn complete_fades_then_detaches() {
        let mut manager = Manager::new(Document::new());
        let progress = manager.progress(ProgressOptions::new());

        assert!(progress.complete(&mut manager));
        assert!(!progress.complete(&mut manager));
        assert!(manager.get(progress.id()).is_some());

        manager.advance(Duration::from_millis(TOAST_EXIT_MS));
        assert!(manager.get(progress.id()).is_none());
        assert!(!manager.surface().is_attached(progress.element()));
        assert_eq!(progress.update(&mut manager, 50.0), None);
    }

    #[test]
    fn default_label_comes_from_labels() {
        let mut manager = Manager::new(Document::new());
        let progress = manager.progress(ProgressOptions::new());
        let doc = manager.surface();
        let label = doc
            .find_child_with_class(progress.element(), "eph-progress-text")
            .expect("label");
        assert_eq!(doc.text(label), Some("Working..."));
    }
}
