// SPDX-License-Identifier: MPL-2.0
//! Badges pinned to a target's top-right corner.

use super::handle::Handle;
use super::manager::Manager;
use super::registry::Instance;
use super::tooltip::Target;
use crate::domain::overlay::{InstanceId, Kind};
use crate::surface::Surface;
use crate::ui::placement::{badge_position, place};
use std::time::Duration;

/// Options for [`Manager::badge`].
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeOptions {
    pub target: Target,
    pub text: String,
    /// Defaults to the manager's badge duration.
    pub duration: Option<Duration>,
}

impl BadgeOptions {
    #[must_use]
    pub fn new(target: impl Into<Target>, text: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            text: text.into(),
            duration: None,
        }
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

impl<S: Surface> Manager<S> {
    /// Shows a badge on the target. Returns `None` when it cannot be found.
    pub fn badge(&mut self, options: BadgeOptions) -> Option<Handle> {
        let target = options.target.resolve(&self.surface)?;
        let id = InstanceId::generate(Kind::Badge.id_prefix());

        let el = self.surface.create_element("div");
        self.surface.add_class(el, "eph-badge");
        self.surface.set_text(el, &options.text);
        let body = self.surface.body();
        self.surface.append_child(body, el);

        let origin = badge_position(self.surface.bounding_box(target));
        place(&mut self.surface, el, origin, None);

        let instance = Instance::new(id, Kind::Badge, el)
            .with_meta("target", target)
            .with_meta("text", options.text);
        let lifetime = options.duration.unwrap_or(self.settings.badge_duration);
        let id = self.register(instance, false, Some(lifetime));
        Some(Handle::new(id, el))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BADGE_DURATION_MS;
    use crate::surface::Document;
    use crate::test_utils::{attach_target, rect};

    #[test]
    fn badge_sits_on_top_right_corner() {
        let mut doc = Document::new();
        attach_target(&mut doc, "inbox", rect(10.0, 50.0, 100.0, 20.0));
        let mut manager = Manager::new(doc);

        let badge = manager.badge(BadgeOptions::new("#inbox", "3")).expect("target exists");
        let doc = manager.surface();
        assert_eq!(doc.style_number(badge.element(), "left"), Some(96.0));
        assert_eq!(doc.style_number(badge.element(), "top"), Some(44.0));
        assert_eq!(doc.text(badge.element()), Some("3"));
    }

    #[test]
    fn badge_expires() {
        let mut doc = Document::new();
        let target = doc.create_element("div");
        doc.append_child(doc.body(), target);
        let mut manager = Manager::new(doc);

        let badge = manager.badge(BadgeOptions::new(target, "new")).expect("target exists");
        manager.advance(Duration::from_millis(DEFAULT_BADGE_DURATION_MS));
        assert!(manager.get(badge.id()).is_none());
        assert!(!manager.surface().is_attached(badge.element()));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut doc = Document::new();
        let target = attach_target(&mut doc, "cart", rect(0.0, 0.0, 40.0, 40.0));
        let mut manager = Manager::new(doc);

        let badge = manager.badge(BadgeOptions::new(target, "2")).expect("target exists");
        assert!(badge.remove(&mut manager));
        assert!(!badge.remove(&mut manager));
        assert!(manager.get(badge.id()).is_none());
        assert!(!manager.surface().is_attached(badge.element()));
        assert!(manager.surface().is_attached(target));
        assert_eq!(manager.surface().pending_wakeups(), 0);
    }

    #[test]
    fn missing_target_returns_none() {
        let mut manager = Manager::new(Document::new());
        assert!(manager.badge(BadgeOptions::new(".ghost", "1")).is_none());
    }
}
