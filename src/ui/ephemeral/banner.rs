// SPDX-License-Identifier: MPL-2.0
//! Banners: notices pinned to the top of the page.

use super::handle::Handle;
use super::manager::Manager;
use super::registry::Instance;
use crate::config::DEFAULT_BANNER_DURATION_MS;
use crate::domain::overlay::{InstanceId, Kind, Tone};
use crate::surface::Surface;
use crate::ui::design_tokens::{banner_tint, to_hex};
use std::time::Duration;

/// Options for [`Manager::banner`].
#[derive(Debug, Clone, PartialEq)]
pub struct BannerOptions {
    pub text: String,
    pub tone: Tone,
    /// Zero keeps the banner until it is removed.
    pub duration: Duration,
}

impl Default for BannerOptions {
    fn default() -> Self {
        Self {
            text: String::new(),
            tone: Tone::default(),
            duration: Duration::from_millis(DEFAULT_BANNER_DURATION_MS),
        }
    }
}

impl BannerOptions {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
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
        self.duration = duration;
        self
    }
}

impl<S: Surface> Manager<S> {
    /// Shows a banner directly under `body`.
    pub fn banner(&mut self, options: BannerOptions) -> Handle {
        let id = InstanceId::generate(Kind::Banner.id_prefix());

        let el = self.surface.create_element("div");
        self.surface.add_class(el, "eph-banner");
        if let Some(tint) = banner_tint(options.tone) {
            self.surface.set_style(el, "background", &to_hex(tint));
        }
        let row = self.surface.create_element("div");
        let strong = self.surface.create_element("strong");
        self.surface.set_text(strong, &options.text);
        self.surface.append_child(row, strong);
        self.surface.append_child(el, row);

        let body = self.surface.body();
        self.surface.append_child(body, el);

        let mut instance = Instance::new(id, Kind::Banner, el)
            .with_meta("text", options.text)
            .with_meta("type", options.tone.as_str());
        instance.parts.text = Some(strong);

        let lifetime = (!options.duration.is_zero()).then_some(options.duration);
        let id = self.register(instance, true, lifetime);
        Handle::new(id, el)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Document;

    #[test]
    fn zero_duration_banner_persists() {
        let mut manager = Manager::new(Document::new());
        let banner = manager.banner(BannerOptions::new("Maintenance tonight"));

        manager.advance(Duration::from_secs(3600));
        assert!(manager.get(banner.id()).is_some());
        assert!(manager.surface().has_class(banner.element(), "show"));
        assert_eq!(manager.surface().pending_wakeups(), 0);
    }

    #[test]
    fn positive_duration_banner_expires() {
        let mut manager = Manager::new(Document::new());
        let banner = manager.banner(BannerOptions::new("Brief").duration(Duration::from_millis(500)));

        manager.advance(Duration::from_millis(500));
        assert!(manager.get(banner.id()).is_none());
        assert!(!manager.surface().is_attached(banner.element()));
    }

    #[test]
    fn warn_and_error_banners_are_tinted() {
        let mut manager = Manager::new(Document::new());
        let warn = manager.banner(BannerOptions::new("Careful").tone(Tone::Warn));
        let info = manager.banner(BannerOptions::new("FYI"));

        let doc = manager.surface();
        assert_eq!(doc.style(warn.element(), "background"), Some("#fffbeb"));
        assert_eq!(doc.style(info.element(), "background"), None);
        assert_eq!(doc.parent(warn.element()), Some(doc.body()));
    }

    #[test]
    fn remove_is_immediate_and_idempotent() {
        let mut manager = Manager::new(Document::new());
        let banner = manager.banner(BannerOptions::new("Bye"));

        assert!(banner.remove(&mut manager));
        assert!(!banner.remove(&mut manager));
        assert!(!manager.surface().is_attached(banner.element()));
        assert!(manager.registry().is_empty());
    }
}
