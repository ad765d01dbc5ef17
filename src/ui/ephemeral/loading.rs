// SPDX-License-Identifier: MPL-2.0
//! Blocking loading overlay. At most one per manager.

use super::manager::Manager;
use crate::surface::Surface;

impl<S: Surface> Manager<S> {
    /// Shows or hides the loading overlay.
    ///
    /// Showing while already shown changes nothing, text included. Hiding
    /// when nothing is shown is a no-op.
    pub fn loading(&mut self, show: bool, text: &str) {
        if show {
            if self.loading.is_some() {
                return;
            }
            let overlay = self.surface.create_element("div");
            self.surface.add_class(overlay, "eph-spinner-overlay");
            let spinner = self.surface.create_element("div");
            self.surface.add_class(spinner, "eph-spinner");
            self.surface.append_child(overlay, spinner);
            if !text.is_empty() {
                let caption = self.surface.create_element("div");
                self.surface.add_class(caption, "eph-spinner-text");
                self.surface.set_markup(caption, text);
                self.surface.append_child(overlay, caption);
            }
            let body = self.surface.body();
            self.surface.append_child(body, overlay);
            self.loading = Some(overlay);
            tracing::debug!("loading overlay shown");
        } else if let Some(overlay) = self.loading.take() {
            self.surface.detach(overlay);
            tracing::debug!("loading overlay hidden");
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Document;

    #[test]
    fn overlay_is_a_singleton() {
        let mut manager = Manager::new(Document::new());
        manager.loading(true, "Saving");
        manager.loading(true, "Saving again");

        let overlays = manager.surface().query_all(".eph-spinner-overlay");
        assert_eq!(overlays.len(), 1);
        let caption = manager.surface().query(".eph-spinner-text").expect("caption");
        assert_eq!(manager.surface().markup(caption), Some("Saving"));
        assert!(manager.is_loading());
    }

    #[test]
    fn hide_removes_and_second_hide_is_noop() {
        let mut manager = Manager::new(Document::new());
        manager.loading(true, "");
        assert!(manager.surface().query(".eph-spinner-text").is_none());

        manager.loading(false, "");
        assert!(manager.surface().query(".eph-spinner-overlay").is_none());
        assert!(!manager.is_loading());

        manager.loading(false, "");
        assert!(!manager.is_loading());
    }

    #[test]
    fn can_show_again_after_hiding() {
        let mut manager = Manager::new(Document::new());
        manager.loading(true, "one");
        manager.loading(false, "");
        manager.loading(true, "two");

        let caption = manager.surface().query(".eph-spinner-text").expect("caption");
        assert_eq!(manager.surface().markup(caption), Some("two"));
    }

    #[test]
    fn dismiss_all_clears_the_singleton() {
        let mut manager = Manager::new(Document::new());
        manager.loading(true, "busy");
        manager.dismiss_all();

        assert!(!manager.is_loading());
        assert!(manager.surface().query(".eph-spinner-overlay").is_none());
        manager.loading(true, "again");
        assert_eq!(manager.surface().query_all(".eph-spinner-overlay").len(), 1);
    }
}
