// SPDX-License-Identifier: MPL-2.0
//! Ephemeral overlays: toasts, snackbars, banners, tooltips, progress toasts,
//! context menus, badges, highlights, quick inputs, modals and the loading
//! overlay.
//!
//! Everything hangs off [`Manager`], which owns a [`Surface`] and the
//! registry of live instances.
//!
//! # Components
//!
//! - [`manager`] - lifecycle, event routing, generic `get`/`update`/`remove`
//! - [`registry`] - live instances and their metadata
//! - [`pending`] - single-resolution modal results
//! - [`handle`] - per-kind control handles
//!
//! # Usage
//!
//! ```ignore
//! use ephemera::surface::Document;
//! use ephemera::ui::ephemeral::{Manager, ToastOptions};
//!
//! let mut manager = Manager::new(Document::new());
//! let toast = manager.toast(ToastOptions::new("Saved"));
//! manager.advance(std::time::Duration::from_millis(16));
//! toast.update(&mut manager, "Saved twice");
//! ```
//!
//! [`Surface`]: crate::surface::Surface

mod badge;
mod banner;
mod containers;
mod context_menu;
pub mod handle;
mod highlight;
mod loading;
pub mod manager;
mod modal;
pub mod pending;
mod progress;
mod quick_input;
pub mod registry;
mod snackbar;
mod toast;
mod tooltip;

pub use badge::BadgeOptions;
pub use banner::BannerOptions;
pub use containers::{ensure_container, ensure_root, ROOT_CLASS, ROOT_ID};
pub use context_menu::{ContextMenuOptions, MenuItem};
pub use handle::{Handle, ProgressHandle, ToastHandle};
pub use highlight::HighlightOptions;
pub use manager::{ConfigPatch, Event, InstanceUpdate, Labels, Manager, Settings, ACCENT_PROPERTY};
pub use modal::{
    AlertOptions, ConfirmOptions, ModalButton, ModalContent, ModalOptions, PromptOptions,
};
pub use pending::{ButtonValue, ModalResult, Pending, Unresolved};
pub use progress::ProgressOptions;
pub use quick_input::QuickInputOptions;
pub use registry::{Callback, Instance, Meta, MetaValue, Registry, SubmitCallback};
pub use snackbar::SnackbarOptions;
pub use toast::ToastOptions;
pub use tooltip::{Target, TooltipOptions};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FRAME_INTERVAL_MS;
    use crate::domain::overlay::Kind;
    use crate::surface::{Document, Surface};
    use crate::test_utils::{attach_target, rect};
    use std::time::Duration;

    fn populated() -> (Manager<Document>, Pending<bool>, Pending<ModalResult>) {
        let mut doc = Document::new();
        attach_target(&mut doc, "save", rect(40.0, 40.0, 80.0, 24.0));
        let mut manager = Manager::new(doc);

        manager.toast(ToastOptions::new("one"));
        manager.snackbar(SnackbarOptions::new("two").action("Undo", || {}));
        manager.banner(BannerOptions::new("three"));
        manager.tooltip(TooltipOptions::new("#save", "Save"));
        manager.progress(ProgressOptions::new().text("Uploading"));
        manager.context_menu(ContextMenuOptions::at(4.0, 4.0).item(MenuItem::new("Copy")));
        manager.badge(BadgeOptions::new("#save", "1"));
        manager.highlight(HighlightOptions::new("#save"));
        manager.quick_input(QuickInputOptions::new());
        let confirm = manager.confirm(ConfirmOptions::new("Sure?"));
        let modal = manager.base_modal(ModalOptions::new("Raw"));
        manager.loading(true, "busy");
        (manager, confirm, modal)
    }

    #[test]
    fn every_kind_is_registered_once() {
        let (manager, _, _) = populated();
        for kind in [
            Kind::Toast,
            Kind::Snackbar,
            Kind::Banner,
            Kind::Tooltip,
            Kind::Progress,
            Kind::Context,
            Kind::Badge,
            Kind::Highlight,
            Kind::QuickInput,
        ] {
            assert_eq!(manager.registry().count_of(kind), 1, "{kind}");
        }
        assert_eq!(manager.open_modals(), 2);
    }

    #[test]
    fn dismiss_all_empties_everything() {
        let (mut manager, mut confirm, mut modal) = populated();
        manager.dismiss_all();

        assert!(manager.registry().is_empty());
        assert_eq!(manager.open_modals(), 0);
        assert!(!manager.is_loading());
        assert_eq!(manager.surface().pending_wakeups(), 0);
        assert!(manager
            .surface()
            .query_all(".eph-mask, .eph-spinner-overlay")
            .is_empty());
        assert_eq!(confirm.try_take(), Some(false));
        assert_eq!(modal.try_take(), Some(ModalResult::Dismissed));
    }

    #[test]
    fn nothing_fires_after_dismiss_all() {
        let (mut manager, _, _) = populated();
        manager.dismiss_all();
        manager.advance(Duration::from_secs(60));

        assert!(manager.registry().is_empty());
        let toasts = manager.surface().query_all(".eph-toast");
        assert!(toasts.is_empty());
    }

    #[test]
    fn dismiss_all_sweeps_stray_masks() {
        let mut manager = Manager::new(Document::new());
        let stray = manager.surface_mut().create_element("div");
        manager.surface_mut().add_class(stray, "eph-mask");
        let body = manager.surface().body();
        manager.surface_mut().append_child(body, stray);

        manager.dismiss_all();
        assert!(!manager.surface().is_attached(stray));
    }

    #[test]
    fn factories_keep_working_after_dismiss_all() {
        let (mut manager, _, _) = populated();
        manager.dismiss_all();

        let toast = manager.toast(ToastOptions::new("fresh"));
        manager.advance(Duration::from_millis(FRAME_INTERVAL_MS));
        assert!(manager.surface().has_class(toast.element(), "show"));
        assert_eq!(manager.registry().len(), 1);
    }
}
