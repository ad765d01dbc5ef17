// SPDX-License-Identifier: MPL-2.0
//! Overlay lifecycle management.
//!
//! The `Manager` owns the render surface, the registry of live instances and
//! every pending wakeup. Hosts drive it with [`Manager::advance`] (time) and
//! [`Manager::handle`] (input). Factories for each overlay kind live in the
//! sibling modules and are all methods on `Manager`.

use super::containers;
use super::pending::{ButtonValue, ModalResult, Resolver};
use super::registry::{Hooks, Instance, Meta, MetaValue, Registry};
use crate::config::{self, Config};
use crate::domain::overlay::{Anchor, InstanceId, Kind};
use crate::domain::ui::newtypes::{Lifetime, ProgressPercent};
use crate::i18n::I18n;
use crate::surface::{Key, NodeId, Surface, WakeupId};
use crate::ui::design_tokens::{palette, parse_hex, to_hex};
use crate::ui::stylesheet;
use iced_core::Color;
use std::collections::{BTreeSet, HashMap};
use std::time::Duration;

/// Document style property carrying the accent colour.
pub const ACCENT_PROPERTY: &str = "--eph-accent";

/// Class toggled to run entrance and exit transitions.
pub(crate) const SHOW_CLASS: &str = "show";

// =============================================================================
// Settings
// =============================================================================

/// Defaults applied to newly created overlays.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub accent: Color,
    /// Toast lifetime, and the fallback for anything without its own.
    pub default_duration: Duration,
    pub snackbar_duration: Duration,
    pub tooltip_duration: Duration,
    pub badge_duration: Duration,
    pub highlight_duration: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            accent: palette::ACCENT_500,
            default_duration: Duration::from_millis(config::DEFAULT_DURATION_MS),
            snackbar_duration: Duration::from_millis(config::DEFAULT_SNACKBAR_DURATION_MS),
            tooltip_duration: Duration::from_millis(config::DEFAULT_TOOLTIP_DURATION_MS),
            badge_duration: Duration::from_millis(config::DEFAULT_BADGE_DURATION_MS),
            highlight_duration: Duration::from_millis(config::DEFAULT_HIGHLIGHT_DURATION_MS),
        }
    }
}

impl Settings {
    /// Derives runtime settings from a loaded config.
    ///
    /// Durations are clamped to the accepted lifetime range; an unparsable
    /// accent falls back to the default one.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        let lifetime = |ms: Option<u64>, fallback: Duration| {
            ms.map_or(fallback, |ms| Lifetime::from_millis(ms).as_duration())
        };

        let accent = match config.appearance.accent.as_deref() {
            Some(raw) => parse_hex(raw).unwrap_or_else(|| {
                tracing::warn!(accent = raw, "ignoring invalid accent colour");
                defaults.accent
            }),
            None => defaults.accent,
        };

        let timing = &config.timing;
        Self {
            accent,
            default_duration: lifetime(timing.default_duration_ms, defaults.default_duration),
            snackbar_duration: lifetime(timing.snackbar_duration_ms, defaults.snackbar_duration),
            tooltip_duration: lifetime(timing.tooltip_duration_ms, defaults.tooltip_duration),
            badge_duration: lifetime(timing.badge_duration_ms, defaults.badge_duration),
            highlight_duration: lifetime(timing.highlight_duration_ms, defaults.highlight_duration),
        }
    }
}

/// Partial update of [`Settings`] applied by [`Manager::configure`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfigPatch {
    pub accent: Option<Color>,
    pub default_duration: Option<Duration>,
}

impl ConfigPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = Some(accent);
        self
    }

    #[must_use]
    pub fn default_duration(mut self, duration: Duration) -> Self {
        self.default_duration = Some(duration);
        self
    }
}

// =============================================================================
// Labels
// =============================================================================

/// Default texts for buttons and titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub ok: String,
    pub cancel: String,
    pub send: String,
    pub working: String,
    pub type_placeholder: String,
    pub close: String,
    pub alert_title: String,
    pub confirm_title: String,
    pub confirm_text: String,
    pub prompt_title: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            ok: "OK".to_string(),
            cancel: "Cancel".to_string(),
            send: "Send".to_string(),
            working: "Working...".to_string(),
            type_placeholder: "Type...".to_string(),
            close: "Close".to_string(),
            alert_title: "Alert".to_string(),
            confirm_title: "Confirm".to_string(),
            confirm_text: "Are you sure?".to_string(),
            prompt_title: "Input".to_string(),
        }
    }
}

impl Labels {
    /// Reads every label from the current locale, keeping the built-in
    /// English text for keys the catalogue lacks.
    #[must_use]
    pub fn from_i18n(i18n: &I18n) -> Self {
        let defaults = Self::default();
        let pick = |key: &str, fallback: String| i18n.try_tr(key).unwrap_or(fallback);
        Self {
            ok: pick("label-ok", defaults.ok),
            cancel: pick("label-cancel", defaults.cancel),
            send: pick("label-send", defaults.send),
            working: pick("label-working", defaults.working),
            type_placeholder: pick("label-type-placeholder", defaults.type_placeholder),
            close: pick("label-close", defaults.close),
            alert_title: pick("modal-alert-title", defaults.alert_title),
            confirm_title: pick("modal-confirm-title", defaults.confirm_title),
            confirm_text: pick("modal-confirm-text", defaults.confirm_text),
            prompt_title: pick("modal-prompt-title", defaults.prompt_title),
        }
    }
}

// =============================================================================
// Events
// =============================================================================

/// Input and timing events delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A click whose innermost target is the given node.
    Click(NodeId),
    /// A key press while the given node has focus.
    KeyDown { target: NodeId, key: Key },
    /// A pointer press anywhere in the document.
    PointerDown(NodeId),
    /// A wakeup reported by the surface outside of [`Manager::advance`].
    Wakeup(WakeupId),
}

/// Deferred work keyed by wakeup token.
#[derive(Debug, Clone)]
pub(super) enum Scheduled {
    /// Add the `show` class.
    Reveal(Vec<NodeId>),
    /// Lifetime elapsed.
    Expire(InstanceId),
    /// Exit transition finished.
    Finish(InstanceId),
    ArmOutsideClick(InstanceId),
    Focus(NodeId),
    Detach(NodeId),
}

/// What a bound node does when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Binding {
    Close(InstanceId),
    Action(InstanceId),
    MenuItem(InstanceId, usize),
    Submit(InstanceId),
    Field(InstanceId),
    ModalClose(InstanceId),
    ModalButton(InstanceId, usize),
    /// Fires only when the click target is the backdrop itself.
    Backdrop(InstanceId),
}

impl Binding {
    fn owner(&self) -> &InstanceId {
        match self {
            Binding::Close(id)
            | Binding::Action(id)
            | Binding::MenuItem(id, _)
            | Binding::Submit(id)
            | Binding::Field(id)
            | Binding::ModalClose(id)
            | Binding::ModalButton(id, _)
            | Binding::Backdrop(id) => id,
        }
    }
}

/// An open modal.
#[derive(Debug)]
pub(super) struct ModalState {
    pub mask: NodeId,
    pub panel: NodeId,
    pub values: Vec<ButtonValue>,
    pub resolver: Resolver,
    pub wakeups: Vec<WakeupId>,
}

/// Fields of a generic [`Manager::update`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceUpdate {
    /// Replaces a toast's message.
    pub message: Option<String>,
    /// Replaces a progress toast's percent.
    pub progress: Option<f32>,
    /// Merged into the metadata of every other kind.
    pub meta: Meta,
}

impl InstanceUpdate {
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn progress(percent: f32) -> Self {
        Self {
            progress: Some(percent),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_meta(mut self, key: &str, value: impl Into<MetaValue>) -> Self {
        self.meta.insert(key.to_string(), value.into());
        self
    }
}

// =============================================================================
// Manager
// =============================================================================

/// Owns a surface and every overlay living on it.
pub struct Manager<S: Surface> {
    pub(super) surface: S,
    pub(super) settings: Settings,
    pub(super) labels: Labels,
    pub(super) registry: Registry,
    pub(super) scheduled: HashMap<WakeupId, Scheduled>,
    pub(super) bindings: HashMap<NodeId, Binding>,
    /// Context menus listening for outside pointer-down.
    pub(super) outside_watch: BTreeSet<InstanceId>,
    pub(super) modals: HashMap<InstanceId, ModalState>,
    pub(super) loading: Option<NodeId>,
}

impl<S: Surface + std::fmt::Debug> std::fmt::Debug for Manager<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Manager")
            .field("surface", &self.surface)
            .field("settings", &self.settings)
            .field("registry", &self.registry)
            .field("modals", &self.modals.len())
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

impl<S: Surface> Manager<S> {
    /// Creates a manager with default settings and English labels.
    pub fn new(surface: S) -> Self {
        Self::with_settings(surface, Settings::default(), Labels::default())
    }

    /// Creates a manager from a loaded config and translation catalogue.
    pub fn from_config(surface: S, config: &Config, i18n: &I18n) -> Self {
        Self::with_settings(surface, Settings::from_config(config), Labels::from_i18n(i18n))
    }

    /// Creates a manager, injecting the stylesheet and accent colour.
    pub fn with_settings(mut surface: S, settings: Settings, labels: Labels) -> Self {
        stylesheet::inject(&mut surface);
        let root = surface.document_element();
        surface.set_style(root, ACCENT_PROPERTY, &to_hex(settings.accent));
        Self {
            surface,
            settings,
            labels,
            registry: Registry::new(),
            scheduled: HashMap::new(),
            bindings: HashMap::new(),
            outside_watch: BTreeSet::new(),
            modals: HashMap::new(),
            loading: None,
        }
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for host-side edits (layout, typed input).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn set_labels(&mut self, labels: Labels) {
        self.labels = labels;
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Number of open modals.
    #[must_use]
    pub fn open_modals(&self) -> usize {
        self.modals.len()
    }

    /// Updates the defaults used by overlays created from now on.
    ///
    /// Live overlays keep their own colours and timers.
    pub fn configure(&mut self, patch: ConfigPatch) {
        if let Some(accent) = patch.accent {
            self.settings.accent = accent;
            let root = self.surface.document_element();
            self.surface
                .set_style(root, ACCENT_PROPERTY, &to_hex(accent));
        }
        if let Some(duration) = patch.default_duration {
            self.settings.default_duration = duration;
        }
        tracing::debug!(?patch, "overlay defaults updated");
    }

    // -------------------------------------------------------------------------
    // Driving
    // -------------------------------------------------------------------------

    /// Moves the surface clock forward by `elapsed`, running every wakeup
    /// that falls due on the way, in due order.
    pub fn advance(&mut self, elapsed: Duration) {
        let deadline = self.surface.now().saturating_add(elapsed);
        while let Some(wakeup) = self.surface.next_wakeup(deadline) {
            self.dispatch(wakeup);
        }
    }

    /// Routes one host event.
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Wakeup(wakeup) => self.dispatch(wakeup),
            Event::Click(target) => self.on_click(target),
            Event::KeyDown { target, key } => self.on_key(target, &key),
            Event::PointerDown(target) => self.on_pointer_down(target),
        }
    }

    fn dispatch(&mut self, wakeup: WakeupId) {
        let Some(action) = self.scheduled.remove(&wakeup) else {
            tracing::trace!(?wakeup, "stale wakeup ignored");
            return;
        };
        tracing::trace!(?wakeup, ?action, "wakeup");
        match action {
            Scheduled::Reveal(nodes) => {
                for node in nodes {
                    if self.surface.is_attached(node) {
                        self.surface.add_class(node, SHOW_CLASS);
                    }
                }
            }
            Scheduled::Expire(id) => {
                if let Some(instance) = self.registry.get_mut(&id) {
                    instance.timer = None;
                }
                self.dismiss(&id);
            }
            Scheduled::Finish(id) => {
                self.finish(&id);
            }
            Scheduled::ArmOutsideClick(id) => {
                if self.registry.contains(&id) {
                    self.outside_watch.insert(id);
                }
            }
            Scheduled::Focus(node) => self.surface.focus(node),
            Scheduled::Detach(node) => {
                self.surface.detach(node);
            }
        }
    }

    /// Finds the nearest bound node from `target` up, honouring the
    /// exact-target rule of backdrops.
    fn binding_for(&self, target: NodeId) -> Option<Binding> {
        let mut current = Some(target);
        while let Some(node) = current {
            if let Some(binding) = self.bindings.get(&node) {
                let exact_only = matches!(binding, Binding::Backdrop(_));
                if !exact_only || node == target {
                    return Some(binding.clone());
                }
            }
            current = self.surface.parent(node);
        }
        None
    }

    fn on_click(&mut self, target: NodeId) {
        let Some(binding) = self.binding_for(target) else {
            return;
        };
        tracing::trace!(?target, ?binding, "click");
        match binding {
            Binding::Close(id) => {
                self.dismiss(&id);
            }
            Binding::Action(id) => self.run_action(&id),
            Binding::MenuItem(id, index) => self.run_menu_item(&id, index),
            Binding::Submit(id) => self.submit_quick_input(&id),
            Binding::Field(_) => {}
            Binding::ModalClose(id) => self.close_modal(&id, ModalResult::Cancelled),
            Binding::ModalButton(id, index) => {
                let value = self
                    .modals
                    .get(&id)
                    .and_then(|modal| modal.values.get(index).cloned());
                if let Some(value) = value {
                    self.close_modal(&id, ModalResult::Ok(value));
                }
            }
            Binding::Backdrop(id) => self.close_modal(&id, ModalResult::Dismissed),
        }
    }

    fn on_key(&mut self, target: NodeId, key: &Key) {
        let Some(Binding::Field(id)) = self.bindings.get(&target).cloned() else {
            return;
        };
        match key {
            Key::Enter => self.submit_quick_input(&id),
            Key::Escape => self.cancel_quick_input(&id),
            Key::Character(_) => {}
        }
    }

    fn on_pointer_down(&mut self, target: NodeId) {
        let outside: Vec<InstanceId> = self
            .outside_watch
            .iter()
            .filter(|id| {
                self.registry
                    .get(id)
                    .is_some_and(|menu| !self.surface.contains(menu.element(), target))
            })
            .cloned()
            .collect();
        for id in outside {
            tracing::trace!(%id, "outside pointer-down closes menu");
            self.finish(&id);
        }
    }

    // -------------------------------------------------------------------------
    // Scheduling helpers
    // -------------------------------------------------------------------------

    pub(super) fn schedule(&mut self, delay: Duration, action: Scheduled) -> WakeupId {
        let wakeup = self.surface.schedule(delay);
        self.scheduled.insert(wakeup, action);
        wakeup
    }

    pub(super) fn on_next_frame(&mut self, action: Scheduled) -> WakeupId {
        let wakeup = self.surface.request_frame();
        self.scheduled.insert(wakeup, action);
        wakeup
    }

    pub(super) fn cancel(&mut self, wakeup: WakeupId) {
        self.surface.cancel(wakeup);
        self.scheduled.remove(&wakeup);
    }

    pub(super) fn bind(&mut self, node: NodeId, binding: Binding) {
        self.bindings.insert(node, binding);
    }

    fn unbind_owner(&mut self, owner: &InstanceId) {
        self.bindings.retain(|_, binding| binding.owner() != owner);
    }

    /// Registers `instance`, arming its entrance frame and lifetime.
    pub(super) fn register(
        &mut self,
        mut instance: Instance,
        reveal: bool,
        lifetime: Option<Duration>,
    ) -> InstanceId {
        let id = instance.id().clone();
        if reveal {
            let wakeup = self.on_next_frame(Scheduled::Reveal(vec![instance.element()]));
            instance.wakeups.push(wakeup);
        }
        if let Some(lifetime) = lifetime {
            instance.timer = Some(self.schedule(lifetime, Scheduled::Expire(id.clone())));
        }
        tracing::debug!(%id, kind = %instance.kind(), "overlay created");
        self.registry.insert(instance)
    }

    // -------------------------------------------------------------------------
    // Teardown
    // -------------------------------------------------------------------------

    /// Dismisses an instance the way its kind leaves the screen: toasts and
    /// progress toasts fade out first, everything else goes at once.
    ///
    /// Returns `false` for unknown ids and for instances already leaving.
    pub(super) fn dismiss(&mut self, id: &InstanceId) -> bool {
        let Some(kind) = self.registry.get(id).map(Instance::kind) else {
            return false;
        };
        match kind {
            Kind::Toast | Kind::Progress => self.begin_exit(id),
            _ => self.finish(id),
        }
    }

    fn begin_exit(&mut self, id: &InstanceId) -> bool {
        let Some(instance) = self.registry.get_mut(id) else {
            return false;
        };
        if instance.leaving {
            return false;
        }
        instance.leaving = true;
        let element = instance.element();
        let mut tokens = std::mem::take(&mut instance.wakeups);
        tokens.extend(instance.timer.take());

        for wakeup in tokens {
            self.cancel(wakeup);
        }
        self.unbind_owner(id);
        self.surface.remove_class(element, SHOW_CLASS);
        let exit = self.schedule(
            Duration::from_millis(config::TOAST_EXIT_MS),
            Scheduled::Finish(id.clone()),
        );
        if let Some(instance) = self.registry.get_mut(id) {
            instance.wakeups.push(exit);
        }
        tracing::debug!(%id, "overlay leaving");
        true
    }

    /// Detaches and unregisters at once. Idempotent.
    pub(super) fn finish(&mut self, id: &InstanceId) -> bool {
        let Some(instance) = self.registry.remove(id) else {
            return false;
        };
        for wakeup in instance.wakeups.iter().copied().chain(instance.timer) {
            self.cancel(wakeup);
        }
        self.unbind_owner(id);
        self.outside_watch.remove(id);
        self.surface.detach(instance.element());
        tracing::debug!(%id, kind = %instance.kind(), "overlay removed");
        true
    }

    // -------------------------------------------------------------------------
    // Generic accessors
    // -------------------------------------------------------------------------

    /// Looks up a live instance.
    #[must_use]
    pub fn get(&self, id: &InstanceId) -> Option<&Instance> {
        self.registry.get(id)
    }

    /// Removes any instance immediately, skipping exit transitions.
    ///
    /// Returns `false` when the id is unknown.
    pub fn remove(&mut self, id: &InstanceId) -> bool {
        self.finish(id)
    }

    /// Applies `update` according to the instance kind.
    ///
    /// Toasts take `message`, progress toasts take `progress`; for anything
    /// else the fields are merged into the metadata. Returns `false` when the
    /// id is unknown.
    pub fn update(&mut self, id: &InstanceId, update: InstanceUpdate) -> bool {
        let Some(kind) = self.registry.get(id).map(Instance::kind) else {
            return false;
        };
        let InstanceUpdate {
            message,
            progress,
            mut meta,
        } = update;

        match (kind, message, progress) {
            (Kind::Toast, Some(message), _) => self.set_toast_message(id, &message),
            (Kind::Progress, _, Some(percent)) => self.set_progress(id, percent).is_some(),
            (_, message, progress) => {
                if let Some(message) = message {
                    meta.insert("message".to_string(), message.into());
                }
                if let Some(progress) = progress {
                    meta.insert("progress".to_string(), progress.into());
                }
                match self.registry.get_mut(id) {
                    Some(instance) => {
                        instance.meta_mut().extend(meta);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    pub(super) fn set_toast_message(&mut self, id: &InstanceId, message: &str) -> bool {
        let Some(instance) = self.registry.get_mut(id) else {
            return false;
        };
        let Some(text) = instance.parts.text else {
            return false;
        };
        instance
            .meta_mut()
            .insert("message".to_string(), message.into());
        self.surface.set_text(text, message);
        true
    }

    /// Clamps and stores `percent`, redrawing the bar.
    pub(super) fn set_progress(&mut self, id: &InstanceId, percent: f32) -> Option<ProgressPercent> {
        let instance = self.registry.get_mut(id)?;
        let bar = instance.parts.bar?;
        let percent = ProgressPercent::new(percent);
        instance
            .meta_mut()
            .insert("progress".to_string(), percent.value().into());
        self.surface
            .set_style(bar, "width", &format!("{}%", percent.bar_width()));
        Some(percent)
    }

    /// Removes every live overlay, open modal and loading overlay.
    pub fn dismiss_all(&mut self) {
        let ids = self.registry.ids();
        let count = ids.len();
        for id in &ids {
            self.finish(id);
        }

        let modal_ids: Vec<InstanceId> = self.modals.keys().cloned().collect();
        for id in modal_ids {
            if let Some(modal) = self.modals.remove(&id) {
                self.surface.detach(modal.mask);
                modal.resolver.settle(ModalResult::Dismissed, &self.surface);
            }
        }

        // Nothing is left to wake up for.
        let pending: Vec<WakeupId> = self.scheduled.keys().copied().collect();
        for wakeup in pending {
            self.cancel(wakeup);
        }
        self.bindings.clear();
        self.outside_watch.clear();

        for stray in self.surface.query_all(".eph-mask, .eph-spinner-overlay") {
            self.surface.detach(stray);
        }
        self.loading = None;
        tracing::debug!(count, "all overlays dismissed");
    }

    // -------------------------------------------------------------------------
    // Interaction
    // -------------------------------------------------------------------------

    fn take_hooks(&mut self, id: &InstanceId) -> Hooks {
        self.registry
            .get_mut(id)
            .map(|instance| std::mem::take(&mut instance.hooks))
            .unwrap_or_default()
    }

    fn run_action(&mut self, id: &InstanceId) {
        let callback = match self.take_hooks(id) {
            Hooks::Action(callback) => callback,
            _ => None,
        };
        if let Some(callback) = callback {
            callback();
        }
        self.dismiss(id);
    }

    fn run_menu_item(&mut self, id: &InstanceId, index: usize) {
        let callback = match self.take_hooks(id) {
            Hooks::Menu(mut items) if index < items.len() => items.swap_remove(index),
            _ => None,
        };
        if let Some(callback) = callback {
            callback();
        }
        self.finish(id);
    }

    pub(super) fn submit_quick_input(&mut self, id: &InstanceId) {
        let Some(input) = self.registry.get(id).and_then(|i| i.parts.input) else {
            return;
        };
        let value = self.surface.value(input);
        let on_submit = match self.take_hooks(id) {
            Hooks::QuickInput { on_submit, .. } => on_submit,
            _ => None,
        };
        if let Some(on_submit) = on_submit {
            on_submit(value);
        }
        self.finish(id);
    }

    pub(super) fn cancel_quick_input(&mut self, id: &InstanceId) {
        if !self.registry.contains(id) {
            return;
        }
        let on_cancel = match self.take_hooks(id) {
            Hooks::QuickInput { on_cancel, .. } => on_cancel,
            _ => None,
        };
        if let Some(on_cancel) = on_cancel {
            on_cancel();
        }
        self.finish(id);
    }

    /// Starts the modal exit transition and settles its result.
    pub(super) fn close_modal(&mut self, id: &InstanceId, outcome: ModalResult) {
        let Some(modal) = self.modals.remove(id) else {
            return;
        };
        for wakeup in &modal.wakeups {
            self.cancel(*wakeup);
        }
        self.unbind_owner(id);
        self.surface.remove_class(modal.mask, SHOW_CLASS);
        self.surface.remove_class(modal.panel, SHOW_CLASS);
        self.schedule(
            Duration::from_millis(config::MODAL_EXIT_MS),
            Scheduled::Detach(modal.mask),
        );
        tracing::debug!(%id, ?outcome, "modal closed");
        modal.resolver.settle(outcome, &self.surface);
    }

    pub(super) fn container(&mut self, anchor: Anchor) -> NodeId {
        containers::ensure_container(&mut self.surface, anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Document;
    use crate::ui::ephemeral::ToastOptions;

    fn manager() -> Manager<Document> {
        Manager::new(Document::new())
    }

    #[test]
    fn new_manager_injects_stylesheet_and_accent() {
        let manager = manager();
        let doc = manager.surface();
        assert!(doc.find_by_id(stylesheet::STYLE_ELEMENT_ID).is_some());
        assert_eq!(
            doc.style(doc.document_element(), ACCENT_PROPERTY),
            Some("#3b82f6")
        );
    }

    #[test]
    fn configure_updates_accent_and_default_duration() {
        let mut manager = manager();
        manager.configure(
            ConfigPatch::new()
                .accent(palette::SUCCESS_500)
                .default_duration(Duration::from_millis(500)),
        );

        assert_eq!(manager.settings().default_duration, Duration::from_millis(500));
        let doc = manager.surface();
        assert_eq!(
            doc.style(doc.document_element(), ACCENT_PROPERTY),
            Some("#10b981")
        );
    }

    #[test]
    fn configure_with_empty_patch_keeps_settings() {
        let mut manager = manager();
        let before = manager.settings().clone();
        manager.configure(ConfigPatch::default());
        assert_eq!(manager.settings(), &before);
    }

    #[test]
    fn settings_from_config_clamps_durations() {
        let mut config = Config::default();
        config.timing.default_duration_ms = Some(1);
        config.timing.tooltip_duration_ms = Some(u64::MAX);

        let settings = Settings::from_config(&config);
        assert_eq!(settings.default_duration, Duration::from_millis(config::MIN_DURATION_MS));
        assert_eq!(settings.tooltip_duration, Duration::from_millis(config::MAX_DURATION_MS));
    }

    #[test]
    fn settings_from_config_rejects_bad_accent() {
        let mut config = Config::default();
        config.appearance.accent = Some("chartreuse".to_string());
        assert_eq!(Settings::from_config(&config).accent, palette::ACCENT_500);

        config.appearance.accent = Some("#ef4444".to_string());
        assert_eq!(Settings::from_config(&config).accent, palette::ERROR_500);
    }

    #[test]
    fn labels_follow_locale() {
        let i18n = I18n::new(Some("fr".to_string()), &Config::default());
        let labels = Labels::from_i18n(&i18n);
        assert_eq!(labels.cancel, "Annuler");
    }

    #[test]
    fn generic_accessors_reject_unknown_ids() {
        let mut manager = manager();
        let ghost = InstanceId::from("toast-0-000000");
        assert!(manager.get(&ghost).is_none());
        assert!(!manager.remove(&ghost));
        assert!(!manager.update(&ghost, InstanceUpdate::message("x")));
    }

    #[test]
    fn stale_wakeup_event_is_ignored() {
        let mut manager = manager();
        let wakeup = manager.surface_mut().schedule(Duration::from_millis(1));
        manager.handle(Event::Wakeup(wakeup));
        assert!(manager.registry().is_empty());
    }

    #[test]
    fn huge_durations_saturate_the_clock() {
        let mut manager = manager();
        manager.advance(Duration::from_millis(config::FRAME_INTERVAL_MS));
        let toast = manager.toast(ToastOptions::new("forever").duration(Duration::MAX));

        manager.advance(Duration::MAX);
        manager.advance(Duration::MAX);
        assert!(manager.get(toast.id()).is_none());
        assert_eq!(manager.surface().pending_wakeups(), 0);
    }

    #[test]
    fn dismiss_all_on_empty_manager_is_harmless() {
        let mut manager = manager();
        manager.dismiss_all();
        manager.dismiss_all();
        assert!(manager.registry().is_empty());
        assert_eq!(manager.surface().pending_wakeups(), 0);
    }
}
