// SPDX-License-Identifier: MPL-2.0
//! Context menus positioned at a point.

use super::handle::Handle;
use super::manager::{Binding, Manager, Scheduled};
use super::registry::{Callback, Hooks, Instance};
use crate::config::OUTSIDE_CLICK_ARM_MS;
use crate::domain::overlay::{InstanceId, Kind};
use crate::surface::Surface;
use crate::ui::placement::place;
use iced_core::Point;
use std::fmt;
use std::time::Duration;

/// One entry of a context menu.
pub struct MenuItem {
    pub text: String,
    pub on_click: Option<Callback>,
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("text", &self.text)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

impl MenuItem {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            on_click: None,
        }
    }

    #[must_use]
    pub fn on_click(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }
}

/// Options for [`Manager::context_menu`].
#[derive(Debug)]
pub struct ContextMenuOptions {
    pub position: Point,
    pub items: Vec<MenuItem>,
}

impl ContextMenuOptions {
    #[must_use]
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn item(mut self, item: MenuItem) -> Self {
        self.items.push(item);
        self
    }
}

impl<S: Surface> Manager<S> {
    /// Opens a context menu.
    ///
    /// Clicking an item runs its callback and closes the menu. Shortly after
    /// opening, a pointer-down outside the menu closes it as well.
    pub fn context_menu(&mut self, options: ContextMenuOptions) -> Handle {
        let id = InstanceId::generate(Kind::Context.id_prefix());

        let el = self.surface.create_element("div");
        self.surface.add_class(el, "eph-context");

        let mut labels = Vec::with_capacity(options.items.len());
        let mut callbacks = Vec::with_capacity(options.items.len());
        for (index, item) in options.items.into_iter().enumerate() {
            let button = self.surface.create_element("button");
            self.surface.set_text(button, &item.text);
            self.surface.append_child(el, button);
            self.bind(button, Binding::MenuItem(id.clone(), index));
            labels.push(item.text);
            callbacks.push(item.on_click);
        }

        let body = self.surface.body();
        self.surface.append_child(body, el);
        place(&mut self.surface, el, options.position, None);

        let mut instance = Instance::new(id.clone(), Kind::Context, el)
            .with_meta("x", options.position.x)
            .with_meta("y", options.position.y)
            .with_meta("items", labels);
        instance.hooks = Hooks::Menu(callbacks);
        instance.wakeups.push(self.schedule(
            Duration::from_millis(OUTSIDE_CLICK_ARM_MS),
            Scheduled::ArmOutsideClick(id),
        ));

        let id = self.register(instance, false, None);
        Handle::new(id, el)
    }
}
